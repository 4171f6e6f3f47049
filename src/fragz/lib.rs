//! # Fragz Architecture
//!
//! Fragz stitches an ordered list of Mermaid diagram fragments into a single
//! diagram file and hands the result to the clipboard. The merge is a library
//! operation; the `fragz` binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders messages, picks exit codes     │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the store and the clipboard                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - merge, check, config                                     │
//! │  - Returns `CmdResult` with leveled messages                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)        Clipboard (clipboard.rs)     │
//! │  - FragmentStore trait         - Clipboard trait            │
//! │  - FileStore, InMemoryStore    - SystemClipboard            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Missing Fragments Are Not Errors
//!
//! A fragment that does not exist, or exists but cannot be read, is skipped
//! and reported as a diagnostic message. Only failing to write the output
//! (or a bad configuration) aborts a run.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: merge, check and config
//! - [`store`]: Fragment storage abstraction and implementations
//! - [`clipboard`]: Clipboard abstraction and the system implementation
//! - [`config`]: `fragz.json` loading and defaults
//! - [`model`]: Fragment references and statuses
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
