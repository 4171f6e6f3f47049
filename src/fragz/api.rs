//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every fragz operation, whatever UI is driving it.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Terminal I/O**: No stdout, stderr, or exit codes
//!
//! ## Generic Over Store and Clipboard
//!
//! `FragzApi<S: FragmentStore, C: Clipboard>`:
//! - Production: `FragzApi<FileStore, SystemClipboard>`
//! - Testing: `FragzApi<InMemoryStore, RecordingClipboard>`

use crate::clipboard::Clipboard;
use crate::commands;
use crate::config::FragzConfig;
use crate::error::Result;
use crate::store::FragmentStore;
use std::path::{Path, PathBuf};

pub struct FragzApi<S: FragmentStore, C: Clipboard> {
    store: S,
    clipboard: C,
    root: PathBuf,
}

impl<S: FragmentStore, C: Clipboard> FragzApi<S, C> {
    pub fn new(store: S, clipboard: C, root: impl Into<PathBuf>) -> Self {
        Self {
            store,
            clipboard,
            root: root.into(),
        }
    }

    pub fn merge(
        &mut self,
        config: &FragzConfig,
        options: MergeOptions,
    ) -> Result<commands::CmdResult> {
        commands::merge::run(&mut self.store, &mut self.clipboard, config, options)
    }

    pub fn check(&self, config: &FragzConfig) -> Result<commands::CmdResult> {
        commands::check::run(&self.store, config)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.root, action)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::merge::MergeOptions;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
