//! # Storage Layer
//!
//! The [`FragmentStore`] trait is everything the merger knows about the outside
//! world: where fragments come from and where the merged document goes.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage rooted at a working directory.
//!   Fragment names and the output path are resolved relative to that root.
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No filesystem access
//!   - Records every output write so tests can inspect it
//!
//! ## Missing Fragments
//!
//! A fragment that does not exist is reported as
//! [`FragzError::FragmentNotFound`](crate::error::FragzError::FragmentNotFound).
//! Any other failure to read an existing fragment is a
//! [`FragzError::FragmentRead`](crate::error::FragzError::FragmentRead). Callers
//! decide which of the two is recoverable.

use crate::error::Result;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub trait FragmentStore {
    /// Read the full bytes of a fragment.
    fn read_fragment(&self, name: &str) -> Result<Vec<u8>>;

    /// Whether the fragment exists, without reading it
    fn fragment_exists(&self, name: &str) -> bool;

    /// Where the fragment lives (for file-based stores)
    fn fragment_path(&self, name: &str) -> PathBuf;

    /// Replace the output document in full.
    fn write_output(&mut self, output_path: &str, document: &[u8]) -> Result<PathBuf>;
}
