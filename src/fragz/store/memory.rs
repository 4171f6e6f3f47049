use super::FragmentStore;
use crate::error::{FragzError, Result};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    fragments: HashMap<String, Vec<u8>>,
    unreadable: HashSet<String>,
    outputs: HashMap<String, Vec<u8>>,
    write_count: usize,
    read_only: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_fragment(&mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.fragments.insert(name.into(), content.into());
    }

    /// Registers a fragment that exists but fails every read.
    pub fn insert_unreadable(&mut self, name: impl Into<String>) {
        self.unreadable.insert(name.into());
    }

    /// Makes every subsequent output write fail with permission denied.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn output(&self, output_path: &str) -> Option<&[u8]> {
        self.outputs.get(output_path).map(Vec::as_slice)
    }

    pub fn write_count(&self) -> usize {
        self.write_count
    }
}

impl FragmentStore for InMemoryStore {
    fn read_fragment(&self, name: &str) -> Result<Vec<u8>> {
        if self.unreadable.contains(name) {
            return Err(FragzError::FragmentRead {
                name: name.to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            });
        }
        self.fragments
            .get(name)
            .cloned()
            .ok_or_else(|| FragzError::FragmentNotFound(name.to_string()))
    }

    fn fragment_exists(&self, name: &str) -> bool {
        self.fragments.contains_key(name) || self.unreadable.contains(name)
    }

    fn fragment_path(&self, name: &str) -> PathBuf {
        PathBuf::from(name)
    }

    fn write_output(&mut self, output_path: &str, document: &[u8]) -> Result<PathBuf> {
        if self.read_only {
            return Err(FragzError::OutputWrite {
                path: PathBuf::from(output_path),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "store is read-only"),
            });
        }
        self.outputs
            .insert(output_path.to_string(), document.to_vec());
        self.write_count += 1;
        Ok(PathBuf::from(output_path))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::config::FragzConfig;

    pub const OUTPUT: &str = "merged.mmd";

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_fragment(mut self, name: &str, content: &str) -> Self {
            self.store.insert_fragment(name, content);
            self
        }

        pub fn with_unreadable(mut self, name: &str) -> Self {
            self.store.insert_unreadable(name);
            self
        }

        pub fn read_only(mut self) -> Self {
            self.store.set_read_only(true);
            self
        }
    }

    /// Default config pointed at [`OUTPUT`] with the given fragment order.
    pub fn config_for(names: &[&str]) -> FragzConfig {
        FragzConfig {
            fragment_names: names.iter().map(|n| n.to_string()).collect(),
            output_path: OUTPUT.to_string(),
            ..FragzConfig::default()
        }
    }
}
