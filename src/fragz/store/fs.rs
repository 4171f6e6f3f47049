use super::FragmentStore;
use crate::error::{FragzError, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}

impl FragmentStore for FileStore {
    fn read_fragment(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.resolve(name);
        if !path.is_file() {
            return Err(FragzError::FragmentNotFound(name.to_string()));
        }

        fs::read(&path).map_err(|source| match source.kind() {
            // Removed between the check and the read
            ErrorKind::NotFound => FragzError::FragmentNotFound(name.to_string()),
            _ => FragzError::FragmentRead {
                name: name.to_string(),
                source,
            },
        })
    }

    fn fragment_exists(&self, name: &str) -> bool {
        self.resolve(name).is_file()
    }

    fn fragment_path(&self, name: &str) -> PathBuf {
        self.resolve(name)
    }

    fn write_output(&mut self, output_path: &str, document: &[u8]) -> Result<PathBuf> {
        let path = self.resolve(output_path);
        let to_output_error = |source| FragzError::OutputWrite {
            path: path.clone(),
            source,
        };

        let mut file = fs::File::create(&path).map_err(to_output_error)?;
        file.write_all(document).map_err(to_output_error)?;
        file.flush().map_err(to_output_error)?;
        Ok(path)
    }
}
