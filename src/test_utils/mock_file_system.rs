//! In-memory file source for scanner tests
use crate::scope::normalize_path;
use crate::source::FileSource;
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

pub struct MockFileSystem {
    files: BTreeMap<PathBuf, Vec<u8>>,
    unreadable: HashSet<PathBuf>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: BTreeMap::new(),
            unreadable: HashSet::new(),
        }
    }

    pub fn create_file(&mut self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        self.files
            .insert(normalize_path(path.as_ref()), content.as_ref().to_vec());
    }

    /// Reads of `path` fail with a permission error.
    pub fn make_unreadable(&mut self, path: impl AsRef<Path>) {
        self.unreadable.insert(normalize_path(path.as_ref()));
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSource for MockFileSystem {
    fn enumerate(&self, roots: &[PathBuf]) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for root in roots {
            let root = normalize_path(root);
            for path in self.files.keys() {
                let under = root.as_os_str() == "." || path.starts_with(&root);
                if under && seen.insert(path.clone()) {
                    out.push(path.clone());
                }
            }
        }
        out
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        let key = normalize_path(path);
        if self.unreadable.contains(&key) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "unreadable"));
        }
        let bytes = self
            .files
            .get(&key)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))?;
        String::from_utf8(bytes.clone()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
