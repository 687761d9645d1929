//! Collaborators that supply candidate files and their contents.
use crate::walker::walk_roots;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub trait FileSource {
    /// Every file reachable under `roots`, in a stable order.
    fn enumerate(&self, roots: &[PathBuf]) -> Vec<PathBuf>;

    fn read_text(&self, path: &Path) -> io::Result<String>;
}

/// Reads straight from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource {
    pub respect_ignore: bool,
}

impl FsSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respect_ignore(mut self, yes: bool) -> Self {
        self.respect_ignore = yes;
        self
    }
}

impl FileSource for FsSource {
    fn enumerate(&self, roots: &[PathBuf]) -> Vec<PathBuf> {
        walk_roots(roots, self.respect_ignore)
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}
