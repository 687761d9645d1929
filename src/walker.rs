use crate::scope::normalize_path;
use ignore::WalkBuilder;
use log::{debug, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Every file under `roots`, root by root, siblings in file-name order.
///
/// With `respect_ignore` off the walk is exhaustive: hidden files and
/// gitignored paths are included. Symlinks to files are yielded; symlinked
/// directories are not descended into. A file reachable from two roots is
/// yielded once.
pub fn walk_roots(roots: &[PathBuf], respect_ignore: bool) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for root in roots {
        if !root.exists() {
            warn!("Search root does not exist: {}", root.display());
            continue;
        }
        for path in walk_dir(root, respect_ignore) {
            if seen.insert(normalize_path(&path)) {
                files.push(path);
            }
        }
    }
    files
}

fn walk_dir(path: &Path, respect_ignore: bool) -> impl Iterator<Item = PathBuf> {
    WalkBuilder::new(path)
        .standard_filters(respect_ignore)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| match entry.file_type() {
            Some(t) if t.is_symlink() => entry.path().is_file(),
            Some(t) => t.is_file(),
            None => false,
        })
        .map(|entry| entry.into_path())
}
