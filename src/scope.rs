//! Turns folder selections and the extension filter into a concrete scan plan.
use crate::error::{Result, ScopeGrepError};
use crate::query::{SearchConfiguration, normalize_extension};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

/// Where the project keeps its searchable trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLayout {
    /// Searched when no include folder is selected.
    pub default_root: PathBuf,
    /// Appended to the roots when the secondary repository is requested.
    pub secondary_root: PathBuf,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            default_root: PathBuf::from("."),
            secondary_root: PathBuf::from("Packages"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPlan {
    pub roots: Vec<PathBuf>,
    pub excluded_prefixes: Vec<PathBuf>,
    pub allowed_extensions: BTreeSet<String>,
}

pub fn resolve_plan(config: &SearchConfiguration, layout: &ProjectLayout) -> ScanPlan {
    let mut roots: Vec<PathBuf> = if config.include_roots.is_empty() {
        vec![normalize_path(&layout.default_root)]
    } else {
        config
            .include_roots
            .iter()
            .map(|p| normalize_path(p))
            .collect()
    };
    if config.include_secondary_root {
        roots.push(normalize_path(&layout.secondary_root));
    }

    let excluded_prefixes = config
        .exclude_roots
        .iter()
        .map(|p| normalize_path(p))
        .filter(|p| p.as_os_str() != ".")
        .collect();

    let allowed_extensions = config.extensions.enabled().map(str::to_string).collect();

    ScanPlan {
        roots,
        excluded_prefixes,
        allowed_extensions,
    }
}

impl ScanPlan {
    /// True when `path` lies strictly inside one of the excluded folders.
    /// A relative prefix and an absolute path (or the reverse) are compared
    /// after resolving the relative side against the working directory.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = normalize_path(path);
        self.excluded_prefixes.iter().any(|prefix| {
            if path.is_absolute() == prefix.is_absolute() {
                return path.starts_with(prefix) && path != *prefix;
            }
            match (absolutize(&path), absolutize(prefix)) {
                (Some(path), Some(prefix)) => path.starts_with(&prefix) && path != prefix,
                _ => false,
            }
        })
    }

    /// Files without an extension never pass.
    pub fn allows_extension(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self.allowed_extensions.contains(&normalize_extension(ext)),
            None => false,
        }
    }
}

/// Drops `.` components so `./Assets/a.cs` and `Assets/a.cs` compare equal.
pub fn normalize_path(path: &Path) -> PathBuf {
    let normalized: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

fn absolutize(path: &Path) -> Option<PathBuf> {
    std::path::absolute(path).ok().map(|p| normalize_path(&p))
}

/// Accepts a scope entry only if it names an existing directory.
pub fn validate_folder(path: &Path) -> Result<PathBuf> {
    if path.is_dir() {
        Ok(normalize_path(path))
    } else {
        Err(ScopeGrepError::InvalidScope(path.to_path_buf()))
    }
}
