//! Result store: per-file results of one scan plus aggregate counts.
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Opaque reference handed to the open-at-location action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileHandle(PathBuf);

impl FileHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchInfo {
    /// 1-based.
    pub line_number: usize,
    pub highlighted_line: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub file_path: String,
    #[serde(skip)]
    pub handle: FileHandle,
    pub matches: Vec<MatchInfo>,
}

impl SearchResult {
    /// `None` when there are no matches: a result always holds at least one.
    pub fn new(path: &Path, matches: Vec<MatchInfo>) -> Option<Self> {
        if matches.is_empty() {
            return None;
        }
        Some(Self {
            file_path: path.to_string_lossy().into_owned(),
            handle: FileHandle::new(path),
            matches,
        })
    }

    pub fn file_name(&self) -> String {
        self.handle
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file_path.clone())
    }
}

/// Diagnostics gathered while scanning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub candidates: usize,
    pub excluded: usize,
    pub filtered_by_extension: usize,
    pub unreadable: usize,
    pub scanned: usize,
    #[serde(with = "duration_millis")]
    pub elapsed: Duration,
}

mod duration_millis {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchSession {
    results: Vec<SearchResult>,
    completed: bool,
    pub pattern_error: Option<String>,
    pub stats: ScanStats,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears everything and marks the session incomplete.
    pub fn begin(&mut self) {
        *self = Self::default();
    }

    pub fn push(&mut self, result: SearchResult) {
        self.results.push(result);
    }

    pub fn complete(&mut self) {
        self.completed = true;
    }

    pub fn clear(&mut self) {
        self.begin();
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn file_count(&self) -> usize {
        self.results.len()
    }

    pub fn total_matches(&self) -> usize {
        self.results.iter().map(|r| r.matches.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The `index`-th match counted across all results in order (0-based).
    pub fn nth_match(&self, index: usize) -> Option<(&SearchResult, &MatchInfo)> {
        self.results
            .iter()
            .flat_map(|r| r.matches.iter().map(move |m| (r, m)))
            .nth(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(line: usize) -> MatchInfo {
        MatchInfo {
            line_number: line,
            highlighted_line: format!("line {line}"),
        }
    }

    #[test]
    fn result_requires_a_match() {
        assert!(SearchResult::new(Path::new("a.cs"), vec![]).is_none());
        let result = SearchResult::new(Path::new("dir/a.cs"), vec![hit(3)]).unwrap();
        assert_eq!(result.file_name(), "a.cs");
        assert_eq!(result.handle.path(), Path::new("dir/a.cs"));
    }

    #[test]
    fn counts_and_lifecycle() {
        let mut session = SearchSession::new();
        assert!(!session.is_completed());
        session.push(SearchResult::new(Path::new("a.cs"), vec![hit(1), hit(4)]).unwrap());
        session.push(SearchResult::new(Path::new("b.cs"), vec![hit(2)]).unwrap());
        session.complete();
        assert!(session.is_completed());
        assert_eq!(session.file_count(), 2);
        assert_eq!(session.total_matches(), 3);

        let (result, m) = session.nth_match(2).unwrap();
        assert_eq!(result.file_path, "b.cs");
        assert_eq!(m.line_number, 2);
        assert!(session.nth_match(3).is_none());

        session.begin();
        assert!(session.is_empty());
        assert!(!session.is_completed());
    }
}
