//! Presentation-side state: the interactive session around a scanner.
use crate::error::{Result, ScopeGrepError};
use crate::open::Opener;
use crate::progress::ProgressSink;
use crate::query::SearchConfiguration;
use crate::scanner::Scanner;
use crate::scope::validate_folder;
use crate::session::SearchSession;
use crate::source::FileSource;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Expand/collapse state per result, keyed by file path.
#[derive(Debug, Default, Clone)]
pub struct ResultsView {
    expanded: HashMap<String, bool>,
}

impl ResultsView {
    /// A path seen for the first time starts expanded.
    pub fn is_expanded(&mut self, path: &str) -> bool {
        *self.expanded.entry(path.to_string()).or_insert(true)
    }

    pub fn toggle(&mut self, path: &str) {
        let state = self.expanded.entry(path.to_string()).or_insert(true);
        *state = !*state;
    }

    pub fn set_expanded(&mut self, path: &str, expanded: bool) {
        self.expanded.insert(path.to_string(), expanded);
    }

    pub fn clear(&mut self) {
        self.expanded.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

pub struct Finder<S> {
    config: SearchConfiguration,
    scanner: Scanner<S>,
    session: SearchSession,
    view: ResultsView,
}

impl<S: FileSource> Finder<S> {
    pub fn new(scanner: Scanner<S>, config: SearchConfiguration) -> Self {
        Self {
            config,
            scanner,
            session: SearchSession::new(),
            view: ResultsView::default(),
        }
    }

    pub fn config(&self) -> &SearchConfiguration {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SearchConfiguration {
        &mut self.config
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn view_mut(&mut self) -> &mut ResultsView {
        &mut self.view
    }

    /// Borrows the results for rendering alongside their view state.
    pub fn session_and_view(&mut self) -> (&SearchSession, &mut ResultsView) {
        (&self.session, &mut self.view)
    }

    /// Starts a scan. An empty query is rejected before anything runs and
    /// leaves the previous session in place.
    pub fn submit(&mut self, progress: &mut dyn ProgressSink) -> Result<&SearchSession> {
        if !self.config.has_query() {
            return Err(ScopeGrepError::EmptyQuery);
        }
        self.session = self.scanner.run_search(&self.config, progress);
        Ok(&self.session)
    }

    pub fn can_reset(&self) -> bool {
        self.config.has_query() || !self.session.is_empty() || self.session.is_completed()
    }

    /// Clears the query, the results and all expand/collapse state. Filters,
    /// scope and mode flags are kept.
    pub fn reset(&mut self) {
        self.config.query.clear();
        self.session.clear();
        self.view.clear();
    }

    pub fn add_include_folder(&mut self, path: &Path) -> Result<()> {
        let folder = validate_folder(path)?;
        add_unique(&mut self.config.include_roots, folder);
        Ok(())
    }

    pub fn add_exclude_folder(&mut self, path: &Path) -> Result<()> {
        let folder = validate_folder(path)?;
        add_unique(&mut self.config.exclude_roots, folder);
        Ok(())
    }

    pub fn remove_include_folder(&mut self, index: usize) -> Option<PathBuf> {
        (index < self.config.include_roots.len()).then(|| self.config.include_roots.remove(index))
    }

    pub fn remove_exclude_folder(&mut self, index: usize) -> Option<PathBuf> {
        (index < self.config.exclude_roots.len()).then(|| self.config.exclude_roots.remove(index))
    }

    /// Opens the `index`-th match (0-based, display order).
    pub fn open_match(&self, index: usize, opener: &dyn Opener) -> Result<()> {
        let (result, info) = self
            .session
            .nth_match(index)
            .ok_or_else(|| ScopeGrepError::Other(format!("No match #{}", index + 1)))?;
        opener.open(&result.handle, info.line_number)
    }
}

fn add_unique(list: &mut Vec<PathBuf>, folder: PathBuf) {
    if !list.contains(&folder) {
        list.push(folder);
    }
}
