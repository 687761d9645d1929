//! Scoped in-project text search.
//!
//! A [`SearchConfiguration`] names the query and the folders and file
//! extensions in scope. [`Scanner::run_search`] walks that scope once,
//! matches every line with a [`LineMatcher`] and stores each hit with a
//! highlighted preview in a [`SearchSession`].
pub mod cli;
pub mod config;
pub mod error;
pub mod highlight;
pub mod matcher;
pub mod open;
pub mod output;
pub mod progress;
pub mod query;
pub mod scanner;
pub mod scope;
pub mod session;
pub mod source;
#[cfg(test)]
mod test_utils;
pub mod view;
pub mod walker;

pub use crate::error::{Result, ScopeGrepError};
pub use highlight::{Highlighter, Marker, Theme, highlight_line};
pub use matcher::{LineMatcher, line_matches};
pub use open::{CommandOpener, Opener};
pub use progress::{NoProgress, ProgressReporter, ProgressSink};
pub use query::{ExtensionFilter, SearchConfiguration, SearchMode};
pub use scanner::Scanner;
pub use scope::{ProjectLayout, ScanPlan, resolve_plan};
pub use session::{FileHandle, MatchInfo, SearchResult, SearchSession};
pub use source::{FileSource, FsSource};
pub use view::{Finder, ResultsView};
