//! Runs one search over the planned scope and collects the results.
use crate::highlight::{Highlighter, Marker};
use crate::matcher::LineMatcher;
use crate::progress::ProgressSink;
use crate::query::SearchConfiguration;
use crate::scope::{ProjectLayout, normalize_path, resolve_plan};
use crate::session::{MatchInfo, SearchResult, SearchSession};
use crate::source::FileSource;
use log::{debug, info, warn};
use std::time::Instant;

const PROGRESS_LABEL: &str = "Searching...";

pub struct Scanner<S> {
    source: S,
    layout: ProjectLayout,
    marker: Marker,
}

impl<S: FileSource> Scanner<S> {
    pub fn new(source: S, layout: ProjectLayout) -> Self {
        Self {
            source,
            layout,
            marker: Marker::default(),
        }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Scans every candidate to completion. Unreadable files are skipped and
    /// a pattern that fails to compile matches nothing; neither aborts the
    /// scan.
    pub fn run_search(
        &self,
        config: &SearchConfiguration,
        progress: &mut dyn ProgressSink,
    ) -> SearchSession {
        let start = Instant::now();
        let mut session = SearchSession::new();
        session.begin();

        let plan = resolve_plan(config, &self.layout);
        info!(
            "Searching for '{}' ({} mode) in {} root(s), {} exclusion(s)",
            config.query,
            config.mode,
            plan.roots.len(),
            plan.excluded_prefixes.len()
        );

        let matcher = match LineMatcher::new(config) {
            Ok(matcher) => matcher,
            Err(e) => {
                warn!("Invalid search pattern '{}': {e}", config.query);
                session.pattern_error = Some(e.to_string());
                LineMatcher::never()
            }
        };
        let highlighter = Highlighter::new(config, self.marker.clone());

        let candidates = self.source.enumerate(&plan.roots);
        let total = candidates.len().max(1) as f32;

        for (i, path) in candidates.iter().enumerate() {
            session.stats.candidates += 1;
            progress.report(PROGRESS_LABEL, path, (i + 1) as f32 / total);

            if plan.is_excluded(path) {
                debug!("Skipping excluded file: {}", path.display());
                session.stats.excluded += 1;
                continue;
            }
            if !plan.allows_extension(path) {
                debug!("Skipping filtered extension: {}", path.display());
                session.stats.filtered_by_extension += 1;
                continue;
            }

            let content = match self.source.read_text(path) {
                Ok(content) => content,
                Err(e) => {
                    debug!("Skipping unreadable file {}: {e}", path.display());
                    session.stats.unreadable += 1;
                    continue;
                }
            };
            session.stats.scanned += 1;

            let matches = find_matches(&content, &matcher, &highlighter);
            if let Some(result) = SearchResult::new(&normalize_path(path), matches) {
                session.push(result);
            }
        }

        progress.finish();
        session.stats.elapsed = start.elapsed();
        session.complete();
        info!(
            "Search finished. Found {} matches in {} files.",
            session.total_matches(),
            session.file_count()
        );
        session
    }
}

/// Matches per line, 1-based. A leading byte-order mark is ignored.
pub fn find_matches(
    content: &str,
    matcher: &LineMatcher,
    highlighter: &Highlighter,
) -> Vec<MatchInfo> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    split_lines(content)
        .enumerate()
        .filter(|(_, line)| matcher.is_match(line))
        .map(|(i, line)| MatchInfo {
            line_number: i + 1,
            highlighted_line: highlighter.highlight(line),
        })
        .collect()
}

/// Splits on `\n` and drops one trailing `\r` from every line, including a
/// final line with no newline. A trailing `\n` does not start a new line.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split_terminator('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}
