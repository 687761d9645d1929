//! Rendering a finished session for the terminal or as JSON.
use crate::error::{Result, ScopeGrepError};
use crate::query::{SearchConfiguration, SearchMode};
use crate::session::{ScanStats, SearchResult, SearchSession};
use crate::view::ResultsView;
use clap::ValueEnum;
use colored::*;
use serde::Serialize;
use std::fmt::Write;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn results_header(session: &SearchSession) -> String {
    if session.is_completed() && !session.is_empty() {
        format!(
            "Search Results (Found matches in {} files, {} matches in total)",
            session.file_count(),
            session.total_matches()
        )
    } else {
        "Search Results".to_string()
    }
}

/// Text rendering of the results panel. Collapsed results show only their
/// header line; match lines are trimmed for display.
pub fn render_text(session: &SearchSession, query: &str, view: &mut ResultsView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", results_header(session).bold());

    if !session.is_completed() {
        let _ = writeln!(out, "Ready to search...");
        return out;
    }
    if session.is_empty() {
        let _ = writeln!(out, "{}", format!("No results found for '{query}'.").yellow());
        return out;
    }

    for result in session.results() {
        let _ = writeln!(out, "{}", file_header(result).green().bold());
        let _ = writeln!(out, "  {}", result.file_path.dimmed());
        if !view.is_expanded(&result.file_path) {
            continue;
        }
        for m in &result.matches {
            let _ = writeln!(
                out,
                "  {}: {}",
                m.line_number.to_string().yellow(),
                m.highlighted_line.trim()
            );
        }
    }
    out
}

fn file_header(result: &SearchResult) -> String {
    format!(" {} ({} matches)", result.file_name(), result.matches.len())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    query: &'a str,
    mode: SearchMode,
    case_sensitive: bool,
    whole_word: bool,
    completed: bool,
    file_count: usize,
    total_matches: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern_error: Option<&'a str>,
    results: &'a [SearchResult],
    stats: &'a ScanStats,
}

pub fn render_json(session: &SearchSession, config: &SearchConfiguration) -> Result<String> {
    let report = JsonReport {
        query: &config.query,
        mode: config.mode,
        case_sensitive: config.case_sensitive,
        whole_word: config.effective_whole_word(),
        completed: session.is_completed(),
        file_count: session.file_count(),
        total_matches: session.total_matches(),
        pattern_error: session.pattern_error.as_deref(),
        results: session.results(),
        stats: &session.stats,
    };
    serde_json::to_string_pretty(&report).map_err(|e| ScopeGrepError::Other(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MatchInfo;
    use std::path::Path;

    fn session() -> SearchSession {
        let mut session = SearchSession::new();
        session.push(
            SearchResult::new(
                Path::new("Assets/Player.cs"),
                vec![
                    MatchInfo {
                        line_number: 3,
                        highlighted_line: "    <b>player</b>.Move();  ".to_string(),
                    },
                    MatchInfo {
                        line_number: 9,
                        highlighted_line: "<b>player</b>".to_string(),
                    },
                ],
            )
            .unwrap(),
        );
        session.complete();
        session
    }

    #[test]
    fn header_counts_files_and_matches() {
        colored::control::set_override(false);
        let out = render_text(&session(), "player", &mut ResultsView::default());
        assert!(out.starts_with("Search Results (Found matches in 1 files, 2 matches in total)"));
        assert!(out.contains(" Player.cs (2 matches)"));
        assert!(out.contains("  3: <b>player</b>.Move();\n"));
    }

    #[test]
    fn collapsed_results_hide_matches() {
        colored::control::set_override(false);
        let mut view = ResultsView::default();
        view.set_expanded("Assets/Player.cs", false);
        let out = render_text(&session(), "player", &mut view);
        assert!(out.contains("Player.cs (2 matches)"));
        assert!(!out.contains("3:"));
    }

    #[test]
    fn empty_and_pending_sessions() {
        colored::control::set_override(false);
        let mut pending = SearchSession::new();
        let out = render_text(&pending, "x", &mut ResultsView::default());
        assert!(out.contains("Ready to search..."));

        pending.complete();
        let out = render_text(&pending, "x", &mut ResultsView::default());
        assert!(out.contains("No results found for 'x'."));
        assert!(out.starts_with("Search Results\n"));
    }

    #[test]
    fn json_report_lists_matches() {
        let config = SearchConfiguration::new("player");
        let json = render_json(&session(), &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_matches"], 2);
        assert_eq!(value["mode"], "text");
        assert_eq!(value["results"][0]["file_path"], "Assets/Player.cs");
        assert_eq!(value["results"][0]["matches"][1]["line_number"], 9);
        assert!(value.get("pattern_error").is_none());
    }
}
