//! Line-level matching for literal and regex queries.
use crate::error::Result;
use crate::query::{SearchConfiguration, SearchMode};
use memchr::memmem::Finder;
use regex::{Regex, RegexBuilder};

/// Builds the pattern shared by matching and highlighting.
///
/// Text queries are escaped and, with whole word on, wrapped in `\b`.
/// Word boundaries and case folding are Unicode-aware.
pub fn build_regex(config: &SearchConfiguration) -> Result<Regex> {
    let pattern = match config.mode {
        SearchMode::Regex => config.query.clone(),
        SearchMode::Text if config.whole_word => format!(r"\b{}\b", regex::escape(&config.query)),
        SearchMode::Text => regex::escape(&config.query),
    };
    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(!config.case_sensitive)
        .build()?;
    Ok(regex)
}

enum Strategy {
    Never,
    Literal(Finder<'static>),
    Pattern(Regex),
}

/// A query compiled once and applied to every line of a scan.
pub struct LineMatcher {
    strategy: Strategy,
}

impl LineMatcher {
    pub fn new(config: &SearchConfiguration) -> Result<Self> {
        if !config.has_query() {
            return Ok(Self::never());
        }
        let strategy = match config.mode {
            SearchMode::Text if config.case_sensitive && !config.whole_word => {
                Strategy::Literal(Finder::new(config.query.as_bytes()).into_owned())
            }
            _ => Strategy::Pattern(build_regex(config)?),
        };
        Ok(Self { strategy })
    }

    /// Matches nothing. Used when there is no query or it failed to compile.
    pub fn never() -> Self {
        Self {
            strategy: Strategy::Never,
        }
    }

    pub fn is_match(&self, line: &str) -> bool {
        match &self.strategy {
            Strategy::Never => false,
            Strategy::Literal(finder) => finder.find(line.as_bytes()).is_some(),
            Strategy::Pattern(regex) => regex.is_match(line),
        }
    }
}

/// One-shot form of [`LineMatcher::is_match`]. An invalid pattern never matches.
pub fn line_matches(line: &str, config: &SearchConfiguration) -> bool {
    LineMatcher::new(config)
        .map(|m| m.is_match(line))
        .unwrap_or(false)
}
