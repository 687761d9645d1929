//! Wraps every matched span of a line in an emphasis marker.
use crate::matcher::build_regex;
use crate::query::SearchConfiguration;
use clap::ValueEnum;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Text inserted before and after each matched span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub open: String,
    pub close: String,
}

impl Marker {
    /// Rich-text color + bold tags, colored for the given theme.
    pub fn rich_text(theme: Theme) -> Self {
        let color = match theme {
            Theme::Dark => "#f0c058",
            Theme::Light => "#0033cc",
        };
        Self {
            open: format!("<color={color}><b>"),
            close: "</b></color>".to_string(),
        }
    }

    /// Bold yellow terminal escape.
    pub fn ansi() -> Self {
        Self {
            open: "\x1b[1;33m".to_string(),
            close: "\x1b[0m".to_string(),
        }
    }

    pub fn plain() -> Self {
        Self {
            open: String::new(),
            close: String::new(),
        }
    }

    /// Removes every marker occurrence.
    pub fn strip(&self, text: &str) -> String {
        let mut out = text.to_string();
        if !self.open.is_empty() {
            out = out.replace(&self.open, "");
        }
        if !self.close.is_empty() {
            out = out.replace(&self.close, "");
        }
        out
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::rich_text(Theme::default())
    }
}

pub struct Highlighter {
    regex: Option<Regex>,
    marker: Marker,
}

impl Highlighter {
    /// An empty query or a pattern that fails to compile yields a
    /// highlighter that returns lines untouched.
    pub fn new(config: &SearchConfiguration, marker: Marker) -> Self {
        let regex = if config.has_query() {
            build_regex(config).ok()
        } else {
            None
        };
        Self { regex, marker }
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    /// Leftmost-first, non-overlapping replacement; unmatched text is kept
    /// verbatim.
    pub fn highlight(&self, line: &str) -> String {
        match &self.regex {
            Some(regex) => regex
                .replace_all(line, |caps: &Captures| {
                    format!("{}{}{}", self.marker.open, &caps[0], self.marker.close)
                })
                .into_owned(),
            None => line.to_string(),
        }
    }
}

pub fn highlight_line(line: &str, config: &SearchConfiguration, marker: Marker) -> String {
    Highlighter::new(config, marker).highlight(line)
}
