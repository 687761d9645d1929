//! Query configuration: what to search for and where.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Extensions offered by default, in display order.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".cs", ".shader", ".txt", ".json", ".xml", ".html"];

#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Match the query as exact text
    #[default]
    Text,
    /// Compile the query as a regular expression
    Regex,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Text => write!(f, "text"),
            SearchMode::Regex => write!(f, "regex"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionToggle {
    pub ext: String,
    pub enabled: bool,
}

/// Ordered mapping from file extension to an enabled flag.
///
/// Keys are stored lowercase with a leading dot, so `"CS"`, `"cs"` and `".cs"`
/// all name the same entry. Insertion order is kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionFilter {
    toggles: Vec<ExtensionToggle>,
}

impl ExtensionFilter {
    pub fn empty() -> Self {
        Self {
            toggles: Vec::new(),
        }
    }

    pub fn set(&mut self, ext: &str, enabled: bool) {
        let key = normalize_extension(ext);
        if key.len() <= 1 {
            return;
        }
        match self.toggles.iter_mut().find(|t| t.ext == key) {
            Some(toggle) => toggle.enabled = enabled,
            None => self.toggles.push(ExtensionToggle { ext: key, enabled }),
        }
    }

    /// Enable exactly `exts`, adding any that are not yet known and
    /// disabling every other entry.
    pub fn enable_only<S: AsRef<str>>(&mut self, exts: &[S]) {
        for toggle in &mut self.toggles {
            toggle.enabled = false;
        }
        for ext in exts {
            self.set(ext.as_ref(), true);
        }
    }

    pub fn is_enabled(&self, ext: &str) -> bool {
        let key = normalize_extension(ext);
        self.toggles.iter().any(|t| t.ext == key && t.enabled)
    }

    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.toggles
            .iter()
            .filter(|t| t.enabled)
            .map(|t| t.ext.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExtensionToggle> {
        self.toggles.iter()
    }

    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        let mut filter = Self::empty();
        for ext in DEFAULT_EXTENSIONS {
            filter.set(ext, true);
        }
        filter
    }
}

/// Lowercases and ensures a single leading dot.
pub fn normalize_extension(ext: &str) -> String {
    let trimmed = ext.trim().trim_start_matches('.');
    format!(".{}", trimmed.to_ascii_lowercase())
}

/// Everything the user controls about one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfiguration {
    pub query: String,
    pub mode: SearchMode,
    pub case_sensitive: bool,
    /// Only consulted in [`SearchMode::Text`]; a regex expresses word
    /// boundaries itself.
    pub whole_word: bool,
    pub extensions: ExtensionFilter,
    /// Empty means the whole default root.
    pub include_roots: Vec<PathBuf>,
    pub exclude_roots: Vec<PathBuf>,
    pub include_secondary_root: bool,
}

impl SearchConfiguration {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    pub fn whole_word(mut self, yes: bool) -> Self {
        self.whole_word = yes;
        self
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn effective_whole_word(&self) -> bool {
        self.whole_word && self.mode == SearchMode::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_keeps_display_order() {
        let filter = ExtensionFilter::default();
        let exts: Vec<_> = filter.iter().map(|t| t.ext.as_str()).collect();
        assert_eq!(exts, DEFAULT_EXTENSIONS);
        assert!(filter.iter().all(|t| t.enabled));
    }

    #[test]
    fn extension_keys_are_normalized() {
        let mut filter = ExtensionFilter::empty();
        filter.set("CS", true);
        filter.set(".cs", false);
        assert_eq!(filter.len(), 1);
        assert!(!filter.is_enabled("cs"));
        filter.set("cs", true);
        assert!(filter.is_enabled(".CS"));
    }

    #[test]
    fn enable_only_disables_the_rest() {
        let mut filter = ExtensionFilter::default();
        filter.enable_only(&["txt", "md"]);
        let enabled: Vec<_> = filter.enabled().collect();
        assert_eq!(enabled, vec![".txt", ".md"]);
        assert!(!filter.is_enabled(".cs"));
        assert_eq!(filter.len(), DEFAULT_EXTENSIONS.len() + 1);
    }

    #[test]
    fn blank_extension_is_ignored() {
        let mut filter = ExtensionFilter::empty();
        filter.set(".", true);
        filter.set("", true);
        assert!(filter.is_empty());
    }

    #[test]
    fn whole_word_ignored_in_regex_mode() {
        let config = SearchConfiguration::new("Color")
            .whole_word(true)
            .with_mode(SearchMode::Regex);
        assert!(!config.effective_whole_word());
        assert!(config.clone().with_mode(SearchMode::Text).effective_whole_word());
    }
}
