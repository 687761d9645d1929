use proptest::prelude::*;
use scopegrep::{Marker, SearchConfiguration, SearchMode, Theme, highlight_line, line_matches};

proptest! {
    #[test]
    fn case_sensitive_literal_is_substring(line in "[a-zA-Z .()*]{0,40}", query in "[a-zA-Z .()*]{1,4}") {
        let config = SearchConfiguration::new(query.clone()).case_sensitive(true);
        prop_assert_eq!(line_matches(&line, &config), line.contains(&query));
    }

    #[test]
    fn case_insensitive_literal_is_folded_substring(line in "[a-zA-Z .()*]{0,40}", query in "[a-zA-Z .()*]{1,4}") {
        let config = SearchConfiguration::new(query.clone());
        let expected = line.to_ascii_lowercase().contains(&query.to_ascii_lowercase());
        prop_assert_eq!(line_matches(&line, &config), expected);
    }

    #[test]
    fn whole_word_rejects_embedded_word(prefix in "[a-zA-Z_0-9]{1,8}") {
        let config = SearchConfiguration::new("Color").whole_word(true);
        let line = format!("{prefix}Color");
        prop_assert!(!line_matches(&line, &config));
    }

    #[test]
    fn stripping_markers_restores_literal_line(line in "[^<>\r\n]{0,60}", query in "[^<>\r\n]{1,3}", case_sensitive in any::<bool>()) {
        let marker = Marker::rich_text(Theme::Dark);
        let config = SearchConfiguration::new(query).case_sensitive(case_sensitive);
        let highlighted = highlight_line(&line, &config, marker.clone());
        prop_assert_eq!(marker.strip(&highlighted), line);
    }

    #[test]
    fn stripping_markers_restores_regex_line(line in "[a-z ]{0,40}", query in "[a-z.*+?()|]{1,5}") {
        let marker = Marker::rich_text(Theme::Light);
        let config = SearchConfiguration::new(query).with_mode(SearchMode::Regex);
        let highlighted = highlight_line(&line, &config, marker.clone());
        prop_assert_eq!(marker.strip(&highlighted), line);
    }

    #[test]
    fn empty_query_never_changes_or_matches(line in ".{0,40}") {
        let config = SearchConfiguration::new("");
        prop_assert!(!line_matches(&line, &config));
        prop_assert_eq!(highlight_line(&line, &config, Marker::ansi()), line);
    }
}
