//! Glob matching of window titles against configured patterns.
//!
//! Matching is case-sensitive and covers the full title, not a
//! substring: `"*Grafana"` matches `"Weekly Grafana"` but not
//! `"grafana-dashboard"`. Patterns support `*`, `?` and `[...]`
//! character classes via [`glob::Pattern`].

use std::collections::BTreeSet;

use glob::Pattern;

use crate::window::WindowRecord;

/// Returns whether `title` matches any of the given glob patterns.
///
/// Invalid patterns never match. Config validation rejects them up
/// front, so hitting one here means the caller bypassed validation.
pub fn matches_any(title: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|p| matches(title, p))
}

/// Returns whether `title` matches a single glob pattern.
pub fn matches(title: &str, pattern: &str) -> bool {
    Pattern::new(pattern).is_ok_and(|p| p.matches(title))
}

/// Classifies which configured patterns are satisfied by the given
/// window snapshot.
///
/// A pattern is satisfied when at least one title matches it. The
/// result only grows as windows are added, which is what lets the wait
/// loop treat "all patterns satisfied" as a stable exit condition.
pub fn satisfied_patterns<'a>(
    windows: &[WindowRecord],
    patterns: &'a [String],
) -> BTreeSet<&'a str> {
    let mut found = BTreeSet::new();
    for window in windows {
        for pattern in patterns {
            if matches(&window.title, pattern) {
                found.insert(pattern.as_str());
            }
        }
    }
    found
}

/// Returns the configured patterns not satisfied by the snapshot.
pub fn missing_patterns(windows: &[WindowRecord], patterns: &[String]) -> Vec<String> {
    let found = satisfied_patterns(windows, patterns);
    patterns
        .iter()
        .filter(|p| !found.contains(p.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::record;

    #[test]
    fn prefix_glob_matches() {
        assert!(matches("NOC SCC - Overview", "NOC SCC*"));
    }

    #[test]
    fn suffix_glob_matches() {
        assert!(matches("MyGrafana", "*Grafana"));
        assert!(matches("Weekly Grafana", "*Grafana"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!matches("grafana-dashboard", "*Grafana"));
        assert!(!matches("noc scc - overview", "NOC SCC*"));
    }

    #[test]
    fn literal_pattern_requires_full_match() {
        assert!(matches("Grafana", "Grafana"));
        // Glob is a full-string match, not a substring search.
        assert!(!matches("My Grafana dashboards", "Grafana"));
    }

    #[test]
    fn question_mark_matches_single_character() {
        assert!(matches("Monitor 1", "Monitor ?"));
        assert!(!matches("Monitor 12", "Monitor ?"));
    }

    #[test]
    fn character_class_matches() {
        assert!(matches("Wall A", "Wall [AB]"));
        assert!(!matches("Wall C", "Wall [AB]"));
    }

    #[test]
    fn invalid_pattern_never_matches() {
        assert!(!matches("anything", "[unclosed"));
    }

    #[test]
    fn matches_any_over_pattern_list() {
        let patterns = vec!["*Grafana".to_string(), "NOC SCC*".to_string()];
        assert!(matches_any("NOC SCC Dashboard", &patterns));
        assert!(matches_any("Weekly Grafana", &patterns));
        assert!(!matches_any("Random Window", &patterns));
    }

    #[test]
    fn satisfied_patterns_full_set_iff_all_matched() {
        let patterns = vec!["*Grafana".to_string(), "NOC SCC*".to_string()];

        let partial = vec![record("Weekly Grafana")];
        assert_eq!(satisfied_patterns(&partial, &patterns).len(), 1);

        let complete = vec![record("Weekly Grafana"), record("NOC SCC Dashboard")];
        let found = satisfied_patterns(&complete, &patterns);
        assert_eq!(found.len(), patterns.len());
    }

    #[test]
    fn adding_windows_never_removes_satisfied_patterns() {
        let patterns = vec!["*Grafana".to_string(), "NOC SCC*".to_string()];
        let mut windows = vec![record("Weekly Grafana")];
        let before = satisfied_patterns(&windows, &patterns);

        windows.push(record("Random Window"));
        windows.push(record("NOC SCC Dashboard"));
        let after = satisfied_patterns(&windows, &patterns);

        assert!(before.is_subset(&after));
    }

    #[test]
    fn missing_patterns_lists_unsatisfied_in_config_order() {
        let patterns = vec!["*Grafana".to_string(), "NOC SCC*".to_string()];
        let windows = vec![record("NOC SCC Dashboard")];
        assert_eq!(missing_patterns(&windows, &patterns), vec!["*Grafana"]);
    }
}
