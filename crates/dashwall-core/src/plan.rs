//! Decides which monitor each discovered window goes to.
//!
//! Planning is pure: it takes one window snapshot plus the configured
//! rules and produces an explicit decision per window. The controller
//! then executes the `Matched` decisions against the OS and logs the
//! `Unmatched` ones.

use std::collections::HashSet;

use crate::config::PlacementRule;
use crate::pattern;
use crate::window::WindowRecord;

/// The placement decision for one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A rule matched; move the window to this monitor ordinal.
    Matched { monitor: usize },
    /// No rule claimed this window. It is logged and left alone.
    Unmatched,
}

/// A window paired with its placement decision.
#[derive(Debug, Clone)]
pub struct PlannedWindow {
    pub window: WindowRecord,
    pub placement: Placement,
}

/// Assigns each window to a monitor by first-configured-rule-wins.
///
/// Rules are evaluated in configuration order and the first match
/// claims the window. A title is placed at most once per run: the
/// moved set is keyed by title text, so a second window carrying an
/// identical title ends up `Unmatched`. Keying by title rather than
/// handle is a known limitation kept for parity with how runs have
/// always been de-duplicated.
pub fn resolve(windows: &[WindowRecord], rules: &[PlacementRule]) -> Vec<PlannedWindow> {
    let mut moved: HashSet<&str> = HashSet::new();
    let mut planned = Vec::with_capacity(windows.len());

    for window in windows {
        let mut decision = Placement::Unmatched;
        for rule in rules {
            if pattern::matches(&window.title, &rule.title_pattern)
                && !moved.contains(window.title.as_str())
            {
                moved.insert(window.title.as_str());
                decision = Placement::Matched {
                    monitor: rule.monitor,
                };
                break;
            }
        }

        planned.push(PlannedWindow {
            window: window.clone(),
            placement: decision,
        });
    }

    planned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::record;

    fn rules() -> Vec<PlacementRule> {
        vec![
            PlacementRule {
                title_pattern: "*Grafana".into(),
                monitor: 1,
            },
            PlacementRule {
                title_pattern: "NOC SCC*".into(),
                monitor: 0,
            },
        ]
    }

    #[test]
    fn two_windows_each_land_on_their_configured_monitor() {
        let windows = vec![record("NOC SCC Dashboard"), record("Weekly Grafana")];
        let planned = resolve(&windows, &rules());

        assert_eq!(planned[0].placement, Placement::Matched { monitor: 0 });
        assert_eq!(planned[1].placement, Placement::Matched { monitor: 1 });
    }

    #[test]
    fn unmatched_window_is_skipped_others_still_placed() {
        let windows = vec![
            record("NOC SCC Dashboard"),
            record("Random Window"),
            record("Weekly Grafana"),
        ];
        let planned = resolve(&windows, &rules());

        assert_eq!(planned[0].placement, Placement::Matched { monitor: 0 });
        assert_eq!(planned[1].placement, Placement::Unmatched);
        assert_eq!(planned[2].placement, Placement::Matched { monitor: 1 });
    }

    #[test]
    fn duplicate_title_is_placed_only_once() {
        let windows = vec![record("Weekly Grafana"), record("Weekly Grafana")];
        let planned = resolve(&windows, &rules());

        assert_eq!(planned[0].placement, Placement::Matched { monitor: 1 });
        assert_eq!(planned[1].placement, Placement::Unmatched);
    }

    #[test]
    fn first_configured_rule_wins_when_several_match() {
        let rules = vec![
            PlacementRule {
                title_pattern: "NOC*".into(),
                monitor: 1,
            },
            PlacementRule {
                title_pattern: "NOC SCC*".into(),
                monitor: 0,
            },
        ];
        let planned = resolve(&[record("NOC SCC Dashboard")], &rules);
        assert_eq!(planned[0].placement, Placement::Matched { monitor: 1 });
    }

    #[test]
    fn distinct_titles_may_reuse_the_same_rule() {
        let windows = vec![record("Weekly Grafana"), record("Daily Grafana")];
        let planned = resolve(&windows, &rules());

        assert_eq!(planned[0].placement, Placement::Matched { monitor: 1 });
        assert_eq!(planned[1].placement, Placement::Matched { monitor: 1 });
    }

    #[test]
    fn no_rules_means_everything_unmatched() {
        let planned = resolve(&[record("Weekly Grafana")], &[]);
        assert_eq!(planned[0].placement, Placement::Unmatched);
    }
}
