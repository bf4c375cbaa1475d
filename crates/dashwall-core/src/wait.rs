//! Poll loop that waits for every expected window to exist.
//!
//! There is no portable "window created" notification worth wiring up
//! for a one-shot tool, so this is a plain sleep/poll loop. The poll
//! interval trades responsiveness against OS-call overhead.

use std::thread;
use std::time::{Duration, Instant};

use crate::config::PlacementRule;
use crate::error::{Error, Result};
use crate::log_debug;
use crate::pattern;
use crate::window::{WindowRecord, WindowSource};

/// Outcome of one enumeration-and-classification pass.
enum Check {
    /// Every configured pattern has at least one matching window.
    Satisfied(Vec<WindowRecord>),
    /// These patterns still have no matching window.
    Missing(Vec<String>),
}

fn check(source: &mut dyn WindowSource, rules: &[PlacementRule]) -> Result<Check> {
    let windows = source.windows()?;
    let patterns: Vec<String> = rules.iter().map(|r| r.title_pattern.clone()).collect();
    let missing = pattern::missing_patterns(&windows, &patterns);

    if missing.is_empty() {
        Ok(Check::Satisfied(windows))
    } else {
        Ok(Check::Missing(missing))
    }
}

/// Runs one pass; returns the matched windows if every configured
/// pattern is already satisfied, `None` otherwise.
///
/// The controller calls this before launching anything, which is what
/// makes a re-run on an already-arranged desktop skip the launch.
pub fn check_satisfied(
    source: &mut dyn WindowSource,
    rules: &[PlacementRule],
) -> Result<Option<Vec<WindowRecord>>> {
    match check(source, rules)? {
        Check::Satisfied(windows) => Ok(Some(windows)),
        Check::Missing(missing) => {
            log_debug!("Still waiting for windows matching: {missing:?}");
            Ok(None)
        }
    }
}

/// Polls until every configured pattern is satisfied or the timeout
/// elapses.
///
/// On timeout returns [`Error::WaitTimeout`] carrying the patterns
/// that never appeared. The caller is expected to abort the run
/// gracefully, not crash.
pub fn wait_until_satisfied(
    source: &mut dyn WindowSource,
    rules: &[PlacementRule],
    timeout: Duration,
    poll_interval: Duration,
) -> Result<Vec<WindowRecord>> {
    let deadline = Instant::now() + timeout;

    loop {
        match check(source, rules)? {
            Check::Satisfied(windows) => {
                log_debug!("All expected windows found");
                return Ok(windows);
            }
            Check::Missing(missing) => {
                let now = Instant::now();
                if now >= deadline {
                    return Err(Error::WaitTimeout {
                        timeout_secs: timeout.as_secs(),
                        missing,
                    });
                }
                log_debug!("Still waiting for windows matching: {missing:?}");
                thread::sleep(poll_interval.min(deadline - now));
            }
        }
    }
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

    /// Fake source that yields a fixed snapshot on every poll.
    struct Fixed(Vec<WindowRecord>);

    impl WindowSource for Fixed {
        fn windows(&mut self) -> Result<Vec<WindowRecord>> {
            Ok(self.0.clone())
        }
    }

    /// Fake source that yields nothing until the nth poll.
    struct Eventually {
        polls_until_ready: u32,
        snapshot: Vec<WindowRecord>,
    }

    impl WindowSource for Eventually {
        fn windows(&mut self) -> Result<Vec<WindowRecord>> {
            if self.polls_until_ready == 0 {
                Ok(self.snapshot.clone())
            } else {
                self.polls_until_ready -= 1;
                Ok(Vec::new())
            }
        }
    }

    #[test]
    fn check_satisfied_short_circuits_when_all_windows_exist() {
        let mut source = Fixed(vec![record("Weekly Grafana"), record("NOC SCC Dashboard")]);
        let windows = check_satisfied(&mut source, &rules()).unwrap();
        assert_eq!(windows.unwrap().len(), 2);
    }

    #[test]
    fn check_satisfied_returns_none_while_windows_are_missing() {
        let mut source = Fixed(vec![record("Weekly Grafana")]);
        assert!(check_satisfied(&mut source, &rules()).unwrap().is_none());
    }

    #[test]
    fn wait_times_out_within_expected_bounds() {
        let mut source = Fixed(Vec::new());
        let start = Instant::now();
        let result = wait_until_satisfied(
            &mut source,
            &rules(),
            Duration::from_secs(1),
            Duration::from_millis(100),
        );
        let elapsed = start.elapsed();

        match result {
            Err(Error::WaitTimeout {
                timeout_secs,
                missing,
            }) => {
                assert_eq!(timeout_secs, 1);
                assert_eq!(missing.len(), 2);
            }
            other => panic!("expected WaitTimeout, got {other:?}"),
        }
        assert!(elapsed >= Duration::from_secs(1));
        assert!(elapsed < Duration::from_millis(1500), "took {elapsed:?}");
    }

    #[test]
    fn timeout_error_names_only_the_missing_patterns() {
        let mut source = Fixed(vec![record("NOC SCC Dashboard")]);
        let result = wait_until_satisfied(
            &mut source,
            &rules(),
            Duration::from_millis(200),
            Duration::from_millis(50),
        );

        match result {
            Err(Error::WaitTimeout { missing, .. }) => {
                assert_eq!(missing, vec!["*Grafana".to_string()]);
            }
            other => panic!("expected WaitTimeout, got {other:?}"),
        }
    }

    #[test]
    fn wait_succeeds_once_windows_appear() {
        let mut source = Eventually {
            polls_until_ready: 2,
            snapshot: vec![record("Weekly Grafana"), record("NOC SCC Dashboard")],
        };
        let windows = wait_until_satisfied(
            &mut source,
            &rules(),
            Duration::from_secs(5),
            Duration::from_millis(20),
        )
        .unwrap();
        assert_eq!(windows.len(), 2);
    }

    #[test]
    fn source_errors_propagate_out_of_the_loop() {
        struct Failing;
        impl WindowSource for Failing {
            fn windows(&mut self) -> Result<Vec<WindowRecord>> {
                Err(Error::Os("enumeration failed".into()))
            }
        }

        let result = wait_until_satisfied(
            &mut Failing,
            &rules(),
            Duration::from_secs(1),
            Duration::from_millis(50),
        );
        assert!(matches!(result, Err(Error::Os(_))));
    }
}
