//! The full arrangement sequence: check, launch if needed, wait,
//! enumerate monitors, place each matched window.

#[cfg(windows)]
pub fn execute() {
    use dashwall_core::error::Error;
    use dashwall_core::{Placement, config, log, log_error, log_info, log_warn, monitor, plan, wait};
    use dashwall_windows::{DesktopWindows, Window, launch, monitor as display};

    let config = config::load();
    log::init(&config.log);

    if config.rule.is_empty() {
        log_error!("No placement rules configured, nothing to do");
        std::process::exit(1);
    }
    log_info!(
        "Arranging {} windows matching {} patterns",
        config.target_process,
        config.rule.len()
    );

    let mut source = DesktopWindows::new(config.target_process.clone());

    // Check first so a re-run on an already-arranged desktop never
    // launches a second browser.
    let windows = match wait::check_satisfied(&mut source, &config.rule) {
        Ok(Some(windows)) => windows,
        Ok(None) => {
            let Some(script) = config.launch_script_path() else {
                log_error!("Could not determine launch script path");
                std::process::exit(1);
            };
            log_info!("Expected windows not found, launching {}", script.display());
            if let Err(e) = launch::run_launch_script(&script) {
                log_error!("{e}");
                std::process::exit(1);
            }

            match wait::wait_until_satisfied(
                &mut source,
                &config.rule,
                config.timeout(),
                config.poll_interval(),
            ) {
                Ok(windows) => windows,
                Err(e @ Error::WaitTimeout { .. }) => {
                    // Recoverable: abort cleanly without placing anything.
                    log_error!("{e}");
                    return;
                }
                Err(e) => {
                    log_error!("{e}");
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            log_error!("{e}");
            std::process::exit(1);
        }
    };

    let monitors = match display::enumerate_monitors() {
        Ok(monitors) => monitors,
        Err(e) => {
            log_error!("{e}");
            std::process::exit(1);
        }
    };
    if config.rule.len() > monitors.len() {
        log_warn!(
            "More placement rules ({}) than monitors detected ({})",
            config.rule.len(),
            monitors.len()
        );
    }

    // Per-window failures are logged and never abort the rest of the
    // pass; the wall should end up as arranged as possible.
    for planned in plan::resolve(&windows, &config.rule) {
        let title = &planned.window.title;
        match planned.placement {
            Placement::Matched { monitor: index } => {
                let placed = monitor::select(&monitors, index).and_then(|mon| {
                    Window::from_raw(planned.window.handle)
                        .place_on(&mon.rect)
                        .map(|()| mon)
                });
                match placed {
                    Ok(mon) => {
                        log_info!("Window {title:?} moved to monitor {index} {}", mon.rect);
                    }
                    Err(e) => {
                        log_error!("Could not move window {title:?} to monitor {index}: {e}");
                    }
                }
            }
            Placement::Unmatched => {
                log_warn!("Window {title:?} matches no placement rule, leaving it alone");
            }
        }
    }
}

#[cfg(not(windows))]
pub fn execute() {
    super::unsupported();
}
