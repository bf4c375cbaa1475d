//! One enumeration pass reporting which expected windows are open.

#[cfg(windows)]
pub fn execute() {
    use dashwall_core::{config, pattern};
    use dashwall_windows::enumerate_target_windows;

    let config = config::load();

    let windows = match enumerate_target_windows(&config.target_process) {
        Ok(windows) => windows,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let patterns: Vec<String> = config
        .rule
        .iter()
        .map(|r| r.title_pattern.clone())
        .collect();
    let found = pattern::satisfied_patterns(&windows, &patterns);

    for pattern in &patterns {
        let mark = if found.contains(pattern.as_str()) {
            "ok"
        } else {
            "missing"
        };
        println!("{mark:>8}  {pattern}");
    }

    if found.len() == patterns.len() {
        println!("\nAll expected windows are open.");
    } else {
        println!(
            "\n{} of {} expected windows are open.",
            found.len(),
            patterns.len()
        );
        std::process::exit(1);
    }
}

#[cfg(not(windows))]
pub fn execute() {
    super::unsupported();
}
