//! Lists the target process's visible windows.

#[cfg(windows)]
pub fn execute() {
    use comfy_table::presets::UTF8_FULL;
    use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
    use dashwall_core::config;
    use dashwall_windows::enumerate_target_windows;

    let config = config::load();

    let windows = match enumerate_target_windows(&config.target_process) {
        Ok(windows) => windows,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("HWND"),
            Cell::new("PID").set_alignment(CellAlignment::Right),
            Cell::new("Process"),
            Cell::new("Title"),
        ]);

    for window in &windows {
        table.add_row(vec![
            Cell::new(format!("0x{:X}", window.handle)),
            Cell::new(window.pid).set_alignment(CellAlignment::Right),
            Cell::new(&window.process),
            Cell::new(&window.title),
        ]);
    }

    println!("{table}");
    println!(
        "\n{} windows found for {}",
        windows.len(),
        config.target_process
    );
}

#[cfg(not(windows))]
pub fn execute() {
    super::unsupported();
}
