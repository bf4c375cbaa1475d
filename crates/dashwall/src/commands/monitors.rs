//! Lists attached monitors with their full and work rectangles.

#[cfg(windows)]
pub fn execute() {
    use comfy_table::presets::UTF8_FULL;
    use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
    use dashwall_windows::monitor::enumerate_monitors;

    let monitors = match enumerate_monitors() {
        Ok(monitors) => monitors,
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
            Cell::new("Index").set_alignment(CellAlignment::Right),
            Cell::new("Monitor"),
            Cell::new("Work area"),
        ]);

    for monitor in &monitors {
        table.add_row(vec![
            Cell::new(monitor.index).set_alignment(CellAlignment::Right),
            Cell::new(monitor.rect.to_string()),
            Cell::new(monitor.work_area.to_string()),
        ]);
    }

    println!("{table}");
    println!("\n{} monitors detected", monitors.len());
}

#[cfg(not(windows))]
pub fn execute() {
    super::unsupported();
}
