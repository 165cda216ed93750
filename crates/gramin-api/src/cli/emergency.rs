//! Emergency dial directory command.

use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use gramin_core::emergency::DIAL_DIRECTORY;

/// Print the static emergency dial directory.
pub fn show_directory(json: bool) {
    if json {
        let entries: Vec<serde_json::Value> = DIAL_DIRECTORY
            .iter()
            .map(|line| {
                serde_json::json!({
                    "code": line.code,
                    "label": line.label,
                    "detail": line.detail,
                    "dial_uri": line.dial_uri(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).expect("directory serializes")
        );
        return;
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Number").fg(Color::White),
        Cell::new("Service").fg(Color::White),
        Cell::new("When").fg(Color::White),
    ]);

    for line in DIAL_DIRECTORY {
        table.add_row(vec![
            Cell::new(line.code).fg(Color::Red),
            Cell::new(line.label),
            Cell::new(line.detail).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!(
        "  {} In an emergency, dial directly. These lines are toll-free.",
        style("⚠").red().bold()
    );
    println!();
    println!("{table}");
    println!();
}
