//! Output formatting helpers for CLI commands

use crate::herd::{Gender, Goat};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;

/// Format herd records as a table
pub fn format_goats_table(goats: &[Goat]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Weight (kg)", "Gender"]);

    for g in goats {
        let gender_str = match g.gender {
            Gender::Male => "Male".blue().to_string(),
            Gender::Female => "Female".magenta().to_string(),
        };

        table.add_row(vec![
            Cell::new(&g.id),
            Cell::new(g.weight),
            Cell::new(gender_str),
        ]);
    }

    table.to_string()
}

/// Format herd records as JSON
pub fn format_goats_json(goats: &[Goat]) -> String {
    serde_json::to_string_pretty(&json!({
        "goats": goats
    }))
    .unwrap()
}
