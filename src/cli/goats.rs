//! Goats command implementation

use crate::cli::output::{format_goats_json, format_goats_table};
use crate::cli::GoatsArgs;
use crate::herd::Herd;

/// Handle goats command
pub fn handle_goats(args: &GoatsArgs, herd: &Herd) -> Result<String, Box<dyn std::error::Error>> {
    let goats = herd.all();

    if args.json {
        Ok(format_goats_json(goats))
    } else {
        Ok(format_goats_table(goats))
    }
}
