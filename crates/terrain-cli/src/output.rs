//! JSON output helper shared by the subcommands.

use serde::Serialize;

use crate::OutputFormat;

/// Print a serializable result in the requested format. Text rendering is
/// command-specific, so this only handles JSON; `quiet` suppresses output
/// entirely.
pub fn print<T: Serialize>(value: &T, format: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    if let OutputFormat::Json = format {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("failed to serialize output: {e}"),
        }
    }
}
