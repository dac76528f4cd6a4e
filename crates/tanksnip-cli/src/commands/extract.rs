use std::path::PathBuf;
use tanksnip_core::error::TankSnipError;

use crate::commands::{load_report, ExtractSettings};
use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    settings: ExtractSettings,
) -> Result<(), TankSnipError> {
    let report = load_report(&input_file, &settings)?;

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print(&report),
    }

    Ok(())
}
