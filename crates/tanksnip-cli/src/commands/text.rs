use std::path::PathBuf;
use tanksnip_core::error::TankSnipError;

use crate::commands::load_text;

pub fn run(input_file: PathBuf, layout: bool) -> Result<(), TankSnipError> {
    let text = load_text(&input_file, layout)?;
    println!("{text}");
    Ok(())
}
