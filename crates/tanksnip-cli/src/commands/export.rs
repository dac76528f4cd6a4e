use std::path::{Path, PathBuf};
use tanksnip_core::error::TankSnipError;
use tanksnip_core::export::{self, Table};

use crate::commands::{load_report, ExtractSettings};

pub fn run(
    input_file: PathBuf,
    dir: PathBuf,
    split: bool,
    settings: ExtractSettings,
) -> Result<(), TankSnipError> {
    let report = load_report(&input_file, &settings)?;
    let base = file_stem(&export::filename_base(&report.specs));

    std::fs::create_dir_all(&dir)?;
    write_file(&dir, &format!("{base}.csv"), &export::combined_csv(&report)?)?;

    if split {
        write_table(&dir, &format!("{base}_specs.csv"), &export::spec_table(&report.specs))?;

        let nozzles = export::nozzle_table(&report.nozzles);
        if nozzles.is_empty() {
            eprintln!("No nozzles found.");
        } else {
            write_table(&dir, &format!("{base}_nozzles.csv"), &nozzles)?;
        }

        let manways = export::manway_table(&report.manways);
        if manways.is_empty() {
            eprintln!("No manway nozzles found.");
        } else {
            write_table(&dir, &format!("{base}_manways.csv"), &manways)?;
        }
    }

    Ok(())
}

/// Replace characters that cannot appear in a single file name.
fn file_stem(base: &str) -> String {
    base.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

fn write_table(dir: &Path, name: &str, table: &Table) -> Result<(), TankSnipError> {
    write_file(dir, name, &table.to_csv()?)
}

fn write_file(dir: &Path, name: &str, contents: &str) -> Result<(), TankSnipError> {
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    eprintln!("Written {}", path.display());
    Ok(())
}
