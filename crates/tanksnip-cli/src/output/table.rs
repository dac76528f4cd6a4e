use tanksnip_core::export::{self, Table};
use tanksnip_core::model::TankReport;

pub fn print(report: &TankReport) {
    println!("=== Tank Specs ===\n");
    print_table(&export::spec_table(&report.specs));
    println!();

    println!("=== Nozzles (Roof & Shell) ===\n");
    let nozzles = export::nozzle_table(&report.nozzles);
    if nozzles.is_empty() {
        println!("  No nozzles found.");
    } else {
        print_table(&nozzles);
    }
    println!();

    println!("=== Manway Nozzles ===\n");
    let manways = export::manway_table(&report.manways);
    if manways.is_empty() {
        println!("  No manway nozzles found.");
    } else {
        print_table(&manways);
    }
}

fn print_table(table: &Table) {
    let widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            table
                .rows
                .iter()
                .filter_map(|r| r.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    println!("  {}", format_row(&table.headers, &widths));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    println!("  {}", rule.join("  "));
    for row in &table.rows {
        println!("  {}", format_row(row, &widths));
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
