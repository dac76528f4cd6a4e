//! Tabular rendering and CSV export of an extracted report.

use crate::error::TankSnipError;
use crate::model::{ManwayEntity, NozzleGroup, Repad, SpecSheet, TankReport, NOT_FOUND};
use rust_decimal::Decimal;

pub const SPEC_HEADERS: &[&str] = &["Field", "Value"];

pub const NOZZLE_HEADERS: &[&str] = &[
    "QTY",
    "Size",
    "SCH",
    "Type",
    "With Blind",
    "Repad Required",
    "Repad OD (in)",
    "Repad Thickness (in)",
];

pub const MANWAY_HEADERS: &[&str] = &[
    "QTY",
    "Size",
    "Neck Thickness (in)",
    "Type",
    "Repad Required",
    "Repad OD (in)",
    "Repad Thickness (in)",
];

/// A header row plus string cells, ready for display or CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    fn new(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_csv(&self) -> Result<String, TankSnipError> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| TankSnipError::Io(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

pub fn spec_table(specs: &SpecSheet) -> Table {
    let rows = specs
        .iter()
        .map(|(name, value)| vec![name.to_string(), value.to_string()])
        .collect();
    Table::new(SPEC_HEADERS, rows)
}

pub fn nozzle_table(nozzles: &[NozzleGroup]) -> Table {
    let rows = nozzles
        .iter()
        .map(|n| {
            let mut row = vec![
                n.quantity.to_string(),
                inches(&n.size),
                n.schedule.clone(),
                n.nozzle_type.clone(),
                n.with_blind.to_string(),
            ];
            row.extend(repad_cells(&n.repad));
            row
        })
        .collect();
    Table::new(NOZZLE_HEADERS, rows)
}

pub fn manway_table(manways: &[ManwayEntity]) -> Table {
    let rows = manways
        .iter()
        .map(|m| {
            let mut row = vec![
                m.quantity.to_string(),
                inches(&m.size),
                m.neck_thickness.clone(),
                m.manway_type.clone(),
            ];
            row.extend(repad_cells(&m.repad));
            row
        })
        .collect();
    Table::new(MANWAY_HEADERS, rows)
}

fn inches(size: &str) -> String {
    format!("{size}\"")
}

fn repad_cells(repad: &Repad) -> [String; 3] {
    let dim = |d: Option<Decimal>| d.map(|v| v.to_string()).unwrap_or_default();
    [
        if repad.required { "1" } else { "0" }.to_string(),
        dim(repad.od),
        dim(repad.thickness),
    ]
}

/// All tables in one CSV document with labelled sections.
///
/// Nozzle and manway sections are left out when they have no rows.
pub fn combined_csv(report: &TankReport) -> Result<String, TankSnipError> {
    let mut parts = vec![
        "=== TANK SPECS ===".to_string(),
        spec_table(&report.specs).to_csv()?,
    ];

    let nozzles = nozzle_table(&report.nozzles);
    if !nozzles.is_empty() {
        parts.push("\n=== NOZZLES ===".to_string());
        parts.push(nozzles.to_csv()?);
    }

    let manways = manway_table(&report.manways);
    if !manways.is_empty() {
        parts.push("\n=== MANWAYS ===".to_string());
        parts.push(manways.to_csv()?);
    }

    Ok(parts.join("\n"))
}

/// File name stem for exports: `{quotation}_{project}`, or `{quotation}`
/// when the project ID is missing.
pub fn filename_base(specs: &SpecSheet) -> String {
    let quote = specs.get("Quotation No").unwrap_or("quote").trim();
    let quote = underscored(quote);

    let project = specs.get("Project ID").unwrap_or("").trim();
    let missing = project.is_empty()
        || project.eq_ignore_ascii_case(NOT_FOUND)
        || project.eq_ignore_ascii_case("none");
    if missing {
        quote
    } else {
        format!("{}_{}", quote, underscored(project))
    }
}

fn underscored(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WithBlind;
    use rust_decimal_macros::dec;

    fn specs(quote: &str, project: &str) -> SpecSheet {
        let mut s = SpecSheet::new();
        s.insert("Quotation No", quote);
        s.insert("Project ID", project);
        s
    }

    fn nozzle() -> NozzleGroup {
        NozzleGroup {
            quantity: 2,
            size: "6".into(),
            schedule: "40".into(),
            nozzle_type: "RFWN".into(),
            with_blind: WithBlind::Flag(true),
            repad: Repad {
                required: true,
                od: Some(dec!(13.5)),
                thickness: Some(dec!(0.1875)),
            },
        }
    }

    #[test]
    fn test_filename_with_project() {
        assert_eq!(filename_base(&specs("Q-100", "Bayou Tank 4")), "Q-100_Bayou_Tank_4");
    }

    #[test]
    fn test_filename_without_project() {
        assert_eq!(filename_base(&specs("Q-100", NOT_FOUND)), "Q-100");
        assert_eq!(filename_base(&specs("Q-100", "  ")), "Q-100");
        assert_eq!(filename_base(&specs("Q-100", "None")), "Q-100");
    }

    #[test]
    fn test_nozzle_row() {
        let table = nozzle_table(&[nozzle()]);
        assert_eq!(table.headers.len(), NOZZLE_HEADERS.len());
        assert_eq!(
            table.rows[0],
            vec!["2", "6\"", "40", "RFWN", "Yes", "1", "13.5", "0.1875"]
        );
    }

    #[test]
    fn test_manway_row_without_pad() {
        let manway = ManwayEntity {
            quantity: 1,
            size: "24".into(),
            neck_thickness: "0.25".into(),
            manway_type: String::new(),
            repad: Repad::default(),
        };
        let table = manway_table(&[manway]);
        assert_eq!(table.rows[0], vec!["1", "24\"", "0.25", "", "0", "", ""]);
    }

    #[test]
    fn test_nozzle_csv_quotes_inch_marks() {
        let table = nozzle_table(&[nozzle()]);
        let csv = table.to_csv().unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("QTY,Size,SCH,Type,With Blind,Repad Required,Repad OD (in),Repad Thickness (in)")
        );
        assert_eq!(lines.next(), Some("2,\"6\"\"\",40,RFWN,Yes,1,13.5,0.1875"));
    }

    #[test]
    fn test_combined_csv_sections() {
        let report = TankReport {
            specs: specs("Q-1", "P"),
            nozzles: vec![nozzle()],
            manways: vec![],
        };
        let csv = combined_csv(&report).unwrap();
        assert!(csv.starts_with("=== TANK SPECS ===\nField,Value\nQuotation No,Q-1\nProject ID,P\n"));
        assert!(csv.contains("\n\n=== NOZZLES ===\nQTY,"));
        assert!(!csv.contains("=== MANWAYS ==="));
    }
}
