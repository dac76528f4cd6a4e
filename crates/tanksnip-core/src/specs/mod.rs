//! Field extraction: the fixed catalog plus derived and composite fields.

pub mod anchors;
pub mod catalog;
pub mod shell;

use crate::model::{SpecSheet, NOT_FOUND};
use crate::options::SpecOptions;
use anchors::ChairPlates;
use catalog::CATALOG_RULES;
use regex::Regex;
use std::sync::LazyLock;

static SEISMIC_SS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Ss\s*\(g\)\s*=\s*([\d.]+)").unwrap());
static SEISMIC_S1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"S1\s*\(g\)\s*=\s*([\d.]+)").unwrap());
static ROOF_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Roof\s*Type\s*[:=]\s*(.+)").unwrap());
static ROOF_MATERIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Plates Material\s*=\s*(.+)").unwrap());
static ROOF_THICKNESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)Roof.*?\bt\.actual\s*=\s*([\d.]+)\s*in").unwrap());
static BOTTOM_MATERIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Bottom Material\s*[:=]?\s*(.+)").unwrap());
static BOTTOM_THICKNESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)Bottom.*?\bt\.actual\s*=\s*([\d.]+)\s*in").unwrap());
static RIM_MATERIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)Top Member.*?Material\s*=\s*([^\n]+)").unwrap());
static RIM_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)Top Member.*?Size\s*=\s*([^\n]+)").unwrap());

/// Names of the fields that follow the catalog, in display order.
///
/// `Shell Course {n} Thickness` entries are inserted ahead of these, one
/// per course found.
pub const DERIVED_FIELDS: &[&str] = &[
    "Seismic Design",
    "Shell - Size",
    "Shell - Quantity",
    "Roof Type",
    "Roof Material",
    "Roof Thickness",
    "Bottom Material",
    "Bottom Thickness",
    "Rim Angle Material",
    "Rim Angle Size",
    "Anchors Quantity",
    "Anchors Size",
    "Anchors Material",
    "Top Plate Thickness (in)",
    "Top Plate Size",
    "Anchor Chair Quantity",
    "Vertical Plate Quantity",
    "Vertical Plate Size",
    "Vertical Plate Thickness",
];

/// First capture group of the first match, trimmed.
pub(crate) fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

pub fn shell_course_field(course: &str) -> String {
    format!("Shell Course {course} Thickness")
}

/// Extract every catalog and derived field from the report text.
///
/// Never fails: a field whose pattern does not match holds `NOT_FOUND`.
pub fn extract_specs(text: &str, options: &SpecOptions) -> SpecSheet {
    let mut specs = SpecSheet::new();

    for (label, re) in CATALOG_RULES.iter() {
        specs.insert_or_not_found(*label, capture(re, text));
    }

    for (course, thickness) in shell::course_thicknesses(text) {
        specs.insert(shell_course_field(&course), format!("{thickness} in"));
    }

    let seismic = capture(&SEISMIC_SS, text)
        .zip(capture(&SEISMIC_S1, text))
        .map(|(ss, s1)| format!("{ss}, {s1}"));
    specs.insert_or_not_found("Seismic Design", seismic);

    let widths = shell::plate_widths(text);
    let widths = (!widths.is_empty()).then(|| {
        widths
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    });
    specs.insert_or_not_found("Shell - Size", widths);
    specs.insert_or_not_found(
        "Shell - Quantity",
        shell::course_count(text).map(|n| n.to_string()),
    );

    specs.insert_or_not_found("Roof Type", capture(&ROOF_TYPE, text));
    specs.insert_or_not_found("Roof Material", capture(&ROOF_MATERIAL, text));
    specs.insert_or_not_found(
        "Roof Thickness",
        capture(&ROOF_THICKNESS, text).map(|t| format!("{t} in")),
    );
    specs.insert_or_not_found("Bottom Material", capture(&BOTTOM_MATERIAL, text));
    specs.insert_or_not_found(
        "Bottom Thickness",
        capture(&BOTTOM_THICKNESS, text).map(|t| format!("{t} in")),
    );
    specs.insert_or_not_found("Rim Angle Material", capture(&RIM_MATERIAL, text));
    specs.insert_or_not_found("Rim Angle Size", capture(&RIM_SIZE, text));

    let anchor_quantity = anchors::anchor_quantity(text);
    let (anchor_size, anchor_material) =
        anchors::anchor_size_material(text, options.anchor_scope);
    specs.insert_or_not_found("Anchors Quantity", anchor_quantity.clone());
    specs.insert_or_not_found("Anchors Size", anchor_size);
    specs.insert_or_not_found("Anchors Material", anchor_material);

    let plates = ChairPlates::scan(text);
    specs.insert_or_not_found("Top Plate Thickness (in)", plates.c.clone());
    specs.insert_or_not_found("Top Plate Size", plates.top_plate_size());

    let anchor_quantity = anchor_quantity.unwrap_or_else(|| NOT_FOUND.to_string());
    specs.insert("Anchor Chair Quantity", anchor_quantity.clone());
    specs.insert_or_not_found(
        "Vertical Plate Quantity",
        anchors::vertical_plate_quantity(&anchor_quantity),
    );
    specs.insert_or_not_found("Vertical Plate Size", plates.vertical_plate_size());
    specs.insert_or_not_found("Vertical Plate Thickness", plates.j);

    specs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::AnchorScope;

    fn extract(text: &str) -> SpecSheet {
        extract_specs(text, &SpecOptions::default())
    }

    #[test]
    fn test_empty_text_all_sentinels() {
        let specs = extract("");
        assert_eq!(specs.len(), catalog::CATALOG.len() + DERIVED_FIELDS.len());
        assert!(specs.iter().all(|(_, v)| v == NOT_FOUND));
    }

    #[test]
    fn test_catalog_fields() {
        let text = "Tag ID: Q-2291\nProject = Bayou Storage 4\nDesign Basis: API-650 13th Ed.\n\
                    D of Tank = 30.00 ft\nS.G of Contents = 1.1\nMDMT : 20 F\n\
                    Design Wind Speed (3-sec gust) = 150 mph\n";
        let specs = extract(text);
        assert_eq!(specs.get("Quotation No"), Some("Q-2291"));
        assert_eq!(specs.get("Project ID"), Some("Bayou Storage 4"));
        assert_eq!(specs.get("Design Standard"), Some("API-650 13th Ed."));
        assert_eq!(specs.get("Tank Diameter"), Some("30.00"));
        assert_eq!(specs.get("Standard Gravity"), Some("1.1"));
        assert_eq!(specs.get("MDMT"), Some("20 F"));
        assert_eq!(specs.get("Wind Speed"), Some("150 mph"));
        assert_eq!(specs.get("Annexes Used"), Some(NOT_FOUND));
    }

    #[test]
    fn test_catalog_is_case_insensitive() {
        let specs = extract("shell height = 24");
        assert_eq!(specs.get("Shell Height"), Some("24"));
    }

    #[test]
    fn test_catalog_order_preserved() {
        let specs = extract("");
        let names: Vec<&str> = specs.iter().map(|(n, _)| n).take(3).collect();
        assert_eq!(names, vec!["Quotation No", "Project ID", "Design Standard"]);
    }

    #[test]
    fn test_shell_courses_last_write_wins() {
        let text = "Shell (1) A36: 0.3125 in\nShell (2) A36: 0.25 in\nShell (1) A36: 0.375 in";
        let specs = extract(text);
        assert_eq!(specs.get("Shell Course 1 Thickness"), Some("0.375 in"));
        assert_eq!(specs.get("Shell Course 2 Thickness"), Some("0.25 in"));
        assert_eq!(specs.get("Shell - Quantity"), Some("2"));
        let names: Vec<&str> = specs.iter().map(|(n, _)| n).collect();
        let first = names.iter().position(|n| *n == "Shell Course 1 Thickness");
        let second = names.iter().position(|n| *n == "Shell Course 2 Thickness");
        assert!(first < second);
    }

    #[test]
    fn test_seismic_requires_both() {
        assert_eq!(extract("Ss (g) = 0.12").get("Seismic Design"), Some(NOT_FOUND));
        let specs = extract("Ss (g) = 0.12\nS1 (g) = 0.05");
        assert_eq!(specs.get("Seismic Design"), Some("0.12, 0.05"));
    }

    #[test]
    fn test_shell_size() {
        let text = "Shell Width\n1 48\n2 982\n3 60\nShell Weight\n1 99\n";
        assert_eq!(extract(text).get("Shell - Size"), Some("48, 60"));
    }

    #[test]
    fn test_roof_and_bottom_thickness_cross_lines() {
        let text = "Roof Design\nPlates Material = A36\nt.required = 0.1\nt.actual = 0.1875 in\n\
                    Bottom Design\nBottom Material : A36\nt.actual = 0.25 in\n";
        let specs = extract(text);
        assert_eq!(specs.get("Roof Material"), Some("A36"));
        assert_eq!(specs.get("Roof Thickness"), Some("0.1875 in"));
        assert_eq!(specs.get("Bottom Material"), Some("A36"));
        assert_eq!(specs.get("Bottom Thickness"), Some("0.25 in"));
    }

    #[test]
    fn test_rim_angle() {
        let text = "Top Member\nType: angle\nSize = L3x3x1/4\nMaterial = A36\n";
        let specs = extract(text);
        assert_eq!(specs.get("Rim Angle Size"), Some("L3x3x1/4"));
        assert_eq!(specs.get("Rim Angle Material"), Some("A36"));
    }

    #[test]
    fn test_anchor_quantities() {
        let specs = extract("Anchors\nQuantity = 6\n");
        assert_eq!(specs.get("Anchors Quantity"), Some("6"));
        assert_eq!(specs.get("Anchor Chair Quantity"), Some("6"));
        assert_eq!(specs.get("Vertical Plate Quantity"), Some("12"));
    }

    #[test]
    fn test_anchor_quantity_missing() {
        let specs = extract("Quantity = 6");
        assert_eq!(specs.get("Anchor Chair Quantity"), Some(NOT_FOUND));
        assert_eq!(specs.get("Vertical Plate Quantity"), Some(NOT_FOUND));
    }

    #[test]
    fn test_section_scoped_anchors() {
        let text = "Top Member\nSize = 3 in\nMaterial = A36\nAnchors\nQuantity = 8\nSize = 1.5 in\nMaterial = F1554\n";
        let legacy = extract(text);
        assert_eq!(legacy.get("Anchors Size"), Some("3 in"));
        let scoped = extract_specs(
            text,
            &SpecOptions {
                anchor_scope: AnchorScope::Section,
            },
        );
        assert_eq!(scoped.get("Anchors Size"), Some("1.5 in"));
        assert_eq!(scoped.get("Anchors Material"), Some("F1554"));
    }

    #[test]
    fn test_idempotent() {
        let text = "Tag ID: Q-1\nShell (1) A36: 0.25 in\nAnchors\nQuantity = 4\n";
        assert_eq!(extract(text), extract(text));
    }
}
