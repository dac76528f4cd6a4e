use regex::Regex;
use std::sync::LazyLock;

/// Scalar fields read with a single first-match search, in display order.
///
/// All patterns are matched case-insensitively; group 1 is the value.
pub const CATALOG: &[(&str, &str)] = &[
    ("Quotation No", r"Tag ID\s*[:=]?\s*([\w-]+)"),
    ("Project ID", r"Project\s*=\s*([^\n]+)"),
    ("Design Standard", r"Design Basis\s*[:=]?\s*([^\n]+)"),
    ("Annexes Used", r"Annexes Used\s*[:=]?\s*([^\n]+)"),
    ("Internal Pressure", r"Design Internal Pressure\s*[:=]?\s*([^\n]+)"),
    ("External Pressure", r"Design External Pressure\s*[:=]?\s*([^\n]+)"),
    ("Tank Diameter", r"D of Tank\s*=\s*([\d.]+)"),
    ("Outside Diameter", r"OD of Tank\s*[:=]?\s*([\d.]+)"),
    ("Inside Diameter", r"ID of Tank\s*[:=]?\s*([\d.]+)"),
    ("Shell Height", r"Shell Height\s*=\s*([\d.]+)"),
    ("Standard Gravity", r"S\.G of Contents\s*[:=]?\s*([\d.]+)"),
    ("Liquid Level", r"Max Design Liq\. Level\s*[:=]?\s*([\d.]+)"),
    ("Design Temperature", r"Design Temperature\s*[:=]?\s*([^\n]+)"),
    ("MDMT", r"\bMDMT\s*[:=]?\s*([^\n]+)"),
    ("Roof Live Load", r"Roof Live Load\s*[:=]?\s*([^\n]+)"),
    ("Wind Speed", r"Design Wind Speed.*?=\s*([\d.]+\s*mph)"),
];

pub(crate) static CATALOG_RULES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    CATALOG
        .iter()
        .map(|(label, pattern)| (*label, Regex::new(&format!("(?i){pattern}")).unwrap()))
        .collect()
});
