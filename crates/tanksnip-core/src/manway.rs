//! Roof manway extraction.
//!
//! Reports carry at most one manway region, starting at "Roof Manway:" and
//! ending at the next blank line.

use crate::model::ManwayEntity;
use crate::options::RepadPolicy;
use crate::repad;
use regex::Regex;
use std::sync::LazyLock;

static REGION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Roof Manway:[\s\S]*?(?:\n[ \t\r]*\n|\z)").unwrap());
static DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)MANWAY Description\s*:\s*(\d+)(?:[^\n]*?\bTYPE\s+([^\n]+))?").unwrap()
});
static NECK_THICKNESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Neck Thickness\s*[:=]?\s*([\d.]+)").unwrap());

/// Extract the roof manway, if the report has one. Never fails.
pub fn extract_manways(text: &str, repad_policy: &RepadPolicy) -> Vec<ManwayEntity> {
    let Some(region) = REGION.find(text) else {
        return Vec::new();
    };
    let region = region.as_str();

    let Some(caps) = DESCRIPTION.captures(region) else {
        tracing::debug!("roof manway region has no description, skipped");
        return Vec::new();
    };

    vec![ManwayEntity {
        quantity: 1,
        size: caps[1].to_string(),
        neck_thickness: NECK_THICKNESS
            .captures(region)
            .map(|c| c[1].to_string())
            .unwrap_or_default(),
        manway_type: caps
            .get(2)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
        repad: repad::evaluate(region, repad_policy),
    }]
}
