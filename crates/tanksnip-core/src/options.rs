//! Policy switches for behaviors where report variants disagree.
//!
//! Defaults reproduce the established output; every alternative is opt-in.

use crate::error::TankSnipError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub specs: SpecOptions,
    pub nozzles: NozzleOptions,
    pub repad: RepadPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecOptions {
    pub anchor_scope: AnchorScope,
}

/// Where "Anchors Size" and "Anchors Material" are searched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorScope {
    /// First bare `Size=` / `Material=` anywhere in the text.
    #[default]
    Legacy,
    /// Only text from the first "Anchors" heading onward. Changes output
    /// for reports where another section states a size or material first.
    Section,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NozzleOptions {
    pub blind_detection: BlindDetection,
    pub group_key: GroupKey,
    pub repad_aggregation: RepadAggregation,
}

/// How a nozzle identifier gets its blind flange flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlindDetection {
    /// The lines accumulated up to and including the identifier line.
    #[default]
    ForwardBlock,
    /// Only lines that name the identifier.
    IdentifierLine,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    /// (size, schedule, type)
    SizeSchType,
    /// (size, schedule, type, blind flange)
    #[default]
    SizeSchTypeBlind,
}

/// Which required occurrence supplies a group's pad dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepadAggregation {
    #[default]
    LastWrite,
    FirstWrite,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepadPolicy {
    pub zero_thickness: ZeroThickness,
}

/// Treatment of a stated `t_rpr` of exactly zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroThickness {
    /// Substitute the 3/16 in minimum plate before the positivity test.
    #[default]
    Floor,
    /// Zero thickness means no pad.
    NotRequired,
}

/// Load options from a JSON file.
pub fn load_options(path: &Path) -> Result<ExtractOptions, TankSnipError> {
    let content = std::fs::read_to_string(path).map_err(|e| TankSnipError::OptionsLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_options(&content, path)
}

/// Parse options from a JSON string. Missing keys take their defaults.
pub fn parse_options(json: &str, source: &Path) -> Result<ExtractOptions, TankSnipError> {
    serde_json::from_str(json).map_err(|e| TankSnipError::OptionsLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let opts = parse_options("{}", Path::new("opts.json")).unwrap();
        assert_eq!(opts, ExtractOptions::default());
    }

    #[test]
    fn test_partial_options() {
        let json = r#"{
            "specs": { "anchor_scope": "section" },
            "nozzles": { "group_key": "size_sch_type" }
        }"#;
        let opts = parse_options(json, Path::new("opts.json")).unwrap();
        assert_eq!(opts.specs.anchor_scope, AnchorScope::Section);
        assert_eq!(opts.nozzles.group_key, GroupKey::SizeSchType);
        assert_eq!(opts.nozzles.blind_detection, BlindDetection::ForwardBlock);
        assert_eq!(opts.repad.zero_thickness, ZeroThickness::Floor);
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let json = r#"{ "repad": { "zero_thickness": "maybe" } }"#;
        let err = parse_options(json, Path::new("bad.json")).unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_options(Path::new("/nonexistent/tanksnip.json")).unwrap_err();
        assert!(matches!(err, TankSnipError::OptionsLoad { .. }));
    }
}
