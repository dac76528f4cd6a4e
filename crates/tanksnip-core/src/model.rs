use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Placeholder stored for every field whose pattern did not match.
pub const NOT_FOUND: &str = "Not found";

/// Extracted tank fields, in insertion order.
///
/// Behaves like an insertion-ordered map: inserting a name that already
/// exists replaces its value and keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecSheet {
    fields: Vec<(String, String)>,
}

impl SpecSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Insert `value`, or the sentinel when it is `None`.
    pub fn insert_or_not_found(&mut self, name: impl Into<String>, value: Option<String>) {
        self.insert(name, value.unwrap_or_else(|| NOT_FOUND.to_string()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// True when the field exists and holds a real value.
    pub fn is_found(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| v != NOT_FOUND)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for SpecSheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Reinforcement pad outcome for a nozzle group or manway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repad {
    pub required: bool,
    /// Pad outside diameter in inches, when the report states one.
    pub od: Option<Decimal>,
    /// Pad thickness in inches, after the minimum-thickness substitution.
    pub thickness: Option<Decimal>,
}

/// Blind flange column of a nozzle group.
///
/// A flag when the blind flange is part of the grouping key, otherwise the
/// number of occurrences in the group that carry a blind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WithBlind {
    Flag(bool),
    Count(usize),
}

impl fmt::Display for WithBlind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WithBlind::Flag(true) => write!(f, "Yes"),
            WithBlind::Flag(false) => write!(f, "No"),
            WithBlind::Count(n) => write!(f, "{n}"),
        }
    }
}

/// Nozzles sharing size, schedule, type (and blind flange, by default).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NozzleGroup {
    pub quantity: usize,
    /// Nominal size in inches, as written in the description.
    pub size: String,
    pub schedule: String,
    pub nozzle_type: String,
    pub with_blind: WithBlind,
    pub repad: Repad,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManwayEntity {
    pub quantity: usize,
    /// Nominal size in inches.
    pub size: String,
    /// Neck thickness in inches, empty when not stated.
    pub neck_thickness: String,
    pub manway_type: String,
    pub repad: Repad,
}

/// Everything extracted from one calculation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TankReport {
    pub specs: SpecSheet,
    pub nozzles: Vec<NozzleGroup>,
    pub manways: Vec<ManwayEntity>,
}
