use crate::options::AnchorScope;
use crate::specs::capture;
use regex::Regex;
use std::sync::LazyLock;

static ANCHORS_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Anchors").unwrap());
static ANCHORS_QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)Anchors.*?Quantity\s*=\s*(\d+)").unwrap());
static BARE_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Size\s*=\s*([\d.]+\s*in)").unwrap());
static BARE_MATERIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Material\s*=\s*([A-Z0-9\-]+)").unwrap());

// Anchor chair plate dimensions, named as on the chair sketch.
static PLATE_A: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"a\s*=\s*([\d.]+)\s*in").unwrap());
static PLATE_B: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"b\s*=\s*([\d.]+)\s*in").unwrap());
static PLATE_C: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"c\s*=\s*([\d.]+)\s*in").unwrap());
static PLATE_H: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"h\s*=\s*([\d.]+)\s*in").unwrap());
static PLATE_J: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"j\s*=\s*([\d.]+)\s*in").unwrap());

pub fn anchor_quantity(text: &str) -> Option<String> {
    capture(&ANCHORS_QUANTITY, text)
}

/// Anchor bolt size and material.
///
/// With `AnchorScope::Legacy` these are the first bare `Size=` and
/// `Material=` anywhere in the report, which may belong to another section.
pub fn anchor_size_material(text: &str, scope: AnchorScope) -> (Option<String>, Option<String>) {
    let haystack = match scope {
        AnchorScope::Legacy => text,
        AnchorScope::Section => match ANCHORS_HEADING.find(text) {
            Some(m) => &text[m.start()..],
            None => return (None, None),
        },
    };
    (capture(&BARE_SIZE, haystack), capture(&BARE_MATERIAL, haystack))
}

/// Two vertical plates per anchor chair.
pub fn vertical_plate_quantity(anchor_quantity: &str) -> Option<String> {
    match anchor_quantity.trim().parse::<u64>() {
        Ok(n) => n.checked_mul(2).map(|q| q.to_string()),
        Err(e) => {
            tracing::debug!(value = anchor_quantity, error = %e, "anchor quantity is not an integer");
            None
        }
    }
}

/// Chair plate dimensions captured once and shared between composites.
#[derive(Debug, Default)]
pub struct ChairPlates {
    pub a: Option<String>,
    pub b: Option<String>,
    pub c: Option<String>,
    pub h: Option<String>,
    pub j: Option<String>,
}

impl ChairPlates {
    pub fn scan(text: &str) -> Self {
        ChairPlates {
            a: capture(&PLATE_A, text),
            b: capture(&PLATE_B, text),
            c: capture(&PLATE_C, text),
            h: capture(&PLATE_H, text),
            j: capture(&PLATE_J, text),
        }
    }

    /// "a, b" of the top plate.
    pub fn top_plate_size(&self) -> Option<String> {
        pair(self.a.as_deref(), self.b.as_deref())
    }

    /// "b, h" of the vertical plate; reuses the top plate's `b`.
    pub fn vertical_plate_size(&self) -> Option<String> {
        pair(self.b.as_deref(), self.h.as_deref())
    }
}

fn pair(first: Option<&str>, second: Option<&str>) -> Option<String> {
    Some(format!("{}, {}", first?, second?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_quantity_crosses_lines() {
        let text = "Anchors\nType: bolt\nQuantity = 6\n";
        assert_eq!(anchor_quantity(text).as_deref(), Some("6"));
    }

    #[test]
    fn test_legacy_scope_takes_first_anywhere() {
        let text = "Top Member\nSize = 3.0 in\nMaterial = A36\nAnchors\nSize = 1.25 in\nMaterial = F1554-36\n";
        let (size, material) = anchor_size_material(text, AnchorScope::Legacy);
        assert_eq!(size.as_deref(), Some("3.0 in"));
        assert_eq!(material.as_deref(), Some("A36"));
    }

    #[test]
    fn test_section_scope_starts_at_anchors() {
        let text = "Top Member\nSize = 3.0 in\nMaterial = A36\nAnchors\nSize = 1.25 in\nMaterial = F1554-36\n";
        let (size, material) = anchor_size_material(text, AnchorScope::Section);
        assert_eq!(size.as_deref(), Some("1.25 in"));
        assert_eq!(material.as_deref(), Some("F1554-36"));
    }

    #[test]
    fn test_section_scope_without_heading() {
        let (size, material) = anchor_size_material("Size = 1 in\nMaterial = A36", AnchorScope::Section);
        assert!(size.is_none());
        assert!(material.is_none());
    }

    #[test]
    fn test_vertical_plate_quantity() {
        assert_eq!(vertical_plate_quantity("6").as_deref(), Some("12"));
        assert_eq!(vertical_plate_quantity("Not found"), None);
        assert_eq!(vertical_plate_quantity(&u64::MAX.to_string()), None);
    }

    #[test]
    fn test_plate_composites_share_b() {
        let plates = ChairPlates::scan("a = 10 in\nb = 8 in\nc = 0.75 in\nh = 12 in\nj = 0.5 in");
        assert_eq!(plates.top_plate_size().as_deref(), Some("10, 8"));
        assert_eq!(plates.vertical_plate_size().as_deref(), Some("8, 12"));
        assert_eq!(plates.c.as_deref(), Some("0.75"));
        assert_eq!(plates.j.as_deref(), Some("0.5"));
    }

    #[test]
    fn test_plate_composite_needs_both() {
        let plates = ChairPlates::scan("a = 10 in\nh = 12 in");
        assert!(plates.top_plate_size().is_none());
        assert!(plates.vertical_plate_size().is_none());
    }
}
