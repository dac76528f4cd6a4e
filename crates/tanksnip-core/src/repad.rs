//! Reinforcement pad rule shared by nozzle and manway blocks.

use crate::model::Repad;
use crate::options::{RepadPolicy, ZeroThickness};
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

static REPAD_REQUIRED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Reinforcement Pad is required").unwrap());
static REQUIRED_THICKNESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)t_rpr\s*=\s*([\d.]+)\s*in").unwrap());
static PAD_OD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Repad Size\s*\(OD\)\s*Must be\s*=\s*([\d.]+)\s*in").unwrap());

/// Thinnest pad plate used when the report states a zero thickness (3/16 in).
pub const MIN_PAD_THICKNESS: Decimal = Decimal::from_parts(1875, 0, 0, false, 4);

/// Evaluate the pad rule over one nozzle or manway block.
///
/// A pad is required only when the block says so and the stated `t_rpr`
/// (after the zero policy) is positive. Dimensions are reported only for
/// required pads; a missing OD leaves the OD empty.
pub fn evaluate(block: &str, policy: &RepadPolicy) -> Repad {
    if !REPAD_REQUIRED.is_match(block) {
        return Repad::default();
    }

    let thickness = REQUIRED_THICKNESS
        .captures(block)
        .and_then(|caps| parse_thickness(&caps[1]))
        .map(|t| match policy.zero_thickness {
            ZeroThickness::Floor if t.is_zero() => MIN_PAD_THICKNESS,
            _ => t,
        });

    match thickness {
        Some(t) if t > Decimal::ZERO => Repad {
            required: true,
            od: PAD_OD.captures(block).and_then(|caps| parse_inches(&caps[1])),
            thickness: Some(t),
        },
        _ => Repad::default(),
    }
}

/// Like `parse_inches`, but a value that only rounds to zero is rejected so
/// the zero policy sees exact zeros alone.
fn parse_thickness(raw: &str) -> Option<Decimal> {
    let t = parse_inches(raw)?;
    if t.is_zero() && raw.chars().any(|c| c.is_ascii_digit() && c != '0') {
        tracing::debug!(value = raw, "pad thickness below decimal precision");
        return None;
    }
    Some(t)
}

fn parse_inches(raw: &str) -> Option<Decimal> {
    match Decimal::from_str(raw) {
        Ok(d) => Some(d.normalize()),
        Err(e) => {
            tracing::debug!(value = raw, error = %e, "unparseable pad dimension");
            None
        }
    }
}
