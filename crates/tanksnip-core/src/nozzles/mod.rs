//! Nozzle schedule extraction.
//!
//! The report lists every nozzle in its own "Roof Nozzle:" or "Shell Nozzle:"
//! section. Each section yields one occurrence; occurrences sharing size,
//! schedule and type (and blind flange, by default) fold into one group.

pub mod blind;
pub mod block;
pub mod group;

use crate::model::NozzleGroup;
use crate::options::{NozzleOptions, RepadPolicy};
use crate::repad;
use group::Occurrence;

/// Extract grouped nozzles from the report text. Never fails.
pub fn extract_nozzles(
    text: &str,
    options: &NozzleOptions,
    repad_policy: &RepadPolicy,
) -> Vec<NozzleGroup> {
    let flags = blind::blind_flags(text, options.blind_detection);

    let occurrences: Vec<Occurrence> = block::segment(text)
        .into_iter()
        .filter_map(|b| {
            let Some(descriptor) = block::describe(b.text) else {
                tracing::debug!(nozzle = b.id, "nozzle section has no description, skipped");
                return None;
            };
            Some(Occurrence {
                descriptor,
                blind: flags.get(b.id).copied().unwrap_or(false),
                repad: repad::evaluate(b.text, repad_policy),
            })
        })
        .collect();

    group::group(&occurrences, options)
}
