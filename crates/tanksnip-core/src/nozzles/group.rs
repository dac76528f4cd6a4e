use crate::model::{NozzleGroup, Repad, WithBlind};
use crate::nozzles::block::Descriptor;
use crate::options::{GroupKey, NozzleOptions, RepadAggregation};

/// A single nozzle section after descriptor and pad extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub descriptor: Descriptor,
    pub blind: bool,
    pub repad: Repad,
}

#[derive(Debug, PartialEq, Eq)]
struct Key<'a> {
    size: &'a str,
    schedule: &'a str,
    nozzle_type: &'a str,
    blind: Option<bool>,
}

impl<'a> Key<'a> {
    fn of(occurrence: &'a Occurrence, shape: GroupKey) -> Self {
        Key {
            size: &occurrence.descriptor.size,
            schedule: &occurrence.descriptor.schedule,
            nozzle_type: &occurrence.descriptor.nozzle_type,
            blind: match shape {
                GroupKey::SizeSchTypeBlind => Some(occurrence.blind),
                GroupKey::SizeSchType => None,
            },
        }
    }
}

/// Fold occurrences into groups, in order of first appearance.
///
/// A group needs a pad if any member does; its pad dimensions come from one
/// required member, picked by `repad_aggregation`.
pub fn group(occurrences: &[Occurrence], options: &NozzleOptions) -> Vec<NozzleGroup> {
    let mut keys: Vec<Key<'_>> = Vec::new();
    let mut groups: Vec<NozzleGroup> = Vec::new();

    for occurrence in occurrences {
        let key = Key::of(occurrence, options.group_key);
        let idx = match keys.iter().position(|k| *k == key) {
            Some(idx) => idx,
            None => {
                groups.push(NozzleGroup {
                    quantity: 0,
                    size: key.size.to_string(),
                    schedule: key.schedule.to_string(),
                    nozzle_type: key.nozzle_type.to_string(),
                    with_blind: match key.blind {
                        Some(flag) => WithBlind::Flag(flag),
                        None => WithBlind::Count(0),
                    },
                    repad: Repad::default(),
                });
                keys.push(key);
                groups.len() - 1
            }
        };

        let group = &mut groups[idx];
        group.quantity += 1;
        if let WithBlind::Count(n) = &mut group.with_blind {
            if occurrence.blind {
                *n += 1;
            }
        }
        if occurrence.repad.required {
            let take = match options.repad_aggregation {
                RepadAggregation::LastWrite => true,
                RepadAggregation::FirstWrite => !group.repad.required,
            };
            if take {
                group.repad = occurrence.repad.clone();
            }
        }
    }

    groups
}
