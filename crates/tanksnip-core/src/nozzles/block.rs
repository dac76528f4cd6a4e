use regex::Regex;
use std::sync::LazyLock;

static NOZZLE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:Roof|Shell)\s+Nozzle\s*:\s*(Nozzle-\d+)").unwrap());
static MANWAY_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Roof Manway:").unwrap());
static DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)NOZZLE Description\s*:\s*(\d+)\s+in\s+SCH\s+(\S+)\s+TYPE\s+([^\n]+)").unwrap()
});

/// One "Roof Nozzle:" / "Shell Nozzle:" section of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NozzleBlock<'a> {
    pub id: &'a str,
    pub text: &'a str,
}

/// Size, schedule and type from a block's description line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub size: String,
    pub schedule: String,
    pub nozzle_type: String,
}

/// Split the text into nozzle blocks.
///
/// A block runs from its marker to the next nozzle marker, the next
/// "Roof Manway:" marker, or the end of the text.
pub fn segment(text: &str) -> Vec<NozzleBlock<'_>> {
    let markers: Vec<(usize, &str)> = NOZZLE_MARKER
        .captures_iter(text)
        .filter_map(|caps| Some((caps.get(0)?.start(), caps.get(1)?.as_str())))
        .collect();
    let manways: Vec<usize> = MANWAY_MARKER.find_iter(text).map(|m| m.start()).collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, &(start, id))| {
            let next_nozzle = markers.get(i + 1).map(|&(pos, _)| pos);
            let next_manway = manways.iter().copied().find(|&pos| pos > start);
            let end = [next_nozzle, next_manway]
                .into_iter()
                .flatten()
                .min()
                .unwrap_or(text.len());
            NozzleBlock {
                id,
                text: &text[start..end],
            }
        })
        .collect()
}

pub fn describe(block: &str) -> Option<Descriptor> {
    let caps = DESCRIPTION.captures(block)?;
    Some(Descriptor {
        size: caps[1].to_string(),
        schedule: caps[2].to_string(),
        nozzle_type: caps[3].trim().to_string(),
    })
}
