use crate::options::BlindDetection;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static NOZZLE_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Nozzle-\d+").unwrap());

const BLIND_MARKER: &str = "W/ BLIND";

/// Blind flange flag per nozzle identifier (e.g. "Nozzle-0003").
///
/// Once an identifier is flagged it stays flagged, even if it is named
/// again later without the marker.
pub fn blind_flags(text: &str, detection: BlindDetection) -> HashMap<String, bool> {
    match detection {
        BlindDetection::ForwardBlock => forward_blocks(text),
        BlindDetection::IdentifierLine => identifier_lines(text),
    }
}

/// Lines accumulate until one names an identifier; that block's marker
/// applies to every identifier on the closing line.
fn forward_blocks(text: &str) -> HashMap<String, bool> {
    let mut flags = HashMap::new();
    let mut block = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        block.push_str(line);
        block.push('\n');

        let ids: Vec<&str> = NOZZLE_ID.find_iter(line).map(|m| m.as_str()).collect();
        if ids.is_empty() {
            continue;
        }
        let has_blind = has_marker(&block);
        for id in ids {
            record(&mut flags, id, has_blind);
        }
        block.clear();
    }

    flags
}

fn identifier_lines(text: &str) -> HashMap<String, bool> {
    let mut flags = HashMap::new();
    for line in text.lines() {
        let has_blind = has_marker(line);
        for m in NOZZLE_ID.find_iter(line) {
            record(&mut flags, m.as_str(), has_blind);
        }
    }
    flags
}

fn has_marker(text: &str) -> bool {
    text.to_uppercase().contains(BLIND_MARKER)
}

// Sticky: an ID's own section-header line would otherwise clear the flag
// set by its table row.
fn record(flags: &mut HashMap<String, bool>, id: &str, has_blind: bool) {
    *flags.entry(id.to_string()).or_insert(false) |= has_blind;
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN_VIEW: &str = "\
N1 6\" FLANGED\n\
w/ blind, see detail\n\
Nozzle-0001\n\
\n\
N2 4\" FLANGED\n\
Nozzle-0002\n";

    #[test]
    fn test_forward_block_flags_preceding_lines() {
        let flags = blind_flags(PLAN_VIEW, BlindDetection::ForwardBlock);
        assert_eq!(flags.get("Nozzle-0001"), Some(&true));
        assert_eq!(flags.get("Nozzle-0002"), Some(&false));
    }

    #[test]
    fn test_identifier_line_ignores_preceding_lines() {
        let flags = blind_flags(PLAN_VIEW, BlindDetection::IdentifierLine);
        assert_eq!(flags.get("Nozzle-0001"), Some(&false));
        assert_eq!(flags.get("Nozzle-0002"), Some(&false));
    }

    #[test]
    fn test_marker_on_identifier_line() {
        let text = "Nozzle-0007 8\" W/ BLIND\n";
        for detection in [BlindDetection::ForwardBlock, BlindDetection::IdentifierLine] {
            assert_eq!(blind_flags(text, detection).get("Nozzle-0007"), Some(&true));
        }
    }

    #[test]
    fn test_blank_lines_do_not_close_block() {
        let text = "W/ BLIND\n\n\nNozzle-0004\n";
        let flags = blind_flags(text, BlindDetection::ForwardBlock);
        assert_eq!(flags.get("Nozzle-0004"), Some(&true));
    }

    #[test]
    fn test_flag_is_sticky() {
        let text = "Nozzle-0001 W/ BLIND\nShell Nozzle: Nozzle-0001\n";
        let flags = blind_flags(text, BlindDetection::ForwardBlock);
        assert_eq!(flags.get("Nozzle-0001"), Some(&true));
    }
}
