use regex::Regex;
use std::sync::LazyLock;

static COURSE_THICKNESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Shell\s*\((\d+)\)\s*[A-Z0-9\-]+\s*:\s*([\d.]+)\s*in").unwrap()
});
static COURSE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Shell\s*\((\d+)\)").unwrap());
static WIDTH_ROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\s+(\d+)").unwrap());

const WIDTH_HEADER: &str = "Shell Width";
const WIDTH_STOP_MARKERS: &[&str] = &["Shell Weight", "Weight CA"];

/// Plausible shell plate widths in inches. Filters mis-tokenized cells.
const WIDTH_RANGE: std::ops::RangeInclusive<u32> = 30..=120;

/// Every "Shell (n) MATERIAL: t in" occurrence as (course, thickness).
///
/// The course number is kept as written so it can name a field.
pub fn course_thicknesses(text: &str) -> Vec<(String, String)> {
    COURSE_THICKNESS
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Highest course number mentioned anywhere as "Shell (n)".
pub fn course_count(text: &str) -> Option<u64> {
    COURSE_NUMBER
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<u64>().ok())
        .max()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WidthScan {
    Idle,
    Capturing,
    Finished,
}

/// Plate widths from the shell width table, in encounter order.
///
/// The weight table that follows the width table has the same row shape,
/// so the scan ends for good at its first stop marker.
pub fn plate_widths(text: &str) -> Vec<u32> {
    let mut state = WidthScan::Idle;
    let mut widths = Vec::new();

    for line in text.lines() {
        match state {
            WidthScan::Finished => break,
            _ if line.contains(WIDTH_HEADER) => state = WidthScan::Capturing,
            WidthScan::Idle => {}
            WidthScan::Capturing => {
                if WIDTH_STOP_MARKERS.iter().any(|m| line.contains(m)) {
                    state = WidthScan::Finished;
                    continue;
                }
                let Some(caps) = WIDTH_ROW.captures(line.trim()) else {
                    continue;
                };
                match caps[1].parse::<u32>() {
                    Ok(width) if WIDTH_RANGE.contains(&width) => widths.push(width),
                    Ok(width) => tracing::debug!(width, "shell width outside plausible range"),
                    Err(_) => {}
                }
            }
        }
    }

    widths
}
