//! Marker table recovery from full-page OCR text.
//!
//! Map margins list every marker as `<position> <name>` (centimorgans,
//! then the locus name). OCR of the full page interleaves those rows with
//! axis labels, QTL names and stray fragments, so each line is gated by
//! shape before it is trusted: a leading numeric token, and a name that
//! carries an underscore the way platform marker names do
//! (`wsnp_Ex_c13031_20661534`, `BobWhite_c7340_339`).

use std::sync::OnceLock;

use regex::Regex;

use crate::ocr::RawTextBlock;

/// Unsigned decimal with at most one point: `40`, `12.5`, `.5`, `125.`.
/// Signs, exponents and repeated points are rejected.
const POSITION_PATTERN: &str = r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)$";

/// One marker row: centimorgan position and locus name.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerRecord {
    pub position: f64,
    pub name: String,
}

fn position_regex() -> &'static Regex {
    static POSITION_REGEX: OnceLock<Regex> = OnceLock::new();
    POSITION_REGEX.get_or_init(|| Regex::new(POSITION_PATTERN).unwrap())
}

/// Parses the leading token of a marker row. Returns None when the token
/// is not shaped like an unsigned decimal position.
pub fn parse_position(token: &str) -> Option<f64> {
    if !position_regex().is_match(token) {
        return None;
    }
    token.parse().ok()
}

/// Recovers the marker table from full-page OCR output, sorted ascending
/// by position. Lines that do not parse are dropped, never reported: on a
/// noisy page most lines are not marker rows. The sort is stable, so rows
/// sharing a position keep their page order.
pub fn parse_markers(block: &RawTextBlock) -> Vec<MarkerRecord> {
    let mut markers: Vec<MarkerRecord> = block
        .lines()
        .iter()
        .filter_map(|line| parse_marker_line(line))
        .collect();
    markers.sort_by(|a, b| a.position.total_cmp(&b.position));
    markers
}

fn parse_marker_line(line: &str) -> Option<MarkerRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }
    let position = parse_position(tokens[0])?;
    // OCR sometimes splits a name; rejoin with single spaces
    let name = tokens[1..].join(" ");
    if !name.contains('_') {
        return None;
    }
    Some(MarkerRecord { position, name })
}
