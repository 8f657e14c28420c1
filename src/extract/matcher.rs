//! Pairing of QTL candidates with flanking markers.

use crate::log;

use super::markers::MarkerRecord;

/// One extracted QTL: its name, flanking markers, and the text color it
/// was recovered from.
#[derive(Clone, Debug, PartialEq)]
pub struct QtlRecord {
    pub chromosome: String,
    pub qtl_name: String,
    pub start_marker: String,
    pub end_marker: String,
    pub start_position: f64,
    pub end_position: f64,
    pub color: String,
}

/// Pairs one color's candidates with markers by rank: candidate `i` takes
/// markers `2i` and `2i+1` from the position-sorted table. Every color
/// starts again from the top of the shared table, so two colors on one
/// chromosome read the same marker ranks.
///
/// When the table runs out before the candidates do, the remaining
/// candidates are dropped with a logged diagnostic; the pairing never
/// invents a half-open span.
pub fn match_color(
    chromosome: &str,
    color: &str,
    candidates: &[String],
    markers: &[MarkerRecord],
) -> Vec<QtlRecord> {
    let mut records = Vec::new();
    for (i, name) in candidates.iter().enumerate() {
        let start_idx = 2 * i;
        let end_idx = start_idx + 1;
        if end_idx >= markers.len() {
            log(&format!(
                "{}: dropping {} {} candidate(s), only {} marker(s) available",
                chromosome,
                candidates.len() - i,
                color,
                markers.len()
            ));
            break;
        }
        let start = &markers[start_idx];
        let end = &markers[end_idx];
        records.push(QtlRecord {
            chromosome: chromosome.to_string(),
            qtl_name: name.clone(),
            start_marker: start.name.clone(),
            end_marker: end.name.clone(),
            start_position: start.position,
            end_position: end.position,
            color: color.to_string(),
        });
    }
    records
}

/// Runs the pairing for every color in the order given and concatenates
/// the results, so the output groups by color with the first-configured
/// color first.
pub fn match_all(
    chromosome: &str,
    names_by_color: &[(String, Vec<String>)],
    markers: &[MarkerRecord],
) -> Vec<QtlRecord> {
    let mut records = Vec::new();
    for (color, candidates) in names_by_color {
        records.extend(match_color(chromosome, color, candidates, markers));
    }
    records
}
