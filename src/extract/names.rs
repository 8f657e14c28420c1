//! QTL name candidate selection from color-isolated OCR text.

use crate::ocr::RawTextBlock;

/// Returns true if the line looks like a QTL label from this naming scheme:
/// it must carry the trait prefix marker `Q` and the lab fragment `cas`
/// (e.g. `Qyr.cas-1A`). Checked anywhere in the line, so OCR noise around
/// the label does not hide it.
pub fn is_qtl_name_line(line: &str) -> bool {
    line.contains('Q') && line.contains("cas")
}

/// Selects QTL name candidates from OCR output, preserving emission order.
/// On these maps text order top-to-bottom tracks position along the
/// chromosome axis, and downstream pairing depends on it.
pub fn filter_qtl_names(block: &RawTextBlock) -> Vec<String> {
    filter_qtl_names_with(block, is_qtl_name_line)
}

/// Same selection with a caller-supplied line test, for maps that use a
/// different naming scheme.
pub fn filter_qtl_names_with<F>(block: &RawTextBlock, is_candidate: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    block
        .lines()
        .iter()
        .map(|line| line.trim())
        .filter(|line| is_candidate(line))
        .map(str::to_string)
        .collect()
}
