//! CSV writer for extracted QTL records.
//!
//! One row per QTL. Rows are appended after each image so a failure
//! partway through a batch leaves the completed chromosomes on disk.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::extract::QtlRecord;

/// CSV header row.
const CSV_HEADER: &str =
    "Chromosome,QTL Name,Start Marker,End Marker,Start Position,End Position,Color";

/// Starts a fresh output file with the header row. Any previous content is
/// discarded: re-running a batch must reproduce the file, not extend it.
pub fn init_csv(path: &Path) -> Result<()> {
    let mut file = File::create(path).context("Failed to create CSV file")?;
    writeln!(file, "{}", CSV_HEADER).context("Failed to write CSV header")?;
    Ok(())
}

/// Appends one image's records to the CSV file.
///
/// Opens the file in append mode for each write, so results already
/// written survive a crash later in the batch.
pub fn append_records(path: &Path, records: &[QtlRecord]) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("Failed to open CSV for append")?;

    for record in records {
        writeln!(file, "{}", format_record(record)).context("Failed to write CSV row")?;
    }
    Ok(())
}

fn format_record(record: &QtlRecord) -> String {
    format!(
        "{},{},{},{},{},{},{}",
        csv_field(&record.chromosome),
        csv_field(&record.qtl_name),
        csv_field(&record.start_marker),
        csv_field(&record.end_marker),
        record.start_position,
        record.end_position,
        csv_field(&record.color),
    )
}

/// Quotes a field when it would break the row; OCR output can contain
/// commas and quotes.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_record() -> QtlRecord {
        QtlRecord {
            chromosome: "4A".to_string(),
            qtl_name: "Qyr.cas-1A".to_string(),
            start_marker: "BobWhite_c7340_339".to_string(),
            end_marker: "wsnp_Ex_c13031_20661534".to_string(),
            start_position: 5.0,
            end_position: 12.5,
            color: "Red".to_string(),
        }
    }

    #[test]
    fn test_init_csv_creates_header() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("test.csv");

        init_csv(&csv_path).unwrap();

        let content = std::fs::read_to_string(&csv_path).unwrap();
        assert!(content.starts_with(CSV_HEADER));
    }

    #[test]
    fn test_init_csv_discards_previous_run() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("test.csv");

        std::fs::write(&csv_path, "stale,rows\n1,2\n").unwrap();

        init_csv(&csv_path).unwrap();

        let content = std::fs::read_to_string(&csv_path).unwrap();
        assert_eq!(content, format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_append_records() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("test.csv");

        init_csv(&csv_path).unwrap();
        append_records(&csv_path, &[sample_record()]).unwrap();

        let content = std::fs::read_to_string(&csv_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.len(), 2); // header + 1 data row
        assert_eq!(
            lines[1],
            "4A,Qyr.cas-1A,BobWhite_c7340_339,wsnp_Ex_c13031_20661534,5,12.5,Red"
        );
    }

    #[test]
    fn test_append_empty_batch_writes_nothing() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("test.csv");

        init_csv(&csv_path).unwrap();
        append_records(&csv_path, &[]).unwrap();

        let content = std::fs::read_to_string(&csv_path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut record = sample_record();
        record.qtl_name = "Qyr.cas-1A, partial".to_string();

        let row = format_record(&record);
        assert!(row.contains("\"Qyr.cas-1A, partial\""));
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        assert_eq!(csv_field(r#"a"b"#), r#""a""b""#);
        assert_eq!(csv_field("plain"), "plain");
    }

    #[test]
    fn test_reinit_reproduces_identical_file() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("test.csv");

        init_csv(&csv_path).unwrap();
        append_records(&csv_path, &[sample_record()]).unwrap();
        let first = std::fs::read_to_string(&csv_path).unwrap();

        init_csv(&csv_path).unwrap();
        append_records(&csv_path, &[sample_record()]).unwrap();
        let second = std::fs::read_to_string(&csv_path).unwrap();

        assert_eq!(first, second);
    }
}
