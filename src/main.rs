//! QTL Table Extraction Tool
//!
//! Recovers QTL/marker tables from rasterized genetic-map chromosome
//! images. Maps annotate each QTL and its flanking markers in a shared
//! text color; this tool isolates each color, OCRs the isolated text for
//! QTL names and the unmasked image for the marker table, and pairs them
//! into one CSV row per QTL.

mod colors;
mod extract;
mod ocr;
mod pipeline;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Extra log destination, set once from the command line.
static LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);

/// Logs a message to the console, and to the log file when one is
/// configured, with a timestamp.
pub fn log(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, msg);
    print!("{}", line);
    if let Ok(guard) = LOG_FILE.lock() {
        if let Some(path) = guard.as_ref() {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }
}

fn set_log_file(path: Option<PathBuf>) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = path;
    }
}

#[derive(Parser)]
#[command(name = "qtl-extract")]
#[command(about = "Extract QTL/marker tables from genetic-map chromosome images by text color")]
#[command(version)]
struct Cli {
    /// Chromosome map images; each file stem names its chromosome (4A.png -> 4A)
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Output CSV path
    #[arg(long, default_value = "qtl_table.csv")]
    out: PathBuf,

    /// JSON config overriding color ranges and OCR options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save per-color isolated images here for inspection
    #[arg(long)]
    debug_dir: Option<PathBuf>,

    /// Append log lines to this file as well as the console
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_log_file(cli.log_file.clone());

    let mut config = pipeline::load_config(cli.config.as_deref());
    if cli.debug_dir.is_some() {
        config.debug_dir = cli.debug_dir.clone();
    }

    // Ensure Tesseract is available (downloads language data if needed).
    // A setup failure is only a warning: discovery runs again per call and
    // a system install may still resolve everything itself.
    if let Err(e) = ocr::ensure_tesseract(&config.ocr) {
        log(&format!("Warning: Failed to set up Tesseract: {}", e));
        log("OCR may not work until Tesseract is installed.");
    }

    pipeline::init_csv(&cli.out)?;
    log(&format!("Writing records to {}", cli.out.display()));

    let mut total_records = 0usize;
    let mut skipped = 0usize;
    for image in &cli.images {
        match pipeline::extract_image(image, &config) {
            Ok(records) => {
                pipeline::append_records(&cli.out, &records)?;
                total_records += records.len();
                log(&format!("{}: {} record(s)", image.display(), records.len()));
            }
            Err(e) => {
                skipped += 1;
                log(&format!("Skipping {}: {}", image.display(), e));
            }
        }
    }

    log(&format!(
        "Done: {} record(s) from {} image(s), {} skipped",
        total_records,
        cli.images.len() - skipped,
        skipped
    ));

    Ok(())
}
