//! Batch-facing pipeline plumbing.
//!
//! This module provides:
//! - The per-image extraction driver (isolate, OCR, parse, pair)
//! - Configuration loaded from JSON with calibrated defaults
//! - CSV output of the final record table

pub mod config;
pub mod csv_writer;
pub mod driver;

pub use config::{load_config, ExtractConfig, OcrOptions};
pub use csv_writer::{append_records, init_csv};
pub use driver::{chromosome_from_path, extract_image};
