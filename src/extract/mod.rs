//! Lexical extraction from raw OCR text.
//!
//! This module provides:
//! - QTL name candidate selection (the `Q`/`cas` naming scheme)
//! - Marker table recovery and position sorting
//! - Rank-based pairing of candidates with flanking markers

pub mod markers;
pub mod matcher;
pub mod names;

pub use markers::{parse_markers, parse_position, MarkerRecord};
pub use matcher::{match_all, match_color, QtlRecord};
pub use names::{filter_qtl_names, filter_qtl_names_with, is_qtl_name_line};
