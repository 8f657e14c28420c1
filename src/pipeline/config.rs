//! Extraction configuration.
//!
//! Loads settings from a JSON file passed on the command line. Provides
//! the color buckets to process and OCR engine options; everything has a
//! calibrated default so no config file is required.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::colors::{default_colors, ColorSpec};

/// OCR engine options.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OcrOptions {
    /// Language passed to Tesseract `-l`
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Engine mode (`--oem`); 1 selects the LSTM recognizer
    #[serde(default = "default_oem")]
    pub oem: u8,
    /// Explicit Tesseract executable, bypassing discovery
    #[serde(default)]
    pub tesseract_cmd: Option<PathBuf>,
}

fn default_lang() -> String {
    "eng".to_string()
}

fn default_oem() -> u8 {
    1
}

impl Default for OcrOptions {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            oem: default_oem(),
            tesseract_cmd: None,
        }
    }
}

/// Complete extraction configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Color buckets, processed in this order
    #[serde(default = "default_colors")]
    pub colors: Vec<ColorSpec>,
    #[serde(default)]
    pub ocr: OcrOptions,
    /// When set, per-color isolated images are saved here for inspection
    #[serde(default)]
    pub debug_dir: Option<PathBuf>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            ocr: OcrOptions::default(),
            debug_dir: None,
        }
    }
}

/// Loads configuration from the given JSON file, or returns defaults when
/// no path is given or the file cannot be used.
pub fn load_config(path: Option<&Path>) -> ExtractConfig {
    let Some(path) = path else {
        return ExtractConfig::default();
    };

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(config) => {
                crate::log(&format!("Config loaded from {}", path.display()));
                return config;
            }
            Err(e) => {
                crate::log(&format!(
                    "Failed to parse {}: {}. Using defaults.",
                    path.display(),
                    e
                ));
            }
        },
        Err(e) => {
            crate::log(&format!(
                "Failed to read {}: {}. Using defaults.",
                path.display(),
                e
            ));
        }
    }

    ExtractConfig::default()
}
