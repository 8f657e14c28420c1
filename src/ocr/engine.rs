use anyhow::{anyhow, Context, Result};
use image::RgbImage;
use std::process::Command;
use tempfile::NamedTempFile;

use super::setup::{find_tessdata_dir, find_tesseract_executable};
use crate::pipeline::config::OcrOptions;

/// Page layout assumption handed to Tesseract (`--psm`).
///
/// Color-isolated label text is sparse and roughly line-aligned, so it
/// reads best as a block of lines; the unmasked map needs full automatic
/// layout analysis to pick up the marker table in the margins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSegMode {
    /// Treat the image as a single block of vertically stacked lines
    LineBlock,
    /// Full automatic page segmentation
    FullPage,
}

impl PageSegMode {
    pub fn psm(self) -> &'static str {
        match self {
            PageSegMode::LineBlock => "5",
            PageSegMode::FullPage => "1",
        }
    }
}

/// Raw newline-delimited OCR output, in the engine's emission order.
/// No interpretation happens here; downstream filters decide what a line
/// means.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawTextBlock {
    lines: Vec<String>,
}

impl RawTextBlock {
    pub fn from_raw(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Runs Tesseract on an image under the given page layout assumption and
/// returns its stdout as raw text lines.
pub fn recognize(img: &RgbImage, mode: PageSegMode, opts: &OcrOptions) -> Result<RawTextBlock> {
    let tesseract_exe = find_tesseract_executable(opts)?;

    // Hand the image over as a temporary PNG
    let temp_input = NamedTempFile::with_suffix(".png")?;
    img.save(temp_input.path())
        .context("Failed to write OCR input image")?;

    let mut cmd = Command::new(&tesseract_exe);
    cmd.arg(temp_input.path()).arg("stdout");
    // Without an explicit tessdata dir, Tesseract resolves its own default
    if let Some(tessdata_dir) = find_tessdata_dir(&opts.lang) {
        cmd.arg("--tessdata-dir").arg(&tessdata_dir);
    }
    cmd.arg("-l")
        .arg(&opts.lang)
        .arg("--psm")
        .arg(mode.psm())
        .arg("--oem")
        .arg(opts.oem.to_string());

    let output = cmd.output().context("Failed to run Tesseract")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!("Tesseract failed: {}", stderr));
    }

    Ok(RawTextBlock::from_raw(&String::from_utf8_lossy(
        &output.stdout,
    )))
}
