//! Per-image extraction pipeline.
//!
//! For one chromosome image: convert to HSV once, then per color bucket
//! isolate the label text and OCR it for QTL candidates; OCR the unmasked
//! image for the marker table; pair candidates with flanking markers.
//!
//! An image that cannot be loaded fails the whole call; the batch loop
//! decides what to skip. An OCR failure only empties the affected text
//! region, so one bad mask cannot take down a chromosome.

use anyhow::{anyhow, Context, Result};
use image::RgbImage;
use std::path::Path;

use crate::colors::{isolate, HsvImage};
use crate::extract::{filter_qtl_names, match_all, parse_markers, QtlRecord};
use crate::log;
use crate::ocr::{recognize, PageSegMode, RawTextBlock};

use super::config::ExtractConfig;

/// Derives the chromosome name from the image filename: `4A.png` names
/// chromosome `4A`. The name is carried into every output row.
pub fn chromosome_from_path(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| anyhow!("Cannot derive a chromosome name from {}", path.display()))
}

/// Runs the full pipeline on one chromosome image and returns its QTL
/// records, grouped by color in configuration order.
pub fn extract_image(path: &Path, config: &ExtractConfig) -> Result<Vec<QtlRecord>> {
    let chromosome = chromosome_from_path(path)?;
    let image = image::open(path)
        .with_context(|| format!("Failed to load image {}", path.display()))?
        .to_rgb8();
    log(&format!(
        "{}: loaded {}x{} image",
        chromosome,
        image.width(),
        image.height()
    ));

    // One HSV conversion shared by every color bucket
    let hsv = HsvImage::from_rgb(&image);

    let mut names_by_color = Vec::new();
    for spec in &config.colors {
        let isolated = isolate(&image, &hsv, spec);
        if let Some(dir) = &config.debug_dir {
            save_debug_image(&isolated, dir, &chromosome, &spec.name);
        }

        let text =
            recognize_or_empty(&isolated, PageSegMode::LineBlock, config, &chromosome, &spec.name);
        let names = filter_qtl_names(&text);
        log(&format!(
            "{}: {} {} candidate(s) from {} OCR line(s)",
            chromosome,
            names.len(),
            spec.name,
            text.line_count()
        ));
        names_by_color.push((spec.name.clone(), names));
    }

    // Unmasked pass for the marker table in the margins
    let text = recognize_or_empty(&image, PageSegMode::FullPage, config, &chromosome, "marker");
    let markers = parse_markers(&text);
    log(&format!(
        "{}: {} marker(s) from {} OCR line(s)",
        chromosome,
        markers.len(),
        text.line_count()
    ));

    Ok(match_all(&chromosome, &names_by_color, &markers))
}

/// OCR failure degrades to an empty block: zero candidates or markers for
/// that region, not an aborted chromosome. Raw text is logged only when a
/// debug dir is active; normal runs stay quiet.
fn recognize_or_empty(
    img: &RgbImage,
    mode: PageSegMode,
    config: &ExtractConfig,
    chromosome: &str,
    region: &str,
) -> RawTextBlock {
    match recognize(img, mode, &config.ocr) {
        Ok(text) => {
            if config.debug_dir.is_some() && text.line_count() > 0 {
                log(&format!(
                    "{}: raw {} text:\n{}",
                    chromosome,
                    region,
                    text.lines().join("\n")
                ));
            }
            text
        }
        Err(e) => {
            log(&format!("{}: OCR failed for {} text: {}", chromosome, region, e));
            RawTextBlock::default()
        }
    }
}

/// Saves an isolated color image for inspection. Failure to save is
/// logged and ignored; debug output never stops an extraction.
fn save_debug_image(img: &RgbImage, dir: &Path, chromosome: &str, color: &str) {
    if let Err(e) = std::fs::create_dir_all(dir) {
        log(&format!("Failed to create {}: {}", dir.display(), e));
        return;
    }
    let path = dir.join(format!("{}_{}.png", chromosome, color));
    if let Err(e) = img.save(&path) {
        log(&format!("Failed to save {}: {}", path.display(), e));
    }
}
