use anyhow::{anyhow, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::log;
use crate::pipeline::config::OcrOptions;

const TESSDATA_REPO: &str = "https://github.com/tesseract-ocr/tessdata/raw/main";

/// Returns the directory for locally provisioned language data
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("qtl-extract")
}

fn local_tessdata_dir() -> PathBuf {
    get_data_dir().join("tessdata")
}

/// Checks that Tesseract and the configured language are usable before a
/// batch starts. Missing language data is downloaded into the local data
/// dir; a missing executable is an error the caller decides how to treat.
pub fn ensure_tesseract(opts: &OcrOptions) -> Result<()> {
    let executable = find_tesseract_executable(opts)?;
    log(&format!("Tesseract found: {}", executable.display()));

    if let Some(tessdata_dir) = find_tessdata_dir(&opts.lang) {
        log(&format!("tessdata found: {}", tessdata_dir.display()));
        return Ok(());
    }

    log(&format!(
        "{}.traineddata not found locally, downloading...",
        opts.lang
    ));

    let tessdata_dir = local_tessdata_dir();
    fs::create_dir_all(&tessdata_dir)?;
    download_tessdata(&opts.lang, &tessdata_dir)?;

    log(&format!("tessdata ready at: {}", tessdata_dir.display()));
    Ok(())
}

/// Downloads a trained data file from the official tessdata repository
fn download_tessdata(lang: &str, tessdata_dir: &Path) -> Result<()> {
    let url = format!("{}/{}.traineddata", TESSDATA_REPO, lang);
    let path = tessdata_dir.join(format!("{}.traineddata", lang));

    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(300))
        .build()?;

    let response = client
        .get(&url)
        .header("User-Agent", "qtl-extract")
        .send()?;

    if !response.status().is_success() {
        return Err(anyhow!(
            "Failed to download {}.traineddata: HTTP {}",
            lang,
            response.status()
        ));
    }

    let bytes = response.bytes()?;
    let mut file = fs::File::create(&path)?;
    file.write_all(&bytes)?;

    log(&format!(
        "Downloaded {}.traineddata ({} bytes)",
        lang,
        bytes.len()
    ));

    Ok(())
}

/// Finds the Tesseract executable: the configured override first, then
/// PATH, then conventional install locations
pub fn find_tesseract_executable(opts: &OcrOptions) -> Result<PathBuf> {
    if let Some(cmd) = &opts.tesseract_cmd {
        if cmd.exists() || runs(cmd) {
            return Ok(cmd.clone());
        }
        return Err(anyhow!(
            "Configured Tesseract executable not found: {}",
            cmd.display()
        ));
    }

    // Check PATH
    if runs(Path::new("tesseract")) {
        return Ok(PathBuf::from("tesseract"));
    }

    // Check common paths
    let common_paths = [
        "/usr/bin/tesseract",
        "/usr/local/bin/tesseract",
        "/opt/homebrew/bin/tesseract",
        r"C:\Program Files\Tesseract-OCR\tesseract.exe",
        r"C:\Program Files (x86)\Tesseract-OCR\tesseract.exe",
    ];

    for path in &common_paths {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(p);
        }
    }

    Err(anyhow!(
        "Tesseract not found. Install Tesseract-OCR or set ocr.tesseract_cmd in the config."
    ))
}

fn runs(cmd: &Path) -> bool {
    std::process::Command::new(cmd)
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Finds a tessdata directory that holds the requested language: the local
/// data dir first, then TESSDATA_PREFIX, then system paths. None means no
/// explicit dir is passed and Tesseract resolves its own default.
pub fn find_tessdata_dir(lang: &str) -> Option<PathBuf> {
    let traineddata = format!("{}.traineddata", lang);

    let local = local_tessdata_dir();
    if local.join(&traineddata).exists() {
        return Some(local);
    }

    if let Ok(prefix) = std::env::var("TESSDATA_PREFIX") {
        let p = PathBuf::from(&prefix);
        if p.join(&traineddata).exists() {
            return Some(p);
        }
        let p = PathBuf::from(&prefix).join("tessdata");
        if p.join(&traineddata).exists() {
            return Some(p);
        }
    }

    let system_paths = [
        "/usr/share/tesseract-ocr/5/tessdata",
        "/usr/share/tesseract-ocr/4.00/tessdata",
        "/usr/share/tessdata",
        "/usr/local/share/tessdata",
        r"C:\Program Files\Tesseract-OCR\tessdata",
        r"C:\Program Files (x86)\Tesseract-OCR\tessdata",
    ];

    for path in &system_paths {
        let p = PathBuf::from(path);
        if p.join(&traineddata).exists() {
            return Some(p);
        }
    }

    None
}
