pub mod engine;
pub mod setup;

pub use engine::{recognize, PageSegMode, RawTextBlock};
pub use setup::{ensure_tesseract, find_tesseract_executable};
