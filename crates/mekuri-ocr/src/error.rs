use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("Failed to initialize OCR engine: {0}")]
    Init(String),
    #[error("Failed to prepare image for OCR: {0}")]
    Image(String),
    #[error("Recognition failed: {0}")]
    Recognition(String),
}
