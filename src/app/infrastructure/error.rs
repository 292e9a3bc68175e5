use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("No text to save!")]
    NothingToSave,
}

impl From<rusty_tesseract::TessError> for AppError {
    fn from(err: rusty_tesseract::TessError) -> Self {
        AppError::Ocr(err.to_string())
    }
}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::Ocr(format!("cannot read image: {}", err))
    }
}

impl From<pdf_extract::OutputError> for AppError {
    fn from(err: pdf_extract::OutputError) -> Self {
        AppError::Pdf(err.to_string())
    }
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
