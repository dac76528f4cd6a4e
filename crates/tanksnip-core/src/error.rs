use std::path::PathBuf;

/// Errors from the outer surfaces (PDF text acquisition, options, export).
///
/// Field, nozzle and manway extraction itself never fails; missing or
/// malformed values degrade to the "Not found" sentinel or an empty table.
#[derive(Debug, thiserror::Error)]
pub enum TankSnipError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to load options from {path}: {reason}")]
    OptionsLoad { path: PathBuf, reason: String },

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
