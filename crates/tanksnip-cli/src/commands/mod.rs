pub mod export;
pub mod extract;
pub mod fields;
pub mod text;

use std::path::{Path, PathBuf};
use tanksnip_core::error::TankSnipError;
use tanksnip_core::extraction::pdftotext::PdftotextExtractor;
use tanksnip_core::extraction::{full_text, PdfExtractor};
use tanksnip_core::model::TankReport;
use tanksnip_core::options::{self, AnchorScope, ExtractOptions};

/// Extraction flags shared by `extract` and `export`.
pub struct ExtractSettings {
    pub config: Option<PathBuf>,
    pub scoped_anchors: bool,
    pub layout: bool,
}

impl ExtractSettings {
    fn options(&self) -> Result<ExtractOptions, TankSnipError> {
        let mut opts = match &self.config {
            Some(path) => options::load_options(path)?,
            None => ExtractOptions::default(),
        };
        if self.scoped_anchors {
            opts.specs.anchor_scope = AnchorScope::Section;
        }
        Ok(opts)
    }
}

/// Read the flattened report text from a PDF or an existing text dump.
pub fn load_text(input_file: &Path, layout: bool) -> Result<String, TankSnipError> {
    let is_pdf = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    tracing::debug!(path = %input_file.display(), pdf = is_pdf, "loading report text");

    if is_pdf {
        if !PdftotextExtractor::is_available() {
            return Err(TankSnipError::PdftotextNotFound);
        }
        let pdf_bytes = std::fs::read(input_file)?;
        let extractor = PdftotextExtractor::with_layout(layout);
        let pages = extractor.extract_pages(&pdf_bytes)?;
        Ok(full_text(&pages))
    } else {
        Ok(std::fs::read_to_string(input_file)?)
    }
}

pub fn load_report(
    input_file: &Path,
    settings: &ExtractSettings,
) -> Result<TankReport, TankSnipError> {
    let options = settings.options()?;
    let text = load_text(input_file, settings.layout)?;
    Ok(tanksnip_core::extract_text(&text, &options))
}
