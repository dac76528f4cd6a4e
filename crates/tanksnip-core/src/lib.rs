pub mod error;
pub mod export;
pub mod extraction;
pub mod manway;
pub mod model;
pub mod nozzles;
pub mod options;
pub mod repad;
pub mod specs;

use error::TankSnipError;
use extraction::PdfExtractor;
use model::TankReport;
use options::ExtractOptions;

/// Main API entry point: read a calculation report PDF into a `TankReport`.
///
/// Only text acquisition can fail; extraction over the text always succeeds.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    options: &ExtractOptions,
) -> Result<TankReport, TankSnipError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let text = extraction::full_text(&pages);
    Ok(extract_text(&text, options))
}

/// Extract specs, nozzles and manways from flattened report text.
///
/// Pure: the same text and options always give the same report. The field
/// extractor and the nozzle/manway extractors read only the text, never
/// each other's output.
pub fn extract_text(text: &str, options: &ExtractOptions) -> TankReport {
    let specs = specs::extract_specs(text, &options.specs);
    let nozzles = nozzles::extract_nozzles(text, &options.nozzles, &options.repad);
    let manways = manway::extract_manways(text, &options.repad);

    tracing::info!(
        fields = specs.len(),
        nozzle_groups = nozzles.len(),
        manways = manways.len(),
        "extracted tank report"
    );

    TankReport {
        specs,
        nozzles,
        manways,
    }
}
