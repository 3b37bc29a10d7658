//! Pure-Rust PDF backend.

use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use printpdf::{GeneratePdfOptions, PdfDocument};
use tracing::debug;

use crate::render::backend::PdfBackend;

/// Renders HTML with the `printpdf` layout engine. Needs no external binary,
/// which makes it the default backend.
#[derive(Debug)]
pub struct PrintPdfBackend;

impl PrintPdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PrintPdfBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBackend for PrintPdfBackend {
    fn name(&self) -> &'static str {
        "printpdf"
    }

    fn render(&self, html: &str) -> Result<Vec<u8>> {
        let mut warnings = Vec::new();

        // No images or extra fonts to embed; the style sheet sticks to the
        // built-in font families.
        let doc = PdfDocument::from_html(
            html,
            &BTreeMap::new(),
            &BTreeMap::new(),
            &GeneratePdfOptions::default(),
            &mut warnings,
        )
        .map_err(|e| anyhow!("printpdf could not lay out the document: {e}"))?;

        if !warnings.is_empty() {
            debug!("printpdf reported {} layout warnings", warnings.len());
        }

        let bytes = doc.save(&Default::default(), &mut warnings);
        Ok(bytes)
    }
}
