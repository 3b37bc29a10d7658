//! PDF backend selection.

use std::fmt::Debug;

use anyhow::Result;

use crate::config::RenderSettings;
use crate::render::chromium::ChromiumBackend;
use crate::render::printpdf_backend::PrintPdfBackend;
use crate::render::wkhtmltopdf::WkhtmltopdfBackend;

/// One conversion backend: styled HTML in, PDF bytes out. The three
/// implementations differ in configuration surface but share this contract.
pub trait PdfBackend: Send + Sync + Debug {
    fn name(&self) -> &'static str;

    fn render(&self, html: &str) -> Result<Vec<u8>>;
}

/// Build the configured PDF backend. `kind` overrides the configured choice
/// when given (the CLI's `--backend` flag).
pub fn build_backend(settings: &RenderSettings, kind: Option<&str>) -> Result<Box<dyn PdfBackend>> {
    let kind = kind.unwrap_or(&settings.backend);

    match kind.to_lowercase().as_str() {
        "printpdf" => Ok(Box::new(PrintPdfBackend::new())),
        "wkhtmltopdf" => Ok(Box::new(WkhtmltopdfBackend::new(
            settings.wkhtmltopdf_path.clone(),
        ))),
        "chromium" => Ok(Box::new(ChromiumBackend::new(
            settings.chromium_path.clone(),
        ))),
        other => anyhow::bail!(
            "Unsupported render.backend '{}'. Supported backends: printpdf, wkhtmltopdf, chromium",
            other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderSettings;

    #[test]
    fn builds_configured_backend() {
        let settings = RenderSettings::default();
        let backend = build_backend(&settings, None).unwrap();
        assert_eq!(backend.name(), "printpdf");
    }

    #[test]
    fn flag_overrides_configured_backend() {
        let settings = RenderSettings::default();
        let backend = build_backend(&settings, Some("chromium")).unwrap();
        assert_eq!(backend.name(), "chromium");
    }

    #[test]
    fn unsupported_backend_returns_error() {
        let settings = RenderSettings::default();
        let err = build_backend(&settings, Some("laserjet")).unwrap_err();
        assert!(err.to_string().contains("Unsupported render.backend"));
    }
}
