//! Headless-browser PDF backend.

use std::path::PathBuf;
use std::process::Command;

use anyhow::{anyhow, Context, Result};

use crate::render::backend::PdfBackend;

/// Prints the document through a headless Chromium. The page is staged in a
/// temp directory because `--print-to-pdf` only accepts file inputs.
#[derive(Debug)]
pub struct ChromiumBackend {
    binary: PathBuf,
}

impl ChromiumBackend {
    pub fn new(binary: PathBuf) -> Self {
        Self { binary }
    }
}

impl PdfBackend for ChromiumBackend {
    fn name(&self) -> &'static str {
        "chromium"
    }

    fn render(&self, html: &str) -> Result<Vec<u8>> {
        let workdir = tempfile::tempdir().context("Failed to create render temp dir")?;
        let page = workdir.path().join("summary.html");
        let pdf = workdir.path().join("summary.pdf");

        std::fs::write(&page, html).context("Failed to stage HTML page")?;

        let output = Command::new(&self.binary)
            .args([
                "--headless",
                "--disable-gpu",
                "--no-pdf-header-footer",
                &format!("--print-to-pdf={}", pdf.display()),
                &format!("file://{}", page.display()),
            ])
            .output()
            .with_context(|| format!("Failed to start {}", self.binary.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "chromium exited with {}: {}",
                output.status,
                stderr.trim()
            ));
        }

        std::fs::read(&pdf).context("chromium did not produce a PDF")
    }
}
