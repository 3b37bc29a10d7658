//! wkhtmltopdf PDF backend.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{anyhow, Context, Result};

use crate::render::backend::PdfBackend;

/// Drives a locally installed `wkhtmltopdf` binary, HTML on stdin, PDF on
/// stdout. The binary path comes from `render.wkhtmltopdf_path`.
#[derive(Debug)]
pub struct WkhtmltopdfBackend {
    binary: PathBuf,
}

impl WkhtmltopdfBackend {
    pub fn new(binary: PathBuf) -> Self {
        Self { binary }
    }
}

impl PdfBackend for WkhtmltopdfBackend {
    fn name(&self) -> &'static str {
        "wkhtmltopdf"
    }

    fn render(&self, html: &str) -> Result<Vec<u8>> {
        let mut child = Command::new(&self.binary)
            .args(["--quiet", "--encoding", "utf-8", "-", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to start {}", self.binary.display()))?;

        child
            .stdin
            .take()
            .ok_or_else(|| anyhow!("wkhtmltopdf stdin was not captured"))?
            .write_all(html.as_bytes())
            .context("Failed to write HTML to wkhtmltopdf")?;

        let output = child
            .wait_with_output()
            .context("Failed to wait for wkhtmltopdf")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "wkhtmltopdf exited with {}: {}",
                output.status,
                stderr.trim()
            ));
        }

        if output.stdout.is_empty() {
            return Err(anyhow!("wkhtmltopdf produced no output"));
        }

        Ok(output.stdout)
    }
}
