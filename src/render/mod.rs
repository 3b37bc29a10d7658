//! Document rendering
//!
//! Converts the generated summary (Markdown) to styled HTML, then to a PDF
//! through one of the interchangeable backends.

mod backend;
mod chromium;
pub mod markup;
mod printpdf_backend;
mod wkhtmltopdf;

pub use backend::{build_backend, PdfBackend};
pub use chromium::ChromiumBackend;
pub use printpdf_backend::PrintPdfBackend;
pub use wkhtmltopdf::WkhtmltopdfBackend;
