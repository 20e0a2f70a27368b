//! Export artifacts for finalized reports.
//!
//! PDF documents are produced by compiling embedded Typst templates
//! entirely in memory (embedded fonts, no filesystem access); the share
//! text is a line-oriented plain-text digest handed to an external share
//! target. Everything here is read-only over a finalized report and safe
//! to retry on failure.

pub mod error;
pub mod pdf;
pub mod share;
pub mod templates;
pub mod world;

pub use error::RenderError;
pub use pdf::{
    display_date, render_report_pdf, render_summary_pdf, report_filename, summary_filename,
};
pub use share::share_text;

#[cfg(feature = "server")]
pub use pdf::{render_report_pdf_async, render_summary_pdf_async};
