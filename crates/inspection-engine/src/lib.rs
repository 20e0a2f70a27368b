//! Inspection form engine and range analytics.
//!
//! [`ReportForm`] holds the editable state for one day's checklist and
//! enforces everything that must hold before the report may be finalized:
//! status-toggle semantics, the per-category sub-item rules, the ordered
//! validation sequence and the corrective-actions composition.
//! [`analytics::aggregate_range`] tallies rating outcomes per category over
//! an inclusive date range.

pub mod actions;
pub mod analytics;
pub mod form;
pub mod validate;

pub use analytics::aggregate_range;
pub use form::ReportForm;
pub use validate::ValidationError;
