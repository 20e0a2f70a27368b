//! Finalization gate: the ordered validation sequence.
//!
//! Errors are plain values surfaced inline to the user, never logged as
//! system failures. The first failing check wins.

use thiserror::Error;

/// A user-correctable reason a report cannot be finalized yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Checklist does not match the category list. Please reload and try again.")]
    MalformedChecklist,

    #[error("Sewadar name is required to finalize the report.")]
    MissingInspectorName,

    #[error("Please rate quality for \"{0}\".")]
    UnratedCategory(String),

    #[error("Counter incharge name is required for \"{0}\".")]
    MissingCounterIncharge(String),

    #[error("Please mention the specific food name for \"{0}\".")]
    MissingSubItem(String),

    #[error("Corrective actions are mandatory since 'Not Good' issues were reported.")]
    MissingCorrectiveActions,
}

impl ValidationError {
    /// The offending category, where the check is item-scoped.
    pub fn category(&self) -> Option<&str> {
        match self {
            ValidationError::UnratedCategory(c)
            | ValidationError::MissingCounterIncharge(c)
            | ValidationError::MissingSubItem(c) => Some(c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_category() {
        let err = ValidationError::MissingSubItem("Dessert".to_string());
        assert!(err.to_string().contains("Dessert"));
        assert_eq!(err.category(), Some("Dessert"));
    }

    #[test]
    fn report_level_errors_have_no_category() {
        assert_eq!(ValidationError::MalformedChecklist.category(), None);
        assert_eq!(ValidationError::MissingInspectorName.category(), None);
        assert_eq!(ValidationError::MissingCorrectiveActions.category(), None);
    }
}
