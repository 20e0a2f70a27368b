//! Embedded Typst templates, loaded at compile time.

/// Single-report document: overview, rating distribution, per-category
/// detail and corrective actions at a fixed 800 pt logical width.
pub const REPORT_TEMPLATE: &str = include_str!("../templates/report.typ");

/// Range-summary document: per-category distribution bars.
pub const SUMMARY_TEMPLATE: &str = include_str!("../templates/summary.typ");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_template_reads_its_inputs() {
        assert!(REPORT_TEMPLATE.contains("sys.inputs.data"));
        assert!(REPORT_TEMPLATE.contains("800pt"));
    }

    #[test]
    fn summary_template_reads_its_inputs() {
        assert!(SUMMARY_TEMPLATE.contains("sys.inputs.data"));
        assert!(SUMMARY_TEMPLATE.contains("800pt"));
    }
}
