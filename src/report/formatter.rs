use crate::builder::BuildResult;
use crate::validator::ValidationReport;

/// Formats build results into human-readable console text.
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format a full build result: title, validation summary and diagram.
    pub fn format(result: &BuildResult) -> String {
        let mut out = String::from("========== TASK FLOW ==========\n");
        out.push_str(&format!("Title: {}\n\n", result.title));
        out.push_str(&Self::format_validation(&result.validation));

        if result.diagram.is_empty() {
            out.push_str("\nNo Mermaid diagram found in result.\n");
        } else {
            out.push_str("\nMermaid diagram:\n\n");
            out.push_str(&format!("{}\n", result.diagram.trim_end()));
            out.push_str("\nCopy this into a Mermaid preview to see the diagram.\n");
        }
        out
    }

    /// Format only the validation block.
    pub fn format_validation(report: &ValidationReport) -> String {
        let mut out = String::from("Validation:\n");
        out.push_str(&format!("    Valid: {}\n", report.valid));
        if report.issues.is_empty() {
            out.push_str("    No issues found.\n");
        } else {
            for issue in &report.issues {
                out.push_str(&format!("    - {}\n", issue.message));
            }
        }
        out
    }
}
