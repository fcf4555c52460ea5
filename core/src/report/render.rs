//! Whole-report assembly.

use crate::config::ReportConfig;
use crate::report::GradingItem;

/// Render the full report body for one student.
///
/// `values` must hold one cell per entry of `items`, in the same column
/// order; the roster model guarantees this for its own rows.
pub fn render_report(
    cfg: &ReportConfig,
    assignment_title: &str,
    student_name: &str,
    items: &[GradingItem],
    values: &[String],
) -> String {
    debug_assert_eq!(items.len(), values.len());
    let mut out = format!(
        "Assignment Report for {}\n\nStudent Name: {}\n\n",
        assignment_title.replace('\n', "\n\t"),
        student_name
    );
    for (item, value) in items.iter().zip(values) {
        out.push_str(&item.render(cfg, value));
    }
    out
}
