// src/services/formatter.rs

//! Result formatting.

use crate::models::Label;

/// Separator placed between formatted lines.
pub const LINE_SEPARATOR: &str = "\n ";

/// Format one translated fragment with its confidence.
pub fn format_line(fragment: &str, confidence: f32) -> String {
    format!("{confidence:.2}% de ser to tipo {fragment}")
}

/// Pair fragments with label confidences by position and join the lines.
///
/// Output stops at the shorter of the two sequences.
pub fn format_results(fragments: &[String], labels: &[Label]) -> String {
    fragments
        .iter()
        .zip(labels)
        .map(|(fragment, label)| format_line(fragment, label.confidence))
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR)
}
