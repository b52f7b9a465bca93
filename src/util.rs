use itertools::Itertools;

use crate::quiz::CORRECT_POINTS;

/// Final score as a percentage of the maximum attainable score,
/// rounded to the nearest whole percent.
pub fn accuracy_percent(score: u32, total_questions: usize) -> u32 {
    if total_questions == 0 {
        return 0;
    }
    let max = (total_questions as f64) * f64::from(CORRECT_POINTS);
    ((f64::from(score) / max) * 100.0).round() as u32
}

/// Renders a table selection for headers and history rows, e.g. "3, 4, 7".
pub fn format_tables(tables: &[u32]) -> String {
    tables.iter().join(", ")
}
