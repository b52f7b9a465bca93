/// Compute X (question) and Y (score) bounds for the results chart
pub fn compute_chart_params(score_coords: &[(f64, f64)], total_questions: usize) -> (f64, f64) {
    let mut highest_score = 0.0;
    for &(_, score) in score_coords {
        if score > highest_score {
            highest_score = score;
        }
    }
    if highest_score < 10.0 {
        highest_score = 10.0;
    }

    // Sessions that end early chart only the questions actually answered
    let mut last_question = match score_coords.last() {
        Some(x) => x.0,
        None => total_questions as f64,
    };
    if last_question < 1.0 {
        last_question = 1.0;
    }

    (last_question, highest_score.round())
}

/// Format a simple numeric label consistently
pub fn format_label(val: f64) -> String {
    if (val - val.round()).abs() < f64::EPSILON {
        format!("{}", val.round())
    } else {
        format!("{val:.2}")
    }
}
