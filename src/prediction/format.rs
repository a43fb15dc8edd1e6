use crate::prediction::model::Prediction;

/// Renders a confidence fraction as a percentage without the trailing `%`,
/// except for the literal `"100%"`. Low percentages get an extra decimal.
pub fn format_confidence(confidence: f32) -> String {
    // Adding zero turns -0.0 into 0.0.
    let percentage = confidence * 100.0 + 0.0;

    if percentage >= 100.0 {
        "100%".to_string()
    } else if percentage >= 1.0 {
        format!("{:.1}", percentage)
    } else {
        format!("{:.2}", percentage)
    }
}

/// Drops alternate names: `"tabby cat, tabby"` becomes `"tabby cat"`.
pub fn clean_label(classification: &str) -> &str {
    match classification.find(',') {
        Some(first_comma) => &classification[..first_comma],
        None => classification,
    }
}

pub fn format_prediction_line(prediction: &Prediction) -> String {
    format!(
        "{} - {}%",
        clean_label(prediction.classification()),
        format_confidence(prediction.confidence())
    )
}

/// Formats the first `limit` predictions in the order given. Callers are
/// expected to pass predictions already ranked by descending confidence.
pub fn format_top_predictions(predictions: &[Prediction], limit: usize) -> Vec<String> {
    predictions
        .iter()
        .take(limit)
        .map(format_prediction_line)
        .collect()
}
