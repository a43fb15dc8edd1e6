use crate::prediction::model::Prediction;

/// Orders by descending confidence. Ties keep their upstream order.
pub fn rank_predictions(mut predictions: Vec<Prediction>) -> Vec<Prediction> {
    predictions.sort_by(|a, b| b.confidence().total_cmp(&a.confidence()));
    predictions
}
