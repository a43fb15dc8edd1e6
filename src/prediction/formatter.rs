use crate::config::Config;
use crate::prediction::format::format_top_predictions;
use crate::prediction::model::Prediction;

/// Turns a ranked prediction list into the text shown under the image.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionFormatter {
    limit: usize,
    separator: String,
    empty_message: String,
}

impl PredictionFormatter {
    pub fn new(config: &Config) -> Self {
        Self {
            limit: config.predictions_to_show,
            separator: config.prediction_separator.clone(),
            empty_message: config.no_predictions_message.clone(),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn format_top_predictions(&self, predictions: &[Prediction]) -> Vec<String> {
        format_top_predictions(predictions, self.limit)
    }

    pub fn format_message(&self, predictions: &[Prediction]) -> String {
        if predictions.is_empty() {
            return self.empty_message.clone();
        }

        self.format_top_predictions(predictions).join(&self.separator)
    }
}
