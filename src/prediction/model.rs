use crate::image_classifier::interface::Classification;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionError {
    EmptyClassification,
    ConfidenceOutOfRange(f32),
}

impl fmt::Display for PredictionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictionError::EmptyClassification => write!(f, "Classification is empty"),
            PredictionError::ConfidenceOutOfRange(confidence) => {
                write!(f, "Confidence {} is outside [0, 1]", confidence)
            }
        }
    }
}

impl std::error::Error for PredictionError {}

/// A classifier label paired with its confidence. The classification is never
/// empty and the confidence always lies in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    classification: String,
    confidence: f32,
}

impl Prediction {
    pub fn new(
        classification: impl Into<String>,
        confidence: f32,
    ) -> Result<Self, PredictionError> {
        let classification = classification.into();

        if classification.is_empty() {
            return Err(PredictionError::EmptyClassification);
        }

        // NaN fails the range check as well.
        if !(0.0..=1.0).contains(&confidence) {
            return Err(PredictionError::ConfidenceOutOfRange(confidence));
        }

        Ok(Self {
            classification,
            confidence,
        })
    }

    pub fn classification(&self) -> &str {
        &self.classification
    }

    pub fn confidence(&self) -> f32 {
        self.confidence
    }
}

impl TryFrom<Classification> for Prediction {
    type Error = PredictionError;

    fn try_from(classification: Classification) -> Result<Self, Self::Error> {
        Prediction::new(classification.label, classification.confidence)
    }
}
