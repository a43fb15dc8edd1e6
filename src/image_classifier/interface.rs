use crate::image_source::interface::Image;

/// Raw output of a classifier: a label, possibly carrying comma separated
/// synonyms, and the probability the label applies to the image.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

pub trait ImageClassifier: Send + Sync {
    /// Results are not required to be ordered.
    fn classify(
        &self,
        image: &Image,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>;
}
