use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::image_source::interface::Image;
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use rand::seq::SliceRandom;
use std::sync::Arc;

const LABELS: [&str; 18] = [
    "tabby, tabby cat",
    "tiger cat",
    "Persian cat",
    "Egyptian cat",
    "golden retriever",
    "Labrador retriever",
    "red fox, Vulpes vulpes",
    "timber wolf, grey wolf, gray wolf, Canis lupus",
    "Chihuahua",
    "Maltese dog, Maltese terrier, Maltese",
    "goldfish, Carassius auratus",
    "coffee mug",
    "laptop, laptop computer",
    "cellular telephone, cellular phone, cellphone, cell, mobile phone",
    "mountain bike, all-terrain bike, off-roader",
    "teddy, teddy bear",
    "pizza, pizza pie",
    "daisy",
];

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    result_count: usize,
    canned: Option<Vec<Classification>>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
            result_count: 5,
            canned: None,
        }
    }

    /// Always answers with `classifications`, in the given order.
    pub fn with_results(
        logger: Arc<dyn Logger + Send + Sync>,
        classifications: Vec<Classification>,
    ) -> Self {
        Self {
            canned: Some(classifications),
            ..Self::new(logger)
        }
    }

    fn random_classifications(
        &self,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        let mut rng = rand::rng();

        let mut labels = LABELS.to_vec();
        labels.shuffle(&mut rng);
        labels.truncate(self.result_count);

        let score_dist = Uniform::new(0.0f32, 1.0)?;

        // Sharpened so one label usually dominates, like a softmax output.
        let scores: Vec<f32> = labels
            .iter()
            .map(|_| score_dist.sample(&mut rng).powi(4))
            .collect();

        let total = scores.iter().sum::<f32>().max(f32::EPSILON);

        let classifications = labels
            .into_iter()
            .zip(scores)
            .map(|(label, score)| Classification {
                label: label.to_string(),
                confidence: (score / total).clamp(0.0, 1.0),
            })
            .collect();

        Ok(classifications)
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(
        &self,
        image: &Image,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!(
            "Classifying {} ({} bytes)...",
            image.name,
            image.bytes.len()
        ))?;

        if image.bytes.is_empty() {
            return Err(format!("{} has no image data", image.name).into());
        }

        let classifications = match &self.canned {
            Some(canned) => canned.clone(),
            None => self.random_classifications()?,
        };

        self.logger
            .info(&format!("Got {} classifications", classifications.len()))?;

        Ok(classifications)
    }
}
