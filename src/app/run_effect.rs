use super::main::App;
use crate::app::core::{Effect, Msg, PickError};

impl App {
    pub fn execute_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::PickImage(kind) => {
                let result = if self.image_source.is_available(kind) {
                    self.image_source
                        .pick_image(kind)
                        .map_err(|e| PickError::CannotOpenImage(e.to_string()))
                } else {
                    Err(PickError::SourceUnavailable(kind))
                };

                if let Err(e) = &result {
                    let _ = self.logger.error(&format!("Picking image failed: {:?}", e));
                }

                self.send(Msg::ImagePickDone(result));
            }
            Effect::Classify(image) => {
                let result = self
                    .image_classifier
                    .classify(&image)
                    .map_err(|e| e.to_string());

                if let Err(e) = &result {
                    let _ = self
                        .logger
                        .error(&format!("Image classification failed: {}", e));
                }

                self.send(Msg::ClassifyDone(result));
            }
        }
    }
}
