use crate::image_source::interface::{Image, ImageSource, ImageSourceKind};
use crate::library::logger::interface::Logger;
use std::sync::Arc;

pub struct ImageSourceFake {
    logger: Arc<dyn Logger + Send + Sync>,
    camera_available: bool,
    cancel_picks: bool,
}

impl ImageSourceFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, camera_available: bool) -> Self {
        Self {
            logger: logger.with_namespace("image_source").with_namespace("fake"),
            camera_available,
            cancel_picks: false,
        }
    }

    /// A source whose picker the user always dismisses.
    pub fn cancelling(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            cancel_picks: true,
            ..Self::new(logger, true)
        }
    }
}

impl ImageSource for ImageSourceFake {
    fn is_available(&self, kind: ImageSourceKind) -> bool {
        match kind {
            ImageSourceKind::PhotoLibrary => true,
            ImageSourceKind::Camera => self.camera_available,
        }
    }

    fn pick_image(
        &self,
        kind: ImageSourceKind,
    ) -> Result<Option<Image>, Box<dyn std::error::Error + Send + Sync>> {
        if !self.is_available(kind) {
            return Err(format!("{} is not available", kind).into());
        }

        self.logger.info(&format!("Picking image from {}...", kind))?;

        if self.cancel_picks {
            self.logger.info("Picker cancelled")?;
            return Ok(None);
        }

        let image = Image {
            source: kind,
            name: format!("fake-{}.jpg", kind.to_string().to_lowercase().replace(' ', "-")),
            bytes: vec![0; 224 * 224 * 3],
        };

        self.logger.info(&format!("Picked {}", image.name))?;

        Ok(Some(image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_console::LoggerConsole;

    fn logger() -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerConsole::new(*chrono::Local::now().offset()))
    }

    #[test]
    fn test_picks_from_library() {
        let source = ImageSourceFake::new(logger(), false);

        let image = source
            .pick_image(ImageSourceKind::PhotoLibrary)
            .unwrap()
            .unwrap();

        assert_eq!(image.name, "fake-photo-library.jpg");
        assert!(!image.bytes.is_empty());
    }

    #[test]
    fn test_camera_availability() {
        assert!(ImageSourceFake::new(logger(), false)
            .pick_image(ImageSourceKind::Camera)
            .is_err());
        assert!(ImageSourceFake::new(logger(), true)
            .pick_image(ImageSourceKind::Camera)
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_cancelled_picker_returns_nothing() {
        let source = ImageSourceFake::cancelling(logger());

        assert_eq!(source.pick_image(ImageSourceKind::PhotoLibrary).unwrap(), None);
    }
}
