use crate::image_source::interface::{Image, ImageSource, ImageSourceKind};
use crate::library::logger::interface::Logger;
use std::path::PathBuf;
use std::sync::Arc;

/// Serves a single file on disk as the photo library. There is no camera.
pub struct ImageSourceFile {
    logger: Arc<dyn Logger + Send + Sync>,
    path: PathBuf,
}

impl ImageSourceFile {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, path: PathBuf) -> Self {
        Self {
            logger: logger.with_namespace("image_source").with_namespace("file"),
            path,
        }
    }
}

impl ImageSource for ImageSourceFile {
    fn is_available(&self, kind: ImageSourceKind) -> bool {
        kind == ImageSourceKind::PhotoLibrary
    }

    fn pick_image(
        &self,
        kind: ImageSourceKind,
    ) -> Result<Option<Image>, Box<dyn std::error::Error + Send + Sync>> {
        if !self.is_available(kind) {
            return Err(format!("{} is not available", kind).into());
        }

        self.logger
            .info(&format!("Reading {}", self.path.display()))?;

        let bytes = std::fs::read(&self.path)?;

        if bytes.is_empty() {
            return Err(format!("{} is empty", self.path.display()).into());
        }

        let name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());

        Ok(Some(Image {
            source: kind,
            name,
            bytes,
        }))
    }
}
