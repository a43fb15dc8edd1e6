use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSourceKind {
    PhotoLibrary,
    Camera,
}

impl fmt::Display for ImageSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSourceKind::PhotoLibrary => write!(f, "Photo Library"),
            ImageSourceKind::Camera => write!(f, "Camera"),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Image {
    pub source: ImageSourceKind,
    pub name: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("source", &self.source)
            .field("name", &self.name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

pub trait ImageSource: Send + Sync {
    fn is_available(&self, kind: ImageSourceKind) -> bool;

    /// `Ok(None)` means the user dismissed the picker without choosing.
    fn pick_image(
        &self,
        kind: ImageSourceKind,
    ) -> Result<Option<Image>, Box<dyn std::error::Error + Send + Sync>>;
}
