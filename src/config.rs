use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    Console,
    Gui,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub predictions_to_show: usize,
    pub prediction_separator: String,
    pub no_predictions_message: String,
    pub placeholder_message: String,
    pub classification_failed_message: String,
    pub display: DisplayKind,
    pub photo_library_path: Option<PathBuf>,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            predictions_to_show: 2,
            prediction_separator: "\n".to_string(),
            no_predictions_message: "No predictions".to_string(),
            placeholder_message: "Predictions will go here...".to_string(),
            classification_failed_message: "Could not classify image".to_string(),
            display: DisplayKind::Console,
            photo_library_path: None,
            logger_timezone: local_time(),
        }
    }
}

impl Config {
    /// Defaults overlaid with `STILL_IMAGE_CLASSIFIER_*` environment variables.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Defaults overlaid with whatever `get` finds for each variable name.
    pub fn from_vars(
        get: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut config = Self::default();

        if let Some(value) = get("STILL_IMAGE_CLASSIFIER_PREDICTIONS") {
            config.predictions_to_show = value.trim().parse().map_err(|_| {
                format!("STILL_IMAGE_CLASSIFIER_PREDICTIONS is not a count: {}", value)
            })?;
        }

        if let Some(value) = get("STILL_IMAGE_CLASSIFIER_DISPLAY") {
            config.display = match value.trim().to_lowercase().as_str() {
                "console" => DisplayKind::Console,
                "gui" => DisplayKind::Gui,
                other => return Err(format!("Unknown display: {}", other).into()),
            };
        }

        if let Some(value) = get("STILL_IMAGE_CLASSIFIER_PHOTO") {
            config.photo_library_path = Some(PathBuf::from(value));
        }

        Ok(config)
    }
}

fn local_time() -> chrono::FixedOffset {
    *chrono::Local::now().offset()
}
