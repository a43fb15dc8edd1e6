use super::main::App;
use crate::app::core::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    PickImage,
    Analyze,
    Reset,
}

impl Button {
    pub fn label(&self) -> &'static str {
        match self {
            Button::PickImage => "Pick image to analyze",
            Button::Analyze => "Analyze",
            Button::Reset => "Reset",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
    pub actions: Vec<String>,
}

/// What a display shows for one state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct View {
    pub title: String,
    pub image: Option<String>,
    pub prediction_panel_visible: bool,
    pub lines: Vec<String>,
    pub buttons: Vec<Button>,
    pub dialog: Option<Dialog>,
    pub hint: Option<String>,
}

pub fn view(state: &State) -> View {
    match state {
        State::Picker {
            image,
            source_prompt_open,
            alert,
        } => {
            let buttons = match image {
                None => vec![Button::PickImage],
                Some(_) => vec![Button::Analyze, Button::Reset],
            };

            let dialog = match alert {
                Some(alert) => Some(Dialog {
                    title: alert.title.clone(),
                    message: alert.message.clone(),
                    actions: vec!["OK".to_string()],
                }),
                None if *source_prompt_open => Some(Dialog {
                    title: "Pick image from".to_string(),
                    message: "Select where to choose an image from:".to_string(),
                    actions: vec![
                        "Camera".to_string(),
                        "Photo Library".to_string(),
                        "Cancel".to_string(),
                    ],
                }),
                None => None,
            };

            View {
                title: "Still Image Classifier".to_string(),
                image: image.as_ref().map(|image| image.name.clone()),
                prediction_panel_visible: false,
                lines: vec![],
                buttons,
                dialog,
                hint: None,
            }
        }
        State::Prediction {
            image,
            prediction_text,
            prediction_panel_visible,
            ..
        } => View {
            title: "Predictions".to_string(),
            image: Some(image.name.clone()),
            prediction_panel_visible: *prediction_panel_visible,
            lines: if *prediction_panel_visible {
                prediction_text.lines().map(str::to_string).collect()
            } else {
                vec![]
            },
            buttons: vec![],
            dialog: None,
            hint: Some("Swipe up to pick another image".to_string()),
        },
    }
}

impl App {
    pub fn render(&self, state: &State) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self
            .device_display
            .lock()
            .map_err(|_| "Display lock poisoned")?;

        device_display.render(&view(state))?;

        Ok(())
    }
}
