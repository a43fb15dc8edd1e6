use crate::config::Config;
use crate::image_classifier::interface::Classification;
use crate::image_source::interface::{Image, ImageSourceKind};
use crate::prediction::formatter::PredictionFormatter;
use crate::prediction::model::Prediction;
use crate::prediction::rank::rank_predictions;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Picker {
        image: Option<Image>,
        source_prompt_open: bool,
        alert: Option<Alert>,
    },
    Prediction {
        image: Image,
        prediction_text: String,
        /// Hidden until the first classification result arrives.
        prediction_panel_visible: bool,
        classifying: bool,
    },
}

impl State {
    fn picker() -> Self {
        State::Picker {
            image: None,
            source_prompt_open: false,
            alert: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PickError {
    SourceUnavailable(ImageSourceKind),
    CannotOpenImage(String),
}

impl fmt::Display for PickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickError::SourceUnavailable(kind) => {
                write!(f, "{} is not available in this device", kind)
            }
            PickError::CannotOpenImage(_) => write!(f, "Cannot open image"),
        }
    }
}

impl std::error::Error for PickError {}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    TappedPickImage,
    CancelledSourcePrompt,
    ChoseSource(ImageSourceKind),
    ImagePickDone(Result<Option<Image>, PickError>),
    DismissedAlert,
    TappedReset,
    TappedAnalyze,
    ClassifyDone(Result<Vec<Classification>, String>),
    SwipedUp,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    PickImage(ImageSourceKind),
    Classify(Image),
}

pub fn init(_config: &Config) -> (State, Vec<Effect>) {
    (State::picker(), vec![])
}

pub fn transition(config: &Config, state: State, msg: Msg) -> (State, Vec<Effect>) {
    match state {
        State::Picker {
            image,
            source_prompt_open,
            alert,
        } => transition_picker(config, image, source_prompt_open, alert, msg),
        State::Prediction {
            image,
            prediction_text,
            prediction_panel_visible,
            classifying,
        } => transition_prediction(
            config,
            image,
            prediction_text,
            prediction_panel_visible,
            classifying,
            msg,
        ),
    }
}

fn transition_picker(
    config: &Config,
    image: Option<Image>,
    source_prompt_open: bool,
    alert: Option<Alert>,
    msg: Msg,
) -> (State, Vec<Effect>) {
    match msg {
        Msg::TappedPickImage if image.is_none() && alert.is_none() => (
            State::Picker {
                image,
                source_prompt_open: true,
                alert,
            },
            vec![],
        ),
        Msg::CancelledSourcePrompt => (
            State::Picker {
                image,
                source_prompt_open: false,
                alert,
            },
            vec![],
        ),
        Msg::ChoseSource(kind) if source_prompt_open => (
            State::Picker {
                image,
                source_prompt_open: false,
                alert,
            },
            vec![Effect::PickImage(kind)],
        ),
        Msg::ImagePickDone(Ok(Some(picked))) => (
            State::Picker {
                image: Some(picked),
                source_prompt_open: false,
                alert,
            },
            vec![],
        ),
        Msg::ImagePickDone(Err(err)) => (
            State::Picker {
                image,
                source_prompt_open: false,
                alert: Some(Alert {
                    title: "Error".to_string(),
                    message: err.to_string(),
                }),
            },
            vec![],
        ),
        Msg::DismissedAlert => (
            State::Picker {
                image,
                source_prompt_open,
                alert: None,
            },
            vec![],
        ),
        Msg::TappedReset => (State::picker(), vec![]),
        Msg::TappedAnalyze if alert.is_none() => match image {
            Some(image) => (
                State::Prediction {
                    image: image.clone(),
                    prediction_text: config.placeholder_message.clone(),
                    prediction_panel_visible: false,
                    classifying: true,
                },
                vec![Effect::Classify(image)],
            ),
            None => (State::picker(), vec![]),
        },
        _ => (
            State::Picker {
                image,
                source_prompt_open,
                alert,
            },
            vec![],
        ),
    }
}

fn transition_prediction(
    config: &Config,
    image: Image,
    prediction_text: String,
    prediction_panel_visible: bool,
    classifying: bool,
    msg: Msg,
) -> (State, Vec<Effect>) {
    match msg {
        Msg::ClassifyDone(result) if classifying => {
            let prediction_text = match result {
                Ok(classifications) => {
                    let predictions = rank_predictions(
                        classifications
                            .into_iter()
                            .filter_map(|c| Prediction::try_from(c).ok())
                            .collect(),
                    );
                    PredictionFormatter::new(config).format_message(&predictions)
                }
                Err(_) => config.classification_failed_message.clone(),
            };

            (
                State::Prediction {
                    image,
                    prediction_text,
                    prediction_panel_visible: true,
                    classifying: false,
                },
                vec![],
            )
        }
        Msg::SwipedUp => (State::picker(), vec![]),
        _ => (
            State::Prediction {
                image,
                prediction_text,
                prediction_panel_visible,
                classifying,
            },
            vec![],
        ),
    }
}
