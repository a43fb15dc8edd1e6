use crate::app::core::Msg;
use crate::config::Config;
use crate::device_display::interface::DeviceDisplay;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_source::interface::ImageSource;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct App {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub image_source: Arc<dyn ImageSource + Send + Sync>,
    pub image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    pub msg_sender: Sender<Msg>,
    pub msg_receiver: Arc<Mutex<Receiver<Msg>>>,
}

impl App {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        image_source: Arc<dyn ImageSource + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    ) -> Self {
        let (msg_sender, msg_receiver) = channel();

        Self {
            config,
            logger: logger.with_namespace("app"),
            image_source,
            image_classifier,
            device_display,
            msg_sender,
            msg_receiver: Arc::new(Mutex::new(msg_receiver)),
        }
    }

    /// Handle for feeding user input into the message loop.
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_sender.clone()
    }

    pub fn send(&self, msg: Msg) {
        if let Err(e) = self.msg_sender.send(msg) {
            let _ = self.logger.error(&format!("Dropped message: {}", e));
        }
    }

    pub fn recv(&self) -> Result<Msg, Box<dyn std::error::Error + Send + Sync>> {
        let receiver = self
            .msg_receiver
            .lock()
            .map_err(|_| "Message receiver lock poisoned")?;

        Ok(receiver.recv()?)
    }
}
