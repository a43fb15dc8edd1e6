use app::command::read_commands;
use app::core::Msg;
use app::main::App;
use config::{Config, DisplayKind};
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use device_display::interface::DeviceDisplay;
use image_classifier::impl_fake::ImageClassifierFake;
use image_source::impl_fake::ImageSourceFake;
use image_source::impl_file::ImageSourceFile;
use image_source::interface::ImageSource;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use std::sync::{Arc, Mutex};

mod app;
mod config;
mod device_display;
mod image_classifier;
mod image_source;
mod library;
mod prediction;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env()?;

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let image_source: Arc<dyn ImageSource + Send + Sync> = match &config.photo_library_path {
        Some(path) => Arc::new(ImageSourceFile::new(logger.clone(), path.clone())),
        None => Arc::new(ImageSourceFake::new(logger.clone(), false)),
    };

    let image_classifier = Arc::new(ImageClassifierFake::new(logger.clone()));

    let gui = match config.display {
        DisplayKind::Console => None,
        DisplayKind::Gui => Some(DeviceDisplayGui::new()),
    };

    let gui_window = gui.as_ref().map(DeviceDisplayGui::window);

    let device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> = match gui {
        Some(gui) => Arc::new(Mutex::new(gui)),
        None => Arc::new(Mutex::new(DeviceDisplayConsole::new())),
    };

    let app = App::new(
        config,
        logger.clone(),
        image_source,
        image_classifier,
        device_display,
    );

    let sender = app.sender();
    let input_logger = logger.with_namespace("input");
    std::thread::spawn(move || {
        if let Err(e) = read_commands(std::io::stdin().lock(), sender, input_logger.clone()) {
            let _ = input_logger.error(&format!("Reading commands failed: {}", e));
        }
    });

    let window = match gui_window {
        Some(window) => window,
        None => {
            app.run()?;
            return Ok(());
        }
    };

    // The window needs the main thread, so the message loop moves off it.
    let quit = app.sender();
    let app_thread = std::thread::spawn(move || app.run());

    if let Err(e) = window.run() {
        logger.error(&e.to_string())?;
    }

    let _ = quit.send(Msg::Quit);

    app_thread.join().map_err(|_| "App thread panicked")??;

    Ok(())
}
