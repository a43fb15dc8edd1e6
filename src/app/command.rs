use crate::app::core::Msg;
use crate::image_source::interface::ImageSourceKind;
use crate::library::logger::interface::Logger;
use std::io::BufRead;
use std::sync::mpsc::Sender;
use std::sync::Arc;

pub const HELP: &str =
    "commands: pick, camera, library, cancel, ok, analyze, reset, swipe, quit";

/// Maps a line of console input onto the tap, swipe or dialog action it stands for.
pub fn parse_command(line: &str) -> Option<Msg> {
    match line.trim().to_lowercase().as_str() {
        "pick" => Some(Msg::TappedPickImage),
        "camera" => Some(Msg::ChoseSource(ImageSourceKind::Camera)),
        "library" | "photos" => Some(Msg::ChoseSource(ImageSourceKind::PhotoLibrary)),
        "cancel" => Some(Msg::CancelledSourcePrompt),
        "ok" => Some(Msg::DismissedAlert),
        "analyze" => Some(Msg::TappedAnalyze),
        "reset" => Some(Msg::TappedReset),
        "swipe" | "back" => Some(Msg::SwipedUp),
        "quit" | "q" => Some(Msg::Quit),
        _ => None,
    }
}

/// Forwards stdin commands until input ends, then asks the loop to quit.
pub fn read_commands(
    input: impl BufRead,
    sender: Sender<Msg>,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    logger.info(HELP)?;

    for line in input.lines() {
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Some(msg) => {
                let quit = msg == Msg::Quit;
                sender.send(msg)?;
                if quit {
                    return Ok(());
                }
            }
            None => logger.info(&format!("Unknown command {:?}. {}", line.trim(), HELP))?,
        }
    }

    sender.send(Msg::Quit)?;

    Ok(())
}
