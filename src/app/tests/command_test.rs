#[cfg(test)]
mod command_test {
    use crate::app::command::{parse_command, read_commands};
    use crate::app::core::Msg;
    use crate::image_source::interface::ImageSourceKind;
    use crate::library::logger::impl_console::LoggerConsole;
    use std::io::Cursor;
    use std::sync::mpsc::channel;
    use std::sync::Arc;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("pick"), Some(Msg::TappedPickImage));
        assert_eq!(
            parse_command("  Camera "),
            Some(Msg::ChoseSource(ImageSourceKind::Camera))
        );
        assert_eq!(
            parse_command("library"),
            Some(Msg::ChoseSource(ImageSourceKind::PhotoLibrary))
        );
        assert_eq!(parse_command("swipe"), Some(Msg::SwipedUp));
        assert_eq!(parse_command("q"), Some(Msg::Quit));
        assert_eq!(parse_command("dance"), None);
    }

    #[test]
    fn test_read_commands_ends_with_quit() {
        let (sender, receiver) = channel();
        let logger = Arc::new(LoggerConsole::new(*chrono::Local::now().offset()));

        read_commands(Cursor::new("pick\n\nnonsense\nlibrary\n"), sender, logger).unwrap();

        let msgs: Vec<Msg> = receiver.iter().collect();
        assert_eq!(
            msgs,
            vec![
                Msg::TappedPickImage,
                Msg::ChoseSource(ImageSourceKind::PhotoLibrary),
                Msg::Quit,
            ]
        );
    }
}
