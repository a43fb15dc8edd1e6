use crate::app::render::View;
use crate::device_display::interface::DeviceDisplay;
use std::error::Error;

const WIDTH: usize = 40;

pub struct DeviceDisplayConsole {}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {}
    }
}

/// Lays a view out as a boxed block of text, one entry per row.
pub fn render_rows(view: &View) -> Vec<String> {
    let mut rows = vec![view.title.clone(), String::new()];

    match &view.image {
        Some(name) => rows.push(format!("[image: {}]", name)),
        None => rows.push("[no image]".to_string()),
    }

    if view.prediction_panel_visible {
        rows.push(String::new());
        rows.extend(view.lines.iter().cloned());
    }

    if !view.buttons.is_empty() {
        rows.push(String::new());
        let labels: Vec<String> = view
            .buttons
            .iter()
            .map(|button| format!("<{}>", button.label()))
            .collect();
        rows.push(labels.join(" "));
    }

    if let Some(hint) = &view.hint {
        rows.push(String::new());
        rows.push(hint.clone());
    }

    if let Some(dialog) = &view.dialog {
        rows.push(String::new());
        rows.push(format!("** {} **", dialog.title));
        rows.push(dialog.message.clone());
        rows.push(
            dialog
                .actions
                .iter()
                .map(|action| format!("[{}]", action))
                .collect::<Vec<_>>()
                .join(" "),
        );
    }

    rows
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("┌{}┐", "─".repeat(WIDTH));
        for row in render_rows(view) {
            let row: String = row.chars().take(WIDTH).collect();
            let padding = WIDTH - row.chars().count();
            println!("│{}{}│", row, " ".repeat(padding));
        }
        println!("└{}┘", "─".repeat(WIDTH));
        Ok(())
    }
}
