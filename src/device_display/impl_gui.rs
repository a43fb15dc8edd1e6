use crate::app::render::View;
use crate::device_display::interface::DeviceDisplay;
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
struct DisplayWindow {
    view: Arc<Mutex<View>>,
}

impl eframe::App for DisplayWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = match self.view.lock() {
            Ok(view) => view.clone(),
            Err(_) => return,
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(view.title.as_str());
                ui.add_space(10.0);

                let image_text = match &view.image {
                    Some(name) => format!("🖼 {}", name),
                    None => "No image selected".to_string(),
                };
                ui.label(egui::RichText::new(image_text).size(16.0));

                if view.prediction_panel_visible {
                    ui.separator();
                    for line in &view.lines {
                        ui.label(egui::RichText::new(line.as_str()).monospace().size(18.0));
                    }
                }

                if !view.buttons.is_empty() {
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        for button in &view.buttons {
                            ui.add_enabled(false, egui::Button::new(button.label()));
                        }
                    });
                }

                if let Some(hint) = &view.hint {
                    ui.add_space(10.0);
                    ui.label(egui::RichText::new(hint.as_str()).italics().weak());
                }
            });
        });

        if let Some(dialog) = &view.dialog {
            egui::Window::new(dialog.title.as_str())
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(dialog.message.as_str());
                    ui.horizontal(|ui| {
                        for action in &dialog.actions {
                            ui.add_enabled(false, egui::Button::new(action.as_str()));
                        }
                    });
                });
        }

        // Input arrives from the console, so poll for new views.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

/// Owns the egui window. winit only builds its event loop on the main
/// thread, so `run` must be called from there.
pub struct GuiWindow {
    view: Arc<Mutex<View>>,
}

impl GuiWindow {
    /// Blocks until the window is closed.
    pub fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([420.0, 320.0])
                .with_resizable(false),
            ..Default::default()
        };

        let window = DisplayWindow { view: self.view };

        eframe::run_native(
            "Still Image Classifier",
            options,
            Box::new(move |_cc| Box::new(window)),
        )
        .map_err(|e| format!("GUI display failed: {}", e))?;

        Ok(())
    }
}

pub struct DeviceDisplayGui {
    view: Arc<Mutex<View>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            view: Arc::new(Mutex::new(View::default())),
        }
    }

    /// The window showing whatever this display was last asked to render.
    pub fn window(&self) -> GuiWindow {
        GuiWindow {
            view: self.view.clone(),
        }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.view.lock().map_err(|_| "GUI view lock poisoned")? = view.clone();
        Ok(())
    }
}
