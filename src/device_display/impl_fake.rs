use crate::app::render::View;
use crate::device_display::interface::DeviceDisplay;
use std::error::Error;
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

/// Remembers every view it was asked to show.
#[derive(Clone, Default)]
pub struct DeviceDisplayFake {
    views: Arc<(Mutex<Vec<View>>, Condvar)>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn views(&self) -> Vec<View> {
        self.views
            .0
            .lock()
            .map(|views| views.clone())
            .unwrap_or_default()
    }

    /// Blocks until the latest view satisfies `done`, or `timeout` passes.
    pub fn wait_for(&self, timeout: Duration, done: impl Fn(&View) -> bool) -> Option<View> {
        let (views, rendered) = &*self.views;
        let views = views.lock().ok()?;
        let (views, _) = rendered
            .wait_timeout_while(views, timeout, |views| {
                !views.last().map(|view| done(view)).unwrap_or(false)
            })
            .ok()?;

        views.last().filter(|view| done(*view)).cloned()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        let (views, rendered) = &*self.views;
        views
            .lock()
            .map_err(|_| "Fake display lock poisoned")?
            .push(view.clone());
        rendered.notify_all();
        Ok(())
    }
}
