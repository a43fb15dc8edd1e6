use crate::app::render::View;
use std::error::Error;

/// Somewhere to show the picker and prediction screens.
pub trait DeviceDisplay: Send + Sync {
    /// Prepare the display before the first render
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Replace whatever is shown with `view`
    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>>;
}
