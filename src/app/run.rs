use super::{core::Effect, main::App};
use crate::app::core::{init, transition, Msg, State};

impl App {
    /// Runs the message loop until `Msg::Quit` and returns the final state.
    pub fn run(&self) -> Result<State, Box<dyn std::error::Error + Send + Sync>> {
        self.device_display
            .lock()
            .map_err(|_| "Display lock poisoned")?
            .init()?;

        let (mut current_state, effects) = init(&self.config);

        self.render(&current_state)?;

        self.execute_effects(effects);

        loop {
            let msg = self.recv()?;

            if msg == Msg::Quit {
                self.logger.info("Quitting")?;
                return Ok(current_state);
            }

            self.logger.info(&format!("msg: {:?}", msg))?;

            let (new_state, effects) = transition(&self.config, current_state, msg);

            self.logger.info(&format!(
                "new state: {:?}, effects: {:?}",
                new_state, effects
            ))?;

            current_state = new_state;

            self.render(&current_state)?;

            self.execute_effects(effects);
        }
    }

    fn execute_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.execute_effect(effect));
        }
    }
}
