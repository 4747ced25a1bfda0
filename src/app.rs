use crossterm::event::KeyEvent;
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;

use crate::board::Board;
use crate::config::RuntimeSettings;
use crate::game::GameController;
use crate::keymap::{command_for, Command};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    pub controller: GameController<Board, StdRng>,
}

impl App {
    pub fn new(settings: &RuntimeSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            controller: GameController::new(Board::default(), rng, settings.rules()),
        }
    }

    pub fn board(&self) -> &Board {
        self.controller.display()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match command_for(key, self.board().screen) {
            Some(cmd) => self.dispatch(cmd),
            None => Flow::Continue,
        }
    }

    pub fn dispatch(&mut self, cmd: Command) -> Flow {
        match cmd {
            Command::Start => self.controller.start(),
            Command::Restart => self.controller.restart(),
            Command::Digit(c) => self.controller.enter_digit(c),
            Command::Clear => self.controller.clear_input(),
            Command::Submit => self.controller.submit_answer(),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    pub fn on_tick(&mut self, elapsed: Duration) {
        self.controller.advance(elapsed);
    }
}
