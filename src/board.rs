use crate::display::{Display, Screen};
use crate::game::GameSummary;
use crate::timer::format_time;

/// Everything the terminal needs to draw a frame, updated by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub screen: Screen,
    pub question: String,
    pub answer: String,
    pub score: u32,
    pub level: u32,
    pub timer: String,
    pub summary: Option<GameSummary>,
    pub input_enabled: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            screen: Screen::Start,
            question: String::new(),
            answer: String::new(),
            score: 0,
            level: 1,
            timer: format_time(0),
            summary: None,
            input_enabled: false,
        }
    }
}

impl Display for Board {
    fn present_question(&mut self, text: &str) {
        self.question = text.to_string();
    }

    fn present_answer(&mut self, answer: &str) {
        self.answer = answer.to_string();
    }

    fn present_score(&mut self, score: u32) {
        self.score = score;
    }

    fn present_level(&mut self, level: u32) {
        self.level = level;
    }

    fn present_timer(&mut self, time: &str) {
        self.timer = time.to_string();
    }

    fn present_game_over(&mut self, summary: &GameSummary) {
        self.summary = Some(*summary);
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    fn show_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }
}
