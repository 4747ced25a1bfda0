use crate::game::GameSummary;

/// Which top-level view is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Screen {
    Start,
    Playing,
    Finished,
}

/// Passive presentation surface the game controller pushes updates to.
///
/// Implementations must not call back into the controller.
pub trait Display {
    fn present_question(&mut self, text: &str);
    fn present_answer(&mut self, answer: &str);
    fn present_score(&mut self, score: u32);
    fn present_level(&mut self, level: u32);
    fn present_timer(&mut self, time: &str);
    fn present_game_over(&mut self, summary: &GameSummary);
    fn set_input_enabled(&mut self, enabled: bool);
    fn show_screen(&mut self, screen: Screen);
}
