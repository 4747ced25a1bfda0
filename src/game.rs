use crate::display::{Display, Screen};
use crate::question::{Question, QuestionGenerator};
use crate::timer::{format_time, CountdownTimer};
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info, trace};

pub const QUESTION_SECS: u32 = 30;
pub const ANSWERS_PER_LEVEL: u32 = 5;
pub const MAX_LEVEL: u32 = 3;
pub const POINTS_PER_ANSWER: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum GameState {
    Idle,
    Playing,
    Finished,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Outcome {
    /// All levels cleared
    Completed,
    /// The countdown for a question ran out
    TimeUp,
}

/// Terminal summary pushed to the display when a session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub score: u32,
    pub level: u32,
    pub correct_count: u32,
    pub outcome: Outcome,
}

/// Tunable pacing of a session. Level bounds are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub question_secs: u32,
    pub answers_per_level: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            question_secs: QUESTION_SECS,
            answers_per_level: ANSWERS_PER_LEVEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub state: GameState,
    pub score: u32,
    pub level: u32,
    pub correct_count: u32,
    pub pending_input: String,
    pub current_question: Option<Question>,
}

impl SessionState {
    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            state: GameState::Idle,
            score: 0,
            level: 1,
            correct_count: 0,
            pending_input: String::new(),
            current_question: None,
        }
    }
}

/// Owns one play-through: session state, the active countdown and the
/// display it reports to.
///
/// Every public method is a complete transition; inputs that are not valid in
/// the current state are ignored.
pub struct GameController<D: Display, R: Rng> {
    session: SessionState,
    rules: Rules,
    generator: QuestionGenerator<R>,
    timer: Option<CountdownTimer<Self>>,
    display: D,
}

impl<D: Display, R: Rng> GameController<D, R> {
    pub fn new(display: D, rng: R, rules: Rules) -> Self {
        let mut controller = Self {
            session: SessionState::default(),
            rules,
            generator: QuestionGenerator::new(rng),
            timer: None,
            display,
        };
        controller.present_idle();
        controller
    }

    pub fn start(&mut self) {
        if self.session.state != GameState::Idle {
            return;
        }

        info!(
            question_secs = self.rules.question_secs,
            answers_per_level = self.rules.answers_per_level,
            "session started"
        );
        self.session.state = GameState::Playing;
        self.display.show_screen(Screen::Playing);
        self.display.set_input_enabled(true);
        self.next_question();
    }

    pub fn restart(&mut self) {
        if self.session.state != GameState::Finished {
            return;
        }

        self.stop_timer();
        self.timer = None;
        self.session = SessionState::default();
        self.present_idle();
    }

    pub fn enter_digit(&mut self, digit: char) {
        if !self.session.is_playing() {
            return;
        }
        if !digit.is_ascii_digit() {
            trace!(?digit, "rejected non-digit input");
            return;
        }

        self.session.pending_input.push(digit);
        self.display.present_answer(&self.session.pending_input);
    }

    pub fn clear_input(&mut self) {
        if !self.session.is_playing() {
            return;
        }

        self.clear_pending();
    }

    pub fn submit_answer(&mut self) {
        if !self.session.is_playing() || self.session.pending_input.is_empty() {
            return;
        }
        let Some(question) = self.session.current_question else {
            return;
        };

        // Only digits reach the buffer; anything too long for u32 is simply wrong.
        let answer = self.session.pending_input.parse::<u32>().ok();
        if answer != Some(question.correct_answer()) {
            debug!(question = %question.text(), input = %self.session.pending_input, "wrong answer");
            self.clear_pending();
            return;
        }

        self.session.score += POINTS_PER_ANSWER;
        self.session.correct_count += 1;
        self.display.present_score(self.session.score);
        debug!(
            score = self.session.score,
            correct = self.session.correct_count,
            "correct answer"
        );

        let threshold = self.session.correct_count % self.rules.answers_per_level == 0;
        if threshold && self.session.level >= MAX_LEVEL {
            self.stop_timer();
            self.finish(Outcome::Completed);
            return;
        }

        if threshold {
            self.session.level = (self.session.level + 1).min(MAX_LEVEL);
            self.display.present_level(self.session.level);
            info!(level = self.session.level, "level up");
        }

        self.stop_timer();
        self.next_question();
    }

    /// Deliver exactly one elapsed second to the active countdown.
    pub fn tick(&mut self) {
        self.drive_timer(|timer, ctrl| timer.tick(ctrl));
    }

    /// Deliver wall-clock time to the active countdown.
    pub fn advance(&mut self, elapsed: Duration) {
        self.drive_timer(|timer, ctrl| timer.advance(elapsed, ctrl));
    }

    pub fn state(&self) -> GameState {
        self.session.state
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.current_question.as_ref()
    }

    pub fn timer_remaining(&self) -> Option<u32> {
        self.timer.as_ref().map(CountdownTimer::remaining)
    }

    pub fn timer_running(&self) -> bool {
        self.timer.as_ref().is_some_and(CountdownTimer::is_running)
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    fn next_question(&mut self) {
        self.clear_pending();

        let question = self.generator.generate(self.session.level);
        debug!(question = %question.text(), level = self.session.level, "question presented");
        self.session.current_question = Some(question);
        self.display.present_question(&question.text());

        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.stop_timer();

        let mut timer = CountdownTimer::new(
            self.rules.question_secs,
            Self::on_timer_tick,
            Self::on_timer_complete,
        );
        timer.start();
        self.timer = Some(timer);
        self.display
            .present_timer(&format_time(self.rules.question_secs));
    }

    fn stop_timer(&mut self) {
        if let Some(timer) = self.timer.as_mut() {
            timer.stop();
        }
    }

    // The timer is lifted out while it runs so its handlers can borrow the
    // controller mutably.
    fn drive_timer(&mut self, drive: impl FnOnce(&mut CountdownTimer<Self>, &mut Self)) {
        if let Some(mut timer) = self.timer.take() {
            drive(&mut timer, self);
            if self.timer.is_none() {
                self.timer = Some(timer);
            }
        }
    }

    fn on_timer_tick(&mut self, remaining: u32) {
        self.display.present_timer(&format_time(remaining));
    }

    fn on_timer_complete(&mut self) {
        if self.session.is_playing() {
            self.finish(Outcome::TimeUp);
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.session.state = GameState::Finished;
        self.stop_timer();

        let summary = GameSummary {
            score: self.session.score,
            level: self.session.level,
            correct_count: self.session.correct_count,
            outcome,
        };
        info!(
            score = summary.score,
            level = summary.level,
            correct = summary.correct_count,
            %outcome,
            "session finished"
        );

        self.display.set_input_enabled(false);
        self.display.present_game_over(&summary);
        self.display.show_screen(Screen::Finished);
    }

    fn clear_pending(&mut self) {
        self.session.pending_input.clear();
        self.display.present_answer("");
    }

    fn present_idle(&mut self) {
        self.display.present_score(self.session.score);
        self.display.present_level(self.session.level);
        self.display.present_answer("");
        self.display.set_input_enabled(false);
        self.display.show_screen(Screen::Start);
    }
}
