use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::{bold_style, centered_rows, dim_style, italic_style, timer_style};
use crate::board::Board;
use crate::display::Screen;
use crate::game::Outcome;

/// A UI Screen boundary: draws one top-level view of the board
pub trait View {
    fn render(&self, board: &Board, area: Rect, buf: &mut Buffer);
}

/// Title and how to begin
pub struct StartView;

impl View for StartView {
    fn render(&self, board: &Board, area: Rect, buf: &mut Buffer) {
        let rows = centered_rows(area, &[1, 1, 1, 1]);

        Paragraph::new(Span::styled("mathsprint", bold_style().fg(Color::Cyan)))
            .alignment(Alignment::Center)
            .render(rows[0], buf);

        Paragraph::new(Span::styled(
            format!("Level {}   Score {}", board.level, board.score),
            dim_style(),
        ))
        .alignment(Alignment::Center)
        .render(rows[1], buf);

        Paragraph::new(Span::styled(
            "press enter to start / (esc)ape",
            italic_style(),
        ))
        .alignment(Alignment::Center)
        .render(rows[3], buf);
    }
}

/// Question, answer buffer, and status line
pub struct PlayingView;

impl View for PlayingView {
    fn render(&self, board: &Board, area: Rect, buf: &mut Buffer) {
        let rows = centered_rows(area, &[1, 1, 1, 1, 3, 1, 1]);

        let status = Line::from(vec![
            Span::styled(format!("Level {}", board.level), bold_style()),
            Span::raw("   "),
            Span::styled(format!("Score {}", board.score), bold_style()),
            Span::raw("   "),
            Span::styled(board.timer.clone(), timer_style(&board.timer)),
        ]);
        Paragraph::new(status)
            .alignment(Alignment::Center)
            .render(rows[0], buf);

        Paragraph::new(Span::styled(
            board.question.clone(),
            bold_style().fg(Color::Magenta),
        ))
        .alignment(Alignment::Center)
        .render(rows[2], buf);

        let answer_style = if board.input_enabled {
            bold_style().fg(Color::Green)
        } else {
            dim_style()
        };
        Paragraph::new(Span::styled(board.answer.clone(), answer_style))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("answer"))
            .render(rows[4], buf);

        Paragraph::new(Span::styled(
            "0-9 type / (enter) submit / (c)lear / (esc)ape",
            italic_style(),
        ))
        .alignment(Alignment::Center)
        .render(rows[6], buf);
    }
}

/// Terminal summary of a session
pub struct FinishedView;

impl View for FinishedView {
    fn render(&self, board: &Board, area: Rect, buf: &mut Buffer) {
        let rows = centered_rows(area, &[1, 1, 1, 1, 1, 1, 1]);

        let (banner, color) = match board.summary.map(|s| s.outcome) {
            Some(Outcome::Completed) => ("All levels cleared!", Color::Green),
            Some(Outcome::TimeUp) | None => ("Time's up!", Color::Red),
        };
        Paragraph::new(Span::styled(banner, bold_style().fg(color)))
            .alignment(Alignment::Center)
            .render(rows[0], buf);

        if let Some(summary) = board.summary {
            let lines = [
                format!("Final score: {}", summary.score),
                format!("Final level: {}", summary.level),
                format!("Correct answers: {}", summary.correct_count),
            ];
            for (row, text) in rows[2..5].iter().zip(lines) {
                Paragraph::new(Span::styled(text, Style::default()))
                    .alignment(Alignment::Center)
                    .render(*row, buf);
            }
        }

        Paragraph::new(Span::styled("(r)estart / (esc)ape", italic_style()))
            .alignment(Alignment::Center)
            .render(rows[6], buf);
    }
}

/// Helper to construct the appropriate view for the visible screen
pub fn current_view(screen: Screen) -> Box<dyn View> {
    match screen {
        Screen::Start => Box::new(StartView),
        Screen::Playing => Box::new(PlayingView),
        Screen::Finished => Box::new(FinishedView),
    }
}
