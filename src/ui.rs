pub mod screen;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Widget,
    Frame,
};

use crate::{app::App, board::Board};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

/// Timer text at or below this is drawn as a warning
const LOW_TIME: &str = "00:05";

impl Widget for &Board {
    fn render(self, area: Rect, buf: &mut Buffer) {
        screen::current_view(self.screen).render(self, area, buf);
    }
}

pub fn draw(app: &App, f: &mut Frame) {
    f.render_widget(app.board(), f.area());
}

/// Stack rows of the given heights in the vertical middle of `area`.
fn centered_rows(area: Rect, heights: &[u16]) -> Vec<Rect> {
    let content: u16 = heights.iter().sum();
    let pad = area
        .height
        .saturating_sub(VERTICAL_MARGIN * 2)
        .saturating_sub(content)
        / 2;

    let mut constraints = vec![Constraint::Length(pad)];
    constraints.extend(heights.iter().map(|h| Constraint::Length(*h)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints(constraints)
        .split(area);

    chunks[1..=heights.len()].to_vec()
}

fn bold_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn dim_style() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

fn italic_style() -> Style {
    Style::default().add_modifier(Modifier::ITALIC)
}

fn timer_style(timer: &str) -> Style {
    // MM:SS compares correctly as text
    if timer <= LOW_TIME {
        bold_style().fg(Color::Red)
    } else {
        bold_style().fg(Color::Yellow)
    }
}
