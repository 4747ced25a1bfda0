use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::display::Screen;

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Restart,
    Digit(char),
    Clear,
    Submit,
    Quit,
}

/// Resolve a key press against the visible screen.
pub fn command_for(key: KeyEvent, screen: Screen) -> Option<Command> {
    // ctrl+c to quit
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    if key.code == KeyCode::Esc {
        return Some(Command::Quit);
    }

    match screen {
        Screen::Start => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Start),
            _ => None,
        },
        Screen::Playing => match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => Some(Command::Digit(c)),
            KeyCode::Char('c') | KeyCode::Backspace | KeyCode::Delete => Some(Command::Clear),
            KeyCode::Enter => Some(Command::Submit),
            _ => None,
        },
        Screen::Finished => match key.code {
            KeyCode::Enter | KeyCode::Char('r') => Some(Command::Restart),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_from_every_screen() {
        for screen in [Screen::Start, Screen::Playing, Screen::Finished] {
            assert_eq!(command_for(key(KeyCode::Esc), screen), Some(Command::Quit));
            assert_eq!(
                command_for(
                    KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                    screen
                ),
                Some(Command::Quit)
            );
        }
    }

    #[test]
    fn test_start_screen_keys() {
        assert_eq!(
            command_for(key(KeyCode::Enter), Screen::Start),
            Some(Command::Start)
        );
        assert_eq!(
            command_for(key(KeyCode::Char(' ')), Screen::Start),
            Some(Command::Start)
        );
        assert_eq!(command_for(key(KeyCode::Char('5')), Screen::Start), None);
    }

    #[test]
    fn test_playing_screen_keys() {
        for c in '0'..='9' {
            assert_eq!(
                command_for(key(KeyCode::Char(c)), Screen::Playing),
                Some(Command::Digit(c))
            );
        }
        assert_eq!(
            command_for(key(KeyCode::Backspace), Screen::Playing),
            Some(Command::Clear)
        );
        assert_eq!(
            command_for(key(KeyCode::Char('c')), Screen::Playing),
            Some(Command::Clear)
        );
        assert_eq!(
            command_for(key(KeyCode::Enter), Screen::Playing),
            Some(Command::Submit)
        );
        assert_eq!(command_for(key(KeyCode::Char('x')), Screen::Playing), None);
        assert_eq!(command_for(key(KeyCode::Char('-')), Screen::Playing), None);
    }

    #[test]
    fn test_finished_screen_keys() {
        assert_eq!(
            command_for(key(KeyCode::Char('r')), Screen::Finished),
            Some(Command::Restart)
        );
        assert_eq!(
            command_for(key(KeyCode::Enter), Screen::Finished),
            Some(Command::Restart)
        );
        assert_eq!(command_for(key(KeyCode::Char('1')), Screen::Finished), None);
    }
}
