//! Main TUI application state and logic

use crate::parser::{evaluate, EvalError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// How long a keypad button stays highlighted after its key is pressed
const KEY_FLASH: Duration = Duration::from_millis(150);

/// The main application state
///
/// Holds the expression being typed and the outcome of the last `=` press.
/// The evaluation core itself is stateless; every bit of "last call errored"
/// state lives here.
pub struct App {
    /// The expression currently being typed
    pub input: String,

    /// Outcome of the most recent evaluation, if any
    pub outcome: Option<Result<f64, EvalError>>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Most recently pressed keypad key, for the button flash
    last_key: Option<(char, Instant)>,
}

impl App {
    pub fn new() -> Self {
        App {
            input: String::new(),
            outcome: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_key: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Poll with a timeout so the keypad flash expires without input
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Display on top, keypad below, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_display(frame, chunks[0], &self.input, self.outcome.as_ref());
        super::panes::render_keypad(frame, chunks[1], self.flashed_key());
        super::panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            matches!(self.outcome, Some(Err(_))),
        );
    }

    /// The keypad key to highlight, if its flash has not yet expired
    fn flashed_key(&self) -> Option<char> {
        match self.last_key {
            Some((key, at)) if at.elapsed() < KEY_FLASH => Some(key),
            _ => None,
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ ('0'..='9' | '.' | '+' | '-' | '*' | '/' | '(' | ')')) => {
                self.press(c);
                // New input after a result starts a fresh calculation
                if self.outcome.is_some() {
                    self.outcome = None;
                }
                self.input.push(c);
                self.status_message = String::from("Typing...");
            }
            KeyCode::Enter | KeyCode::Char('=') => {
                self.press('=');
                self.calculate();
            }
            KeyCode::Backspace => {
                self.press('<');
                self.input.pop();
                self.status_message = String::from("Deleted");
            }
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Delete => {
                self.press('c');
                self.input.clear();
                self.outcome = None;
                self.status_message = String::from("Cleared");
            }
            _ => {}
        }
    }

    /// Evaluate the current input and record the outcome
    fn calculate(&mut self) {
        if self.input.is_empty() {
            self.status_message = String::from("Nothing to evaluate");
            return;
        }

        let result = evaluate(&self.input);
        self.status_message = match &result {
            Ok(value) => format!("= {}", value),
            Err(e) => format!("{}", e),
        };
        self.outcome = Some(result);
    }

    /// Record a key press for the keypad flash
    fn press(&mut self, key: char) {
        self.last_key = Some((key, Instant::now()));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, event::KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_evaluate() {
        let mut app = App::new();
        type_str(&mut app, "2+3*4");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.outcome, Some(Ok(14.0)));
        assert_eq!(app.status_message, "= 14");
    }

    #[test]
    fn test_error_is_held_until_cleared() {
        let mut app = App::new();
        type_str(&mut app, "(2+3");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.outcome, Some(Err(_))));
        assert!(app.status_message.contains("mismatched"));

        press(&mut app, KeyCode::Char('c'));
        assert!(app.input.is_empty());
        assert!(app.outcome.is_none());
    }

    #[test]
    fn test_new_input_clears_result() {
        let mut app = App::new();
        type_str(&mut app, "1+1");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.outcome, Some(Ok(2.0)));

        press(&mut app, KeyCode::Char('5'));
        assert!(app.outcome.is_none());
        assert_eq!(app.input, "1+15");
    }

    #[test]
    fn test_backspace_and_quit() {
        let mut app = App::new();
        type_str(&mut app, "12");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "1");

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
