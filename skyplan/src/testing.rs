//! Render and input helpers for tests
//!
//! - [`RenderHarness`]: draws into a ratatui `TestBackend` and returns the
//!   buffer as plain text
//! - [`key`], [`char_key`], [`ctrl_key`]: build key events
//!
//! ```
//! use ratatui::widgets::Paragraph;
//! use skyplan::testing::RenderHarness;
//!
//! let mut render = RenderHarness::new(20, 2);
//! let output = render.render_to_string_plain(|frame| {
//!     frame.render_widget(Paragraph::new("hello"), frame.area());
//! });
//! assert!(output.starts_with("hello"));
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

use crate::event::EventKind;

/// Renders into an in-memory terminal
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("test terminal: {e}"));
        Self { terminal }
    }

    /// Draw one frame and return the resulting buffer
    pub fn render(&mut self, draw: impl FnOnce(&mut Frame)) -> &Buffer {
        self.terminal
            .draw(draw)
            .unwrap_or_else(|e| panic!("test draw: {e}"));
        self.terminal.backend().buffer()
    }

    /// Draw one frame and return its text, one line per row, styles dropped
    pub fn render_to_string_plain(&mut self, draw: impl FnOnce(&mut Frame)) -> String {
        buffer_to_string_plain(self.render(draw))
    }
}

/// Buffer text, one line per row, trailing spaces trimmed
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.y..area.y + area.height {
        let mut line = String::new();
        for x in area.x..area.x + area.width {
            line.push_str(buffer[(x, y)].symbol());
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Parse a key description like `"enter"`, `"ctrl+t"` or `"a"`
///
/// Panics on an unknown name.
pub fn key(s: &str) -> KeyEvent {
    let lower = s.trim().to_lowercase();
    let (modifiers, name) = match lower.rsplit_once('+') {
        Some((mods, name)) if !name.is_empty() => {
            let mut modifiers = KeyModifiers::empty();
            for part in mods.split('+') {
                match part {
                    "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                    "shift" => modifiers |= KeyModifiers::SHIFT,
                    "alt" => modifiers |= KeyModifiers::ALT,
                    other => panic!("Invalid modifier: {other:?}"),
                }
            }
            (modifiers, name.to_string())
        }
        _ => (KeyModifiers::empty(), lower),
    };

    let code = match name.as_str() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        single if single.chars().count() == 1 => {
            KeyCode::Char(single.chars().next().unwrap_or(' '))
        }
        other => panic!("Invalid key string: {other:?}"),
    };
    press(code, modifiers)
}

/// Key event for a character with no modifiers
pub fn char_key(c: char) -> KeyEvent {
    press(KeyCode::Char(c), KeyModifiers::empty())
}

/// Key event for a character with Ctrl held
pub fn ctrl_key(c: char) -> KeyEvent {
    press(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// One key event per character of `text`
pub fn type_text(text: &str) -> Vec<EventKind> {
    text.chars().map(|c| EventKind::Key(char_key(c))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_parses_names_and_modifiers() {
        assert_eq!(key("enter").code, KeyCode::Enter);
        assert_eq!(key("PageDown").code, KeyCode::PageDown);
        assert_eq!(key("x"), char_key('x'));
        assert_eq!(key("ctrl+t"), ctrl_key('t'));
    }

    #[test]
    fn test_plain_string_has_one_line_per_row() {
        let mut render = RenderHarness::new(10, 3);
        let output = render.render_to_string_plain(|_| {});
        assert_eq!(output, "\n\n\n");
    }

    #[test]
    fn test_type_text() {
        let events = type_text("ab");
        assert_eq!(
            events,
            vec![EventKind::Key(char_key('a')), EventKind::Key(char_key('b'))]
        );
    }
}
