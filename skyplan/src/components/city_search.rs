//! City search box: single-line input with cursor and a busy spinner

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use skyplan_core::Action;

use super::Component;
use crate::event::EventKind;
use crate::palette::Palette;

pub const PLACEHOLDER: &str = "Enter city name...";
pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct CitySearchProps<'a> {
    /// Current input value
    pub value: &'a str,
    pub is_focused: bool,
    /// A lookup is in flight
    pub is_loading: bool,
    /// Drives the spinner frame
    pub tick_count: u32,
    pub palette: &'a Palette,
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

/// Text input owning only its cursor; the value lives in app state
#[derive(Default)]
pub struct CitySearch {
    /// Cursor position (byte index)
    cursor: usize,
}

impl CitySearch {
    pub const HEIGHT: u16 = 3;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
        while !value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    fn move_cursor_left(&mut self, value: &str) {
        if let Some((i, _)) = value[..self.cursor].char_indices().next_back() {
            self.cursor = i;
        }
    }

    fn move_cursor_right(&mut self, value: &str) {
        if let Some(c) = value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        new_value
    }

    /// Backspace
    fn delete_char_before(&mut self, value: &str) -> Option<String> {
        let (start, _) = value[..self.cursor].char_indices().next_back()?;
        let new_value = format!("{}{}", &value[..start], &value[self.cursor..]);
        self.cursor = start;
        Some(new_value)
    }

    /// Delete
    fn delete_char_at(&self, value: &str) -> Option<String> {
        let c = value[self.cursor..].chars().next()?;
        Some(format!(
            "{}{}",
            &value[..self.cursor],
            &value[self.cursor + c.len_utf8()..]
        ))
    }

    fn status_line<'a>(props: &CitySearchProps<'a>) -> Line<'a> {
        let palette = props.palette;
        if props.is_loading {
            let spinner = SPINNERS[(props.tick_count as usize / 2) % SPINNERS.len()];
            Line::from(vec![
                Span::styled(spinner, Style::default().fg(palette.accent)),
                Span::styled(" Searching ", Style::default().fg(palette.muted)),
            ])
        } else {
            Line::from(vec![
                Span::styled("⏎", Style::default().fg(palette.accent).bold()),
                Span::styled(" Search ", Style::default().fg(palette.muted)),
            ])
        }
    }
}

impl Component for CitySearch {
    type Props<'a> = CitySearchProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };

        self.clamp_cursor(props.value);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor = props.value.len();
                    None
                }
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some((props.on_change)(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let new_value = self.insert_char(props.value, c);
                Some((props.on_change)(new_value))
            }
            KeyCode::Backspace => self
                .delete_char_before(props.value)
                .map(props.on_change),
            KeyCode::Delete => self.delete_char_at(props.value).map(props.on_change),
            KeyCode::Left => {
                self.move_cursor_left(props.value);
                None
            }
            KeyCode::Right => {
                self.move_cursor_right(props.value);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                None
            }
            KeyCode::Enter => Some((props.on_submit)(props.value.to_string())),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);
        let palette = props.palette;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if props.is_focused {
                palette.accent
            } else {
                palette.border
            }))
            .style(Style::default().bg(palette.surface));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let status = Self::status_line(&props);
        let status_width = status.width() as u16;
        let [input_area, status_area] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(status_width)])
                .areas(inner);

        let text = if props.value.is_empty() {
            Span::styled(PLACEHOLDER, Style::default().fg(palette.muted))
        } else {
            Span::styled(props.value, Style::default().fg(palette.text))
        };
        frame.render_widget(Paragraph::new(Line::from(text)), input_area);
        frame.render_widget(Paragraph::new(status), status_area);

        if props.is_focused {
            let offset = props.value[..self.cursor].chars().count() as u16;
            let cursor_x = input_area.x.saturating_add(offset);
            if cursor_x < input_area.x + input_area.width {
                frame.set_cursor_position((cursor_x, input_area.y));
            }
        }
    }
}
