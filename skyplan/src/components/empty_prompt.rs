use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::Component;
use crate::palette::Palette;

pub const PROMPT_TITLE: &str = "Discover Your Perfect Day";
pub const PROMPT_BODY: &str =
    "Enter a city name to get weather information and personalized activity recommendations";

/// Shown before the first successful lookup
pub struct EmptyPrompt;

pub struct EmptyPromptProps<'a> {
    pub palette: &'a Palette,
}

impl Component for EmptyPrompt {
    type Props<'a> = EmptyPromptProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.palette;
        let [_, content, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(4),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, content, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(60),
            Constraint::Fill(1),
        ])
        .areas(content);

        let lines = vec![
            Line::from(Span::styled(
                PROMPT_TITLE,
                Style::default().fg(palette.text).bold(),
            )),
            Line::default(),
            Line::from(Span::styled(PROMPT_BODY, Style::default().fg(palette.muted))),
        ];
        frame.render_widget(
            Paragraph::new(lines).centered().wrap(Wrap { trim: true }),
            content,
        );
    }
}
