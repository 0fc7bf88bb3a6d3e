use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::palette::SKELETON;

pub const SHADE: &str = "░";

/// Placeholder page drawn until the theme is known
pub struct Skeleton;

fn bar(width: u16) -> Line<'static> {
    Line::from(SHADE.repeat(width as usize)).centered()
}

impl Component for Skeleton {
    type Props<'a> = ();

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: ()) {
        let style = Style::default().fg(SKELETON.surface);
        let [header, search, body] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

        let header_lines = vec![bar(12), bar(area.width / 3)];
        frame.render_widget(Paragraph::new(header_lines).style(style), header);

        let search_box = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(SKELETON.border));
        frame.render_widget(search_box, search);

        let body_lines = vec![
            Line::default(),
            bar(area.width / 2),
            Line::default(),
            bar(area.width * 2 / 3),
            bar(area.width * 2 / 3),
        ];
        frame.render_widget(Paragraph::new(body_lines).style(style), body);
    }
}
