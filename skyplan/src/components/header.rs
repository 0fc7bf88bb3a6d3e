use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use skyplan_core::Theme;

use super::Component;
use crate::palette::Palette;

pub const APP_TITLE: &str = "WeatherVibe";
pub const TAGLINE: &str = "Discover activities for any weather";

pub struct Header;

pub struct HeaderProps<'a> {
    pub theme: Theme,
    pub palette: &'a Palette,
}

impl Header {
    pub const HEIGHT: u16 = 2;

    /// Glyph for the theme a toggle would switch to
    pub fn toggle_glyph(theme: Theme) -> &'static str {
        match theme {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }
}

impl Component for Header {
    type Props<'a> = HeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.palette;
        let [title_row, tagline_row] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let title = Line::from(Span::styled(
            APP_TITLE,
            Style::default().fg(palette.accent).bold(),
        ))
        .centered();
        frame.render_widget(Paragraph::new(title), title_row);

        let toggle = Line::from(vec![
            Span::styled(Header::toggle_glyph(props.theme), Style::default().fg(palette.star)),
            Span::styled(" ^T ", Style::default().fg(palette.muted)),
        ]);
        let [_, toggle_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(toggle.width() as u16)])
                .areas(title_row);
        frame.render_widget(Paragraph::new(toggle), toggle_area);

        let tagline = Line::from(Span::styled(TAGLINE, Style::default().fg(palette.muted))).centered();
        frame.render_widget(Paragraph::new(tagline), tagline_row);
    }
}
