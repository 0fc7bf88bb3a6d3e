use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::palette::Palette;

pub struct HelpBar;

pub struct HelpBarProps<'a> {
    pub notice_open: bool,
    pub palette: &'a Palette,
}

impl Component for HelpBar {
    type Props<'a> = HelpBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let bindings: &[(&str, &str)] = if props.notice_open {
            &[("Enter/Esc", "dismiss"), ("^C", "quit")]
        } else {
            &[
                ("Enter", "search"),
                ("^T", "theme"),
                ("PgUp/PgDn", "scroll"),
                ("Esc", "quit"),
            ]
        };

        let key_style = Style::default().fg(props.palette.accent).bold();
        let label_style = Style::default().fg(props.palette.muted);
        let spans: Vec<Span> = bindings
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(format!(" {key}"), key_style),
                    Span::styled(format!(" {label} "), label_style),
                ]
            })
            .collect();

        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}
