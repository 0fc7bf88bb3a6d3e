//! Blocking notice shown after a failed lookup

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use skyplan_core::{Action, Notice};

use super::Component;
use crate::event::EventKind;
use crate::overlay::{centered_rect, render_modal};
use crate::palette::Palette;

pub struct NoticeModal;

pub struct NoticeModalProps<'a> {
    pub notice: Notice,
    pub palette: &'a Palette,
}

impl NoticeModal {
    pub const WIDTH: u16 = 56;
    pub const HEIGHT: u16 = 7;
}

impl Component for NoticeModal {
    type Props<'a> = NoticeModalProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        match event {
            EventKind::Key(key) if matches!(key.code, KeyCode::Enter | KeyCode::Esc) => {
                Some(Action::NoticeDismiss)
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.palette;
        let modal_area = centered_rect(Self::WIDTH, Self::HEIGHT, area);
        render_modal(frame, modal_area, palette.surface);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.warning))
            .title(" Notice ")
            .title_style(Style::default().fg(palette.warning).bold())
            .title_alignment(Alignment::Center)
            .style(Style::default().bg(palette.surface));
        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let [message_area, hint_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let message = Paragraph::new(Line::from(Span::styled(
            props.notice.message(),
            Style::default().fg(palette.text),
        )))
        .centered()
        .wrap(Wrap { trim: true });
        frame.render_widget(message, message_area);

        let hint = Line::from(vec![
            Span::styled("Enter", Style::default().fg(palette.accent).bold()),
            Span::styled(" OK", Style::default().fg(palette.muted)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(hint), hint_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{char_key, key, RenderHarness};
    use skyplan_core::Theme;

    fn props(notice: Notice) -> NoticeModalProps<'static> {
        NoticeModalProps {
            notice,
            palette: Palette::for_theme(Theme::Dark),
        }
    }

    #[test]
    fn test_enter_and_esc_dismiss() {
        let mut modal = NoticeModal;
        for name in ["enter", "esc"] {
            let actions: Vec<_> = modal
                .handle_event(&EventKind::Key(key(name)), props(Notice::FetchFailed))
                .into_iter()
                .collect();
            assert_eq!(actions, vec![Action::NoticeDismiss]);
        }
    }

    #[test]
    fn test_other_keys_do_nothing() {
        let mut modal = NoticeModal;
        let actions: Vec<_> = modal
            .handle_event(&EventKind::Key(char_key('x')), props(Notice::FetchFailed))
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_renders_message() {
        let mut render = RenderHarness::new(80, 24);
        let output = render.render_to_string_plain(|frame| {
            NoticeModal.render(frame, frame.area(), props(Notice::CityNotFound));
        });

        assert!(output.contains("Notice"));
        assert!(output.contains("City not found."));
        assert!(output.contains("Please check the city name"));
    }
}
