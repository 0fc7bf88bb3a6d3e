//! Root component: the whole page
//!
//! Routes keys (notice first, then global bindings, then the search box) and
//! lays out header, search, body and help bar. The body is picked from
//! [`AppState::view`].

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};
use skyplan_core::{Action, AppState, BodyView, Theme};

use super::{
    ActivityGrid, ActivityGridProps, CitySearch, CitySearchProps, Component, EmptyPrompt,
    EmptyPromptProps, Header, HeaderProps, HelpBar, HelpBarProps, NoticeModal, NoticeModalProps,
    Skeleton, WeatherPanel, WeatherPanelProps,
};
use crate::event::EventKind;
use crate::palette::Palette;

pub struct WeatherViewProps<'a> {
    pub state: &'a AppState,
}

#[derive(Default)]
pub struct WeatherView {
    search: CitySearch,
    grid: ActivityGrid,
}

impl WeatherView {
    /// Widest the page content grows before centering
    pub const MAX_WIDTH: u16 = 120;

    pub fn new() -> Self {
        Self::default()
    }

    fn search_props<'a>(state: &'a AppState, palette: &'a Palette) -> CitySearchProps<'a> {
        CitySearchProps {
            value: &state.city_input,
            is_focused: state.notice.is_none(),
            is_loading: state.is_loading,
            tick_count: state.tick_count,
            palette,
            on_change: Action::CityInputChange,
            on_submit: Action::CitySubmit,
        }
    }

    fn handle_key(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        let EventKind::Key(key) = event else {
            return vec![];
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            return vec![Action::Quit];
        }

        let Some(theme) = state.theme.resolved() else {
            return match key.code {
                KeyCode::Esc => vec![Action::Quit],
                _ => vec![],
            };
        };
        let palette = Palette::for_theme(theme);

        if let Some(notice) = state.notice {
            // blocking: everything but dismissal is swallowed
            let props = NoticeModalProps { notice, palette };
            return NoticeModal.handle_event(event, props).into_iter().collect();
        }

        match key.code {
            KeyCode::Esc => vec![Action::Quit],
            KeyCode::Char('t') if ctrl => vec![Action::ThemeToggle],
            KeyCode::Up => vec![Action::ActivitiesScroll(-self.grid.row_step())],
            KeyCode::Down => vec![Action::ActivitiesScroll(self.grid.row_step())],
            KeyCode::PageUp => vec![Action::ActivitiesScroll(-self.grid.page_step())],
            KeyCode::PageDown => vec![Action::ActivitiesScroll(self.grid.page_step())],
            _ => self
                .search
                .handle_event(event, Self::search_props(state, palette))
                .into_iter()
                .collect(),
        }
    }

    fn render_body(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        theme: Theme,
        palette: &Palette,
    ) {
        match state.view() {
            BodyView::Empty => EmptyPrompt.render(frame, area, EmptyPromptProps { palette }),
            // the search box carries the spinner; nothing else is shown
            BodyView::Loading => {}
            BodyView::Populated(bundle) => {
                let [panel, _, grid] = Layout::vertical([
                    Constraint::Length(WeatherPanel::HEIGHT),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .areas(area);

                WeatherPanel.render(
                    frame,
                    panel,
                    WeatherPanelProps {
                        weather: &bundle.weather,
                        palette,
                    },
                );
                self.grid.render(
                    frame,
                    grid,
                    ActivityGridProps {
                        activities: &bundle.activities,
                        scroll: state.activity_scroll,
                        theme,
                        palette,
                    },
                );
            }
        }
    }
}

impl Component for WeatherView {
    type Props<'a> = WeatherViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let state = props.state;
        match event {
            EventKind::Resize(width, height) => vec![Action::UiTerminalResize(*width, *height)],
            EventKind::Scroll { delta, .. } => {
                if state.notice.is_none() && state.bundle.is_some() {
                    vec![Action::ActivitiesScroll(*delta * self.grid.row_step())]
                } else {
                    vec![]
                }
            }
            EventKind::Key(_) => self.handle_key(event, state),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let Some(theme) = state.theme.resolved() else {
            Skeleton.render(frame, area, ());
            return;
        };
        let palette = Palette::for_theme(theme);

        frame.render_widget(
            Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
            area,
        );

        let [_, page, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(Self::MAX_WIDTH),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [header, search, body, help] = Layout::vertical([
            Constraint::Length(Header::HEIGHT),
            Constraint::Length(CitySearch::HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(page);

        Header.render(frame, header, HeaderProps { theme, palette });
        self.search
            .render(frame, search, Self::search_props(state, palette));
        self.render_body(frame, body, state, theme, palette);
        HelpBar.render(
            frame,
            help,
            HelpBarProps {
                notice_open: state.notice.is_some(),
                palette,
            },
        );

        if let Some(notice) = state.notice {
            NoticeModal.render(frame, area, NoticeModalProps { notice, palette });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{char_key, ctrl_key, key};
    use skyplan_core::testing::paris_bundle;
    use skyplan_core::Notice;

    fn handle(view: &mut WeatherView, state: &AppState, event: EventKind) -> Vec<Action> {
        view.handle_event(&event, WeatherViewProps { state })
            .into_iter()
            .collect()
    }

    #[test]
    fn test_typing_goes_to_search() {
        let mut view = WeatherView::new();
        let state = AppState::with_theme(Theme::Dark);

        let actions = handle(&mut view, &state, EventKind::Key(char_key('O')));
        assert_eq!(actions, vec![Action::CityInputChange("O".into())]);
    }

    #[test]
    fn test_enter_submits_input() {
        let mut view = WeatherView::new();
        let state = AppState {
            city_input: "Paris".into(),
            ..AppState::with_theme(Theme::Light)
        };

        let actions = handle(&mut view, &state, EventKind::Key(key("enter")));
        assert_eq!(actions, vec![Action::CitySubmit("Paris".into())]);
    }

    #[test]
    fn test_global_bindings() {
        let mut view = WeatherView::new();
        let state = AppState::with_theme(Theme::Dark);

        assert_eq!(
            handle(&mut view, &state, EventKind::Key(ctrl_key('t'))),
            vec![Action::ThemeToggle]
        );
        assert_eq!(
            handle(&mut view, &state, EventKind::Key(key("esc"))),
            vec![Action::Quit]
        );
        assert_eq!(
            handle(&mut view, &state, EventKind::Key(ctrl_key('c'))),
            vec![Action::Quit]
        );
        assert_eq!(
            handle(&mut view, &state, EventKind::Resize(100, 40)),
            vec![Action::UiTerminalResize(100, 40)]
        );
    }

    #[test]
    fn test_notice_blocks_other_keys() {
        let mut view = WeatherView::new();
        let state = AppState {
            notice: Some(Notice::CityNotFound),
            ..AppState::with_theme(Theme::Dark)
        };

        assert!(handle(&mut view, &state, EventKind::Key(char_key('a'))).is_empty());
        assert!(handle(&mut view, &state, EventKind::Key(ctrl_key('t'))).is_empty());
        assert_eq!(
            handle(&mut view, &state, EventKind::Key(key("esc"))),
            vec![Action::NoticeDismiss]
        );
        assert_eq!(
            handle(&mut view, &state, EventKind::Key(key("enter"))),
            vec![Action::NoticeDismiss]
        );
    }

    #[test]
    fn test_uninitialized_ignores_input() {
        let mut view = WeatherView::new();
        let state = AppState::default();

        assert!(handle(&mut view, &state, EventKind::Key(char_key('a'))).is_empty());
        assert!(handle(&mut view, &state, EventKind::Key(ctrl_key('t'))).is_empty());
        assert_eq!(
            handle(&mut view, &state, EventKind::Key(key("esc"))),
            vec![Action::Quit]
        );
    }

    #[test]
    fn test_scroll_keys_and_wheel() {
        let mut view = WeatherView::new();
        let state = AppState {
            bundle: Some(paris_bundle()),
            ..AppState::with_theme(Theme::Dark)
        };

        assert_eq!(
            handle(&mut view, &state, EventKind::Key(key("down"))),
            vec![Action::ActivitiesScroll(1)]
        );
        assert_eq!(
            handle(&mut view, &state, EventKind::Key(key("pageup"))),
            vec![Action::ActivitiesScroll(-1)]
        );
        assert_eq!(
            handle(
                &mut view,
                &state,
                EventKind::Scroll {
                    column: 0,
                    row: 0,
                    delta: -1
                }
            ),
            vec![Action::ActivitiesScroll(-1)]
        );
    }

    #[test]
    fn test_wheel_ignored_without_bundle() {
        let mut view = WeatherView::new();
        let state = AppState::with_theme(Theme::Dark);

        let actions = handle(
            &mut view,
            &state,
            EventKind::Scroll {
                column: 0,
                row: 0,
                delta: 1,
            },
        );
        assert!(actions.is_empty());
    }
}
