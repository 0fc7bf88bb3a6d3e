//! Reducer - (state, action) -> (changed, effects)
//!
//! All state mutations happen here. No I/O: network and disk work is
//! requested through [`Effect`]s and comes back as `*Did*` actions.

use crate::action::Action;
use crate::effect::{DispatchResult, Effect};
use crate::state::{AppState, Notice};
use crate::theme::ThemePreference;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult {
    match action {
        // ===== City =====
        Action::CityInputChange(text) => {
            if state.city_input == text {
                return DispatchResult::unchanged();
            }
            state.city_input = text;
            DispatchResult::changed()
        }

        Action::CitySubmit(text) => {
            let city = text.trim();
            // One request at a time; resubmitting while loading is ignored.
            if city.is_empty() || state.is_loading {
                return DispatchResult::unchanged();
            }
            state.is_loading = true;
            DispatchResult::changed_with(Effect::FetchBundle {
                city: city.to_string(),
            })
        }

        // ===== Bundle =====
        Action::BundleDidLoad(bundle) => {
            state.bundle = Some(bundle);
            state.activity_scroll = 0;
            state.is_loading = false;
            DispatchResult::changed()
        }

        Action::BundleDidError(err) => {
            state.is_loading = false;
            state.notice = Some(Notice::from(&err));
            DispatchResult::changed()
        }

        // ===== Notice =====
        Action::NoticeDismiss => DispatchResult::from_changed(state.notice.take().is_some()),

        // ===== Theme =====
        Action::ThemeToggle => match state.theme.resolved() {
            Some(theme) => {
                let next = theme.toggle();
                state.theme = next.into();
                DispatchResult::changed_with(Effect::PersistTheme(next))
            }
            None => DispatchResult::unchanged(),
        },

        Action::ThemeDidResolve(theme) => {
            if state.theme != ThemePreference::Uninitialized {
                return DispatchResult::unchanged();
            }
            state.theme = theme.into();
            DispatchResult::changed()
        }

        // ===== Activities =====
        Action::ActivitiesScroll(delta) => {
            let max = state.activities().len().saturating_sub(1);
            let next = state
                .activity_scroll
                .saturating_add_signed(delta)
                .min(max);
            if next == state.activity_scroll {
                return DispatchResult::unchanged();
            }
            state.activity_scroll = next;
            DispatchResult::changed()
        }

        // ===== UI =====
        Action::UiTerminalResize(width, height) => {
            if state.terminal_size == (width, height) {
                return DispatchResult::unchanged();
            }
            state.terminal_size = (width, height);
            DispatchResult::changed()
        }

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // only re-render while the spinner is visible
            DispatchResult::from_changed(state.is_loading)
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}
