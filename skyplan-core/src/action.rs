//! Actions: every state change goes through one of these
//!
//! Naming follows a prefix convention so logs group nicely:
//! - `City*`: search input and submission (intent)
//! - `Bundle*`: async results, `Did` marks a completion
//! - `Theme*`, `Notice*`, `Activities*`, `Ui*`: view concerns
//! - `Tick`, `Quit`: global

use crate::error::FetchError;
use crate::model::Bundle;
use crate::theme::Theme;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== City =====
    /// The search input text changed
    CityInputChange(String),

    /// Intent: look up this city (untrimmed, as typed)
    CitySubmit(String),

    // ===== Bundle =====
    /// Result: the service returned weather and activities
    BundleDidLoad(Bundle),

    /// Result: the request failed
    BundleDidError(FetchError),

    // ===== Notice =====
    /// Close the blocking notice
    NoticeDismiss,

    // ===== Theme =====
    /// Flip between light and dark
    ThemeToggle,

    /// Result: startup theme resolution finished
    ThemeDidResolve(Theme),

    // ===== Activities =====
    /// Scroll the activity grid by this many rows
    ActivitiesScroll(isize),

    // ===== UI =====
    UiTerminalResize(u16, u16),

    // ===== Global =====
    /// Spinner animation
    Tick,

    /// Exit the application (handled by the runtime)
    Quit,
}

impl Action {
    /// Variant name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::CityInputChange(_) => "CityInputChange",
            Action::CitySubmit(_) => "CitySubmit",
            Action::BundleDidLoad(_) => "BundleDidLoad",
            Action::BundleDidError(_) => "BundleDidError",
            Action::NoticeDismiss => "NoticeDismiss",
            Action::ThemeToggle => "ThemeToggle",
            Action::ThemeDidResolve(_) => "ThemeDidResolve",
            Action::ActivitiesScroll(_) => "ActivitiesScroll",
            Action::UiTerminalResize(..) => "UiTerminalResize",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }

    /// Category inferred from the name prefix, `None` for global actions.
    pub fn category(&self) -> Option<&'static str> {
        match self {
            Action::CityInputChange(_) | Action::CitySubmit(_) => Some("city"),
            Action::BundleDidLoad(_) | Action::BundleDidError(_) => Some("bundle"),
            Action::NoticeDismiss => Some("notice"),
            Action::ThemeToggle | Action::ThemeDidResolve(_) => Some("theme"),
            Action::ActivitiesScroll(_) => Some("activities"),
            Action::UiTerminalResize(..) => Some("ui"),
            Action::Tick | Action::Quit => None,
        }
    }

    /// Async results carry `Did` in their name.
    pub fn is_async_result(&self) -> bool {
        self.name().contains("Did")
    }

    /// Short one-line description for the action log.
    ///
    /// Data-heavy variants are condensed instead of dumping full `Debug`.
    pub fn summary(&self) -> String {
        match self {
            Action::BundleDidLoad(bundle) => format!(
                "BundleDidLoad {{ city: {:?}, temp: {}°C, activities: {} }}",
                bundle.weather.city,
                bundle.weather.temperature,
                bundle.activities.len()
            ),
            Action::BundleDidError(err) => format!("BundleDidError({err})"),
            _ => format!("{self:?}"),
        }
    }
}
