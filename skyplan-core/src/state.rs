//! Application state - single source of truth
//!
//! Components receive `&AppState` as props and never mutate it; only the
//! reducer does.

use crate::error::FetchError;
use crate::model::{ActivityRecommendation, Bundle, WeatherSnapshot};
use crate::theme::{Theme, ThemePreference};

/// Spinner frame interval
pub const LOADING_ANIM_TICK_MS: u64 = 80;

/// Blocking message shown after a failed lookup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    CityNotFound,
    FetchFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::CityNotFound => "City not found. Please check the city name and try again.",
            Notice::FetchFailed => "Failed to fetch weather data. Please try again.",
        }
    }
}

impl From<&FetchError> for Notice {
    fn from(err: &FetchError) -> Self {
        match err {
            FetchError::NotFound { .. } => Notice::CityNotFound,
            FetchError::RequestFailed { .. } => Notice::FetchFailed,
        }
    }
}

/// Which body the page shows. Exactly one applies at a time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyView<'a> {
    /// Nothing fetched yet and nothing in flight
    Empty,
    /// A request is in flight
    Loading,
    /// A bundle is held
    Populated(&'a Bundle),
}

/// Everything the UI needs to render
#[derive(Clone, Debug)]
pub struct AppState {
    /// Search input text, as typed
    pub city_input: String,

    /// Last successful response (None = nothing fetched yet)
    pub bundle: Option<Bundle>,

    /// A bundle request is in flight
    pub is_loading: bool,

    /// Blocking notice after a failure
    pub notice: Option<Notice>,

    pub theme: ThemePreference,

    /// First visible row of the activity grid
    pub activity_scroll: usize,

    /// Animation frame counter (for the spinner)
    pub tick_count: u32,

    pub terminal_size: (u16, u16),
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            city_input: String::new(),
            bundle: None,
            is_loading: false,
            notice: None,
            theme: ThemePreference::Uninitialized,
            activity_scroll: 0,
            tick_count: 0,
            terminal_size: (80, 24),
        }
    }
}

impl AppState {
    /// State with an already-resolved theme (used by tests and previews).
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme: theme.into(),
            ..Default::default()
        }
    }

    pub fn weather(&self) -> Option<&WeatherSnapshot> {
        self.bundle.as_ref().map(|b| &b.weather)
    }

    pub fn activities(&self) -> &[ActivityRecommendation] {
        self.bundle
            .as_ref()
            .map(|b| b.activities.as_slice())
            .unwrap_or(&[])
    }

    /// Derive the body to render. Loading wins over a held bundle.
    pub fn view(&self) -> BodyView<'_> {
        if self.is_loading {
            BodyView::Loading
        } else if let Some(bundle) = self.bundle.as_ref() {
            BodyView::Populated(bundle)
        } else {
            BodyView::Empty
        }
    }
}
