//! Headless core of skyplan, a terminal weather-and-activities viewer
//!
//! Everything here is independent of the terminal: the data model, the
//! service client, and a Redux/Elm-style state machine that the `skyplan`
//! binary renders.
//!
//! # Core Concepts
//!
//! - **Action**: describes something that happened ([`Action`])
//! - **Reducer**: the only place state changes ([`reducer`])
//! - **Effect**: side effects the reducer asks for ([`Effect`])
//! - **Store**: holds [`AppState`] and runs middleware around the reducer
//! - **TaskManager**: runs async effects and feeds results back as actions
//!
//! # Async Flow
//!
//! A lookup is a two-phase exchange:
//!
//! 1. `CitySubmit("Paris")` sets the loading flag and returns
//!    `Effect::FetchBundle { city: "Paris" }`
//! 2. The runtime spawns [`BundleClient::fetch_bundle`] on the task manager
//! 3. The task resolves to exactly one of `BundleDidLoad` / `BundleDidError`
//!
//! ```
//! use skyplan_core::{Action, AppState, Effect, Store};
//!
//! let mut store = Store::new(AppState::default());
//! let result = store.dispatch(Action::CitySubmit("Paris".into()));
//!
//! assert!(store.state().is_loading);
//! assert_eq!(result.effects, vec![Effect::FetchBundle { city: "Paris".into() }]);
//! ```

pub mod action;
pub mod api;
pub mod effect;
pub mod error;
pub mod lookup;
pub mod model;
pub mod reducer;
pub mod state;
pub mod store;
pub mod tasks;
pub mod testing;
pub mod theme;

pub use action::Action;
pub use api::{BundleClient, DEFAULT_API_URL};
pub use effect::{DispatchResult, Effect};
pub use error::{ConfigError, FetchError, ThemeStoreError};
pub use lookup::{category_tone, condition_icon, CategoryTone};
pub use model::{ActivityRecommendation, Bundle, WeatherSnapshot};
pub use reducer::reducer;
pub use state::{AppState, BodyView, Notice, LOADING_ANIM_TICK_MS};
pub use store::{LoggingMiddleware, Middleware, NoopMiddleware, Store};
pub use tasks::TaskManager;
pub use theme::{resolve_startup_theme, Theme, ThemeFile, ThemePreference};
