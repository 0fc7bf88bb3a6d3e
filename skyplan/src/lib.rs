//! Terminal front end for skyplan
//!
//! The pattern, end to end:
//! 1. Event (keyboard, wheel, resize) -> [`WeatherView`](components::WeatherView)
//!    `handle_event()` -> actions
//! 2. Actions dispatched to the core store
//! 3. Reducer updates state and returns effects
//! 4. Effects run on the task manager (service lookup, theme file)
//! 5. If state changed, re-render
//!
//! State, reducer and service client live in `skyplan-core`; this crate adds
//! the terminal: event polling, components, colors and the main loop.

pub mod component;
pub mod components;
pub mod event;
pub mod logging;
pub mod overlay;
pub mod palette;
pub mod runtime;
pub mod testing;

pub use component::Component;
pub use event::{EventKind, PollerConfig};
pub use palette::Palette;
pub use runtime::App;
