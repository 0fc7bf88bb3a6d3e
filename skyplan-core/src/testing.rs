//! Test utilities
//!
//! - Fixture bundles ([`paris_bundle`], [`tokyo_bundle`])
//! - [`TestHarness`]: drives a [`Store`] and records every effect the reducer
//!   asks for, so tests can check "exactly one request" style properties
//! - [`assert_effect!`](crate::assert_effect) / [`count_effects!`](crate::count_effects)
//!
//! # Example
//!
//! ```
//! use skyplan_core::testing::TestHarness;
//! use skyplan_core::{Action, Effect};
//!
//! let mut harness = TestHarness::new();
//! harness.dispatch(Action::CitySubmit(" Paris ".into()));
//!
//! let effects = harness.drain_effects();
//! assert_eq!(effects, vec![Effect::FetchBundle { city: "Paris".into() }]);
//! ```

use crate::action::Action;
use crate::effect::Effect;
use crate::model::{ActivityRecommendation, Bundle, WeatherSnapshot};
use crate::state::AppState;
use crate::store::Store;

/// Paris, 18°C and cloudy.
pub fn sample_weather() -> WeatherSnapshot {
    WeatherSnapshot {
        city: "Paris".into(),
        temperature: 18.0,
        condition: "Cloudy".into(),
        humidity: 72.0,
        wind_speed: 14.0,
        visibility: 10.0,
        description: "Mild and comfortable weather for various activities".into(),
    }
}

pub fn activity(name: &str, category: &str, rating: f64) -> ActivityRecommendation {
    ActivityRecommendation {
        name: name.into(),
        description: format!("{name} around town"),
        category: category.into(),
        rating,
        duration: "2-3 hours".into(),
        best_time: "Afternoon".into(),
    }
}

/// Paris weather with three activities.
pub fn paris_bundle() -> Bundle {
    Bundle {
        weather: sample_weather(),
        activities: vec![
            activity("Louvre Visit", "Culture", 4.8),
            activity("Café Hopping", "Food & Drink", 4.4),
            activity("Seine Sketching", "Creative", 4.5),
        ],
    }
}

/// Tokyo, sunny, one activity in an unlisted category.
pub fn tokyo_bundle() -> Bundle {
    Bundle {
        weather: WeatherSnapshot {
            city: "Tokyo".into(),
            temperature: 26.5,
            condition: "Sunny".into(),
            humidity: 55.0,
            wind_speed: 9.0,
            visibility: 12.0,
            description: "Pleasant weather perfect for outdoor activities".into(),
        },
        activities: vec![activity("Garden Stroll", "Outdoor", 4.2)],
    }
}

/// Store wrapper that records effects instead of running them.
pub struct TestHarness {
    store: Store,
    effects: Vec<Effect>,
    renders: usize,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            store: Store::new(state),
            effects: Vec::new(),
            renders: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Dispatch one action; returns whether state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        if result.changed {
            self.renders += 1;
        }
        self.effects.extend(result.effects);
        result.changed
    }

    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            self.dispatch(action);
        }
    }

    /// Take every effect recorded so far.
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Number of dispatches that changed state.
    pub fn render_count(&self) -> usize {
        self.renders
    }
}

/// Assert that an effect matching a pattern was recorded.
///
/// ```ignore
/// let effects = harness.drain_effects();
/// assert_effect!(effects, Effect::FetchBundle { city } if city == "Paris");
/// ```
#[macro_export]
macro_rules! assert_effect {
    ($effects:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $effects.iter().any(|e| matches!(e, $pattern $(if $guard)?)),
            "Expected effect matching `{}`, but got: {:?}",
            stringify!($pattern),
            $effects
        );
    };
}

/// Count recorded effects matching a pattern.
#[macro_export]
macro_rules! count_effects {
    ($effects:expr, $pattern:pat $(if $guard:expr)?) => {
        $effects.iter().filter(|e| matches!(e, $pattern $(if $guard)?)).count()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    #[test]
    fn test_harness_records_effects() {
        let mut harness = TestHarness::new();

        harness.dispatch(Action::CitySubmit("Paris".into()));
        harness.dispatch(Action::CitySubmit("Paris".into()));

        let effects = harness.drain_effects();
        assert_eq!(count_effects!(effects, Effect::FetchBundle { .. }), 1);
        assert_effect!(effects, Effect::FetchBundle { city } if city == "Paris");
        assert!(harness.drain_effects().is_empty());
    }

    #[test]
    fn test_render_count_tracks_changes() {
        let mut harness = TestHarness::new();

        harness.dispatch_all([
            Action::CitySubmit("  ".into()),
            Action::CitySubmit("Paris".into()),
            Action::BundleDidError(FetchError::request_failed("boom")),
        ]);

        assert_eq!(harness.render_count(), 2);
    }

    #[test]
    fn test_fixtures_are_consistent() {
        assert_eq!(paris_bundle().weather, sample_weather());
        assert_eq!(paris_bundle().activities.len(), 3);
    }
}
