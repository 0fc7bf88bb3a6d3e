//! Effects - side effects declared by the reducer
//!
//! The reducer never performs I/O. It returns a [`DispatchResult`] listing
//! what should happen next, and the runtime carries the work out, feeding
//! results back as actions.

use crate::theme::Theme;

/// Work requested by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Request the bundle for an already-trimmed city name
    FetchBundle { city: String },

    /// Resolve the startup theme (`preferred` overrides the saved one)
    ResolveTheme { preferred: Option<Theme> },

    /// Hand the theme to the persistence facility
    PersistTheme(Theme),
}

/// Outcome of one dispatch: whether to re-render, plus effects to run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DispatchResult {
    pub changed: bool,
    pub effects: Vec<Effect>,
}

impl DispatchResult {
    /// No state change, no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// Effect only, nothing to re-render.
    #[inline]
    pub fn effect(effect: Effect) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    /// State changed and one effect to run.
    #[inline]
    pub fn changed_with(effect: Effect) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// Changed or not, from a plain flag.
    #[inline]
    pub fn from_changed(changed: bool) -> Self {
        Self {
            changed,
            effects: vec![],
        }
    }

    #[inline]
    pub fn with(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}
