//! State container with middleware hooks around the reducer

use crate::action::Action;
use crate::effect::DispatchResult;
use crate::reducer::reducer;
use crate::state::AppState;

/// Hook called around every dispatch
///
/// Middleware sees actions and the change flag, never effects or state.
pub trait Middleware {
    /// Called before the action reaches the reducer
    fn before(&mut self, action: &Action);

    /// Called after the reducer ran
    fn after(&mut self, action: &Action, state_changed: bool);
}

/// Middleware that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl Middleware for NoopMiddleware {
    fn before(&mut self, _action: &Action) {}
    fn after(&mut self, _action: &Action, _state_changed: bool) {}
}

/// Middleware that writes each action to the `tracing` log
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    pub log_before: bool,
    pub log_after: bool,
    /// Skip `Tick`, which fires several times per second
    pub skip_ticks: bool,
}

impl LoggingMiddleware {
    /// Log after dispatch only, ticks skipped.
    pub fn new() -> Self {
        Self {
            log_before: false,
            log_after: true,
            skip_ticks: true,
        }
    }

    /// Log before and after, including ticks.
    pub fn verbose() -> Self {
        Self {
            log_before: true,
            log_after: true,
            skip_ticks: false,
        }
    }

    fn skips(&self, action: &Action) -> bool {
        self.skip_ticks && matches!(action, Action::Tick)
    }
}

impl Middleware for LoggingMiddleware {
    fn before(&mut self, action: &Action) {
        if self.log_before && !self.skips(action) {
            tracing::debug!(action = %action.name(), "Dispatching action");
        }
    }

    fn after(&mut self, action: &Action, state_changed: bool) {
        if self.log_after && !self.skips(action) {
            tracing::debug!(
                action = %action.summary(),
                category = action.category().unwrap_or("global"),
                state_changed,
                "Action processed"
            );
        }
    }
}

/// Holds [`AppState`] and routes actions through middleware and the reducer
pub struct Store<M: Middleware = NoopMiddleware> {
    state: AppState,
    middleware: M,
}

impl Store<NoopMiddleware> {
    pub fn new(state: AppState) -> Self {
        Self::with_middleware(state, NoopMiddleware)
    }
}

impl<M: Middleware> Store<M> {
    pub fn with_middleware(state: AppState, middleware: M) -> Self {
        Self { state, middleware }
    }

    #[inline]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Direct access, for initialization only. Prefer dispatching.
    #[inline]
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    /// Run `before`, the reducer, then `after`.
    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        self.middleware.before(&action);
        let result = reducer(&mut self.state, action.clone());
        self.middleware.after(&action, result.changed);
        result
    }
}
