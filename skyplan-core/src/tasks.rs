//! Task manager for async effects
//!
//! Each task is a future that resolves to exactly one [`Action`], which is
//! sent back to the main loop. Tasks are registered under a key so the
//! runtime can cancel them on shutdown; a cancelled task sends nothing.

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use crate::action::Action;

/// Key for the in-flight bundle request
pub const BUNDLE_TASK: &str = "bundle";
/// Key for startup theme resolution
pub const THEME_TASK: &str = "theme";

pub struct TaskManager {
    tasks: HashMap<&'static str, AbortHandle>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            tasks: HashMap::new(),
            action_tx,
        }
    }

    /// Spawn `future`, cancelling any task already running under `key`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(&mut self, key: &'static str, future: F) -> &mut Self
    where
        F: Future<Output = Action> + Send + 'static,
    {
        self.cancel(key);

        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let action = future.await;
            // receiver gone means the app is shutting down
            let _ = tx.send(action);
        });

        self.tasks.insert(key, handle.abort_handle());
        self
    }

    pub fn cancel(&mut self, key: &str) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        for (key, handle) in self.tasks.drain() {
            if !handle.is_finished() {
                tracing::debug!(task = key, "Cancelling task");
            }
            handle.abort();
        }
    }

    pub fn is_running(&self, key: &str) -> bool {
        self.tasks
            .get(key)
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    pub fn running_keys(&self) -> Vec<&'static str> {
        self.tasks
            .iter()
            .filter(|(_, handle)| !handle.is_finished())
            .map(|(key, _)| *key)
            .collect()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
