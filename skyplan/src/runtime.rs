//! Main loop
//!
//! [`App`] owns the store, the action channel and the task manager. Each
//! iteration renders if state changed, then waits on whichever comes first:
//! a terminal event, an action (from the UI or a finished task), or the
//! animation tick. Effects returned by the reducer are executed here.

use std::io;
use std::time::Duration;

use ratatui::{backend::Backend, Terminal};
use skyplan_core::tasks::{BUNDLE_TASK, THEME_TASK};
use skyplan_core::{
    resolve_startup_theme, Action, AppState, BundleClient, Effect, LoggingMiddleware, Store,
    TaskManager, Theme, ThemeFile, LOADING_ANIM_TICK_MS,
};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::component::Component;
use crate::components::{WeatherView, WeatherViewProps};
use crate::event::{process_raw_event, spawn_event_poller, EventKind, PollerConfig, RawEvent};

pub struct App {
    store: Store<LoggingMiddleware>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    tasks: TaskManager,
    client: BundleClient,
    /// None when no config directory is available; the theme is then not saved
    theme_file: Option<ThemeFile>,
    view: WeatherView,
    poller_config: PollerConfig,
    should_render: bool,
}

impl App {
    pub fn new(client: BundleClient, theme_file: Option<ThemeFile>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            store: Store::with_middleware(AppState::default(), LoggingMiddleware::new()),
            tasks: TaskManager::new(action_tx.clone()),
            action_tx,
            action_rx,
            client,
            theme_file,
            view: WeatherView::new(),
            poller_config: PollerConfig::default(),
            should_render: true,
        }
    }

    pub fn with_poller_config(mut self, config: PollerConfig) -> Self {
        self.poller_config = config;
        self
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Queue an action for the loop
    pub fn enqueue(&self, action: Action) {
        // the receiver lives as long as self
        let _ = self.action_tx.send(action);
    }

    /// Begin theme resolution. `preferred` comes from the command line.
    pub fn start(&mut self, preferred: Option<Theme>) {
        self.handle_effect(Effect::ResolveTheme { preferred });
    }

    /// Dispatch through the store and run the resulting effects.
    /// Returns whether state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.handle_effect(effect);
        }
        result.changed
    }

    /// Map a terminal event through the view and dispatch the resulting
    /// actions before the next event is mapped, so each key sees the input
    /// left by the one before it. `Quit` is queued for the loop to act on.
    /// Returns whether state changed.
    pub fn handle_event(&mut self, event: &EventKind) -> bool {
        let props = WeatherViewProps {
            state: self.store.state(),
        };
        let actions: Vec<Action> = self.view.handle_event(event, props).into_iter().collect();
        let mut changed = false;
        for action in actions {
            if matches!(action, Action::Quit) {
                self.enqueue(action);
            } else {
                changed |= self.dispatch(action);
            }
        }
        changed
    }

    fn handle_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FetchBundle { city } => {
                let client = self.client.clone();
                self.tasks.spawn(BUNDLE_TASK, async move {
                    match client.fetch_bundle(&city).await {
                        Ok(bundle) => Action::BundleDidLoad(bundle),
                        Err(err) => Action::BundleDidError(err),
                    }
                });
            }
            Effect::ResolveTheme { preferred } => {
                let theme_file = self.theme_file.clone();
                self.tasks.spawn(THEME_TASK, async move {
                    let saved = theme_file.and_then(|file| match file.load() {
                        Ok(saved) => saved,
                        Err(err) => {
                            warn!(path = %file.path().display(), error = %err, "Ignoring saved theme");
                            None
                        }
                    });
                    Action::ThemeDidResolve(resolve_startup_theme(preferred, saved))
                });
            }
            Effect::PersistTheme(theme) => {
                let Some(file) = self.theme_file.as_ref() else {
                    return;
                };
                match file.save(theme) {
                    Ok(()) => debug!(%theme, "Saved theme"),
                    Err(err) => {
                        warn!(path = %file.path().display(), error = %err, "Could not save theme")
                    }
                }
            }
        }
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let state = self.store.state();
        let view = &mut self.view;
        terminal.draw(|frame| {
            let area = frame.area();
            view.render(frame, area, WeatherViewProps { state });
        })?;
        Ok(())
    }

    /// Run until `Quit`. Outstanding tasks are cancelled on the way out, so a
    /// late response is dropped.
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
        let cancel_token = CancellationToken::new();
        let _poller = spawn_event_poller(event_tx, self.poller_config, cancel_token.clone());

        let mut tick = tokio::time::interval(Duration::from_millis(LOADING_ANIM_TICK_MS));
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(api = %self.client.base_url(), "Starting");

        loop {
            if self.should_render {
                self.draw(terminal)?;
                self.should_render = false;
            }

            tokio::select! {
                Some(raw) = event_rx.recv() => {
                    if let Some(event) = process_raw_event(raw) {
                        if matches!(event, EventKind::Resize(..)) {
                            self.should_render = true;
                        }
                        if self.handle_event(&event) {
                            self.should_render = true;
                        }
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if matches!(action, Action::Quit) {
                        info!("Quit requested");
                        break;
                    }
                    if self.dispatch(action) {
                        self.should_render = true;
                    }
                }

                _ = tick.tick() => {
                    if self.dispatch(Action::Tick) {
                        self.should_render = true;
                    }
                }
            }
        }

        self.tasks.cancel_all();
        cancel_token.cancel();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::buffer_to_string_plain;
    use ratatui::backend::TestBackend;
    use skyplan_core::testing::paris_bundle;
    use skyplan_core::{FetchError, Notice};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn offline_client() -> BundleClient {
        BundleClient::new("http://127.0.0.1:9").unwrap()
    }

    async fn next_action(app: &mut App) -> Action {
        app.action_rx.recv().await.unwrap()
    }

    #[tokio::test]
    async fn test_submit_runs_fetch_and_applies_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/weather"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::to_value(paris_bundle()).unwrap()),
            )
            .expect(1)
            .mount(&server)
            .await;
        let mut app = App::new(BundleClient::new(&server.uri()).unwrap(), None);

        assert!(app.dispatch(Action::CitySubmit(" Paris ".into())));
        assert!(app.state().is_loading);

        let action = next_action(&mut app).await;
        assert!(matches!(action, Action::BundleDidLoad(_)));
        app.dispatch(action);

        assert!(!app.state().is_loading);
        assert_eq!(app.state().bundle, Some(paris_bundle()));
    }

    #[tokio::test]
    async fn test_not_found_raises_notice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        let mut app = App::new(BundleClient::new(&server.uri()).unwrap(), None);

        app.dispatch(Action::CitySubmit("Nowhereville".into()));
        let action = next_action(&mut app).await;
        assert_eq!(
            action,
            Action::BundleDidError(FetchError::NotFound {
                city: "Nowhereville".into()
            })
        );
        app.dispatch(action);

        assert_eq!(app.state().notice, Some(Notice::CityNotFound));
        assert_eq!(app.state().bundle, None);
    }

    #[tokio::test]
    async fn test_saved_theme_is_used_at_startup() {
        let dir = tempfile::tempdir().unwrap();
        let file = ThemeFile::new(dir.path().join("theme.json"));
        file.save(Theme::Light).unwrap();
        let mut app = App::new(offline_client(), Some(file));

        app.start(None);

        assert_eq!(
            next_action(&mut app).await,
            Action::ThemeDidResolve(Theme::Light)
        );
    }

    #[tokio::test]
    async fn test_command_line_theme_beats_saved() {
        let dir = tempfile::tempdir().unwrap();
        let file = ThemeFile::new(dir.path().join("theme.json"));
        file.save(Theme::Light).unwrap();
        let mut app = App::new(offline_client(), Some(file));

        app.start(Some(Theme::Dark));

        assert_eq!(
            next_action(&mut app).await,
            Action::ThemeDidResolve(Theme::Dark)
        );
    }

    #[tokio::test]
    async fn test_unreadable_theme_falls_back_to_dark() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "not json").unwrap();
        let mut app = App::new(offline_client(), Some(ThemeFile::new(path)));

        app.start(None);

        assert_eq!(
            next_action(&mut app).await,
            Action::ThemeDidResolve(Theme::Dark)
        );
    }

    #[tokio::test]
    async fn test_toggle_saves_theme() {
        let dir = tempfile::tempdir().unwrap();
        let file = ThemeFile::new(dir.path().join("theme.json"));
        let mut app = App::new(offline_client(), Some(file.clone()));

        app.dispatch(Action::ThemeDidResolve(Theme::Dark));
        app.dispatch(Action::ThemeToggle);

        assert_eq!(file.load().unwrap(), Some(Theme::Light));
    }

    #[tokio::test]
    async fn test_events_are_dispatched_in_order() {
        let mut app = App::new(offline_client(), None);
        app.dispatch(Action::ThemeDidResolve(Theme::Dark));

        assert!(app.handle_event(&EventKind::Key(crate::testing::char_key('R'))));

        assert_eq!(app.state().city_input, "R");
    }

    #[tokio::test]
    async fn test_fast_typing_submits_every_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/weather"))
            .and(body_json(serde_json::json!({ "city": "ab" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::to_value(paris_bundle()).unwrap()),
            )
            .expect(1)
            .mount(&server)
            .await;
        let mut app = App::new(BundleClient::new(&server.uri()).unwrap(), None);
        app.dispatch(Action::ThemeDidResolve(Theme::Dark));

        app.handle_event(&EventKind::Key(crate::testing::char_key('a')));
        app.handle_event(&EventKind::Key(crate::testing::char_key('b')));
        app.handle_event(&EventKind::Key(crate::testing::key("enter")));

        assert_eq!(app.state().city_input, "ab");
        assert!(app.state().is_loading);
        assert!(matches!(
            next_action(&mut app).await,
            Action::BundleDidLoad(_)
        ));
    }

    #[tokio::test]
    async fn test_escape_queues_quit() {
        let mut app = App::new(offline_client(), None);
        app.dispatch(Action::ThemeDidResolve(Theme::Dark));

        assert!(!app.handle_event(&EventKind::Key(crate::testing::key("esc"))));

        assert_eq!(next_action(&mut app).await, Action::Quit);
    }

    #[tokio::test]
    async fn test_run_draws_page_and_stops_on_quit() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = App::new(offline_client(), None);

        app.enqueue(Action::ThemeDidResolve(Theme::Dark));
        app.enqueue(Action::Quit);
        app.run(&mut terminal).await.unwrap();

        let output = buffer_to_string_plain(terminal.backend().buffer());
        assert!(output.contains("WeatherVibe"));
        assert!(output.contains("Discover Your Perfect Day"));
    }
}
