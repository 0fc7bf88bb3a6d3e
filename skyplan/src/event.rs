//! Terminal event polling
//!
//! A background task polls crossterm and forwards raw events over a channel;
//! the runtime turns them into [`EventKind`] values for the components.

use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind, MouseEventKind};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Raw event from crossterm before processing
#[derive(Debug)]
pub enum RawEvent {
    Key(KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
}

/// Event payload handed to components
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Key(KeyEvent),
    /// Mouse wheel; positive delta scrolls down
    Scroll { column: u16, row: u16, delta: isize },
    Resize(u16, u16),
}

/// Poll timing for [`spawn_event_poller`]
#[derive(Debug, Clone, Copy)]
pub struct PollerConfig {
    /// Timeout passed to each `crossterm::event::poll` call
    pub poll_timeout: Duration,
    /// Sleep between poll cycles
    pub loop_sleep: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(10),
            loop_sleep: Duration::from_millis(16),
        }
    }
}

/// Spawn the event polling task
///
/// Runs until `cancel_token` is cancelled or the receiver is dropped.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    config: PollerConfig,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        const MAX_EVENTS_PER_BATCH: usize = 20;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!("Event poller cancelled, draining buffer");
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(config.loop_sleep) => {
                    let mut events_processed = 0;
                    while events_processed < MAX_EVENTS_PER_BATCH
                        && event::poll(config.poll_timeout).unwrap_or(false)
                    {
                        events_processed += 1;
                        let raw = match event::read() {
                            Ok(event::Event::Key(key)) => RawEvent::Key(key),
                            Ok(event::Event::Mouse(mouse)) => RawEvent::Mouse(mouse),
                            Ok(event::Event::Resize(w, h)) => RawEvent::Resize(w, h),
                            _ => continue,
                        };
                        if tx.send(raw).is_err() {
                            debug!("Event channel closed, stopping poller");
                            return;
                        }
                    }
                }
            }
        }
    })
}

/// Turn a raw event into an [`EventKind`]
///
/// Key releases and mouse events other than the wheel are dropped.
pub fn process_raw_event(raw: RawEvent) -> Option<EventKind> {
    match raw {
        RawEvent::Key(key) if key.kind == KeyEventKind::Release => None,
        RawEvent::Key(key) => Some(EventKind::Key(key)),
        RawEvent::Mouse(mouse) => {
            let delta = match mouse.kind {
                MouseEventKind::ScrollDown => 1,
                MouseEventKind::ScrollUp => -1,
                _ => return None,
            };
            Some(EventKind::Scroll {
                column: mouse.column,
                row: mouse.row,
                delta,
            })
        }
        RawEvent::Resize(w, h) => Some(EventKind::Resize(w, h)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers, MouseEvent};

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 10,
            row: 20,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_process_raw_event_key() {
        let key_event = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        };

        let kind = process_raw_event(RawEvent::Key(key_event));
        assert_eq!(kind, Some(EventKind::Key(key_event)));
    }

    #[test]
    fn test_key_release_is_dropped() {
        let key_event = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };

        assert_eq!(process_raw_event(RawEvent::Key(key_event)), None);
    }

    #[test]
    fn test_process_raw_event_scroll() {
        let kind = process_raw_event(RawEvent::Mouse(mouse(MouseEventKind::ScrollDown)));
        assert_eq!(
            kind,
            Some(EventKind::Scroll {
                column: 10,
                row: 20,
                delta: 1
            })
        );

        let kind = process_raw_event(RawEvent::Mouse(mouse(MouseEventKind::ScrollUp)));
        assert!(matches!(kind, Some(EventKind::Scroll { delta: -1, .. })));
    }

    #[test]
    fn test_mouse_move_is_dropped() {
        assert_eq!(
            process_raw_event(RawEvent::Mouse(mouse(MouseEventKind::Moved))),
            None
        );
    }

    #[test]
    fn test_process_raw_event_resize() {
        assert_eq!(
            process_raw_event(RawEvent::Resize(80, 24)),
            Some(EventKind::Resize(80, 24))
        );
    }
}
