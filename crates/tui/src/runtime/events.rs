//! Terminal event reader.
//!
//! Responsibilities:
//! - Read crossterm events from an `EventStream` and forward them as Actions.
//! - Apply the backpressure policy per event type.
//!
//! Does NOT handle:
//! - Interpreting keys (see `App::handle_input`).
//!
//! Invariants:
//! - Key and resize events are never dropped: they use an awaited send.
//! - Mouse events use `try_send` and are dropped when the channel is full.
//! - The task exits when the channel closes, the stream ends, or `cancel` fires.

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use tokio::sync::mpsc::{Sender, error::TrySendError};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::action::Action;

/// Map a terminal event to an Action. Key releases and repeats are ignored.
pub fn event_to_action(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(Action::Input(key)),
        Event::Mouse(mouse) => Some(Action::Mouse(mouse)),
        Event::Resize(width, height) => Some(Action::Resize(width, height)),
        _ => None,
    }
}

/// Spawn the event reader on `tracker`.
pub fn spawn_input_task(tracker: &TaskTracker, tx: Sender<Action>, cancel: CancellationToken) {
    tracker.spawn(async move {
        let mut reader = EventStream::new();
        loop {
            let event = tokio::select! {
                _ = cancel.cancelled() => break,
                next = reader.next() => match next {
                    Some(Ok(event)) => event,
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "Terminal event stream failed");
                        break;
                    }
                    None => break,
                },
            };

            let droppable = matches!(event, Event::Mouse(_));
            let Some(action) = event_to_action(event) else {
                continue;
            };

            if droppable {
                match tx.try_send(action) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        tracing::debug!("Input channel full, dropping mouse event");
                    }
                    Err(TrySendError::Closed(_)) => break,
                }
            } else if tx.send(action).await.is_err() {
                break;
            }
        }
        tracing::debug!("Input task stopped");
    });
}
