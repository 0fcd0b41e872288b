//! Terminal event abstraction.
//!
//! Wraps crossterm events into a simpler enum and runs a background task
//! that forwards them over a channel so the main loop stays non-blocking.
//! The task runs on a fixed frame cadence: each frame it drains whatever
//! input is queued, and only emits a `Frame` pulse when the frame was
//! otherwise idle — input already forces a redraw, so an extra pulse would
//! just be noise.  Missed frames are skipped, not bursted, so a stalled
//! consumer never faces a backlog of stale pulses.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// High-level events consumed by the demo host.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Frame pulse — no input arrived this frame.  This cadence is what
    /// advances the scroll animation while the user is idle.
    Frame,
}

/// Spawns a background task that forwards terminal input over the returned
/// channel, interleaved with `Frame` pulses at `frame_interval`.
pub fn spawn_event_reader(frame_interval: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let mut frames = tokio::time::interval(frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            frames.tick().await;

            // Drain everything that arrived during this frame.  The zero
            // timeout makes poll a pure readiness check, so `read` below
            // never blocks the runtime.
            let mut saw_input = false;
            while event::poll(Duration::ZERO).unwrap_or(false) {
                let Ok(ev) = event::read() else {
                    continue;
                };
                let app_event = match ev {
                    CtEvent::Key(k) => AppEvent::Key(k),
                    CtEvent::Mouse(m) => AppEvent::Mouse(m),
                    CtEvent::Resize(w, h) => AppEvent::Resize(w, h),
                    _ => continue,
                };
                saw_input = true;
                if tx.send(app_event).is_err() {
                    return; // receiver dropped
                }
            }

            if !saw_input && tx.send(AppEvent::Frame).is_err() {
                return;
            }
        }
    });

    rx
}
