//! Mutable state for the demo host.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tick_slider::SliderState;

/// How long the status-bar tick flash stays visible.
const FLASH_DURATION: Duration = Duration::from_millis(300);

pub struct AppState {
    /// The bound value — the demo plays both roles: host-external writer
    /// (arrow keys) and observer of the widget's settle writes.
    pub value: f64,
    pub slider: SliderState,
    /// Area the slider occupied last frame, for mouse hit-testing.
    pub slider_area: Rect,
    /// Whether a grab is currently held on the slider surface.
    pub dragging: bool,
    /// When the last tick notification fired.
    pub last_tick: Option<Instant>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(value: f64, slider: SliderState) -> Self {
        Self {
            value,
            slider,
            slider_area: Rect::default(),
            dragging: false,
            last_tick: None,
            should_quit: false,
        }
    }

    /// True while the settle flash should still show.
    pub fn tick_flash(&self) -> bool {
        self.last_tick
            .is_some_and(|at| at.elapsed() < FLASH_DURATION)
    }
}
