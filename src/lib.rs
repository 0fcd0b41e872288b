//! A horizontally-scrolling, snap-to-tick slider widget for Ratatui.
//!
//! The widget shows a strip of ticks sliding under a fixed centre anchor.
//! A continuous bound value stays synchronized with the discrete tick
//! positions in both directions: external writes command an animated
//! programmatic scroll, and user-driven drags settle on the nearest tick
//! and write the derived value back — guarded so neither path re-triggers
//! the other.
//!
//! ```rust,ignore
//! let config = SliderConfig::new(0.0, 10.0, 0.5)?;
//! let mut slider = SliderState::new(config, 1, 5, 2.0)?
//!     .on_edit(|v| println!("edited: {v}"));
//!
//! // Each frame:
//! slider.sync(value);
//! frame.render_stateful_widget(Slider::new(), area, &mut slider);
//!
//! // On mouse events over the widget:
//! slider.grab(column);          // button down
//! slider.drag_to(column);       // drag
//! slider.release(&mut value);   // button up → snap + write-back
//! ```

pub mod core;
pub mod ui;

pub use crate::core::convert::{ConfigError, SliderConfig};
pub use crate::core::snap::{index_from_offset, nearest_pitch_multiple, offset_from_index};
pub use crate::core::sync::{Settle, SyncPhase, ValueSync};
pub use crate::ui::render::{DefaultTickRender, TickContext, TickRender};
pub use crate::ui::slider::{EdgeMask, Slider, SliderState};
