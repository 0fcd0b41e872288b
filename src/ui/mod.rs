//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* numeric state and turns it into columns on
//! the terminal.  No event handling happens here.

pub mod render;
pub mod scroll;
pub mod slider;
pub mod theme;
