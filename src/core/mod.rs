//! Core algorithms – value/index conversion, scroll snapping, and the
//! bidirectional sync state machine.
//!
//! Nothing in this module depends on any TUI or rendering crate.
//! Every type is `Send + Sync` so it can be shared across async tasks.

pub mod convert;
pub mod snap;
pub mod sync;
