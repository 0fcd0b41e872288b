//! Demo-application orchestration — state, event loop plumbing, and input
//! handling for the interactive host.

pub mod event;
pub mod handler;
pub mod state;
