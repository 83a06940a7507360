//! Release cycle orchestration and watch-mode plumbing

pub mod orchestration;
pub mod watch;

pub use orchestration::{CycleError, CycleOutcome, Orchestrator, Release, Stage};
pub use watch::{subscribe, Subscription};
