//! Clock engine.
//!
//! - `timer`: the state machine, its timers and keyboard dispatch
//! - `scheduler`: the timer capability the engine runs on

pub mod scheduler;
pub mod timer;

pub use scheduler::{CancelToken, Fired, ManualScheduler, Scheduler, TimerKind, TokioScheduler};
pub use timer::{Dispatch, TimerEngine};
