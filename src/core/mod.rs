//! Core history engine.
//!
//! This module contains the pure part of the store:
//! - State bounds via the `State` trait
//! - Named transitions and the table they live in
//! - Commands (apply, undo, redo) and per-call options
//! - The forkable history that commands are reduced against
//!
//! Nothing here performs I/O or logging, following the
//! "pure core, imperative shell" split.

mod command;
mod history;
mod state;
mod transition;

pub use command::{CallOptions, Command};
pub use history::{Change, Frame, History};
pub use state::State;
pub use transition::{BoxError, Transition, TransitionError, TransitionFn, Transitions};
