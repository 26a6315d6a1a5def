//! Store facade around the history engine.
//!
//! This module is the "imperative shell": it owns a [`History`](crate::core::History)
//! behind a mutex, turns named transitions into callable [`Action`]s, and
//! publishes a [`Projection`] to subscribers after every command that
//! changes the history.
//!
//! # Key Concepts
//!
//! - **Store**: cloneable handle over one history and one transition table
//! - **Actions**: one callable per transition, undoable or not per call
//! - **Projection**: current state plus optional undo/redo controls
//! - **Options**: `expose_history_controls` gates the undo/redo surface

mod actions;
mod error;
mod options;
mod projection;
mod store;

pub use actions::{Action, Actions};
pub use error::{ConfigError, StoreError};
pub use options::StoreOptions;
pub use projection::{HistoryControls, Projection};
pub use store::{Listener, Store, StoreId, SubscriptionId};
