//! Superstate: a versioned state container with selective undo/redo
//!
//! Superstate follows a "pure core, imperative shell" split. The core history
//! engine is a deterministic function of `(history, command)`, while the
//! store facade owns the mutable history, hands out callable actions and
//! notifies subscribers.
//!
//! # Core Concepts
//!
//! - **Transitions**: pure, named functions `(state, payload) -> state`
//! - **History**: a forkable sequence of snapshots with a current pointer
//! - **Undoability per call**: any action may be recorded as an undoable step
//!   or folded into the current one
//! - **Projection**: the visible view: state, actions and (optionally)
//!   undo/redo controls
//!
//! # Example
//!
//! ```rust
//! use superstate::{CallOptions, StoreBuilder};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Form {
//!     count: u32,
//!     value: String,
//! }
//!
//! let definition = StoreBuilder::<Form, String>::new()
//!     .initial(Form::default())
//!     .transition("setValue", |form: &Form, value: Option<&String>| Form {
//!         value: value.cloned().unwrap_or_default(),
//!         ..form.clone()
//!     })
//!     .transition("incrementCount", |form: &Form, _: Option<&String>| Form {
//!         count: form.count + 1,
//!         ..form.clone()
//!     })
//!     .expose_history_controls(true)
//!     .build()
//!     .unwrap();
//!
//! let store = definition.create();
//! let actions = store.actions();
//!
//! actions.call("setValue", Some("a".into()), CallOptions::undoable()).unwrap();
//! actions.call("incrementCount", None, CallOptions::in_place()).unwrap();
//! actions.call("setValue", Some("ab".into()), CallOptions::undoable()).unwrap();
//!
//! store.undo().unwrap();
//! let form = store.state();
//! assert_eq!(form.value, "a");
//! assert_eq!(form.count, 1);
//! ```

pub mod builder;
pub mod core;
pub mod store;

// Re-export commonly used types
pub use builder::{create_store, BuildError, StoreBuilder, StoreDefinition};
pub use crate::core::{CallOptions, Command, History, State, Transition, TransitionError};
pub use store::{Action, Actions, Projection, Store, StoreError, StoreOptions};
