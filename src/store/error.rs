//! Store error types.

use crate::core::TransitionError;
use thiserror::Error;

/// Errors returned by store operations, actions and history controls.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No transition with this name was defined for the store
    #[error("Unknown action '{name}'")]
    UnknownAction { name: String },

    /// A command carried a transition with a known name but a function the
    /// store was not defined with
    #[error("Transition '{name}' does not belong to this store")]
    ForeignTransition { name: String },

    /// The transition function failed; the history is unchanged
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// Undo/redo were invoked on a store built without history controls
    #[error("History controls are disabled for this store; '{operation}' is unavailable")]
    HistoryControlsDisabled { operation: &'static str },

    /// The action outlived the store it was bound to
    #[error("Action '{action}' was invoked after its store was dropped")]
    Unmounted { action: String },
}

/// Errors that can occur while loading store configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid store options: {0}")]
    Parse(#[from] serde_json::Error),
}
