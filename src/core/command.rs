//! Commands submitted to the history engine.

use super::transition::Transition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-call configuration for an action.
///
/// Undoability is decided per dispatch, not per transition: the same
/// transition may be applied once as an undoable step and once in place.
/// Deserialization rejects unknown fields.
///
/// # Example
///
/// ```rust
/// use superstate::core::CallOptions;
///
/// assert!(!CallOptions::default().undoable);
/// assert!(CallOptions::undoable().undoable);
///
/// let parsed: CallOptions = serde_json::from_str(r#"{ "undoable": true }"#).unwrap();
/// assert_eq!(parsed, CallOptions::undoable());
/// assert!(serde_json::from_str::<CallOptions>(r#"{ "undo": true }"#).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CallOptions {
    /// Record the result as a new history frame
    pub undoable: bool,
}

impl CallOptions {
    /// Options for a step that can be undone.
    pub fn undoable() -> Self {
        Self { undoable: true }
    }

    /// Options for a step folded into the current frame.
    pub fn in_place() -> Self {
        Self { undoable: false }
    }
}

/// One unit of work for the history engine.
///
/// Undo and redo are explicit variants, so the engine never has to compare
/// transitions to tell them apart.
pub enum Command<S, P = ()> {
    /// Step the pointer back one frame
    Undo,

    /// Step the pointer forward one frame
    Redo,

    /// Apply a named transition to the current frame
    Apply {
        transition: Transition<S, P>,
        payload: Option<P>,
        options: CallOptions,
    },
}

impl<S, P> Command<S, P> {
    /// Build an apply command.
    pub fn apply(transition: Transition<S, P>, payload: Option<P>, options: CallOptions) -> Self {
        Self::Apply {
            transition,
            payload,
            options,
        }
    }

    /// Label used in logs and frame metadata.
    pub fn label(&self) -> &str {
        match self {
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::Apply { transition, .. } => transition.name(),
        }
    }

    /// True for undo and redo.
    pub fn is_history_control(&self) -> bool {
        matches!(self, Self::Undo | Self::Redo)
    }
}

impl<S, P> fmt::Debug for Command<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undo => f.write_str("Undo"),
            Self::Redo => f.write_str("Redo"),
            Self::Apply {
                transition,
                payload,
                options,
            } => f
                .debug_struct("Apply")
                .field("transition", &transition.name())
                .field("has_payload", &payload.is_some())
                .field("undoable", &options.undoable)
                .finish(),
        }
    }
}
