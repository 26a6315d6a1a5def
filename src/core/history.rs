//! Forkable undo/redo history.
//!
//! The history is a non-empty sequence of state snapshots plus a pointer to
//! the current one. It is the only place where branching, undo and redo are
//! decided:
//!
//! - undo and redo move the pointer and saturate at the boundaries
//! - an undoable command drops every frame after the pointer and appends
//! - an in-place command replaces the current frame's state

use super::command::Command;
use super::state::State;
use super::transition::TransitionError;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One snapshot in a [`History`].
#[derive(Clone, Debug, Serialize)]
pub struct Frame<S> {
    state: S,
    action: Option<String>,
    recorded_at: DateTime<Utc>,
}

impl<S> Frame<S> {
    fn new(state: S, action: Option<String>) -> Self {
        Self {
            state,
            action,
            recorded_at: Utc::now(),
        }
    }

    /// The snapshot value.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Name of the undoable action that created this frame.
    ///
    /// `None` for the initial frame.
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// When this frame was created.
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

/// What a command did to a history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Change {
    /// Undo or redo at a boundary
    Unchanged,

    /// The pointer moved
    Moved { from: usize, to: usize },

    /// A frame was appended after dropping `discarded` redo frames
    Appended { discarded: usize },

    /// The current frame's state was replaced
    Replaced,
}

impl Change {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

/// Linear-but-forkable history of states.
///
/// Invariants:
/// - there is always at least one frame
/// - `pointer < len()`
/// - frame 0 holds the initial state and is never removed
///
/// # Example
///
/// ```rust
/// use superstate::core::{CallOptions, Command, History, Transition};
///
/// let append: Transition<String, char> = Transition::new("append", |s: &String, c: Option<&char>| {
///     let mut next = s.clone();
///     next.extend(c);
///     next
/// });
///
/// let mut history = History::new(String::new());
/// history.apply(&Command::apply(append.clone(), Some('a'), CallOptions::undoable())).unwrap();
/// history.apply(&Command::apply(append.clone(), Some('b'), CallOptions::undoable())).unwrap();
/// history.apply(&Command::<String, char>::Undo).unwrap();
/// history.apply(&Command::apply(append, Some('z'), CallOptions::undoable())).unwrap();
///
/// assert_eq!(history.states(), vec!["", "a", "az"]);
/// assert!(!history.can_redo());
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct History<S> {
    frames: Vec<Frame<S>>,
    pointer: usize,
    revision: u64,
}

impl<S: State> History<S> {
    /// Create a history holding only the initial state.
    pub fn new(initial: S) -> Self {
        Self {
            frames: vec![Frame::new(initial, None)],
            pointer: 0,
            revision: 0,
        }
    }

    /// Apply a command in place.
    ///
    /// The transition is evaluated before anything is written, so on error
    /// the history is exactly as it was.
    pub fn apply<P>(&mut self, command: &Command<S, P>) -> Result<Change, TransitionError> {
        let change = match command {
            Command::Undo => {
                if !self.can_undo() {
                    return Ok(Change::Unchanged);
                }
                let from = self.pointer;
                self.pointer -= 1;
                Change::Moved {
                    from,
                    to: self.pointer,
                }
            }
            Command::Redo => {
                if !self.can_redo() {
                    return Ok(Change::Unchanged);
                }
                let from = self.pointer;
                self.pointer += 1;
                Change::Moved {
                    from,
                    to: self.pointer,
                }
            }
            Command::Apply {
                transition,
                payload,
                options,
            } => {
                let next = transition.apply(self.current(), payload.as_ref())?;

                if options.undoable {
                    let discarded = self.frames.len() - self.pointer - 1;
                    self.frames.truncate(self.pointer + 1);
                    self.frames
                        .push(Frame::new(next, Some(transition.name().to_string())));
                    self.pointer = self.frames.len() - 1;
                    Change::Appended { discarded }
                } else {
                    self.frames[self.pointer].state = next;
                    Change::Replaced
                }
            }
        };

        self.revision += 1;
        Ok(change)
    }

    /// Apply a command, returning a new history.
    ///
    /// This is a pure function - the receiver is not modified.
    pub fn reduce<P>(&self, command: &Command<S, P>) -> Result<Self, TransitionError> {
        let mut next = self.clone();
        next.apply(command)?;
        Ok(next)
    }

    /// The state at the pointer.
    pub fn current(&self) -> &S {
        &self.frames[self.pointer].state
    }

    /// The state the history was created with.
    pub fn initial(&self) -> &S {
        &self.frames[0].state
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Number of frames, including the initial one.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false: a history holds at least its initial frame.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    pub fn can_redo(&self) -> bool {
        self.pointer + 1 < self.frames.len()
    }

    /// Count of effective changes applied so far.
    ///
    /// Boundary no-ops and failed transitions leave it untouched.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// States in order, oldest first.
    pub fn states(&self) -> Vec<&S> {
        self.frames.iter().map(Frame::state).collect()
    }

    pub fn frames(&self) -> &[Frame<S>] {
        &self.frames
    }
}
