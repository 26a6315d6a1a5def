//! The externally visible view of a store.

use super::actions::{Actions, Binding};
use super::error::StoreError;
use super::store::Shared;
use crate::core::{Command, State, Transitions};
use std::fmt;
use std::sync::{Arc, Weak};

/// Undo/redo surface, present only when a store exposes history controls.
pub struct HistoryControls<S, P = ()> {
    can_undo: bool,
    can_redo: bool,
    binding: Binding<S, P>,
}

impl<S: State, P: 'static> HistoryControls<S, P> {
    pub(crate) fn bound(can_undo: bool, can_redo: bool, store: Weak<Shared<S, P>>) -> Self {
        Self {
            can_undo,
            can_redo,
            binding: Binding::Store(store),
        }
    }

    pub(crate) fn inert() -> Self {
        Self {
            can_undo: false,
            can_redo: false,
            binding: Binding::Inert,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.can_undo
    }

    pub fn can_redo(&self) -> bool {
        self.can_redo
    }

    /// Step back one undoable action. A no-op at the start of history.
    pub fn undo(&self) -> Result<(), StoreError> {
        self.binding.dispatch(Command::Undo)
    }

    /// Step forward one undone action. A no-op at the end of history.
    pub fn redo(&self) -> Result<(), StoreError> {
        self.binding.dispatch(Command::Redo)
    }

    pub fn is_inert(&self) -> bool {
        self.binding.is_inert()
    }
}

impl<S, P> Clone for HistoryControls<S, P> {
    fn clone(&self) -> Self {
        Self {
            can_undo: self.can_undo,
            can_redo: self.can_redo,
            binding: self.binding.clone(),
        }
    }
}

/// Snapshot of a store taken after the last completed command.
///
/// `can_undo` and `can_redo` are `None` when the store does not expose
/// history controls; they are omitted, not reported as `false`.
///
/// A projection built without a store (see
/// [`StoreDefinition::default_projection`](crate::builder::StoreDefinition::default_projection))
/// carries the initial state and inert actions.
pub struct Projection<S, P = ()> {
    state: S,
    actions: Actions<S, P>,
    controls: Option<HistoryControls<S, P>>,
    revision: u64,
}

impl<S: State, P: 'static> Projection<S, P> {
    pub(crate) fn new(
        state: S,
        actions: Actions<S, P>,
        controls: Option<HistoryControls<S, P>>,
        revision: u64,
    ) -> Self {
        Self {
            state,
            actions,
            controls,
            revision,
        }
    }

    /// Projection for a scope with no mounted store.
    pub(crate) fn detached(
        transitions: Arc<Transitions<S, P>>,
        initial: S,
        expose_history_controls: bool,
    ) -> Self {
        Self {
            state: initial,
            actions: Actions::inert(transitions),
            controls: expose_history_controls.then(HistoryControls::inert),
            revision: 0,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }

    pub fn actions(&self) -> &Actions<S, P> {
        &self.actions
    }

    pub fn controls(&self) -> Option<&HistoryControls<S, P>> {
        self.controls.as_ref()
    }

    pub fn can_undo(&self) -> Option<bool> {
        self.controls.as_ref().map(HistoryControls::can_undo)
    }

    pub fn can_redo(&self) -> Option<bool> {
        self.controls.as_ref().map(HistoryControls::can_redo)
    }

    /// Fails with [`StoreError::HistoryControlsDisabled`] when the store
    /// does not expose history controls.
    pub fn undo(&self) -> Result<(), StoreError> {
        self.require_controls("undo")?.undo()
    }

    /// Fails with [`StoreError::HistoryControlsDisabled`] when the store
    /// does not expose history controls.
    pub fn redo(&self) -> Result<(), StoreError> {
        self.require_controls("redo")?.redo()
    }

    /// History revision this snapshot was taken at.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True when no store backs this projection.
    pub fn is_detached(&self) -> bool {
        self.actions.is_inert()
    }

    fn require_controls(
        &self,
        operation: &'static str,
    ) -> Result<&HistoryControls<S, P>, StoreError> {
        self.controls
            .as_ref()
            .ok_or(StoreError::HistoryControlsDisabled { operation })
    }
}

impl<S: Clone, P> Clone for Projection<S, P> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            actions: self.actions.clone(),
            controls: self.controls.clone(),
            revision: self.revision,
        }
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Projection<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projection")
            .field("state", &self.state)
            .field("actions", &self.actions)
            .field("can_undo", &self.controls.as_ref().map(|c| c.can_undo))
            .field("can_redo", &self.controls.as_ref().map(|c| c.can_redo))
            .field("revision", &self.revision)
            .finish()
    }
}
