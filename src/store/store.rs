//! Store handle that owns one history and dispatches commands against it.

use super::actions::{Action, Actions};
use super::error::StoreError;
use super::options::StoreOptions;
use super::projection::{HistoryControls, Projection};
use crate::core::{Command, History, State, Transitions};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use uuid::Uuid;

/// Unique identifier of a mounted store, used in log fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreId(Uuid);

impl StoreId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Handle returned by [`Store::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Type alias for change listeners.
pub type Listener<S, P> = Arc<dyn Fn(&Projection<S, P>) + Send + Sync>;

struct Inner<S, P> {
    history: History<S>,
    listeners: Vec<(SubscriptionId, Listener<S, P>)>,
    next_subscription: u64,
    pending: VecDeque<Notification<S, P>>,
    delivering: bool,
}

/// A committed change waiting to be delivered.
struct Notification<S, P> {
    projection: Projection<S, P>,
    listeners: Vec<Listener<S, P>>,
}

pub(crate) struct Shared<S, P> {
    id: StoreId,
    transitions: Arc<Transitions<S, P>>,
    options: StoreOptions,
    inner: Mutex<Inner<S, P>>,
}

impl<S, P> Shared<S, P> {
    // A transition that panics never reaches the write, so a poisoned lock
    // still guards a consistent history.
    fn lock(&self) -> MutexGuard<'_, Inner<S, P>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: State, P: 'static> Shared<S, P> {
    fn project(self: &Arc<Self>, history: &History<S>) -> Projection<S, P> {
        let controls = self.options.expose_history_controls.then(|| {
            HistoryControls::bound(history.can_undo(), history.can_redo(), Arc::downgrade(self))
        });

        Projection::new(
            history.current().clone(),
            Actions::bound(Arc::clone(&self.transitions), Arc::downgrade(self)),
            controls,
            history.revision(),
        )
    }

    /// Check that a command only runs transitions this store was defined
    /// with, and that undo/redo are enabled.
    fn authorize(&self, command: &Command<S, P>) -> Result<(), StoreError> {
        let operation = match command {
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::Apply { transition, .. } => {
                let name = transition.name();
                return match self.transitions.get(name) {
                    None => Err(StoreError::UnknownAction {
                        name: name.to_string(),
                    }),
                    Some(own) if !own.same_function(transition) => {
                        Err(StoreError::ForeignTransition {
                            name: name.to_string(),
                        })
                    }
                    Some(_) => Ok(()),
                };
            }
        };

        if self.options.expose_history_controls {
            Ok(())
        } else {
            Err(StoreError::HistoryControlsDisabled { operation })
        }
    }

    /// Reduce a command against the history and notify listeners.
    pub(crate) fn dispatch(self: &Arc<Self>, command: Command<S, P>) -> Result<(), StoreError> {
        if let Err(err) = self.authorize(&command) {
            tracing::debug!(store = %self.id, command = command.label(), error = %err, "Command rejected");
            return Err(err);
        }

        {
            let mut inner = self.lock();

            let change = match inner.history.apply(&command) {
                Ok(change) => change,
                Err(err) => {
                    tracing::warn!(
                        store = %self.id,
                        action = %err.action,
                        error = %err.source,
                        "Transition failed; history unchanged"
                    );
                    return Err(err.into());
                }
            };

            if change.is_unchanged() {
                tracing::trace!(store = %self.id, command = command.label(), "History boundary reached");
                return Ok(());
            }

            tracing::debug!(
                store = %self.id,
                action = command.label(),
                change = ?change,
                pointer = inner.history.pointer(),
                len = inner.history.len(),
                "Applied command"
            );

            if inner.listeners.is_empty() {
                return Ok(());
            }

            let listeners = inner
                .listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect();
            let projection = self.project(&inner.history);
            inner.pending.push_back(Notification {
                projection,
                listeners,
            });

            if inner.delivering {
                return Ok(());
            }
            inner.delivering = true;
        }

        self.deliver();
        Ok(())
    }

    // Drains queued notifications in commit order with the lock released.
    // Only one thread delivers at a time; commits made meanwhile, including
    // dispatches from inside a listener, queue behind the current one.
    fn deliver(&self) {
        let _reset = DeliveryReset(self);
        loop {
            let next = {
                let mut inner = self.lock();
                match inner.pending.pop_front() {
                    Some(next) => next,
                    None => {
                        inner.delivering = false;
                        return;
                    }
                }
            };
            for listener in &next.listeners {
                listener(&next.projection);
            }
        }
    }
}

/// Releases delivery if a listener panics, so later commits still drain.
struct DeliveryReset<'a, S, P>(&'a Shared<S, P>);

impl<S, P> Drop for DeliveryReset<'_, S, P> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.0.lock().delivering = false;
        }
    }
}

/// A versioned state container.
///
/// A store owns exactly one [`History`] and a fixed table of named
/// transitions. The handle is cheap to clone; every clone refers to the same
/// history, and all operations are serialized by an internal mutex.
///
/// The raw history is never exposed. Collaborators read a [`Projection`]
/// holding the current state, the bound actions and, when enabled, the
/// undo/redo controls.
///
/// # Example
///
/// ```rust
/// use superstate::builder::StoreBuilder;
/// use superstate::core::CallOptions;
///
/// let definition = StoreBuilder::<i64>::new()
///     .initial(0)
///     .transition("increment", |n: &i64, _: Option<&()>| n + 1)
///     .expose_history_controls(true)
///     .build()
///     .unwrap();
///
/// let store = definition.create();
/// let increment = store.action("increment").unwrap();
/// increment.call(None, CallOptions::undoable()).unwrap();
/// increment.call(None, CallOptions::undoable()).unwrap();
/// assert_eq!(store.state(), 2);
///
/// store.undo().unwrap();
/// let projection = store.projection();
/// assert_eq!(*projection.state(), 1);
/// assert_eq!(projection.can_undo(), Some(true));
/// assert_eq!(projection.can_redo(), Some(true));
/// ```
pub struct Store<S, P = ()> {
    shared: Arc<Shared<S, P>>,
}

impl<S: State, P: 'static> Store<S, P> {
    pub(crate) fn mount(
        transitions: Arc<Transitions<S, P>>,
        initial: S,
        options: StoreOptions,
    ) -> Self {
        let id = StoreId::new();
        tracing::debug!(
            store = %id,
            actions = transitions.len(),
            history_controls = options.expose_history_controls,
            "Store created"
        );

        Self {
            shared: Arc::new(Shared {
                id,
                transitions,
                options,
                inner: Mutex::new(Inner {
                    history: History::new(initial),
                    listeners: Vec::new(),
                    next_subscription: 0,
                    pending: VecDeque::new(),
                    delivering: false,
                }),
            }),
        }
    }

    pub fn id(&self) -> StoreId {
        self.shared.id
    }

    pub fn options(&self) -> StoreOptions {
        self.shared.options
    }

    /// Snapshot of the externally visible view.
    pub fn projection(&self) -> Projection<S, P> {
        let inner = self.shared.lock();
        self.shared.project(&inner.history)
    }

    /// Clone of the current state.
    pub fn state(&self) -> S {
        self.shared.lock().history.current().clone()
    }

    /// Actions bound to this store, one per transition.
    pub fn actions(&self) -> Actions<S, P> {
        Actions::bound(
            Arc::clone(&self.shared.transitions),
            Arc::downgrade(&self.shared),
        )
    }

    /// Bind a single action by name.
    ///
    /// Fails with [`StoreError::UnknownAction`] when no transition has this
    /// name.
    pub fn action(&self, name: &str) -> Result<Action<S, P>, StoreError> {
        self.actions().get(name)
    }

    /// Submit a command.
    ///
    /// Undo and redo fail with [`StoreError::HistoryControlsDisabled`] unless
    /// the store exposes history controls. An applied transition must be one
    /// of this store's own (as handed out by [`Store::actions`] or the
    /// definition); anything else fails with [`StoreError::UnknownAction`] or
    /// [`StoreError::ForeignTransition`].
    ///
    /// Listeners are notified once if the command changed the history.
    /// Notifications arrive in commit order, possibly on the thread of a
    /// concurrent dispatch.
    pub fn dispatch(&self, command: Command<S, P>) -> Result<(), StoreError> {
        self.shared.dispatch(command)
    }

    pub fn undo(&self) -> Result<(), StoreError> {
        self.dispatch(Command::Undo)
    }

    pub fn redo(&self) -> Result<(), StoreError> {
        self.dispatch(Command::Redo)
    }

    /// Register a listener called with the new projection after every
    /// dispatch that changes the history.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Projection<S, P>) + Send + Sync + 'static,
    {
        let mut inner = self.shared.lock();
        let id = SubscriptionId(inner.next_subscription);
        inner.next_subscription += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.shared.lock();
        let before = inner.listeners.len();
        inner.listeners.retain(|(existing, _)| *existing != id);
        inner.listeners.len() != before
    }
}

impl<S, P> Clone for Store<S, P> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<S, P> fmt::Debug for Store<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("id", &self.shared.id)
            .field("actions", &self.shared.transitions)
            .field("options", &self.shared.options)
            .finish_non_exhaustive()
    }
}
