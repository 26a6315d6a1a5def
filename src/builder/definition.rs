//! Validated store definitions.

use crate::core::{State, Transitions};
use crate::store::{Projection, Store, StoreOptions};
use std::fmt;
use std::sync::Arc;

/// Transitions, initial state and options, validated and ready to mount.
///
/// A definition is the reusable half of a store: it can mount any number of
/// independent stores, and it can produce an inert projection for code that
/// runs with no store mounted.
///
/// # Example
///
/// ```rust
/// use superstate::builder::StoreBuilder;
/// use superstate::core::CallOptions;
///
/// let definition = StoreBuilder::<Vec<String>, String>::new()
///     .initial(Vec::new())
///     .transition("push", |items: &Vec<String>, item: Option<&String>| {
///         let mut next = items.clone();
///         next.extend(item.cloned());
///         next
///     })
///     .build()
///     .unwrap();
///
/// // No store mounted: initial state and actions that do nothing.
/// let detached = definition.project(None);
/// detached.actions().call("push", Some("a".into()), CallOptions::undoable()).unwrap();
/// assert!(detached.state().is_empty());
///
/// let store = definition.create();
/// store.actions().call("push", Some("a".into()), CallOptions::undoable()).unwrap();
/// assert_eq!(definition.project(Some(&store)).state(), &vec!["a".to_string()]);
/// ```
pub struct StoreDefinition<S, P = ()> {
    transitions: Arc<Transitions<S, P>>,
    initial: S,
    options: StoreOptions,
}

impl<S: State, P: 'static> StoreDefinition<S, P> {
    pub(crate) fn new(transitions: Transitions<S, P>, initial: S, options: StoreOptions) -> Self {
        Self {
            transitions: Arc::new(transitions),
            initial,
            options,
        }
    }

    /// Mount a new store with its own history.
    pub fn create(&self) -> Store<S, P> {
        Store::mount(
            Arc::clone(&self.transitions),
            self.initial.clone(),
            self.options,
        )
    }

    /// Projection used when no store is mounted.
    ///
    /// Holds the initial state and inert actions. History controls, when
    /// enabled, report `false` and do nothing.
    pub fn default_projection(&self) -> Projection<S, P> {
        Projection::detached(
            Arc::clone(&self.transitions),
            self.initial.clone(),
            self.options.expose_history_controls,
        )
    }

    /// Projection of the given store, or the default one when absent.
    pub fn project(&self, store: Option<&Store<S, P>>) -> Projection<S, P> {
        match store {
            Some(store) => store.projection(),
            None => self.default_projection(),
        }
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    pub fn transitions(&self) -> &Transitions<S, P> {
        &self.transitions
    }
}

impl<S: Clone, P> Clone for StoreDefinition<S, P> {
    fn clone(&self) -> Self {
        Self {
            transitions: Arc::clone(&self.transitions),
            initial: self.initial.clone(),
            options: self.options,
        }
    }
}

impl<S: fmt::Debug, P> fmt::Debug for StoreDefinition<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreDefinition")
            .field("transitions", &self.transitions)
            .field("initial", &self.initial)
            .field("options", &self.options)
            .finish()
    }
}
