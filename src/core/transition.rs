//! Named state transitions and the fixed table a store is built from.

use super::state::State;
use std::fmt;
use std::sync::Arc;

/// Boxed error returned by fallible transitions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for transition functions.
///
/// Every transition is stored in its fallible form; total transitions are
/// wrapped so they always return `Ok`.
pub type TransitionFn<S, P> = Arc<dyn Fn(&S, Option<&P>) -> Result<S, BoxError> + Send + Sync>;

/// A transition function reported a failure.
///
/// The history the transition was applied to is left exactly as it was.
#[derive(Debug, thiserror::Error)]
#[error("Transition '{action}' failed: {source}")]
pub struct TransitionError {
    /// Name of the transition that failed
    pub action: String,
    /// Error returned by the transition function
    pub source: BoxError,
}

/// A pure state transformation identified by name.
///
/// Transitions never mutate their input. They receive the current state and
/// an optional payload and return the next state.
///
/// # Example
///
/// ```rust
/// use superstate::core::Transition;
///
/// let append: Transition<String, char> = Transition::new("append", |text: &String, c: Option<&char>| {
///     let mut next = text.clone();
///     next.extend(c);
///     next
/// });
///
/// let next = append.apply(&"ab".to_string(), Some(&'c')).unwrap();
/// assert_eq!(next, "abc");
/// ```
pub struct Transition<S, P = ()> {
    name: Arc<str>,
    apply: TransitionFn<S, P>,
}

impl<S: State, P: 'static> Transition<S, P> {
    /// Create a transition that always produces a new state.
    pub fn new<F>(name: impl Into<Arc<str>>, transition: F) -> Self
    where
        F: Fn(&S, Option<&P>) -> S + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            apply: Arc::new(move |state: &S, payload: Option<&P>| -> Result<S, BoxError> {
                Ok(transition(state, payload))
            }),
        }
    }

    /// Create a transition that may reject its input.
    ///
    /// Errors surface to the dispatch caller as [`TransitionError`].
    pub fn fallible<F, E>(name: impl Into<Arc<str>>, transition: F) -> Self
    where
        F: Fn(&S, Option<&P>) -> Result<S, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self {
            name: name.into(),
            apply: Arc::new(move |state: &S, payload: Option<&P>| -> Result<S, BoxError> {
                transition(state, payload).map_err(Into::into)
            }),
        }
    }
}

impl<S, P> Transition<S, P> {
    /// The name this transition is dispatched under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compute the next state (pure).
    pub fn apply(&self, state: &S, payload: Option<&P>) -> Result<S, TransitionError> {
        (self.apply)(state, payload).map_err(|source| TransitionError {
            action: self.name.to_string(),
            source,
        })
    }

    /// True when both handles share the same function.
    pub(crate) fn same_function(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.apply, &other.apply)
    }
}

impl<S, P> Clone for Transition<S, P> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            apply: Arc::clone(&self.apply),
        }
    }
}

impl<S, P> fmt::Debug for Transition<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The fixed, ordered set of transitions owned by one store definition.
///
/// Names are unique; uniqueness is checked by
/// [`StoreBuilder`](crate::builder::StoreBuilder) before a table is created.
pub struct Transitions<S, P = ()> {
    entries: Vec<Transition<S, P>>,
}

impl<S, P> Transitions<S, P> {
    pub(crate) fn from_validated(entries: Vec<Transition<S, P>>) -> Self {
        Self { entries }
    }

    /// Look up a transition by name.
    pub fn get(&self, name: &str) -> Option<&Transition<S, P>> {
        self.entries.iter().find(|t| t.name() == name)
    }

    /// Check whether a transition with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Transition::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transition<S, P>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S, P> fmt::Debug for Transitions<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
