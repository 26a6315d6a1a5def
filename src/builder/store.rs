//! Builder for constructing store definitions.

use crate::builder::definition::StoreDefinition;
use crate::builder::error::BuildError;
use crate::core::{BoxError, State, Transition, Transitions};
use crate::store::StoreOptions;
use std::collections::HashSet;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for store definitions with a fluent API.
///
/// `build()` validates the whole definition at once and reports every
/// problem it finds, not just the first.
pub struct StoreBuilder<S, P = ()> {
    initial: Option<S>,
    transitions: Vec<Transition<S, P>>,
    options: StoreOptions,
}

impl<S: State, P: 'static> StoreBuilder<S, P> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            options: StoreOptions::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition from a closure.
    pub fn transition<F>(self, name: impl Into<Arc<str>>, transition: F) -> Self
    where
        F: Fn(&S, Option<&P>) -> S + Send + Sync + 'static,
    {
        self.add_transition(Transition::new(name, transition))
    }

    /// Add a transition that may fail.
    pub fn fallible_transition<F, E>(self, name: impl Into<Arc<str>>, transition: F) -> Self
    where
        F: Fn(&S, Option<&P>) -> Result<S, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        self.add_transition(Transition::fallible(name, transition))
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, P>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition<S, P>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Replace all options.
    pub fn options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    /// Expose undo, redo, can_undo and can_redo on projections.
    pub fn expose_history_controls(mut self, expose: bool) -> Self {
        self.options.expose_history_controls = expose;
        self
    }

    /// Check the definition, accumulating ALL problems.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = Vec::new();

        checks.push(if self.initial.is_some() {
            Validation::success(())
        } else {
            Validation::fail(BuildError::MissingInitialState)
        });

        let mut seen = HashSet::new();
        for (index, transition) in self.transitions.iter().enumerate() {
            let name = transition.name();
            let check = if name.is_empty() {
                Validation::fail(BuildError::EmptyActionName { index })
            } else if !seen.insert(name) {
                Validation::fail(BuildError::DuplicateAction {
                    name: name.to_string(),
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the store definition.
    ///
    /// A single problem is returned as itself; several are wrapped in
    /// [`BuildError::Multiple`].
    pub fn build(self) -> Result<StoreDefinition<S, P>, BuildError> {
        if let Validation::Failure(errors) = self.validate() {
            let mut errors: Vec<BuildError> = errors.iter().cloned().collect();
            return Err(match errors.len() {
                1 => errors.remove(0),
                _ => BuildError::Multiple(errors),
            });
        }

        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(StoreDefinition::new(
            Transitions::from_validated(self.transitions),
            initial,
            self.options,
        ))
    }
}

impl<S: State, P: 'static> Default for StoreBuilder<S, P> {
    fn default() -> Self {
        Self::new()
    }
}
