//! Callable actions derived from a store's transitions.

use super::error::StoreError;
use super::store::Shared;
use crate::core::{CallOptions, Command, State, Transition, Transitions};
use std::fmt;
use std::sync::{Arc, Weak};

/// What an action or control submits its commands to.
pub(crate) enum Binding<S, P> {
    /// A mounted store, held weakly so handles never keep it alive
    Store(Weak<Shared<S, P>>),

    /// No store: calls are accepted and ignored
    Inert,
}

impl<S: State, P: 'static> Binding<S, P> {
    /// Dispatch a command, or do nothing for inert bindings.
    pub(crate) fn dispatch(&self, command: Command<S, P>) -> Result<(), StoreError> {
        match self {
            Self::Store(store) => {
                let store = store.upgrade().ok_or_else(|| StoreError::Unmounted {
                    action: command.label().to_string(),
                })?;
                store.dispatch(command)
            }
            Self::Inert => {
                tracing::trace!(command = command.label(), "Ignoring command without a store");
                Ok(())
            }
        }
    }

    pub(crate) fn is_inert(&self) -> bool {
        matches!(self, Self::Inert)
    }
}

impl<S, P> Clone for Binding<S, P> {
    fn clone(&self) -> Self {
        match self {
            Self::Store(store) => Self::Store(Weak::clone(store)),
            Self::Inert => Self::Inert,
        }
    }
}

/// One callable action, backed by exactly one transition.
pub struct Action<S, P = ()> {
    transition: Transition<S, P>,
    binding: Binding<S, P>,
}

impl<S: State, P: 'static> Action<S, P> {
    pub fn name(&self) -> &str {
        self.transition.name()
    }

    /// True for the no-op actions of a detached projection.
    pub fn is_inert(&self) -> bool {
        self.binding.is_inert()
    }

    /// Apply the backing transition with an optional payload.
    pub fn call(&self, payload: Option<P>, options: CallOptions) -> Result<(), StoreError> {
        self.binding
            .dispatch(Command::apply(self.transition.clone(), payload, options))
    }
}

impl<S, P> Clone for Action<S, P> {
    fn clone(&self) -> Self {
        Self {
            transition: self.transition.clone(),
            binding: self.binding.clone(),
        }
    }
}

impl<S, P> fmt::Debug for Action<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.transition.name())
            .field("inert", &matches!(self.binding, Binding::Inert))
            .finish()
    }
}

/// The set of actions for a store, one per transition name.
///
/// Actions are derived strictly from the transitions a store was defined
/// with; asking for any other name fails with
/// [`StoreError::UnknownAction`].
pub struct Actions<S, P = ()> {
    transitions: Arc<Transitions<S, P>>,
    binding: Binding<S, P>,
}

impl<S: State, P: 'static> Actions<S, P> {
    pub(crate) fn bound(transitions: Arc<Transitions<S, P>>, store: Weak<Shared<S, P>>) -> Self {
        Self {
            transitions,
            binding: Binding::Store(store),
        }
    }

    pub(crate) fn inert(transitions: Arc<Transitions<S, P>>) -> Self {
        Self {
            transitions,
            binding: Binding::Inert,
        }
    }

    /// Get the action for a transition name.
    pub fn get(&self, name: &str) -> Result<Action<S, P>, StoreError> {
        let transition = self
            .transitions
            .get(name)
            .ok_or_else(|| StoreError::UnknownAction {
                name: name.to_string(),
            })?;

        Ok(Action {
            transition: transition.clone(),
            binding: self.binding.clone(),
        })
    }

    /// Look up and call an action in one step.
    pub fn call(&self, name: &str, payload: Option<P>, options: CallOptions) -> Result<(), StoreError> {
        self.get(name)?.call(payload, options)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.transitions.contains(name)
    }

    /// Action names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.transitions.names()
    }

    /// Every action, in definition order.
    pub fn iter(&self) -> impl Iterator<Item = Action<S, P>> + '_ {
        self.transitions.iter().map(|transition| Action {
            transition: transition.clone(),
            binding: self.binding.clone(),
        })
    }

    pub fn is_inert(&self) -> bool {
        self.binding.is_inert()
    }
}

impl<S, P> Clone for Actions<S, P> {
    fn clone(&self) -> Self {
        Self {
            transitions: Arc::clone(&self.transitions),
            binding: self.binding.clone(),
        }
    }
}

impl<S, P> fmt::Debug for Actions<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actions")
            .field("names", &self.transitions)
            .field("inert", &matches!(self.binding, Binding::Inert))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{StoreBuilder, StoreDefinition};

    fn definition() -> StoreDefinition<String, char> {
        StoreBuilder::new()
            .initial(String::new())
            .transition("append", |s: &String, c: Option<&char>| {
                let mut next = s.clone();
                next.extend(c);
                next
            })
            .transition("clear", |_: &String, _: Option<&char>| String::new())
            .build()
            .unwrap()
    }

    #[test]
    fn one_action_per_transition() {
        let store = definition().create();
        let actions = store.actions();

        assert_eq!(actions.names().collect::<Vec<_>>(), vec!["append", "clear"]);
        assert!(actions.contains("append"));
        assert!(!actions.contains("remove"));
        assert_eq!(actions.iter().count(), 2);
        assert!(!actions.is_inert());
    }

    #[test]
    fn unknown_action_fails_before_dispatch() {
        let store = definition().create();

        let err = store
            .actions()
            .call("remove", Some('a'), CallOptions::undoable())
            .unwrap_err();

        assert_eq!(err.to_string(), "Unknown action 'remove'");
        assert_eq!(store.state(), "");
    }

    #[test]
    fn same_action_may_be_undoable_or_not_per_call() {
        let store = definition().create();
        let append = store.action("append").unwrap();

        append.call(Some('a'), CallOptions::undoable()).unwrap();
        append.call(Some('b'), CallOptions::in_place()).unwrap();

        let projection = store.projection();
        assert_eq!(projection.state(), "ab");
        assert_eq!(projection.revision(), 2);
    }

    #[test]
    fn action_outliving_store_reports_unmounted() {
        let store = definition().create();
        let append = store.action("append").unwrap();
        drop(store);

        let err = append.call(Some('a'), CallOptions::undoable()).unwrap_err();

        assert!(matches!(err, StoreError::Unmounted { ref action } if action == "append"));
    }

    #[test]
    fn inert_actions_accept_calls_and_do_nothing() {
        let actions = Actions::inert(Arc::new(Transitions::from_validated(vec![Transition::new(
            "append",
            |s: &String, _: Option<&char>| s.clone(),
        )])));

        let append = actions.get("append").unwrap();
        assert!(append.is_inert());
        assert!(append.call(Some('a'), CallOptions::undoable()).is_ok());
        assert!(matches!(
            actions.call("missing", None, CallOptions::default()),
            Err(StoreError::UnknownAction { .. })
        ));
    }

    #[test]
    fn debug_shows_name_and_binding() {
        let store = definition().create();
        let append = store.action("append").unwrap();

        assert_eq!(
            format!("{append:?}"),
            "Action { name: \"append\", inert: false }"
        );
    }
}
