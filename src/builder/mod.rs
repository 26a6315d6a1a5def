//! Builder API for store definitions.
//!
//! This module provides a fluent builder that validates a set of named
//! transitions and an initial state, producing a [`StoreDefinition`] that
//! mounts stores.

pub mod definition;
pub mod error;
pub mod store;

pub use definition::StoreDefinition;
pub use error::BuildError;
pub use store::StoreBuilder;

use crate::core::{State, Transition};
use crate::store::{Store, StoreOptions};

/// Create a store from transitions, an initial state and options.
///
/// # Example
///
/// ```
/// use superstate::builder::create_store;
/// use superstate::core::{CallOptions, Transition};
/// use superstate::store::StoreOptions;
///
/// let increment = Transition::new("increment", |n: &u32, _: Option<&()>| n + 1);
/// let store = create_store([increment], 0_u32, StoreOptions::with_history_controls()).unwrap();
///
/// store.actions().call("increment", None, CallOptions::undoable()).unwrap();
/// store.undo().unwrap();
/// assert_eq!(store.state(), 0);
/// ```
pub fn create_store<S, P, I>(
    transitions: I,
    initial: S,
    options: StoreOptions,
) -> Result<Store<S, P>, BuildError>
where
    S: State,
    P: 'static,
    I: IntoIterator<Item = Transition<S, P>>,
{
    let definition = StoreBuilder::new()
        .initial(initial)
        .transitions(transitions)
        .options(options)
        .build()?;
    Ok(definition.create())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CallOptions;
    use crate::store::StoreError;

    #[test]
    fn create_store_accepts_no_transitions() {
        let store = create_store(
            Vec::<Transition<u32>>::new(),
            7,
            StoreOptions::with_history_controls(),
        )
        .unwrap();

        store.undo().unwrap();
        store.redo().unwrap();
        assert_eq!(store.state(), 7);
        assert_eq!(store.projection().can_redo(), Some(false));
        assert!(matches!(
            store.action("increment"),
            Err(StoreError::UnknownAction { .. })
        ));
    }

    #[test]
    fn create_store_validates_transition_names() {
        let noop = Transition::new("noop", |n: &u32, _: Option<&()>| *n);
        let result = create_store([noop.clone(), noop], 0, StoreOptions::default());

        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateAction {
                name: "noop".to_string()
            }
        );
    }

    #[test]
    fn create_store_mounts_a_store() {
        let add = Transition::new("add", |n: &u32, by: Option<&u32>| n + by.copied().unwrap_or(0));
        let store = create_store([add], 1, StoreOptions::default()).unwrap();

        store
            .actions()
            .call("add", Some(4), CallOptions::in_place())
            .unwrap();

        assert_eq!(store.state(), 5);
        assert!(store.projection().controls().is_none());
    }
}
