//! Bounds for values tracked by a store.
//!
//! A store keeps full snapshots of every undoable step, so state values
//! must be cheap enough to clone and safe to share across threads.

use std::fmt::Debug;

/// Trait for values held in a [`History`](super::History).
///
/// Implemented automatically for every type that satisfies the bounds.
///
/// # Required Traits
///
/// - `Clone`: snapshots are copied into history frames and projections
/// - `Debug`: states are debuggable for diagnostics
/// - `Send` + `Sync`: a store handle may be shared between threads
///
/// # Example
///
/// ```rust
/// use superstate::core::State;
///
/// #[derive(Clone, Debug, Default)]
/// struct Counter {
///     count: i64,
/// }
///
/// fn assert_state<S: State>() {}
/// assert_state::<Counter>();
/// ```
pub trait State: Clone + Debug + Send + Sync + 'static {}

impl<T> State for T where T: Clone + Debug + Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Document {
        title: String,
        revision: u32,
    }

    fn is_state<S: State>(_: &S) -> bool {
        true
    }

    #[test]
    fn plain_values_are_states() {
        assert!(is_state(&0_i64));
        assert!(is_state(&String::from("text")));
        assert!(is_state(&vec![1_u8, 2, 3]));
    }

    #[test]
    fn user_structs_are_states() {
        let doc = Document {
            title: "draft".to_string(),
            revision: 1,
        };
        assert!(is_state(&doc));
    }

    #[test]
    fn state_snapshot_is_independent_copy() {
        let doc = Document {
            title: "draft".to_string(),
            revision: 1,
        };
        let mut snapshot = doc.clone();
        snapshot.revision += 1;

        assert_eq!(doc.revision, 1);
        assert_ne!(doc, snapshot);
    }
}
