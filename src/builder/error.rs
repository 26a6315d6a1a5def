//! Build errors for store definitions.

use thiserror::Error;

/// Errors that can occur when building a store definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition #{index} has an empty name")]
    EmptyActionName { index: usize },

    #[error("Transition '{name}' is defined more than once")]
    DuplicateAction { name: String },

    #[error("{} problems found in store definition", .0.len())]
    Multiple(Vec<BuildError>),
}
