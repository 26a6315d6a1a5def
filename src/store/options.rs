//! Store configuration.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Options fixed when a store is defined.
///
/// History is always tracked. `expose_history_controls` only decides whether
/// undo/redo and the `can_undo`/`can_redo` flags are part of the visible
/// surface.
///
/// # Example
///
/// ```rust
/// use superstate::store::StoreOptions;
///
/// let options = StoreOptions::from_json(r#"{ "expose_history_controls": true }"#).unwrap();
/// assert_eq!(options, StoreOptions::with_history_controls());
///
/// assert_eq!(StoreOptions::from_json("{}").unwrap(), StoreOptions::default());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreOptions {
    /// Expose undo, redo, can_undo and can_redo
    pub expose_history_controls: bool,
}

impl StoreOptions {
    /// Options with undo/redo exposed.
    pub fn with_history_controls() -> Self {
        Self {
            expose_history_controls: true,
        }
    }

    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
