use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::FOOD;

/// A single tracked entry: something eaten or some exercise done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Opaque identifier, fixed for the lifetime of the record.
    pub id: String,
    /// Category id from the [`CategoryTable`](super::CategoryTable).
    pub category: u32,
    pub name: String,
    pub calories: f64,
}

impl Activity {
    /// Creates an empty food draft with a freshly generated id.
    pub fn empty() -> Self {
        Self::empty_with_id(fresh_id())
    }

    /// Creates an empty food draft with the given id.
    pub fn empty_with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: FOOD,
            name: String::new(),
            calories: 0.0,
        }
    }
}

impl Default for Activity {
    fn default() -> Self {
        Self::empty()
    }
}

/// Generates a new unique activity id (UUID v4).
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}
