use std::fmt;

use serde::{Deserialize, Serialize};

/// Category id for food intake. Fresh drafts always start here.
pub const FOOD: u32 = 1;
/// Category id for exercise.
pub const EXERCISE: u32 = 2;

/// One selectable option in the category selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

impl Category {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[mutants::skip]
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Ordered list of category options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new(vec![
            Category::new(FOOD, "Food"),
            Category::new(EXERCISE, "Exercise"),
        ])
    }
}

impl CategoryTable {
    /// Creates a table from categories in display order.
    ///
    /// Uniqueness and non-emptiness are checked by
    /// [`Config::validate`](crate::config::Config::validate), not here.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Looks up a category by id.
    pub fn get(&self, id: u32) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Returns `true` if `id` is one of the options.
    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Iterates over the options in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Returns the id after (or before) `current`, wrapping around.
    ///
    /// An id not in the table is treated as the first option.
    pub fn cycle(&self, current: u32, forward: bool) -> u32 {
        if self.categories.is_empty() {
            return current;
        }
        let len = self.categories.len();
        let pos = self
            .categories
            .iter()
            .position(|c| c.id == current)
            .unwrap_or(0);
        let next = if forward {
            (pos + 1) % len
        } else {
            (pos + len - 1) % len
        };
        self.categories[next].id
    }
}

/// Label for the submit control for the given category.
///
/// Uses the table's name when present; otherwise falls back to `Food` for
/// [`FOOD`] and `Exercise` for everything else.
pub fn submit_label(category: u32, table: &CategoryTable) -> String {
    let name = match table.get(category) {
        Some(c) => c.name.as_str(),
        None if category == FOOD => "Food",
        None => "Exercise",
    };
    format!("Save {name}")
}
