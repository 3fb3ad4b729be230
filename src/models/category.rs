//! Record categories
//!
//! The category set is fixed. Raw records name their category by its exact
//! display name; anything else fails validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A spending or income category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Housing,
    Food,
    Transport,
    Health,
    Education,
    Leisure,
    Savings,
    Salary,
    Other,
}

impl Category {
    /// All categories in declaration order
    pub const ALL: [Category; 9] = [
        Category::Housing,
        Category::Food,
        Category::Transport,
        Category::Health,
        Category::Education,
        Category::Leisure,
        Category::Savings,
        Category::Salary,
        Category::Other,
    ];

    /// Display name, also the accepted spelling in raw records
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Leisure => "Leisure",
            Self::Savings => "Savings",
            Self::Salary => "Salary",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Error returned when a name is not one of the fixed categories
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);
