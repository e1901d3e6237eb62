//! The closed set of note categories.
//!
//! Categories are stored as their canonical English label. Older clients
//! wrote Spanish labels, which are still accepted on input and mapped onto
//! the canonical variant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One label from the fixed category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Category {
    Work,
    Personal,
    Ideas,
    Study,
    #[default]
    Others,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Work,
        Category::Personal,
        Category::Ideas,
        Category::Study,
        Category::Others,
    ];

    /// Canonical label as stored in the `notes.category` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Ideas => "Ideas",
            Category::Study => "Study",
            Category::Others => "Others",
        }
    }

    /// Map a canonical or legacy label to its category.
    ///
    /// Matching is exact; `"work"` is not a category.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label {
            "Work" | "Trabajo" => Some(Category::Work),
            "Personal" => Some(Category::Personal),
            "Ideas" => Some(Category::Ideas),
            "Study" | "Estudio" => Some(Category::Study),
            "Others" | "Otros" => Some(Category::Others),
            _ => None,
        }
    }
}

/// Error returned when a label is not part of the category set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid category '{0}'. Must be one of: Work, Personal, Ideas, Study, Others")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = UnknownCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for &'static str {
    fn from(value: Category) -> Self {
        value.as_str()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
