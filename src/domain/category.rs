use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Independent slug namespace. A slug may exist once per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Country,
    City,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown location category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    pub const ALL: [Category; 2] = [Category::Country, Category::City];

    /// Path segment used in `/research-jobs/<category>/<slug>`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Country => "country",
            Category::City => "city",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "country" => Ok(Category::Country),
            "city" => Ok(Category::City),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}
