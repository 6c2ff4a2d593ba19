use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::Category;

#[derive(Debug, Deserialize, Validate)]
pub struct LinksRequest {
    #[validate(length(min = 1, max = 500, message = "names must contain between 1 and 500 entries"))]
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationLink {
    pub name: String,
    pub slug: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkBatch {
    pub category: Category,
    pub links: Vec<LocationLink>,
    /// Names whose slug came out empty; no route is published for them.
    pub rejected: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLocation {
    pub category: Category,
    pub slug: String,
    pub name: String,
    pub path: String,
    /// Whether the slug is present in the current directory batch.
    pub known: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationPage {
    pub slug: String,
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageIndex {
    pub category: Category,
    pub pages: Vec<LocationPage>,
}
