//! Category records returned by the categories endpoint.

use serde::Deserialize;

/// Item category.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub display: Option<String>,
    #[serde(default)]
    pub groups: Vec<CategoryGroup>,
}

/// Group within a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryGroup {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub display: Option<String>,
}
