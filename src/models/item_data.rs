//! Catalog entries returned by the itemdata endpoint.

use serde::Deserialize;

/// Frame type the API assigns to relic uniques.
pub const RELIC_FRAME: i32 = 9;

/// One entry of the item catalog.
///
/// Most descriptive fields only apply to some item kinds (gems have levels,
/// maps have tiers) and are null otherwise.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemData {
    pub id: u64,
    pub name: String,
    /// Base type, e.g. `"Simple Robe"`.
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub frame: i32,
    /// Map tier.
    #[serde(default)]
    pub tier: Option<u32>,
    /// Level, e.g. gem level.
    #[serde(default)]
    pub lvl: Option<u32>,
    /// Quality, e.g. gem quality.
    #[serde(default)]
    pub quality: Option<u32>,
    #[serde(default)]
    pub corrupted: Option<bool>,
    /// Count of links.
    #[serde(default)]
    pub links: Option<u32>,
    /// Item level.
    #[serde(default)]
    pub ilvl: Option<u32>,
    #[serde(rename = "var", default)]
    pub variation: Option<String>,
    #[serde(default)]
    pub relic: Option<bool>,
    /// Icon URL.
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
}

impl ItemData {
    /// True if the entry describes a relic unique.
    pub fn is_relic(&self) -> bool {
        self.frame == RELIC_FRAME
    }
}
