//! Sparse lookup keys for cached catalog and league data.

use crate::models::{ItemData, League, RELIC_FRAME};

/// Property bag selecting a single catalog entry.
///
/// Set the fields that should participate in the match; matching compares
/// every present field for equality and picks the first matching entry in
/// catalog order.
///
/// ```
/// use poe_watch::ItemQuery;
///
/// let query = ItemQuery {
///     name: Some("Tabula Rasa".to_string()),
///     corrupted: Some(false),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemQuery {
    pub id: Option<u64>,
    pub name: Option<String>,
    /// Base type, e.g. `"Simple Robe"`.
    pub item_type: Option<String>,
    pub frame: Option<i32>,
    pub tier: Option<u32>,
    pub lvl: Option<u32>,
    pub quality: Option<u32>,
    pub corrupted: Option<bool>,
    pub links: Option<u32>,
    pub ilvl: Option<u32>,
    pub variation: Option<String>,
    /// `Some(true)` is shorthand for `frame: Some(RELIC_FRAME)`; it replaces
    /// any explicit frame and never matches a field of its own.
    pub relic: Option<bool>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub group: Option<String>,
}

impl ItemQuery {
    /// Returns the query with the relic shorthand folded into `frame`.
    pub(crate) fn normalized(&self) -> Self {
        let mut query = self.clone();
        if query.relic.take() == Some(true) {
            query.frame = Some(RELIC_FRAME);
        }
        query
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.name.is_none()
            && self.item_type.is_none()
            && self.frame.is_none()
            && self.tier.is_none()
            && self.lvl.is_none()
            && self.quality.is_none()
            && self.corrupted.is_none()
            && self.links.is_none()
            && self.ilvl.is_none()
            && self.variation.is_none()
            && self.relic.is_none()
            && self.icon.is_none()
            && self.category.is_none()
            && self.group.is_none()
    }

    /// True if every field present in the (normalized) query equals the
    /// item's value.
    pub(crate) fn matches(&self, item: &ItemData) -> bool {
        fn wants<T: PartialEq>(wanted: &Option<T>, actual: &Option<T>) -> bool {
            wanted.as_ref().map_or(true, |w| actual.as_ref() == Some(w))
        }

        self.id.map_or(true, |id| item.id == id)
            && self.name.as_deref().map_or(true, |name| item.name == name)
            && wants(&self.item_type, &item.item_type)
            && self.frame.map_or(true, |frame| item.frame == frame)
            && wants(&self.tier, &item.tier)
            && wants(&self.lvl, &item.lvl)
            && wants(&self.quality, &item.quality)
            && wants(&self.corrupted, &item.corrupted)
            && wants(&self.links, &item.links)
            && wants(&self.ilvl, &item.ilvl)
            && wants(&self.variation, &item.variation)
            && wants(&self.icon, &item.icon)
            && wants(&self.category, &item.category)
            && wants(&self.group, &item.group)
    }
}

/// Property bag selecting a single league.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueQuery {
    pub id: Option<u32>,
    pub name: Option<String>,
}

impl LeagueQuery {
    pub(crate) fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none()
    }

    pub(crate) fn matches(&self, league: &League) -> bool {
        self.id.map_or(true, |id| league.id == id)
            && self.name.as_deref().map_or(true, |name| league.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_entry(json: &str) -> ItemData {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn relic_true_folds_into_frame() {
        let query = ItemQuery {
            name: Some("Tabula Rasa".to_string()),
            relic: Some(true),
            ..Default::default()
        };

        let normalized = query.normalized();
        assert_eq!(normalized.frame, Some(RELIC_FRAME));
        assert_eq!(normalized.relic, None);
    }

    #[test]
    fn relic_true_replaces_explicit_frame() {
        let query = ItemQuery {
            frame: Some(3),
            relic: Some(true),
            ..Default::default()
        };

        assert_eq!(query.normalized().frame, Some(RELIC_FRAME));
    }

    #[test]
    fn relic_false_is_dropped_from_the_match() {
        let query = ItemQuery {
            name: Some("Tabula Rasa".to_string()),
            relic: Some(false),
            ..Default::default()
        };

        let normalized = query.normalized();
        assert_eq!(normalized.frame, None);
        assert_eq!(normalized.relic, None);
    }

    #[test]
    fn matches_on_present_fields_only() {
        let item = catalog_entry(
            r#"{ "id": 1219, "name": "Vaal Haste", "frame": 4, "lvl": 20, "quality": 20, "corrupted": true }"#,
        );

        let by_name = ItemQuery {
            name: Some("Vaal Haste".to_string()),
            ..Default::default()
        };
        assert!(by_name.matches(&item));

        let by_name_and_level = ItemQuery {
            name: Some("Vaal Haste".to_string()),
            lvl: Some(20),
            ..Default::default()
        };
        assert!(by_name_and_level.matches(&item));

        let wrong_level = ItemQuery {
            name: Some("Vaal Haste".to_string()),
            lvl: Some(21),
            ..Default::default()
        };
        assert!(!wrong_level.matches(&item));
    }

    #[test]
    fn query_on_null_field_does_not_match() {
        // The entry has no tier; asking for one must not match.
        let item = catalog_entry(r#"{ "id": 259, "name": "Exalted Orb", "frame": 5 }"#);

        let query = ItemQuery {
            name: Some("Exalted Orb".to_string()),
            tier: Some(14),
            ..Default::default()
        };
        assert!(!query.matches(&item));
    }

    #[test]
    fn empty_queries_are_detected() {
        assert!(ItemQuery::default().is_empty());
        assert!(LeagueQuery::default().is_empty());

        let query = ItemQuery {
            id: Some(1),
            ..Default::default()
        };
        assert!(!query.is_empty());
    }

    #[test]
    fn league_query_matches_by_id_and_name() {
        let league: League =
            serde_json::from_str(r#"{ "id": 66, "name": "Legion", "active": true }"#).unwrap();

        let by_id = LeagueQuery {
            id: Some(66),
            ..Default::default()
        };
        assert!(by_id.matches(&league));

        let by_name = LeagueQuery {
            name: Some("Legion".to_string()),
            ..Default::default()
        };
        assert!(by_name.matches(&league));

        let mismatch = LeagueQuery {
            id: Some(66),
            name: Some("Standard".to_string()),
        };
        assert!(!mismatch.matches(&league));
    }
}
