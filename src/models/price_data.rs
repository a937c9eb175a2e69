//! Per-league price points returned by the item endpoint.

use serde::Deserialize;

use super::{History, League};

/// Price point of an item in one league.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceData {
    pub league: League,
    #[serde(default)]
    pub mean: f64,
    #[serde(default)]
    pub median: f64,
    #[serde(default)]
    pub mode: f64,
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: f64,
    /// Value denominated in Exalted Orbs.
    #[serde(default)]
    pub exalted: f64,
    /// Total count of listed items.
    #[serde(default)]
    pub count: u64,
    /// Count of currently listed items.
    #[serde(default)]
    pub quantity: u64,
    /// Daily history, oldest entry first.
    #[serde(default)]
    pub history: History,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_data_deserializes_with_history() {
        let json = r#"{
            "league": { "id": 66, "name": "Legion", "display": "S07 Legion" },
            "mean": 142.5,
            "median": 140.0,
            "mode": 139.0,
            "min": 120.0,
            "max": 170.0,
            "exalted": 1.02,
            "count": 5321,
            "quantity": 212,
            "history": [
                { "mean": 139.1, "median": 138.0, "mode": 138.0, "quantity": 180 },
                { "mean": 142.5, "median": 140.0, "mode": 139.0, "quantity": 212 }
            ]
        }"#;

        let price: PriceData = serde_json::from_str(json).unwrap();
        assert_eq!(price.league.name, "Legion");
        assert_eq!(price.mean, 142.5);
        assert_eq!(price.count, 5321);
        assert_eq!(price.history.len(), 2);
    }

    #[test]
    fn price_data_deserializes_without_history() {
        let json = r#"{
            "league": { "id": 2, "name": "Standard" },
            "mean": 0.5
        }"#;

        let price: PriceData = serde_json::from_str(json).unwrap();
        assert_eq!(price.league.id, 2);
        assert!(price.history.is_empty());
        assert_eq!(price.quantity, 0);
    }
}
