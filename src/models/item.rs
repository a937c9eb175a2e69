//! Item detail view combining a catalog entry with its price data.

use super::{ItemData, PriceData};

/// Price details of one item across all leagues.
///
/// Composes the catalog entry the item was matched by with the per-league
/// price points returned by the item endpoint.
#[derive(Debug, Clone)]
pub struct Item {
    data: ItemData,
    price_data: Vec<PriceData>,
}

impl Item {
    pub(crate) fn new(data: ItemData, price_data: Vec<PriceData>) -> Self {
        Self { data, price_data }
    }

    /// The catalog entry this item was matched by.
    pub fn data(&self) -> &ItemData {
        &self.data
    }

    /// Price points for every league the item has been listed in.
    pub fn price_data(&self) -> &[PriceData] {
        &self.price_data
    }

    /// Price point for the league with the given id.
    pub fn price_data_by_league_id(&self, id: u32) -> Option<&PriceData> {
        self.price_data.iter().find(|price| price.league.id == id)
    }

    /// Price point for the league with the given internal name.
    pub fn price_data_by_league_name(&self, name: &str) -> Option<&PriceData> {
        self.price_data.iter().find(|price| price.league.name == name)
    }
}
