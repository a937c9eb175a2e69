//! Typed read-only views over poe.watch API records.

mod category;
mod history;
mod item;
mod item_data;
mod league;
mod price_data;

pub use category::{Category, CategoryGroup};
pub use history::{History, HistoryEntry, SparklineField};
pub use item::Item;
pub use item_data::{ItemData, RELIC_FRAME};
pub use league::{League, LeagueDuration};
pub use price_data::PriceData;
