//! Daily price history windows.

use serde::Deserialize;

/// One day of aggregated price history.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub mean: f64,
    #[serde(default)]
    pub median: f64,
    #[serde(default)]
    pub mode: f64,
    #[serde(default)]
    pub quantity: u64,
}

/// Ordered daily price history, oldest entry first.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

/// Field projected by [`History::sparkline`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SparklineField {
    #[default]
    Mean,
    Median,
    Mode,
    Quantity,
}

impl History {
    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the latest `count` entries (days), or the whole history when
    /// `count` exceeds its length.
    pub fn last(&self, count: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    /// Projects one field of the latest `count` entries into a sparkline.
    pub fn sparkline(&self, field: SparklineField, count: usize) -> Vec<f64> {
        self.last(count)
            .iter()
            .map(|entry| match field {
                SparklineField::Mean => entry.mean,
                SparklineField::Median => entry.median,
                SparklineField::Mode => entry.mode,
                SparklineField::Quantity => entry.quantity as f64,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(means: &[f64]) -> History {
        let entries = means
            .iter()
            .map(|&mean| HistoryEntry {
                mean,
                median: mean + 1.0,
                mode: mean + 2.0,
                quantity: mean as u64,
            })
            .collect();
        History { entries }
    }

    #[test]
    fn last_returns_latest_entries() {
        let history = history(&[1.0, 2.0, 3.0, 4.0]);

        let window = history.last(2);
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].mean, 3.0);
        assert_eq!(window[1].mean, 4.0);
    }

    #[test]
    fn last_clamps_to_history_length() {
        let history = history(&[1.0, 2.0]);

        assert_eq!(history.last(10).len(), 2);
        assert_eq!(history.last(0).len(), 0);
    }

    #[test]
    fn sparkline_projects_selected_field() {
        let history = history(&[5.0, 6.0, 7.0]);

        assert_eq!(history.sparkline(SparklineField::Mean, 10), vec![5.0, 6.0, 7.0]);
        assert_eq!(history.sparkline(SparklineField::Median, 2), vec![7.0, 8.0]);
        assert_eq!(history.sparkline(SparklineField::Quantity, 1), vec![7.0]);
    }

    #[test]
    fn history_deserializes_from_entry_array() {
        let json = r#"[
            { "mean": 1.5, "median": 1.0, "mode": 1.0, "quantity": 12 },
            { "mean": 1.8, "median": 1.2, "mode": 1.0, "quantity": 9 }
        ]"#;

        let history: History = serde_json::from_str(json).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[1].quantity, 9);
    }
}
