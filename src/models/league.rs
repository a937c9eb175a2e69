//! League records returned by the leagues endpoint.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// League metadata.
///
/// Price points embed a reduced version of this record; every field beyond
/// `id` and `name` is therefore optional or defaulted.
#[derive(Debug, Clone, Deserialize)]
pub struct League {
    pub id: u32,
    /// Internal name, e.g. `"Legion"`.
    pub name: String,
    /// Display name, e.g. `"S07 Legion"`.
    #[serde(default)]
    pub display: Option<String>,
    #[serde(default)]
    pub hardcore: bool,
    #[serde(default)]
    pub upcoming: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub event: bool,
    /// League start, absent for permanent leagues.
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    /// League end, absent for permanent leagues.
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration: Option<LeagueDuration>,
}

/// Total, elapsed and remaining league time in seconds.
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueDuration {
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub elapse: Option<i64>,
    #[serde(default)]
    pub remain: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn league_deserializes_full_record() {
        let json = r#"{
            "id": 66,
            "name": "Legion",
            "display": "S07 Legion",
            "hardcore": false,
            "upcoming": false,
            "active": true,
            "event": false,
            "start": "2019-06-07T20:00:00.000Z",
            "end": "2019-09-02T22:00:00.000Z",
            "duration": { "total": 7520400, "elapse": 1814400, "remain": 5706000 }
        }"#;

        let league: League = serde_json::from_str(json).unwrap();
        assert_eq!(league.id, 66);
        assert_eq!(league.name, "Legion");
        assert!(league.active);
        assert!(!league.hardcore);
        assert_eq!(league.start.unwrap().timestamp(), 1559937600);

        let duration = league.duration.unwrap();
        assert_eq!(duration.total, Some(7520400));
        assert_eq!(duration.remain, Some(5706000));
    }

    #[test]
    fn permanent_league_has_no_end() {
        let json = r#"{
            "id": 2,
            "name": "Standard",
            "display": "Standard",
            "active": true,
            "start": "2013-01-23T21:00:00.000Z",
            "end": null,
            "duration": { "total": null, "elapse": null, "remain": null }
        }"#;

        let league: League = serde_json::from_str(json).unwrap();
        assert!(league.end.is_none());
        assert_eq!(league.duration.unwrap().total, None);
    }

    #[test]
    fn embedded_league_reference_deserializes() {
        // The shape embedded in price points carries only a subset of fields.
        let json = r#"{ "id": 66, "name": "Legion", "display": "S07 Legion" }"#;

        let league: League = serde_json::from_str(json).unwrap();
        assert_eq!(league.id, 66);
        assert!(!league.active);
        assert!(league.start.is_none());
    }
}
