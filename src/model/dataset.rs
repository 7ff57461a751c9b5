use serde::{Deserialize, Deserializer, Serialize};
use tracing::instrument;

use super::common::MatchType;
use super::record::{opt_record, MatchRecord};
use crate::error::Result;

/// The most recent snapshot published by the refresh collaborator.
///
/// A snapshot is never edited once published; a refresh replaces it whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchDataset {
    #[serde(
        default,
        rename = "lastmatch",
        deserialize_with = "opt_record",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_match: Option<MatchRecord>,
    #[serde(
        default,
        rename = "upcoming",
        alias = "upcomingmatch",
        deserialize_with = "opt_upcoming",
        skip_serializing_if = "Option::is_none"
    )]
    pub upcoming_match: Option<MatchRecord>,
}

fn opt_upcoming<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<MatchRecord>, D::Error> {
    Ok(opt_record(deserializer)?.map(MatchRecord::without_result))
}

impl MatchDataset {
    pub fn new(last_match: Option<MatchRecord>, upcoming_match: Option<MatchRecord>) -> Self {
        Self {
            last_match,
            upcoming_match,
        }
    }

    /// Decode the refresh payload (`lastmatch` / `upcoming` objects).
    #[instrument(skip(payload), fields(len = payload.len()))]
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn from_value(payload: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(payload)?)
    }

    /// The record a view of the given match type reads.
    pub fn record(&self, match_type: MatchType) -> Option<&MatchRecord> {
        match match_type {
            MatchType::Last => self.last_match.as_ref(),
            MatchType::Upcoming => self.upcoming_match.as_ref(),
        }
    }

    /// Records in team-lookup priority: upcoming first, then last.
    pub fn records_by_priority(&self) -> impl Iterator<Item = &MatchRecord> {
        [MatchType::Upcoming, MatchType::Last]
            .into_iter()
            .filter_map(|match_type| self.record(match_type))
    }

    pub fn is_empty(&self) -> bool {
        self.last_match.is_none() && self.upcoming_match.is_none()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::fixtures;

    #[test]
    fn test_from_json_both_slots() {
        let dataset = MatchDataset::from_value(json!({
            "lastmatch": {
                "matchid": "M0",
                "hometeamid": "T1",
                "awayteamid": "T3",
                "hometeamgoals": 1,
                "awayteamgoals": 1,
                "hometeampenalties": 4,
                "awayteampenalties": 3
            },
            "upcoming": {
                "matchid": "M1",
                "hometeamid": "T1",
                "awayteamid": "T2",
                "starttime": "2024-05-01T18:00"
            }
        }))
        .unwrap();

        let last = dataset.record(MatchType::Last).unwrap();
        assert_eq!(last.match_id.as_deref(), Some("M0"));
        assert_eq!(last.home.penalties, Some(4));
        let upcoming = dataset.record(MatchType::Upcoming).unwrap();
        assert_eq!(upcoming.match_id.as_deref(), Some("M1"));
        assert!(upcoming.start_time.is_some());
    }

    #[test]
    fn test_empty_slots_are_absent() {
        let dataset =
            MatchDataset::from_json(r#"{"lastmatch": {}, "upcoming": null}"#).unwrap();
        assert!(dataset.is_empty());

        let dataset = MatchDataset::from_json("{}").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_upcoming_alias_and_result_stripped() {
        let dataset = MatchDataset::from_value(json!({
            "upcomingmatch": {"matchid": "M9", "hometeamgoals": 3}
        }))
        .unwrap();
        let upcoming = dataset.upcoming_match.unwrap();
        assert_eq!(upcoming.match_id.as_deref(), Some("M9"));
        assert_eq!(upcoming.home.goals, None);
    }

    #[test]
    fn test_bad_timestamp_keeps_the_slot() {
        let dataset = MatchDataset::from_value(json!({
            "lastmatch": {"matchid": "M0", "starttime": "2024-04-24T20:00"},
            "upcoming": {"matchid": "M1", "starttime": "soon"}
        }))
        .unwrap();

        let upcoming = dataset.record(MatchType::Upcoming).unwrap();
        assert_eq!(upcoming.match_id.as_deref(), Some("M1"));
        assert!(upcoming.start_time.is_none());
        assert!(dataset.record(MatchType::Last).unwrap().start_time.is_some());
    }

    #[test]
    fn test_serialized_dataset_decodes_back() {
        let dataset = fixtures::dataset();
        let json = serde_json::to_string(&dataset).unwrap();
        assert_eq!(MatchDataset::from_json(&json).unwrap(), dataset);

        let value = serde_json::to_value(&dataset).unwrap();
        assert_eq!(value["lastmatch"]["hometeamid"], "T3");
        assert_eq!(value["upcoming"]["starttime"], "2024-05-01T18:00:00");
    }

    #[test]
    fn test_records_by_priority() {
        let last = MatchRecord {
            match_id: Some("L".to_string()),
            ..Default::default()
        };
        let upcoming = MatchRecord {
            match_id: Some("U".to_string()),
            ..Default::default()
        };
        let dataset = MatchDataset::new(Some(last.clone()), Some(upcoming));
        let ids: Vec<_> = dataset
            .records_by_priority()
            .filter_map(|r| r.match_id.as_deref())
            .collect();
        assert_eq!(ids, ["U", "L"]);

        let dataset = MatchDataset::new(Some(last), None);
        assert_eq!(dataset.records_by_priority().count(), 1);
    }
}
