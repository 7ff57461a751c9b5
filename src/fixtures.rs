use serde_json::json;

use crate::config::EntryConfig;
use crate::model::{parse_match_time, MatchDataset, MatchRecord, TeamEntry};

pub(crate) fn entry(id: &str, name: &str) -> TeamEntry {
    TeamEntry {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        logo: Some(format!("https://logos.example/{id}.png")),
        ..Default::default()
    }
}

/// Upcoming T1 (home, "A") vs T2 (away, "B").
pub(crate) fn upcoming_record() -> MatchRecord {
    MatchRecord {
        match_id: Some("M1".to_string()),
        series: Some("2e Provinciale B".to_string()),
        start_time: parse_match_time("2024-05-01T18:00").ok(),
        home: TeamEntry {
            position: Some(3),
            ..entry("T1", "A")
        },
        away: TeamEntry {
            position: Some(7),
            ..entry("T2", "B")
        },
        ..Default::default()
    }
}

/// Played T3 (home, "C") vs T1 (away, "A"), 2-2 and 4-5 after penalties.
pub(crate) fn last_record() -> MatchRecord {
    MatchRecord {
        match_id: Some("M0".to_string()),
        series: Some("2e Provinciale B".to_string()),
        start_time: parse_match_time("2024-04-24T20:00").ok(),
        end_time: parse_match_time("2024-04-24T21:45").ok(),
        location: Some("Stade Communal".to_string()),
        referee: Some("J. Peeters".to_string()),
        ranking: Some(json!([{"position": 1, "team": "C"}, {"position": 2, "team": "A"}])),
        channel: Some("acff".to_string()),
        home: TeamEntry {
            goals: Some(2),
            penalties: Some(4),
            ..entry("T3", "C")
        },
        away: TeamEntry {
            goals: Some(2),
            penalties: Some(5),
            ..entry("T1", "A")
        },
    }
}

pub(crate) fn dataset() -> MatchDataset {
    MatchDataset::new(Some(last_record()), Some(upcoming_record()))
}

pub(crate) fn config() -> EntryConfig {
    EntryConfig::new("entry-1", "T1")
}
