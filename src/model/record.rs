use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use strum::IntoEnumIterator;
use tracing::warn;

use super::common::Side;
use super::de;
use crate::error::{RbfaError, Result};

/// Zone the federation schedules matches in; every match time is wall-clock time here.
pub const MATCH_TIME_ZONE: Tz = chrono_tz::Europe::Brussels;

/// Accepted layouts for match timestamps without an explicit offset.
pub(crate) const MATCH_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Layout used when a match time is rendered as a sensor value or attribute.
pub const MATCH_TIME_DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parse a match timestamp as sent by the federation.
///
/// Input with an offset (RFC 3339) is converted to [`MATCH_TIME_ZONE`];
/// input without one is taken as already being in that zone.
pub fn parse_match_time(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Ok(time.with_timezone(&MATCH_TIME_ZONE).naive_local());
    }

    let mut parsed = NaiveDateTime::parse_from_str(value, MATCH_TIME_FORMATS[0]);
    for format in &MATCH_TIME_FORMATS[1..] {
        if parsed.is_ok() {
            break;
        }
        parsed = NaiveDateTime::parse_from_str(value, format);
    }
    parsed.map_err(|source| RbfaError::DateParse {
        value: value.to_string(),
        source,
    })
}

pub fn format_match_time(time: &NaiveDateTime) -> String {
    time.format(MATCH_TIME_DISPLAY_FORMAT).to_string()
}

/// Lenient variant for decoding: an unusable time is logged and left out.
fn match_time_or_absent(field: &'static str, value: Option<&str>) -> Option<NaiveDateTime> {
    let value = value?;
    parse_match_time(value)
        .inspect_err(|err| warn!(field, error = %err, "ignoring unparseable match time"))
        .ok()
}

/// One competing team within a match record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u16>,
    /// Only ever set on a last-match record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<u16>,
    /// Only ever set on a last-match record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalties: Option<u16>,
}

impl TeamEntry {
    /// Whether this entry is the team with the given id.
    ///
    /// An entry without id, or a blank configured id, never matches.
    pub fn is_team(&self, team_id: &str) -> bool {
        let team_id = team_id.trim();
        !team_id.is_empty() && self.id.as_deref() == Some(team_id)
    }
}

/// A single match with its two teams keyed by side.
///
/// (De)serializes in the flat layout of the refresh payload (`matchid`,
/// `hometeamid`, ...), so a serialized dataset decodes back to itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRecord", into = "RawRecord")]
pub struct MatchRecord {
    pub match_id: Option<String>,
    pub series: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub location: Option<String>,
    pub referee: Option<String>,
    pub ranking: Option<Value>,
    /// Organiser code, e.g. `ACFF` or `VV`.
    pub channel: Option<String>,
    pub home: TeamEntry,
    pub away: TeamEntry,
}

impl MatchRecord {
    /// The team playing on `side`.
    pub fn side(&self, side: Side) -> &TeamEntry {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// The side the given team plays on, if it plays in this match at all.
    pub fn side_of(&self, team_id: &str) -> Option<Side> {
        Side::iter().find(|side| self.side(*side).is_team(team_id))
    }

    /// Logo of the given team within this match.
    pub fn logo_of(&self, team_id: &str) -> Option<&str> {
        self.side_of(team_id)
            .and_then(|side| self.side(side).logo.as_deref())
    }

    /// Home and away ids differ (or at least one is unknown).
    pub fn has_distinct_sides(&self) -> bool {
        match (&self.home.id, &self.away.id) {
            (Some(home), Some(away)) => home != away,
            _ => true,
        }
    }

    /// Drop the score fields; upcoming matches never carry them.
    pub(crate) fn without_result(mut self) -> Self {
        for entry in [&mut self.home, &mut self.away] {
            entry.goals = None;
            entry.penalties = None;
        }
        self
    }
}

/// Flat record layout of the refresh payload.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RawRecord {
    #[serde(default, deserialize_with = "de::opt_text", skip_serializing_if = "Option::is_none")]
    matchid: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text", skip_serializing_if = "Option::is_none")]
    series: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text", skip_serializing_if = "Option::is_none")]
    starttime: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text", skip_serializing_if = "Option::is_none")]
    endtime: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text", skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text", skip_serializing_if = "Option::is_none")]
    referee: Option<String>,
    #[serde(default, deserialize_with = "de::opt_structured", skip_serializing_if = "Option::is_none")]
    ranking: Option<Value>,
    #[serde(default, deserialize_with = "de::opt_text", skip_serializing_if = "Option::is_none")]
    channel: Option<String>,

    #[serde(default, deserialize_with = "de::opt_text", skip_serializing_if = "Option::is_none")]
    hometeamid: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text", skip_serializing_if = "Option::is_none")]
    hometeam: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text", skip_serializing_if = "Option::is_none")]
    hometeamlogo: Option<String>,
    #[serde(default, deserialize_with = "de::opt_count", skip_serializing_if = "Option::is_none")]
    hometeamposition: Option<u16>,
    #[serde(default, deserialize_with = "de::opt_count", skip_serializing_if = "Option::is_none")]
    hometeamgoals: Option<u16>,
    #[serde(default, deserialize_with = "de::opt_count", skip_serializing_if = "Option::is_none")]
    hometeampenalties: Option<u16>,

    #[serde(default, deserialize_with = "de::opt_text", skip_serializing_if = "Option::is_none")]
    awayteamid: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text", skip_serializing_if = "Option::is_none")]
    awayteam: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text", skip_serializing_if = "Option::is_none")]
    awayteamlogo: Option<String>,
    #[serde(default, deserialize_with = "de::opt_count", skip_serializing_if = "Option::is_none")]
    awayteamposition: Option<u16>,
    #[serde(default, deserialize_with = "de::opt_count", skip_serializing_if = "Option::is_none")]
    awayteamgoals: Option<u16>,
    #[serde(default, deserialize_with = "de::opt_count", skip_serializing_if = "Option::is_none")]
    awayteampenalties: Option<u16>,
}

impl From<RawRecord> for MatchRecord {
    fn from(raw: RawRecord) -> Self {
        MatchRecord {
            match_id: raw.matchid,
            series: raw.series,
            start_time: match_time_or_absent("starttime", raw.starttime.as_deref()),
            end_time: match_time_or_absent("endtime", raw.endtime.as_deref()),
            location: raw.location,
            referee: raw.referee,
            ranking: raw.ranking,
            channel: raw.channel,
            home: TeamEntry {
                id: raw.hometeamid,
                name: raw.hometeam,
                logo: raw.hometeamlogo,
                position: raw.hometeamposition,
                goals: raw.hometeamgoals,
                penalties: raw.hometeampenalties,
            },
            away: TeamEntry {
                id: raw.awayteamid,
                name: raw.awayteam,
                logo: raw.awayteamlogo,
                position: raw.awayteamposition,
                goals: raw.awayteamgoals,
                penalties: raw.awayteampenalties,
            },
        }
    }
}

impl From<MatchRecord> for RawRecord {
    fn from(record: MatchRecord) -> Self {
        let time = |time: Option<NaiveDateTime>| {
            time.map(|time| time.format(MATCH_TIME_FORMATS[0]).to_string())
        };
        RawRecord {
            matchid: record.match_id,
            series: record.series,
            starttime: time(record.start_time),
            endtime: time(record.end_time),
            location: record.location,
            referee: record.referee,
            ranking: record.ranking,
            channel: record.channel,
            hometeamid: record.home.id,
            hometeam: record.home.name,
            hometeamlogo: record.home.logo,
            hometeamposition: record.home.position,
            hometeamgoals: record.home.goals,
            hometeampenalties: record.home.penalties,
            awayteamid: record.away.id,
            awayteam: record.away.name,
            awayteamlogo: record.away.logo,
            awayteamposition: record.away.position,
            awayteamgoals: record.away.goals,
            awayteampenalties: record.away.penalties,
        }
    }
}

/// A match slot of the payload: null, `false` and `{}` all mean "no match".
pub(crate) fn opt_record<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<MatchRecord>, D::Error> {
    let value = match Option::<Value>::deserialize(deserializer)? {
        Some(value) if de::is_present(&value) => value,
        _ => return Ok(None),
    };
    MatchRecord::deserialize(value)
        .map(Some)
        .map_err(D::Error::custom)
}
