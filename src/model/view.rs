use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::common::{Language, MatchType, Side, DOMAIN};
use super::record::MATCH_TIME_DISPLAY_FORMAT;

/// Value of a match info view when its slot holds no match.
pub const NO_MATCH: &str = "Aucun match";
/// Value of a match info view when the match has no kick-off time.
pub const DATE_UNKNOWN: &str = "Date inconnue";
/// Value of a side view when its slot holds no match.
pub const NO_TEAM: &str = "Aucune équipe";
/// Stand-in for a team name missing from a record.
pub const UNKNOWN_TEAM: &str = "?";
/// `status` attribute of a view whose slot holds no match.
pub const UNAVAILABLE: &str = "unavailable";
pub const INTEGRATION: &str = "RBFA";

/// Host device every sensor of one config entry is grouped under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceIdentity {
    pub identifiers: (String, String),
    pub name: String,
    pub manufacturer: String,
    pub model: String,
}

impl DeviceIdentity {
    pub fn for_entry(entry_id: &str) -> Self {
        Self {
            identifiers: (DOMAIN.to_string(), entry_id.to_string()),
            name: INTEGRATION.to_string(),
            manufacturer: INTEGRATION.to_string(),
            model: "Football Matches".to_string(),
        }
    }
}

/// Organiser channel of a match with its logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelInfo {
    pub channel: String,
    #[serde(rename = "channel_logo")]
    pub channel_logo_url: String,
}

/// Identity and branding of one team as seen in a match record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SideSummary {
    pub team_id: Option<String>,
    pub team_name: Option<String>,
    pub logo: Option<String>,
    pub position: Option<u16>,
}

/// Score of one side of a finished match.
///
/// Both keys are always serialized, even when unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SideResult {
    pub score: Option<u16>,
    pub penalties: Option<u16>,
}

/// State of the configured-team sensor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamViewResult {
    pub value: String,
    pub picture: Option<String>,
    pub attributes: TeamAttributes,
    pub device: DeviceIdentity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamAttributes {
    pub team_id: String,
    pub integration: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(flatten)]
    pub channel: Option<ChannelInfo>,
}

/// State of a match-level sensor (last or upcoming).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchInfoViewResult {
    pub value: String,
    pub picture: Option<String>,
    /// Score line of a played match, or `home vs away`.
    pub summary: Option<String>,
    pub attributes: MatchInfoAttributes,
    pub device: DeviceIdentity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchInfoAttributes {
    pub match_type: MatchType,
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(serialize_with = "display_time", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDateTime>,
    #[serde(serialize_with = "display_time", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(serialize_with = "display_time", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_url: Option<String>,
    #[serde(rename = "classement", skip_serializing_if = "Option::is_none")]
    pub ranking: Option<Value>,
    #[serde(flatten)]
    pub channel: Option<ChannelInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<SideSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away: Option<SideSummary>,
}

impl MatchInfoAttributes {
    pub(crate) fn unavailable(match_type: MatchType, language: Language) -> Self {
        Self {
            match_type,
            language,
            status: Some(UNAVAILABLE),
            match_id: None,
            series: None,
            date: None,
            start_time: None,
            end_time: None,
            location: None,
            referee: None,
            match_url: None,
            ranking: None,
            channel: None,
            home: None,
            away: None,
        }
    }
}

/// Times are shown the way the sensor value shows them.
fn display_time<S: Serializer>(
    time: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match time {
        Some(time) => serializer.collect_str(&time.format(MATCH_TIME_DISPLAY_FORMAT)),
        None => serializer.serialize_none(),
    }
}

/// State of one side's sensor for a match type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSideViewResult {
    pub value: String,
    pub picture: Option<String>,
    pub attributes: MatchSideAttributes,
    pub device: DeviceIdentity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSideAttributes {
    pub match_type: MatchType,
    pub side: Side,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    #[serde(flatten)]
    pub team: Option<SideSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    /// Present for last matches only.
    #[serde(flatten)]
    pub result: Option<SideResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_my_team: Option<bool>,
}
