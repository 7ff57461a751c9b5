use serde::Serialize;
use serde_json::Value;
use strum_macros::{EnumIter, EnumString};

use crate::error::{RbfaError, Result};

/// Persisted GraphQL operations a refresh layer issues against the federation API.
///
/// This is a constant table only; nothing here touches the network.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumString,
    EnumIter,
    strum_macros::Display,
)]
pub enum Operation {
    GetTeam,
    GetTeamCalendar,
    #[strum(serialize = "getClubInfo")]
    #[serde(rename = "getClubInfo")]
    GetClubInfo,
    GetUpcomingMatch,
    GetMatchDetail,
    GetSeriesRankings,
}

impl Operation {
    /// Name of the single query variable.
    pub fn variable(&self) -> &'static str {
        match self {
            Operation::GetTeam | Operation::GetTeamCalendar | Operation::GetUpcomingMatch => {
                "teamId"
            }
            Operation::GetClubInfo => "clubId",
            Operation::GetMatchDetail => "matchId",
            Operation::GetSeriesRankings => "seriesId",
        }
    }

    /// sha256 of the persisted query.
    pub fn hash(&self) -> &'static str {
        match self {
            Operation::GetTeam => "66888f01d376a6484c0c6824e5f266cb3c3513ab83964e50e0a7c30b8fddb4fa",
            Operation::GetTeamCalendar => {
                "3f0441e6723b9852b4f0cff2c872f4aa674c5de2d23589efc70c7a4ffb7f6383"
            }
            Operation::GetClubInfo => {
                "7c1bd99f0001a20d60208c60d4fb7c99aefdb810b9ee1c4de21a6d6ba4804b58"
            }
            Operation::GetUpcomingMatch => {
                "7e0aa25b6dbe45cede5f1a16320b091be9078a7b9d8cb9cb1402fc35292696fb"
            }
            Operation::GetMatchDetail => {
                "cd8867b845c206fe7aa75c1ebf7b53cbda0ff030253a45e2e2b4bcc13ee46c9a"
            }
            Operation::GetSeriesRankings => {
                "7d13cbe2a17d6d5e7a3a0c1039d09c2e0ca326a454ec6fd2a471aa1fa2cf73e5"
            }
        }
    }

    /// Top-level field a valid response must carry.
    pub fn required_field(&self) -> &'static str {
        match self {
            Operation::GetTeam => "team",
            Operation::GetTeamCalendar => "teamCalendar",
            Operation::GetClubInfo => "clubInfo",
            Operation::GetUpcomingMatch => "upcomingMatch",
            Operation::GetMatchDetail => "matchDetail",
            Operation::GetSeriesRankings => "seriesRankings",
        }
    }

    /// Pull the required field out of a response, under `data` or at the top level.
    pub fn extract<'a>(&self, response: &'a Value) -> Result<&'a Value> {
        let field = self.required_field();
        response
            .get("data")
            .and_then(|data| data.get(field))
            .or_else(|| response.get(field))
            .filter(|value| !value.is_null())
            .ok_or_else(|| RbfaError::MissingField {
                operation: self.to_string(),
                field,
            })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_operation_names() {
        assert_eq!(Operation::GetClubInfo.to_string(), "getClubInfo");
        assert_eq!(Operation::GetTeam.to_string(), "GetTeam");
        assert_eq!(
            "getClubInfo".parse::<Operation>().ok(),
            Some(Operation::GetClubInfo)
        );
    }

    #[test]
    fn test_operation_table() {
        for operation in Operation::iter() {
            assert_eq!(operation.hash().len(), 64, "{operation}");
            assert!(operation.hash().chars().all(|c| c.is_ascii_hexdigit()));
        }
        assert_eq!(Operation::GetMatchDetail.variable(), "matchId");
        assert_eq!(Operation::GetSeriesRankings.variable(), "seriesId");
        assert_eq!(Operation::GetClubInfo.variable(), "clubId");
        assert_eq!(Operation::GetUpcomingMatch.required_field(), "upcomingMatch");
    }

    #[test]
    fn test_extract() {
        let response = json!({"data": {"matchDetail": {"id": "M1"}}});
        let detail = Operation::GetMatchDetail.extract(&response).unwrap();
        assert_eq!(detail["id"], "M1");

        let response = json!({"team": {"id": "T1"}});
        assert!(Operation::GetTeam.extract(&response).is_ok());

        let response = json!({"data": {"upcomingMatch": null}});
        let err = Operation::GetUpcomingMatch.extract(&response).unwrap_err();
        assert_eq!(
            err.to_string(),
            "response for GetUpcomingMatch is missing required field upcomingMatch"
        );
    }
}
