use tracing::debug;

use crate::config::EntryConfig;
use crate::model::{
    DeviceIdentity, MatchDataset, MatchSideAttributes, MatchSideViewResult, MatchType, Side,
    SideResult, NO_TEAM, UNAVAILABLE,
};
use crate::projection::{side_summary, team_name};

/// One side of the last or upcoming match, framed against the configured team.
pub(crate) fn match_side_view(
    dataset: &MatchDataset,
    config: &EntryConfig,
    match_type: MatchType,
    side: Side,
) -> MatchSideViewResult {
    let device = DeviceIdentity::for_entry(&config.entry_id);

    let Some(record) = dataset.record(match_type) else {
        debug!(%match_type, %side, "no match record available");
        return MatchSideViewResult {
            value: NO_TEAM.to_string(),
            picture: None,
            attributes: MatchSideAttributes {
                match_type,
                side,
                status: Some(UNAVAILABLE),
                team: None,
                series: None,
                result: None,
                is_my_team: None,
            },
            device,
        };
    };

    let entry = record.side(side);
    let result = (match_type == MatchType::Last).then(|| SideResult {
        score: entry.goals,
        penalties: entry.penalties,
    });

    MatchSideViewResult {
        value: team_name(entry).to_string(),
        picture: entry.logo.clone(),
        attributes: MatchSideAttributes {
            match_type,
            side,
            status: None,
            team: Some(side_summary(entry)),
            series: record.series.clone(),
            result,
            is_my_team: Some(entry.is_team(&config.team_id)),
        },
        device,
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::fixtures;
    use crate::model::{MatchRecord, TeamEntry};

    #[test]
    fn test_match_side_scenario() {
        let dataset = fixtures::dataset();
        let config = fixtures::config();

        let home = match_side_view(&dataset, &config, MatchType::Upcoming, Side::Home);
        assert_eq!(home.value, "A");
        assert_eq!(home.attributes.is_my_team, Some(true));
        assert_eq!(home.picture.as_deref(), Some("https://logos.example/T1.png"));

        let away = match_side_view(&dataset, &config, MatchType::Upcoming, Side::Away);
        assert_eq!(away.value, "B");
        assert_eq!(away.attributes.is_my_team, Some(false));
        let team = away.attributes.team.unwrap();
        assert_eq!(team.team_id.as_deref(), Some("T2"));
        assert_eq!(team.position, Some(7));
    }

    #[test]
    fn test_sides_never_share_team_id() {
        let dataset = fixtures::dataset();
        let config = fixtures::config();
        for match_type in MatchType::iter() {
            let record = dataset.record(match_type).unwrap();
            assert!(record.has_distinct_sides());

            let ids: Vec<_> = Side::iter()
                .map(|side| match_side_view(&dataset, &config, match_type, side))
                .map(|view| view.attributes.team.and_then(|t| t.team_id))
                .collect();
            assert_ne!(ids[0], ids[1], "{match_type} sides report the same team");
        }
    }

    #[test]
    fn test_is_my_team_exactly_one_side() {
        let dataset = fixtures::dataset();
        for (team_id, expected) in [("T1", 1), ("T2", 1), ("T9", 0), ("", 0)] {
            let config = EntryConfig::new("entry-1", team_id);
            let mine = Side::iter()
                .filter(|side| {
                    match_side_view(&dataset, &config, MatchType::Upcoming, *side)
                        .attributes
                        .is_my_team
                        == Some(true)
                })
                .count();
            assert_eq!(mine, expected, "team {team_id:?}");
        }
    }

    #[test]
    fn test_non_text_team_ids_never_match() {
        let dataset = MatchDataset::from_value(serde_json::json!({
            "upcoming": {
                "matchid": "M1",
                "hometeam": "A",
                "hometeamid": ["T1"],
                "awayteam": "B",
                "awayteamid": {"id": "T1"}
            },
            "lastmatch": {"matchid": "M0", "hometeamid": true, "awayteamid": "T2"}
        }))
        .unwrap();
        let config = fixtures::config();

        for match_type in MatchType::iter() {
            for side in Side::iter() {
                let view = match_side_view(&dataset, &config, match_type, side);
                assert_eq!(
                    view.attributes.is_my_team,
                    Some(false),
                    "{match_type} {side}"
                );
            }
        }
        let home = match_side_view(&dataset, &config, MatchType::Upcoming, Side::Home);
        assert_eq!(home.value, "A");
        assert_eq!(home.attributes.team.and_then(|t| t.team_id), None);
    }

    #[test]
    fn test_score_keys_only_for_last() {
        // upcoming record that still carries goal fields
        let mut upcoming = fixtures::upcoming_record();
        upcoming.home.goals = Some(1);
        let dataset = MatchDataset::new(Some(fixtures::last_record()), Some(upcoming));
        let config = fixtures::config();

        let last = match_side_view(&dataset, &config, MatchType::Last, Side::Away);
        assert_eq!(
            last.attributes.result,
            Some(SideResult {
                score: Some(2),
                penalties: Some(5)
            })
        );
        let json = serde_json::to_value(&last.attributes).unwrap();
        assert_eq!(json["score"], 2);
        assert_eq!(json["penalties"], 5);

        let upcoming = match_side_view(&dataset, &config, MatchType::Upcoming, Side::Home);
        assert_eq!(upcoming.attributes.result, None);
        let json = serde_json::to_value(&upcoming.attributes).unwrap();
        assert!(json.get("score").is_none());
        assert!(json.get("penalties").is_none());
    }

    #[test]
    fn test_score_keys_present_when_unknown() {
        let last = MatchRecord {
            home: TeamEntry {
                id: Some("T1".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let dataset = MatchDataset::new(Some(last), None);
        let view = match_side_view(&dataset, &fixtures::config(), MatchType::Last, Side::Home);

        assert_eq!(view.value, "?");
        let json = serde_json::to_value(&view.attributes).unwrap();
        assert!(json["score"].is_null());
        assert!(json.as_object().unwrap().contains_key("score"));
        assert!(json.as_object().unwrap().contains_key("penalties"));
        assert_eq!(json["is_my_team"], true);
    }

    #[test]
    fn test_match_side_missing_record() {
        let view = match_side_view(
            &MatchDataset::default(),
            &fixtures::config(),
            MatchType::Upcoming,
            Side::Away,
        );

        assert_eq!(view.value, NO_TEAM);
        assert_eq!(view.picture, None);
        assert_eq!(view.attributes.status, Some(UNAVAILABLE));
        let json = serde_json::to_value(&view.attributes).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["match_type", "side", "status"]);
    }
}
