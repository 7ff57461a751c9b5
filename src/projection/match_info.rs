use tracing::debug;

use crate::config::EntryConfig;
use crate::model::{
    format_match_time, DeviceIdentity, MatchDataset, MatchInfoAttributes, MatchInfoViewResult,
    MatchRecord, MatchType, DATE_UNKNOWN, NO_MATCH,
};
use crate::projection::{links, side_summary, team_name};

/// Match-level facts of the last or upcoming match.
pub(crate) fn match_info_view(
    dataset: &MatchDataset,
    config: &EntryConfig,
    match_type: MatchType,
) -> MatchInfoViewResult {
    let device = DeviceIdentity::for_entry(&config.entry_id);
    let language = config.language.clone();

    let Some(record) = dataset.record(match_type) else {
        debug!(%match_type, "no match record available");
        return MatchInfoViewResult {
            value: NO_MATCH.to_string(),
            picture: None,
            summary: None,
            attributes: MatchInfoAttributes::unavailable(match_type, language),
            device,
        };
    };

    let value = record
        .start_time
        .as_ref()
        .map(format_match_time)
        .unwrap_or_else(|| DATE_UNKNOWN.to_string());
    let match_url = record
        .match_id
        .as_deref()
        .map(|id| links::match_url(&language, id));

    MatchInfoViewResult {
        value,
        picture: record.logo_of(&config.team_id).map(str::to_string),
        summary: Some(summary(record, match_type)),
        attributes: MatchInfoAttributes {
            match_type,
            language,
            status: None,
            match_id: record.match_id.clone(),
            series: record.series.clone(),
            date: record.start_time,
            start_time: record.start_time,
            end_time: record.end_time,
            location: record.location.clone(),
            referee: record.referee.clone(),
            match_url,
            ranking: record.ranking.clone(),
            channel: links::channel_info(record),
            home: Some(side_summary(&record.home)),
            away: Some(side_summary(&record.away)),
        },
        device,
    }
}

/// `home 2 - 1 away` for a played match with a known score, `home vs away` otherwise.
fn summary(record: &MatchRecord, match_type: MatchType) -> String {
    let home = team_name(&record.home);
    let away = team_name(&record.away);

    if match_type == MatchType::Last {
        if let (Some(home_goals), Some(away_goals)) = (record.home.goals, record.away.goals) {
            let line = format!("{home} {home_goals} - {away_goals} {away}");
            return match (record.home.penalties, record.away.penalties) {
                (Some(home_pens), Some(away_pens)) => {
                    format!("{line} ({home_pens} - {away_pens} pen.)")
                }
                _ => line,
            };
        }
    }
    format!("{home} vs {away}")
}
