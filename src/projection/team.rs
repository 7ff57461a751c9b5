use crate::config::EntryConfig;
use crate::model::{DeviceIdentity, MatchDataset, TeamAttributes, TeamViewResult, INTEGRATION};
use crate::projection::links;

/// Identity and branding of the configured team.
///
/// Logo, series and channel come from the upcoming match when there is one,
/// otherwise from the last match. Only that first record is consulted.
pub(crate) fn team_view(dataset: &MatchDataset, config: &EntryConfig) -> TeamViewResult {
    let record = dataset.records_by_priority().next();

    TeamViewResult {
        value: config.team_name(),
        picture: record
            .and_then(|r| r.logo_of(&config.team_id))
            .map(str::to_string),
        attributes: TeamAttributes {
            team_id: config.team_id.clone(),
            integration: INTEGRATION,
            series: record.and_then(|r| r.series.clone()),
            channel: record.and_then(links::channel_info),
        },
        device: DeviceIdentity::for_entry(&config.entry_id),
    }
}
