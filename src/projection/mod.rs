pub(crate) mod links;
pub(crate) mod match_info;
pub(crate) mod match_side;
pub(crate) mod team;

use crate::model::{Side, SideSummary, TeamEntry};

/// Branding of one side as reported in view attributes.
pub(crate) fn side_summary(entry: &TeamEntry) -> SideSummary {
    SideSummary {
        team_id: entry.id.clone(),
        team_name: entry.name.clone(),
        logo: entry.logo.clone(),
        position: entry.position,
    }
}

pub(crate) fn team_name(entry: &TeamEntry) -> &str {
    entry.name.as_deref().unwrap_or(crate::model::UNKNOWN_TEAM)
}

/// French label of a side, as used in sensor names.
pub(crate) fn side_label(side: Side) -> &'static str {
    match side {
        Side::Home => "Domicile",
        Side::Away => "Extérieur",
    }
}
