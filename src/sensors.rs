use std::iter;
use std::sync::Arc;

use itertools::{iproduct, Itertools};
use serde::Serialize;
use strum::IntoEnumIterator;
use tokio::sync::watch;

use crate::config::EntryConfig;
use crate::model::*;
use crate::projection::{match_info, match_side, side_label, team};
use crate::store::DatasetStore;

/// Which view a sensor exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SensorKind {
    Team,
    MatchInfo {
        match_type: MatchType,
    },
    MatchSide {
        match_type: MatchType,
        side: Side,
    },
}

/// Static registration data of a sensor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SensorDescriptor {
    pub kind: SensorKind,
    pub unique_id: String,
    pub name: String,
    pub icon: &'static str,
}

/// The state of any sensor, as read from the current dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SensorState {
    Team(TeamViewResult),
    MatchInfo(MatchInfoViewResult),
    MatchSide(MatchSideViewResult),
}

impl SensorState {
    pub fn value(&self) -> &str {
        match self {
            SensorState::Team(view) => &view.value,
            SensorState::MatchInfo(view) => &view.value,
            SensorState::MatchSide(view) => &view.value,
        }
    }

    pub fn picture(&self) -> Option<&str> {
        match self {
            SensorState::Team(view) => view.picture.as_deref(),
            SensorState::MatchInfo(view) => view.picture.as_deref(),
            SensorState::MatchSide(view) => view.picture.as_deref(),
        }
    }
}

/// The main entry point: all views of one config entry.
///
/// Every read takes the store's current snapshot once and derives the view
/// from it, so a refresh in between never yields a mixed result.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use rbfa_sensors::{DatasetStore, EntryConfig, MatchType, RbfaSensors, Side};
///
/// let store = Arc::new(DatasetStore::new());
/// let sensors = RbfaSensors::new(EntryConfig::new("entry-1", "T1"), Arc::clone(&store));
///
/// store
///     .publish_json(r#"{"upcoming": {"matchid": "M1", "hometeam": "A", "hometeamid": "T1",
///                       "awayteam": "B", "awayteamid": "T2", "starttime": "2024-05-01T18:00"}}"#)
///     .unwrap();
///
/// assert_eq!(sensors.match_info(MatchType::Upcoming).value, "2024-05-01T18:00");
/// assert_eq!(sensors.match_side(MatchType::Upcoming, Side::Home).value, "A");
/// ```
#[derive(Debug, Clone)]
pub struct RbfaSensors {
    config: EntryConfig,
    store: Arc<DatasetStore>,
}

impl RbfaSensors {
    pub fn new(config: EntryConfig, store: Arc<DatasetStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &EntryConfig {
        &self.config
    }

    /// Notified after every refresh; re-read the views when it fires.
    pub fn subscribe(&self) -> watch::Receiver<Arc<MatchDataset>> {
        self.store.subscribe()
    }

    pub fn team(&self) -> TeamViewResult {
        team::team_view(&self.store.current(), &self.config)
    }

    pub fn match_info(&self, match_type: MatchType) -> MatchInfoViewResult {
        match_info::match_info_view(&self.store.current(), &self.config, match_type)
    }

    pub fn match_side(&self, match_type: MatchType, side: Side) -> MatchSideViewResult {
        match_side::match_side_view(&self.store.current(), &self.config, match_type, side)
    }

    pub fn read(&self, kind: SensorKind) -> SensorState {
        match kind {
            SensorKind::Team => SensorState::Team(self.team()),
            SensorKind::MatchInfo { match_type } => {
                SensorState::MatchInfo(self.match_info(match_type))
            }
            SensorKind::MatchSide { match_type, side } => {
                SensorState::MatchSide(self.match_side(match_type, side))
            }
        }
    }

    /// All seven sensors: the team, two match infos and four match sides.
    pub fn descriptors(&self) -> Vec<SensorDescriptor> {
        let infos = MatchType::iter().map(|match_type| SensorKind::MatchInfo { match_type });
        let sides = iproduct!(MatchType::iter(), Side::iter())
            .map(|(match_type, side)| SensorKind::MatchSide { match_type, side });
        iter::once(SensorKind::Team)
            .chain(infos)
            .chain(sides)
            .map(|kind| self.describe(kind))
            .collect_vec()
    }

    pub fn describe(&self, kind: SensorKind) -> SensorDescriptor {
        let team_id = &self.config.team_id;
        let prefix = self.config.name_prefix();
        let (unique_id, name, icon) = match kind {
            SensorKind::Team => (
                format!("{DOMAIN}_team_{team_id}"),
                self.config.team_name(),
                "mdi:shield-account",
            ),
            SensorKind::MatchInfo { match_type } => (
                format!("{DOMAIN}_{match_type}_match_{team_id}"),
                format!("{prefix} - {}", match_label(match_type)),
                match_icon(match_type),
            ),
            SensorKind::MatchSide { match_type, side } => (
                format!("{DOMAIN}_{match_type}_{side}_{team_id}"),
                format!(
                    "{prefix} - {} {}",
                    match_label(match_type),
                    side_label(side)
                ),
                side_icon(side),
            ),
        };
        SensorDescriptor {
            kind,
            unique_id,
            name,
            icon,
        }
    }
}

fn match_label(match_type: MatchType) -> &'static str {
    match match_type {
        MatchType::Last => "Dernier Match",
        MatchType::Upcoming => "Prochain Match",
    }
}

fn match_icon(match_type: MatchType) -> &'static str {
    match match_type {
        MatchType::Last => "mdi:history",
        MatchType::Upcoming => "mdi:calendar-clock",
    }
}

fn side_icon(side: Side) -> &'static str {
    match side {
        Side::Home => "mdi:home",
        Side::Away => "mdi:airplane",
    }
}
