use std::sync::Arc;

use strum::IntoEnumIterator;
use tokio::sync::watch;
use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::model::{MatchDataset, MatchType};

/// Holder of the single current [`MatchDataset`].
///
/// Publishing swaps the whole snapshot at once, so a reader holding the
/// previous `Arc` keeps a consistent view and a new read sees the new one in
/// full. Every publication notifies the receivers from [`DatasetStore::subscribe`].
#[derive(Debug)]
pub struct DatasetStore {
    current: watch::Sender<Arc<MatchDataset>>,
}

impl DatasetStore {
    /// A store holding an empty dataset.
    pub fn new() -> Self {
        Self::with_dataset(MatchDataset::default())
    }

    pub fn with_dataset(dataset: MatchDataset) -> Self {
        warn_shared_sides(&dataset);
        let (current, _) = watch::channel(Arc::new(dataset));
        Self { current }
    }

    /// Replace the current snapshot and notify subscribers.
    #[instrument(skip_all)]
    pub fn publish(&self, dataset: MatchDataset) -> Arc<MatchDataset> {
        warn_shared_sides(&dataset);
        let dataset = Arc::new(dataset);
        self.current.send_replace(Arc::clone(&dataset));
        debug!(
            has_last = dataset.last_match.is_some(),
            has_upcoming = dataset.upcoming_match.is_some(),
            subscribers = self.current.receiver_count(),
            "published dataset"
        );
        dataset
    }

    /// Decode a refresh payload and publish it.
    ///
    /// On a decode error the current snapshot stays in place.
    pub fn publish_json(&self, payload: &str) -> Result<Arc<MatchDataset>> {
        let dataset = MatchDataset::from_json(payload)?;
        Ok(self.publish(dataset))
    }

    /// The snapshot views should read right now.
    pub fn current(&self) -> Arc<MatchDataset> {
        self.current.borrow().clone()
    }

    /// Receiver that is notified after every publication.
    pub fn subscribe(&self) -> watch::Receiver<Arc<MatchDataset>> {
        self.current.subscribe()
    }
}

/// Match slots whose record has the same team id on both sides.
pub(crate) fn slots_with_shared_team(dataset: &MatchDataset) -> Vec<MatchType> {
    MatchType::iter()
        .filter(|match_type| {
            dataset
                .record(*match_type)
                .is_some_and(|record| !record.has_distinct_sides())
        })
        .collect()
}

/// Such a record is still published; views keep answering from it.
fn warn_shared_sides(dataset: &MatchDataset) {
    for match_type in slots_with_shared_team(dataset) {
        let match_id = dataset
            .record(match_type)
            .and_then(|record| record.match_id.as_deref())
            .unwrap_or_default();
        warn!(%match_type, match_id, "home and away team share the same id");
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new()
    }
}
