//! Read-only views of RBFA football data for home-automation sensors.
//!
//! A refresh layer publishes a [`MatchDataset`] (last and upcoming match of a
//! team) into a [`DatasetStore`]; [`RbfaSensors`] derives the team, match and
//! per-side views from whatever snapshot is current.

pub use config::{EntryConfig, EntrySettings};
pub use error::{RbfaError, Result};
pub use model::*;
pub use query::Operation;
pub use sensors::{RbfaSensors, SensorDescriptor, SensorKind, SensorState};
pub use store::DatasetStore;

mod config;
mod error;
#[cfg(test)]
mod fixtures;
mod model;
pub(crate) mod projection;
mod query;
mod sensors;
mod store;
