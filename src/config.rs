use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::{RbfaError, Result};
use crate::model::de;
use crate::model::Language;

/// One of the two settings maps of a host config entry (`data` or `options`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntrySettings {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub alt_name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub language: Option<String>,
}

/// Resolved settings for the sensors of one config entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryConfig {
    pub entry_id: String,
    /// The configured team; compared against record team ids at read time.
    pub team_id: String,
    pub alt_name: Option<String>,
    pub language: Language,
}

impl EntryConfig {
    pub fn new(entry_id: impl Into<String>, team_id: impl Into<String>) -> Self {
        Self {
            entry_id: entry_id.into(),
            team_id: team_id.into(),
            alt_name: None,
            language: Language::default(),
        }
    }

    pub fn with_alt_name(mut self, alt_name: impl Into<String>) -> Self {
        self.alt_name = Some(alt_name.into()).filter(|name: &String| !name.trim().is_empty());
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Merge the `data` and `options` maps of a config entry.
    ///
    /// `options` wins for `alt_name` and `language`; the team only comes from `data`.
    #[instrument(skip(data, options))]
    pub fn from_entry(
        entry_id: &str,
        data: &EntrySettings,
        options: &EntrySettings,
    ) -> Result<Self> {
        let team_id = data.team.clone().ok_or_else(|| RbfaError::MissingTeam {
            entry_id: entry_id.to_string(),
        })?;
        let alt_name = options.alt_name.clone().or_else(|| data.alt_name.clone());
        let language = options
            .language
            .as_deref()
            .or(data.language.as_deref())
            .map(Language::from_code)
            .unwrap_or_default();
        debug!(
            team_id = %team_id,
            %language,
            has_alt_name = alt_name.is_some(),
            "loaded entry config"
        );

        Ok(Self {
            entry_id: entry_id.to_string(),
            team_id,
            alt_name,
            language,
        })
    }

    /// Same as [`EntryConfig::from_entry`], from raw JSON maps.
    pub fn from_json(
        entry_id: &str,
        data: serde_json::Value,
        options: serde_json::Value,
    ) -> Result<Self> {
        let data: EntrySettings = serde_json::from_value(data)?;
        let options: EntrySettings = serde_json::from_value(options)?;
        Self::from_entry(entry_id, &data, &options)
    }

    /// Display name of the configured team.
    pub fn team_name(&self) -> String {
        self.alt_name
            .clone()
            .unwrap_or_else(|| format!("Team {}", self.team_id))
    }

    /// Prefix for match sensor names.
    pub(crate) fn name_prefix(&self) -> &str {
        self.alt_name.as_deref().unwrap_or("Team")
    }
}
