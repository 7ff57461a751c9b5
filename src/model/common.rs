use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::{EnumIter, EnumString};

/// Integration domain, used as prefix of every sensor identity.
pub const DOMAIN: &str = "rbfa";

/// Which of the two match slots of a dataset a view reads.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchType {
    Last,
    Upcoming,
}

/// Home or away designation of a team within a match record.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// Language used for rbfa.be links.
///
/// Unknown codes are kept verbatim so they still show up in the link path,
/// but their URL keyword falls back to the Dutch one.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    Nl,
    Fr,
    En,
    #[strum(default)]
    Other(String),
}

impl Language {
    /// Parse a language code; blank input yields the default language.
    pub fn from_code(code: &str) -> Self {
        let code = code.trim();
        if code.is_empty() {
            return Self::default();
        }
        Language::from_str(code).unwrap_or_else(|_| Self::Other(code.to_string()))
    }

    pub fn code(&self) -> &str {
        match self {
            Language::Nl => "nl",
            Language::Fr => "fr",
            Language::En => "en",
            Language::Other(code) => code,
        }
    }

    /// Path segment rbfa.be uses for a match page in this language.
    pub fn url_keyword(&self) -> &'static str {
        match self {
            Language::Nl | Language::Other(_) => "wedstrijd",
            Language::Fr => "match",
            Language::En => "game",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Language::from_code(&code))
    }
}
