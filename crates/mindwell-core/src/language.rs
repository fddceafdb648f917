use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Languages the scorer has keyword lists and templates for.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Language {
    #[default]
    En,
    /// Sinhala.
    Si,
    /// Tamil.
    Ta,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Si, Language::Ta];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Si => "si",
            Language::Ta => "ta",
        }
    }

    /// Lenient lookup used for caller-declared tags.
    ///
    /// Only the first two characters are considered (`"en-US"` is English)
    /// and anything unrecognized falls back to English.
    pub fn from_tag(tag: &str) -> Language {
        tag.parse().unwrap_or_default()
    }

    /// Guess the language of a message from its script.
    ///
    /// Any Sinhala character wins, then any Tamil character; plain Latin
    /// text (or text with no letters at all) is treated as English.
    pub fn detect(text: &str) -> Language {
        let mut tamil = false;
        for c in text.chars() {
            match c {
                '\u{0D80}'..='\u{0DFF}' => return Language::Si,
                '\u{0B80}'..='\u{0BFF}' => tamil = true,
                _ => {}
            }
        }
        if tamil { Language::Ta } else { Language::En }
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let prefix: String = tag.trim().chars().take(2).collect::<String>().to_lowercase();
        match prefix.as_str() {
            "en" => Ok(Language::En),
            "si" => Ok(Language::Si),
            "ta" => Ok(Language::Ta),
            _ => Err(CoreError::UnsupportedLanguage(tag.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
