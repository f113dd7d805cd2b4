//! Static translation list shipped with the app.
//!
//! The list is embedded at compile time from `assets/data/translations.json`
//! and parsed once per view model. A broken file never takes the form down:
//! [`Dataset::bundled`] logs the problem and falls back to an empty list.

use std::collections::HashSet;

use dioxus::logger::tracing::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUNDLED_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/data/translations.json"
));

/// One selectable Bible translation and the language it is written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    pub translation: String,
    pub language: String,
}

impl TranslationRecord {
    pub fn new(translation: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            translation: translation.into(),
            language: language.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("malformed translation list: {0}")]
    Json(#[from] serde_json::Error),
    #[error("record {index} has an empty translation name")]
    EmptyTranslation { index: usize },
    #[error("record {index} has an empty language name")]
    EmptyLanguage { index: usize },
    #[error("translation `{0}` is listed more than once")]
    DuplicateTranslation(String),
}

/// Ordered, validated list of translation records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<TranslationRecord>,
}

impl Dataset {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate records: names are trimmed, must be non-empty, and each
    /// translation may appear only once.
    pub fn from_records(records: Vec<TranslationRecord>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut cleaned = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let translation = record.translation.trim().to_string();
            let language = record.language.trim().to_string();

            if translation.is_empty() {
                return Err(DatasetError::EmptyTranslation { index });
            }
            if language.is_empty() {
                return Err(DatasetError::EmptyLanguage { index });
            }
            if !seen.insert(translation.clone()) {
                return Err(DatasetError::DuplicateTranslation(translation));
            }

            cleaned.push(TranslationRecord {
                translation,
                language,
            });
        }

        Ok(Self { records: cleaned })
    }

    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let records: Vec<TranslationRecord> = serde_json::from_str(raw)?;
        Self::from_records(records)
    }

    /// The embedded list, or an empty dataset if it fails to parse.
    pub fn bundled() -> Self {
        match Self::from_json(BUNDLED_JSON) {
            Ok(dataset) => dataset,
            Err(err) => {
                warn!("[dataset] bundled translation list rejected ({err}); continuing empty");
                Self::empty()
            }
        }
    }

    pub fn records(&self) -> &[TranslationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TranslationRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a TranslationRecord;
    type IntoIter = std::slice::Iter<'a, TranslationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
