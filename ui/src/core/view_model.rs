//! Derived lists backing the translation picker.
//!
//! Everything here is a pure function of a [`Dataset`]: the sorted
//! translation list, the language → translations index, the sorted language
//! list and the per-language translation list. [`ViewModel`] computes the
//! first three once and answers per-language queries on demand.

use std::collections::BTreeMap;

use super::collation::compare_base;
use super::dataset::{Dataset, TranslationRecord};

/// Translation names grouped by language. Each language keeps its
/// translations in dataset order; languages iterate in byte order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageIndex {
    entries: BTreeMap<String, Vec<String>>,
}

impl LanguageIndex {
    pub fn get(&self, language: &str) -> Option<&[String]> {
        self.entries.get(language).map(Vec::as_slice)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(language, translations)| (language.as_str(), translations.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All records ordered by translation name. Stable: equal names keep their
/// dataset order.
pub fn sorted_translations(dataset: &Dataset) -> Vec<TranslationRecord> {
    let mut records = dataset.records().to_vec();
    records.sort_by(|a, b| compare_base(&a.translation, &b.translation));
    records
}

pub fn language_index(dataset: &Dataset) -> LanguageIndex {
    let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for record in dataset {
        entries
            .entry(record.language.clone())
            .or_default()
            .push(record.translation.clone());
    }
    LanguageIndex { entries }
}

pub fn sorted_languages(index: &LanguageIndex) -> Vec<String> {
    let mut languages: Vec<String> = index.languages().map(str::to_string).collect();
    languages.sort_by(|a, b| compare_base(a, b));
    languages
}

/// Sorted translations for `language`; empty when the language is unknown.
pub fn translations_for_language(index: &LanguageIndex, language: &str) -> Vec<String> {
    let mut translations = index.get(language).map(<[String]>::to_vec).unwrap_or_default();
    translations.sort_by(|a, b| compare_base(a, b));
    translations
}

/// Memoized view of a dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    sorted_translations: Vec<TranslationRecord>,
    language_index: LanguageIndex,
    sorted_languages: Vec<String>,
}

impl ViewModel {
    pub fn build(dataset: &Dataset) -> Self {
        let language_index = language_index(dataset);
        Self {
            sorted_translations: sorted_translations(dataset),
            sorted_languages: sorted_languages(&language_index),
            language_index,
        }
    }

    pub fn bundled() -> Self {
        Self::build(&Dataset::bundled())
    }

    pub fn sorted_translations(&self) -> &[TranslationRecord] {
        &self.sorted_translations
    }

    pub fn sorted_languages(&self) -> &[String] {
        &self.sorted_languages
    }

    pub fn language_index(&self) -> &LanguageIndex {
        &self.language_index
    }

    pub fn translations_for_language(&self, language: &str) -> Vec<String> {
        translations_for_language(&self.language_index, language)
    }

    /// Language a translation belongs to, if it is part of the dataset.
    pub fn language_of(&self, translation: &str) -> Option<&str> {
        self.sorted_translations
            .iter()
            .find(|record| record.translation == translation)
            .map(|record| record.language.as_str())
    }

    pub fn first_translation(&self) -> &str {
        self.sorted_translations
            .first()
            .map(|record| record.translation.as_str())
            .unwrap_or_default()
    }

    pub fn first_language(&self) -> &str {
        self.sorted_languages
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }
}
