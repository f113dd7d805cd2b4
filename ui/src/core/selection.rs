//! Picker selection state and its transition rules.
//!
//! Two independent axes: the picker mode (by translation / by language) and
//! the three current selections. Switching mode never touches the
//! selections, so flipping back restores whatever was last chosen there.
//! Changing the language re-derives the per-language translation.

use dioxus::logger::tracing::debug;

use super::view_model::ViewModel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    #[default]
    ByTranslation,
    ByLanguage,
}

impl SelectionMode {
    /// Value used by the mode radio buttons.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ByTranslation => "translation",
            Self::ByLanguage => "language",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "translation" => Some(Self::ByTranslation),
            "language" => Some(Self::ByLanguage),
            _ => None,
        }
    }
}

/// The two strings forwarded into the embedded lead form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFormValues {
    pub primary: String,
    pub secondary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub mode: SelectionMode,
    pub selected_translation: String,
    pub selected_language: String,
    pub selected_language_translation: String,
}

impl SelectionState {
    /// Start in translation mode with the first entry of every sorted list.
    pub fn initial(view_model: &ViewModel) -> Self {
        let selected_language = view_model.first_language().to_string();
        let selected_language_translation = first_or_empty(view_model, &selected_language);
        Self {
            mode: SelectionMode::ByTranslation,
            selected_translation: view_model.first_translation().to_string(),
            selected_language,
            selected_language_translation,
        }
    }

    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
    }

    pub fn select_translation(&mut self, translation: impl Into<String>) {
        self.selected_translation = translation.into();
    }

    /// Select a language and reset the per-language translation to the first
    /// entry of that language's sorted list (empty if it has none).
    pub fn select_language(&mut self, view_model: &ViewModel, language: impl Into<String>) {
        self.selected_language = language.into();
        self.selected_language_translation = first_or_empty(view_model, &self.selected_language);
        debug!(
            language = %self.selected_language,
            translation = %self.selected_language_translation,
            "[selection] language changed"
        );
    }

    pub fn select_language_translation(&mut self, translation: impl Into<String>) {
        self.selected_language_translation = translation.into();
    }

    pub fn lead_form_values(&self) -> LeadFormValues {
        match self.mode {
            SelectionMode::ByTranslation => LeadFormValues {
                primary: self.selected_translation.clone(),
                secondary: String::new(),
            },
            SelectionMode::ByLanguage => LeadFormValues {
                primary: self.selected_language.clone(),
                secondary: self.selected_language_translation.clone(),
            },
        }
    }
}

fn first_or_empty(view_model: &ViewModel, language: &str) -> String {
    view_model
        .translations_for_language(language)
        .into_iter()
        .next()
        .unwrap_or_default()
}
