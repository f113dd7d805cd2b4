//! Translation picker: choose a Bible translation directly or via its language.

mod view;

pub use view::{use_language_translations, TranslationPicker};
