//! Interface strings, loaded from the embedded `i18n/<locale>/versepick-ui.ftl`
//! bundles. Call [`init`] once at startup, then look strings up with [`t!`](crate::t).
//!
//! These are interface locales only; the languages offered by the picker come
//! from the translation dataset and are never localized.
use std::collections::BTreeSet;
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `fl!` against the shared [`LOADER`], e.g.
/// `t!("picker-translation-option", translation = "KJV", language = "English")`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file must be `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "versepick-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Select the best embedded locale for the OS or browser. Runs once.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!("[i18n] Failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch the interface locale. An unparseable tag is ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        debug!(%tag, "[i18n] ignoring unparseable locale tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded interface locales, sorted.
pub fn available_languages() -> Vec<String> {
    Localizations::iter()
        .filter_map(|path| path.split_once('/').map(|(locale, _)| locale.to_string()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
