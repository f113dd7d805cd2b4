//! Locale-aware name ordering.
//!
//! Translation and language names are compared at primary strength: case and
//! diacritics do not affect order ("Évangile" sorts with "evangile"). The
//! collator is built once per thread from ICU4X compiled data; if that ever
//! fails we fall back to a case-folded comparison so sorting still works.

use std::cmp::Ordering;

use dioxus::logger::tracing::warn;
use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};

thread_local! {
    static BASE_COLLATOR: Option<CollatorBorrowed<'static>> = build_base_collator();
}

fn build_base_collator() -> Option<CollatorBorrowed<'static>> {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Primary);
    match Collator::try_new(Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(err) => {
            warn!("[collation] collator unavailable ({err}); using case-folded ordering");
            None
        }
    }
}

/// Compare two names ignoring case and diacritics.
pub fn compare_base(a: &str, b: &str) -> Ordering {
    BASE_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => compare_folded(a, b),
    })
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
