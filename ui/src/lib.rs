//! Shared UI crate for Versepick. The picker logic, the lead-form bridge and
//! every view live here; the `web` and `desktop` crates only launch them.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod lead_form;
pub mod picker;
pub mod views;

pub mod components {
    // Brand bar + interface locale switcher (components/app_header.rs)
    pub mod app_header;
    pub use app_header::AppHeader;
}

/// Shared theme, linked by the web shell and inlined by the desktop shell.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
