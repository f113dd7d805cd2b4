//! Settings for the embedded lead-capture form.
//!
//! Loaded from `assets/config/lead-form.json` at compile time. Any field may
//! be omitted; missing fields take the defaults below. The portal and form
//! ids ship blank, which keeps the widget switched off until a deployment
//! fills them in.

use dioxus::logger::tracing::warn;
use serde::{Deserialize, Serialize};

const BUNDLED_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/config/lead-form.json"
));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadFormConfig {
    /// Id of the `<script>` tag; guards against injecting the widget twice.
    pub script_id: String,
    pub script_src: String,
    /// Global object the widget script installs (`window.<name>`).
    pub widget_global: String,
    pub region: String,
    pub portal_id: String,
    pub form_id: String,
    /// Id of the element the form is rendered into.
    pub container_id: String,
    pub primary_field: String,
    pub secondary_field: String,
}

impl Default for LeadFormConfig {
    fn default() -> Self {
        Self {
            script_id: "lead-form-widget-loader".to_string(),
            script_src: "https://js.hsforms.net/forms/embed/v2.js".to_string(),
            widget_global: "hbspt".to_string(),
            region: "na1".to_string(),
            portal_id: String::new(),
            form_id: String::new(),
            container_id: "lead-form".to_string(),
            primary_field: "bible_translation".to_string(),
            secondary_field: "bible_translation_for_language".to_string(),
        }
    }
}

impl LeadFormConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_JSON).unwrap_or_else(|err| {
            warn!("[lead-form] bundled config rejected ({err}); using defaults");
            Self::default()
        })
    }

    pub fn target_selector(&self) -> String {
        format!("#{}", self.container_id)
    }

    /// The widget needs both ids before it can render anything.
    pub fn is_configured(&self) -> bool {
        !self.portal_id.trim().is_empty() && !self.form_id.trim().is_empty()
    }
}
