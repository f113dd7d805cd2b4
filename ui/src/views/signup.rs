use dioxus::prelude::*;

use crate::core::{SelectionState, ViewModel};
use crate::lead_form::{use_lead_form, LeadFormConfig};
use crate::picker::TranslationPicker;

/// Contact page: translation picker on top, embedded lead form below.
#[component]
pub fn Signup() -> Element {
    // Re-render when the interface locale changes elsewhere.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let view_model = use_signal(ViewModel::bundled);
    let selection = use_signal(move || SelectionState::initial(&view_model.peek()));

    let config = use_hook(LeadFormConfig::bundled);
    let form_enabled = config.is_configured();
    let container_id = config.container_id.clone();
    let form_ready = use_lead_form(config, selection);
    let form_class = if form_ready() {
        "lead-form lead-form--ready"
    } else {
        "lead-form"
    };

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-signup",
            h1 { class: "page-signup__title", {crate::t!("signup-title")} }
            p { class: "page-signup__intro", {crate::t!("signup-intro")} }

            div { class: "signup-panel",
                TranslationPicker { view_model, selection }

                div {
                    id: "{container_id}",
                    class: form_class,
                }
                if !form_enabled {
                    p { class: "lead-form__disabled", {crate::t!("lead-form-disabled")} }
                }
            }
        }
    }
}
