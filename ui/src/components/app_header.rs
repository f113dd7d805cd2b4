use crate::i18n::{self};
use crate::t;
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

/// Brand bar with the interface-locale switcher.
///
/// Platforms may provide a `Signal<String>` context holding the current
/// interface locale; the switcher writes the chosen tag back into it so the
/// shell can remount localized content. Without that context the header
/// still switches the Fluent bundle and re-renders itself.
#[component]
pub fn AppHeader() -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| i18n::FALLBACK_LANGUAGE.to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Reactive dependency on the shell's locale signal.
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                debug!(locale = %val, "[i18n] interface locale switched");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!("[i18n] could not switch to {val}: {err}"),
        }
    };

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header {
            id: "app-header",
            class: "app-header",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "app-header__inner",
                div { class: "app-header__brand",
                    span { class: "app-header__brand-mark", {t!("brand-name")} }
                    span { class: "app-header__tagline", "{tagline}" }
                }

                if show_switcher {
                    div { class: "app-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
