use dioxus::prelude::*;

use crate::core::{SelectionMode, SelectionState, ViewModel};
use crate::t;

/// Translations offered for the selected language, recomputed whenever the
/// selected language or the view model changes.
pub fn use_language_translations(
    view_model: Signal<ViewModel>,
    selection: Signal<SelectionState>,
) -> Memo<Vec<String>> {
    use_memo(move || {
        let language = selection.read().selected_language.clone();
        view_model.read().translations_for_language(&language)
    })
}

/// Mode switch plus the dropdowns for the active mode.
///
/// Every select is controlled: its value always mirrors `selection`, and
/// every change goes back through the `SelectionState` transitions.
#[component]
pub fn TranslationPicker(view_model: Signal<ViewModel>, selection: Signal<SelectionState>) -> Element {
    let mut selection = selection;
    // Labels are localized; re-render on interface locale switches.
    let _lang_marker = try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_default();

    let language_translations = use_language_translations(view_model, selection);

    let on_mode = move |evt: FormEvent| {
        if let Some(mode) = SelectionMode::parse(&evt.value()) {
            selection.with_mut(|state| state.set_mode(mode));
        }
    };

    let on_translation = move |evt: FormEvent| {
        selection.with_mut(|state| state.select_translation(evt.value()));
    };

    let on_language = move |evt: FormEvent| {
        let language = evt.value();
        let vm = view_model.peek();
        selection.with_mut(|state| state.select_language(&vm, language));
    };

    let on_language_translation = move |evt: FormEvent| {
        selection.with_mut(|state| state.select_language_translation(evt.value()));
    };

    let state = selection();
    let by_translation = state.mode == SelectionMode::ByTranslation;

    let translation_options: Vec<(String, String)> = view_model
        .read()
        .sorted_translations()
        .iter()
        .map(|record| {
            let label = t!(
                "picker-translation-option",
                translation = record.translation.as_str(),
                language = record.language.as_str()
            );
            (record.translation.clone(), label)
        })
        .collect();
    let languages: Vec<String> = view_model.read().sorted_languages().to_vec();
    let per_language = language_translations();
    let no_translations = translation_options.is_empty();
    let no_languages = languages.is_empty();
    let no_language_translations = per_language.is_empty();

    let language_heading = t!(
        "picker-language-translations-label",
        language = state.selected_language.as_str()
    );

    rsx! {
        div { class: "picker",
            fieldset { class: "picker__modes",
                legend { class: "visually-hidden", {t!("picker-mode-legend")} }
                label { class: "picker__mode",
                    input {
                        r#type: "radio",
                        name: "picker-mode",
                        value: SelectionMode::ByTranslation.as_str(),
                        checked: by_translation,
                        onchange: on_mode,
                    }
                    " "
                    {t!("picker-mode-translation")}
                }
                label { class: "picker__mode",
                    input {
                        r#type: "radio",
                        name: "picker-mode",
                        value: SelectionMode::ByLanguage.as_str(),
                        checked: !by_translation,
                        onchange: on_mode,
                    }
                    " "
                    {t!("picker-mode-language")}
                }
            }

            if by_translation {
                div { class: "picker__field",
                    label { class: "picker__label", r#for: "translation-select",
                        {t!("picker-translation-label")}
                    }
                    select {
                        id: "translation-select",
                        class: "picker__select",
                        value: "{state.selected_translation}",
                        disabled: no_translations,
                        onchange: on_translation,
                        for (value, label) in translation_options {
                            option {
                                key: "{value}",
                                value: "{value}",
                                selected: value == state.selected_translation,
                                "{label}"
                            }
                        }
                    }
                }
            } else {
                div { class: "picker__field",
                    label { class: "picker__label", r#for: "language-select",
                        {t!("picker-language-label")}
                    }
                    select {
                        id: "language-select",
                        class: "picker__select",
                        value: "{state.selected_language}",
                        disabled: no_languages,
                        onchange: on_language,
                        for language in languages {
                            option {
                                key: "{language}",
                                value: "{language}",
                                selected: language == state.selected_language,
                                "{language}"
                            }
                        }
                    }
                }
                div { class: "picker__field",
                    label { class: "picker__label", r#for: "language-translation-select",
                        "{language_heading}"
                    }
                    select {
                        id: "language-translation-select",
                        class: "picker__select",
                        value: "{state.selected_language_translation}",
                        disabled: no_language_translations,
                        onchange: on_language_translation,
                        for translation in per_language {
                            option {
                                key: "{translation}",
                                value: "{translation}",
                                selected: translation == state.selected_language_translation,
                                "{translation}"
                            }
                        }
                    }
                }
            }

            if no_translations {
                p { class: "picker__empty", {t!("picker-empty")} }
            }
        }
    }
}
