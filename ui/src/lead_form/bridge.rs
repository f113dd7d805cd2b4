use std::rc::Rc;

use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;

use super::config::LeadFormConfig;
use super::gate::{ReadyCallback, ScriptHost, ScriptTag, WidgetGate};
use super::scripts;
use crate::core::{LeadFormValues, SelectionState};

thread_local! {
    // One widget script per page, shared by every mounted form.
    static WIDGET_GATE: WidgetGate = WidgetGate::new();
}

/// Page operations behind [`use_lead_form`].
///
/// The default driver talks to the page through `document::eval`. Provide an
/// `Rc<dyn FormDriver>` context above the hook to replace it.
pub trait FormDriver: ScriptHost {
    /// Render the widget into the configured container and call `on_ready`
    /// from its ready hook.
    fn create_form(&self, config: &LeadFormConfig, on_ready: ReadyCallback);

    fn write_fields(&self, config: &LeadFormConfig, values: &LeadFormValues);
}

struct EvalDriver;

impl ScriptHost for EvalDriver {
    fn inject(&self, tag: &ScriptTag, on_load: ReadyCallback) {
        let mut eval = document::eval(&scripts::inject_widget(tag));
        let id = tag.id.clone();
        // Outlives the component that asked: other forms may be queued on it.
        spawn_forever(async move {
            match eval.recv::<bool>().await {
                Ok(_) => {
                    debug!(%id, "[lead-form] widget script loaded");
                    on_load();
                }
                Err(err) => warn!(%id, "[lead-form] widget script never reported ready: {err:?}"),
            }
        });
    }
}

impl FormDriver for EvalDriver {
    fn create_form(&self, config: &LeadFormConfig, on_ready: ReadyCallback) {
        let mut eval = document::eval(&scripts::create_form(config));
        spawn_forever(async move {
            match eval.recv::<bool>().await {
                Ok(true) => on_ready(),
                Ok(false) => warn!("[lead-form] widget global missing; form not created"),
                Err(err) => warn!("[lead-form] form creation failed: {err:?}"),
            }
        });
    }

    fn write_fields(&self, config: &LeadFormConfig, values: &LeadFormValues) {
        // Fire and forget: a form without these fields is left alone.
        let _ = document::eval(&scripts::write_fields(config, values));
    }
}

fn script_tag(config: &LeadFormConfig) -> ScriptTag {
    ScriptTag {
        id: config.script_id.clone(),
        src: config.script_src.clone(),
        global: config.widget_global.clone(),
    }
}

/// Mount the embedded lead form and keep its two fields in sync with
/// `selection`.
///
/// The widget script is loaded once per page. The form itself is requested
/// after the calling component has mounted its container, so a remount
/// against an already loaded script still finds its target. After the form
/// reports ready, every change to the selection (mode or any of the three
/// choices) rewrites both fields. Returns whether the form is ready.
pub fn use_lead_form(config: LeadFormConfig, selection: Signal<SelectionState>) -> Signal<bool> {
    let form_ready = use_signal(|| false);
    let config = use_hook(move || config);
    let driver = use_hook(|| {
        try_consume_context::<Rc<dyn FormDriver>>()
            .unwrap_or_else(|| Rc::new(EvalDriver) as Rc<dyn FormDriver>)
    });
    let gate = use_hook(|| {
        try_consume_context::<WidgetGate>().unwrap_or_else(|| WIDGET_GATE.with(WidgetGate::clone))
    });

    {
        let config = config.clone();
        let driver = driver.clone();
        // Reads no signals, so it runs once per mount, after the container exists.
        use_effect(move || {
            if !config.is_configured() {
                info!("[lead-form] portal/form id not set; embedded form disabled");
                return;
            }
            let tag = script_tag(&config);
            let on_loaded: ReadyCallback = {
                let config = config.clone();
                let driver = driver.clone();
                Box::new(move || {
                    driver.create_form(&config, Box::new(move || mark_ready(form_ready)))
                })
            };
            gate.ensure_loaded(&*driver, &tag, on_loaded);
        });
    }

    use_effect(move || {
        let values = selection.read().lead_form_values();
        if !form_ready() {
            return;
        }
        debug!(
            primary = %values.primary,
            secondary = %values.secondary,
            "[lead-form] syncing fields"
        );
        driver.write_fields(&config, &values);
    });

    form_ready
}

fn mark_ready(mut form_ready: Signal<bool>) {
    debug!("[lead-form] form ready");
    // The component may have unmounted while the widget was rendering.
    if let Ok(mut ready) = form_ready.try_write() {
        *ready = true;
    }
}
