//! JavaScript snippets evaluated against the page.
//!
//! Every string coming from config or from the user's selection is embedded
//! as a JSON string literal, which is also a valid JS string literal.

use serde_json::json;

use super::config::LeadFormConfig;
use super::gate::ScriptTag;
use crate::core::LeadFormValues;

fn js_str(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Reuse an existing tag with the same id or append a new one, then report
/// `true` through `dioxus.send` once the widget global exists.
pub fn inject_widget(tag: &ScriptTag) -> String {
    format!(
        r#"const scriptId = {id};
const widgetGlobal = {global};
new Promise((resolve) => {{
  if (window[widgetGlobal]) {{
    resolve();
    return;
  }}
  let tag = document.getElementById(scriptId);
  if (!tag) {{
    tag = document.createElement("script");
    tag.id = scriptId;
    tag.src = {src};
    tag.async = true;
    document.body.appendChild(tag);
  }}
  tag.addEventListener("load", () => resolve(), {{ once: true }});
}}).then(() => dioxus.send(true));"#,
        id = js_str(&tag.id),
        global = js_str(&tag.global),
        src = js_str(&tag.src),
    )
}

/// Create the form inside the configured container; `dioxus.send(true)` fires
/// from the widget's ready hook. Sends `false` if the widget global is gone.
pub fn create_form(config: &LeadFormConfig) -> String {
    let options = json!({
        "region": config.region,
        "portalId": config.portal_id,
        "formId": config.form_id,
        "target": config.target_selector(),
    });
    format!(
        r#"const widget = window[{global}];
if (!widget || !widget.forms) {{
  dioxus.send(false);
}} else {{
  const options = {options};
  options.onFormReady = () => dioxus.send(true);
  widget.forms.create(options);
}}"#,
        global = js_str(&config.widget_global),
    )
}

/// Write both values into the rendered form. Missing container or fields
/// are skipped without error.
pub fn write_fields(config: &LeadFormConfig, values: &LeadFormValues) -> String {
    format!(
        r#"(() => {{
  const root = document.querySelector({target});
  if (!root) return;
  const write = (name, value) => {{
    const field = root.querySelector(`[name="${{name}}"]`);
    if (!field) return;
    field.value = value;
    field.dispatchEvent(new Event("input", {{ bubbles: true }}));
    field.dispatchEvent(new Event("change", {{ bubbles: true }}));
  }};
  write({primary_field}, {primary});
  write({secondary_field}, {secondary});
}})();"#,
        target = js_str(&config.target_selector()),
        primary_field = js_str(&config.primary_field),
        primary = js_str(&values.primary),
        secondary_field = js_str(&config.secondary_field),
        secondary = js_str(&values.secondary),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> LeadFormConfig {
        LeadFormConfig {
            portal_id: "123".into(),
            form_id: "abc-def".into(),
            ..LeadFormConfig::default()
        }
    }

    #[test]
    fn injection_reuses_tag_by_id() {
        let tag = ScriptTag {
            id: "loader".into(),
            src: "https://example.test/w.js".into(),
            global: "hbspt".into(),
        };
        let js = inject_widget(&tag);
        assert!(js.contains(r#"const scriptId = "loader";"#));
        assert!(js.contains(r#"tag.src = "https://example.test/w.js";"#));
        assert!(js.contains("document.getElementById(scriptId)"));
        assert!(js.contains("dioxus.send(true)"));
    }

    #[test]
    fn form_creation_carries_ids_and_target() {
        let js = create_form(&configured());
        assert!(js.contains(r#""portalId":"123""#));
        assert!(js.contains(r#""formId":"abc-def""#));
        assert!(js.contains(r##""target":"#lead-form""##));
        assert!(js.contains("onFormReady"));
    }

    #[test]
    fn field_values_are_escaped() {
        let values = LeadFormValues {
            primary: r#"Smith "& Van Dyke"</script>"#.into(),
            secondary: "line\nbreak".into(),
        };
        let js = write_fields(&configured(), &values);
        assert!(js.contains(r#"write("bible_translation", "Smith \"& Van Dyke\"</script>");"#));
        assert!(js.contains(r#"write("bible_translation_for_language", "line\nbreak");"#));
    }

    #[test]
    fn empty_secondary_is_written_as_empty_string() {
        let values = LeadFormValues {
            primary: "KJV".into(),
            secondary: String::new(),
        };
        let js = write_fields(&configured(), &values);
        assert!(js.contains(r#"write("bible_translation", "KJV");"#));
        assert!(js.contains(r#"write("bible_translation_for_language", "");"#));
    }
}
