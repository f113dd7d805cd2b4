//! Bridge to the third-party lead-capture form embedded under the picker.
//!
//! - `config`: where the widget lives and which fields receive the selection.
//! - `gate`: loads the widget script once and wakes every waiter.
//! - `scripts`: the JS snippets run through `document::eval`.
//! - `bridge`: the Dioxus hook tying the above to the selection signal, and
//!   the `FormDriver` seam it talks to the page through.

mod bridge;
pub mod config;
pub mod gate;
pub mod scripts;

pub use bridge::{use_lead_form, FormDriver};
pub use config::LeadFormConfig;
pub use gate::{ReadyCallback, ScriptHost, ScriptTag, WidgetGate};
