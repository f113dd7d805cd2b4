#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config, LogicalSize};
use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::views::Signup;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Signup {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme (ui/assets/theme/main.css), inlined so packaged builds need no asset dir.

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Versepick – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(720.0, 900.0)),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }
        // Views subscribe to `lang_code` themselves; remounting would drop the
        // picker selection and the embedded form.
        Router::<Route> { }
    }
}

/// Desktop layout: shared header above the routed page.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        AppHeader { }
        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}
