use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::views::Signup;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Signup {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Interface locale shared with the header's switcher.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Web layout: shared header above the routed page.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppHeader { }
        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}
