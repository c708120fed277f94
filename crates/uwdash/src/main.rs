use dioxus::prelude::*;
use uwdash::components::App as UwdashApp;

const MAIN_CSS: Asset = asset!("/assets/uwdash.css");

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window();
        let has_document = window.as_ref().and_then(|w| w.document()).is_some();

        if window.is_none() || !has_document {
            // Running outside a page context, skip mounting the UI.
            return;
        }
    }

    // Cross-platform logger (web console + desktop stdout). DEBUG in
    // development builds, INFO in release. Verbosity only, never behavior.
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("MF Underwriting")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(1280.0, 860.0)),
        );
        dioxus::LaunchBuilder::desktop().with_cfg(config).launch(Root);
        return;
    }

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(Root);
}

#[component]
fn Root() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        UwdashApp {}
    }
}
