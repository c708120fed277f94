//! UI components for the UWDash shell.
//!
//! # Component Architecture
//!
//! - `app_shell`: AppBar (top navigation surface), Sidebar (side navigation
//!   surface), Footer
//! - `views`: one placeholder view per registry section plus the not-found
//!   placeholder
//!
//! # Context Providers
//!
//! Components use Dioxus context for shared state:
//!
//! ```ignore
//! // Translation handle from any component
//! let localizer = use_localizer();
//! let label = localizer.read().translate("nav.projects");
//! ```
//!
//! The `Signal<Localizer>` has one writer at a time (the startup resolution
//! task or an explicit language change) and every translated surface reads
//! it, so a language switch re-renders them all.

mod app_shell;
pub mod views;

pub use app_shell::{AppBar, Footer, Sidebar};

use std::rc::Rc;

use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use uwdash_core::config;
use uwdash_core::i18n::{Localizer, Resources};
use uwdash_core::nav::Section;

use crate::locale;

/// Translation handle context provider.
pub fn use_localizer() -> Signal<Localizer> {
    use_context::<Signal<Localizer>>()
}

/// Shared resource bundles context provider.
pub fn use_resources() -> Rc<Resources> {
    use_context::<Rc<Resources>>()
}

/// Build the shell's resource bundles.
///
/// A broken embedded bundle degrades to empty resources: every lookup then
/// returns its key, which keeps the shell rendering instead of failing.
fn shell_resources() -> Rc<Resources> {
    match Resources::builtin() {
        Ok(resources) => Rc::new(resources),
        Err(e) => {
            error!("translation bundles failed to load: {e}");
            Rc::new(Resources::empty())
        }
    }
}

/// Root shell component: navigation frame around the active section view.
#[component]
pub fn App() -> Element {
    let resources = use_hook(shell_resources);
    use_context_provider(|| resources.clone());

    // Render with the default language first; detection upgrades it below.
    let localizer = use_signal({
        let resources = resources.clone();
        move || Localizer::new(resources)
    });
    use_context_provider(|| localizer);

    // The shell owns the active path; navigation surfaces only emit intents.
    let mut active_path = use_signal(|| Section::Dashboard.path());

    // Bounded locale resolution, applied once available. Applying the
    // resolved language is idempotent, so a late arrival is safe.
    let mut localizer_signal = localizer;
    use_effect(move || {
        let resources = resources.clone();
        spawn(async move {
            let resolver = locale::shell_resolver(resources);
            let code =
                locale::resolve_with_timeout(&resolver, config::DETECTION_TIMEOUT_MS).await;
            if localizer_signal.peek().language() != code {
                info!("display language resolved to {code:?}");
                localizer_signal.write().set_active(&code);
            }
        });
    });

    rsx! {
        div { class: "uw-app",
            AppBar {
                active_path,
                on_navigate: move |path| active_path.set(path),
            }

            div { class: "uw-body",
                Sidebar {
                    active_path,
                    on_navigate: move |path| active_path.set(path),
                }

                // Content region addressed by the active path
                main { class: "uw-main",
                    {views::section_view(active_path())}
                }
            }

            Footer {}
        }
    }
}
