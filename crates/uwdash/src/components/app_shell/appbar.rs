use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use uwdash_core::nav::sections;

use crate::components::{use_localizer, use_resources};
use crate::locale;

/// Global app bar: wordmark, one nav link per registry entry, language
/// selector, and a static user-identity chip (not backed by session state).
#[component]
pub fn AppBar(
    active_path: ReadOnlySignal<&'static str>,
    on_navigate: EventHandler<&'static str>,
) -> Element {
    let mut localizer = use_localizer();
    let resources = use_resources();

    let active = active_path();
    let (links, languages, current_language, select_label, user_label) = {
        let loc = localizer.read();
        let links: Vec<(&'static str, String, bool)> = sections()
            .iter()
            .map(|s| (s.path(), loc.translate(s.label_key()), s.path() == active))
            .collect();
        let current = loc.language().to_string();
        let languages: Vec<(String, bool)> = loc
            .available_languages()
            .into_iter()
            .map(|code| {
                let selected = code == current;
                (code, selected)
            })
            .collect();
        let select_label = loc.translate("appbar.language");
        let user = loc.translate("appbar.user");
        (links, languages, current, select_label, user)
    };

    // Explicit language override: persist, then apply to the shared handle.
    let on_language_change = move |ev: FormEvent| {
        let code = ev.value();
        let resources = resources.clone();
        spawn(async move {
            let resolver = locale::shell_resolver(resources);
            match resolver.set_language(&code).await {
                Ok(normalized) => {
                    if localizer.peek().language() != normalized {
                        localizer.write().set_active(&normalized);
                    }
                }
                Err(e) => warn!("language change rejected: {e}"),
            }
        });
    };

    rsx! {
        header { class: "uw-appbar",
            div { class: "uw-appbar-left",
                div { class: "uw-wordmark",
                    span { class: "uw-wordmark-word", "MF" }
                    span { class: "uw-wordmark-word uw-wordmark-word--accent", "Underwriting" }
                }
            }
            nav { class: "uw-appbar-center",
                for (path, label, is_active) in links {
                    button {
                        key: "{path}",
                        class: if is_active {
                            "uw-nav-link uw-nav-link--active"
                        } else {
                            "uw-nav-link"
                        },
                        onclick: move |_| on_navigate.call(path),
                        {label}
                    }
                }
            }
            div { class: "uw-appbar-right",
                select {
                    class: "uw-lang-select",
                    "aria-label": "{select_label}",
                    value: "{current_language}",
                    onchange: on_language_change,
                    for (code, selected) in languages {
                        option { key: "{code}", value: "{code}", selected: selected, "{code}" }
                    }
                }
                div { class: "uw-user-chip",
                    span { class: "uw-user-name", {user_label} }
                    span { class: "uw-user-avatar" }
                }
            }
        }
    }
}
