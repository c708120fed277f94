use dioxus::prelude::*;
use uwdash_core::nav::sections;

use crate::components::use_localizer;

/// Side menu: one entry per registry section, icon glyph plus translated
/// label, in registry order.
#[component]
pub fn Sidebar(
    active_path: ReadOnlySignal<&'static str>,
    on_navigate: EventHandler<&'static str>,
) -> Element {
    let localizer = use_localizer();

    let active = active_path();
    let (heading, entries) = {
        let loc = localizer.read();
        let entries: Vec<(&'static str, &'static str, String, bool)> = sections()
            .iter()
            .map(|s| {
                (
                    s.path(),
                    s.icon(),
                    loc.translate(s.label_key()),
                    s.path() == active,
                )
            })
            .collect();
        (loc.translate("sidebar.menu"), entries)
    };

    rsx! {
        aside { class: "uw-sidebar",
            h2 { class: "uw-sidebar-heading", {heading} }
            nav { class: "uw-sidebar-nav",
                for (path, icon, label, is_active) in entries {
                    button {
                        key: "{path}",
                        class: if is_active {
                            "uw-sidebar-link uw-sidebar-link--active"
                        } else {
                            "uw-sidebar-link"
                        },
                        onclick: move |_| on_navigate.call(path),
                        span { class: "uw-sidebar-icon", "{icon}" }
                        span { class: "uw-sidebar-label", {label} }
                    }
                }
            }
        }
    }
}
