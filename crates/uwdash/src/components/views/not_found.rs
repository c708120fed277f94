use dioxus::prelude::*;

use crate::components::use_localizer;

/// Placeholder for an activated path with no matching section view.
#[component]
pub fn NotFoundView() -> Element {
    let localizer = use_localizer();
    let (title, body) = {
        let loc = localizer.read();
        (
            loc.translate("pages.notFound.title"),
            loc.translate("pages.notFound.body"),
        )
    };

    rsx! {
        div { class: "uw-page",
            h1 { class: "uw-page-title", {title} }
            div { class: "uw-card",
                p { class: "uw-page-body", {body} }
            }
        }
    }
}
