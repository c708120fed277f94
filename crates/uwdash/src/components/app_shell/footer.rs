use dioxus::prelude::*;

use crate::components::use_localizer;

/// Footer with the shell-preview tagline.
#[component]
pub fn Footer() -> Element {
    let localizer = use_localizer();
    let tagline = localizer.read().translate("footer.tagline");

    rsx! {
        footer { class: "uw-footer",
            span { class: "uw-footer-text", {tagline} }
        }
    }
}
