//! Section views: one placeholder per registry entry.
//!
//! Every view renders a translated heading and a fixed placeholder body,
//! the seam where the underwriting modules (data import parsing, modeling,
//! scenario comparison, reporting) attach later. The dispatch in
//! [`section_view`] matches exhaustively on [`Section`], so a registry entry
//! without a view cannot compile.

mod not_found;

pub use not_found::NotFoundView;

use dioxus::prelude::*;
use uwdash_core::nav::Section;

use crate::components::use_localizer;

/// Resolve the active path to its view. Unmapped paths get the not-found
/// placeholder, so the content region is never blank.
pub fn section_view(path: &str) -> Element {
    match Section::from_path(path) {
        Some(Section::Dashboard) => rsx! { DashboardView {} },
        Some(Section::Projects) => rsx! { ProjectsView {} },
        Some(Section::DataImport) => rsx! { DataImportView {} },
        Some(Section::Modeling) => rsx! { ModelingView {} },
        Some(Section::Scenarios) => rsx! { ScenariosView {} },
        Some(Section::Reports) => rsx! { ReportsView {} },
        Some(Section::Collaboration) => rsx! { CollaborationView {} },
        Some(Section::Admin) => rsx! { AdminView {} },
        None => rsx! { NotFoundView {} },
    }
}

/// Shared placeholder layout: heading plus a fixed body card.
#[component]
fn PlaceholderPage(section: Section) -> Element {
    let localizer = use_localizer();
    let (title, body) = {
        let loc = localizer.read();
        (
            loc.translate(section.title_key()),
            loc.translate(section.body_key()),
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

#[component]
pub fn DashboardView() -> Element {
    rsx! { PlaceholderPage { section: Section::Dashboard } }
}

#[component]
pub fn ProjectsView() -> Element {
    rsx! { PlaceholderPage { section: Section::Projects } }
}

#[component]
pub fn DataImportView() -> Element {
    rsx! { PlaceholderPage { section: Section::DataImport } }
}

#[component]
pub fn ModelingView() -> Element {
    rsx! { PlaceholderPage { section: Section::Modeling } }
}

#[component]
pub fn ScenariosView() -> Element {
    rsx! { PlaceholderPage { section: Section::Scenarios } }
}

#[component]
pub fn ReportsView() -> Element {
    rsx! { PlaceholderPage { section: Section::Reports } }
}

#[component]
pub fn CollaborationView() -> Element {
    rsx! { PlaceholderPage { section: Section::Collaboration } }
}

#[component]
pub fn AdminView() -> Element {
    rsx! { PlaceholderPage { section: Section::Admin } }
}
