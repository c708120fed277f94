//! Navigation registry: the fixed, ordered set of application sections.
//!
//! Both navigation surfaces (top app bar and side menu) render from
//! [`sections`], so they can never disagree on the set, the order, or the
//! labels. Each section carries its route path, translation keys, and side
//! menu glyph.
//!
//! The registry has no insertion or removal API; the section set is static
//! configuration. Adding a section means adding a `Section` variant, at which
//! point the exhaustive matches here and in the frontend's view dispatch stop
//! compiling until the new section has a path, keys, a glyph, and a view.
//! That keeps the registry and the view set in 1:1 correspondence by
//! construction.

/// One top-level application section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Projects,
    DataImport,
    Modeling,
    Scenarios,
    Reports,
    Collaboration,
    Admin,
}

impl Section {
    /// All sections in display order. This is the navigation registry.
    pub const ALL: [Section; 8] = [
        Section::Dashboard,
        Section::Projects,
        Section::DataImport,
        Section::Modeling,
        Section::Scenarios,
        Section::Reports,
        Section::Collaboration,
        Section::Admin,
    ];

    /// Route path addressing this section's view.
    pub const fn path(self) -> &'static str {
        match self {
            Section::Dashboard => "/",
            Section::Projects => "/projects",
            Section::DataImport => "/data-import",
            Section::Modeling => "/modeling",
            Section::Scenarios => "/scenarios",
            Section::Reports => "/reports",
            Section::Collaboration => "/collaboration",
            Section::Admin => "/admin",
        }
    }

    /// Translation key for the navigation label.
    pub const fn label_key(self) -> &'static str {
        match self {
            Section::Dashboard => "nav.dashboard",
            Section::Projects => "nav.projects",
            Section::DataImport => "nav.dataImport",
            Section::Modeling => "nav.modeling",
            Section::Scenarios => "nav.scenarios",
            Section::Reports => "nav.reports",
            Section::Collaboration => "nav.collaboration",
            Section::Admin => "nav.admin",
        }
    }

    /// Translation key for the section view's heading.
    pub const fn title_key(self) -> &'static str {
        match self {
            Section::Dashboard => "pages.dashboard.title",
            Section::Projects => "pages.projects.title",
            Section::DataImport => "pages.dataImport.title",
            Section::Modeling => "pages.modeling.title",
            Section::Scenarios => "pages.scenarios.title",
            Section::Reports => "pages.reports.title",
            Section::Collaboration => "pages.collaboration.title",
            Section::Admin => "pages.admin.title",
        }
    }

    /// Translation key for the section view's placeholder body.
    pub const fn body_key(self) -> &'static str {
        match self {
            Section::Dashboard => "pages.dashboard.body",
            Section::Projects => "pages.projects.body",
            Section::DataImport => "pages.dataImport.body",
            Section::Modeling => "pages.modeling.body",
            Section::Scenarios => "pages.scenarios.body",
            Section::Reports => "pages.reports.body",
            Section::Collaboration => "pages.collaboration.body",
            Section::Admin => "pages.admin.body",
        }
    }

    /// Glyph shown next to the label in the side menu.
    pub const fn icon(self) -> &'static str {
        match self {
            Section::Dashboard => "📊",
            Section::Projects => "📁",
            Section::DataImport => "📥",
            Section::Modeling => "📈",
            Section::Scenarios => "🔄",
            Section::Reports => "📋",
            Section::Collaboration => "👥",
            Section::Admin => "⚙️",
        }
    }

    /// Resolve a route path to its section.
    ///
    /// Returns `None` for paths outside the registry; the frontend renders a
    /// not-found placeholder for those rather than a blank content region.
    pub fn from_path(path: &str) -> Option<Section> {
        Section::ALL.iter().copied().find(|s| s.path() == path)
    }
}

/// The ordered, read-only navigation registry.
pub fn sections() -> &'static [Section] {
    &Section::ALL
}
