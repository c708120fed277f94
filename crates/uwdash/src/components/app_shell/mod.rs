//! App shell components: AppBar, Sidebar, Footer
//!
//! These components form the persistent navigation frame around the main
//! content area. Both navigation surfaces render from the shared registry
//! (`uwdash_core::nav::sections`), so they always agree on the entries,
//! their order, and their labels.

mod appbar;
mod footer;
mod sidebar;

pub use appbar::AppBar;
pub use footer::Footer;
pub use sidebar::Sidebar;
