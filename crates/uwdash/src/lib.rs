//! UWDash - navigation-and-locale shell for a multifamily underwriting
//! dashboard.
//!
//! The shell wraps a set of placeholder section views in a persistent
//! navigation frame (top app bar + side menu) and bootstraps the display
//! language from the platform's detection sources. The underwriting modules
//! themselves (data import, modeling, scenarios, reports) attach behind the
//! section views later; the shell's only contract toward them is "render
//! inside the content region addressed by one registry path".
//!
//! # Architecture
//!
//! - [`components`] - Dioxus components: app shell, navigation surfaces,
//!   section views
//! - [`locale`] - platform detection strategies and stores behind the
//!   `uwdash-core` seams (localStorage/navigator/`<html lang>` on web, a
//!   state file and `LANG` on desktop)
//!
//! # Platform Support
//!
//! - **Web (WASM)**: primary target, persists the language in localStorage
//! - **Desktop**: `desktop` feature, persists the language in the user data
//!   directory

pub mod components;
pub mod locale;
