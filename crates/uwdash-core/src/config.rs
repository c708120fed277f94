//! Shell configuration constants.
//!
//! This module contains constants that define the shell configuration for
//! UWDash. These values are used by the locale resolver and the frontend to
//! ensure consistency between runtime behavior and tests.

// =============================================================================
// Locale Configuration
// =============================================================================

/// Language used before resolution completes and when every detection
/// strategy comes up empty.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Language whose bundle backs per-key fallback for partially translated
/// languages. Keys missing from the active bundle are looked up here before
/// falling back to the key itself.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Key under which the chosen language code is persisted.
///
/// One key-value pair in the platform store (browser localStorage on web, a
/// small file on desktop).
pub const PERSISTENCE_KEY: &str = "uwdash.lang";

/// Inspection pseudo-language.
///
/// When active, every translation lookup returns its key so translators can
/// see which key backs which label. Never written to persistent storage.
pub const INSPECTION_LANGUAGE: &str = "cimode";

/// Upper bound on a full locale detection pass, in milliseconds.
///
/// Detection reads from slower sources (persisted storage, environment); if
/// the pass does not finish within this window the shell stays on
/// [`DEFAULT_LANGUAGE`].
pub const DETECTION_TIMEOUT_MS: u64 = 2_000;
