//! Default value functions for configuration.
//!
//! Each sub-module groups related `default_*` free functions used by the
//! `Default` impls of the settings types. Everything is re-exported here so
//! call-sites can use `crate::defaults::*`.

mod misc;
mod terminal;
mod window;

// ── Window & visual appearance ─────────────────────────────────────────────
pub use window::{cols, requested_theme, rows};

// ── Terminal behaviour ─────────────────────────────────────────────────────
pub use terminal::{font_face, font_size, history_size, word_delimiters};

// ── Miscellaneous ──────────────────────────────────────────────────────────
pub use misc::{bool_false, bool_true, color_scheme};
