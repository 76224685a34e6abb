//! Runtime settings snapshot for a single terminal instance.
//!
//! Built from a profile plus the global projection applied by
//! [`GlobalConfig::apply_to`](crate::GlobalConfig::apply_to).

use std::sync::Arc;

use termconf_keybindings::KeyBindingTable;

/// Settings consumed by one terminal control.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalSettings {
    /// Shared key-binding table (never deep-copied per terminal)
    pub key_bindings: Option<Arc<KeyBindingTable>>,
    pub initial_rows: i32,
    pub initial_cols: i32,
    pub word_delimiters: String,
    pub copy_on_select: bool,

    // Per-profile values; never written by the global projection.
    pub font_face: String,
    pub font_size: i32,
    pub history_size: i32,
    pub color_scheme: String,
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            key_bindings: None,
            initial_rows: crate::defaults::rows(),
            initial_cols: crate::defaults::cols(),
            word_delimiters: crate::defaults::word_delimiters(),
            copy_on_select: crate::defaults::bool_false(),
            font_face: crate::defaults::font_face(),
            font_size: crate::defaults::font_size(),
            history_size: crate::defaults::history_size(),
            color_scheme: crate::defaults::color_scheme(),
        }
    }
}

impl TerminalSettings {
    pub fn new() -> Self {
        Self::default()
    }
}
