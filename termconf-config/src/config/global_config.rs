//! Core `GlobalConfig` struct: global (non-per-profile) settings.
//!
//! Layering from JSON lives in [`super::layering`]; this module holds the
//! state, its defaults, accessors, the color-scheme registry and the
//! projection onto [`TerminalSettings`].

use std::collections::HashMap;
use std::sync::Arc;

use termconf_keybindings::KeyBindingTable;

use crate::color_scheme::ColorScheme;
use crate::profile::ProfileId;
use crate::terminal_settings::TerminalSettings;
use crate::types::RequestedTheme;

/// Global settings shared by every profile and window.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalConfig {
    /// Shared with every `TerminalSettings` it is applied to; copy-on-write
    pub(crate) key_bindings: Arc<KeyBindingTable>,
    /// Registered schemes keyed by their own `name`
    pub(crate) color_schemes: HashMap<String, ColorScheme>,
    /// Nil until a document or caller sets it
    pub(crate) default_profile: ProfileId,
    pub(crate) always_show_tabs: bool,
    pub(crate) initial_rows: i32,
    pub(crate) initial_cols: i32,
    pub(crate) show_title_in_titlebar: bool,
    pub(crate) show_tabs_in_titlebar: bool,
    pub(crate) requested_theme: RequestedTheme,
    pub(crate) word_delimiters: String,
    pub(crate) copy_on_select: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            key_bindings: Arc::new(KeyBindingTable::new()),
            color_schemes: HashMap::new(),
            default_profile: ProfileId::nil(),
            always_show_tabs: crate::defaults::bool_true(),
            initial_rows: crate::defaults::rows(),
            initial_cols: crate::defaults::cols(),
            show_title_in_titlebar: crate::defaults::bool_true(),
            show_tabs_in_titlebar: crate::defaults::bool_true(),
            requested_theme: crate::defaults::requested_theme(),
            word_delimiters: crate::defaults::word_delimiters(),
            copy_on_select: crate::defaults::bool_false(),
        }
    }
}

impl GlobalConfig {
    /// Create a config holding every default and an empty key-binding table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the fields a terminal instance needs into `settings`.
    ///
    /// Only key bindings (shared, not cloned), initial size, word delimiters
    /// and copy-on-select are forwarded. Theme, titlebar flags and color
    /// schemes are read directly from this struct by their consumers.
    pub fn apply_to(&self, settings: &mut TerminalSettings) {
        settings.key_bindings = Some(Arc::clone(&self.key_bindings));
        settings.initial_rows = self.initial_rows;
        settings.initial_cols = self.initial_cols;
        settings.word_delimiters = self.word_delimiters.clone();
        settings.copy_on_select = self.copy_on_select;
    }

    // ── Color schemes ───────────────────────────────────────────────────────

    /// Register `scheme` under its own name, replacing any previous scheme
    /// with that name. No field-level merge is performed.
    pub fn add_color_scheme(&mut self, scheme: ColorScheme) {
        if self.color_schemes.contains_key(&scheme.name) {
            log::debug!("Replacing color scheme '{}'", scheme.name);
        }
        self.color_schemes.insert(scheme.name.clone(), scheme);
    }

    /// Remove a scheme, handing ownership back to the caller.
    pub fn remove_color_scheme(&mut self, name: &str) -> Option<ColorScheme> {
        self.color_schemes.remove(name)
    }

    pub fn color_scheme(&self, name: &str) -> Option<&ColorScheme> {
        self.color_schemes.get(name)
    }

    pub fn color_schemes(&self) -> &HashMap<String, ColorScheme> {
        &self.color_schemes
    }

    pub fn color_schemes_mut(&mut self) -> &mut HashMap<String, ColorScheme> {
        &mut self.color_schemes
    }

    // ── Key bindings ────────────────────────────────────────────────────────

    /// Shared handle to the key-binding table.
    pub fn key_bindings(&self) -> Arc<KeyBindingTable> {
        Arc::clone(&self.key_bindings)
    }

    /// Mutable access to the table. Clones it first if a `TerminalSettings`
    /// still holds the previous version.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindingTable {
        Arc::make_mut(&mut self.key_bindings)
    }

    // ── Plain fields ────────────────────────────────────────────────────────

    pub fn default_profile(&self) -> ProfileId {
        self.default_profile
    }

    pub fn set_default_profile(&mut self, id: ProfileId) {
        self.default_profile = id;
    }

    pub fn always_show_tabs(&self) -> bool {
        self.always_show_tabs
    }

    pub fn set_always_show_tabs(&mut self, value: bool) {
        self.always_show_tabs = value;
    }

    pub fn initial_rows(&self) -> i32 {
        self.initial_rows
    }

    /// No range check; the window sizing code clamps.
    pub fn set_initial_rows(&mut self, rows: i32) {
        self.initial_rows = rows;
    }

    pub fn initial_cols(&self) -> i32 {
        self.initial_cols
    }

    pub fn set_initial_cols(&mut self, cols: i32) {
        self.initial_cols = cols;
    }

    pub fn show_title_in_titlebar(&self) -> bool {
        self.show_title_in_titlebar
    }

    pub fn set_show_title_in_titlebar(&mut self, value: bool) {
        self.show_title_in_titlebar = value;
    }

    pub fn show_tabs_in_titlebar(&self) -> bool {
        self.show_tabs_in_titlebar
    }

    pub fn set_show_tabs_in_titlebar(&mut self, value: bool) {
        self.show_tabs_in_titlebar = value;
    }

    pub fn requested_theme(&self) -> RequestedTheme {
        self.requested_theme
    }

    pub fn set_requested_theme(&mut self, theme: RequestedTheme) {
        self.requested_theme = theme;
    }

    pub fn word_delimiters(&self) -> &str {
        &self.word_delimiters
    }

    pub fn set_word_delimiters(&mut self, delimiters: impl Into<String>) {
        self.word_delimiters = delimiters.into();
    }

    pub fn copy_on_select(&self) -> bool {
        self.copy_on_select
    }

    pub fn set_copy_on_select(&mut self, value: bool) {
        self.copy_on_select = value;
    }
}
