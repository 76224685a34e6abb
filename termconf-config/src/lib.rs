//! Settings system for the termconf terminal.
//!
//! This crate provides layered loading, saving and default values for the
//! terminal's global settings. It includes:
//!
//! - `GlobalConfig`: tab display, default profile, initial size, word
//!   delimiters, theme and the key-binding table
//! - Color scheme definitions and the scheme registry
//! - The `TerminalSettings` snapshot handed to each terminal instance
//! - `AppSettings`: the whole settings file, with validation and persistence

pub mod color_scheme;
pub mod config;
pub mod defaults;
pub mod error;
pub mod profile;
pub mod terminal_settings;
mod types;

// Re-export main types for convenience
pub use color_scheme::ColorScheme;
pub use config::{AppSettings, GlobalConfig, SettingsWarning, keys};
pub use error::{ConfigError, Result};
pub use profile::{Profile, ProfileId, format_profile_id, parse_profile_id};
pub use terminal_settings::TerminalSettings;
pub use types::{Color, RequestedTheme};

// The key-binding table is part of GlobalConfig's public surface
pub use termconf_keybindings::{self as keybindings, KeyBindingTable, KeyChord};
