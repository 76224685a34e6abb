//! Settings management.
//!
//! # Sub-modules
//!
//! - [`global_config`] — Core `GlobalConfig` struct, accessors and `apply_to`
//! - [`layering`] — `impl GlobalConfig` methods for layered JSON load and snapshot save
//! - [`app_settings`] — `AppSettings`: globals + profiles + schemes, validation
//! - [`persistence`] — `impl AppSettings` methods for file load/save and path resolution

pub mod app_settings;
pub mod global_config;
pub mod layering;
pub mod persistence;

pub use app_settings::{AppSettings, SettingsWarning};
pub use global_config::GlobalConfig;
pub use layering::keys;
pub use persistence::SETTINGS_FILE_NAME;
