//! Whole settings file: globals, profiles and color schemes.
//!
//! The file is a JSON object whose root carries the global keys (an older
//! layout nests them under `"globals"`, which is still read), next to a
//! `profiles` array and a `schemes` array.

use serde_json::{Map, Value};

use super::global_config::GlobalConfig;
use crate::color_scheme::ColorScheme;
use crate::error::{ConfigError, Result};
use crate::profile::{Profile, ProfileId, format_profile_id};

pub const GLOBALS_KEY: &str = "globals";
pub const PROFILES_KEY: &str = "profiles";
pub const SCHEMES_KEY: &str = "schemes";

/// A problem found by [`AppSettings::validate`] that does not stop loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsWarning {
    /// `defaultProfile` was unset or named a profile that is not loaded.
    /// `fallback` is the profile that became the default, if any.
    MissingDefaultProfile {
        requested: ProfileId,
        fallback: Option<ProfileId>,
    },
    /// A profile references a scheme that was never registered.
    UnknownColorScheme { profile: String, scheme: String },
}

impl std::fmt::Display for SettingsWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsWarning::MissingDefaultProfile { requested, fallback } => {
                write!(
                    f,
                    "default profile {} was not found",
                    format_profile_id(requested)
                )?;
                match fallback {
                    Some(id) => write!(f, "; using {} instead", format_profile_id(id)),
                    None => write!(f, "; no profiles are defined"),
                }
            }
            SettingsWarning::UnknownColorScheme { profile, scheme } => {
                write!(f, "profile '{profile}' uses unknown color scheme '{scheme}'")
            }
        }
    }
}

/// Everything loaded from one or more layered settings files.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppSettings {
    pub globals: GlobalConfig,
    pub profiles: Vec<Profile>,
}

impl AppSettings {
    /// Defaults with the built-in color schemes registered.
    pub fn new() -> Self {
        let mut settings = Self::default();
        for scheme in ColorScheme::builtin() {
            settings.globals.add_color_scheme(scheme);
        }
        settings
    }

    /// Defaults plus a single fresh profile that is also the default, so
    /// a newly written settings file validates cleanly.
    pub fn starter() -> Self {
        let mut settings = Self::new();
        let profile = Profile::new(ProfileId::new_v4(), "Default");
        settings.globals.set_default_profile(profile.guid);
        settings.profiles.push(profile);
        settings
    }

    /// Defaults followed by each document in order.
    pub fn from_documents(docs: &[Value]) -> Result<Self> {
        let mut settings = Self::new();
        for doc in docs {
            settings.layer_document(doc)?;
        }
        Ok(settings)
    }

    /// Overlay one settings document.
    ///
    /// Globals are layered from the root and from a nested `globals`
    /// object. Each scheme is registered (replacing by name) and each
    /// profile replaces the loaded profile with the same guid or is
    /// appended.
    pub fn layer_document(&mut self, doc: &Value) -> Result<()> {
        let Some(root) = doc.as_object() else {
            return Err(ConfigError::InvalidField {
                key: "settings",
                source: serde::de::Error::custom("expected a JSON object"),
            });
        };

        // Decode everything before touching self so a failed layer changes nothing
        let mut globals = self.globals.clone();
        globals.load_from_document(doc)?;
        if let Some(nested) = root.get(GLOBALS_KEY) {
            globals.load_from_document(nested)?;
        }
        let schemes = array(root, SCHEMES_KEY)?
            .iter()
            .map(ColorScheme::from_document)
            .collect::<Result<Vec<_>>>()?;
        let profiles = array(root, PROFILES_KEY)?
            .iter()
            .map(Profile::from_document)
            .collect::<Result<Vec<_>>>()?;

        self.globals = globals;
        for scheme in schemes {
            self.globals.add_color_scheme(scheme);
        }
        for profile in profiles {
            self.layer_profile(profile);
        }

        log::info!(
            "Layered settings document: {} profile(s), {} color scheme(s)",
            self.profiles.len(),
            self.globals.color_schemes().len()
        );
        Ok(())
    }

    fn layer_profile(&mut self, profile: Profile) {
        match self.profiles.iter_mut().find(|p| p.guid == profile.guid) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }

    /// Look up a loaded profile by guid.
    pub fn profile(&self, id: &ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.guid == *id)
    }

    /// The profile new tabs open with, if `defaultProfile` resolves.
    pub fn default_profile(&self) -> Option<&Profile> {
        self.profile(&self.globals.default_profile())
    }

    /// Check cross-references between globals, profiles and schemes.
    ///
    /// A default profile that does not resolve falls back to the first
    /// loaded profile. Every problem is logged and returned.
    pub fn validate(&mut self) -> Vec<SettingsWarning> {
        let mut warnings = Vec::new();

        let requested = self.globals.default_profile();
        if self.profile(&requested).is_none() {
            let fallback = self.profiles.first().map(|p| p.guid);
            if let Some(id) = fallback {
                self.globals.set_default_profile(id);
            }
            warnings.push(SettingsWarning::MissingDefaultProfile {
                requested,
                fallback,
            });
        }

        for profile in &self.profiles {
            if let Some(scheme) = &profile.color_scheme
                && self.globals.color_scheme(scheme).is_none()
            {
                warnings.push(SettingsWarning::UnknownColorScheme {
                    profile: profile.name.clone(),
                    scheme: scheme.clone(),
                });
            }
        }

        for warning in &warnings {
            log::warn!("Settings: {}", warning);
        }
        warnings
    }

    /// Serialize globals, profiles and schemes (sorted by name).
    pub fn to_document(&self) -> Value {
        let mut doc = match self.globals.to_document() {
            Value::Object(object) => object,
            _ => Map::new(),
        };

        doc.insert(
            PROFILES_KEY.to_string(),
            Value::Array(self.profiles.iter().map(Profile::to_document).collect()),
        );

        let mut schemes: Vec<&ColorScheme> = self.globals.color_schemes().values().collect();
        schemes.sort_by(|a, b| a.name.cmp(&b.name));
        doc.insert(
            SCHEMES_KEY.to_string(),
            Value::Array(schemes.into_iter().map(ColorScheme::to_document).collect()),
        );

        Value::Object(doc)
    }
}

/// The array under `key`; absent or `null` is an empty slice.
fn array<'a>(root: &'a Map<String, Value>, key: &'static str) -> Result<&'a [Value]> {
    match root.get(key) {
        None | Some(Value::Null) => Ok(&[][..]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(ConfigError::InvalidField {
            key,
            source: serde::de::Error::custom("expected an array"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::parse_profile_id;
    use serde_json::json;

    const CMD: &str = "{0caa0dad-35be-5f56-a8ff-afceeeaa6101}";
    const PWSH: &str = "{61c54bbd-c2c6-5271-96e7-009a87ff44bf}";

    fn id(s: &str) -> ProfileId {
        parse_profile_id(s).unwrap()
    }

    #[test]
    fn test_new_registers_builtin_schemes() {
        let settings = AppSettings::new();
        assert!(settings.globals.color_scheme("Campbell").is_some());
        assert_eq!(settings.globals.color_schemes().len(), 3);
    }

    #[test]
    fn test_starter_settings_validate_cleanly() {
        let mut settings = AppSettings::starter();
        assert_eq!(settings.profiles.len(), 1);
        assert_eq!(settings.default_profile().unwrap().name, "Default");
        assert!(settings.validate().is_empty());
    }

    #[test]
    fn test_layer_reads_root_globals_profiles_and_schemes() {
        let settings = AppSettings::from_documents(&[json!({
            "defaultProfile": PWSH,
            "copyOnSelect": true,
            "profiles": [
                { "guid": PWSH, "name": "PowerShell" },
                { "guid": CMD, "name": "cmd" }
            ],
            "schemes": [{ "name": "Custom", "background": "#101010" }]
        })])
        .unwrap();

        assert!(settings.globals.copy_on_select());
        assert_eq!(settings.profiles.len(), 2);
        assert_eq!(settings.default_profile().unwrap().name, "PowerShell");
        assert!(settings.globals.color_scheme("Custom").is_some());
    }

    #[test]
    fn test_legacy_globals_object_is_read() {
        let settings = AppSettings::from_documents(&[json!({
            "globals": { "initialCols": 99, "requestedTheme": "light" }
        })])
        .unwrap();
        assert_eq!(settings.globals.initial_cols(), 99);
    }

    #[test]
    fn test_profiles_replace_by_guid() {
        let settings = AppSettings::from_documents(&[
            json!({ "profiles": [{ "guid": CMD, "name": "cmd" }] }),
            json!({ "profiles": [{ "guid": CMD, "name": "Command Prompt" }] }),
        ])
        .unwrap();
        assert_eq!(settings.profiles.len(), 1);
        assert_eq!(settings.profiles[0].name, "Command Prompt");
    }

    #[test]
    fn test_schemes_must_be_an_array() {
        let result = AppSettings::from_documents(&[json!({ "schemes": {} })]);
        assert!(matches!(result, Err(ConfigError::InvalidField { key: "schemes", .. })));
    }

    #[test]
    fn test_failed_layer_leaves_settings_unchanged() {
        let mut settings = AppSettings::starter();
        let before = settings.clone();

        let bad_scheme = json!({
            "copyOnSelect": true,
            "initialRows": 99,
            "schemes": [{ "name": "Bad", "red": "crimson" }]
        });
        assert!(matches!(
            settings.layer_document(&bad_scheme),
            Err(ConfigError::InvalidScheme(_))
        ));
        assert_eq!(settings, before);

        let bad_profile = json!({
            "globals": { "initialCols": 10 },
            "schemes": [{ "name": "Fine" }],
            "profiles": [{ "name": "no guid" }]
        });
        assert!(settings.layer_document(&bad_profile).is_err());
        assert_eq!(settings, before);
    }

    #[test]
    fn test_validate_falls_back_to_first_profile() {
        let mut settings = AppSettings::from_documents(&[json!({
            "defaultProfile": "{11111111-1111-1111-1111-111111111111}",
            "profiles": [{ "guid": CMD, "name": "cmd" }]
        })])
        .unwrap();

        let warnings = settings.validate();
        assert_eq!(
            warnings,
            vec![SettingsWarning::MissingDefaultProfile {
                requested: id("{11111111-1111-1111-1111-111111111111}"),
                fallback: Some(id(CMD)),
            }]
        );
        assert_eq!(settings.globals.default_profile(), id(CMD));
    }

    #[test]
    fn test_validate_without_profiles_keeps_nil() {
        let mut settings = AppSettings::new();
        let warnings = settings.validate();
        assert_eq!(warnings.len(), 1);
        assert!(settings.globals.default_profile().is_nil());
    }

    #[test]
    fn test_validate_reports_unknown_scheme() {
        let mut settings = AppSettings::from_documents(&[json!({
            "defaultProfile": CMD,
            "profiles": [{ "guid": CMD, "name": "cmd", "colorScheme": "Nope" }]
        })])
        .unwrap();

        let warnings = settings.validate();
        assert_eq!(
            warnings,
            vec![SettingsWarning::UnknownColorScheme {
                profile: "cmd".to_string(),
                scheme: "Nope".to_string(),
            }]
        );
    }

    #[test]
    fn test_valid_settings_have_no_warnings() {
        let mut settings = AppSettings::from_documents(&[json!({
            "defaultProfile": CMD,
            "profiles": [{ "guid": CMD, "name": "cmd", "colorScheme": "Campbell" }]
        })])
        .unwrap();
        assert!(settings.validate().is_empty());
    }

    #[test]
    fn test_to_document_contains_all_sections() {
        let settings = AppSettings::from_documents(&[json!({
            "profiles": [{ "guid": CMD, "name": "cmd" }]
        })])
        .unwrap();
        let doc = settings.to_document();

        assert_eq!(doc["profiles"].as_array().unwrap().len(), 1);
        let names: Vec<&str> = doc["schemes"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|s| s["name"].as_str())
            .collect();
        assert_eq!(names, vec!["Campbell", "One Half Dark", "One Half Light"]);
        assert_eq!(doc["initialRows"], crate::defaults::rows());
    }

    #[test]
    fn test_document_reloads_into_equal_settings() {
        let settings = AppSettings::from_documents(&[json!({
            "defaultProfile": CMD,
            "wordDelimiters": " ",
            "profiles": [{ "guid": CMD, "name": "cmd", "fontSize": 14 }],
            "keybindings": [{ "command": "copy", "keys": ["ctrl+c"] }]
        })])
        .unwrap();

        let reloaded = AppSettings::from_documents(&[settings.to_document()]).unwrap();
        assert_eq!(reloaded, settings);
    }
}
