//! Requested application theme.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Display mode the window chrome should use.
///
/// Parsing never fails: any string other than `"light"` or `"dark"` maps
/// to [`RequestedTheme::SystemDefault`], so settings written by newer or
/// older versions still load. Serialization always produces one of the
/// three known strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RequestedTheme {
    Light,
    Dark,
    /// Follow the operating system's light/dark preference
    #[default]
    SystemDefault,
}

impl RequestedTheme {
    pub const LIGHT: &'static str = "light";
    pub const DARK: &'static str = "dark";
    pub const SYSTEM: &'static str = "system";

    /// Map a settings string to a theme. Case-sensitive.
    pub fn parse(value: &str) -> Self {
        match value {
            Self::LIGHT => RequestedTheme::Light,
            Self::DARK => RequestedTheme::Dark,
            Self::SYSTEM => RequestedTheme::SystemDefault,
            other => {
                log::warn!("Unknown requestedTheme '{other}', using system theme");
                RequestedTheme::SystemDefault
            }
        }
    }

    /// The settings string for this theme.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestedTheme::Light => Self::LIGHT,
            RequestedTheme::Dark => Self::DARK,
            RequestedTheme::SystemDefault => Self::SYSTEM,
        }
    }

    /// All themes for UI iteration
    pub fn all() -> &'static [RequestedTheme] {
        &[
            RequestedTheme::Light,
            RequestedTheme::Dark,
            RequestedTheme::SystemDefault,
        ]
    }
}

impl From<&str> for RequestedTheme {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for RequestedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RequestedTheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RequestedTheme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_strings_round_trip() {
        for s in ["light", "dark", "system"] {
            assert_eq!(RequestedTheme::parse(s).as_str(), s);
        }
    }

    #[test]
    fn test_system_maps_to_default() {
        assert_eq!(RequestedTheme::parse("system"), RequestedTheme::SystemDefault);
        assert_eq!(RequestedTheme::SystemDefault.as_str(), "system");
        assert_eq!(RequestedTheme::default(), RequestedTheme::SystemDefault);
    }

    #[test]
    fn test_invalid_strings_degrade_to_system() {
        for s in ["", "Light", "DARK", "solarized", " dark"] {
            assert_eq!(RequestedTheme::parse(s), RequestedTheme::SystemDefault);
        }
    }

    #[test]
    fn test_serde_is_lenient() {
        let theme: RequestedTheme = serde_json::from_str("\"midnight\"").unwrap();
        assert_eq!(theme, RequestedTheme::SystemDefault);

        let theme: RequestedTheme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(serde_json::to_string(&theme).unwrap(), "\"dark\"");
    }

    #[test]
    fn test_serde_rejects_non_string() {
        assert!(serde_json::from_str::<RequestedTheme>("1").is_err());
    }
}
