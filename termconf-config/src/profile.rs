//! Minimal profile view used to check the default-profile reference.
//!
//! Profile semantics belong to the host application; only the identifier,
//! the display name and the referenced color scheme are read here. Every
//! other key is kept verbatim so a load/save cycle does not lose data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::{ConfigError, Result};

/// Unique identifier for a profile
pub type ProfileId = Uuid;

/// Parse a profile identifier in braced or plain GUID form.
pub fn parse_profile_id(value: &str) -> Result<ProfileId> {
    Uuid::parse_str(value.trim()).map_err(|source| ConfigError::InvalidProfileId {
        value: value.to_string(),
        source,
    })
}

/// Format a profile identifier as `{xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx}`.
pub fn format_profile_id(id: &ProfileId) -> String {
    id.braced().to_string()
}

/// A terminal session profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique identifier for this profile
    #[serde(with = "braced_guid")]
    pub guid: ProfileId,

    /// Display name for the profile
    #[serde(default)]
    pub name: String,

    /// Name of the color scheme this profile uses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<String>,

    /// Keys this crate does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    pub fn new(guid: ProfileId, name: impl Into<String>) -> Self {
        Self {
            guid,
            name: name.into(),
            color_scheme: None,
            extra: Map::new(),
        }
    }

    /// Decode one entry of a settings file's `profiles` array.
    pub fn from_document(doc: &Value) -> Result<Self> {
        let guid = match doc.get("guid") {
            Some(Value::String(guid)) => parse_profile_id(guid)?,
            _ => {
                return Err(ConfigError::InvalidField {
                    key: "guid",
                    source: serde::de::Error::custom("profile is missing a 'guid' string"),
                });
            }
        };
        let mut profile =
            Self::deserialize(doc).map_err(|source| ConfigError::InvalidField {
                key: "profiles",
                source,
            })?;
        profile.guid = guid;
        Ok(profile)
    }

    /// Serialize this profile as a settings document.
    pub fn to_document(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

mod braced_guid {
    use serde::{Deserialize, Deserializer, Serializer};
    use uuid::Uuid;

    pub fn serialize<S: Serializer>(id: &Uuid, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&id.braced())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
        let value = String::deserialize(deserializer)?;
        Uuid::parse_str(value.trim()).map_err(serde::de::Error::custom)
    }
}
