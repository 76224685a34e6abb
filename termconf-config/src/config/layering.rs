//! Layered JSON loading and snapshot serialization for `GlobalConfig`.
//!
//! A document only overwrites the fields whose keys it contains (a `null`
//! value counts as absent), so a defaults file and a user file can be
//! applied one after the other. Every recognized key is listed once in
//! [`keys`] and decoded by [`GlobalsLayer::decode`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::global_config::GlobalConfig;
use crate::error::{ConfigError, Result};
use crate::profile::{ProfileId, format_profile_id, parse_profile_id};
use crate::types::RequestedTheme;

/// Settings keys read and written by `GlobalConfig`.
pub mod keys {
    pub const DEFAULT_PROFILE: &str = "defaultProfile";
    pub const INITIAL_ROWS: &str = "initialRows";
    pub const INITIAL_COLS: &str = "initialCols";
    pub const ALWAYS_SHOW_TABS: &str = "alwaysShowTabs";
    pub const SHOW_TITLE_IN_TITLEBAR: &str = "showTerminalTitleInTitlebar";
    pub const SHOW_TABS_IN_TITLEBAR: &str = "showTabsInTitlebar";
    pub const WORD_DELIMITERS: &str = "wordDelimiters";
    pub const COPY_ON_SELECT: &str = "copyOnSelect";
    pub const REQUESTED_THEME: &str = "requestedTheme";
    pub const KEYBINDINGS: &str = "keybindings";

    /// Every key, in serialization order.
    pub const ALL: [&str; 10] = [
        DEFAULT_PROFILE,
        INITIAL_ROWS,
        INITIAL_COLS,
        ALWAYS_SHOW_TABS,
        SHOW_TITLE_IN_TITLEBAR,
        SHOW_TABS_IN_TITLEBAR,
        WORD_DELIMITERS,
        COPY_ON_SELECT,
        REQUESTED_THEME,
        KEYBINDINGS,
    ];
}

/// The recognized keys present in one document, fully decoded.
///
/// Decoding happens before anything is assigned, so a type error in any
/// key leaves the target config untouched.
#[derive(Debug, Default)]
struct GlobalsLayer<'a> {
    default_profile: Option<ProfileId>,
    always_show_tabs: Option<bool>,
    initial_rows: Option<i32>,
    initial_cols: Option<i32>,
    show_title_in_titlebar: Option<bool>,
    show_tabs_in_titlebar: Option<bool>,
    word_delimiters: Option<String>,
    copy_on_select: Option<bool>,
    requested_theme: Option<RequestedTheme>,
    key_bindings: Option<&'a Value>,
}

impl<'a> GlobalsLayer<'a> {
    fn decode(doc: &'a Map<String, Value>) -> Result<Self> {
        let default_profile = read::<String>(doc, keys::DEFAULT_PROFILE)?
            .map(|id| parse_profile_id(&id))
            .transpose()?;

        Ok(Self {
            default_profile,
            always_show_tabs: read(doc, keys::ALWAYS_SHOW_TABS)?,
            initial_rows: read(doc, keys::INITIAL_ROWS)?,
            initial_cols: read(doc, keys::INITIAL_COLS)?,
            show_title_in_titlebar: read(doc, keys::SHOW_TITLE_IN_TITLEBAR)?,
            show_tabs_in_titlebar: read(doc, keys::SHOW_TABS_IN_TITLEBAR)?,
            word_delimiters: read(doc, keys::WORD_DELIMITERS)?,
            copy_on_select: read(doc, keys::COPY_ON_SELECT)?,
            requested_theme: read(doc, keys::REQUESTED_THEME)?,
            key_bindings: present(doc, keys::KEYBINDINGS),
        })
    }

    fn apply(self, config: &mut GlobalConfig) {
        assign(&mut config.default_profile, self.default_profile);
        assign(&mut config.always_show_tabs, self.always_show_tabs);
        assign(&mut config.initial_rows, self.initial_rows);
        assign(&mut config.initial_cols, self.initial_cols);
        assign(&mut config.show_title_in_titlebar, self.show_title_in_titlebar);
        assign(&mut config.show_tabs_in_titlebar, self.show_tabs_in_titlebar);
        assign(&mut config.word_delimiters, self.word_delimiters);
        assign(&mut config.copy_on_select, self.copy_on_select);
        assign(&mut config.requested_theme, self.requested_theme);

        if let Some(bindings) = self.key_bindings {
            config.key_bindings_mut().load_from_document(bindings);
        }
    }
}

/// The value under `key`, treating `null` as absent.
fn present<'a>(doc: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    doc.get(key).filter(|value| !value.is_null())
}

/// Decode the value under `key` if it is present.
fn read<T: DeserializeOwned>(doc: &Map<String, Value>, key: &'static str) -> Result<Option<T>> {
    present(doc, key)
        .map(|value| T::deserialize(value).map_err(|source| ConfigError::InvalidField { key, source }))
        .transpose()
}

fn assign<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

impl GlobalConfig {
    /// Build a config from defaults plus a single document.
    pub fn from_document(doc: &Value) -> Result<Self> {
        let mut config = Self::new();
        config.load_from_document(doc)?;
        Ok(config)
    }

    /// Overlay the recognized keys present in `doc` onto this config.
    ///
    /// Absent keys keep their current value. Unknown keys are ignored. The
    /// `keybindings` value is handed to the key-binding table, which skips
    /// malformed entries on its own.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] if a recognized key holds the
    /// wrong JSON type, or [`ConfigError::InvalidProfileId`] if
    /// `defaultProfile` is not a GUID. In both cases no field is changed.
    pub fn load_from_document(&mut self, doc: &Value) -> Result<()> {
        let object = match doc {
            Value::Object(object) => object,
            Value::Null => return Ok(()),
            _ => {
                return Err(ConfigError::InvalidField {
                    key: "globals",
                    source: serde::de::Error::custom("expected a JSON object"),
                });
            }
        };

        let layer = GlobalsLayer::decode(object)?;
        log::debug!("Layering global settings: {:?}", layer);
        layer.apply(self);
        Ok(())
    }

    /// Serialize every global key (a full snapshot, not a diff).
    pub fn to_document(&self) -> Value {
        let mut doc = Map::new();
        doc.insert(
            keys::DEFAULT_PROFILE.to_string(),
            Value::from(format_profile_id(&self.default_profile)),
        );
        doc.insert(keys::INITIAL_ROWS.to_string(), Value::from(self.initial_rows));
        doc.insert(keys::INITIAL_COLS.to_string(), Value::from(self.initial_cols));
        doc.insert(
            keys::ALWAYS_SHOW_TABS.to_string(),
            Value::from(self.always_show_tabs),
        );
        doc.insert(
            keys::SHOW_TITLE_IN_TITLEBAR.to_string(),
            Value::from(self.show_title_in_titlebar),
        );
        doc.insert(
            keys::SHOW_TABS_IN_TITLEBAR.to_string(),
            Value::from(self.show_tabs_in_titlebar),
        );
        doc.insert(
            keys::WORD_DELIMITERS.to_string(),
            Value::from(self.word_delimiters.clone()),
        );
        doc.insert(keys::COPY_ON_SELECT.to_string(), Value::from(self.copy_on_select));
        doc.insert(
            keys::REQUESTED_THEME.to_string(),
            Value::from(self.requested_theme.as_str()),
        );
        doc.insert(keys::KEYBINDINGS.to_string(), self.key_bindings.to_document());
        Value::Object(doc)
    }
}
