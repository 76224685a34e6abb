//! JSON (de)serialization of the `keybindings` settings array.
//!
//! Each entry looks like `{"command": "copy", "keys": ["ctrl+shift+c"]}`.
//! `keys` may also be a bare string. A `null` command, or the command
//! `"unbound"`, removes whatever those chords were bound to.

use serde::Serialize;
use serde_json::Value;

use crate::KeyBindingTable;
use crate::parser::parse_key_chord;

/// Command name that unbinds the listed chords.
pub const UNBOUND_COMMAND: &str = "unbound";

/// A single serialized keybinding entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyBindingEntry {
    pub command: Option<String>,
    pub keys: Vec<String>,
}

impl KeyBindingTable {
    /// Layer a `keybindings` document on top of the current bindings.
    ///
    /// Entries are applied in order. Malformed entries and unparsable chords
    /// are logged and skipped; the rest of the document still applies.
    /// Returns the number of chords that were bound or unbound.
    pub fn load_from_document(&mut self, doc: &Value) -> usize {
        let Some(entries) = doc.as_array() else {
            log::warn!("Ignoring keybindings: expected an array, found {}", kind(doc));
            return 0;
        };

        let mut applied = 0;
        for (index, entry) in entries.iter().enumerate() {
            let Some(object) = entry.as_object() else {
                log::warn!("Skipping keybinding #{index}: expected an object");
                continue;
            };

            let command = match object.get("command") {
                None | Some(Value::Null) => None,
                Some(Value::String(command)) if command == UNBOUND_COMMAND => None,
                Some(Value::String(command)) => Some(command.as_str()),
                Some(other) => {
                    log::warn!(
                        "Skipping keybinding #{index}: command must be a string, found {}",
                        kind(other)
                    );
                    continue;
                }
            };

            let keys: Vec<&str> = match object.get("keys") {
                Some(Value::String(key)) => vec![key.as_str()],
                Some(Value::Array(keys)) => keys
                    .iter()
                    .filter_map(|key| {
                        let key = key.as_str();
                        if key.is_none() {
                            log::warn!("Skipping non-string key in keybinding #{index}");
                        }
                        key
                    })
                    .collect(),
                _ => {
                    log::warn!("Skipping keybinding #{index}: missing 'keys'");
                    continue;
                }
            };

            for key in keys {
                let chord = match parse_key_chord(key) {
                    Ok(chord) => chord,
                    Err(e) => {
                        log::warn!("Invalid key chord '{}' in keybinding #{index}: {}", key, e);
                        continue;
                    }
                };
                match command {
                    Some(command) => {
                        self.set_binding(chord, command);
                    }
                    None => {
                        self.clear_binding(&chord);
                    }
                }
                applied += 1;
            }
        }

        log::debug!(
            "Layered {} keybinding chord(s); table now holds {}",
            applied,
            self.len()
        );
        applied
    }

    /// Serialized entries, one per chord, sorted by command then chord.
    pub fn entries(&self) -> Vec<KeyBindingEntry> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_by(|(a_chord, a_cmd), (b_chord, b_cmd)| {
            a_cmd.cmp(b_cmd).then_with(|| a_chord.cmp(b_chord))
        });

        pairs
            .into_iter()
            .map(|(chord, command)| KeyBindingEntry {
                command: Some(command.to_string()),
                keys: vec![chord.to_string()],
            })
            .collect()
    }

    /// Serialize the table as a `keybindings` array.
    pub fn to_document(&self) -> Value {
        match serde_json::to_value(self.entries()) {
            Ok(doc) => doc,
            Err(e) => {
                log::error!("Failed to serialize keybindings: {}", e);
                Value::Array(Vec::new())
            }
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_binds_every_key() {
        let mut table = KeyBindingTable::new();
        let applied = table.load_from_document(&json!([
            { "command": "copy", "keys": ["ctrl+shift+c", "ctrl+insert"] },
            { "command": "paste", "keys": "ctrl+shift+v" }
        ]));
        assert_eq!(applied, 3);
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.lookup(&parse_key_chord("ctrl+insert").unwrap()),
            Some("copy")
        );
        assert_eq!(
            table.lookup(&parse_key_chord("ctrl+shift+v").unwrap()),
            Some("paste")
        );
    }

    #[test]
    fn test_null_and_unbound_remove_bindings() {
        let mut table = KeyBindingTable::new();
        table.load_from_document(&json!([
            { "command": "copy", "keys": ["ctrl+shift+c"] },
            { "command": "paste", "keys": ["ctrl+shift+v"] }
        ]));
        table.load_from_document(&json!([
            { "command": null, "keys": ["ctrl+shift+c"] },
            { "command": "unbound", "keys": ["ctrl+shift+v"] }
        ]));
        assert!(table.is_empty());
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let mut table = KeyBindingTable::new();
        let applied = table.load_from_document(&json!([
            "not an object",
            { "command": 42, "keys": ["ctrl+a"] },
            { "command": "noKeys" },
            { "command": "newTab", "keys": ["ctrl+bogus", 7, "ctrl+t"] }
        ]));
        assert_eq!(applied, 1);
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup(&parse_key_chord("ctrl+t").unwrap()), Some("newTab"));
    }

    #[test]
    fn test_non_array_document_is_ignored() {
        let mut table = KeyBindingTable::new();
        assert_eq!(table.load_from_document(&json!({ "copy": "ctrl+c" })), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_to_document_is_sorted() {
        let mut table = KeyBindingTable::new();
        table.set_binding(parse_key_chord("ctrl+shift+v").unwrap(), "paste");
        table.set_binding(parse_key_chord("ctrl+shift+c").unwrap(), "copy");

        assert_eq!(
            table.to_document(),
            json!([
                { "command": "copy", "keys": ["ctrl+shift+c"] },
                { "command": "paste", "keys": ["ctrl+shift+v"] }
            ])
        );
    }

    #[test]
    fn test_document_reloads_into_equal_table() {
        let mut table = KeyBindingTable::new();
        table.load_from_document(&json!([
            { "command": "closePane", "keys": ["ctrl+shift+w"] },
            { "command": "switchToTab0", "keys": ["ctrl+alt+1"] }
        ]));

        let mut reloaded = KeyBindingTable::new();
        reloaded.load_from_document(&table.to_document());
        assert_eq!(reloaded, table);
    }
}
