//! Keybinding table for termconf.
//!
//! Maps key chords to command names and knows how to layer itself from
//! (and serialize itself to) the `keybindings` array of a settings file.
//! What a command actually does is up to the host application.
//!
//! Features:
//! - Chord parsing with modifier aliases (`ctrl+shift+c`, `cmd+t`, `f11`)
//! - Layered loading: later documents overwrite or unbind earlier chords
//! - Stable serialization sorted by command

mod document;
pub mod parser;

pub use document::{KeyBindingEntry, UNBOUND_COMMAND};
pub use parser::{KeyChord, Modifiers, NamedKey, ParseError, ParsedKey, parse_key_chord};

use std::collections::HashMap;

/// Table of key chords mapped to command names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyBindingTable {
    bindings: HashMap<KeyChord, String>,
}

impl KeyBindingTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `chord` to `command`, returning the command it replaced.
    pub fn set_binding(&mut self, chord: KeyChord, command: impl Into<String>) -> Option<String> {
        let command = command.into();
        log::debug!("Binding {} -> {}", chord, command);
        self.bindings.insert(chord, command)
    }

    /// Remove any binding for `chord`, returning the command it was bound to.
    pub fn clear_binding(&mut self, chord: &KeyChord) -> Option<String> {
        let removed = self.bindings.remove(chord);
        if let Some(command) = &removed {
            log::debug!("Unbinding {} (was {})", chord, command);
        }
        removed
    }

    /// Look up the command bound to a chord.
    pub fn lookup(&self, chord: &KeyChord) -> Option<&str> {
        self.bindings.get(chord).map(String::as_str)
    }

    /// All chords bound to `command`, in canonical order.
    pub fn chords_for(&self, command: &str) -> Vec<KeyChord> {
        let mut chords: Vec<KeyChord> = self
            .bindings
            .iter()
            .filter(|(_, bound)| bound.as_str() == command)
            .map(|(chord, _)| *chord)
            .collect();
        chords.sort();
        chords
    }

    /// Iterate over all (chord, command) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&KeyChord, &str)> {
        self.bindings
            .iter()
            .map(|(chord, command)| (chord, command.as_str()))
    }

    /// Check if the table has any bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Get the number of bound chords.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord(s: &str) -> KeyChord {
        parse_key_chord(s).unwrap()
    }

    #[test]
    fn test_empty_table() {
        let table = KeyBindingTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_set_and_lookup() {
        let mut table = KeyBindingTable::new();
        assert_eq!(table.set_binding(chord("ctrl+shift+t"), "newTab"), None);
        assert_eq!(table.lookup(&chord("Ctrl+Shift+T")), Some("newTab"));
        assert_eq!(table.lookup(&chord("ctrl+t")), None);
    }

    #[test]
    fn test_rebinding_replaces() {
        let mut table = KeyBindingTable::new();
        table.set_binding(chord("ctrl+c"), "copy");
        let previous = table.set_binding(chord("ctrl+c"), "closeTab");
        assert_eq!(previous.as_deref(), Some("copy"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_clear_binding() {
        let mut table = KeyBindingTable::new();
        table.set_binding(chord("ctrl+c"), "copy");
        assert_eq!(table.clear_binding(&chord("ctrl+c")).as_deref(), Some("copy"));
        assert_eq!(table.clear_binding(&chord("ctrl+c")), None);
        assert!(table.is_empty());
    }

    #[test]
    fn test_chords_for_command() {
        let mut table = KeyBindingTable::new();
        table.set_binding(chord("ctrl+shift+c"), "copy");
        table.set_binding(chord("ctrl+insert"), "copy");
        table.set_binding(chord("ctrl+shift+v"), "paste");

        let chords = table.chords_for("copy");
        assert_eq!(chords.len(), 2);
        assert!(chords.contains(&chord("ctrl+insert")));
        assert!(table.chords_for("closePane").is_empty());
    }
}
