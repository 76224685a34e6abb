//! Key chord parser.
//!
//! Parses human-readable chord strings like "ctrl+shift+c" into [`KeyChord`]
//! values and formats them back in canonical lowercase order.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error type for chord parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty key chord")]
    Empty,

    #[error("Key chord '{0}' ends with a modifier, no key specified")]
    TrailingModifier(String),

    #[error("Multiple keys specified in '{chord}': already have a key, found '{extra}'")]
    MultipleKeys { chord: String, extra: String },

    #[error("Unknown key: '{0}'")]
    UnknownKey(String),
}

/// Set of active modifiers for a key chord.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    /// Windows/Super/Cmd key
    pub win: bool,
}

/// Named (non-character) keys a chord may end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NamedKey {
    /// Function key F1..=F24
    Function(u8),
    Enter,
    Tab,
    Space,
    Backspace,
    Escape,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    Plus,
    Minus,
}

impl NamedKey {
    fn parse(s: &str) -> Option<Self> {
        let named = match s {
            "enter" | "return" => NamedKey::Enter,
            "tab" => NamedKey::Tab,
            "space" => NamedKey::Space,
            "backspace" => NamedKey::Backspace,
            "esc" | "escape" => NamedKey::Escape,
            "del" | "delete" => NamedKey::Delete,
            "ins" | "insert" => NamedKey::Insert,
            "home" => NamedKey::Home,
            "end" => NamedKey::End,
            "pgup" | "pageup" => NamedKey::PageUp,
            "pgdn" | "pagedown" => NamedKey::PageDown,
            "up" | "arrowup" => NamedKey::Up,
            "down" | "arrowdown" => NamedKey::Down,
            "left" | "arrowleft" => NamedKey::Left,
            "right" | "arrowright" => NamedKey::Right,
            "plus" => NamedKey::Plus,
            "minus" => NamedKey::Minus,
            _ => {
                let n: u8 = s.strip_prefix('f')?.parse().ok()?;
                if (1..=24).contains(&n) {
                    NamedKey::Function(n)
                } else {
                    return None;
                }
            }
        };
        Some(named)
    }

    fn name(&self) -> String {
        match self {
            NamedKey::Function(n) => format!("f{n}"),
            NamedKey::Enter => "enter".to_string(),
            NamedKey::Tab => "tab".to_string(),
            NamedKey::Space => "space".to_string(),
            NamedKey::Backspace => "backspace".to_string(),
            NamedKey::Escape => "esc".to_string(),
            NamedKey::Delete => "delete".to_string(),
            NamedKey::Insert => "insert".to_string(),
            NamedKey::Home => "home".to_string(),
            NamedKey::End => "end".to_string(),
            NamedKey::PageUp => "pgup".to_string(),
            NamedKey::PageDown => "pgdn".to_string(),
            NamedKey::Up => "up".to_string(),
            NamedKey::Down => "down".to_string(),
            NamedKey::Left => "left".to_string(),
            NamedKey::Right => "right".to_string(),
            NamedKey::Plus => "plus".to_string(),
            NamedKey::Minus => "minus".to_string(),
        }
    }
}

/// The key a chord ends with (either a character or a named key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParsedKey {
    /// A single printable character, stored lowercase (e.g. 'c', '1', ',')
    Character(char),
    /// A named key (e.g. F1, Enter, PageUp)
    Named(NamedKey),
}

/// A parsed key chord (modifiers + key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyChord {
    pub modifiers: Modifiers,
    pub key: ParsedKey,
}

impl KeyChord {
    pub fn new(modifiers: Modifiers, key: ParsedKey) -> Self {
        Self { modifiers, key }
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.ctrl {
            parts.push("ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("shift".to_string());
        }
        if self.modifiers.win {
            parts.push("win".to_string());
        }

        match &self.key {
            ParsedKey::Character(c) => parts.push(c.to_string()),
            ParsedKey::Named(n) => parts.push(n.name()),
        }

        write!(f, "{}", parts.join("+"))
    }
}

impl FromStr for KeyChord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key_chord(s)
    }
}

/// Parse a key chord string into a KeyChord.
///
/// Supported format: "modifier+modifier+key", case-insensitive.
///
/// Modifiers:
/// - `ctrl`, `control`
/// - `alt`, `option`
/// - `shift`
/// - `win`, `super`, `cmd`, `meta`
///
/// Keys:
/// - Single characters: `a`, `1`, `,`, etc.
/// - Named keys: `f1`-`f24`, `enter`, `esc`, `space`, `tab`, `pgup`, `plus`, ...
pub fn parse_key_chord(s: &str) -> Result<KeyChord, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let parts: Vec<&str> = trimmed.split('+').map(str::trim).collect();

    let mut modifiers = Modifiers::default();
    let mut key_part = None;

    for (i, part) in parts.iter().enumerate() {
        let is_last = i == parts.len() - 1;
        let part_lower = part.to_lowercase();

        let is_modifier = match part_lower.as_str() {
            "ctrl" | "control" => {
                modifiers.ctrl = true;
                true
            }
            "alt" | "option" => {
                modifiers.alt = true;
                true
            }
            "shift" => {
                modifiers.shift = true;
                true
            }
            "win" | "super" | "cmd" | "meta" => {
                modifiers.win = true;
                true
            }
            _ => false,
        };

        if !is_modifier {
            if key_part.is_some() {
                return Err(ParseError::MultipleKeys {
                    chord: trimmed.to_string(),
                    extra: part.to_string(),
                });
            }
            key_part = Some(part_lower);
        } else if is_last {
            return Err(ParseError::TrailingModifier(trimmed.to_string()));
        }
    }

    let key_str = key_part.ok_or(ParseError::Empty)?;
    let key = parse_key(&key_str)?;

    Ok(KeyChord { modifiers, key })
}

/// Parse an already-lowercased key string into a ParsedKey.
fn parse_key(s: &str) -> Result<ParsedKey, ParseError> {
    if let Some(named) = NamedKey::parse(s) {
        return Ok(ParsedKey::Named(named));
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        // Characters that are also named keys resolve to the named key
        (Some('-'), None) => Ok(ParsedKey::Named(NamedKey::Minus)),
        (Some('+'), None) => Ok(ParsedKey::Named(NamedKey::Plus)),
        (Some(c), None) if !c.is_whitespace() && !c.is_control() => Ok(ParsedKey::Character(c)),
        _ => Err(ParseError::UnknownKey(s.to_string())),
    }
}
