/// Color scheme definitions registered with the global settings
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::types::Color;

/// Terminal color scheme with 16 ANSI colors plus foreground/background
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorScheme {
    pub name: String,
    pub foreground: Color,
    pub background: Color,
    pub cursor_color: Color,
    pub selection_background: Color,

    // ANSI colors (0-15)
    pub black: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub purple: Color,
    pub cyan: Color,
    pub white: Color,
    pub bright_black: Color,
    pub bright_red: Color,
    pub bright_green: Color,
    pub bright_yellow: Color,
    pub bright_blue: Color,
    pub bright_purple: Color,
    pub bright_cyan: Color,
    pub bright_white: Color,
}

impl ColorScheme {
    /// Decode a scheme from one entry of a settings file's `schemes` array.
    ///
    /// `name` is required; any missing color falls back to Campbell.
    pub fn from_document(doc: &Value) -> Result<Self> {
        match doc.get("name") {
            Some(Value::String(name)) if !name.is_empty() => {}
            _ => {
                return Err(ConfigError::InvalidScheme(
                    "scheme is missing a 'name'".to_string(),
                ));
            }
        }
        Self::deserialize(doc).map_err(|e| ConfigError::InvalidScheme(e.to_string()))
    }

    /// Serialize this scheme as a settings document.
    pub fn to_document(&self) -> Value {
        // Every field is a string; serialization cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Get ANSI color by index (0-15)
    pub fn ansi_color(&self, index: u8) -> Color {
        match index {
            0 => self.black,
            1 => self.red,
            2 => self.green,
            3 => self.yellow,
            4 => self.blue,
            5 => self.purple,
            6 => self.cyan,
            7 => self.white,
            8 => self.bright_black,
            9 => self.bright_red,
            10 => self.bright_green,
            11 => self.bright_yellow,
            12 => self.bright_blue,
            13 => self.bright_purple,
            14 => self.bright_cyan,
            15 => self.bright_white,
            _ => self.foreground,
        }
    }

    /// Campbell, the default scheme
    pub fn campbell() -> Self {
        Self {
            name: "Campbell".to_string(),
            foreground: Color::new(204, 204, 204),
            background: Color::new(12, 12, 12),
            cursor_color: Color::new(255, 255, 255),
            selection_background: Color::new(255, 255, 255),
            black: Color::new(12, 12, 12),
            red: Color::new(197, 15, 31),
            green: Color::new(19, 161, 14),
            yellow: Color::new(193, 156, 0),
            blue: Color::new(0, 55, 218),
            purple: Color::new(136, 23, 152),
            cyan: Color::new(58, 150, 221),
            white: Color::new(204, 204, 204),
            bright_black: Color::new(118, 118, 118),
            bright_red: Color::new(231, 72, 86),
            bright_green: Color::new(22, 198, 12),
            bright_yellow: Color::new(249, 241, 165),
            bright_blue: Color::new(59, 120, 255),
            bright_purple: Color::new(180, 0, 158),
            bright_cyan: Color::new(97, 214, 214),
            bright_white: Color::new(242, 242, 242),
        }
    }

    /// One Half Dark
    pub fn one_half_dark() -> Self {
        Self {
            name: "One Half Dark".to_string(),
            foreground: Color::new(220, 223, 228),
            background: Color::new(40, 44, 52),
            cursor_color: Color::new(255, 255, 255),
            selection_background: Color::new(255, 255, 255),
            black: Color::new(40, 44, 52),
            red: Color::new(224, 108, 117),
            green: Color::new(152, 195, 121),
            yellow: Color::new(229, 192, 123),
            blue: Color::new(97, 175, 239),
            purple: Color::new(198, 120, 221),
            cyan: Color::new(86, 182, 194),
            white: Color::new(220, 223, 228),
            bright_black: Color::new(90, 99, 116),
            bright_red: Color::new(224, 108, 117),
            bright_green: Color::new(152, 195, 121),
            bright_yellow: Color::new(229, 192, 123),
            bright_blue: Color::new(97, 175, 239),
            bright_purple: Color::new(198, 120, 221),
            bright_cyan: Color::new(86, 182, 194),
            bright_white: Color::new(220, 223, 228),
        }
    }

    /// One Half Light
    pub fn one_half_light() -> Self {
        Self {
            name: "One Half Light".to_string(),
            foreground: Color::new(56, 58, 66),
            background: Color::new(250, 250, 250),
            cursor_color: Color::new(79, 82, 93),
            selection_background: Color::new(56, 58, 66),
            black: Color::new(56, 58, 66),
            red: Color::new(228, 86, 73),
            green: Color::new(80, 161, 79),
            yellow: Color::new(193, 131, 1),
            blue: Color::new(1, 132, 188),
            purple: Color::new(166, 38, 164),
            cyan: Color::new(9, 151, 179),
            white: Color::new(250, 250, 250),
            bright_black: Color::new(79, 82, 93),
            bright_red: Color::new(223, 108, 117),
            bright_green: Color::new(152, 195, 121),
            bright_yellow: Color::new(228, 192, 122),
            bright_blue: Color::new(97, 175, 239),
            bright_purple: Color::new(197, 119, 221),
            bright_cyan: Color::new(86, 181, 193),
            bright_white: Color::new(255, 255, 255),
        }
    }

    /// Look up a built-in scheme by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "Campbell" => Some(Self::campbell()),
            "One Half Dark" => Some(Self::one_half_dark()),
            "One Half Light" => Some(Self::one_half_light()),
            _ => None,
        }
    }

    /// All built-in schemes, in display order
    pub fn builtin() -> Vec<Self> {
        vec![
            Self::campbell(),
            Self::one_half_dark(),
            Self::one_half_light(),
        ]
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::campbell()
    }
}
