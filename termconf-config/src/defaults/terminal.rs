//! Default values for terminal-behaviour settings.

/// Characters that end a word when double-click selecting.
/// Includes U+2502 (box drawings light vertical) so pane borders split words.
pub fn word_delimiters() -> String {
    " ./\\()\"'-:,.;<>~!@#$%^&*|+=[]{}~?\u{2502}".to_string()
}

pub fn font_face() -> String {
    "Consolas".to_string()
}

pub fn font_size() -> i32 {
    12
}

pub fn history_size() -> i32 {
    9001
}
