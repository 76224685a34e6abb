//! Default values for window and visual-appearance settings.

use crate::types::RequestedTheme;

pub fn cols() -> i32 {
    120
}

pub fn rows() -> i32 {
    30
}

pub fn requested_theme() -> RequestedTheme {
    RequestedTheme::SystemDefault
}
