//! Miscellaneous default values.

pub fn bool_false() -> bool {
    false
}

pub fn bool_true() -> bool {
    true
}

pub fn color_scheme() -> String {
    "Campbell".to_string()
}
