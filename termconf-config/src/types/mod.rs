//! Configuration types and enums.
//!
//! - `color` — RGB color with `#rrggbb` (de)serialization
//! - `theme` — Requested light/dark/system theme

pub mod color;
pub mod theme;

pub use color::Color;
pub use theme::RequestedTheme;
