//! Color palette shared by the render functions.

use ratatui::style::Color;

/// Accent color used for titles, highlights, and the summary card values.
pub const PRIMARY: Color = Color::Magenta;

/// Default text color.
pub const TEXT: Color = Color::Gray;

/// Border color for unfocused blocks.
pub const BORDER: Color = Color::DarkGray;

/// Border color for the focused block.
pub const BORDER_ACTIVE: Color = Color::Magenta;

/// Color for error messages.
pub const ERROR: Color = Color::Red;

/// Bar colors cycled across categories, matching the original dashboard's
/// five-color chart palette.
pub const SERIES: [Color; 5] = [
    Color::Cyan,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
    Color::LightRed,
];
