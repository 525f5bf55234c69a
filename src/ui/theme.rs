//! Colour constants for the demo screen chrome.
//!
//! Counter colours come from configuration; these only cover labels and the
//! footer.

use ratatui::style::Color;

/// Accent colour for the focused counter's marker and label
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for unfocused labels and hints
pub const COLOR_DIM: Color = Color::DarkGray;

/// Footer status messages (rejected updates)
pub const COLOR_ERROR: Color = Color::Red;
