//! Color theme constants for the portal UI
//!
//! Institutional palette: pink primary on a dark blue header.

use ratatui::style::Color;

// ============================================================================
// Base Colors
// ============================================================================

/// Primary brand color - pink
pub const COLOR_PRIMARY: Color = Color::Rgb(219, 39, 119); // #DB2777

/// Header and splash background - dark blue
pub const COLOR_HEADER_BG: Color = Color::Rgb(15, 23, 42); // #0F172A

/// Header text color - white for the title
pub const COLOR_HEADER: Color = Color::White;

/// Border color for cards and boxes
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Body text
pub const COLOR_TEXT: Color = Color::Gray;

// ============================================================================
// State Colors
// ============================================================================

/// Today's weekday in the timetable - bright green
pub const COLOR_TODAY: Color = Color::LightGreen;

/// Hyperlinks
pub const COLOR_LINK: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Background of the "Dica do dia" box
pub const COLOR_TIP_BG: Color = Color::Rgb(40, 12, 28);
