//! Color definitions for charts

/// Common colors
pub(super) const COLOR_BACKGROUND: &str = "#0A0A0C"; // Near black
pub(super) const COLOR_TEXT: &str = "#FFFFFF"; // White
pub(super) const COLOR_GRID: &str = "#505050"; // Grid lines

/// Response curve
pub(super) const COLOR_RESPONSE: &str = "#68B4FF"; // Blue
pub(super) const COLOR_RESPONSE_AREA: &str = "#1888F8"; // Vivid blue
