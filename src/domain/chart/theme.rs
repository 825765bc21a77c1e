//! Chart theme — colors handed to the rendering surface.

use serde::{Deserialize, Serialize};

/// Color configuration for a chart surface. All fields have defaults, so
/// hosts override only what they need:
///
/// ```rust
/// use chartfeed::domain::chart::ChartTheme;
///
/// let theme = ChartTheme {
///     background_color: "#1e1e1e".to_string(),
///     ..ChartTheme::default()
/// };
/// assert_eq!(theme.line_color, "#2962FF");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub background_color: String,
    pub line_color: String,
    pub text_color: String,
    pub area_top_color: String,
    pub area_bottom_color: String,
    /// Body/wick color for rising candles.
    pub up_color: String,
    /// Body/wick color for falling candles.
    pub down_color: String,
    pub border_visible: bool,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background_color: "white".to_string(),
            line_color: "#2962FF".to_string(),
            text_color: "white".to_string(),
            area_top_color: "#2962FF".to_string(),
            area_bottom_color: "rgba(41, 98, 255, 0.28)".to_string(),
            up_color: "#26a69a".to_string(),
            down_color: "#ef5350".to_string(),
            border_visible: false,
        }
    }
}
