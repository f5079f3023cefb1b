//! Color constants and helpers for the TUI.

use ratatui::style::Color;

/// Frequency trace line color.
pub const FREQ_COLOR: Color = Color::Cyan;
/// Target frequency reference line color.
pub const TARGET_COLOR: Color = Color::DarkGray;
/// Battery gauge color when high (>= 50%).
pub const BATTERY_HIGH: Color = Color::Green;
/// Battery gauge color when medium (>= 20%).
pub const BATTERY_MID: Color = Color::Yellow;
/// Battery gauge color when low (< 20%).
pub const BATTERY_LOW: Color = Color::Red;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Game-over banner color.
pub const GAME_OVER: Color = Color::Red;

/// Returns a color based on the battery level percentage.
pub fn battery_color(level_pct: f64) -> Color {
    if level_pct >= 50.0 {
        BATTERY_HIGH
    } else if level_pct >= 20.0 {
        BATTERY_MID
    } else {
        BATTERY_LOW
    }
}

/// Returns a color for the current frequency: green on target, yellow as it
/// drifts, red inside the last half-hertz before a failure threshold.
pub fn frequency_color(frequency: f64, target: f64, low: f64, high: f64) -> Color {
    let drift = (frequency - target).abs();
    let margin = (frequency - low).min(high - frequency);
    if margin <= 0.5 {
        Color::Red
    } else if drift <= 1.0 {
        Color::Green
    } else {
        Color::Yellow
    }
}
