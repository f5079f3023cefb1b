//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::types::BatteryMode;

use super::runtime::App;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Char('g') => app.toggle_generator(),
        KeyCode::Char('c') => app.set_battery_mode(BatteryMode::Charge),
        KeyCode::Char('d') => app.set_battery_mode(BatteryMode::Discharge),
        KeyCode::Char('i') => app.set_battery_mode(BatteryMode::Idle),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}
