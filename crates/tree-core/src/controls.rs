//! Keyboard bindings shared by both frontends. Keys are `KeyboardEvent.key`
//! style names; the native frontend maps winit keys onto the same strings.

use crate::theme::ThemeId;

/// Radians per arrow-key press.
pub const ORBIT_STEP: f32 = 0.15;
/// World units per arrow-key press.
pub const ZOOM_STEP: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    ToggleMode,
    CycleTheme,
    SelectTheme(ThemeId),
    ToggleOverlay,
    SaveSnapshot,
    AddPhotos,
    Orbit(f32),
    Zoom(f32),
    Fullscreen,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        " " | "Space" => Some(KeyAction::ToggleMode),
        "t" | "T" => Some(KeyAction::CycleTheme),
        "1" => Some(KeyAction::SelectTheme(ThemeId::AuroraGreen)),
        "2" => Some(KeyAction::SelectTheme(ThemeId::LuxuryGold)),
        "h" | "H" => Some(KeyAction::ToggleOverlay),
        "s" | "S" => Some(KeyAction::SaveSnapshot),
        "p" | "P" => Some(KeyAction::AddPhotos),
        "ArrowLeft" => Some(KeyAction::Orbit(-ORBIT_STEP)),
        "ArrowRight" => Some(KeyAction::Orbit(ORBIT_STEP)),
        "ArrowUp" => Some(KeyAction::Zoom(-ZOOM_STEP)),
        "ArrowDown" => Some(KeyAction::Zoom(ZOOM_STEP)),
        "Enter" => Some(KeyAction::Fullscreen),
        _ => None,
    }
}

/// Lines shown in the help overlay.
pub const HELP_LINES: &[&str] = &[
    "Space  assemble / scatter",
    "T      next theme",
    "1 / 2  emerald / gold",
    "P      add photos",
    "S      save scene",
    "Arrows orbit / zoom",
    "H      hide this help",
];
