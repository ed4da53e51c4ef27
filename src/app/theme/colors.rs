//! Color constants for the light account-app theme.
//!
//! The palette is a plain light scheme: blue primary actions, off-white
//! backgrounds, red error banner.

use eframe::egui::Color32;

/// Main screen background - Off-white
pub const BG_LIGHT: Color32 = Color32::from_rgb(0xF5, 0xF5, 0xF5);

/// Card/section background - White
pub const CARD_BG: Color32 = Color32::WHITE;

/// Card border - Light gray
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xE0, 0xE0, 0xE0);

/// Top bar background - White
pub const TOP_BAR_BG: Color32 = Color32::WHITE;

/// Primary action color - Blue
pub const PRIMARY: Color32 = Color32::from_rgb(0x00, 0x7A, 0xFF);

/// Text on primary-colored surfaces
pub const TEXT_ON_PRIMARY: Color32 = Color32::WHITE;

/// Primary text - Dark gray
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);

/// Secondary text (hints, captions) - Medium gray
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x66, 0x66, 0x66);

/// Muted text (placeholders, fine print) - Light gray
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x88, 0x88, 0x88);

/// Input field background
pub const INPUT_BG: Color32 = Color32::WHITE;

/// Input field border
pub const INPUT_BORDER: Color32 = Color32::from_rgb(0xCC, 0xCC, 0xCC);

/// Error text and border - Red
pub const ERROR: Color32 = Color32::from_rgb(0xF4, 0x43, 0x36);

/// Error banner background - Pale red
pub const ERROR_BG: Color32 = Color32::from_rgb(0xFF, 0xEB, 0xEE);

/// Verified/success - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Row separator
pub const SEPARATOR: Color32 = Color32::from_rgb(0xF0, 0xF0, 0xF0);
