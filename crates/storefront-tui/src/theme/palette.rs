//! Color palette for the GREEN storefront.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
/// Footer information panel (the light grey band on the web storefront)
pub const PANEL_BG: Color = Color::Rgb(24, 28, 24);
pub const POPUP_BG: Color = Color::Rgb(18, 36, 22);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Green;

// --- Accent (brand green) ---
pub const ACCENT: Color = Color::Green;
pub const ACCENT_DIM: Color = Color::Rgb(56, 120, 72);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;
/// Foreground on an accent background
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
