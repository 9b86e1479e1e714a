//! Named wire colour lookup.
//!
//! Harness files name colours with the classic raylib palette identifiers;
//! this maps them to egui colours. Unknown names resolve to `None` and the
//! caller falls back to the foreground colour.

use eframe::egui::Color32;

/// Colour used for hover/selection highlighting.
pub const HIGHLIGHT_COLOUR_NAME: &str = "DARKGOLD";

pub const LIGHT_FOREGROUND: Color32 = Color32::from_rgb(0, 0, 0);
pub const LIGHT_BACKGROUND: Color32 = Color32::from_rgb(245, 245, 245);
pub const DARK_FOREGROUND: Color32 = Color32::from_rgb(200, 200, 200);
pub const DARK_BACKGROUND: Color32 = Color32::from_rgb(0, 0, 0);

/// Look up a named colour.
pub fn colour_from_name(name: &str) -> Option<Color32> {
    let c = match name {
        "LIGHTGRAY" => Color32::from_rgb(200, 200, 200),
        "GRAY" => Color32::from_rgb(130, 130, 130),
        "DARKGRAY" => Color32::from_rgb(80, 80, 80),
        "YELLOW" => Color32::from_rgb(253, 249, 0),
        "GOLD" => Color32::from_rgb(255, 203, 0),
        "DARKGOLD" => Color32::from_rgb(230, 183, 0),
        "DARKERGOLD" => Color32::from_rgb(204, 162, 0),
        "ORANGE" => Color32::from_rgb(255, 161, 0),
        "PINK" => Color32::from_rgb(255, 109, 194),
        "RED" => Color32::from_rgb(230, 41, 55),
        "MAROON" => Color32::from_rgb(190, 33, 55),
        "GREEN" => Color32::from_rgb(0, 228, 48),
        "LIME" => Color32::from_rgb(0, 158, 47),
        "DARKGREEN" => Color32::from_rgb(0, 117, 44),
        "SKYBLUE" => Color32::from_rgb(102, 191, 255),
        "BLUE" => Color32::from_rgb(0, 121, 241),
        "DARKBLUE" => Color32::from_rgb(0, 82, 172),
        "PURPLE" => Color32::from_rgb(200, 122, 255),
        "VIOLET" => Color32::from_rgb(135, 60, 190),
        "DARKPURPLE" => Color32::from_rgb(112, 31, 126),
        "BEIGE" => Color32::from_rgb(211, 176, 131),
        "BROWN" => Color32::from_rgb(127, 106, 79),
        "DARKBROWN" => Color32::from_rgb(76, 63, 47),
        "WHITE" => Color32::from_rgb(255, 255, 255),
        "BLACK" => Color32::from_rgb(0, 0, 0),
        "BLANK" => Color32::TRANSPARENT,
        "MAGENTA" => Color32::from_rgb(255, 0, 255),
        "RAYWHITE" => Color32::from_rgb(245, 245, 245),
        _ => return None,
    };
    Some(c)
}

/// Resolve a named colour with the silent fallback used for wires.
pub fn colour_or(name: &str, fallback: Color32) -> Color32 {
    colour_from_name(name).unwrap_or(fallback)
}
