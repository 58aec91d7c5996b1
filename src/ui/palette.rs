//! Terminal colors for themes and digit states.

use ratatui::style::Color;

use crate::types::Theme;

pub const DIGIT: Color = Color::Rgb(250, 250, 250);
pub const DIGIT_EDIT: Color = Color::Rgb(212, 212, 216);
pub const DIGIT_INACTIVE: Color = Color::Rgb(82, 82, 91);
pub const OVERLAY: Color = Color::Rgb(113, 113, 122);
pub const OVERLAY_KEY: Color = Color::Rgb(228, 228, 231);
pub const PAUSED_BORDER: Color = Color::Rgb(48, 48, 52);

/// Background color for a theme's background class.
pub fn background(theme: &Theme) -> Color {
    match theme.bg_class {
        "bg-zinc-950" => Color::Rgb(9, 9, 11),
        "bg-slate-950" => Color::Rgb(2, 6, 23),
        "bg-emerald-950" => Color::Rgb(2, 44, 34),
        "bg-stone-950" => Color::Rgb(12, 10, 9),
        "bg-rose-950" => Color::Rgb(76, 5, 25),
        _ => Color::Rgb(0, 0, 0),
    }
}

/// Scales an RGB color toward black by `factor` in `[0, 1]`.
pub fn darken(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let keep = (1.0 - factor).clamp(0.0, 1.0);
            let scale = |c: u8| (f32::from(c) * keep).round() as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}

/// Scales an RGB color toward white by `factor` in `[0, 1]`.
pub fn lighten(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let f = factor.clamp(0.0, 1.0);
            let scale = |c: u8| (f32::from(c) + (255.0 - f32::from(c)) * f).round() as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}
