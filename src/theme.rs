//! Dark palette and egui visuals setup.

use eframe::egui;

#[derive(Clone, Copy)]
pub struct ThemeColors {
    pub bg_deep: egui::Color32,
    pub bg_surface: egui::Color32,
    pub bg_elevated: egui::Color32,
    pub border: egui::Color32,
    pub accent: egui::Color32,
    pub teal: egui::Color32,
    pub cyan: egui::Color32,
    pub green: egui::Color32,
    pub red: egui::Color32,
    pub yellow: egui::Color32,
    pub text: egui::Color32,
    pub text_sec: egui::Color32,
    pub text_muted: egui::Color32,
}

const fn c(r: u8, g: u8, b: u8) -> egui::Color32 {
    egui::Color32::from_rgb(r, g, b)
}

pub fn colors() -> ThemeColors {
    ThemeColors {
        bg_deep: c(0x2e, 0x2f, 0x33),
        bg_surface: c(0x39, 0x3a, 0x3e),
        bg_elevated: c(0x45, 0x46, 0x4b),
        border: c(0x55, 0x57, 0x5e),
        accent: c(0xff, 0x22, 0xcc),
        teal: c(0x2e, 0xe6, 0xd7),
        cyan: c(0x8b, 0xe9, 0xfd),
        green: c(0x50, 0xfa, 0x7b),
        red: c(0xff, 0x55, 0x55),
        yellow: c(0xf1, 0xfa, 0x8c),
        text: c(0xe8, 0xe8, 0xec),
        text_sec: c(0x9c, 0x9d, 0xa8),
        text_muted: c(0x70, 0x72, 0x7c),
    }
}

pub fn blend(base: egui::Color32, target: egui::Color32, t: f32) -> egui::Color32 {
    let m = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8;
    egui::Color32::from_rgb(
        m(base.r(), target.r()),
        m(base.g(), target.g()),
        m(base.b(), target.b()),
    )
}

/// "#rrggbb" -> Color32. Anything else is None.
pub fn parse_hex(s: &str) -> Option<egui::Color32> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(c(r, g, b))
}

pub fn apply_theme(ctx: &egui::Context, tc: &ThemeColors) {
    ctx.set_visuals({
        let mut v = egui::Visuals::dark();

        v.panel_fill = tc.bg_deep;
        v.window_fill = tc.bg_surface;
        v.extreme_bg_color = tc.bg_deep;
        v.faint_bg_color = tc.bg_elevated;

        v.widgets.noninteractive.bg_fill = tc.bg_surface;
        v.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, tc.text_sec);
        v.widgets.noninteractive.bg_stroke = egui::Stroke::new(0.5, tc.border);
        v.widgets.noninteractive.rounding = egui::Rounding::same(4.0);

        v.widgets.inactive.bg_fill = tc.bg_elevated;
        v.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, tc.text);
        v.widgets.inactive.bg_stroke = egui::Stroke::new(0.5, tc.border);
        v.widgets.inactive.rounding = egui::Rounding::same(4.0);

        v.widgets.hovered.bg_fill = blend(tc.bg_elevated, tc.accent, 0.15);
        v.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, tc.text);
        v.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, tc.accent);
        v.widgets.hovered.rounding = egui::Rounding::same(4.0);

        v.widgets.active.bg_fill = blend(tc.bg_elevated, tc.accent, 0.25);
        v.widgets.active.fg_stroke = egui::Stroke::new(1.0, tc.text);
        v.widgets.active.bg_stroke = egui::Stroke::new(1.5, tc.accent);
        v.widgets.active.rounding = egui::Rounding::same(4.0);

        v.selection.bg_fill = blend(tc.bg_surface, tc.accent, 0.2);
        v.selection.stroke = egui::Stroke::new(1.0, tc.accent);

        v.window_rounding = egui::Rounding::same(6.0);
        v.window_shadow = egui::Shadow {
            offset: egui::Vec2::new(0.0, 2.0),
            blur: 8.0,
            spread: 0.0,
            color: egui::Color32::from_black_alpha(80),
        };

        v.override_text_color = Some(tc.text);

        v
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_reads_six_digit_colors() {
        assert_eq!(parse_hex("#5f6264"), Some(c(0x5f, 0x62, 0x64)));
        assert_eq!(parse_hex("#FF22CC"), Some(c(0xff, 0x22, 0xcc)));
    }

    #[test]
    fn parse_hex_rejects_everything_else() {
        assert_eq!(parse_hex("5f6264"), None);
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
        assert_eq!(parse_hex(""), None);
    }

    #[test]
    fn blend_interpolates_between_endpoints() {
        let black = c(0, 0, 0);
        let white = c(255, 255, 255);
        assert_eq!(blend(black, white, 0.0), black);
        assert_eq!(blend(black, white, 1.0), white);
        let mid = blend(black, white, 0.5);
        assert!(mid.r() > 120 && mid.r() < 135);
    }
}
