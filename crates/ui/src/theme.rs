use liftline_protocol::ThemeToken;

/// Resolved RGBA color for egui rendering.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ResolvedColor {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

pub fn resolve(token: ThemeToken, mode: ThemeMode) -> egui::Color32 {
    match mode {
        ThemeMode::Dark => resolve_dark(token),
        ThemeMode::Light => resolve_light(token),
    }
    .to_color32()
}

fn resolve_dark(token: ThemeToken) -> ResolvedColor {
    // Catppuccin Mocha palette
    use ThemeToken::*;
    match token {
        LiftOpen => ResolvedColor::rgb(0xa6, 0xe3, 0xa1), // Green
        LiftClosed => ResolvedColor::rgb(0xf3, 0x8b, 0xa8), // Red
        LiftHold => ResolvedColor::rgb(0xf9, 0xe2, 0xaf), // Yellow

        PathSelected => ResolvedColor::rgb(0x89, 0xb4, 0xfa), // Blue
        PathMuted => ResolvedColor::rgb(0x6c, 0x70, 0x86),    // Overlay0

        MarkerBorder => ResolvedColor::rgb(0x11, 0x11, 0x1b), // Crust
        MarkerGlyph => ResolvedColor::rgb(0x1e, 0x1e, 0x2e),  // Base

        BadgeBeginner => ResolvedColor::rgb(0x40, 0x86, 0x3c),
        BadgeIntermediate => ResolvedColor::rgb(0x3b, 0x6e, 0xa5),
        BadgeAdvanced => ResolvedColor::rgb(0x58, 0x5b, 0x70), // Surface2

        SelectionHighlight => ResolvedColor::rgba(0x89, 0xb4, 0xfa, 60),
        HoverHighlight => ResolvedColor::rgba(0xcd, 0xd6, 0xf4, 25),

        TextPrimary => ResolvedColor::rgb(0xcd, 0xd6, 0xf4), // Text
        TextSecondary => ResolvedColor::rgb(0xba, 0xc2, 0xde), // Subtext1
        TextMuted => ResolvedColor::rgb(0xa6, 0xad, 0xc8),   // Subtext0

        Background => ResolvedColor::rgb(0x11, 0x11, 0x1b), // Crust
        Border => ResolvedColor::rgb(0x31, 0x32, 0x44),     // Surface0

        ListRowEven => ResolvedColor::rgb(0x1e, 0x1e, 0x2e), // Base
        ListRowOdd => ResolvedColor::rgb(0x18, 0x18, 0x25),  // Mantle

        PanelBackground => ResolvedColor::rgb(0x1e, 0x1e, 0x2e),
        PanelBorder => ResolvedColor::rgb(0x45, 0x47, 0x5a), // Surface1
    }
}

fn resolve_light(token: ThemeToken) -> ResolvedColor {
    use ThemeToken::*;
    match token {
        LiftOpen => ResolvedColor::rgb(47, 158, 68),
        LiftClosed => ResolvedColor::rgb(224, 49, 49),
        LiftHold => ResolvedColor::rgb(240, 140, 0),

        PathSelected => ResolvedColor::rgb(25, 113, 194),
        PathMuted => ResolvedColor::rgb(173, 181, 189),

        MarkerBorder => ResolvedColor::rgb(255, 255, 255),
        MarkerGlyph => ResolvedColor::rgb(255, 255, 255),

        BadgeBeginner => ResolvedColor::rgb(47, 158, 68),
        BadgeIntermediate => ResolvedColor::rgb(25, 113, 194),
        BadgeAdvanced => ResolvedColor::rgb(33, 37, 41),

        SelectionHighlight => ResolvedColor::rgba(25, 113, 194, 50),
        HoverHighlight => ResolvedColor::rgba(0, 0, 0, 15),

        TextPrimary => ResolvedColor::rgb(26, 26, 46),
        TextSecondary => ResolvedColor::rgb(73, 80, 87),
        TextMuted => ResolvedColor::rgb(134, 142, 150),

        Background => ResolvedColor::rgb(255, 255, 255),
        Border => ResolvedColor::rgb(222, 226, 230),

        ListRowEven => ResolvedColor::rgb(255, 255, 255),
        ListRowOdd => ResolvedColor::rgb(241, 243, 245),

        PanelBackground => ResolvedColor::rgb(255, 255, 255),
        PanelBorder => ResolvedColor::rgb(206, 212, 218),
    }
}

// ── egui visual presets ────────────────────────────────────────────────────

pub const FONT_BODY: f32 = 12.0;
pub const FONT_CAPTION: f32 = 11.0;

/// Catppuccin Mocha dark visuals for egui widgets.
pub fn dark_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::dark();
    v.panel_fill = egui::Color32::from_rgb(0x18, 0x18, 0x25);
    v.window_fill = egui::Color32::from_rgb(0x1e, 0x1e, 0x2e);
    v.extreme_bg_color = egui::Color32::from_rgb(0x11, 0x11, 0x1b);
    v.faint_bg_color = egui::Color32::from_rgb(0x1e, 0x1e, 0x2e);
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(0x89, 0xb4, 0xfa, 60);
    v.selection.stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(0x89, 0xb4, 0xfa));
    v.hyperlink_color = egui::Color32::from_rgb(0x89, 0xb4, 0xfa);
    v.warn_fg_color = egui::Color32::from_rgb(0xf9, 0xe2, 0xaf);
    v.error_fg_color = egui::Color32::from_rgb(0xf3, 0x8b, 0xa8);
    v
}

/// Light visuals for egui widgets.
pub fn light_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::light();
    v.panel_fill = egui::Color32::from_rgb(248, 249, 250);
    v.window_fill = egui::Color32::from_rgb(255, 255, 255);
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(25, 113, 194, 50);
    v.selection.stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(25, 113, 194));
    v.hyperlink_color = egui::Color32::from_rgb(25, 113, 194);
    v.warn_fg_color = egui::Color32::from_rgb(240, 140, 0);
    v.error_fg_color = egui::Color32::from_rgb(211, 47, 47);
    v
}

/// Apply the project's typography scale to egui styles.
pub fn apply_typography(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(FONT_BODY));
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::proportional(FONT_BODY),
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::proportional(FONT_CAPTION),
    );
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}
