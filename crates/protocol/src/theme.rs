use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
///
/// Views never pick concrete colors; they emit tokens and each renderer
/// resolves them with an exhaustive match, so adding a token is a compile
/// error until every palette covers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    // Lift status (marker fill, list dot, status badge)
    LiftOpen,
    LiftClosed,
    LiftHold,

    // Path overlay strokes
    PathSelected,
    PathMuted,

    // Markers
    MarkerBorder,
    MarkerGlyph,

    // Difficulty badges
    BadgeBeginner,
    BadgeIntermediate,
    BadgeAdvanced,

    // Selection / hover
    SelectionHighlight,
    HoverHighlight,

    // Text
    TextPrimary,
    TextSecondary,
    TextMuted,

    // Chrome
    Background,
    Border,

    // Lift list rows
    ListRowEven,
    ListRowOdd,

    // Hover detail panel
    PanelBackground,
    PanelBorder,
}
