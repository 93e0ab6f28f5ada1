use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;
use crate::theme::ThemeToken;
use crate::types::{Point, Rect};

/// A single, stateless render instruction.
///
/// View transforms emit a `Vec<RenderCommand>` per presentation; renderers
/// (SVG, terminal, egui) consume the list sequentially — each command
/// carries all the data it needs. Commands that correspond to a lift carry
/// its id for hit-testing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw an open polyline through `points` in order (move to the first
    /// point, line to each subsequent one).
    DrawPolyline {
        points: Vec<Point>,
        color: ThemeToken,
        width: f64,
        dash: LineDash,
        lift_id: Option<SharedStr>,
    },

    /// Draw a filled circle, optionally stroked.
    DrawCircle {
        center: Point,
        radius: f64,
        fill: ThemeToken,
        stroke: Option<ThemeToken>,
        lift_id: Option<SharedStr>,
    },

    /// Draw a filled rectangle, optionally bordered.
    DrawRect {
        rect: Rect,
        color: ThemeToken,
        border_color: Option<ThemeToken>,
        lift_id: Option<SharedStr>,
    },

    /// Draw a text string at a position.
    DrawText {
        position: Point,
        text: SharedStr,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
    },

    /// Begin a logical group (a layer of the view). Renderers may use this
    /// for batching or layer separation.
    BeginGroup {
        id: SharedStr,
        label: Option<SharedStr>,
    },

    /// End the current group.
    EndGroup,
}

/// Stroke pattern for polylines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineDash {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}
