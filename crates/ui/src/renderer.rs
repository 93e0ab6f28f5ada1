use egui::{Align2, CornerRadius, FontId, Pos2, Rect, Stroke, StrokeKind};
use liftline_protocol::{LineDash, RenderCommand, SharedStr, TextAlign};

use crate::theme::{self, ThemeMode};

const DASH_LEN: f32 = 6.0;
const GAP_LEN: f32 = 4.0;

/// One hit-testable region: which lift a rectangle of screen belongs to.
pub struct HitRegion {
    pub rect: Rect,
    pub lift_id: SharedStr,
}

/// Result of rendering a command list: hit regions for hover/click.
pub struct RenderResult {
    pub hit_regions: Vec<HitRegion>,
}

/// Render a list of `RenderCommand` into an egui `Painter`.
///
/// `offset` is the top-left pixel position of the rendering area. Returns
/// hit regions for every command that carries a lift id.
pub fn render_commands(
    painter: &egui::Painter,
    commands: &[RenderCommand],
    offset: Pos2,
    mode: ThemeMode,
) -> RenderResult {
    let mut hit_regions: Vec<HitRegion> = Vec::new();

    for cmd in commands {
        match cmd {
            RenderCommand::DrawPolyline {
                points,
                color,
                width,
                dash,
                ..
            } => {
                let stroke = Stroke::new(*width as f32, theme::resolve(*color, mode));
                for pair in points.windows(2) {
                    let a = to_pos(pair[0].x, pair[0].y, offset);
                    let b = to_pos(pair[1].x, pair[1].y, offset);
                    match dash {
                        LineDash::Solid => painter.line_segment([a, b], stroke),
                        LineDash::Dashed => dashed_segment(painter, a, b, stroke),
                    }
                }
            }

            RenderCommand::DrawCircle {
                center,
                radius,
                fill,
                stroke,
                lift_id,
            } => {
                let c = to_pos(center.x, center.y, offset);
                let r = *radius as f32;
                let ring = stroke.map_or(Stroke::NONE, |s| {
                    Stroke::new(1.5, theme::resolve(s, mode))
                });
                painter.circle(c, r, theme::resolve(*fill, mode), ring);

                if let Some(id) = lift_id {
                    let pad = r + 2.0;
                    hit_regions.push(HitRegion {
                        rect: Rect::from_center_size(c, egui::vec2(pad * 2.0, pad * 2.0)),
                        lift_id: id.clone(),
                    });
                }
            }

            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
                lift_id,
            } => {
                let egui_rect = Rect::from_min_size(
                    to_pos(rect.x, rect.y, offset),
                    egui::vec2(rect.w as f32, rect.h as f32),
                );
                painter.rect_filled(
                    egui_rect,
                    CornerRadius::same(2),
                    theme::resolve(*color, mode),
                );
                if let Some(bc) = border_color {
                    painter.rect_stroke(
                        egui_rect,
                        CornerRadius::same(2),
                        Stroke::new(1.0, theme::resolve(*bc, mode)),
                        StrokeKind::Outside,
                    );
                }
                if let Some(id) = lift_id {
                    hit_regions.push(HitRegion {
                        rect: egui_rect,
                        lift_id: id.clone(),
                    });
                }
            }

            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                let anchor = match align {
                    TextAlign::Left => Align2::LEFT_CENTER,
                    TextAlign::Center => Align2::CENTER_CENTER,
                    TextAlign::Right => Align2::RIGHT_CENTER,
                };
                painter.text(
                    to_pos(position.x, position.y, offset),
                    anchor,
                    text.as_str(),
                    FontId::proportional(*font_size as f32),
                    theme::resolve(*color, mode),
                );
            }

            RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {
                // Groups are semantic — no visual effect in egui
            }
        }
    }

    RenderResult { hit_regions }
}

fn to_pos(x: f64, y: f64, offset: Pos2) -> Pos2 {
    Pos2::new(x as f32 + offset.x, y as f32 + offset.y)
}

/// Draw a dashed line as alternating on/off runs along the segment.
fn dashed_segment(painter: &egui::Painter, a: Pos2, b: Pos2, stroke: Stroke) {
    let delta = b - a;
    let len = delta.length();
    if len <= f32::EPSILON {
        return;
    }
    let dir = delta / len;
    let mut t = 0.0_f32;
    while t < len {
        let end = (t + DASH_LEN).min(len);
        painter.line_segment([a + dir * t, a + dir * end], stroke);
        t = end + GAP_LEN;
    }
}
