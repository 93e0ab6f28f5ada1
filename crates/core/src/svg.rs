//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.

use liftline_protocol::{LineDash, Point, RenderCommand, TextAlign, ThemeToken};

const DASH_PATTERN: &str = "6 4";

/// Render a list of commands as an SVG document string.
///
/// `width` and `height` define the SVG viewBox dimensions.
/// `dark` selects the color palette.
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64, dark: bool) -> String {
    let mut svg = String::with_capacity(commands.len() * 160);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif">"#,
    ));

    let bg = resolve_color(ThemeToken::Background, dark);
    svg.push_str(&format!(
        r#"<rect width="{width}" height="{height}" fill="{bg}"/>"#,
    ));

    for cmd in commands {
        match cmd {
            RenderCommand::DrawPolyline {
                points,
                color,
                width: stroke_width,
                dash,
                ..
            } => {
                if points.is_empty() {
                    continue;
                }
                let stroke = resolve_color(*color, dark);
                let dasharray = match dash {
                    LineDash::Dashed => format!(r#" stroke-dasharray="{DASH_PATTERN}""#),
                    LineDash::Solid => String::new(),
                };
                svg.push_str(&format!(
                    r#"<path d="{}" fill="none" stroke="{stroke}" stroke-width="{stroke_width}" stroke-linecap="round" stroke-linejoin="round"{dasharray}/>"#,
                    path_data(points),
                ));
            }
            RenderCommand::DrawCircle {
                center,
                radius,
                fill,
                stroke,
                lift_id,
            } => {
                let fill_color = resolve_color(*fill, dark);
                let stroke_attr = stroke.map_or(String::new(), |s| {
                    format!(
                        r#" stroke="{}" stroke-width="1.5""#,
                        resolve_color(s, dark)
                    )
                });
                svg.push_str(&format!(
                    r#"<circle cx="{}" cy="{}" r="{radius}" fill="{fill_color}"{stroke_attr}>"#,
                    center.x, center.y,
                ));
                if let Some(id) = lift_id {
                    svg.push_str(&format!("<title>{}</title>", escape_xml(id)));
                }
                svg.push_str("</circle>");
            }
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
                ..
            } => {
                let fill = resolve_color(*color, dark);
                let stroke_attr = border_color.map_or(String::new(), |s| {
                    format!(r#" stroke="{}""#, resolve_color(s, dark))
                });
                svg.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}" rx="2"{stroke_attr}/>"#,
                    rect.x, rect.y, rect.w, rect.h,
                ));
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                let fill = resolve_color(*color, dark);
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                    TextAlign::Right => "end",
                };
                svg.push_str(&format!(
                    r#"<text x="{}" y="{}" fill="{fill}" font-size="{font_size}" text-anchor="{anchor}">{}</text>"#,
                    position.x,
                    position.y,
                    escape_xml(text),
                ));
            }
            RenderCommand::BeginGroup { id, .. } => {
                svg.push_str(&format!(r#"<g id="{}">"#, escape_xml(id)));
            }
            RenderCommand::EndGroup => {
                svg.push_str("</g>");
            }
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Join points into an SVG path descriptor: move to the first point, line
/// to each subsequent one, in original order.
pub fn path_data(points: &[Point]) -> String {
    let mut d = String::with_capacity(points.len() * 12);
    for (i, p) in points.iter().enumerate() {
        if i == 0 {
            d.push_str(&format!("M {} {}", p.x, p.y));
        } else {
            d.push_str(&format!(" L {} {}", p.x, p.y));
        }
    }
    d
}

fn resolve_color(token: ThemeToken, dark: bool) -> &'static str {
    if dark {
        match token {
            ThemeToken::LiftOpen => "#a6e3a1",
            ThemeToken::LiftClosed => "#f38ba8",
            ThemeToken::LiftHold => "#f9e2af",
            ThemeToken::PathSelected => "#89b4fa",
            ThemeToken::PathMuted => "#6c7086",
            ThemeToken::MarkerBorder => "#11111b",
            ThemeToken::MarkerGlyph => "#1e1e2e",
            ThemeToken::BadgeBeginner => "#40863c",
            ThemeToken::BadgeIntermediate => "#3b6ea5",
            ThemeToken::BadgeAdvanced => "#585b70",
            ThemeToken::SelectionHighlight => "#45475a",
            ThemeToken::HoverHighlight => "#313244",
            ThemeToken::TextPrimary => "#cdd6f4",
            ThemeToken::TextSecondary => "#bac2de",
            ThemeToken::TextMuted => "#a6adc8",
            ThemeToken::Background => "#11111b",
            ThemeToken::Border => "#313244",
            ThemeToken::ListRowEven => "#1e1e2e",
            ThemeToken::ListRowOdd => "#181825",
            ThemeToken::PanelBackground => "#1e1e2e",
            ThemeToken::PanelBorder => "#45475a",
        }
    } else {
        match token {
            ThemeToken::LiftOpen => "#2f9e44",
            ThemeToken::LiftClosed => "#e03131",
            ThemeToken::LiftHold => "#f08c00",
            ThemeToken::PathSelected => "#1971c2",
            ThemeToken::PathMuted => "#adb5bd",
            ThemeToken::MarkerBorder => "#ffffff",
            ThemeToken::MarkerGlyph => "#ffffff",
            ThemeToken::BadgeBeginner => "#2f9e44",
            ThemeToken::BadgeIntermediate => "#1971c2",
            ThemeToken::BadgeAdvanced => "#212529",
            ThemeToken::SelectionHighlight => "#d0ebff",
            ThemeToken::HoverHighlight => "#e7f5ff",
            ThemeToken::TextPrimary => "#1a1a2e",
            ThemeToken::TextSecondary => "#495057",
            ThemeToken::TextMuted => "#868e96",
            ThemeToken::Background => "#ffffff",
            ThemeToken::Border => "#dee2e6",
            ThemeToken::ListRowEven => "#ffffff",
            ThemeToken::ListRowOdd => "#f1f3f5",
            ThemeToken::PanelBackground => "#ffffff",
            ThemeToken::PanelBorder => "#ced4da",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
