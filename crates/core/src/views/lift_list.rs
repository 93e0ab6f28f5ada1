use liftline_protocol::{
    Point, Rect, RenderCommand, ResortMap, TextAlign, ThemeToken, Viewport,
};

/// Height of one list row in logical pixels.
pub const ROW_HEIGHT: f64 = 26.0;

const DOT_RADIUS: f64 = 4.0;
const FONT_SIZE: f64 = 11.0;

/// Render the selectable lift list: one row per lift in collection order.
///
/// Each row shows a status dot, the kind glyph, the name, and the wait
/// label right-aligned. The row rectangle carries the lift id — clicking a
/// row is the select-lift trigger in interactive renderers. The selected
/// row gets the selection highlight; the rest alternate even/odd tokens.
pub fn render_lift_list(
    map: &ResortMap,
    selected: Option<&str>,
    viewport: &Viewport,
) -> Vec<RenderCommand> {
    if map.is_empty() {
        return Vec::new();
    }

    let mut commands = Vec::with_capacity(map.len() * 5 + 2);

    commands.push(RenderCommand::BeginGroup {
        id: "lift-list".into(),
        label: Some("Lifts".into()),
    });

    for (i, lift) in map.lifts.iter().enumerate() {
        let y = i as f64 * ROW_HEIGHT;
        let is_selected = selected.is_some_and(|id| lift.id == id);
        let row_color = if is_selected {
            ThemeToken::SelectionHighlight
        } else if i % 2 == 0 {
            ThemeToken::ListRowEven
        } else {
            ThemeToken::ListRowOdd
        };

        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(0.0, y, viewport.width, ROW_HEIGHT),
            color: row_color,
            border_color: None,
            lift_id: Some(lift.id.clone()),
        });

        let mid = y + ROW_HEIGHT / 2.0;
        commands.push(RenderCommand::DrawCircle {
            center: Point::new(10.0, mid),
            radius: DOT_RADIUS,
            fill: lift.status.token(),
            stroke: None,
            lift_id: None,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(22.0, mid),
            text: lift.kind.glyph().to_string().into(),
            color: ThemeToken::TextSecondary,
            font_size: FONT_SIZE,
            align: TextAlign::Center,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(34.0, mid),
            text: lift.name.clone(),
            color: ThemeToken::TextPrimary,
            font_size: FONT_SIZE,
            align: TextAlign::Left,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(viewport.width - 8.0, mid),
            text: lift.wait_label().into(),
            color: ThemeToken::TextMuted,
            font_size: FONT_SIZE,
            align: TextAlign::Right,
        });
    }

    commands.push(RenderCommand::EndGroup);
    commands
}
