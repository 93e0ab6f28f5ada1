use liftline_protocol::{
    Lift, RenderCommand, ResortMap, TextAlign, ThemeToken, Viewport,
};

/// Baseline marker radius.
pub const MARKER_RADIUS: f64 = 7.0;
/// Radius of the selected lift's marker.
pub const SELECTED_RADIUS: f64 = 10.0;

const GLYPH_SIZE: f64 = 9.0;
const SELECTED_GLYPH_SIZE: f64 = 12.0;

/// Render one marker per lift, anchored at the first point of its route.
///
/// Marker fill is the status color; the glyph comes from the lift kind.
/// The selected marker is enlarged and emitted after all others, which
/// raises it in stacking order for every painter's-algorithm renderer.
pub fn render_markers(
    map: &ResortMap,
    selected: Option<&str>,
    viewport: &Viewport,
) -> Vec<RenderCommand> {
    if map.is_empty() {
        return Vec::new();
    }

    let scale = viewport.map_scale(&map.meta);
    let mut commands = Vec::with_capacity(map.len() * 2 + 2);

    commands.push(RenderCommand::BeginGroup {
        id: "lift-markers".into(),
        label: Some("Lift markers".into()),
    });

    for lift in &map.lifts {
        if selected.is_some_and(|id| lift.id == id) {
            continue;
        }
        push_marker(&mut commands, lift, scale, false);
    }

    // Selected marker last: enlarged and above the rest.
    if let Some(lift) = selected.and_then(|id| map.lift(id)) {
        push_marker(&mut commands, lift, scale, true);
    }

    commands.push(RenderCommand::EndGroup);
    commands
}

fn push_marker(commands: &mut Vec<RenderCommand>, lift: &Lift, scale: f64, selected: bool) {
    let center = lift.anchor().scaled(scale);
    let (radius, glyph_size) = if selected {
        (SELECTED_RADIUS, SELECTED_GLYPH_SIZE)
    } else {
        (MARKER_RADIUS, GLYPH_SIZE)
    };

    commands.push(RenderCommand::DrawCircle {
        center,
        radius,
        fill: lift.status.token(),
        stroke: Some(ThemeToken::MarkerBorder),
        lift_id: Some(lift.id.clone()),
    });
    commands.push(RenderCommand::DrawText {
        position: center,
        text: lift.kind.glyph().to_string().into(),
        color: ThemeToken::MarkerGlyph,
        font_size: glyph_size,
        align: TextAlign::Center,
    });
}
