use liftline_protocol::{Lift, Point, Rect, RenderCommand, TextAlign, ThemeToken};

/// Panel dimensions in logical pixels.
pub const PANEL_WIDTH: f64 = 190.0;
pub const PANEL_HEIGHT: f64 = 84.0;

const PADDING: f64 = 10.0;
const BADGE_HEIGHT: f64 = 16.0;
const BADGE_FONT: f64 = 9.0;
/// Approximate glyph advance for sizing badge boxes around their label.
const BADGE_CHAR_W: f64 = 6.5;

/// Render the hover detail panel for one lift at `origin` (top-left).
///
/// Shows the name, a status badge, a difficulty badge, and the wait label.
/// Purely presentational: takes the lift record by reference and no
/// selection state at all, so revealing a detail panel can never change
/// which lift is selected.
pub fn render_detail(lift: &Lift, origin: Point) -> Vec<RenderCommand> {
    let mut commands = Vec::with_capacity(8);

    commands.push(RenderCommand::BeginGroup {
        id: "lift-detail".into(),
        label: Some(lift.name.clone()),
    });

    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(origin.x, origin.y, PANEL_WIDTH, PANEL_HEIGHT),
        color: ThemeToken::PanelBackground,
        border_color: Some(ThemeToken::PanelBorder),
        lift_id: None,
    });

    commands.push(RenderCommand::DrawText {
        position: Point::new(origin.x + PADDING, origin.y + 18.0),
        text: lift.name.clone(),
        color: ThemeToken::TextPrimary,
        font_size: 12.0,
        align: TextAlign::Left,
    });

    let badge_y = origin.y + 30.0;
    let next_x = push_badge(
        &mut commands,
        lift.status.label(),
        lift.status.token(),
        origin.x + PADDING,
        badge_y,
    );
    push_badge(
        &mut commands,
        lift.difficulty.label(),
        lift.difficulty.token(),
        next_x + 6.0,
        badge_y,
    );

    commands.push(RenderCommand::DrawText {
        position: Point::new(origin.x + PADDING, origin.y + PANEL_HEIGHT - 14.0),
        text: lift.wait_label().into(),
        color: ThemeToken::TextSecondary,
        font_size: 11.0,
        align: TextAlign::Left,
    });

    commands.push(RenderCommand::EndGroup);
    commands
}

/// Draw one badge (filled box + centered label); returns the x just past it.
fn push_badge(
    commands: &mut Vec<RenderCommand>,
    label: &str,
    token: ThemeToken,
    x: f64,
    y: f64,
) -> f64 {
    let w = label.chars().count() as f64 * BADGE_CHAR_W + 10.0;
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(x, y, w, BADGE_HEIGHT),
        color: token,
        border_color: None,
        lift_id: None,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(x + w / 2.0, y + BADGE_HEIGHT / 2.0),
        text: label.into(),
        color: ThemeToken::TextPrimary,
        font_size: BADGE_FONT,
        align: TextAlign::Center,
    });
    x + w
}
