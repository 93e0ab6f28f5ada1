use liftline_protocol::{
    LiftStatus, LineDash, RenderCommand, ResortMap, ThemeToken, Viewport,
};

/// Baseline stroke width for unselected lifts.
pub const MUTED_WIDTH: f64 = 2.0;
/// Emphasized stroke width for the selected lift.
pub const SELECTED_WIDTH: f64 = 4.0;

/// Render the lift route overlay: one polyline per lift, points in original
/// path order (no reordering, no simplification).
///
/// Visual weight is binary — the selected lift gets the emphasized stroke,
/// every other lift shares one muted stroke. A closed lift is dashed
/// regardless of selection; open and hold lifts are solid.
pub fn render_path_overlay(
    map: &ResortMap,
    selected: Option<&str>,
    viewport: &Viewport,
) -> Vec<RenderCommand> {
    if map.is_empty() {
        return Vec::new();
    }

    let scale = viewport.map_scale(&map.meta);
    let mut commands = Vec::with_capacity(map.len() + 2);

    commands.push(RenderCommand::BeginGroup {
        id: "lift-paths".into(),
        label: Some("Lift routes".into()),
    });

    for lift in &map.lifts {
        let is_selected = selected.is_some_and(|id| lift.id == id);
        let (color, width) = if is_selected {
            (ThemeToken::PathSelected, SELECTED_WIDTH)
        } else {
            (ThemeToken::PathMuted, MUTED_WIDTH)
        };
        let dash = match lift.status {
            LiftStatus::Closed => LineDash::Dashed,
            LiftStatus::Open | LiftStatus::Hold => LineDash::Solid,
        };

        commands.push(RenderCommand::DrawPolyline {
            points: lift.path.iter().map(|p| p.scaled(scale)).collect(),
            color,
            width,
            dash,
            lift_id: Some(lift.id.clone()),
        });
    }

    commands.push(RenderCommand::EndGroup);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_resort;
    use liftline_protocol::{MapMeta, Point};

    fn viewport() -> Viewport {
        // Same extent as the demo map canvas: scale factor 1.
        Viewport::new(800.0, 600.0)
    }

    fn polylines(cmds: &[RenderCommand]) -> Vec<&RenderCommand> {
        cmds.iter()
            .filter(|c| matches!(c, RenderCommand::DrawPolyline { .. }))
            .collect()
    }

    #[test]
    fn one_polyline_per_lift_in_path_order() {
        let map = demo_resort();
        let cmds = render_path_overlay(&map, None, &viewport());
        let lines = polylines(&cmds);
        assert_eq!(lines.len(), map.len());

        let RenderCommand::DrawPolyline { points, lift_id, .. } = lines[0] else {
            unreachable!("filtered to polylines");
        };
        assert_eq!(lift_id.as_ref().map(|id| id.as_str()), Some("summit-express"));
        assert_eq!(
            points,
            &vec![
                Point::new(120.0, 150.0),
                Point::new(180.0, 80.0),
                Point::new(250.0, 50.0),
            ]
        );
    }

    #[test]
    fn closed_is_dashed_others_solid_independent_of_selection() {
        let map = demo_resort();
        for selected in [None, Some("north-face-quad"), Some("summit-express")] {
            let cmds = render_path_overlay(&map, selected, &viewport());
            for cmd in polylines(&cmds) {
                let RenderCommand::DrawPolyline { dash, lift_id, .. } = cmd else {
                    unreachable!("filtered to polylines");
                };
                let id = lift_id.as_ref().expect("lift id");
                let status = map.lift(id).expect("lift").status;
                match status {
                    LiftStatus::Closed => assert_eq!(*dash, LineDash::Dashed, "{id}"),
                    _ => assert_eq!(*dash, LineDash::Solid, "{id}"),
                }
            }
        }
    }

    #[test]
    fn exactly_one_emphasized_stroke_when_selected() {
        let map = demo_resort();
        let cmds = render_path_overlay(&map, Some("ridge-quad"), &viewport());
        let emphasized: Vec<_> = polylines(&cmds)
            .into_iter()
            .filter(|c| {
                matches!(
                    c,
                    RenderCommand::DrawPolyline {
                        color: ThemeToken::PathSelected,
                        ..
                    }
                )
            })
            .collect();
        assert_eq!(emphasized.len(), 1);
        let RenderCommand::DrawPolyline { lift_id, width, .. } = emphasized[0] else {
            unreachable!("filtered to polylines");
        };
        assert_eq!(lift_id.as_ref().map(|id| id.as_str()), Some("ridge-quad"));
        assert!((width - SELECTED_WIDTH).abs() < f64::EPSILON);
    }

    #[test]
    fn no_emphasis_without_selection() {
        let map = demo_resort();
        let cmds = render_path_overlay(&map, None, &viewport());
        for cmd in polylines(&cmds) {
            let RenderCommand::DrawPolyline { color, width, .. } = cmd else {
                unreachable!("filtered to polylines");
            };
            assert_eq!(*color, ThemeToken::PathMuted);
            assert!((width - MUTED_WIDTH).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn points_scale_with_viewport() {
        let map = demo_resort();
        let cmds = render_path_overlay(&map, None, &Viewport::new(400.0, 300.0));
        let lines = polylines(&cmds);
        let RenderCommand::DrawPolyline { points, .. } = lines[0] else {
            unreachable!("filtered to polylines");
        };
        assert_eq!(points[0], Point::new(60.0, 75.0));
    }

    #[test]
    fn empty_map_renders_nothing() {
        let map = ResortMap {
            meta: MapMeta {
                name: None,
                width: 800.0,
                height: 600.0,
            },
            lifts: vec![],
        };
        assert!(render_path_overlay(&map, None, &viewport()).is_empty());
    }
}
