//! Integration test: load a resort file, drive selection, and verify the
//! three derived presentations plus the SVG snapshot.

use liftline_core::model::MapState;
use liftline_core::views::{detail_panel, lift_list, markers, path_overlay};
use liftline_core::{loader, svg};
use liftline_protocol::{LineDash, Point, RenderCommand, ThemeToken, Viewport};

#[test]
fn load_select_and_render_crystal_ridge() {
    let data = include_bytes!("fixtures/crystal-ridge.json");
    let map = loader::load_resort(data).expect("failed to load resort file");
    assert_eq!(map.len(), 5);
    assert_eq!(map.meta.name.as_deref(), Some("Crystal Ridge"));

    let mut state = MapState::new(map);
    assert_eq!(state.selected_id(), None);

    // Click the list entry for the summit lift.
    assert!(state.select("summit-express"));
    assert_eq!(state.selected_id(), Some("summit-express"));

    let vp = Viewport::new(800.0, 600.0);
    let overlay = path_overlay::render_path_overlay(state.map(), state.selected_id(), &vp);
    let marker_cmds = markers::render_markers(state.map(), state.selected_id(), &vp);
    let list = lift_list::render_lift_list(state.map(), state.selected_id(), &Viewport::new(220.0, 400.0));

    // Path overlay: exactly one emphasized stroke, and it is the selection;
    // the selected lift is open, so its line is solid.
    let emphasized: Vec<_> = overlay
        .iter()
        .filter_map(|c| match c {
            RenderCommand::DrawPolyline {
                color: ThemeToken::PathSelected,
                points,
                dash,
                lift_id,
                ..
            } => Some((points, dash, lift_id)),
            _ => None,
        })
        .collect();
    assert_eq!(emphasized.len(), 1);
    let (points, dash, lift_id) = &emphasized[0];
    assert_eq!(lift_id.as_ref().map(|id| id.as_str()), Some("summit-express"));
    assert_eq!(**dash, LineDash::Solid);
    assert_eq!(points[0], Point::new(120.0, 150.0));

    // Markers: the selected marker is the last circle and is enlarged at
    // the route origin.
    let circles: Vec<_> = marker_cmds
        .iter()
        .filter_map(|c| match c {
            RenderCommand::DrawCircle {
                center,
                radius,
                lift_id,
                ..
            } => Some((center, radius, lift_id)),
            _ => None,
        })
        .collect();
    assert_eq!(circles.len(), 5);
    let (center, radius, lift_id) = &circles[circles.len() - 1];
    assert_eq!(lift_id.as_ref().map(|id| id.as_str()), Some("summit-express"));
    assert_eq!(**center, Point::new(120.0, 150.0));
    assert!(**radius > markers::MARKER_RADIUS);

    // List: exactly one highlighted row.
    let highlighted = list
        .iter()
        .filter(|c| {
            matches!(
                c,
                RenderCommand::DrawRect {
                    color: ThemeToken::SelectionHighlight,
                    ..
                }
            )
        })
        .count();
    assert_eq!(highlighted, 1);

    // Selecting another lift replaces the selection everywhere.
    assert!(state.select("ridge-quad"));
    let overlay = path_overlay::render_path_overlay(state.map(), state.selected_id(), &vp);
    let emphasized: Vec<_> = overlay
        .iter()
        .filter_map(|c| match c {
            RenderCommand::DrawPolyline {
                color: ThemeToken::PathSelected,
                lift_id,
                ..
            } => lift_id.as_ref().map(|id| id.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(emphasized, vec!["ridge-quad"]);

    // Hover detail for the hold lift, independent of selection.
    let eagle = state.map().lift("eagle-express").expect("lift");
    let panel = detail_panel::render_detail(eagle, Point::new(40.0, 40.0));
    let panel_texts: Vec<_> = panel
        .iter()
        .filter_map(|c| match c {
            RenderCommand::DrawText { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert!(panel_texts.contains(&"HOLD"));
    assert!(panel_texts.contains(&"3 minutes"));
    assert_eq!(state.selected_id(), Some("ridge-quad"));

    // SVG snapshot of the composed map view.
    let mut composed = path_overlay::render_path_overlay(state.map(), state.selected_id(), &vp);
    composed.extend(markers::render_markers(state.map(), state.selected_id(), &vp));
    let svg = svg::render_svg(&composed, 800.0, 600.0, true);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("M 80 520 L 60 400 L 90 280")); // closed lift route
    assert_eq!(svg.matches("stroke-dasharray").count(), 1); // dashed exactly once
}

#[test]
fn selection_survives_rerender_unchanged() {
    let data = include_bytes!("fixtures/crystal-ridge.json");
    let map = loader::load_resort(data).expect("failed to load resort file");
    let mut state = MapState::new(map);
    state.select("eagle-express");

    let vp = Viewport::new(640.0, 480.0);
    let first = path_overlay::render_path_overlay(state.map(), state.selected_id(), &vp);

    // Re-selecting the same id is a no-op: derived output is identical.
    state.select("eagle-express");
    let second = path_overlay::render_path_overlay(state.map(), state.selected_id(), &vp);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize"),
        serde_json::to_string(&second).expect("serialize"),
    );
}
