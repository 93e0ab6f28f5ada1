//! Built-in demo resort, used when no resort file is given.

use liftline_protocol::{Difficulty, Lift, LiftKind, LiftStatus, MapMeta, Point, ResortMap};

/// The Crystal Ridge demo map: six lifts covering every status, kind, and
/// difficulty variant, laid out on the standard 800×600 map canvas.
pub fn demo_resort() -> ResortMap {
    ResortMap {
        meta: MapMeta {
            name: Some("Crystal Ridge".to_string()),
            width: 800.0,
            height: 600.0,
        },
        lifts: vec![
            Lift {
                id: "summit-express".into(),
                name: "Summit Express".into(),
                status: LiftStatus::Open,
                kind: LiftKind::Express,
                difficulty: Difficulty::Advanced,
                path: vec![
                    Point::new(120.0, 150.0),
                    Point::new(180.0, 80.0),
                    Point::new(250.0, 50.0),
                ],
                wait_minutes: 12,
            },
            Lift {
                id: "ridge-quad".into(),
                name: "Ridge Runner Quad".into(),
                status: LiftStatus::Open,
                kind: LiftKind::Quad,
                difficulty: Difficulty::Intermediate,
                path: vec![
                    Point::new(300.0, 420.0),
                    Point::new(360.0, 300.0),
                    Point::new(410.0, 210.0),
                ],
                wait_minutes: 7,
            },
            Lift {
                id: "bunny-carpet".into(),
                name: "Bunny Hill Carpet".into(),
                status: LiftStatus::Open,
                kind: LiftKind::MagicCarpet,
                difficulty: Difficulty::Beginner,
                path: vec![Point::new(520.0, 500.0), Point::new(560.0, 470.0)],
                wait_minutes: 2,
            },
            Lift {
                id: "north-face-quad".into(),
                name: "North Face Quad".into(),
                status: LiftStatus::Closed,
                kind: LiftKind::Quad,
                difficulty: Difficulty::Advanced,
                path: vec![
                    Point::new(80.0, 520.0),
                    Point::new(60.0, 400.0),
                    Point::new(90.0, 280.0),
                ],
                wait_minutes: 0,
            },
            Lift {
                id: "eagle-express".into(),
                name: "Eagle Ridge Express".into(),
                status: LiftStatus::Hold,
                kind: LiftKind::Express,
                difficulty: Difficulty::Intermediate,
                path: vec![
                    Point::new(600.0, 450.0),
                    Point::new(650.0, 330.0),
                    Point::new(700.0, 240.0),
                ],
                wait_minutes: 3,
            },
            Lift {
                id: "meadow-quad".into(),
                name: "Meadow Quad".into(),
                status: LiftStatus::Open,
                kind: LiftKind::Quad,
                difficulty: Difficulty::Beginner,
                path: vec![
                    Point::new(420.0, 560.0),
                    Point::new(460.0, 480.0),
                    Point::new(500.0, 430.0),
                ],
                wait_minutes: 5,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader;

    #[test]
    fn demo_satisfies_invariants() {
        let map = demo_resort();
        loader::validate(&map).expect("demo must validate");
        assert_eq!(map.len(), 6);
    }

    #[test]
    fn demo_covers_every_variant() {
        let map = demo_resort();
        for status in [LiftStatus::Open, LiftStatus::Closed, LiftStatus::Hold] {
            assert!(
                map.lifts.iter().any(|l| l.status == status),
                "missing status {status}"
            );
        }
        for kind in [LiftKind::Express, LiftKind::Quad, LiftKind::MagicCarpet] {
            assert!(map.lifts.iter().any(|l| l.kind == kind), "missing {kind}");
        }
        for difficulty in [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ] {
            assert!(
                map.lifts.iter().any(|l| l.difficulty == difficulty),
                "missing {difficulty}"
            );
        }
    }

    #[test]
    fn demo_fits_canvas() {
        let map = demo_resort();
        for lift in &map.lifts {
            for p in &lift.path {
                assert!(p.x >= 0.0 && p.x <= map.meta.width, "{} x", lift.id);
                assert!(p.y >= 0.0 && p.y <= map.meta.height, "{} y", lift.id);
            }
        }
    }
}
