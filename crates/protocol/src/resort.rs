use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;
use crate::theme::ThemeToken;
use crate::types::Point;

/// The canonical resort map IR that every view transform reads.
///
/// ```text
///   resort.json ─▶ ResortMap ──▶ View Transform ──▶ RenderCommand[] ──▶ Renderer
///   demo seed  ─┘    (this)       (path overlay,      (DrawPolyline,      (SVG,
///                                  markers, list,      DrawCircle,         terminal,
///                                  detail panel)       DrawText…)          egui)
/// ```
///
/// The collection is immutable once loaded; the only mutable state in the
/// whole system is which lift id is selected, and that lives outside this
/// type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResortMap {
    pub meta: MapMeta,
    pub lifts: Vec<Lift>,
}

impl ResortMap {
    /// Look up a lift by id.
    pub fn lift(&self, id: &str) -> Option<&Lift> {
        self.lifts.iter().find(|l| l.id == id)
    }

    /// Whether a lift with this id exists in the collection.
    pub fn contains(&self, id: &str) -> bool {
        self.lift(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.lifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lifts.is_empty()
    }

    /// Number of lifts with the given status.
    pub fn count_by_status(&self, status: LiftStatus) -> usize {
        self.lifts.iter().filter(|l| l.status == status).count()
    }
}

/// Map-pixel canvas extent and display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapMeta {
    #[serde(default)]
    pub name: Option<String>,
    pub width: f64,
    pub height: f64,
}

/// A single mountain transport unit with a fixed route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lift {
    /// Unique id within the collection.
    pub id: SharedStr,
    /// Display name.
    pub name: SharedStr,
    pub status: LiftStatus,
    /// Lift hardware kind — drives the marker glyph.
    #[serde(rename = "type")]
    pub kind: LiftKind,
    /// Terrain served — drives the badge color.
    pub difficulty: Difficulty,
    /// Ordered route in map-pixel space; `path[0]` is the marker anchor.
    pub path: Vec<Point>,
    /// Current queue wait in minutes.
    #[serde(rename = "waitTime")]
    pub wait_minutes: u32,
}

impl Lift {
    /// Marker anchor — the first point of the route.
    ///
    /// Loaded maps guarantee a non-empty path; a hand-built lift without
    /// one anchors at the origin rather than panicking.
    pub fn anchor(&self) -> Point {
        self.path.first().copied().unwrap_or(Point::new(0.0, 0.0))
    }

    /// Wait time formatted for the detail panel, e.g. `"3 minutes"`.
    pub fn wait_label(&self) -> String {
        format!("{} minutes", self.wait_minutes)
    }
}

/// Operational status — drives marker color and line dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiftStatus {
    Open,
    Closed,
    Hold,
}

impl LiftStatus {
    /// Badge text, uppercase.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
            Self::Hold => "HOLD",
        }
    }

    /// Status color token (open → green, closed → red, hold → amber).
    pub fn token(&self) -> ThemeToken {
        match self {
            Self::Open => ThemeToken::LiftOpen,
            Self::Closed => ThemeToken::LiftClosed,
            Self::Hold => ThemeToken::LiftHold,
        }
    }
}

impl std::fmt::Display for LiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Lift hardware kind — drives the marker glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LiftKind {
    Express,
    Quad,
    MagicCarpet,
}

impl LiftKind {
    /// Marker icon glyph.
    pub fn glyph(&self) -> char {
        match self {
            Self::Express => '⚡',
            Self::Quad => '4',
            Self::MagicCarpet => '≡',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Express => "Express",
            Self::Quad => "Quad",
            Self::MagicCarpet => "Magic Carpet",
        }
    }
}

impl std::fmt::Display for LiftKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Terrain difficulty served by a lift — drives the badge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Badge text, uppercase.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "BEGINNER",
            Self::Intermediate => "INTERMEDIATE",
            Self::Advanced => "ADVANCED",
        }
    }

    pub fn token(&self) -> ThemeToken {
        match self {
            Self::Beginner => ThemeToken::BadgeBeginner,
            Self::Intermediate => ThemeToken::BadgeIntermediate,
            Self::Advanced => ThemeToken::BadgeAdvanced,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> ResortMap {
        ResortMap {
            meta: MapMeta {
                name: Some("Test Resort".into()),
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
                    id: "bunny-carpet".into(),
                    name: "Bunny Hill Carpet".into(),
                    status: LiftStatus::Hold,
                    kind: LiftKind::MagicCarpet,
                    difficulty: Difficulty::Beginner,
                    path: vec![Point::new(520.0, 500.0), Point::new(560.0, 470.0)],
                    wait_minutes: 3,
                },
            ],
        }
    }

    #[test]
    fn lift_lookup_by_id() {
        let map = sample_map();
        assert_eq!(
            map.lift("summit-express").map(|l| l.name.as_str()),
            Some("Summit Express")
        );
        assert!(map.lift("gondola-9").is_none());
        assert!(map.contains("bunny-carpet"));
    }

    #[test]
    fn anchor_is_first_path_point() {
        let map = sample_map();
        let lift = map.lift("summit-express").expect("lift");
        assert_eq!(lift.anchor(), Point::new(120.0, 150.0));
    }

    #[test]
    fn wait_label_format() {
        let map = sample_map();
        let lift = map.lift("bunny-carpet").expect("lift");
        assert_eq!(lift.wait_label(), "3 minutes");
    }

    #[test]
    fn status_labels_and_tokens() {
        assert_eq!(LiftStatus::Hold.label(), "HOLD");
        assert_eq!(LiftStatus::Open.token(), ThemeToken::LiftOpen);
        assert_eq!(LiftStatus::Closed.token(), ThemeToken::LiftClosed);
        assert_eq!(LiftStatus::Hold.token(), ThemeToken::LiftHold);
    }

    #[test]
    fn count_by_status() {
        let map = sample_map();
        assert_eq!(map.count_by_status(LiftStatus::Open), 1);
        assert_eq!(map.count_by_status(LiftStatus::Hold), 1);
        assert_eq!(map.count_by_status(LiftStatus::Closed), 0);
    }

    #[test]
    fn wire_vocabulary() {
        let json = r#"{
            "id": "north-face-quad",
            "name": "North Face Quad",
            "status": "closed",
            "type": "magic-carpet",
            "difficulty": "intermediate",
            "path": [[80, 520], [60, 400]],
            "waitTime": 0
        }"#;
        let lift: Lift = serde_json::from_str(json).expect("deserialize");
        assert_eq!(lift.status, LiftStatus::Closed);
        assert_eq!(lift.kind, LiftKind::MagicCarpet);
        assert_eq!(lift.difficulty, Difficulty::Intermediate);
        assert_eq!(lift.path.len(), 2);
    }

    #[test]
    fn serialization_roundtrip() {
        let map = sample_map();
        let json = serde_json::to_string(&map).expect("serialize");
        let back: ResortMap = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.len(), 2);
        assert_eq!(back.lifts[0].kind, LiftKind::Express);
        assert!(json.contains("\"waitTime\":12"));
        assert!(json.contains("\"type\":\"express\""));
    }
}
