use serde::{Deserialize, Serialize};

use crate::resort::MapMeta;

/// A 2D position in map-pixel space (or in output space, after a view
/// transform has scaled it).
///
/// Serialized as an `[x, y]` pair — resort files store lift paths as
/// coordinate pairs, not objects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Uniformly scale both coordinates.
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

/// Output area a view renders into, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Uniform map-pixel → viewport scale factor, preserving the map's
    /// aspect ratio. Zero-sized maps scale to zero rather than dividing
    /// by zero.
    pub fn map_scale(&self, meta: &MapMeta) -> f64 {
        if meta.width <= 0.0 || meta.height <= 0.0 {
            return 0.0;
        }
        (self.width / meta.width).min(self.height / meta.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_serializes_as_pair() {
        let p = Point::new(120.0, 150.0);
        let json = serde_json::to_string(&p).expect("serialize");
        assert_eq!(json, "[120.0,150.0]");
        let back: Point = serde_json::from_str("[180, 80]").expect("deserialize");
        assert_eq!(back, Point::new(180.0, 80.0));
    }

    #[test]
    fn rect_contains() {
        let r = Rect::new(10.0, 10.0, 20.0, 10.0);
        assert!(r.contains(Point::new(15.0, 15.0)));
        assert!(!r.contains(Point::new(5.0, 15.0)));
        assert!(!r.contains(Point::new(15.0, 25.0)));
    }

    #[test]
    fn map_scale_preserves_aspect() {
        let meta = MapMeta {
            name: None,
            width: 800.0,
            height: 600.0,
        };
        let vp = Viewport::new(400.0, 600.0);
        assert!((vp.map_scale(&meta) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn map_scale_degenerate_map() {
        let meta = MapMeta {
            name: None,
            width: 0.0,
            height: 600.0,
        };
        assert_eq!(Viewport::new(400.0, 300.0).map_scale(&meta), 0.0);
    }
}
