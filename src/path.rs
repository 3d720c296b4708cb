//! Backend-neutral vector paths and the rounded-box builder.
//!
//! Arcs are kept as arcs (center, radius, sweep) so a canvas can map them to
//! whatever its rasterizer supports. Angles are in radians and run clockwise
//! on screen, since y grows downward.

use std::f32::consts::{FRAC_PI_2, PI};

use crate::geometry::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathVerb {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc from `start` to `end` angle. A straight segment joins the
    /// current point to the arc's start point.
    Arc { center: Point, radius: f32, start: f32, end: f32 },
    CubicTo { c1: Point, c2: Point, to: Point },
    Close,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectorPath {
    verbs: Vec<PathVerb>,
}

impl VectorPath {
    pub fn new() -> Self {
        VectorPath::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.verbs.push(PathVerb::MoveTo(Point::new(x, y)));
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.verbs.push(PathVerb::LineTo(Point::new(x, y)));
    }

    pub fn arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32) {
        self.verbs.push(PathVerb::Arc { center: Point::new(cx, cy), radius, start, end });
    }

    pub fn cubic_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        self.verbs.push(PathVerb::CubicTo {
            c1: Point::new(c1x, c1y),
            c2: Point::new(c2x, c2y),
            to: Point::new(x, y),
        });
    }

    pub fn close(&mut self) {
        self.verbs.push(PathVerb::Close);
    }

    /// Append every verb of `other`, starting a new subpath.
    pub fn extend(&mut self, other: &VectorPath) {
        self.verbs.extend_from_slice(&other.verbs);
    }

    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    pub fn arc_count(&self) -> usize {
        self.verbs.iter().filter(|v| matches!(v, PathVerb::Arc { .. })).count()
    }

    pub fn line_count(&self) -> usize {
        self.verbs.iter().filter(|v| matches!(v, PathVerb::LineTo(_))).count()
    }

    pub fn rect(r: Rect) -> Self {
        let mut p = VectorPath::new();
        p.move_to(r.x, r.y);
        p.line_to(r.right(), r.y);
        p.line_to(r.right(), r.bottom());
        p.line_to(r.x, r.bottom());
        p.close();
        p
    }

    /// Four-cubic circle approximation.
    pub fn circle(cx: f32, cy: f32, radius: f32) -> Self {
        let kr = 0.552_284_75_f32 * radius;
        let mut p = VectorPath::new();
        p.move_to(cx, cy - radius);
        p.cubic_to(cx + kr, cy - radius, cx + radius, cy - kr, cx + radius, cy);
        p.cubic_to(cx + radius, cy + kr, cx + kr, cy + radius, cx, cy + radius);
        p.cubic_to(cx - kr, cy + radius, cx - radius, cy + kr, cx - radius, cy);
        p.cubic_to(cx - radius, cy - kr, cx - kr, cy - radius, cx, cy - radius);
        p.close();
        p
    }

    /// Open polyline through `points`.
    pub fn polyline(points: &[(f32, f32)]) -> Self {
        let mut p = VectorPath::new();
        if let Some((&(x, y), rest)) = points.split_first() {
            p.move_to(x, y);
            for &(x, y) in rest {
                p.line_to(x, y);
            }
        }
        p
    }

    /// Closed polygon through `points`.
    pub fn polygon(points: &[(f32, f32)]) -> Self {
        let mut p = VectorPath::polyline(points);
        if !p.is_empty() {
            p.close();
        }
        p
    }
}

/// Clamp a radius to `[0, min(w, h) / 2]`.
fn clamp_radius(r: f32, w: f32, h: f32) -> f32 {
    r.min(w.min(h) * 0.5).max(0.0)
}

/// Closed rounded rectangle with radii `[top-left, top-right, down-right, down-left]`.
///
/// Negative sizes collapse to zero and each radius is clamped to half the
/// shorter side. A zero radius gives a sharp corner with no arc.
pub fn rounded_box(x: f32, y: f32, w: f32, h: f32, radii: [f32; 4]) -> VectorPath {
    let w = w.max(0.0);
    let h = h.max(0.0);
    let [r0, r1, r2, r3] = radii.map(|r| clamp_radius(r, w, h));

    let mut p = VectorPath::new();
    p.move_to(x + r0, y);
    p.line_to(x + w - r1, y);
    if r1 > 0.0 {
        p.arc(x + w - r1, y + r1, r1, -FRAC_PI_2, 0.0);
    }
    p.line_to(x + w, y + h - r2);
    if r2 > 0.0 {
        p.arc(x + w - r2, y + h - r2, r2, 0.0, FRAC_PI_2);
    }
    p.line_to(x + r3, y + h);
    if r3 > 0.0 {
        p.arc(x + r3, y + h - r3, r3, FRAC_PI_2, PI);
    }
    p.line_to(x, y + r0);
    if r0 > 0.0 {
        p.arc(x + r0, y + r0, r0, PI, PI + FRAC_PI_2);
    }
    p.close();
    p
}

pub fn rounded_box_rect(rect: Rect, radii: [f32; 4]) -> VectorPath {
    rounded_box(rect.x, rect.y, rect.w, rect.h, radii)
}

/// Open path along the bottom edge of a rounded box: up the right side to the
/// down-right arc, across, and around the down-left arc.
///
/// Shares the radius clamp of [`rounded_box`] so it traces the same curve as
/// a box with radii `[_, _, r2, r3]`.
pub fn bottom_arcs(x: f32, y: f32, w: f32, h: f32, r2: f32, r3: f32) -> VectorPath {
    let w = w.max(0.0);
    let h = h.max(0.0);
    let r2 = clamp_radius(r2, w, h);
    let r3 = clamp_radius(r3, w, h);

    let mut p = VectorPath::new();
    p.move_to(x + w, y + h - r2);
    if r2 > 0.0 {
        p.arc(x + w - r2, y + h - r2, r2, 0.0, FRAC_PI_2);
    } else {
        p.line_to(x + w, y + h);
    }
    p.line_to(x + r3, y + h);
    if r3 > 0.0 {
        p.arc(x + r3, y + h - r3, r3, FRAC_PI_2, PI);
    } else {
        p.line_to(x, y + h);
    }
    p
}
