use std::f32::consts::{PI, TAU};

use crate::coords::Vec2;

/// Largest angle covered by one flattened arc segment.
const MAX_ARC_STEP: f32 = PI / 16.0;

/// Points closer than this are merged when appended.
const MERGE_EPSILON: f32 = 1e-4;

/// Below this |sin| between the two tangent directions, `arc_to` treats the
/// three points as collinear.
const COLLINEAR_EPSILON: f32 = 1e-6;

/// One connected run of points, started by `move_to`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubPath {
    pub points: Vec<Vec2>,
    pub closed: bool,
}

/// Flattened 2D path in logical pixels.
///
/// Mirrors the subset of the HTML canvas path API the table needs:
/// `move_to`, `line_to`, `arc_to` and `close`. Arcs are flattened into line
/// segments as they are added, so a `Path` is always a list of polylines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    subpaths: Vec<SubPath>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subpaths(&self) -> &[SubPath] {
        &self.subpaths
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.iter().all(|s| s.points.is_empty())
    }

    /// Current pen position. After `close` this is the start of the closed subpath.
    pub fn current_point(&self) -> Option<Vec2> {
        let sub = self.subpaths.last()?;
        if sub.closed {
            sub.points.first().copied()
        } else {
            sub.points.last().copied()
        }
    }

    /// Starts a new subpath at `p`.
    pub fn move_to(&mut self, p: Vec2) {
        if let Some(last) = self.subpaths.last_mut() {
            if !last.closed && last.points.len() <= 1 {
                // A lone move_to is replaced rather than kept as an empty subpath.
                last.points.clear();
                last.points.push(p);
                return;
            }
        }
        self.subpaths.push(SubPath { points: vec![p], closed: false });
    }

    /// Straight segment from the current point to `p`.
    ///
    /// With no current point this behaves like `move_to(p)`.
    pub fn line_to(&mut self, p: Vec2) {
        let Some(start) = self.current_point() else {
            self.move_to(p);
            return;
        };

        let reopen = self.subpaths.last().is_some_and(|s| s.closed);
        if reopen {
            self.subpaths.push(SubPath { points: vec![start], closed: false });
        }

        if let Some(sub) = self.subpaths.last_mut() {
            let duplicate = sub
                .points
                .last()
                .is_some_and(|last| last.distance(p) <= MERGE_EPSILON);
            if !duplicate {
                sub.points.push(p);
            }
        }
    }

    /// Canvas `arcTo`: a circular arc of `radius` tangent to the line from the
    /// current point to `p1` and to the line from `p1` to `p2`.
    ///
    /// A straight segment is added from the current point to the first tangent
    /// point, then the arc up to the second tangent point. If the radius is
    /// zero, any two points coincide, or the points are collinear, this is
    /// `line_to(p1)`. With no current point it is `move_to(p1)`.
    pub fn arc_to(&mut self, p1: Vec2, p2: Vec2, radius: f32) {
        let Some(p0) = self.current_point() else {
            self.move_to(p1);
            return;
        };

        let radius = radius.max(0.0);
        let (Some(d0), Some(d2)) = ((p0 - p1).normalized(), (p2 - p1).normalized()) else {
            self.line_to(p1);
            return;
        };

        if radius <= 0.0 || d0.cross(d2).abs() < COLLINEAR_EPSILON {
            self.line_to(p1);
            return;
        }

        // Interior angle at the corner p1.
        let half = d0.dot(d2).clamp(-1.0, 1.0).acos() / 2.0;
        let tangent_len = radius / half.tan();
        let t0 = p1 + d0 * tangent_len;
        let t2 = p1 + d2 * tangent_len;

        let Some(bisector) = (d0 + d2).normalized() else {
            self.line_to(p1);
            return;
        };
        let center = p1 + bisector * (radius / half.sin());

        self.line_to(t0);

        let a0 = (t0.y - center.y).atan2(t0.x - center.x);
        let a1 = (t2.y - center.y).atan2(t2.x - center.x);
        let mut sweep = a1 - a0;
        if sweep > PI {
            sweep -= TAU;
        } else if sweep < -PI {
            sweep += TAU;
        }

        let segments = ((sweep.abs() / MAX_ARC_STEP).ceil() as usize).max(1);
        for i in 1..segments {
            let a = a0 + sweep * (i as f32 / segments as f32);
            self.line_to(center + Vec2::new(a.cos(), a.sin()) * radius);
        }
        self.line_to(t2);
    }

    /// Closes the current subpath back to its first point.
    pub fn close(&mut self) {
        let Some(sub) = self.subpaths.last_mut() else { return };
        if sub.closed || sub.points.is_empty() {
            return;
        }
        if sub.points.len() > 1 {
            let first = sub.points[0];
            if sub.points.last().is_some_and(|last| last.distance(first) <= MERGE_EPSILON) {
                sub.points.pop();
            }
        }
        sub.closed = true;
    }
}
