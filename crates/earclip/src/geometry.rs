//! Orientation, area, and containment predicates.
//!
//! Conventions
//! - Counter-clockwise (CCW) is positive everywhere.
//! - Triangles are closed: points on an edge or corner count as inside.

use crate::cfg::INSIDE_EPS;
use crate::types::Vertex;

/// Cross product of `b - a` and `c - a`.
///
/// Positive for a left turn (CCW), zero when collinear, negative for a right turn.
#[inline]
pub fn cross(a: &Vertex, b: &Vertex, c: &Vertex) -> f64 {
    let ab = b.pos() - a.pos();
    let ac = c.pos() - a.pos();
    ab.x * ac.y - ab.y * ac.x
}

#[inline]
pub fn triangle_area_signed(a: &Vertex, b: &Vertex, c: &Vertex) -> f64 {
    0.5 * cross(a, b, c)
}

#[inline]
pub fn triangle_area(a: &Vertex, b: &Vertex, c: &Vertex) -> f64 {
    triangle_area_signed(a, b, c).abs()
}

/// Closed containment test with the default slack `INSIDE_EPS`.
#[inline]
pub fn point_in_triangle(p: &Vertex, a: &Vertex, b: &Vertex, c: &Vertex) -> bool {
    point_in_triangle_eps(p, a, b, c, INSIDE_EPS)
}

/// Closed containment test for either winding of `(a, b, c)`.
///
/// A CW triangle is flipped to CCW first; `p` is inside when all three edge
/// cross products are `>= -eps`.
pub fn point_in_triangle_eps(p: &Vertex, a: &Vertex, b: &Vertex, c: &Vertex, eps: f64) -> bool {
    let (b, c) = if cross(a, b, c) < 0.0 { (c, b) } else { (b, c) };
    let tol = -eps;
    cross(a, b, p) >= tol && cross(b, c, p) >= tol && cross(c, a, p) >= tol
}

/// Shoelace area of a closed vertex ring (last wraps to first).
pub fn signed_area(vertices: &[Vertex]) -> f64 {
    let n = vertices.len();
    let mut acc = 0.0;
    for i in 0..n {
        let p = &vertices[i];
        let q = &vertices[(i + 1) % n];
        acc += p.x * q.y - q.x * p.y;
    }
    0.5 * acc
}
