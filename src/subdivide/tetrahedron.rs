use super::*;
use crate::{
    config::{FACE_ABC, FACE_ABD, FACE_ACD, FACE_BCD, SEED_A, SEED_B, SEED_C, SEED_D},
    vertex::ColorRgba,
};

/// A Sierpinski tetrahedron generator over a seed tetrahedron `a, b, c, d`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TetrahedronGasket {
    pub a: Point3,
    pub b: Point3,
    pub c: Point3,
    pub d: Point3,
}

impl Default for TetrahedronGasket {
    /// The seed triangle with its apex at `(0, 0, 0.5)`.
    fn default() -> Self {
        Self::new(SEED_A, SEED_B, SEED_C, SEED_D)
    }
}

impl TetrahedronGasket {
    pub fn new(a: Point3, b: Point3, c: Point3, d: Point3) -> Self {
        Self { a, b, c, d }
    }

    /// Subdivide `depth` times and return the surviving tetrahedra as a flat,
    /// coloured triangle list.
    ///
    /// Each tetrahedron contributes 12 vertices, its faces in the order ABC
    /// (black), ACD (green), BCD (blue), ABD (red). Tetrahedra appear in
    /// traversal order: corner `a`, `b`, `c`, then `d`.
    pub fn generate<M>(&self, depth: Depth, rule: &mut M) -> Vec<SimplexVertex>
    where
        M: MidpointRule + ?Sized,
    {
        let mut points = Vec::with_capacity(leaf_capacity(12, 4, depth));
        divide(self.a, self.b, self.c, self.d, depth, rule, &mut points);
        log::debug!("tetrahedron gasket at depth {}: {} vertices", depth.get(), points.len());
        points
    }
}

fn emit_face(a: Point3, b: Point3, c: Point3, color: ColorRgba, points: &mut Vec<SimplexVertex>) {
    points.push(SimplexVertex::colored(a, color));
    points.push(SimplexVertex::colored(b, color));
    points.push(SimplexVertex::colored(c, color));
}

fn emit_tetrahedron(a: Point3, b: Point3, c: Point3, d: Point3, points: &mut Vec<SimplexVertex>) {
    emit_face(a, b, c, FACE_ABC, points);
    emit_face(a, c, d, FACE_ACD, points);
    emit_face(b, c, d, FACE_BCD, points);
    emit_face(a, b, d, FACE_ABD, points);
}

fn divide<M: MidpointRule + ?Sized>(
    a: Point3,
    b: Point3,
    c: Point3,
    d: Point3,
    depth: Depth,
    rule: &mut M,
    points: &mut Vec<SimplexVertex>,
) {
    let depth = match depth.child() {
        Some(child) => child,
        None => return emit_tetrahedron(a, b, c, d, points),
    };

    let ab = rule.midpoint(a, b);
    let bc = rule.midpoint(b, c);
    let ac = rule.midpoint(a, c);
    let cd = rule.midpoint(c, d);
    let ad = rule.midpoint(a, d);
    let bd = rule.midpoint(b, d);

    // The central octahedron is the hole
    divide(a, ab, ac, ad, depth, rule, points);
    divide(ab, b, bc, bd, depth, rule, points);
    divide(ac, bc, c, cd, depth, rule, points);
    divide(ad, bd, cd, d, depth, rule, points);
}
