use super::*;
use crate::config::{SEED_A, SEED_B, SEED_C};

/// A Sierpinski triangle generator over a seed triangle `a, b, c`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleGasket {
    pub a: Point3,
    pub b: Point3,
    pub c: Point3,
}

impl Default for TriangleGasket {
    /// The seed triangle `(-0.5, -0.5, 0.8), (0, 0.5, 0.8), (0.5, -0.5, 0.8)`.
    fn default() -> Self {
        Self::new(SEED_A, SEED_B, SEED_C)
    }
}

impl TriangleGasket {
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self { a, b, c }
    }

    /// Subdivide `depth` times and return the surviving triangles as a flat
    /// vertex list, three uncoloured vertices per triangle.
    ///
    /// Triangles appear in traversal order: everything under corner `a`, then
    /// corner `b`, then corner `c`.
    pub fn generate<M>(&self, depth: Depth, rule: &mut M) -> Vec<SimplexVertex>
    where
        M: MidpointRule + ?Sized,
    {
        let mut points = Vec::with_capacity(leaf_capacity(3, 3, depth));
        divide(self.a, self.b, self.c, depth, rule, &mut points);
        log::debug!("triangle gasket at depth {}: {} vertices", depth.get(), points.len());
        points
    }
}

fn divide<M: MidpointRule + ?Sized>(
    a: Point3,
    b: Point3,
    c: Point3,
    depth: Depth,
    rule: &mut M,
    points: &mut Vec<SimplexVertex>,
) {
    let depth = match depth.child() {
        Some(child) => child,
        None => {
            points.extend([a, b, c].iter().copied().map(SimplexVertex::new));
            return;
        }
    };

    let ab = rule.midpoint(a, b);
    let ac = rule.midpoint(a, c);
    let bc = rule.midpoint(b, c);

    // The centre triangle (ab, bc, ac) is the hole
    divide(a, ab, ac, depth, rule, points);
    divide(ab, b, bc, depth, rule, points);
    divide(ac, bc, c, depth, rule, points);
}
