//! Recursive midpoint subdivision of simplices into Sierpinski gaskets.
//!
//! A gasket is produced by splitting every edge of a seed simplex at its
//! midpoint and recursing into the corner pieces, discarding the centre (an
//! inverted triangle for the 2D case, an octahedron for the 3D case). After
//! `n` levels a triangle seed yields `3^n` triangles and a tetrahedron seed
//! yields `4^n` tetrahedra.
//!
//! How midpoints are placed is delegated to a [`MidpointRule`], which is how
//! jitter gets in without any global random state.

mod tetrahedron;
mod triangle;

pub use self::tetrahedron::TetrahedronGasket;
pub use self::triangle::TriangleGasket;

use core::fmt;

use vek::Lerp;

use crate::{
    config::{JITTER_AMPLITUDE, MAX_DEPTH},
    random::RandomSource,
    vertex::{Point3, SimplexVertex},
    Error, Result,
};

/// A validated recursion depth in `0..=MAX_DEPTH`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Depth(u32);

impl Depth {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(MAX_DEPTH);

    /// Validate a depth, rejecting negative values and values above [`MAX_DEPTH`].
    pub fn new(depth: i64) -> Result<Self> {
        if depth < 0 {
            return Err(Error::NegativeDepth(depth));
        }
        if depth > i64::from(MAX_DEPTH) {
            return Err(Error::DepthTooLarge {
                depth: depth as u64,
                max: MAX_DEPTH,
            });
        }
        Ok(Self(depth as u32))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// One level shallower, or `None` at depth 0.
    #[inline]
    pub fn child(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl TryFrom<i32> for Depth {
    type Error = Error;

    fn try_from(depth: i32) -> Result<Self> {
        Self::new(i64::from(depth))
    }
}

impl TryFrom<u32> for Depth {
    type Error = Error;

    fn try_from(depth: u32) -> Result<Self> {
        Self::new(i64::from(depth))
    }
}

impl TryFrom<usize> for Depth {
    type Error = Error;

    fn try_from(depth: usize) -> Result<Self> {
        match i64::try_from(depth) {
            Ok(depth) => Self::new(depth),
            Err(_) => Err(Error::DepthTooLarge {
                depth: depth as u64,
                max: MAX_DEPTH,
            }),
        }
    }
}

/// Decides where the split point of an edge goes.
pub trait MidpointRule {
    fn midpoint(&mut self, a: Point3, b: Point3) -> Point3;
}

/// The exact midpoint, `lerp(a, b, 0.5)`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Exact;

impl MidpointRule for Exact {
    #[inline]
    fn midpoint(&mut self, a: Point3, b: Point3) -> Point3 {
        Lerp::lerp(a, b, 0.5f32)
    }
}

/// The exact midpoint offset by an independent uniform draw in
/// `[-amplitude, amplitude]` on each axis.
///
/// The offset therefore never exceeds `amplitude * sqrt(3)` in length.
pub struct Jittered<'a, R: ?Sized> {
    rng: &'a mut R,
    amplitude: f32,
}

impl<'a, R: RandomSource + ?Sized> Jittered<'a, R> {
    /// Jitter with the default amplitude of [`JITTER_AMPLITUDE`].
    pub fn new(rng: &'a mut R) -> Self {
        Self::with_amplitude(rng, JITTER_AMPLITUDE)
    }

    /// Jitter by up to `amplitude` per axis. The sign is ignored, a
    /// non-finite amplitude disables the offset, and huge amplitudes are
    /// clamped so the sampled range stays finite.
    pub fn with_amplitude(rng: &'a mut R, amplitude: f32) -> Self {
        let amplitude = if amplitude.is_finite() {
            amplitude.abs().min(f32::MAX / 4.0)
        } else {
            0.0
        };
        Self { rng, amplitude }
    }
}

impl<'a, R: ?Sized> fmt::Debug for Jittered<'a, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Jittered")
            .field("amplitude", &self.amplitude)
            .finish()
    }
}

impl<'a, R: RandomSource + ?Sized> MidpointRule for Jittered<'a, R> {
    #[inline]
    fn midpoint(&mut self, a: Point3, b: Point3) -> Point3 {
        Exact.midpoint(a, b) + self.rng.next_vec3(-self.amplitude, self.amplitude)
    }
}

/// Generate the triangle gasket over the default seed triangle.
///
/// Emits `3 * 3^depth` uncoloured vertices, three per triangle.
pub fn gasket_triangle(depth: Depth) -> Vec<SimplexVertex> {
    TriangleGasket::default().generate(depth, &mut Exact)
}

/// Generate the tetrahedron gasket over the default seed tetrahedron.
///
/// Emits `12 * 4^depth` coloured vertices: four faces of three vertices per
/// tetrahedron.
pub fn gasket_tetrahedron(depth: Depth) -> Vec<SimplexVertex> {
    TetrahedronGasket::default().generate(depth, &mut Exact)
}

/// Like [`gasket_tetrahedron`], with every midpoint jittered by
/// [`JITTER_AMPLITUDE`] per axis. Jitter moves vertices but never changes the
/// vertex count.
pub fn gasket_tetrahedron_jittered<R: RandomSource + ?Sized>(
    depth: Depth,
    rng: &mut R,
) -> Vec<SimplexVertex> {
    TetrahedronGasket::default().generate(depth, &mut Jittered::new(rng))
}

// `per_leaf * fan_out^depth`
fn leaf_capacity(per_leaf: usize, fan_out: usize, depth: Depth) -> usize {
    fan_out
        .checked_pow(depth.get())
        .and_then(|leaves| leaves.checked_mul(per_leaf))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use vek::Vec3;

    fn midpoint_distance(a: Point3, b: Point3, p: Point3) -> f32 {
        (p - Exact.midpoint(a, b)).magnitude()
    }

    #[test]
    fn depth_rejects_negative() {
        assert!(matches!(Depth::new(-1), Err(Error::NegativeDepth(-1))));
        assert!(matches!(Depth::try_from(-5i32), Err(Error::NegativeDepth(-5))));
    }

    #[test]
    fn depth_rejects_too_deep() {
        assert!(Depth::new(i64::from(MAX_DEPTH)).is_ok());
        assert!(matches!(
            Depth::try_from(MAX_DEPTH + 1),
            Err(Error::DepthTooLarge { max: MAX_DEPTH, .. })
        ));
    }

    #[test]
    fn depth_counts_down_to_zero() {
        let d = Depth::new(2).unwrap();
        assert_eq!(d.child(), Some(Depth::new(1).unwrap()));
        assert_eq!(d.child().and_then(Depth::child), Some(Depth::ZERO));
        assert_eq!(Depth::ZERO.child(), None);
    }

    #[test]
    fn exact_midpoint_is_halfway() {
        let m = Exact.midpoint(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, -4.0, 1.0));
        assert_eq!(m, Vec3::new(1.0, -2.0, 0.5));
    }

    #[test]
    fn jittered_midpoint_is_bounded() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut rule = Jittered::new(&mut rng);
        let (a, b) = (Vec3::new(-1.0, 0.5, 0.2), Vec3::new(0.7, -0.3, 0.9));
        let bound = JITTER_AMPLITUDE * 3f32.sqrt() + 1e-6;
        for _ in 0..500 {
            let p = rule.midpoint(a, b);
            assert!(midpoint_distance(a, b, p) <= bound);
        }
    }

    #[test]
    fn non_finite_amplitude_means_no_jitter() {
        let mut rng = StdRng::seed_from_u64(5);
        let (a, b) = (Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        for amplitude in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let mut rule = Jittered::with_amplitude(&mut rng, amplitude);
            assert_eq!(rule.midpoint(a, b), Exact.midpoint(a, b));
        }

        let mut rule = Jittered::with_amplitude(&mut rng, f32::MAX);
        assert!(rule.midpoint(a, b).map(f32::is_finite).reduce_and());
    }

    #[test]
    fn vertex_counts_follow_the_powers() {
        for n in 0..5 {
            let depth = Depth::new(n).unwrap();
            assert_eq!(gasket_triangle(depth).len(), 3 * 3usize.pow(n as u32));
            assert_eq!(gasket_tetrahedron(depth).len(), 12 * 4usize.pow(n as u32));
        }
    }

    #[test]
    fn jitter_keeps_the_vertex_count() {
        let mut rng = StdRng::seed_from_u64(99);
        for n in 0..4 {
            let depth = Depth::new(n).unwrap();
            assert_eq!(
                gasket_tetrahedron_jittered(depth, &mut rng).len(),
                gasket_tetrahedron(depth).len(),
            );
        }
    }

    #[test]
    fn seeded_jitter_is_reproducible() {
        let depth = Depth::new(2).unwrap();
        let a = gasket_tetrahedron_jittered(depth, &mut StdRng::seed_from_u64(5));
        let b = gasket_tetrahedron_jittered(depth, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
        assert_ne!(a, gasket_tetrahedron(depth));
    }

    #[test]
    fn capacity_matches_output() {
        let depth = Depth::new(3).unwrap();
        assert_eq!(leaf_capacity(3, 3, depth), gasket_triangle(depth).len());
        assert_eq!(leaf_capacity(12, 4, depth), gasket_tetrahedron(depth).len());
    }
}
