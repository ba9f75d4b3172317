//! Injected sources of randomness.
//!
//! Generators never reach for a global engine. Whoever wants jitter hands in a
//! source, which keeps tests reproducible (seed a [`rand::rngs::StdRng`]) and
//! keeps concurrent callers from sharing state.

use rand::Rng;
use vek::Vec3;

/// Something that can produce uniformly distributed floats.
pub trait RandomSource {
    /// Draw the next float in the closed interval `[min, max]`.
    fn next_f32(&mut self, min: f32, max: f32) -> f32;

    /// Draw a vector whose components are independent draws in `[min, max]`.
    fn next_vec3(&mut self, min: f32, max: f32) -> Vec3<f32> {
        let x = self.next_f32(min, max);
        let y = self.next_f32(min, max);
        let z = self.next_f32(min, max);
        Vec3::new(x, y, z)
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn next_f32(&mut self, min: f32, max: f32) -> f32 {
        self.random_range(min..=max)
    }
}
