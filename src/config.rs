// Generation defaults. Positions are in normalised device units.

use vek::{Rgba, Vec3};

/// Deepest subdivision accepted by [`crate::subdivide::Depth`].
///
/// Depth 10 already yields 12 * 4^10 (~12.5 million) tetrahedron vertices.
pub const MAX_DEPTH: u32 = 10;

/// Per-axis bound of the uniform offset applied to jittered midpoints.
pub const JITTER_AMPLITUDE: f32 = 0.03;

// Seed triangle, also the base of the seed tetrahedron
pub const SEED_A: Vec3<f32> = Vec3 { x: -0.5, y: -0.5, z: 0.8 };
pub const SEED_B: Vec3<f32> = Vec3 { x: 0.0, y: 0.5, z: 0.8 };
pub const SEED_C: Vec3<f32> = Vec3 { x: 0.5, y: -0.5, z: 0.8 };
// Apex of the seed tetrahedron, towards the viewer
pub const SEED_D: Vec3<f32> = Vec3 { x: 0.0, y: 0.0, z: 0.5 };

// Face colours of a depth-0 tetrahedron (DirectX named palette)
pub const FACE_ABC: Rgba<f32> = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }; // black
pub const FACE_ACD: Rgba<f32> = Rgba { r: 0.0, g: 0.501_960_8, b: 0.0, a: 1.0 }; // green
pub const FACE_BCD: Rgba<f32> = Rgba { r: 0.0, g: 0.0, b: 1.0, a: 1.0 }; // blue
pub const FACE_ABD: Rgba<f32> = Rgba { r: 1.0, g: 0.0, b: 0.0, a: 1.0 }; // red

// Sprite flip-book defaults
pub const ANIMATION_FRAMES: u32 = 120;
pub const ANIMATION_FRAME_TIME: f32 = 1.0 / 30.0;
