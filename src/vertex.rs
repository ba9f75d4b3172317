//! Vertex types.
//!
//! Generators work with [`SimplexVertex`] and plain [`Point3`]s. Before handing
//! geometry to a renderer, convert it into one of the packed `#[repr(C)]`
//! layouts below. They are [`Pod`], so a whole slice can be viewed as bytes and
//! copied straight into a device buffer.

use bytemuck::{Pod, Zeroable};
use vek::{Rgba, Vec2, Vec3};

/// A position in 3D space.
pub type Point3 = Vec3<f32>;

/// A linear RGBA colour.
pub type ColorRgba = Rgba<f32>;

/// A vertex emitted by the subdivision generators.
///
/// Only the tetrahedron gasket colours its vertices.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimplexVertex {
    pub position: Point3,
    pub color: Option<ColorRgba>,
}

impl SimplexVertex {
    #[inline]
    pub fn new(position: Point3) -> Self {
        Self { position, color: None }
    }

    #[inline]
    pub fn colored(position: Point3, color: ColorRgba) -> Self {
        Self {
            position,
            color: Some(color),
        }
    }
}

/// Position-only layout, used for turtle paths and uncoloured gaskets.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct PositionVertex {
    pub position: [f32; 3],
}

/// Position + colour layout.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Position + normal layout for lit geometry.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct NormalVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Position + normal + texture coordinate layout for lit, textured geometry.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl TexturedVertex {
    /// A vertex with a zeroed normal, ready for [`crate::mesh::calculate_normals`].
    pub fn new(position: Point3, tex_coords: Vec2<f32>) -> Self {
        Self {
            position: position.into_array(),
            normal: [0.0; 3],
            tex_coords: tex_coords.into_array(),
        }
    }
}

impl From<Point3> for PositionVertex {
    fn from(position: Point3) -> Self {
        Self {
            position: position.into_array(),
        }
    }
}

impl From<SimplexVertex> for PositionVertex {
    fn from(v: SimplexVertex) -> Self {
        Self::from(v.position)
    }
}

impl From<SimplexVertex> for ColorVertex {
    /// Uncoloured vertices pack as transparent black.
    fn from(v: SimplexVertex) -> Self {
        Self {
            position: v.position.into_array(),
            color: v.color.unwrap_or_else(Rgba::zero).into_array(),
        }
    }
}

/// A vertex list paired with an index list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndexedMesh<V> {
    pub vertices: Vec<V>,
    pub indices: Vec<u32>,
}

impl<V> IndexedMesh<V> {
    pub fn new(vertices: Vec<V>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }
}
