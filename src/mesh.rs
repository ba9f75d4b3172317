//! Helpers for indexed triangle meshes: smooth normals and the stock cube and
//! quad.

use vek::{Vec2, Vec3};

use crate::{
    vertex::{IndexedMesh, NormalVertex, Point3, TexturedVertex},
    Error, Result,
};

/// A vertex layout carrying a normal.
pub trait HasNormal {
    fn position(&self) -> Point3;
    fn normal(&self) -> Vec3<f32>;
    fn set_normal(&mut self, normal: Vec3<f32>);
}

impl HasNormal for NormalVertex {
    #[inline]
    fn position(&self) -> Point3 {
        Vec3::from(self.position)
    }

    #[inline]
    fn normal(&self) -> Vec3<f32> {
        Vec3::from(self.normal)
    }

    #[inline]
    fn set_normal(&mut self, normal: Vec3<f32>) {
        self.normal = normal.into_array();
    }
}

impl HasNormal for TexturedVertex {
    #[inline]
    fn position(&self) -> Point3 {
        Vec3::from(self.position)
    }

    #[inline]
    fn normal(&self) -> Vec3<f32> {
        Vec3::from(self.normal)
    }

    #[inline]
    fn set_normal(&mut self, normal: Vec3<f32>) {
        self.normal = normal.into_array();
    }
}

/// Accumulate face normals into vertex normals, then normalise every vertex.
///
/// Each triangle `[i0, i1, i2]` adds the unnormalised `(v1 - v0) x (v2 - v0)`
/// to its three vertices, so larger faces weigh more. Existing normals are
/// added to, not replaced; start from zeroed normals for a fresh result. A
/// vertex whose accumulated normal is zero keeps a zero normal.
///
/// Nothing is modified if the index buffer is malformed.
pub fn calculate_normals<V: HasNormal>(vertices: &mut [V], indices: &[u32]) -> Result<()> {
    if indices.len() % 3 != 0 {
        return Err(Error::IncompleteTriangle { len: indices.len() });
    }
    if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
        return Err(Error::IndexOutOfRange {
            index,
            len: vertices.len(),
        });
    }

    accumulate_normals(vertices, indices);
    Ok(())
}

// Indices must already be known to form whole, in-range triangles
fn accumulate_normals<V: HasNormal>(vertices: &mut [V], indices: &[u32]) {
    for tri in indices.chunks_exact(3) {
        let [i0, i1, i2] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let v0 = vertices[i0].position();
        let normal = (vertices[i1].position() - v0).cross(vertices[i2].position() - v0);

        for &i in &[i0, i1, i2] {
            let n = vertices[i].normal() + normal;
            vertices[i].set_normal(n);
        }
    }

    for v in vertices.iter_mut() {
        let n = v.normal();
        let len = n.magnitude();
        v.set_normal(if len > f32::EPSILON { n / len } else { Vec3::zero() });
    }
}

// Four vertices per face: bottom left, top left, top right, bottom right
const CUBE_FACES: [[[f32; 3]; 4]; 6] = [
    // Top
    [[-0.5, 0.5, -0.5], [-0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, -0.5]],
    // Bottom
    [[-0.5, -0.5, 0.5], [-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5]],
    // Left
    [[-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5], [-0.5, -0.5, -0.5]],
    // Right
    [[0.5, -0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5], [0.5, -0.5, 0.5]],
    // Front
    [[-0.5, -0.5, -0.5], [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5], [0.5, -0.5, -0.5]],
    // Back
    [[0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, -0.5, 0.5]],
];

const FACE_TEX_COORDS: [[f32; 2]; 4] = [[0.0, 1.0], [0.0, 0.0], [1.0, 0.0], [1.0, 1.0]];

// Two clockwise triangles per face
const FACE_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

fn textured_faces(faces: &[[[f32; 3]; 4]]) -> IndexedMesh<TexturedVertex> {
    let mut vertices = Vec::with_capacity(faces.len() * 4);
    let mut indices = Vec::with_capacity(faces.len() * 6);

    for face in faces {
        let base = vertices.len() as u32;
        for (pos, uv) in face.iter().zip(FACE_TEX_COORDS.iter()) {
            vertices.push(TexturedVertex::new(Vec3::from(*pos), Vec2::from(*uv)));
        }
        indices.extend(FACE_INDICES.iter().map(|i| base + i));
    }

    accumulate_normals(&mut vertices, &indices);
    IndexedMesh::new(vertices, indices)
}

/// A unit cube centred on the origin: 24 vertices (4 per face, so each face
/// has its own normals and texture coordinates) and 36 indices.
pub fn cube() -> IndexedMesh<TexturedVertex> {
    textured_faces(&CUBE_FACES)
}

/// A unit quad facing -z at `z = -0.5`: 4 vertices and 6 indices.
pub fn quad() -> IndexedMesh<TexturedVertex> {
    textured_faces(&CUBE_FACES[4..5])
}
