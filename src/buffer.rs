use crate::{
    error::BufferKind,
    vertex::{ColorVertex, SimplexVertex},
    Error, Result,
};
use bytemuck::Pod;
use core::{fmt, mem::size_of};

/// Something that accepts vertex and index data, usually a pair of device buffers.
///
/// This is the whole contract between the generators and a renderer. Each
/// upload replaces the previous contents of that buffer.
pub trait UploadTarget {
    /// The packed vertex layout the target was created for.
    type Vertex: Pod;

    /// Replace the vertex data.
    fn upload_vertices(&mut self, vertices: &[Self::Vertex]) -> Result<()>;

    /// Replace the index data.
    fn upload_indices(&mut self, indices: &[u32]) -> Result<()>;

    /// Replace both buffers together.
    ///
    /// Targets that can reject an upload should override this so that a
    /// rejection leaves both buffers as they were.
    fn upload_mesh(&mut self, vertices: &[Self::Vertex], indices: &[u32]) -> Result<()> {
        self.upload_vertices(vertices)?;
        self.upload_indices(indices)
    }
}

/// A CPU-side vertex and index buffer pair.
///
/// Created with [`MeshBuffer::new`] it grows to fit any upload. Created with
/// [`MeshBuffer::with_capacity`] it behaves like a fixed-size dynamic device
/// buffer and rejects uploads that do not fit, leaving its contents untouched.
#[derive(Clone, PartialEq)]
pub struct MeshBuffer<V> {
    vertices: Vec<V>,
    indices: Vec<u32>,
    capacity: Option<[usize; 2]>,
}

impl<V: Pod> MeshBuffer<V> {
    /// An empty, unbounded buffer.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            capacity: None,
        }
    }

    /// An empty buffer holding at most `vertices` vertices and `indices` indices.
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
            capacity: Some([vertices, indices]),
        }
    }

    /// Size in bytes of one vertex record.
    #[inline]
    pub fn stride(&self) -> usize {
        size_of::<V>()
    }

    /// The `[vertex, index]` capacity, if this buffer is bounded.
    #[inline]
    pub fn capacity(&self) -> Option<[usize; 2]> {
        self.capacity
    }

    #[inline]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// View the vertex data as raw bytes, ready for a device copy.
    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// View the index data as raw bytes, ready for a device copy.
    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    fn check(&self, kind: BufferKind, requested: usize) -> Result<()> {
        let capacity = match (self.capacity, kind) {
            (None, _) => return Ok(()),
            (Some([vertices, _]), BufferKind::Vertex) => vertices,
            (Some([_, indices]), BufferKind::Index) => indices,
        };
        if requested > capacity {
            log::warn!(
                "rejected {} upload of {} elements into a buffer of {}",
                kind,
                requested,
                capacity
            );
            return Err(Error::BufferOverflow {
                kind,
                requested,
                capacity,
            });
        }
        Ok(())
    }
}

impl<V: Pod> Default for MeshBuffer<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Pod> UploadTarget for MeshBuffer<V> {
    type Vertex = V;

    fn upload_vertices(&mut self, vertices: &[V]) -> Result<()> {
        self.check(BufferKind::Vertex, vertices.len())?;
        self.vertices.clear();
        self.vertices.extend_from_slice(vertices);
        Ok(())
    }

    fn upload_indices(&mut self, indices: &[u32]) -> Result<()> {
        self.check(BufferKind::Index, indices.len())?;
        self.indices.clear();
        self.indices.extend_from_slice(indices);
        Ok(())
    }

    fn upload_mesh(&mut self, vertices: &[V], indices: &[u32]) -> Result<()> {
        self.check(BufferKind::Vertex, vertices.len())?;
        self.check(BufferKind::Index, indices.len())?;
        self.upload_vertices(vertices)?;
        self.upload_indices(indices)
    }
}

impl<V> fmt::Debug for MeshBuffer<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MeshBuffer(vertices: {}, indices: {}, capacity: {:?})",
            self.vertices.len(),
            self.indices.len(),
            self.capacity
        )
    }
}

/// Pack a generated point cloud as coloured vertices and upload it.
///
/// Point clouds are non-indexed triangle lists, so only the vertex buffer is
/// written.
pub fn upload_point_cloud<U>(points: &[SimplexVertex], target: &mut U) -> Result<()>
where
    U: UploadTarget<Vertex = ColorVertex> + ?Sized,
{
    let packed: Vec<ColorVertex> = points.iter().copied().map(ColorVertex::from).collect();
    log::debug!("uploading point cloud: {} vertices", packed.len());
    target.upload_vertices(&packed)
}
