/// How a single visible segment is packed into an index buffer.
///
/// The turtle's pen logic only ever asks for "a segment from `from` to `to`";
/// the topology decides what that looks like to the renderer.
pub trait Topology {
    /// Number of index entries each segment occupies, at least 2.
    const INDICES_PER_SEGMENT: usize;

    /// Append the indices describing the segment `from -> to`, starting with
    /// `from, to`.
    fn emit_segment(indices: &mut Vec<u32>, from: u32, to: u32);

    /// Recover the `(from, to)` pairs from an index buffer of this topology.
    fn segments(indices: &[u32]) -> Segments<'_> {
        Segments::new(indices, Self::INDICES_PER_SEGMENT)
    }
}

/// Each segment is an independent `[from, to]` pair.
#[derive(Copy, Clone, Debug, Default)]
pub struct LineList;

impl Topology for LineList {
    const INDICES_PER_SEGMENT: usize = 2;

    #[inline]
    fn emit_segment(indices: &mut Vec<u32>, from: u32, to: u32) {
        indices.push(from);
        indices.push(to);
    }
}

/// Each segment is a degenerate `[from, to, to]` triangle.
///
/// A wireframe triangle rasterizer draws the edges of this triangle, which all
/// lie on the segment, so line art can share a pipeline with filled geometry.
#[derive(Copy, Clone, Debug, Default)]
pub struct LineTriangleList;

impl Topology for LineTriangleList {
    const INDICES_PER_SEGMENT: usize = 3;

    #[inline]
    fn emit_segment(indices: &mut Vec<u32>, from: u32, to: u32) {
        indices.push(from);
        indices.push(to);
        indices.push(to);
    }
}

/// Iterator over the `(from, to)` pairs of an index buffer.
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    chunks: core::slice::ChunksExact<'a, u32>,
}

impl<'a> Segments<'a> {
    fn new(indices: &'a [u32], stride: usize) -> Self {
        Self {
            chunks: indices.chunks_exact(stride),
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = (u32, u32);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(|chunk| (chunk[0], chunk[1]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<'a> ExactSizeIterator for Segments<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_list_packs_pairs() {
        let mut indices = Vec::new();
        LineList::emit_segment(&mut indices, 0, 1);
        LineList::emit_segment(&mut indices, 3, 4);
        assert_eq!(indices, vec![0, 1, 3, 4]);
        assert_eq!(LineList::segments(&indices).collect::<Vec<_>>(), vec![(0, 1), (3, 4)]);
    }

    #[test]
    fn triangle_list_packs_degenerate_triangles() {
        let mut indices = Vec::new();
        LineTriangleList::emit_segment(&mut indices, 2, 5);
        assert_eq!(indices, vec![2, 5, 5]);
        assert_eq!(LineTriangleList::segments(&indices).len(), 1);
        assert_eq!(LineTriangleList::segments(&indices).next(), Some((2, 5)));
    }
}
