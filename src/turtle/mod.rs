//! Turtle graphics that build index buffers.
//!
//! A [`Turtle`] walks the plane under `forward` / `left` / `right` commands and
//! records every position it visits as a vertex. While the pen is down, each
//! move also emits a segment joining the previous position to the new one, packed
//! by the turtle's [`Topology`]. Moves made with the pen up still record their
//! vertex, so later segments can start there, but join nothing.
//!
//! Headings are in degrees and follow the mathematical convention: 0 points
//! along +x and positive angles turn counter-clockwise towards +y. Renderers
//! whose y axis points down the screen should build the turtle with
//! [`YAxis::Down`] (or negate y themselves).

mod topology;

pub use self::topology::{LineList, LineTriangleList, Segments, Topology};

use core::marker::PhantomData;

use vek::Vec3;

use crate::{
    buffer::UploadTarget,
    vertex::{Point3, PositionVertex},
    Result,
};

/// Pen state. A turtle starts with its pen down.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pen {
    Up,
    Down,
}

impl Default for Pen {
    fn default() -> Self {
        Pen::Down
    }
}

/// The direction in which positive y points.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum YAxis {
    /// Maths convention, positive headings turn counter-clockwise on screen.
    Up,
    /// Screen convention, positive y points down the screen.
    Down,
}

impl Default for YAxis {
    fn default() -> Self {
        YAxis::Up
    }
}

impl YAxis {
    #[inline]
    fn sign(self) -> f32 {
        match self {
            YAxis::Up => 1.0,
            YAxis::Down => -1.0,
        }
    }
}

/// A starting pose for [`Turtle::init`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TurtlePose {
    pub x: f32,
    pub y: f32,
    /// Heading in degrees.
    pub heading: f32,
}

impl TurtlePose {
    pub fn new(x: f32, y: f32, heading: f32) -> Self {
        Self { x, y, heading }
    }
}

/// A snapshot of a turtle's mutable state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TurtleState {
    pub position: Point3,
    pub heading: f32,
    pub pen: Pen,
}

/// The vertices and indices a turtle has produced so far.
///
/// Every index is smaller than `vertices.len()`, and the index count is always
/// a whole number of segments for the topology that filled it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolylineBuffer {
    vertices: Vec<Point3>,
    indices: Vec<u32>,
}

impl PolylineBuffer {
    #[inline]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// The index the next pushed vertex will receive.
    #[inline]
    pub fn next_index(&self) -> u32 {
        self.vertices.len() as u32
    }

    fn push_vertex(&mut self, position: Point3) -> u32 {
        let index = self.next_index();
        self.vertices.push(position);
        index
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Pack the vertices into the position-only layout.
    pub fn packed_vertices(&self) -> Vec<PositionVertex> {
        self.vertices.iter().copied().map(PositionVertex::from).collect()
    }

    /// Send the vertices and indices to a render target.
    pub fn upload<U>(&self, target: &mut U) -> Result<()>
    where
        U: UploadTarget<Vertex = PositionVertex> + ?Sized,
    {
        target.upload_mesh(&self.packed_vertices(), &self.indices)
    }
}

/// A 2D turtle emitting geometry for the topology `T`.
#[derive(Clone, Debug)]
pub struct Turtle<T = LineList> {
    position: Point3,
    heading: f32,
    pen: Pen,
    y_axis: YAxis,
    // Index of the vertex at `position`, the start of the next segment
    cursor: Option<u32>,
    buffer: PolylineBuffer,
    topology: PhantomData<T>,
}

impl Turtle<LineList> {
    /// An unplaced line-list turtle at the origin, heading 0, pen down.
    pub fn new() -> Self {
        Self::with_topology()
    }
}

impl Default for Turtle<LineList> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Topology> Turtle<T> {
    /// An unplaced turtle packing segments with the topology `T`.
    pub fn with_topology() -> Self {
        Self {
            position: Vec3::zero(),
            heading: 0.0,
            pen: Pen::default(),
            y_axis: YAxis::default(),
            cursor: None,
            buffer: PolylineBuffer::default(),
            topology: PhantomData,
        }
    }

    /// Use the given y axis convention for subsequent moves.
    pub fn y_axis(mut self, y_axis: YAxis) -> Self {
        self.y_axis = y_axis;
        self
    }

    /// Place the turtle and record its starting point as a vertex.
    ///
    /// Buffers are kept, so calling this again starts a new stroke that is not
    /// joined to the previous one.
    pub fn init(&mut self, x: f32, y: f32, heading: f32) {
        self.position = Vec3::new(x, y, 0.0);
        self.heading = heading;
        self.cursor = Some(self.buffer.push_vertex(self.position));
        log::trace!("turtle placed at ({}, {}) heading {}", x, y, heading);
    }

    /// [`Turtle::init`] from a [`TurtlePose`].
    pub fn init_pose(&mut self, pose: TurtlePose) {
        self.init(pose.x, pose.y, pose.heading);
    }

    /// Move `distance` units along the current heading.
    ///
    /// The new position is always recorded. With the pen down, a segment from
    /// the previous position is emitted as well. An unplaced turtle is first
    /// placed where it stands, as if by [`Turtle::init`].
    pub fn forward(&mut self, distance: f32) {
        let from = match self.cursor {
            Some(index) => index,
            None => self.buffer.push_vertex(self.position),
        };

        let (sin, cos) = self.heading.to_radians().sin_cos();
        self.position += Vec3::new(cos, sin * self.y_axis.sign(), 0.0) * distance;

        let to = self.buffer.push_vertex(self.position);
        if self.pen == Pen::Down {
            T::emit_segment(&mut self.buffer.indices, from, to);
        }
        self.cursor = Some(to);
    }

    /// Turn clockwise by `angle` degrees.
    pub fn right(&mut self, angle: f32) {
        self.heading -= angle;
    }

    /// Turn counter-clockwise by `angle` degrees.
    pub fn left(&mut self, angle: f32) {
        self.heading += angle;
    }

    /// `true` lifts the pen, `false` lowers it. Emits nothing by itself.
    pub fn toggle_pen(&mut self, pen_up: bool) {
        self.pen = if pen_up { Pen::Up } else { Pen::Down };
    }

    pub fn pen_up(&mut self) {
        self.pen = Pen::Up;
    }

    pub fn pen_down(&mut self) {
        self.pen = Pen::Down;
    }

    #[inline]
    pub fn pen(&self) -> Pen {
        self.pen
    }

    #[inline]
    pub fn position(&self) -> Point3 {
        self.position
    }

    /// Heading in degrees, never normalised.
    #[inline]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn state(&self) -> TurtleState {
        TurtleState {
            position: self.position,
            heading: self.heading,
            pen: self.pen,
        }
    }

    /// A copy of every vertex recorded so far.
    pub fn points(&self) -> Vec<Point3> {
        self.buffer.vertices.clone()
    }

    /// A copy of the index buffer built so far.
    pub fn indices(&self) -> Vec<u32> {
        self.buffer.indices.clone()
    }

    #[inline]
    pub fn buffer(&self) -> &PolylineBuffer {
        &self.buffer
    }

    /// The `(from, to)` vertex index pairs of every segment drawn.
    pub fn segments(&self) -> Segments<'_> {
        T::segments(&self.buffer.indices)
    }

    /// Drop all geometry and return to the unplaced origin pose, pen down.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.position = Vec3::zero();
        self.heading = 0.0;
        self.pen = Pen::default();
        self.cursor = None;
    }

    /// Send the current geometry to a render target.
    pub fn upload<U>(&self, target: &mut U) -> Result<()>
    where
        U: UploadTarget<Vertex = PositionVertex> + ?Sized,
    {
        log::debug!(
            "uploading turtle path: {} vertices, {} indices",
            self.buffer.vertices.len(),
            self.buffer.indices.len()
        );
        self.buffer.upload(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::MeshBuffer;

    fn approx(a: Point3, b: Point3) -> bool {
        (a - b).magnitude() < 1e-5
    }

    #[test]
    fn single_step() {
        let mut t = Turtle::new();
        t.init(0.0, 0.0, 0.0);
        assert!(t.indices().is_empty());
        t.forward(1.0);
        assert_eq!(t.points(), vec![Vec3::zero(), Vec3::new(1.0, 0.0, 0.0)]);
        assert_eq!(t.indices(), vec![0, 1]);
    }

    #[test]
    fn pen_up_leaves_a_gap() {
        let mut t = Turtle::new();
        t.init(0.0, 0.0, 0.0);
        t.toggle_pen(true);
        t.forward(1.0);
        t.toggle_pen(false);
        t.forward(1.0);

        assert_eq!(t.points().len(), 3);
        assert_eq!(t.indices(), vec![1, 2]);
        assert!(t.segments().all(|seg| seg != (0, 1)));
    }

    #[test]
    fn pen_lifted_before_init() {
        let mut t = Turtle::new();
        t.pen_up();
        t.init(0.0, 0.0, 0.0);
        t.forward(1.0);
        t.pen_down();
        t.forward(1.0);

        assert_eq!(t.points().len(), 3);
        assert_eq!(t.indices(), vec![1, 2]);
    }

    #[test]
    fn consecutive_pen_up_moves_draw_nothing() {
        let mut t = Turtle::new();
        t.init(0.0, 0.0, 0.0);
        t.forward(1.0);
        t.pen_up();
        t.forward(1.0);
        t.forward(1.0);
        t.pen_down();
        t.forward(1.0);

        assert_eq!(t.points().len(), 5);
        assert_eq!(t.segments().collect::<Vec<_>>(), vec![(0, 1), (3, 4)]);
    }

    #[test]
    fn indices_are_always_even_and_in_range() {
        let mut t = Turtle::new();
        t.init(0.0, 0.0, 30.0);
        for i in 0..40 {
            t.toggle_pen(i % 3 == 0);
            t.forward(0.5);
            t.left(17.0);
            assert_eq!(t.indices().len() % 2, 0);
            let len = t.points().len() as u32;
            assert!(t.indices().iter().all(|&i| i < len));
        }
    }

    #[test]
    fn headings_follow_the_maths_convention() {
        let mut t = Turtle::new();
        t.init(1.0, 1.0, 90.0);
        t.forward(2.0);
        assert!(approx(t.position(), Vec3::new(1.0, 3.0, 0.0)));

        t.right(90.0);
        assert_eq!(t.heading(), 0.0);
        t.forward(1.0);
        assert!(approx(t.position(), Vec3::new(2.0, 3.0, 0.0)));

        t.right(450.0);
        assert_eq!(t.heading(), -450.0);
        t.forward(1.0);
        assert!(approx(t.position(), Vec3::new(2.0, 2.0, 0.0)));
    }

    #[test]
    fn y_down_flips_turns_on_screen() {
        let mut t = Turtle::new().y_axis(YAxis::Down);
        t.init(0.0, 0.0, 90.0);
        t.forward(1.0);
        assert!(approx(t.position(), Vec3::new(0.0, -1.0, 0.0)));
    }

    #[test]
    fn square_closes() {
        let mut t = Turtle::new();
        t.init(0.0, 0.0, 0.0);
        for _ in 0..4 {
            t.forward(1.0);
            t.left(90.0);
        }
        assert_eq!(t.points().len(), 5);
        assert_eq!(t.indices(), vec![0, 1, 1, 2, 2, 3, 3, 4]);
        assert!(approx(t.points()[4], t.points()[0]));
    }

    #[test]
    fn init_again_starts_a_new_stroke() {
        let mut t = Turtle::new();
        t.init(0.0, 0.0, 0.0);
        t.forward(1.0);
        t.init(5.0, 5.0, 0.0);
        t.forward(1.0);
        assert_eq!(t.segments().collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn forward_before_init_places_the_turtle() {
        let mut t = Turtle::new();
        t.forward(2.0);
        assert_eq!(t.points(), vec![Vec3::zero(), Vec3::new(2.0, 0.0, 0.0)]);
        assert_eq!(t.indices(), vec![0, 1]);
    }

    #[test]
    fn degenerate_moves_are_well_defined() {
        let mut t = Turtle::new();
        t.init(0.0, 0.0, 0.0);
        t.left(0.0);
        t.forward(0.0);
        assert_eq!(t.points(), vec![Vec3::zero(), Vec3::zero()]);
        assert_eq!(t.indices(), vec![0, 1]);
    }

    #[test]
    fn snapshots_are_stable() {
        let mut t = Turtle::new();
        t.init(0.0, 0.0, 45.0);
        t.forward(1.0);
        assert_eq!(t.points(), t.points());
        assert_eq!(t.indices(), t.indices());

        let before = t.points();
        t.forward(1.0);
        assert_eq!(before.len(), 2);
    }

    #[test]
    fn pen_state_does_not_emit() {
        let mut t = Turtle::new();
        t.init(0.0, 0.0, 0.0);
        t.toggle_pen(true);
        t.toggle_pen(false);
        assert_eq!(t.pen(), Pen::Down);
        assert_eq!(t.points().len(), 1);
        assert!(t.indices().is_empty());
    }

    #[test]
    fn triangle_topology_uses_the_same_pen_logic() {
        let mut t = Turtle::<LineTriangleList>::with_topology();
        t.init(0.0, 0.0, 0.0);
        t.forward(1.0);
        t.pen_up();
        t.forward(1.0);
        t.pen_down();
        t.forward(1.0);
        assert_eq!(t.indices(), vec![0, 1, 1, 2, 3, 3]);
        assert_eq!(t.segments().collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn reset_forgets_everything() {
        let mut t = Turtle::new();
        t.init_pose(TurtlePose::new(3.0, 4.0, 10.0));
        t.pen_up();
        t.forward(1.0);
        t.reset();
        assert!(t.points().is_empty() && t.indices().is_empty());
        assert_eq!(
            t.state(),
            TurtleState {
                position: Vec3::zero(),
                heading: 0.0,
                pen: Pen::Down,
            }
        );
    }

    #[test]
    fn uploads_into_a_mesh_buffer() {
        let mut t = Turtle::new();
        t.init(0.0, 0.0, 0.0);
        t.forward(1.0);
        t.forward(1.0);

        let mut target = MeshBuffer::<PositionVertex>::new();
        t.upload(&mut target).unwrap();
        assert_eq!(target.vertices().len(), 3);
        assert_eq!(target.indices(), &[0, 1, 1, 2]);
    }

    #[test]
    fn overflowing_upload_keeps_the_previous_path() {
        let mut t = Turtle::new();
        t.init(0.0, 0.0, 0.0);
        t.forward(1.0);

        let mut target = MeshBuffer::<PositionVertex>::with_capacity(8, 2);
        t.upload(&mut target).unwrap();

        t.forward(1.0);
        assert!(t.upload(&mut target).is_err());
        assert_eq!(target.vertices().len(), 2);
        assert_eq!(target.indices(), &[0, 1]);
    }
}
