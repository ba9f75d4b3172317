//! Procedural geometry for line-list and triangle-list rendering.
//!
//! Two generators produce plain vertex (and index) data with no GPU or OS
//! dependency:
//!
//! - [`subdivide`] turns a seed triangle or tetrahedron into a Sierpinski
//!   gasket by recursive midpoint subdivision, optionally jittering midpoints
//!   with an injected [`RandomSource`].
//! - [`turtle`] runs turtle-graphics commands and records a vertex buffer plus
//!   an index buffer, with pen-up moves leaving gaps.
//!
//! A renderer receives the results through the [`UploadTarget`] trait, after
//! packing them into one of the `#[repr(C)]` layouts in [`vertex`].
//!
//! ```
//! use gasket::{subdivide::{gasket_tetrahedron, Depth}, Turtle};
//!
//! let points = gasket_tetrahedron(Depth::new(2)?);
//! assert_eq!(points.len(), 12 * 16);
//!
//! let mut turtle = Turtle::new();
//! turtle.init(0.0, 0.0, 0.0);
//! turtle.forward(1.0);
//! assert_eq!(turtle.indices(), vec![0, 1]);
//! # Ok::<(), gasket::Error>(())
//! ```

pub mod anim;
pub mod buffer;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod mesh;
pub mod random;
pub mod subdivide;
pub mod turtle;
pub mod vertex;

// Reexports
pub use self::{
    buffer::{MeshBuffer, UploadTarget},
    error::{Error, Result},
    random::RandomSource,
    subdivide::Depth,
    turtle::Turtle,
    vertex::{ColorRgba, Point3, SimplexVertex},
};
