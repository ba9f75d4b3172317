//! Wavefront OBJ output, for looking at generated geometry without a renderer.

use std::io::Write;

use crate::{
    turtle::{Topology, Turtle},
    vertex::SimplexVertex,
    Result,
};

/// Write a triangle-list point cloud as `v` and `f` records.
///
/// Every three consecutive vertices form one face. A trailing partial triangle
/// is written as vertices only.
pub fn write_obj_triangles<W: Write>(mut writer: W, points: &[SimplexVertex]) -> Result<()> {
    writeln!(writer, "# {} vertices, {} triangles", points.len(), points.len() / 3)?;
    for v in points {
        match v.color {
            // Vertex colours use the common `v x y z r g b` extension
            Some(c) => writeln!(
                writer,
                "v {} {} {} {} {} {}",
                v.position.x, v.position.y, v.position.z, c.r, c.g, c.b
            )?,
            None => writeln!(writer, "v {} {} {}", v.position.x, v.position.y, v.position.z)?,
        }
    }
    // OBJ indices are 1-based
    for i in (0..points.len() / 3).map(|tri| tri * 3 + 1) {
        writeln!(writer, "f {} {} {}", i, i + 1, i + 2)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a turtle's path as `v` and `l` records, one `l` per drawn segment.
pub fn write_obj_lines<W: Write, T: Topology>(mut writer: W, turtle: &Turtle<T>) -> Result<()> {
    let vertices = turtle.buffer().vertices();
    writeln!(writer, "# {} vertices, {} segments", vertices.len(), turtle.segments().len())?;
    for p in vertices {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for (from, to) in turtle.segments() {
        writeln!(writer, "l {} {}", from + 1, to + 1)?;
    }
    writer.flush()?;
    Ok(())
}
