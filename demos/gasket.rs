//! Generate a Sierpinski gasket and write it out as a Wavefront OBJ file.
//!
//! ```text
//! cargo run --example gasket -- [depth] [--triangle] [--jitter] [out.obj]
//! ```

use gasket::{
    buffer::upload_point_cloud,
    export::write_obj_triangles,
    logging::{init_logging, LoggingConfig},
    subdivide::{gasket_tetrahedron, gasket_tetrahedron_jittered, gasket_triangle, Depth},
    vertex::ColorVertex,
    MeshBuffer,
};
use std::{env, error::Error, fs::File, io::BufWriter};

fn main() -> Result<(), Box<dyn Error>> {
    init_logging(LoggingConfig::default());

    let mut depth = 4;
    let mut triangle = false;
    let mut jitter = false;
    let mut out = String::from("gasket.obj");
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--triangle" => triangle = true,
            "--jitter" => jitter = true,
            other => match other.parse::<i64>() {
                Ok(n) => depth = n,
                Err(_) => out = other.to_owned(),
            },
        }
    }

    let depth = Depth::new(depth)?;
    let points = if triangle {
        gasket_triangle(depth)
    } else if jitter {
        gasket_tetrahedron_jittered(depth, &mut rand::rng())
    } else {
        gasket_tetrahedron(depth)
    };

    // What a renderer would receive
    let mut target = MeshBuffer::<ColorVertex>::new();
    upload_point_cloud(&points, &mut target)?;
    log::info!(
        "{} vertices, {} bytes at stride {}",
        target.vertices().len(),
        target.vertex_bytes().len(),
        target.stride()
    );

    write_obj_triangles(BufWriter::new(File::create(&out)?), &points)?;
    log::info!("wrote {}", out);
    Ok(())
}
