//! Draw a dashed square spiral with the turtle and write it out as OBJ lines.
//!
//! ```text
//! cargo run --example turtle -- [out.obj]
//! ```

use gasket::{
    export::write_obj_lines,
    logging::{init_logging, LoggingConfig},
    turtle::{TurtlePose, YAxis},
    vertex::PositionVertex,
    MeshBuffer, Turtle,
};
use std::{env, error::Error, fs::File, io::BufWriter};

// Matches the fixed-size dynamic vertex buffer of a typical line demo
const MAX_POINTS: usize = 1024;

fn main() -> Result<(), Box<dyn Error>> {
    init_logging(LoggingConfig::default());
    let out = env::args().nth(1).unwrap_or_else(|| String::from("turtle.obj"));

    // Pixel coordinates, y down
    let mut turtle = Turtle::new().y_axis(YAxis::Down);
    turtle.init_pose(TurtlePose::new(400.0, 300.0, 0.0));
    for i in 0..200 {
        // Dashes: every fourth leg is a gap
        turtle.toggle_pen(i % 4 == 3);
        turtle.forward(2.0 + i as f32 * 1.5);
        turtle.right(91.0);
    }

    let mut target = MeshBuffer::<PositionVertex>::with_capacity(MAX_POINTS, MAX_POINTS * 2);
    turtle.upload(&mut target)?;
    log::info!(
        "{} vertices, {} segments",
        target.vertices().len(),
        turtle.segments().len()
    );

    write_obj_lines(BufWriter::new(File::create(&out)?), &turtle)?;
    log::info!("wrote {}", out);
    Ok(())
}
