//! Sample one year of the Earth's barycentric orbit from a planetary SPK
//! kernel and write the scatter point cloud to `earth_orbit.csv`.
//!
//! Usage: `cargo run --example earth_orbit -- path/to/de440s.bsp`

extern crate pretty_env_logger as pel;

use std::error::Error;

use camino::Utf8Path;
use orrery::{Body, OrbitTrace, Orrery, ReferenceFrame};

fn main() -> Result<(), Box<dyn Error>> {
    pel::init();

    let kernel = std::env::args()
        .nth(1)
        .ok_or("usage: earth_orbit <path/to/de440s.bsp>")?;

    let orrery = Orrery::new(&[kernel.as_str()])?;

    // MJD 59600 is 2022-01-21; 400 daily samples cover a bit over one year.
    let trace = OrbitTrace::sample(
        &orrery,
        Body::Earth,
        59600..=59999,
        ReferenceFrame::EquatorialJ2000,
    )?;

    let out = Utf8Path::new("earth_orbit.csv");
    trace.write_csv(out)?;
    println!(
        "{} daily positions of {} written to {out}",
        trace.len(),
        trace.body
    );
    println!("plot x_au against y_au for the equatorial-plane scatter");

    Ok(())
}
