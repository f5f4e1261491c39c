//! # orrery
//!
//! A typed session layer over the [ANISE](https://docs.rs/anise) planetary
//! ephemeris engine. The engine owns the hard parts — DAF/SPK binary parsing,
//! Chebyshev interpolation, frame rotation — while this crate provides the
//! surface a plotting client needs:
//!
//! - [`Body`]: the closed set of addressable bodies with their NAIF ids,
//! - [`Orrery`]: a session owning the kernel pool, with ordered loads and
//!   barycentric state queries (no aberration correction),
//! - [`time`]: the pure MJD → ephemeris-seconds affine conversion,
//! - [`OrbitTrace`]: eager daily sampling of AU-scaled positions, exported as
//!   a CSV point cloud for 2-D scatter plotting.
//!
//! ```rust, no_run
//! use orrery::{Body, OrbitTrace, Orrery, ReferenceFrame};
//!
//! let orrery = Orrery::new(&["kernels/de440s.bsp"]).unwrap();
//! let trace = OrbitTrace::sample(
//!     &orrery,
//!     Body::Earth,
//!     59600..=59999,
//!     ReferenceFrame::EquatorialJ2000,
//! )
//! .unwrap();
//! trace.write_csv("earth_orbit.csv".into()).unwrap();
//! ```

pub mod bodies;
pub mod constants;
#[cfg(feature = "jpl-download")]
pub mod download;
pub mod frames;
pub mod orbit_trace;
pub mod orrery;
pub mod orrery_errors;
pub mod state_vector;
pub mod time;

pub use bodies::Body;
pub use frames::ReferenceFrame;
pub use orbit_trace::OrbitTrace;
pub use orrery::Orrery;
pub use orrery_errors::OrreryError;
pub use state_vector::StateVector;

#[cfg(all(test, feature = "jpl-download"))]
pub(crate) mod unit_test_global {
    use std::sync::LazyLock;

    use crate::orrery::Orrery;

    pub(crate) static ORRERY_DE440S: LazyLock<Orrery> = LazyLock::new(|| {
        let spk = crate::download::get_spk_file("de440s").expect("DE440s download failed");
        Orrery::new(&[spk]).expect("Failed to load DE440s")
    });
}
