//! # Orrery: ephemeris session and state queries
//!
//! This module defines the [`Orrery`](crate::orrery::Orrery) struct, the session object that owns
//! the ephemeris engine's kernel pool and answers state-vector queries against it.
//!
//! The wrapped engine ([ANISE](https://docs.rs/anise)) performs all the heavy lifting: DAF/SPK
//! binary parsing, Chebyshev interpolation, and frame rotation. `Orrery` contributes the typed
//! surface around it:
//!
//! 1. **Kernel loading** — an ordered sequence of SPK file paths loaded at construction or one
//!    at a time. Order matters by convention: the first-loaded planetary kernel establishes the
//!    primary ephemeris source later queries resolve against. A failed load leaves every kernel
//!    loaded before the failure in place (no rollback).
//! 2. **State queries** — 6-component Cartesian states for a [`Body`] at an ephemeris epoch, in
//!    a [`ReferenceFrame`], with the observer fixed at the solar-system barycenter and **no**
//!    light-time or aberration correction applied.
//!
//! The pool lives and dies with the `Orrery` value: dropping the session releases every loaded
//! kernel, with no process-global state left behind.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use orrery::{Body, Orrery, ReferenceFrame};
//! use orrery::time::mjd_to_et_seconds;
//!
//! let orrery = Orrery::new(&["kernels/de440s.bsp"]).unwrap();
//! let state = orrery
//!     .state_vector(Body::Earth, mjd_to_et_seconds(59600.0), ReferenceFrame::EquatorialJ2000)
//!     .unwrap();
//! println!("Earth at MJD 59600: {:?} AU", state.position_au());
//! ```
//!
//! ## See also
//! ------------
//! * [`Body`] – Closed set of addressable bodies with their NAIF ids.
//! * [`ReferenceFrame`] – Frames a state can be expressed in.
//! * [`OrbitTrace`](crate::orbit_trace::OrbitTrace) – Daily sampling built on top of the queries.

use std::fmt;

use anise::almanac::Almanac;
use anise::astro::Aberration;
use anise::prelude::Frame;
use camino::{Utf8Path, Utf8PathBuf};
use hifitime::Epoch;
use log::{debug, info};

use crate::bodies::Body;
use crate::constants::{EphemerisSeconds, VLIGHT};
use crate::frames::ReferenceFrame;
use crate::orrery_errors::OrreryError;
use crate::state_vector::StateVector;

#[derive(Clone, Default)]
pub struct Orrery {
    almanac: Almanac,
    loaded: Vec<Utf8PathBuf>,
}

// The engine's almanac has no Debug impl; report the pool by its load list.
impl fmt::Debug for Orrery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orrery")
            .field("loaded", &self.loaded)
            .finish_non_exhaustive()
    }
}

impl Orrery {
    /// Construct a session and load an ordered sequence of SPK kernels into its pool.
    ///
    /// The paths are loaded in the order given. Kernel ordering is a correctness
    /// invariant enforced by convention (planetary ephemeris first), not verified
    /// programmatically.
    ///
    /// Arguments
    /// -----------------
    /// * `kernel_paths`: ordered SPK file paths (e.g. `["kernels/de440s.bsp"]`).
    ///
    /// Return
    /// ----------
    /// * A new [`Orrery`] with every kernel loaded, or the error of the first
    ///   failing load. Kernels loaded before the failure are discarded with the
    ///   partially built session.
    ///
    /// See also
    /// ------------
    /// * [`load_kernel`](crate::orrery::Orrery::load_kernel) – Incremental loading into an existing session.
    pub fn new<P: AsRef<Utf8Path>>(kernel_paths: &[P]) -> Result<Self, OrreryError> {
        let mut orrery = Orrery::default();
        for path in kernel_paths {
            orrery.load_kernel(path.as_ref())?;
        }
        Ok(orrery)
    }

    /// Load a single SPK kernel into the session's pool.
    ///
    /// A missing file is reported as [`OrreryError::KernelNotFound`] before the
    /// engine is involved; a file the engine rejects is reported as
    /// [`OrreryError::KernelLoad`]. In both cases the pool keeps every kernel
    /// loaded so far, which stays queryable.
    ///
    /// Arguments
    /// -----------------
    /// * `path`: filesystem path of the kernel to load.
    ///
    /// Return
    /// ----------
    /// * `Ok(())` once the kernel is part of the pool, or the typed load error
    ///   carrying the offending path.
    pub fn load_kernel(&mut self, path: &Utf8Path) -> Result<(), OrreryError> {
        if !path.exists() {
            return Err(OrreryError::KernelNotFound(path.to_string()));
        }
        self.almanac = self
            .almanac
            .load(path.as_str())
            .map_err(|source| OrreryError::KernelLoad {
                path: path.to_string(),
                source,
            })?;
        self.loaded.push(path.to_path_buf());
        info!("loaded SPK kernel {path}");
        Ok(())
    }

    /// Paths of the kernels currently in the pool, in load order.
    pub fn loaded_kernels(&self) -> &[Utf8PathBuf] {
        &self.loaded
    }

    /// Query the Cartesian state of a body at an ephemeris epoch.
    ///
    /// The state is expressed in `frame`, relative to the solar-system
    /// barycenter (NAIF 0), with no light-time or aberration correction —
    /// the geometric state exactly as interpolated from the loaded kernels.
    /// Repeated queries with a fixed pool and fixed inputs return identical
    /// results.
    ///
    /// Arguments
    /// -----------------
    /// * `body`: the target body.
    /// * `et_seconds`: epoch in ephemeris seconds past J2000
    ///   (see [`mjd_to_et_seconds`](crate::time::mjd_to_et_seconds)).
    /// * `frame`: reference frame of the returned components.
    ///
    /// Return
    /// ----------
    /// * The [`StateVector`] (km, km/s), or [`OrreryError::EphemerisQuery`] if
    ///   the body or epoch is outside the coverage of every loaded kernel.
    pub fn state_vector(
        &self,
        body: Body,
        et_seconds: EphemerisSeconds,
        frame: ReferenceFrame,
    ) -> Result<StateVector, OrreryError> {
        let epoch = Epoch::from_et_seconds(et_seconds);
        let target = Frame::new(body.naif_id(), frame.orientation_id());
        let observer =
            Frame::new(Body::SolarSystemBarycenter.naif_id(), frame.orientation_id());

        let state = self
            .almanac
            .translate(target, observer, epoch, Aberration::NONE)
            .map_err(|source| OrreryError::EphemerisQuery {
                body,
                et_seconds,
                source,
            })?;

        debug!("{body} at {et_seconds} s past J2000 queried in {frame}");

        Ok(StateVector {
            position: state.radius_km,
            velocity: state.velocity_km_s,
            light_time: state.radius_km.norm() / VLIGHT,
        })
    }
}

#[cfg(all(test, feature = "jpl-download"))]
mod orrery_de440s_test {
    use super::*;
    use crate::time::mjd_to_et_seconds;
    use crate::unit_test_global::ORRERY_DE440S;

    #[test]
    fn test_state_query_is_deterministic() {
        let et = mjd_to_et_seconds(59600.0);
        let first = ORRERY_DE440S
            .state_vector(Body::Earth, et, ReferenceFrame::EquatorialJ2000)
            .unwrap();
        let second = ORRERY_DE440S
            .state_vector(Body::Earth, et, ReferenceFrame::EquatorialJ2000)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_moon_is_queryable() {
        let et = mjd_to_et_seconds(59600.0);
        let moon = ORRERY_DE440S
            .state_vector(Body::Moon, et, ReferenceFrame::EquatorialJ2000)
            .unwrap();
        // The Moon stays within ~1.003 AU of the barycenter when the Earth does.
        let r_au = moon.position_au().norm();
        assert!(r_au > 0.9 && r_au < 1.1, "unexpected Moon radius: {r_au} AU");
    }

    #[test]
    fn test_ecliptic_frame_flattens_earth_orbit() {
        let et = mjd_to_et_seconds(59600.0);
        let ecl = ORRERY_DE440S
            .state_vector(Body::Earth, et, ReferenceFrame::EclipticJ2000)
            .unwrap()
            .position_au();
        // In the ecliptic frame the Earth's z component is a few 1e-5 AU at most.
        assert!(ecl.z.abs() < 1e-3, "Earth z in ECLIPJ2000: {}", ecl.z);
    }

    #[test]
    fn test_epoch_outside_coverage_is_a_query_error() {
        // DE440s covers 1849..2150; MJD 150000 is year 2269.
        let et = mjd_to_et_seconds(150_000.0);
        let err = ORRERY_DE440S
            .state_vector(Body::Earth, et, ReferenceFrame::EquatorialJ2000)
            .unwrap_err();
        assert!(matches!(
            err,
            OrreryError::EphemerisQuery {
                body: Body::Earth,
                ..
            }
        ));
    }
}
