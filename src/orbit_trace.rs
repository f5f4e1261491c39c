//! # Orbit sampling and point-cloud export
//!
//! This module turns repeated state queries into a plottable orbit: an
//! [`OrbitTrace`] samples a body once per whole day over an inclusive MJD
//! range, keeps the AU-scaled positions in input order, and writes them out
//! as a `mjd,x_au,y_au,z_au` CSV point cloud for a 2-D scatter plot.
//!
//! Sampling is eager and single-pass: the full sequence is materialized
//! before any export, and the first failing lookup aborts the whole pass.

use std::ops::RangeInclusive;

use camino::Utf8Path;
use log::debug;
use nalgebra::Vector3;

use crate::bodies::Body;
use crate::constants::{AU, MJD};
use crate::frames::ReferenceFrame;
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::time::mjd_to_et_seconds;

/// Daily positions of one body over an MJD range, in astronomical units.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitTrace {
    /// Sampled body
    pub body: Body,
    /// Frame the positions are expressed in
    pub frame: ReferenceFrame,
    /// Sampled epochs (whole days, MJD), in input order
    pub mjd: Vec<MJD>,
    /// Barycentric positions (AU), one per epoch
    pub positions: Vec<Vector3<f64>>,
}

impl OrbitTrace {
    /// Sample a body once per day over an inclusive whole-day MJD range.
    ///
    /// Arguments
    /// -----------------
    /// * `orrery`: session whose kernel pool answers the queries.
    /// * `body`: the target body.
    /// * `days`: inclusive range of integer MJDs (e.g. `59600..=59999` yields
    ///   400 samples).
    /// * `frame`: reference frame of the sampled positions.
    ///
    /// Return
    /// ----------
    /// * The materialized [`OrbitTrace`], or the error of the first failing
    ///   state lookup (the partial sequence is discarded).
    pub fn sample(
        orrery: &Orrery,
        body: Body,
        days: RangeInclusive<i64>,
        frame: ReferenceFrame,
    ) -> Result<Self, OrreryError> {
        let capacity = days.size_hint().0;
        let mut mjd = Vec::with_capacity(capacity);
        let mut positions = Vec::with_capacity(capacity);

        for day in days {
            let epoch = day as MJD;
            let state = orrery.state_vector(body, mjd_to_et_seconds(epoch), frame)?;
            mjd.push(epoch);
            positions.push(state.position / AU);
        }

        debug!("sampled {} daily positions of {body} in {frame}", mjd.len());

        Ok(OrbitTrace {
            body,
            frame,
            mjd,
            positions,
        })
    }

    /// Number of sampled epochs.
    pub fn len(&self) -> usize {
        self.mjd.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mjd.is_empty()
    }

    /// Write the point cloud as a `mjd,x_au,y_au,z_au` CSV file.
    ///
    /// The rows preserve sampling order, so plotting `x_au` against `y_au`
    /// traces the orbit in the frame's fundamental plane.
    ///
    /// Arguments
    /// -----------------
    /// * `path`: destination file, created or truncated.
    pub fn write_csv(&self, path: &Utf8Path) -> Result<(), OrreryError> {
        let mut writer = csv::Writer::from_path(path.as_std_path())?;
        writer.write_record(["mjd", "x_au", "y_au", "z_au"])?;
        for (epoch, position) in self.mjd.iter().zip(&self.positions) {
            writer.write_record(&[
                epoch.to_string(),
                position.x.to_string(),
                position.y.to_string(),
                position.z.to_string(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test_orbit_trace {
    use super::*;

    fn toy_trace() -> OrbitTrace {
        OrbitTrace {
            body: Body::Earth,
            frame: ReferenceFrame::EquatorialJ2000,
            mjd: vec![59600.0, 59601.0],
            positions: vec![Vector3::new(-0.5, 0.75, 0.25), Vector3::new(-0.51, 0.74, 0.25)],
        }
    }

    #[test]
    fn test_len() {
        let trace = toy_trace();
        assert_eq!(trace.len(), 2);
        assert!(!trace.is_empty());
    }

    #[test]
    fn test_write_csv() {
        let tmp = camino::Utf8PathBuf::from_path_buf(std::env::temp_dir())
            .expect("temp dir is not valid UTF-8")
            .join("orrery_trace_test.csv");

        toy_trace().write_csv(&tmp).unwrap();

        let contents = std::fs::read_to_string(&tmp).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("mjd,x_au,y_au,z_au"));
        assert_eq!(lines.next(), Some("59600,-0.5,0.75,0.25"));
        assert_eq!(lines.next(), Some("59601,-0.51,0.74,0.25"));
        assert_eq!(lines.next(), None);

        std::fs::remove_file(&tmp).unwrap();
    }
}
