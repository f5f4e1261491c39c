use std::fmt;
use std::str::FromStr;

use anise::constants::orientations::{ECLIPJ2000, J2000};

use crate::orrery_errors::OrreryError;

/// Reference frame in which a state vector is expressed.
///
/// The set is closed over the two inertial frames the planetary kernels are
/// queried in: the Earth mean equator of J2000 and the ecliptic of J2000.
/// Both share the J2000 epoch; they differ by the obliquity rotation, which
/// the ephemeris engine applies internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceFrame {
    /// Earth mean equator and equinox of J2000 ("J2000" / "EME2000")
    #[default]
    EquatorialJ2000,
    /// Mean ecliptic and equinox of J2000 ("ECLIPJ2000")
    EclipticJ2000,
}

impl ReferenceFrame {
    /// Canonical frame name, as used in SPICE kernel conventions.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceFrame::EquatorialJ2000 => "J2000",
            ReferenceFrame::EclipticJ2000 => "ECLIPJ2000",
        }
    }

    /// NAIF orientation id understood by the ephemeris engine.
    pub(crate) fn orientation_id(&self) -> i32 {
        match self {
            ReferenceFrame::EquatorialJ2000 => J2000,
            ReferenceFrame::EclipticJ2000 => ECLIPJ2000,
        }
    }
}

impl FromStr for ReferenceFrame {
    type Err = OrreryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "J2000" | "EME2000" => Ok(ReferenceFrame::EquatorialJ2000),
            "ECLIPJ2000" => Ok(ReferenceFrame::EclipticJ2000),
            _ => Err(OrreryError::UnknownFrame(s.to_string())),
        }
    }
}

impl fmt::Display for ReferenceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod test_frames {
    use super::*;

    #[test]
    fn test_frame_parse() {
        assert_eq!(
            "J2000".parse::<ReferenceFrame>().unwrap(),
            ReferenceFrame::EquatorialJ2000
        );
        assert_eq!(
            "eme2000".parse::<ReferenceFrame>().unwrap(),
            ReferenceFrame::EquatorialJ2000
        );
        assert_eq!(
            "EclipJ2000".parse::<ReferenceFrame>().unwrap(),
            ReferenceFrame::EclipticJ2000
        );
        assert_eq!(
            "B1950".parse::<ReferenceFrame>().unwrap_err(),
            OrreryError::UnknownFrame("B1950".to_string())
        );
    }

    #[test]
    fn test_frame_display() {
        assert_eq!(ReferenceFrame::EquatorialJ2000.to_string(), "J2000");
        assert_eq!(ReferenceFrame::EclipticJ2000.to_string(), "ECLIPJ2000");
    }

    #[test]
    fn test_frame_default_is_equatorial() {
        assert_eq!(ReferenceFrame::default(), ReferenceFrame::EquatorialJ2000);
    }
}
