//! Solar system bodies addressable through the ephemeris session.
//!
//! The planetary SPK kernels published by NAIF carry the eight planetary
//! barycenters (1–9 including Pluto), the Sun (10), and the mass centers of
//! the Earth (399) and the Moon (301). [`Body`] is the closed set of those
//! targets: each variant owns its NAIF integer identifier, and conversions
//! from names or raw IDs are fallible rather than panicking.

use std::fmt;
use std::str::FromStr;

use crate::orrery_errors::OrreryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    SolarSystemBarycenter,
    MercuryBarycenter,
    VenusBarycenter,
    EarthMoonBarycenter,
    MarsBarycenter,
    JupiterBarycenter,
    SaturnBarycenter,
    UranusBarycenter,
    NeptuneBarycenter,
    PlutoBarycenter,
    Sun,
    Moon,
    Earth,
}

impl Body {
    /// Every addressable body, in NAIF id order.
    pub const ALL: [Body; 13] = [
        Body::SolarSystemBarycenter,
        Body::MercuryBarycenter,
        Body::VenusBarycenter,
        Body::EarthMoonBarycenter,
        Body::MarsBarycenter,
        Body::JupiterBarycenter,
        Body::SaturnBarycenter,
        Body::UranusBarycenter,
        Body::NeptuneBarycenter,
        Body::PlutoBarycenter,
        Body::Sun,
        Body::Moon,
        Body::Earth,
    ];

    /// NAIF integer identifier of the body, as used inside SPK kernels.
    pub fn naif_id(&self) -> i32 {
        match self {
            Body::SolarSystemBarycenter => 0,
            Body::MercuryBarycenter => 1,
            Body::VenusBarycenter => 2,
            Body::EarthMoonBarycenter => 3,
            Body::MarsBarycenter => 4,
            Body::JupiterBarycenter => 5,
            Body::SaturnBarycenter => 6,
            Body::UranusBarycenter => 7,
            Body::NeptuneBarycenter => 8,
            Body::PlutoBarycenter => 9,
            Body::Sun => 10,
            Body::Moon => 301,
            Body::Earth => 399,
        }
    }

    /// Resolve a body from its NAIF integer identifier.
    ///
    /// Arguments
    /// ---------
    /// * `id`: the NAIF id (e.g. 399 for the Earth, 301 for the Moon).
    ///
    /// Return
    /// ------
    /// * The matching [`Body`], or [`OrreryError::UnknownBodyId`] if the id is
    ///   not part of the planetary kernel set.
    pub fn from_id(id: i32) -> Result<Self, OrreryError> {
        match id {
            0 => Ok(Body::SolarSystemBarycenter),
            1 => Ok(Body::MercuryBarycenter),
            2 => Ok(Body::VenusBarycenter),
            3 => Ok(Body::EarthMoonBarycenter),
            4 => Ok(Body::MarsBarycenter),
            5 => Ok(Body::JupiterBarycenter),
            6 => Ok(Body::SaturnBarycenter),
            7 => Ok(Body::UranusBarycenter),
            8 => Ok(Body::NeptuneBarycenter),
            9 => Ok(Body::PlutoBarycenter),
            10 => Ok(Body::Sun),
            301 => Ok(Body::Moon),
            399 => Ok(Body::Earth),
            _ => Err(OrreryError::UnknownBodyId(id)),
        }
    }
}

impl TryFrom<i32> for Body {
    type Error = OrreryError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Body::from_id(id)
    }
}

impl From<Body> for i32 {
    fn from(body: Body) -> Self {
        body.naif_id()
    }
}

impl FromStr for Body {
    type Err = OrreryError;

    /// Parse a body from its common name, case-insensitively.
    ///
    /// Planet names resolve to the planetary barycenter (the entry a planetary
    /// SPK actually carries); `"earth"`, `"moon"` and `"sun"` resolve to the
    /// respective mass centers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ssb" | "solar system barycenter" => Ok(Body::SolarSystemBarycenter),
            "mercury" | "mercury barycenter" => Ok(Body::MercuryBarycenter),
            "venus" | "venus barycenter" => Ok(Body::VenusBarycenter),
            "emb" | "earth-moon barycenter" => Ok(Body::EarthMoonBarycenter),
            "mars" | "mars barycenter" => Ok(Body::MarsBarycenter),
            "jupiter" | "jupiter barycenter" => Ok(Body::JupiterBarycenter),
            "saturn" | "saturn barycenter" => Ok(Body::SaturnBarycenter),
            "uranus" | "uranus barycenter" => Ok(Body::UranusBarycenter),
            "neptune" | "neptune barycenter" => Ok(Body::NeptuneBarycenter),
            "pluto" | "pluto barycenter" => Ok(Body::PlutoBarycenter),
            "sun" => Ok(Body::Sun),
            "moon" => Ok(Body::Moon),
            "earth" => Ok(Body::Earth),
            _ => Err(OrreryError::UnknownBody(s.to_string())),
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::SolarSystemBarycenter => write!(f, "Solar System Barycenter"),
            Body::MercuryBarycenter => write!(f, "Mercury barycenter"),
            Body::VenusBarycenter => write!(f, "Venus barycenter"),
            Body::EarthMoonBarycenter => write!(f, "Earth-Moon barycenter"),
            Body::MarsBarycenter => write!(f, "Mars barycenter"),
            Body::JupiterBarycenter => write!(f, "Jupiter barycenter"),
            Body::SaturnBarycenter => write!(f, "Saturn barycenter"),
            Body::UranusBarycenter => write!(f, "Uranus barycenter"),
            Body::NeptuneBarycenter => write!(f, "Neptune barycenter"),
            Body::PlutoBarycenter => write!(f, "Pluto barycenter"),
            Body::Sun => write!(f, "Sun"),
            Body::Moon => write!(f, "Moon"),
            Body::Earth => write!(f, "Earth"),
        }
    }
}
