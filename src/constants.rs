//! # Constants and type definitions for Orrery
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `orrery` library.
//!
//! ## Overview
//!
//! - Astronomical constants (AU, speed of light)
//! - Time-scale anchors (J2000 epoch in MJD and JD, JD ↔ MJD offset)
//! - Core type aliases used across the crate
//!
//! These definitions are used by the time conversion routines, the state query layer,
//! and the orbit sampler.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00 TT)
pub const T2000: f64 = 51544.5;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// Julian Date of the J2000.0 epoch
pub const JD2000: f64 = 2451545.0;

/// Speed of light in km/s
pub const VLIGHT: f64 = 2.99792458e5;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Modified Julian Date (days)
pub type MJD = f64;

/// Ephemeris time expressed in seconds past J2000 (TDB)
pub type EphemerisSeconds = f64;

/// Distance in kilometers
pub type Kilometer = f64;

/// Distance in astronomical units
pub type AstronomicalUnit = f64;
