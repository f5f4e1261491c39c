use hifitime::Epoch;

use crate::constants::{EphemerisSeconds, JD2000, JDTOMJD, SECONDS_PER_DAY, MJD};

/// Transformation from modified Julian date (MJD) to ephemeris time,
/// expressed in seconds past the J2000 epoch.
///
/// This is the affine map `(mjd + 2400000.5 - 2451545.0) * 86400`: the MJD is
/// first anchored to the Julian date scale, offset to J2000, then scaled from
/// days to seconds. The function is pure and performs no calendar or
/// leap-second handling; inputs outside the sensible calendar range are not
/// validated.
///
/// Argument
/// --------
/// * `mjd`: a modified Julian date
///
/// Return
/// ------
/// * the same instant in ephemeris seconds past J2000
pub fn mjd_to_et_seconds(mjd: MJD) -> EphemerisSeconds {
    (mjd + JDTOMJD - JD2000) * SECONDS_PER_DAY
}

/// Inverse of [`mjd_to_et_seconds`].
///
/// Argument
/// --------
/// * `et_seconds`: ephemeris time in seconds past J2000
///
/// Return
/// ------
/// * the same instant as a modified Julian date
pub fn et_seconds_to_mjd(et_seconds: EphemerisSeconds) -> MJD {
    et_seconds / SECONDS_PER_DAY - JDTOMJD + JD2000
}

/// Build the [`hifitime::Epoch`] the ephemeris engine consumes from a
/// modified Julian date.
pub fn mjd_to_epoch(mjd: MJD) -> Epoch {
    Epoch::from_et_seconds(mjd_to_et_seconds(mjd))
}
