use thiserror::Error;

use anise::ephemerides::EphemerisError;
use anise::errors::AlmanacError;

use crate::bodies::Body;
use crate::constants::EphemerisSeconds;

#[derive(Debug, Error)]
pub enum OrreryError {
    #[error("SPK kernel not found at: {0}")]
    KernelNotFound(String),

    #[error("Failed to load SPK kernel {path}: {source}")]
    KernelLoad {
        path: String,
        #[source]
        source: AlmanacError,
    },

    #[error("Ephemeris query failed for {body} at {et_seconds} s past J2000: {source}")]
    EphemerisQuery {
        body: Body,
        et_seconds: EphemerisSeconds,
        #[source]
        source: EphemerisError,
    },

    #[error("Unknown body name: {0}")]
    UnknownBody(String),

    #[error("Unknown NAIF body ID: {0}")]
    UnknownBodyId(i32),

    #[error("Unknown reference frame: {0}")]
    UnknownFrame(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[cfg(feature = "jpl-download")]
    #[error("HTTP reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[cfg(feature = "jpl-download")]
    #[error("Base dir creation error for SPK kernel cache: {0}")]
    UnableToCreateBaseDir(String),
}

impl PartialEq for OrreryError {
    fn eq(&self, other: &Self) -> bool {
        use OrreryError::*;
        match (self, other) {
            (KernelNotFound(a), KernelNotFound(b)) => a == b,
            (KernelLoad { path: a, .. }, KernelLoad { path: b, .. }) => a == b,
            (
                EphemerisQuery {
                    body: b1,
                    et_seconds: t1,
                    ..
                },
                EphemerisQuery {
                    body: b2,
                    et_seconds: t2,
                    ..
                },
            ) => b1 == b2 && t1 == t2,
            (UnknownBody(a), UnknownBody(b)) => a == b,
            (UnknownBodyId(a), UnknownBodyId(b)) => a == b,
            (UnknownFrame(a), UnknownFrame(b)) => a == b,

            // Wrapped errors are not comparable: equality on the variant only
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,
            #[cfg(feature = "jpl-download")]
            (ReqwestError(_), ReqwestError(_)) => true,
            #[cfg(feature = "jpl-download")]
            (UnableToCreateBaseDir(a), UnableToCreateBaseDir(b)) => a == b,

            _ => false,
        }
    }
}
