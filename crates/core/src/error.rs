//! Error definitions for the input-validation surface.
//!
//! The engine itself never fails: every 32-bit address divides into a valid
//! frame number at every level, and slot scans are bounded by construction.
//! Errors only arise while validating what surrounds the engine — hex
//! address tokens and configuration files.

use thiserror::Error;

/// Failures the surrounding I/O layer can encounter.
#[derive(Debug, Error)]
pub enum Error {
    /// The input token is not a valid hexadecimal address of at most
    /// 8 digits. Fatal in batch mode, recoverable in interactive mode.
    #[error("memory address must be hex (at most 8 digits): {0:?}")]
    MalformedAddress(String),

    /// A configuration file could not be read.
    #[error("cannot read config file: {0}")]
    Config(#[from] std::io::Error),

    /// A configuration file was read but is not valid hierarchy JSON.
    #[error("malformed config: {0}")]
    ConfigFormat(String),
}
