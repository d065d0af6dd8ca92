// errors.rs
use std::fmt;

use crate::domain::listing::AMENITY_TYPES;

/// Errors reported at the command boundary. All of these come from
/// user-supplied input; storage I/O problems are logged inside the
/// store and never surface here.
#[derive(Debug, PartialEq)]
pub enum CliError {
    InvalidOperator(String),
    InvalidNumber(String),
    InvalidAmenity(String),
    InvalidLocation(String),
    InvalidCount,
    UnknownIndex(u32),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidOperator(token) => {
                write!(f, "Invalid operator '{token}'. Use eq, lt, or gt")
            }
            CliError::InvalidNumber(token) => write!(f, "Invalid number value '{token}'"),
            CliError::InvalidAmenity(name) => write!(
                f,
                "Invalid amenity: {name}. Available options: {}",
                AMENITY_TYPES.join(", ")
            ),
            CliError::InvalidLocation(value) => write!(
                f,
                "Invalid location '{value}'. Use: latitude,longitude,radiusInKm"
            ),
            CliError::InvalidCount => write!(f, "Please provide a valid positive number"),
            CliError::UnknownIndex(index) => write!(f, "No property at index {index}"),
        }
    }
}

impl std::error::Error for CliError {}
