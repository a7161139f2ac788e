//! Error type shared by every query component.
//!
//! The core performs no I/O, so the only failure class is invalid caller
//! input. "No data" outcomes (empty record sets, nothing within radius, no
//! nearest match) are empty results or `None`, never errors.

/// Invalid-input errors reported synchronously to the caller
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Radius is negative or NaN
    InvalidRadius(f64),
    /// Coordinate outside [-90,90] x [-180,180] or NaN
    InvalidCoordinate { latitude: f64, longitude: f64 },
    /// Jitter spread is negative or not finite
    InvalidJitterSpread(f64),
    /// Cursor jump past the end of the ordered list
    IndexOutOfRange { index: usize, len: usize },
    /// Configuration could not be parsed or failed validation
    InvalidConfig(String),
}

impl CoreError {
    /// Every variant is an invalid-input condition.
    pub fn is_invalid_input(&self) -> bool {
        true
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::InvalidRadius(r) => write!(f, "Invalid radius: {} km", r),
            CoreError::InvalidCoordinate { latitude, longitude } => {
                write!(f, "Invalid coordinate: ({}, {})", latitude, longitude)
            }
            CoreError::InvalidJitterSpread(s) => write!(f, "Invalid jitter spread: {} deg", s),
            CoreError::IndexOutOfRange { index, len } => {
                write!(f, "Index out of range: {} (len {})", index, len)
            }
            CoreError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for CoreError {}
