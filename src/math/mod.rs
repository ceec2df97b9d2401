//! Miscellaneous math functions for general use

/// Free functions for handling and converting between
/// different representations of angles.
pub mod angular;

/// Polynomial evaluation for the Redfearn series
pub mod series;
pub use series::horner;
