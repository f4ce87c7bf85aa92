//! # Generation Error Types
//!
//! Everything that can go wrong before a run starts. Generation itself is
//! pure arithmetic over validated inputs and cannot fail mid-run: either
//! the full set of grids is returned, or nothing is.

use thiserror::Error;

/// Hard ceiling on `width * height`, checked before any grid allocation.
///
/// 64M cells is ~64 MiB for the biome map alone; anything beyond that is
/// almost certainly a configuration typo rather than a real request.
pub const MAX_CELLS: u64 = 64 * 1024 * 1024;

/// Errors raised by configuration validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// Width or height of zero.
    #[error("invalid grid dimensions: {width}x{height} (both must be positive)")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// The grid would exceed the allocation guard.
    #[error("grid too large: {width}x{height} exceeds {max_cells} cells")]
    GridTooLarge {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// The configured ceiling ([`MAX_CELLS`]).
        max_cells: u64,
    },

    /// The octave descriptor list is empty.
    #[error("octave list is empty: at least one noise layer is required")]
    NoOctaves,

    /// A threshold or probability fell outside [0, 1].
    #[error("{name} must lie in [0, 1], got {value}")]
    UnitRange {
        /// Which parameter.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A parameter that must be strictly positive was not.
    #[error("{name} must be positive, got {value}")]
    NotPositive {
        /// Which parameter.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A parameter that must not be negative was.
    #[error("{name} must not be negative, got {value}")]
    Negative {
        /// Which parameter.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A kind count of zero where at least one kind is required.
    #[error("{name} must be at least 1")]
    NoKinds {
        /// Which parameter.
        name: &'static str,
    },
}
