//! # HOLLOW Procedural Generation
//!
//! Deterministic 2D cave layout generation.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: same seed + same config = same cave, always
//! 2. **Pure**: no I/O, no globals; a run returns a snapshot or an error
//! 3. **Ordered**: random draws happen in documented scan order - the
//!    order is part of the public contract
//!
//! ## Pipeline
//!
//! - `SimplexNoise` + weighted octave layers: the terrain texture
//! - `mask`: density spots + thresholding into the open/solid cave mask
//! - `biome`: biome indices and ore deposits for open cells
//! - `outline`: open cells bordering solid rock or the map edge
//! - `CaveGenerator`: the driver tying the stages together
//! - `BorderRegionGenerator`: the bordered-rectangle sibling mode
//!
//! ## Example
//!
//! ```rust,ignore
//! use hollow_procedural::{CaveConfig, CaveGenerator, SeedMode};
//!
//! let generator = CaveGenerator::new(CaveConfig::default())?;
//! let world = generator.generate(SeedMode::Fixed(42));
//!
//! // Same seed, same cave - bit for bit
//! assert_eq!(world, generator.generate(SeedMode::Fixed(42)));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod biome;
pub mod border;
pub mod config;
pub mod error;
pub mod generator;
mod mask;
pub mod noise;
mod outline;
pub mod paint;
pub mod rng;

pub use biome::{BIOME_DEFAULT, BIOME_ORE};
pub use border::{BorderRegion, BorderRegionGenerator};
pub use config::{BorderConfig, CaveConfig, DensitySpotConfig};
pub use error::{GenerationError, MAX_CELLS};
pub use generator::{CaveGenerator, CaveWorld, SeedMode};
pub use noise::{CaveSeed, OctaveLayer, SimplexNoise};
pub use paint::{CellKind, GridPainter};
pub use rng::CaveRng;
