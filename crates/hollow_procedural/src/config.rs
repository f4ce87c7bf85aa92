//! # Generation Configuration
//!
//! Immutable parameter bundles for the cave pipeline and the bordered
//! region mode. All structs are serde types so hosts can load them from
//! TOML (or anywhere else); the core mandates no file format.
//!
//! Validation happens once, up front, before any grid is allocated.

use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, MAX_CELLS};
use crate::noise::OctaveLayer;

/// Parameters for the density-spot injector.
///
/// Each cell independently rolls `probability`; on success a candidate
/// center is drawn uniformly over the whole grid, and the cell is boosted
/// by `strength` if it lies within `radius` of that center. Centers are
/// drawn per successful roll, not per run, so "spots" are scattered
/// likelihood fields rather than perfect circles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensitySpotConfig {
    /// Per-cell chance of rolling a candidate spot, in [0, 1].
    pub probability: f64,
    /// Spot radius in cells, strictly positive.
    pub radius: f64,
    /// Additive noise boost inside a spot, non-negative.
    pub strength: f64,
}

impl Default for DensitySpotConfig {
    fn default() -> Self {
        Self {
            probability: 0.1,
            radius: 15.0,
            strength: 0.6,
        }
    }
}

/// Full parameter set for one cave generation run.
///
/// `Default` reproduces the reference tuning: three octaves at relative
/// frequencies 1x/2x/0.5x, a 0.5 open threshold, sparse dense spots, and
/// a 5% ore chance on open cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveConfig {
    /// Grid width in cells, positive.
    pub width: u32,
    /// Grid height in cells, positive.
    pub height: u32,
    /// Base sampling scale for the primary noise field, strictly positive.
    pub noise_scale: f64,
    /// Ordered octave descriptors for the primary field, non-empty.
    pub octaves: Vec<OctaveLayer>,
    /// Open threshold in [0, 1]: cells with blended noise above it are open.
    pub threshold: f64,
    /// Amplitude of the per-cell uniform grain added to the blended noise,
    /// non-negative. 0 disables the effect (the draw is still consumed, so
    /// the stream does not depend on this value).
    pub noise_jitter: f64,
    /// Density-spot injection parameters.
    pub density: DensitySpotConfig,
    /// Sampling scale for the biome noise field, strictly positive.
    pub biome_noise_scale: f64,
    /// Biome threshold in [0, 1]: open cells sampling above it get a biome.
    pub biome_threshold: f64,
    /// Number of biome kinds to pick from, at least 1.
    pub biome_kinds: u32,
    /// Per-open-cell ore chance in [0, 1]. Ore overrides any biome pick.
    pub ore_probability: f64,
    /// Number of ore kinds, at least 1. The variant shown for an ore cell
    /// is chosen by the painter at paint time, not during generation.
    pub ore_kinds: u32,
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            noise_scale: 0.1,
            // Weights sum to the layer count, so the count-normalized
            // blend keeps the classic 0.5/0.3/0.2 mix centered around 0.5
            octaves: vec![
                OctaveLayer::new(1.0, 1.5),
                OctaveLayer::new(2.0, 0.9),
                OctaveLayer::new(0.5, 0.6),
            ],
            threshold: 0.5,
            noise_jitter: 0.1,
            density: DensitySpotConfig::default(),
            biome_noise_scale: 0.05,
            biome_threshold: 0.7,
            biome_kinds: 3,
            ore_probability: 0.05,
            ore_kinds: 2,
        }
    }
}

/// Checks that `width x height` is a usable grid size.
fn validate_dimensions(width: u32, height: u32) -> Result<(), GenerationError> {
    if width == 0 || height == 0 {
        return Err(GenerationError::InvalidDimensions { width, height });
    }
    if u64::from(width) * u64::from(height) > MAX_CELLS {
        return Err(GenerationError::GridTooLarge {
            width,
            height,
            max_cells: MAX_CELLS,
        });
    }
    Ok(())
}

fn validate_unit(name: &'static str, value: f64) -> Result<(), GenerationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GenerationError::UnitRange { name, value })
    }
}

fn validate_positive(name: &'static str, value: f64) -> Result<(), GenerationError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(GenerationError::NotPositive { name, value })
    }
}

fn validate_non_negative(name: &'static str, value: f64) -> Result<(), GenerationError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(GenerationError::Negative { name, value })
    }
}

impl CaveConfig {
    /// Validates every parameter.
    ///
    /// Called by [`crate::generator::CaveGenerator::new`]; runs before any
    /// grid allocation so an invalid config never produces partial output.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint, in field order.
    pub fn validate(&self) -> Result<(), GenerationError> {
        validate_dimensions(self.width, self.height)?;
        if self.octaves.is_empty() {
            return Err(GenerationError::NoOctaves);
        }
        validate_positive("noise_scale", self.noise_scale)?;
        validate_unit("threshold", self.threshold)?;
        validate_non_negative("noise_jitter", self.noise_jitter)?;
        validate_unit("density.probability", self.density.probability)?;
        validate_positive("density.radius", self.density.radius)?;
        validate_non_negative("density.strength", self.density.strength)?;
        validate_positive("biome_noise_scale", self.biome_noise_scale)?;
        validate_unit("biome_threshold", self.biome_threshold)?;
        if self.biome_kinds == 0 {
            return Err(GenerationError::NoKinds {
                name: "biome_kinds",
            });
        }
        validate_unit("ore_probability", self.ore_probability)?;
        if self.ore_kinds == 0 {
            return Err(GenerationError::NoKinds { name: "ore_kinds" });
        }
        Ok(())
    }
}

/// Parameters for the bordered-region sibling mode.
///
/// Same octave-noise-and-threshold machinery as the cave pipeline, but
/// restricted to a band of `border_width` cells around a rectangle's edge.
/// The threshold is interpolated by normalized distance to the nearest
/// side: `threshold_center` applies at distance 0 (the rectangle's edge,
/// the dense side of the band) and `threshold_edge` at the band's inner
/// limit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderConfig {
    /// Rectangle width in cells, positive.
    pub width: u32,
    /// Rectangle height in cells, positive.
    pub height: u32,
    /// Width of the noisy band along the edge, at least 1.
    pub border_width: u32,
    /// Threshold at the rectangle's edge (distance 0), in [0, 1].
    pub threshold_center: f64,
    /// Threshold at the band's inner limit, in [0, 1].
    pub threshold_edge: f64,
    /// Number of noise layers to combine, at least 1.
    pub layer_count: u32,
    /// Base strength of the noise layers; layer `i` contributes at
    /// `layer_strength * (i + 1)`. Non-negative.
    pub layer_strength: f64,
    /// Sampling scale for the noise, strictly positive.
    pub noise_scale: f64,
    /// World-space offset of the rectangle's lower-left corner, folded
    /// into the noise coordinates so adjacent boxes do not repeat.
    pub origin: (i64, i64),
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
            border_width: 1,
            threshold_center: 0.2,
            threshold_edge: 0.8,
            layer_count: 3,
            layer_strength: 0.5,
            noise_scale: 0.1,
            origin: (0, 0),
        }
    }
}

impl BorderConfig {
    /// Validates every parameter. Same contract as [`CaveConfig::validate`].
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint, in field order.
    pub fn validate(&self) -> Result<(), GenerationError> {
        validate_dimensions(self.width, self.height)?;
        if self.border_width == 0 {
            return Err(GenerationError::NotPositive {
                name: "border_width",
                value: 0.0,
            });
        }
        validate_unit("threshold_center", self.threshold_center)?;
        validate_unit("threshold_edge", self.threshold_edge)?;
        if self.layer_count == 0 {
            return Err(GenerationError::NoOctaves);
        }
        validate_non_negative("layer_strength", self.layer_strength)?;
        validate_positive("noise_scale", self.noise_scale)?;
        Ok(())
    }
}
