//! # Biome & Ore Assignment
//!
//! Second pipeline stage: give every open cell a biome index, the default
//! sentinel, or an ore deposit.
//!
//! The biome map is co-indexed with the cave mask and uses a sentinel
//! scheme rather than an enum so painters can index straight into their
//! tile lists:
//!
//! - [`BIOME_DEFAULT`] (`-1`): open cell with no specific biome (and the
//!   fixed value of every solid cell, where the entry has no meaning)
//! - [`BIOME_ORE`] (`-2`): ore deposit
//! - `>= 0`: index into the host's biome-kind list
//!
//! Draw order per open cell: the biome pick (one draw, only when the
//! biome noise beats the threshold), then the ore roll (one draw, always).
//! Ore wins over any biome pick. Solid cells consume no draws.

use hollow_core::Grid;

use crate::config::CaveConfig;
use crate::noise::SimplexNoise;
use crate::rng::CaveRng;

/// Open cell with no specific biome; also the value of every solid cell.
pub const BIOME_DEFAULT: i32 = -1;

/// Ore deposit. Always takes priority over a biome pick.
pub const BIOME_ORE: i32 = -2;

/// Fills the biome map for a validated config and a finished cave mask.
///
/// `offset` is the biome field's world offset, already drawn by the
/// driver. Only reads the cave mask; never mutates it.
pub(crate) fn assign_biomes(
    config: &CaveConfig,
    cave: &Grid<bool>,
    noise: &SimplexNoise,
    offset: (f64, f64),
    rng: &mut CaveRng,
) -> Grid<i32> {
    let mut biomes = Grid::filled(config.width, config.height, BIOME_DEFAULT);

    for x in 0..config.width {
        for y in 0..config.height {
            if cave.get(x, y) != Some(true) {
                continue;
            }

            let sample = noise.sample01(
                (f64::from(x) + offset.0) * config.biome_noise_scale,
                (f64::from(y) + offset.1) * config.biome_noise_scale,
            );

            let mut cell = if sample > config.biome_threshold {
                rng.next_in_range(0, i64::from(config.biome_kinds)) as i32
            } else {
                BIOME_DEFAULT
            };

            // Ore roll comes second and overrides the biome decision
            if rng.next_unit() < config.ore_probability {
                cell = BIOME_ORE;
            }

            biomes.set(x, y, cell);
        }
    }

    biomes
}
