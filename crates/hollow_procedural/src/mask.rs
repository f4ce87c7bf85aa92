//! # Cave Mask Pass
//!
//! First pipeline stage: classify every cell as open or solid.
//!
//! Per cell, in canonical scan order, the pass:
//! 1. blends the primary octave layers into a value in [0, 1],
//! 2. adds the uniform jitter grain (one draw, always consumed),
//! 3. rolls for a density spot (one draw; two more for the candidate
//!    center on success) and boosts the value inside the spot,
//! 4. opens the cell if the value beats the threshold **or** the cell sat
//!    inside a density spot.
//!
//! The draw order above is fixed; reordering it silently reseeds every
//! cave in existence.

use hollow_core::Grid;

use crate::config::CaveConfig;
use crate::noise::SimplexNoise;
use crate::rng::CaveRng;

/// Builds the open/solid mask for a validated config.
///
/// `offset` is the primary field's world offset, already drawn from `rng`
/// by the driver.
pub(crate) fn build_cave_mask(
    config: &CaveConfig,
    noise: &SimplexNoise,
    offset: (f64, f64),
    rng: &mut CaveRng,
) -> Grid<bool> {
    let mut mask = Grid::filled(config.width, config.height, false);
    let jitter = config.noise_jitter;

    for x in 0..config.width {
        for y in 0..config.height {
            let mut value = noise.layered(
                f64::from(x) + offset.0,
                f64::from(y) + offset.1,
                config.noise_scale,
                &config.octaves,
            );

            // Grain draw is unconditional so the stream shape does not
            // depend on the jitter amplitude
            value += rng.next_unit() * jitter - jitter * 0.5;

            let mut in_dense_spot = false;
            if rng.next_unit() < config.density.probability {
                let center_x = rng.next_in_range(0, i64::from(config.width));
                let center_y = rng.next_in_range(0, i64::from(config.height));

                let dx = f64::from(x) - center_x as f64;
                let dy = f64::from(y) - center_y as f64;
                if (dx * dx + dy * dy).sqrt() < config.density.radius {
                    in_dense_spot = true;
                    value += config.density.strength;
                }
            }

            mask.set(x, y, value > config.threshold || in_dense_spot);
        }
    }

    mask
}
