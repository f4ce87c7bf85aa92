//! # Generation Driver
//!
//! Runs the pipeline in fixed order and hands back an immutable snapshot:
//!
//! 1. resolve the seed (verbatim, or fresh from the process RNG)
//! 2. draw the primary offset pair, then the biome offset pair (4 draws)
//! 3. cave mask pass (noise + jitter + density spots, scan order)
//! 4. biome/ore pass (scan order, open cells only)
//! 5. outline pass (no draws)
//!
//! Every stage reads earlier outputs and owns the grid it produces; no
//! stage mutates another stage's grid. The whole run is a pure function
//! of `(seed, config)`.

use hollow_core::Grid;
use rand::Rng;

use crate::biome::assign_biomes;
use crate::config::CaveConfig;
use crate::error::GenerationError;
use crate::mask::build_cave_mask;
use crate::noise::{CaveSeed, SimplexNoise};
use crate::outline::trace_outline;
use crate::rng::CaveRng;

/// Sub-seed purpose for the primary (cave) noise field.
const PRIMARY_NOISE: u64 = 1;
/// Sub-seed purpose for the biome noise field.
const BIOME_NOISE: u64 = 2;

/// World offsets are drawn from this half-open range, per axis.
const OFFSET_RANGE: (i64, i64) = (-100_000, 100_000);

/// How the driver obtains the seed for a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedMode {
    /// Use the given seed verbatim.
    Fixed(i64),
    /// Draw a fresh seed from the process RNG. The resolved value is
    /// returned with the output so the run can be reproduced.
    Random,
}

/// Resolves a seed mode to a concrete seed.
pub(crate) fn resolve_seed(mode: SeedMode) -> CaveSeed {
    match mode {
        SeedMode::Fixed(value) => CaveSeed::new(value),
        SeedMode::Random => CaveSeed::new(rand::thread_rng().gen()),
    }
}

/// An immutable generated cave: the three co-indexed grids plus the seed
/// that produced them.
///
/// All grids are fully populated before the value is handed out and are
/// never mutated afterwards. Re-running [`CaveGenerator::generate`] with
/// the same fixed seed reproduces this value bit-for-bit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaveWorld {
    seed: CaveSeed,
    cave: Grid<bool>,
    biomes: Grid<i32>,
    outline: Grid<bool>,
}

impl CaveWorld {
    /// The seed this world was generated from (resolved, if random mode
    /// was requested). Log it to reproduce the run.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> CaveSeed {
        self.seed
    }

    /// Open/solid mask. `true` = open/passable.
    #[inline]
    #[must_use]
    pub const fn cave_mask(&self) -> &Grid<bool> {
        &self.cave
    }

    /// Biome map, co-indexed with the cave mask. See [`crate::biome`] for
    /// the sentinel scheme.
    #[inline]
    #[must_use]
    pub const fn biome_map(&self) -> &Grid<i32> {
        &self.biomes
    }

    /// Outline mask: open cells bordering solid rock or the map edge.
    #[inline]
    #[must_use]
    pub const fn outline_mask(&self) -> &Grid<bool> {
        &self.outline
    }
}

/// The generation driver.
///
/// Holds a validated config; each [`generate`](Self::generate) call is an
/// independent run producing an independent [`CaveWorld`].
///
/// # Example
///
/// ```rust,ignore
/// let generator = CaveGenerator::new(CaveConfig::default())?;
/// let world = generator.generate(SeedMode::Fixed(42));
/// assert_eq!(world, generator.generate(SeedMode::Fixed(42)));
/// ```
pub struct CaveGenerator {
    config: CaveConfig,
}

impl CaveGenerator {
    /// Validates the config and builds a driver.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] describing the first violated
    /// constraint; nothing is allocated in that case.
    pub fn new(config: CaveConfig) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &CaveConfig {
        &self.config
    }

    /// Generates a cave.
    ///
    /// Cannot fail: the config was validated at construction and the run
    /// is pure arithmetic from there.
    #[must_use]
    pub fn generate(&self, mode: SeedMode) -> CaveWorld {
        let seed = resolve_seed(mode);
        tracing::info!(
            "generating cave: seed={} size={}x{}",
            seed.value(),
            self.config.width,
            self.config.height
        );

        let mut rng = CaveRng::new(seed);

        // Offset pairs come first, in this order; everything after reads
        // the stream in scan order
        let primary_offset = (
            rng.next_in_range(OFFSET_RANGE.0, OFFSET_RANGE.1) as f64,
            rng.next_in_range(OFFSET_RANGE.0, OFFSET_RANGE.1) as f64,
        );
        let biome_offset = (
            rng.next_in_range(OFFSET_RANGE.0, OFFSET_RANGE.1) as f64,
            rng.next_in_range(OFFSET_RANGE.0, OFFSET_RANGE.1) as f64,
        );

        let primary_noise = SimplexNoise::new(seed.derive(PRIMARY_NOISE));
        let biome_noise = SimplexNoise::new(seed.derive(BIOME_NOISE));

        let cave = build_cave_mask(&self.config, &primary_noise, primary_offset, &mut rng);
        let biomes = assign_biomes(&self.config, &cave, &biome_noise, biome_offset, &mut rng);
        let outline = trace_outline(&cave);

        tracing::debug!(
            "cave ready: {} open / {} outlined of {} cells",
            cave.count(|open| open),
            outline.count(|edge| edge),
            u64::from(self.config.width) * u64::from(self.config.height)
        );

        CaveWorld {
            seed,
            cave,
            biomes,
            outline,
        }
    }
}
