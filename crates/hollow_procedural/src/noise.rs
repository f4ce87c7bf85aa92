//! # Simplex Noise
//!
//! Deterministic coherent 2D noise plus weighted octave layering.
//!
//! ## Why hand-rolled?
//!
//! Cave layouts must be reproducible from a seed for debugging, so the
//! noise function is part of the determinism contract. This implementation
//! produces **exactly** the same values for the same [`CaveSeed`] on any
//! platform, any time.

/// Seed for one generation run.
///
/// All stochastic decisions in a run derive from this value: the shared
/// draw stream, and per-purpose sub-seeds for the noise permutation
/// tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CaveSeed(i64);

impl CaveSeed {
    /// Creates a new seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Raw seed bits, for feeding integer-seeded machinery.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0 as u64
    }

    /// Derives an independent sub-seed for a specific purpose.
    ///
    /// splitmix-style mixing; the same `(seed, purpose)` pair always
    /// yields the same sub-seed.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        let mut z = (self.0 as u64).wrapping_add(purpose.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        Self((z ^ (z >> 31)) as i64)
    }
}

/// One octave in a layered noise blend.
///
/// `scale_multiplier` scales the sampling frequency relative to the base
/// noise scale; `weight` scales the layer's contribution. Weights need not
/// sum to 1 - the blend is normalized by the layer count.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OctaveLayer {
    /// Frequency multiplier applied on top of the base noise scale.
    pub scale_multiplier: f64,
    /// Contribution weight of this layer.
    pub weight: f64,
}

impl OctaveLayer {
    /// Creates a layer.
    #[inline]
    #[must_use]
    pub const fn new(scale_multiplier: f64, weight: f64) -> Self {
        Self {
            scale_multiplier,
            weight,
        }
    }
}

/// Pre-computed permutation table, built once per seed.
struct PermutationTable {
    /// 512-entry permutation table (256 entries, doubled to skip wrapping).
    perm: [u8; 512],
    /// Gradient table (12 gradients for 2D simplex).
    grad: [[i8; 2]; 12],
}

impl PermutationTable {
    fn new(seed: CaveSeed) -> Self {
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().take(256).enumerate() {
            *slot = i as u8;
        }

        // Fisher-Yates shuffle driven by xorshift64. The zero state is a
        // fixpoint of xorshift, so seed bits of 0 get remapped.
        let mut state = seed.bits();
        if state == 0 {
            state = 0x5EED_BA5E_0FCA_4E17;
        }
        for i in (1..256).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;

            let j = (state as usize) % (i + 1);
            perm.swap(i, j);
        }

        let (first, second) = perm.split_at_mut(256);
        second.copy_from_slice(first);

        let grad = [
            [1, 0],
            [1, 1],
            [0, 1],
            [-1, 1],
            [-1, 0],
            [-1, -1],
            [0, -1],
            [1, -1],
            [1, 0],
            [0, 1],
            [-1, 0],
            [0, -1],
        ];

        Self { perm, grad }
    }

    #[inline]
    fn get(&self, index: usize) -> u8 {
        self.perm[index & 511]
    }

    #[inline]
    fn gradient(&self, hash: u8) -> [i8; 2] {
        self.grad[(hash % 12) as usize]
    }
}

/// 2D simplex noise generator.
///
/// [`sample`](Self::sample) is continuous, O(1) per call, allocation-free,
/// and a pure function of `(seed, x, y)`.
pub struct SimplexNoise {
    perm_table: PermutationTable,
}

impl SimplexNoise {
    /// Skewing factor for the 2D simplex grid: `(sqrt(3) - 1) / 2`.
    const F2: f64 = 0.366_025_403_784_439;
    /// Unskewing factor for the 2D simplex grid: `(3 - sqrt(3)) / 6`.
    const G2: f64 = 0.211_324_865_405_187;

    /// Creates a noise generator from a seed.
    #[must_use]
    pub fn new(seed: CaveSeed) -> Self {
        Self {
            perm_table: PermutationTable::new(seed),
        }
    }

    /// Samples noise at `(x, y)`.
    ///
    /// # Returns
    ///
    /// A value in the range [-1, 1].
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Skew input coordinates onto the simplex grid
        let skew = (x + y) * Self::F2;
        let i = fast_floor(x + skew);
        let j = fast_floor(y + skew);

        // Unskew to get the first simplex corner
        let unskew = f64::from(i + j) * Self::G2;
        let x0 = x - (f64::from(i) - unskew);
        let y0 = y - (f64::from(j) - unskew);

        // Upper or lower triangle of the simplex cell
        let (i1, j1): (u32, u32) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - f64::from(i1) + Self::G2;
        let y1 = y0 - f64::from(j1) + Self::G2;
        let x2 = x0 - 1.0 + 2.0 * Self::G2;
        let y2 = y0 - 1.0 + 2.0 * Self::G2;

        // Hash corner coordinates into gradient indices
        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;

        let gi0 = self.perm_table.get(ii + self.perm_table.get(jj) as usize);
        let gi1 = self
            .perm_table
            .get(ii + i1 as usize + self.perm_table.get(jj + j1 as usize) as usize);
        let gi2 = self.perm_table.get(ii + 1 + self.perm_table.get(jj + 1) as usize);

        let n0 = self.contribution(x0, y0, gi0);
        let n1 = self.contribution(x1, y1, gi1);
        let n2 = self.contribution(x2, y2, gi2);

        // 70.0 scales the corner sum into [-1, 1]
        70.0 * (n0 + n1 + n2)
    }

    /// Samples noise mapped into [0, 1].
    ///
    /// Cave thresholds and biome thresholds are specified against this
    /// range.
    #[inline]
    #[must_use]
    pub fn sample01(&self, x: f64, y: f64) -> f64 {
        ((self.sample(x, y) + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Contribution from one corner of the simplex.
    #[inline]
    fn contribution(&self, x: f64, y: f64, gradient_index: u8) -> f64 {
        let t = 0.5 - x * x - y * y;
        if t < 0.0 {
            0.0
        } else {
            let grad = self.perm_table.gradient(gradient_index);
            let t2 = t * t;
            t2 * t2 * (x * f64::from(grad[0]) + y * f64::from(grad[1]))
        }
    }

    /// Blends weighted octave layers into one value in [0, 1].
    ///
    /// Computes `sum(weight_i * sample01(x * s_i, y * s_i))` with
    /// `s_i = base_scale * scale_multiplier_i`, then divides by the layer
    /// **count** (not the weight sum) and clamps to [0, 1]. Offsets, if
    /// any, are the caller's business - fold them into `x`/`y` first.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `layers` is non-empty; validated configs
    /// guarantee it.
    #[must_use]
    pub fn layered(&self, x: f64, y: f64, base_scale: f64, layers: &[OctaveLayer]) -> f64 {
        debug_assert!(!layers.is_empty(), "octave list must be validated non-empty");

        let mut total = 0.0;
        for layer in layers {
            let s = base_scale * layer.scale_multiplier;
            total += self.sample01(x * s, y * s) * layer.weight;
        }

        (total / layers.len() as f64).clamp(0.0, 1.0)
    }
}

/// Fast floor, avoiding the `f64::floor` call in the hot path.
#[inline]
fn fast_floor(x: f64) -> i32 {
    let xi = x as i32;
    if x < f64::from(xi) {
        xi - 1
    } else {
        xi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let seed = CaveSeed::new(12345);
        let noise1 = SimplexNoise::new(seed);
        let noise2 = SimplexNoise::new(seed);

        for i in 0..100 {
            let x = f64::from(i) * 0.1;
            let y = f64::from(i) * 0.17;
            assert_eq!(
                noise1.sample(x, y),
                noise2.sample(x, y),
                "noise must be deterministic"
            );
        }
    }

    #[test]
    fn test_different_seeds_different_results() {
        let noise1 = SimplexNoise::new(CaveSeed::new(1));
        let noise2 = SimplexNoise::new(CaveSeed::new(2));

        assert_ne!(noise1.sample(100.0, 100.0), noise2.sample(100.0, 100.0));
    }

    #[test]
    fn test_sample01_range() {
        let noise = SimplexNoise::new(CaveSeed::new(42));

        for i in 0..10_000 {
            let x = (f64::from(i) * 0.1) - 500.0;
            let y = (f64::from(i) * 0.13) - 650.0;
            let value = noise.sample01(x, y);

            assert!(
                (0.0..=1.0).contains(&value),
                "value {value} out of range at ({x}, {y})"
            );
        }
    }

    #[test]
    fn test_continuity() {
        let noise = SimplexNoise::new(CaveSeed::new(42));

        let x = 100.0;
        let y = 100.0;
        let delta = 0.001;

        let v1 = noise.sample(x, y);
        let v2 = noise.sample(x + delta, y);
        let v3 = noise.sample(x, y + delta);

        assert!((v1 - v2).abs() < 0.01, "noise must be continuous in x");
        assert!((v1 - v3).abs() < 0.01, "noise must be continuous in y");
    }

    #[test]
    fn test_negative_seed_works() {
        let noise = SimplexNoise::new(CaveSeed::new(-42));
        let value = noise.sample01(10.0, 20.0);
        assert!((0.0..=1.0).contains(&value));
    }

    #[test]
    fn test_layered_range_and_normalization() {
        let noise = SimplexNoise::new(CaveSeed::new(42));
        let layers = [
            OctaveLayer::new(1.0, 1.5),
            OctaveLayer::new(2.0, 0.9),
            OctaveLayer::new(0.5, 0.6),
        ];

        for i in 0..1000 {
            let value = noise.layered(f64::from(i) * 0.7, f64::from(i) * 0.3, 0.1, &layers);
            assert!((0.0..=1.0).contains(&value), "layered value {value} out of range");
        }
    }

    #[test]
    fn test_layered_single_octave_matches_sample01() {
        let noise = SimplexNoise::new(CaveSeed::new(7));
        let layers = [OctaveLayer::new(1.0, 1.0)];

        let direct = noise.sample01(3.0 * 0.1, 4.0 * 0.1);
        let blended = noise.layered(3.0, 4.0, 0.1, &layers);
        assert!((direct - blended).abs() < 1e-12);
    }

    #[test]
    fn test_seed_derivation() {
        let base = CaveSeed::new(42);
        let derived1 = base.derive(1);
        let derived2 = base.derive(2);

        assert_ne!(derived1, derived2, "purposes must give independent seeds");
        assert_eq!(derived1, base.derive(1), "derivation must be stable");
        assert_ne!(derived1, base, "derived seed must differ from base");
    }

    #[test]
    fn test_zero_seed_not_degenerate() {
        let noise = SimplexNoise::new(CaveSeed::new(0));

        // A stuck permutation shuffle would show up as near-constant output
        let a = noise.sample(1.3, 8.9);
        let b = noise.sample(55.1, 2.2);
        let c = noise.sample(-14.0, 31.7);
        assert!(a != b || b != c, "zero seed must still shuffle the table");
    }
}
