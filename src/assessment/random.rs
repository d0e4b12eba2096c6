use rand::rngs::ThreadRng;
use rand::Rng;

/// Source of the two kinds of randomness the assessment needs: sampling
/// permutations and radar-chart jitter.
///
/// Production code uses [`RngSource::thread`]; tests substitute a
/// [`FixedSource`] to make results reproducible.
pub trait RandomSource {
    /// Uniform index in `0..upper`. Callers never pass zero.
    fn index(&mut self, upper: usize) -> usize;

    /// Uniform offset in `-spread..=spread`.
    fn jitter(&mut self, spread: f64) -> f64;

    /// Fisher-Yates shuffle driven by `index`.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<ThreadRng> {
    /// Unseeded thread-local generator.
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn index(&mut self, upper: usize) -> usize {
        self.0.random_range(0..upper)
    }

    fn jitter(&mut self, spread: f64) -> f64 {
        self.0.random_range(-spread..=spread)
    }
}

/// Deterministic source: never reorders and replays a fixed jitter sequence
/// (cycling, each value clamped to the requested spread). An empty sequence
/// always yields zero jitter.
#[derive(Debug, Clone, Default)]
pub struct FixedSource {
    jitters: Vec<f64>,
    next: usize,
}

impl FixedSource {
    pub fn new(jitters: impl Into<Vec<f64>>) -> Self {
        Self {
            jitters: jitters.into(),
            next: 0,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

impl RandomSource for FixedSource {
    fn index(&mut self, upper: usize) -> usize {
        // j == i in the shuffle, so every swap is a no-op
        upper.saturating_sub(1)
    }

    fn jitter(&mut self, spread: f64) -> f64 {
        if self.jitters.is_empty() {
            return 0.0;
        }
        let value = self.jitters[self.next % self.jitters.len()];
        self.next += 1;
        value.clamp(-spread, spread)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fixed_source_keeps_order() {
        let mut items = vec![1, 2, 3, 4, 5];
        FixedSource::zero().shuffle(&mut items);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_fixed_source_cycles_and_clamps() {
        let mut source = FixedSource::new([3.0, -10.0]);
        assert_eq!(source.jitter(7.0), 3.0);
        assert_eq!(source.jitter(7.0), -7.0);
        assert_eq!(source.jitter(7.0), 3.0);
    }

    #[test]
    fn test_rng_source_shuffle_is_permutation() {
        let mut source = RngSource::new(StdRng::seed_from_u64(42));
        let mut items: Vec<u32> = (0..50).collect();
        source.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_rng_source_jitter_within_spread() {
        let mut source = RngSource::new(StdRng::seed_from_u64(7));
        for _ in 0..1000 {
            let j = source.jitter(7.0);
            assert!((-7.0..=7.0).contains(&j));
        }
    }

    #[test]
    fn test_rng_source_index_within_bounds() {
        let mut source = RngSource::new(StdRng::seed_from_u64(1));
        for upper in 1..20 {
            assert!(source.index(upper) < upper);
        }
    }
}
