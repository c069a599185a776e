//! Monte Carlo mean-vs-median bootstrap significance test (§4.7).

/// Number of bootstrap draws per candidate. Fixed by the reference implementation.
pub const SAMPLING_ITERATIONS: u32 = 100_000;

/// Sentinel emitted for envelope-unfit candidates (no valid exonic-exonic pair).
pub const SENTINEL: f64 = -1.0;

/// Lower median after descending sort: for even `values.len()` this is
/// deliberately the lower of the two middle elements (§9); preserved
/// exactly for reproducibility with the reference implementation.
pub fn median_descending(values: &[i64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted[sorted.len() / 2] as f64
}

pub fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return SENTINEL;
    }
    values.iter().sum::<i64>() as f64 / values.len() as f64
}

/// One-sided bootstrap p-value: how often does a random sample of
/// `|candidates|` draws from `population` (with replacement) have a mean
/// at or above the candidates' median? `p = 1 - k / SAMPLING_ITERATIONS`.
///
/// Returns [`SENTINEL`] if either input is empty.
pub fn score(rng: &mut fastrand::Rng, population: &[i64], candidates: &[i64]) -> f64 {
    if population.is_empty() || candidates.is_empty() {
        return SENTINEL;
    }
    let median_inter = median_descending(candidates);
    let mut k = 0u32;
    for _ in 0..SAMPLING_ITERATIONS {
        let sum: i64 = (0..candidates.len())
            .map(|_| population[rng.usize(0..population.len())])
            .sum();
        let mean_sample = sum as f64 / candidates.len() as f64;
        if median_inter > mean_sample {
            k += 1;
        }
    }
    1.0 - f64::from(k) / f64::from(SAMPLING_ITERATIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_descending_picks_lower_middle_on_even_length() {
        // Descending sort of [1,2,3,4] -> [4,3,2,1], index len/2=2 -> 2.0.
        assert_eq!(median_descending(&[1, 2, 3, 4]), 2.0);
    }

    #[test]
    fn median_descending_on_odd_length() {
        assert_eq!(median_descending(&[1, 2, 3]), 2.0);
    }

    #[test]
    fn mean_of_empty_is_sentinel() {
        assert_eq!(mean(&[]), SENTINEL);
    }

    #[test]
    fn score_is_sentinel_when_population_empty() {
        let mut rng = fastrand::Rng::with_seed(1);
        assert_eq!(score(&mut rng, &[], &[1, 2, 3]), SENTINEL);
    }

    #[test]
    fn score_is_bounded_and_deterministic_given_a_seed() {
        let population: Vec<i64> = (1..=100).collect();
        let candidates = vec![90, 95, 99];
        let mut rng1 = fastrand::Rng::with_seed(42);
        let mut rng2 = fastrand::Rng::with_seed(42);
        let p1 = score(&mut rng1, &population, &candidates);
        let p2 = score(&mut rng2, &population, &candidates);
        assert_eq!(p1, p2);
        assert!((0.0..=1.0).contains(&p1));
    }

    #[test]
    fn score_is_near_zero_when_candidates_far_exceed_population() {
        let population: Vec<i64> = (1..=10).collect();
        let candidates = vec![1000, 1000, 1000];
        let mut rng = fastrand::Rng::with_seed(7);
        let p = score(&mut rng, &population, &candidates);
        assert!(p < 0.01);
    }
}
