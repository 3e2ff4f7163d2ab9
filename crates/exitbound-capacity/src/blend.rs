//! COHORT WEIGHT BLENDING
//!
//! Collapses a heterogeneous user population into the single per-user weight
//! the capacity bound consumes.

use serde::{Deserialize, Serialize};

/// One cohort's contribution to the blended weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightBucket {
    /// Per-user enforcement weight (weight units).
    pub weight: f64,
    /// Relative share of the population. Only meaningful against the other
    /// buckets' shares; the sum does not have to be 1.
    pub share: f64,
}

/// Share-weighted average of the bucket weights.
///
/// An empty list or a zero share-sum is a defined degenerate case and yields
/// 0 rather than dividing by zero.
pub fn blended_weight(buckets: &[WeightBucket]) -> f64 {
    if buckets.is_empty() {
        return 0.0;
    }
    let numerator: f64 = buckets.iter().map(|b| b.weight * b.share).sum();
    let denominator: f64 = buckets.iter().map(|b| b.share).sum();
    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blended_weight_averages_by_share() {
        let blended = blended_weight(&[
            WeightBucket { weight: 4_616.0, share: 0.5 },
            WeightBucket { weight: 2_360.0, share: 0.5 },
        ]);
        assert_eq!(blended, 3_488.0);
    }

    #[test]
    fn test_blended_weight_only_depends_on_relative_shares() {
        let normalized = blended_weight(&[
            WeightBucket { weight: 4_616.0, share: 0.5 },
            WeightBucket { weight: 2_360.0, share: 0.5 },
        ]);
        let scaled = blended_weight(&[
            WeightBucket { weight: 4_616.0, share: 2.0 },
            WeightBucket { weight: 2_360.0, share: 2.0 },
        ]);
        assert_eq!(normalized, scaled);
    }

    #[test]
    fn test_blended_weight_empty_is_zero() {
        assert_eq!(blended_weight(&[]), 0.0);
    }

    #[test]
    fn test_blended_weight_zero_share_sum_is_zero() {
        let buckets = [WeightBucket { weight: 4_616.0, share: 0.0 }];
        assert_eq!(blended_weight(&buckets), 0.0);
    }
}
