use std::collections::BTreeSet;

use super::super::questionnaire::{BigFiveProfile, MbtiProfile};
use super::kernels::{self, BIG_FIVE_DECAY, BIG_FIVE_TRAIT_CEILING, MBTI_PERCENT_DECAY};

/// MBTI similarity over the five dimensions, `max_points` total.
///
/// A dimension missing on either side contributes nothing, and a letter
/// mismatch is an absolute zero for that dimension: no partial credit
/// crosses categories. Matching letters decay on the percentage gap.
pub(crate) fn mbti_score(a: &MbtiProfile, b: &MbtiProfile, max_points: f64) -> f64 {
    let points_per_dimension = max_points / MbtiProfile::DIMENSION_COUNT as f64;

    a.dimensions()
        .iter()
        .zip(b.dimensions().iter())
        .map(|(dim_a, dim_b)| match (dim_a, dim_b) {
            (Some(a), Some(b)) if a.letter == b.letter => {
                let diff = (a.percentage as f64 - b.percentage as f64).abs();
                kernels::decay(points_per_dimension, MBTI_PERCENT_DECAY, diff)
            }
            _ => 0.0,
        })
        .sum()
}

/// Big Five similarity, `max_points` split evenly across the five trait
/// groups and, within a group, across the union of sub-trait keys
/// present on either side (missing values count as 0).
pub(crate) fn big_five_score(a: &BigFiveProfile, b: &BigFiveProfile, max_points: f64) -> f64 {
    let points_per_group = max_points / BigFiveProfile::GROUP_COUNT as f64;

    a.groups()
        .iter()
        .zip(b.groups().iter())
        .map(|(group_a, group_b)| match (group_a, group_b) {
            (Some(traits_a), Some(traits_b)) => {
                let keys: BTreeSet<&String> = traits_a.keys().chain(traits_b.keys()).collect();
                if keys.is_empty() {
                    return 0.0;
                }
                let points_per_trait = points_per_group / keys.len() as f64;
                keys.into_iter()
                    .map(|key| {
                        let value_a = traits_a.get(key).copied().unwrap_or(0) as f64;
                        let value_b = traits_b.get(key).copied().unwrap_or(0) as f64;
                        let normalized = (value_a - value_b).abs() / BIG_FIVE_TRAIT_CEILING;
                        kernels::decay(points_per_trait, BIG_FIVE_DECAY, normalized)
                    })
                    .sum()
            }
            _ => 0.0,
        })
        .sum()
}
