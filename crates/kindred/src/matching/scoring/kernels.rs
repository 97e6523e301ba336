//! Similarity kernels shared by the section scorers.
//!
//! The decay constants are tuned product behavior, not arbitrary
//! knobs; changing one changes every score in the system. Each kernel
//! is symmetric in its two operands and returns 0 for absent or
//! malformed input.

use super::super::questionnaire::Distribution;

/// MBTI percentage decay: ~14 points of difference halves the credit.
pub const MBTI_PERCENT_DECAY: f64 = 0.05;
/// Big Five trait decay, applied to the difference normalized by the
/// trait ceiling.
pub const BIG_FIVE_DECAY: f64 = 2.5;
/// Upper bound of a Big Five sub-trait value.
pub const BIG_FIVE_TRAIT_CEILING: f64 = 20.0;
/// Nightly sleep-hours decay.
pub const SLEEP_HOURS_DECAY: f64 = 0.3;
/// Weekly screen-hours decay.
pub const SCREEN_HOURS_DECAY: f64 = 0.02;
/// Per-key decay for percentage distributions.
pub const DISTRIBUTION_DECAY: f64 = 0.03;
/// Lucky-number decay; a difference of 2000 leaves e^-1 of the credit.
pub const LUCKY_NUMBER_DECAY: f64 = 0.0005;

/// Hue dominates perceptual color distance; saturation and lightness
/// split the rest.
pub const COLOR_HUE_WEIGHT: f64 = 0.6;
pub const COLOR_SATURATION_WEIGHT: f64 = 0.2;
pub const COLOR_LIGHTNESS_WEIGHT: f64 = 0.2;

/// Exponential-decay credit: full `max_points` at zero difference.
pub(crate) fn decay(max_points: f64, k: f64, diff: f64) -> f64 {
    max_points * (-k * diff).exp()
}

/// Full credit only when both answers exist and agree.
pub(crate) fn exact_match<T: PartialEq>(a: Option<T>, b: Option<T>, points: f64) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) if a == b => points,
        _ => 0.0,
    }
}

/// Compare two percentage distributions over the union of their keys.
///
/// Each key carries an equal share of `max_points`; a value missing on
/// one side counts as 0 there. Values are relative weights: nothing
/// enforces that either side sums to 100.
pub(crate) fn distribution_similarity(a: &Distribution, b: &Distribution, max_points: f64) -> f64 {
    let keys: std::collections::BTreeSet<&String> = a.keys().chain(b.keys()).collect();
    if keys.is_empty() {
        return 0.0;
    }

    let points_per_key = max_points / keys.len() as f64;
    keys.into_iter()
        .map(|key| {
            let value_a = a.get(key).copied().unwrap_or(0) as f64;
            let value_b = b.get(key).copied().unwrap_or(0) as f64;
            decay(points_per_key, DISTRIBUTION_DECAY, (value_a - value_b).abs())
        })
        .sum()
}

/// Compare two `#RRGGBB` colors in HSL space with circular hue
/// distance. Either side failing to parse yields 0.
pub(crate) fn color_similarity(a: Option<&str>, b: Option<&str>, max_points: f64) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };
    let (Some(hsl_a), Some(hsl_b)) = (hex_to_hsl(a), hex_to_hsl(b)) else {
        return 0.0;
    };

    let raw_hue_diff = (hsl_a.hue - hsl_b.hue).abs();
    let hue_diff = raw_hue_diff.min(360.0 - raw_hue_diff);
    let saturation_diff = (hsl_a.saturation - hsl_b.saturation).abs();
    let lightness_diff = (hsl_a.lightness - hsl_b.lightness).abs();

    let weighted_diff = (hue_diff / 180.0) * COLOR_HUE_WEIGHT
        + (saturation_diff / 100.0) * COLOR_SATURATION_WEIGHT
        + (lightness_diff / 100.0) * COLOR_LIGHTNESS_WEIGHT;

    max_points * (1.0 - weighted_diff)
}

/// HSL with hue in [0,360) and saturation/lightness in [0,100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Hsl {
    pub(crate) hue: f64,
    pub(crate) saturation: f64,
    pub(crate) lightness: f64,
}

/// Standard RGB -> HSL conversion for a strict `#RRGGBB` string.
/// Achromatic colors get hue = saturation = 0 rather than NaN.
pub(crate) fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map(|v| v as f64 / 255.0)
    };
    let r = channel(0..2).ok()?;
    let g = channel(2..4).ok()?;
    let b = channel(4..6).ok()?;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    let (hue, saturation) = if max == min {
        (0.0, 0.0)
    } else {
        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        let hue = if max == r {
            ((g - b) / delta + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / delta + 2.0) / 6.0
        } else {
            ((r - g) / delta + 4.0) / 6.0
        };
        (hue, saturation)
    };

    Some(Hsl {
        hue: hue * 360.0,
        saturation: saturation * 100.0,
        lightness: lightness * 100.0,
    })
}
