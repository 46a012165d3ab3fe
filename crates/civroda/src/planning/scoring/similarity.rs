use std::sync::OnceLock;

use regex::Regex;

use super::super::records::ApplicationRecord;
use super::config::SimilarityConfig;

fn magnitude_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?|\.\d+").expect("magnitude pattern compiles"))
}

/// Leading numeric magnitude of a free-text field such as `"450 sqm"` or `"2.1:1"`.
///
/// Fields without any digits resolve to `0.0`.
pub fn parse_magnitude(value: &str) -> f64 {
    magnitude_pattern()
        .find(value)
        .and_then(|found| found.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// 1.0 for identical codes, 0.5 when only the category letter matches.
pub fn zoning_similarity(left: &str, right: &str) -> f64 {
    if left == right {
        return 1.0;
    }

    match (left.chars().next(), right.chars().next()) {
        (Some(a), Some(b)) if a == b => 0.5,
        _ => 0.0,
    }
}

/// Linear proximity of two magnitudes, reaching zero once they are `max_range` apart.
pub fn numeric_similarity(left: f64, right: f64, max_range: f64) -> f64 {
    if max_range == 0.0 {
        return 1.0;
    }

    (1.0 - (left - right).abs() / max_range).max(0.0)
}

/// Weighted similarity of two applications using the default rubric.
pub fn similarity(a: &ApplicationRecord, b: &ApplicationRecord) -> f64 {
    similarity_with(&SimilarityConfig::default(), a, b)
}

pub fn similarity_with(
    config: &SimilarityConfig,
    a: &ApplicationRecord,
    b: &ApplicationRecord,
) -> f64 {
    let zoning = zoning_similarity(&a.zoning, &b.zoning);
    let land_size = numeric_similarity(
        parse_magnitude(&a.land_size),
        parse_magnitude(&b.land_size),
        config.land_size.max_range,
    );
    let height = numeric_similarity(
        parse_magnitude(&a.height),
        parse_magnitude(&b.height),
        config.height.max_range,
    );
    let fsr = numeric_similarity(
        parse_magnitude(&a.fsr),
        parse_magnitude(&b.fsr),
        config.fsr.max_range,
    );

    let score = config.zoning_weight * zoning
        + config.land_size.weight * land_size
        + config.height.weight * height
        + config.fsr.weight * fsr;

    score.clamp(0.0, 1.0)
}
