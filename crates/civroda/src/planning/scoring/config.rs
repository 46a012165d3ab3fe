/// Weight and normalisation range for one numeric feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRange {
    pub weight: f64,
    pub max_range: f64,
}

/// Weights for the comparable-application rubric.
///
/// The defaults weigh zoning at 40% and land size, height and FSR at 20% each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityConfig {
    pub zoning_weight: f64,
    pub land_size: FeatureRange,
    pub height: FeatureRange,
    pub fsr: FeatureRange,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            zoning_weight: 0.40,
            land_size: FeatureRange {
                weight: 0.20,
                max_range: 5000.0,
            },
            height: FeatureRange {
                weight: 0.20,
                max_range: 45.0,
            },
            fsr: FeatureRange {
                weight: 0.20,
                max_range: 4.0,
            },
        }
    }
}
