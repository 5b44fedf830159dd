use serde::{Deserialize, Serialize};

use crate::error::RegularizeError;
use crate::subdivide::{worst_case_pieces, MAX_PIECES_PER_SEGMENT, MAX_SUBDIVISION_COUNT};

/// All regularization thresholds in one struct.
/// Serializable (for saving presets) and passed explicitly into
/// every call; there is no global configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegularizeConfig {
    // -- Right-angle detection --
    /// Maximum deviation from 90 degrees for a control-point corner
    /// to count as a right angle (degrees).
    pub angle_threshold: f64,
    /// Maximum chord deviation of a right-angle candidate, as a fraction
    /// of chord length. Looser than `straightness_threshold` because a
    /// true corner bulges away from its chord.
    pub corner_straightness_threshold: f64,

    // -- Straightness --
    /// Maximum absolute chord deviation for a curve to be "mostly straight"
    /// (drawing units).
    pub straightness_threshold: f64,
    /// Number of evenly spaced samples used by the straightness metric.
    pub straightness_samples: usize,

    // -- Curvature --
    /// Curves whose sampled curvature stays below this become lines.
    pub curvature_threshold: f64,

    // -- Subdivision --
    /// Split points per unclassified curve; yields `subdivision_count + 1` pieces.
    /// At most [`MAX_SUBDIVISION_COUNT`](crate::subdivide::MAX_SUBDIVISION_COUNT).
    pub subdivision_count: usize,
    /// Re-classify subdivided pieces up to this depth. 0 = emit pieces as-is.
    /// Clamped to [`MAX_RECURSION_DEPTH`](crate::MAX_RECURSION_DEPTH).
    pub max_depth: usize,
}

impl Default for RegularizeConfig {
    fn default() -> Self {
        Self {
            angle_threshold: 40.0,
            corner_straightness_threshold: 0.5,
            straightness_threshold: 0.05,
            straightness_samples: 16,
            curvature_threshold: 0.004,
            subdivision_count: 2,
            max_depth: 0,
        }
    }
}

impl RegularizeConfig {
    /// Reject thresholds that would make the cascade meaningless.
    pub fn validate(&self) -> Result<(), RegularizeError> {
        let thresholds = [
            ("angle_threshold", self.angle_threshold),
            ("corner_straightness_threshold", self.corner_straightness_threshold),
            ("straightness_threshold", self.straightness_threshold),
            ("curvature_threshold", self.curvature_threshold),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(RegularizeError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.straightness_samples == 0 {
            return Err(RegularizeError::InvalidConfig(
                "straightness_samples must be at least 1".to_string(),
            ));
        }
        if self.subdivision_count > MAX_SUBDIVISION_COUNT {
            return Err(RegularizeError::InvalidConfig(format!(
                "subdivision_count must be at most {MAX_SUBDIVISION_COUNT}, got {}",
                self.subdivision_count
            )));
        }
        match worst_case_pieces(self.subdivision_count, self.max_depth) {
            Some(pieces) if pieces <= MAX_PIECES_PER_SEGMENT => Ok(()),
            _ => Err(RegularizeError::InvalidConfig(format!(
                "subdivision_count {} with max_depth {} can expand one segment past {MAX_PIECES_PER_SEGMENT} pieces",
                self.subdivision_count, self.max_depth
            ))),
        }
    }
}
