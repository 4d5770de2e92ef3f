use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CROP_SIZE, DEFAULT_SEARCH_RADIUS};

/// Engine configuration, fixed at construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Side length of the centered luma crop. Clamped per frame to
    /// `min(crop_size, width, height)`.
    #[serde(default = "default_crop_size")]
    pub crop_size: usize,
    /// Block-matching search radius in pixels.
    #[serde(default = "default_search_radius")]
    pub search_radius: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            crop_size: DEFAULT_CROP_SIZE,
            search_radius: DEFAULT_SEARCH_RADIUS,
        }
    }
}

fn default_crop_size() -> usize {
    DEFAULT_CROP_SIZE
}

fn default_search_radius() -> usize {
    DEFAULT_SEARCH_RADIUS
}
