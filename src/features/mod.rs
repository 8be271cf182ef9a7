//! Fixed-order numeric feature assembly from a typed session record.

mod encode;

pub use encode::{encode, FEATURE_COLUMNS};

use serde::{Deserialize, Serialize};

/// Fixed-size feature vector for model input (17 session columns).
/// Constructed fresh per prediction trigger, consumed, discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureVector {
    pub dim: usize,
    pub values: Vec<f32>,
}

impl FeatureVector {
    pub fn as_slice(&self) -> &[f32] {
        &self.values[..self.dim.min(self.values.len())]
    }
}
