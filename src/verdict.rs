//! Binary purchase-intent verdict and the per-request prediction record.

use crate::error::PredictError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Purchase,
    NoPurchase,
}

impl Verdict {
    /// Map the classifier's raw output label. Anything outside {0, 1}
    /// breaches the artifact contract.
    pub fn from_label(label: i64) -> Result<Self, PredictError> {
        match label {
            1 => Ok(Verdict::Purchase),
            0 => Ok(Verdict::NoPurchase),
            other => Err(PredictError::UnexpectedLabel(other)),
        }
    }

    pub fn label(self) -> i64 {
        match self {
            Verdict::Purchase => 1,
            Verdict::NoPurchase => 0,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Purchase => write!(f, "This shopper is likely to make a purchase."),
            Verdict::NoPurchase => write!(f, "This shopper is unlikely to make a purchase."),
        }
    }
}

/// Result for a single prediction trigger. The request id exists for log
/// correlation only; no identity outlives the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub request_id: String,
    pub verdict: Verdict,
    pub ts: i64,
}
