//! Error kinds: fatal artifact-load failures and per-request prediction failures.

use std::path::PathBuf;
use thiserror::Error;

/// Startup failure: an artifact could not be loaded. Fatal — no prediction
/// can proceed without both the scaler and the classifier.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model artifact unavailable at {}: {reason}", path.display())]
    ModelUnavailable { path: PathBuf, reason: String },
}

/// Per-request failure. Surfaced inline; the process keeps serving.
#[derive(Debug, Error)]
pub enum PredictError {
    /// Vector cardinality differs from what the fitted artifact expects.
    #[error("feature vector shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    /// Classifier emitted a label outside the binary verdict set.
    #[error("classifier produced label {0}, outside {{0, 1}}")]
    UnexpectedLabel(i64),

    /// ONNX runtime failure mid-call.
    #[error("inference failed")]
    Inference(#[from] ort::Error),
}
