//! Artifact loading and the two-stage scale → classify pipeline.

mod onnx;

pub use onnx::{Classifier, Scaler};

use crate::config::AppConfig;
use crate::error::{ModelError, PredictError};
use crate::features;
use crate::session::Session;
use crate::verdict::{Prediction, Verdict};
use chrono::Utc;
use uuid::Uuid;

/// Immutable inference context: both fitted artifacts, loaded once at
/// startup and shared by reference across prediction calls. No field is
/// mutated after load, so concurrent callers need no locking.
pub struct ModelContext {
    scaler: Scaler,
    classifier: Classifier,
    feature_dim: usize,
}

impl ModelContext {
    /// Load both artifacts. Either one failing to load is fatal to startup.
    pub fn load(config: &AppConfig) -> Result<Self, ModelError> {
        let feature_dim = config.features.feature_dim;
        let scaler = Scaler::load(&config.artifacts.scaler_path, feature_dim)?;
        let classifier = Classifier::load(&config.artifacts.classifier_path, feature_dim)?;
        Ok(Self {
            scaler,
            classifier,
            feature_dim,
        })
    }

    pub fn feature_dim(&self) -> usize {
        self.feature_dim
    }

    /// Run one prediction: assemble the ordered vector, normalize it,
    /// classify, and map the label to a verdict.
    pub fn predict(&self, session: &Session) -> Result<Prediction, PredictError> {
        let raw = features::encode(session);
        if raw.values.len() != self.feature_dim {
            return Err(PredictError::ShapeMismatch {
                expected: self.feature_dim,
                got: raw.values.len(),
            });
        }
        let scaled = self.scaler.transform(&raw)?;
        let label = self.classifier.predict(&scaled)?;
        let verdict = Verdict::from_label(label)?;
        Ok(Prediction {
            request_id: Uuid::new_v4().to_string(),
            verdict,
            ts: Utc::now().timestamp_millis(),
        })
    }
}
