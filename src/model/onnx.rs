//! ONNX Runtime sessions for the fitted artifacts.
//! Scaler: [1, dim] f32 → [1, dim] f32. Classifier: [1, dim] f32 → i64 label.

use crate::error::{ModelError, PredictError};
use crate::features::FeatureVector;
use ndarray::Array2;
use std::path::Path;
use std::sync::OnceLock;

static ORT_ENV: OnceLock<()> = OnceLock::new();

fn init_env() {
    ORT_ENV.get_or_init(|| {
        ort::init()
            .with_name("shopper-intent")
            .commit()
            .expect("ORT environment");
    });
}

fn open_session(path: &Path) -> Result<ort::Session, ModelError> {
    if !path.exists() {
        return Err(ModelError::ModelUnavailable {
            path: path.to_path_buf(),
            reason: "file not found".to_string(),
        });
    }
    init_env();
    ort::Session::builder()
        .and_then(|b| b.commit_from_file(path))
        .map_err(|e| ModelError::ModelUnavailable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

fn input_name(session: &ort::Session) -> String {
    session
        .inputs
        .first()
        .map(|i| i.name.clone())
        .unwrap_or_else(|| "input".to_string())
}

/// Build the [1, dim] input tensor, guarding cardinality first.
fn batch(features: &FeatureVector, dim: usize) -> Result<ort::Value, PredictError> {
    if features.values.len() != dim {
        return Err(PredictError::ShapeMismatch {
            expected: dim,
            got: features.values.len(),
        });
    }
    let arr = Array2::from_shape_vec((1, dim), features.values.clone()).map_err(|_| {
        PredictError::ShapeMismatch {
            expected: dim,
            got: features.values.len(),
        }
    })?;
    Ok(ort::Value::from_array(arr.into_dyn())?.into_dyn())
}

/// Fitted normalization transform. Parameters are immutable after load.
#[derive(Debug)]
pub struct Scaler {
    session: ort::Session,
    input_name: String,
    feature_dim: usize,
}

impl Scaler {
    pub fn load(path: &Path, feature_dim: usize) -> Result<Self, ModelError> {
        let session = open_session(path)?;
        let input_name = input_name(&session);
        Ok(Self {
            session,
            input_name,
            feature_dim,
        })
    }

    /// Normalize a raw vector. Output cardinality is validated against the
    /// fitted dim, so artifact drift surfaces as ShapeMismatch rather than
    /// a silently wrong prediction.
    pub fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, PredictError> {
        let input = batch(features, self.feature_dim)?;
        let outputs = self
            .session
            .run(ort::inputs![self.input_name.as_str() => input]?)?;
        let out = outputs.values().next().ok_or(PredictError::ShapeMismatch {
            expected: self.feature_dim,
            got: 0,
        })?;
        let (_, view) = out.try_extract_raw_tensor::<f32>()?;
        let values = view.to_vec();
        if values.len() != self.feature_dim {
            return Err(PredictError::ShapeMismatch {
                expected: self.feature_dim,
                got: values.len(),
            });
        }
        Ok(FeatureVector {
            dim: self.feature_dim,
            values,
        })
    }
}

/// Fitted binary decision function over a normalized vector.
#[derive(Debug)]
pub struct Classifier {
    session: ort::Session,
    input_name: String,
    feature_dim: usize,
}

impl Classifier {
    pub fn load(path: &Path, feature_dim: usize) -> Result<Self, ModelError> {
        let session = open_session(path)?;
        let input_name = input_name(&session);
        Ok(Self {
            session,
            input_name,
            feature_dim,
        })
    }

    /// Raw label from the first output tensor.
    pub fn predict(&self, features: &FeatureVector) -> Result<i64, PredictError> {
        let input = batch(features, self.feature_dim)?;
        let outputs = self
            .session
            .run(ort::inputs![self.input_name.as_str() => input]?)?;
        let out = outputs.values().next().ok_or(PredictError::ShapeMismatch {
            expected: 1,
            got: 0,
        })?;
        let (_, view) = out.try_extract_raw_tensor::<i64>()?;
        view
            .first()
            .copied()
            .ok_or(PredictError::ShapeMismatch {
                expected: 1,
                got: 0,
            })
    }
}
