//! Engine configuration: artifact paths, feature dim, logging.

use crate::features::FEATURE_COLUMNS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Serialized scaler and classifier locations
    pub artifacts: ArtifactsConfig,
    /// Feature schema parameters
    pub features: FeaturesConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactsConfig {
    /// Path to the fitted scaler graph
    pub scaler_path: PathBuf,
    /// Path to the fitted classifier graph
    pub classifier_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturesConfig {
    /// Number of numerical features expected by the artifacts
    pub feature_dim: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            artifacts: ArtifactsConfig::default(),
            features: FeaturesConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            scaler_path: PathBuf::from("scaler.onnx"),
            classifier_path: PathBuf::from("rf_model.onnx"),
        }
    }
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            feature_dim: FEATURE_COLUMNS.len(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl AppConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<AppConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }
}
