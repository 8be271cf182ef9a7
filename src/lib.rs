//! Shopper Intent — online shopper purchase-intent prediction engine.
//!
//! Modular structure:
//! - [`session`] — Typed session record, display-label enumerations
//! - [`features`] — Fixed-order feature vector assembly
//! - [`model`] — ONNX scaler + classifier inference pipeline
//! - [`verdict`] — Binary purchase-intent verdict
//! - [`config`] — Artifact paths and logging parameters
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod error;
pub mod session;
pub mod features;
pub mod model;
pub mod verdict;
pub mod logging;

pub use config::AppConfig;
pub use error::{ModelError, PredictError};
pub use session::{Month, OperatingSystem, Session, VisitorType, Weekend};
pub use features::FeatureVector;
pub use model::ModelContext;
pub use verdict::{Prediction, Verdict};
pub use logging::StructuredLogger;
