//! Structured logging for ingestion and audit.

mod format;

pub use format::StructuredLogger;
