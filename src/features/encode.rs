//! Session → ordered feature columns. The scaler and classifier were fitted
//! against this exact column order; reordering or omission silently breaks
//! predictions downstream, so the order is pinned here and nowhere else.

use super::FeatureVector;
use crate::session::Session;

/// Column order the artifacts were fitted against.
pub const FEATURE_COLUMNS: [&str; 17] = [
    "administrative",
    "administrative_duration",
    "informational",
    "informational_duration",
    "product_related",
    "product_related_duration",
    "bounce_rate",
    "exit_rate",
    "page_value",
    "special_day",
    "month",
    "operating_system",
    "browser",
    "region",
    "traffic_type",
    "visitor_type",
    "weekend",
];

/// Assemble the ordered model input from a session record.
pub fn encode(session: &Session) -> FeatureVector {
    let values: Vec<f32> = vec![
        session.administrative as f32,
        session.administrative_duration,
        session.informational as f32,
        session.informational_duration,
        session.product_related as f32,
        session.product_related_duration,
        session.bounce_rate,
        session.exit_rate,
        session.page_value,
        session.special_day,
        session.month.code() as f32,
        session.operating_system.code() as f32,
        session.browser as f32,
        session.region as f32,
        session.traffic_type as f32,
        session.visitor_type.code() as f32,
        session.weekend.code() as f32,
    ];
    FeatureVector {
        dim: FEATURE_COLUMNS.len(),
        values,
    }
}
