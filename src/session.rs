//! Typed session record: the 17 browsing-behavior attributes the artifacts
//! were fitted against, with display-label enumerations mapped to their codes.

use serde::{Deserialize, Serialize};

/// One visitor's browsing session. The form renderer validates ranges and
/// hands enumerated fields over as display labels; serde maps labels here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Administrative pages visited (0–100)
    pub administrative: u32,
    /// Time on administrative pages, seconds (0–10000)
    pub administrative_duration: f32,
    /// Informational pages visited (0–100)
    pub informational: u32,
    /// Time on informational pages, seconds (0–10000)
    pub informational_duration: f32,
    /// Product-related pages visited (0–2000)
    pub product_related: u32,
    /// Time on product pages, seconds (0–10000)
    pub product_related_duration: f32,
    /// Bounce rate (0.0–1.0)
    pub bounce_rate: f32,
    /// Exit rate (0.0–1.0)
    pub exit_rate: f32,
    /// Estimated revenue per page (0.0–500.0)
    pub page_value: f32,
    /// Closeness to a holiday, one of {0.0, 0.2, 0.4, 0.6, 0.8, 1.0}
    pub special_day: f32,
    pub month: Month,
    pub operating_system: OperatingSystem,
    /// Browser code (1–13)
    pub browser: u32,
    /// Region code (1–9)
    pub region: u32,
    /// Traffic source code (1–20)
    pub traffic_type: u32,
    pub visitor_type: VisitorType,
    pub weekend: Weekend,
}

/// Month of the visit. Codes follow the fitted encoding (Jan = 0).
/// Label spellings match the fitting front-end, including "June".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    June,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub fn code(self) -> u32 {
        self as u32
    }
}

/// Operating system of the visitor. Codes start at 1 in the fitted encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperatingSystem {
    Windows = 1,
    Mac = 2,
    Linux = 3,
    Other = 4,
}

impl OperatingSystem {
    pub fn code(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitorType {
    #[serde(rename = "Returning Visitor")]
    Returning,
    #[serde(rename = "New Visitor")]
    New,
    Other,
}

impl VisitorType {
    pub fn code(self) -> u32 {
        self as u32
    }
}

/// Whether the visit happened on a weekend. Encodes No = 0, Yes = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekend {
    No,
    Yes,
}

impl Weekend {
    pub fn code(self) -> u32 {
        self as u32
    }
}
