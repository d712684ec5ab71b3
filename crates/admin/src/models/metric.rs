//! Headline stat cards whose values are recorded rather than computed.

use serde::{Deserialize, Serialize};

use miss_accessories_core::Trend;

/// A stat card with a precomputed value and change label ("+12.5%").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineMetric {
    pub title: String,
    pub value: String,
    pub change: String,
    #[serde(default = "default_trend")]
    pub trend: Trend,
}

const fn default_trend() -> Trend {
    Trend::Up
}
