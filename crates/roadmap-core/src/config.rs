//! Router configuration

use crate::scroll::ScrollBehavior;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What a view receives when its JSON query parameter does not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedQueryPolicy {
    /// Render the view with empty props and log a warning
    #[default]
    Fallback,
    /// Render the invalid-props fallback instead of the view
    ErrorView,
}

/// Scroll policy configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Grace period for a fragment's element to render (milliseconds)
    pub settle_delay_ms: u64,
    /// Animation for fragment and top-of-page targets
    pub behavior: ScrollBehavior,
}

impl ScrollConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 100,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// Complete router configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub scroll: ScrollConfig,
    pub malformed_query: MalformedQueryPolicy,
    /// Number of history entries whose scroll position is remembered
    pub scroll_memory_capacity: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollConfig::default(),
            malformed_query: MalformedQueryPolicy::Fallback,
            scroll_memory_capacity: 50,
        }
    }
}
