//! Scroll policy applied when a navigation settles
//!
//! Priority: a saved position (history traversal) wins, then the element
//! named by the URL fragment, then the top of the page. The fragment lookup
//! is deferred by a bounded grace period so the destination view can render
//! before the element is searched for.

use crate::config::ScrollConfig;
use crate::location::Location;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub left: f64,
    pub top: f64,
}

impl ScrollPosition {
    pub const TOP: Self = Self { left: 0.0, top: 0.0 };

    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Auto,
    #[default]
    Smooth,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScrollTarget {
    /// Position restored verbatim from history
    Saved(ScrollPosition),
    /// Element matched by the URL fragment
    Element {
        selector: String,
        position: ScrollPosition,
        behavior: ScrollBehavior,
    },
    Top { behavior: ScrollBehavior },
}

impl ScrollTarget {
    pub fn position(&self) -> ScrollPosition {
        match self {
            ScrollTarget::Saved(position) => *position,
            ScrollTarget::Element { position, .. } => *position,
            ScrollTarget::Top { .. } => ScrollPosition::TOP,
        }
    }

    pub fn behavior(&self) -> ScrollBehavior {
        match self {
            ScrollTarget::Saved(_) => ScrollBehavior::Auto,
            ScrollTarget::Element { behavior, .. } | ScrollTarget::Top { behavior } => *behavior,
        }
    }
}

/// Locates rendered elements by CSS selector.
pub trait ElementProbe {
    /// Document position of the first element matching `selector`.
    fn locate(&self, selector: &str) -> Option<ScrollPosition>;
}

impl<F> ElementProbe for F
where
    F: Fn(&str) -> Option<ScrollPosition>,
{
    fn locate(&self, selector: &str) -> Option<ScrollPosition> {
        self(selector)
    }
}

/// A fragment target waiting out the grace period.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingScroll {
    pub selector: String,
    pub delay: Duration,
    pub behavior: ScrollBehavior,
}

impl PendingScroll {
    /// Look the element up now; fall back to the top of the page.
    pub fn settle(&self, probe: &dyn ElementProbe) -> ScrollTarget {
        match probe.locate(&self.selector) {
            Some(position) => ScrollTarget::Element {
                selector: self.selector.clone(),
                position,
                behavior: self.behavior,
            },
            None => {
                debug!("Scroll target {} not rendered, scrolling to top", self.selector);
                ScrollTarget::Top {
                    behavior: self.behavior,
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScrollDecision {
    Immediate(ScrollTarget),
    Deferred(PendingScroll),
}

pub fn compute_scroll_target(
    to: &Location,
    from: Option<&Location>,
    saved: Option<ScrollPosition>,
    config: &ScrollConfig,
) -> ScrollDecision {
    debug!(
        to = %to,
        from = from.map(Location::path).unwrap_or("<initial>"),
        saved = saved.is_some(),
        "Computing scroll target"
    );

    if let Some(position) = saved {
        return ScrollDecision::Immediate(ScrollTarget::Saved(position));
    }

    match to.hash() {
        Some(hash) => ScrollDecision::Deferred(PendingScroll {
            selector: hash.to_string(),
            delay: config.settle_delay(),
            behavior: config.behavior,
        }),
        None => ScrollDecision::Immediate(ScrollTarget::Top {
            behavior: config.behavior,
        }),
    }
}

/// Scroll positions of recently left history entries, keyed by href.
/// Oldest entries are evicted first once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct ScrollMemory {
    capacity: usize,
    entries: VecDeque<(String, ScrollPosition)>,
}

impl ScrollMemory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn record(&mut self, key: impl Into<String>, position: ScrollPosition) {
        let key = key.into();
        self.entries.retain(|(k, _)| *k != key);
        self.entries.push_back((key, position));
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn get(&self, key: &str) -> Option<ScrollPosition> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, position)| *position)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
