//! Navigation identity and deferred scroll cancellation
//!
//! Every navigation gets a fresh [`NavigationId`]. Starting a navigation
//! supersedes the previous one, so a fragment lookup still waiting out its
//! grace period settles to nothing instead of scrolling the new page.

use crate::scroll::{ElementProbe, PendingScroll, ScrollTarget};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NavigationId(u64);

impl NavigationId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPhase {
    Idle,
    Navigating(NavigationId),
}

/// Tracks the latest navigation and whether it has settled.
/// Clones share state.
#[derive(Debug, Clone, Default)]
pub struct ScrollCoordinator {
    latest: Arc<AtomicU64>,
    completed: Arc<AtomicU64>,
}

impl ScrollCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a navigation, superseding any earlier one.
    pub fn begin(&self) -> NavigationId {
        NavigationId(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, id: NavigationId) -> bool {
        self.latest.load(Ordering::SeqCst) == id.0
    }

    pub fn phase(&self) -> NavigationPhase {
        let latest = self.latest.load(Ordering::SeqCst);
        if latest == 0 || self.completed.load(Ordering::SeqCst) >= latest {
            NavigationPhase::Idle
        } else {
            NavigationPhase::Navigating(NavigationId(latest))
        }
    }

    /// Mark `id` settled. Only the current navigation returns to idle.
    pub fn complete(&self, id: NavigationId) -> bool {
        if !self.is_current(id) {
            return false;
        }
        self.completed.fetch_max(id.0, Ordering::SeqCst);
        true
    }

    /// Resolve a pending fragment target, or `None` if `id` was superseded.
    pub fn settle(
        &self,
        id: NavigationId,
        pending: &PendingScroll,
        probe: &dyn ElementProbe,
    ) -> Option<ScrollTarget> {
        if !self.is_current(id) {
            debug!(navigation = id.0, "Dropping scroll for superseded navigation");
            return None;
        }
        Some(pending.settle(probe))
    }

    /// Wait out the grace period with the caller's timer, then settle.
    pub async fn settle_after<S, F>(
        &self,
        id: NavigationId,
        pending: &PendingScroll,
        probe: &dyn ElementProbe,
        sleep: S,
    ) -> Option<ScrollTarget>
    where
        S: FnOnce(Duration) -> F,
        F: Future<Output = ()>,
    {
        sleep(pending.delay).await;
        self.settle(id, pending, probe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::{ScrollBehavior, ScrollPosition};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use tokio::time::{self, Instant};

    fn pending(selector: &str) -> PendingScroll {
        PendingScroll {
            selector: selector.to_string(),
            delay: Duration::from_millis(100),
            behavior: ScrollBehavior::Smooth,
        }
    }

    #[test]
    fn test_phase_transitions() {
        let coordinator = ScrollCoordinator::new();
        assert_eq!(coordinator.phase(), NavigationPhase::Idle);

        let first = coordinator.begin();
        assert_eq!(coordinator.phase(), NavigationPhase::Navigating(first));

        let second = coordinator.begin();
        assert!(!coordinator.complete(first));
        assert_eq!(coordinator.phase(), NavigationPhase::Navigating(second));

        assert!(coordinator.complete(second));
        assert_eq!(coordinator.phase(), NavigationPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_element_rendered_within_grace_period() {
        let dom: Arc<Mutex<HashMap<String, ScrollPosition>>> = Arc::default();

        let writer = dom.clone();
        tokio::spawn(async move {
            time::sleep(Duration::from_millis(50)).await;
            writer
                .lock()
                .unwrap()
                .insert("#colleges".to_string(), ScrollPosition::new(0.0, 1200.0));
        });

        let probe = |selector: &str| dom.lock().unwrap().get(selector).copied();
        let coordinator = ScrollCoordinator::new();
        let id = coordinator.begin();
        let started = Instant::now();

        let target = coordinator
            .settle_after(id, &pending("#colleges"), &probe, time::sleep)
            .await;

        let waited = started.elapsed();
        assert!(waited >= Duration::from_millis(100) && waited < Duration::from_millis(150));
        assert_eq!(
            target,
            Some(ScrollTarget::Element {
                selector: "#colleges".to_string(),
                position: ScrollPosition::new(0.0, 1200.0),
                behavior: ScrollBehavior::Smooth,
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_element_falls_back_to_top_after_wait() {
        let probe = |_: &str| -> Option<ScrollPosition> { None };
        let coordinator = ScrollCoordinator::new();
        let id = coordinator.begin();
        let started = Instant::now();

        let target = coordinator
            .settle_after(id, &pending("#missing"), &probe, time::sleep)
            .await;

        assert!(started.elapsed() >= Duration::from_millis(100));
        assert_eq!(
            target,
            Some(ScrollTarget::Top {
                behavior: ScrollBehavior::Smooth
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_navigation_does_not_scroll() {
        let probe = |_: &str| Some(ScrollPosition::new(0.0, 300.0));
        let coordinator = ScrollCoordinator::new();
        let stale = coordinator.begin();

        let racer = coordinator.clone();
        tokio::spawn(async move {
            time::sleep(Duration::from_millis(20)).await;
            racer.begin();
        });

        let target = coordinator
            .settle_after(stale, &pending("#about"), &probe, time::sleep)
            .await;
        assert_eq!(target, None);
    }
}
