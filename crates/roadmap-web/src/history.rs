//! Router history integration that leaves scrolling to `ScrollDriver`
//!
//! The stock browser integration scrolls after every history write (to the
//! top, or straight to the fragment's element). Navigation here only writes
//! the history entry; `ScrollDriver` applies the scroll once the view has
//! rendered.

use leptos::*;
use leptos_router::{BrowserIntegration, History, LocationChange};
use tracing::warn;

#[derive(Debug, PartialEq, Eq)]
enum HistoryWrite<'a> {
    Push(&'a str),
    Replace(&'a str),
}

/// The history entry a location change writes. The change's scroll flag
/// plays no part.
fn history_write(change: &LocationChange) -> HistoryWrite<'_> {
    if change.replace {
        HistoryWrite::Replace(&change.value)
    } else {
        HistoryWrite::Push(&change.value)
    }
}

pub struct ManualScrollHistory {
    browser: BrowserIntegration,
}

impl ManualScrollHistory {
    pub fn new() -> Self {
        Self {
            browser: BrowserIntegration {},
        }
    }
}

impl Default for ManualScrollHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for ManualScrollHistory {
    fn location(&self) -> ReadSignal<LocationChange> {
        self.browser.location()
    }

    fn navigate(&self, change: &LocationChange) {
        let history = match window().history() {
            Ok(history) => history,
            Err(e) => {
                warn!("History unavailable: {:?}", e);
                return;
            }
        };

        let state = change.state.to_js_value();
        let result = match history_write(change) {
            HistoryWrite::Push(url) => history.push_state_with_url(&state, "", Some(url)),
            HistoryWrite::Replace(url) => history.replace_state_with_url(&state, "", Some(url)),
        };
        if let Err(e) = result {
            warn!("Failed to write history entry {}: {:?}", change.value, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_router::State;

    fn change(value: &str, replace: bool, scroll: bool) -> LocationChange {
        LocationChange {
            value: value.to_string(),
            replace,
            scroll,
            state: State(None),
        }
    }

    #[test]
    fn test_history_write_ignores_scroll_flag() {
        assert_eq!(history_write(&change("/#about", false, true)), HistoryWrite::Push("/#about"));
        assert_eq!(history_write(&change("/#about", false, false)), HistoryWrite::Push("/#about"));
        assert_eq!(history_write(&change("/roadmap", true, true)), HistoryWrite::Replace("/roadmap"));
    }
}
