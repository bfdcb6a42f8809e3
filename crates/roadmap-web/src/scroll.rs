//! Applies scroll decisions to the browser window

use leptos::leptos_dom::helpers::{TimeoutHandle, WindowListenerHandle};
use leptos::*;
use roadmap_core::{
    ElementProbe, Location, Navigation, NavigationRouter, ScrollBehavior, ScrollDecision,
    ScrollMemory, ScrollPosition, ScrollTarget,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, warn};
use web_sys::{ScrollRestoration, ScrollToOptions};

/// Finds elements with `querySelector`. An invalid selector counts as
/// not found.
pub struct DomProbe;

impl ElementProbe for DomProbe {
    fn locate(&self, selector: &str) -> Option<ScrollPosition> {
        let element = document().query_selector(selector).ok().flatten()?;
        let rect = element.get_bounding_client_rect();
        let current = current_position();
        Some(ScrollPosition::new(
            rect.left() + current.left,
            rect.top() + current.top,
        ))
    }
}

struct DriverState {
    memory: ScrollMemory,
    pending: Option<TimeoutHandle>,
    popstate: Option<WindowListenerHandle>,
}

/// Owns the scroll side effects of navigation: remembering positions,
/// detecting history traversal and the pending fragment timer.
#[derive(Clone)]
pub struct ScrollDriver {
    traversal: Rc<Cell<bool>>,
    state: Rc<RefCell<DriverState>>,
}

impl ScrollDriver {
    pub fn new(memory_capacity: usize) -> Self {
        Self {
            traversal: Rc::new(Cell::new(false)),
            state: Rc::new(RefCell::new(DriverState {
                memory: ScrollMemory::new(memory_capacity),
                pending: None,
                popstate: None,
            })),
        }
    }

    /// Take over scroll restoration from the browser and watch for
    /// back/forward traversal.
    pub fn install(&self) {
        if let Ok(history) = window().history() {
            if let Err(e) = history.set_scroll_restoration(ScrollRestoration::Manual) {
                warn!("Could not disable native scroll restoration: {:?}", e);
            }
        }

        let traversal = self.traversal.clone();
        let handle = window_event_listener(ev::popstate, move |_| traversal.set(true));
        self.state.borrow_mut().popstate = Some(handle);
    }

    /// Cancel any pending scroll, remember where `from` was left and
    /// return the saved position for `to` when this is a traversal.
    pub fn begin_navigation(&self, from: Option<&Location>, to: &Location) -> Option<ScrollPosition> {
        let mut state = self.state.borrow_mut();
        if let Some(handle) = state.pending.take() {
            handle.clear();
        }
        if let Some(from) = from {
            state.memory.record(from.href(), current_position());
        }

        if self.traversal.replace(false) {
            state.memory.get(&to.href())
        } else {
            None
        }
    }

    /// Apply the navigation's scroll decision once the view has rendered.
    pub fn schedule(&self, router: Rc<NavigationRouter>, navigation: Navigation) {
        let id = navigation.id;
        match navigation.scroll {
            ScrollDecision::Immediate(target) => {
                request_animation_frame(move || {
                    if router.coordinator().is_current(id) {
                        apply(&target);
                        router.complete(id);
                    }
                });
            }
            ScrollDecision::Deferred(pending) => {
                let delay = pending.delay;
                let timer = router.clone();
                let handle = set_timeout_with_handle(
                    move || {
                        if let Some(target) = timer.coordinator().settle(id, &pending, &DomProbe) {
                            apply(&target);
                            timer.complete(id);
                        }
                    },
                    delay,
                );
                match handle {
                    Ok(handle) => self.state.borrow_mut().pending = Some(handle),
                    Err(e) => warn!("Failed to schedule scroll: {:?}", e),
                }
            }
        }
    }
}

fn current_position() -> ScrollPosition {
    let window = window();
    ScrollPosition::new(
        window.scroll_x().unwrap_or_default(),
        window.scroll_y().unwrap_or_default(),
    )
}

fn apply(target: &ScrollTarget) {
    let position = target.position();
    debug!("Scrolling to {:?}", target);

    let options = ScrollToOptions::new();
    options.set_left(position.left);
    options.set_top(position.top);
    options.set_behavior(match target.behavior() {
        ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
    });
    window().scroll_to_with_scroll_to_options(&options);
}
