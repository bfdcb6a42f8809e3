//! Main application component

use crate::context::AppContext;
use crate::history::ManualScrollHistory;
use crate::outlet::RouterView;
use leptos::*;
use leptos_router::{Router, RouterIntegrationContext};
use std::rc::Rc;

#[component]
pub fn App(ctx: AppContext) -> impl IntoView {
    // Must run before <Router> registers its own popstate listener.
    ctx.scroll.install();
    provide_context(ctx);
    // <Router> picks this up instead of its scrolling browser integration.
    provide_context(RouterIntegrationContext(Rc::new(ManualScrollHistory::new())));

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50 text-gray-900">
                <RouterView/>
            </div>
        </Router>
    }
}
