//! Roadmap page: renders the flow diagram and fills it from the backend

use crate::components::{FlowDiagram, Navbar};
use crate::context::use_app_context;
use leptos::*;
use roadmap_core::roadmap::user_query_from_props;
use roadmap_core::{GenerateRequest, Props, Roadmap};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
enum LoadState {
    Loading,
    Ready(usize),
    Failed(String),
}

#[component]
pub fn RoadMapPage(user_input: Props) -> impl IntoView {
    let ctx = use_app_context();
    let query = user_query_from_props(&user_input);
    let (roadmap, set_roadmap) = create_signal(Roadmap::template());
    let (state, set_state) = create_signal(LoadState::Loading);

    let request = GenerateRequest::new(Roadmap::template().node_labels(), query.clone());
    let api = ctx.api.clone();

    // Fetch labels on mount
    create_effect(move |_| {
        let api = api.clone();
        let request = request.clone();
        spawn_local(async move {
            match api.generate(&request).await {
                Ok(updates) => {
                    let mut applied = 0;
                    set_roadmap.update(|r| applied = r.apply(&updates));
                    info!("Applied {} roadmap labels", applied);
                    set_state.set(LoadState::Ready(applied));
                }
                Err(e) => {
                    warn!("Roadmap generation failed: {}", e);
                    set_state.set(LoadState::Failed(e.to_string()));
                }
            }
        });
    });

    view! {
        <div>
            <Navbar/>
            <div class="container mx-auto px-4 py-8 space-y-6">
                <div>
                    <h1 class="text-3xl font-bold text-gray-900">"Your Roadmap"</h1>
                    <p class="text-gray-600 mt-1">{query}</p>
                </div>

                {move || match state.get() {
                    LoadState::Loading => view! {
                        <div class="p-4 rounded-lg bg-blue-50 border border-blue-200 text-blue-800">
                            "Building your roadmap..."
                        </div>
                    }.into_view(),
                    LoadState::Ready(0) => view! {
                        <div class="p-4 rounded-lg bg-yellow-50 border border-yellow-200 text-yellow-800">
                            "No suggestions came back. Try describing your interests differently."
                        </div>
                    }.into_view(),
                    LoadState::Ready(_) => ().into_view(),
                    LoadState::Failed(message) => view! {
                        <div class="p-4 rounded-lg bg-red-50 border border-red-200 text-red-800">
                            <p class="font-medium">"We couldn't build your roadmap right now."</p>
                            <p class="text-sm mt-1">{message}</p>
                        </div>
                    }.into_view(),
                }}

                <div id="diagram" class="bg-white rounded-lg shadow p-6 scroll-mt-16">
                    <FlowDiagram roadmap=roadmap/>
                </div>
            </div>
        </div>
    }
}
