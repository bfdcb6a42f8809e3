//! Roadmap flow diagram: positioned node cards joined by SVG edges

use leptos::*;
use roadmap_core::roadmap::NodeKind;
use roadmap_core::{Roadmap, RoadmapNode};

const NODE_WIDTH: f64 = 200.0;
const NODE_HEIGHT: f64 = 80.0;

#[component]
pub fn FlowDiagram(#[prop(into)] roadmap: Signal<Roadmap>) -> impl IntoView {
    let size = move || {
        roadmap.with(|r| {
            r.nodes.iter().fold((0.0_f64, 0.0_f64), |(w, h), n| {
                (w.max(n.position.x + NODE_WIDTH), h.max(n.position.y + NODE_HEIGHT))
            })
        })
    };

    view! {
        <div class="overflow-x-auto">
            <div
                class="relative mx-auto"
                style=move || {
                    let (w, h) = size();
                    format!("width: {}px; height: {}px;", w, h)
                }
            >
                <svg
                    class="absolute inset-0 pointer-events-none"
                    width=move || size().0.to_string()
                    height=move || size().1.to_string()
                >
                    {move || roadmap.with(|r| {
                        r.edges
                            .iter()
                            .filter_map(|edge| {
                                let source = r.node(&edge.source)?;
                                let target = r.node(&edge.target)?;
                                let (x1, y1) = anchor(source, true);
                                let (x2, y2) = anchor(target, false);
                                Some(view! {
                                    <line
                                        x1=x1.to_string()
                                        y1=y1.to_string()
                                        x2=x2.to_string()
                                        y2=y2.to_string()
                                        stroke="#94a3b8"
                                        stroke-width="2"
                                    />
                                })
                            })
                            .collect_view()
                    })}
                </svg>
                {move || roadmap.with(|r| {
                    r.nodes
                        .iter()
                        .map(|node| view! { <NodeCard node=node.clone()/> })
                        .collect_view()
                })}
            </div>
        </div>
    }
}

#[component]
fn NodeCard(node: RoadmapNode) -> impl IntoView {
    let (bg, border) = match node.kind {
        NodeKind::Program => ("bg-indigo-600 text-white", "border-indigo-800"),
        NodeKind::Header => ("bg-gray-800 text-white", "border-gray-900"),
        NodeKind::Resource => ("bg-cyan-50 text-gray-900", "border-cyan-500"),
        NodeKind::College => ("bg-emerald-50 text-gray-900", "border-emerald-500"),
        NodeKind::CollegeDetail => ("bg-amber-50 text-gray-900", "border-amber-500"),
    };

    view! {
        <div
            id=format!("node-{}", node.id)
            class=format!("absolute p-3 rounded-lg border-2 shadow-sm text-sm overflow-hidden {} {}", bg, border)
            style=format!(
                "left: {}px; top: {}px; width: {}px; height: {}px;",
                node.position.x, node.position.y, NODE_WIDTH, NODE_HEIGHT
            )
        >
            {node.label}
        </div>
    }
}

/// Bottom-centre of a source card or top-centre of a target card.
fn anchor(node: &RoadmapNode, source: bool) -> (f64, f64) {
    let x = node.position.x + NODE_WIDTH / 2.0;
    let y = if source { node.position.y + NODE_HEIGHT } else { node.position.y };
    (x, y)
}
