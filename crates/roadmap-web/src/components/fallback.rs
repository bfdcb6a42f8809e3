//! Fallback views for navigations that cannot render their route

use leptos::*;

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <FallbackPanel title="Page not found">
            <p class="text-gray-600">"Nothing lives at " <code class="font-mono">{path}</code> "."</p>
        </FallbackPanel>
    }
}

#[component]
pub fn UnboundRoute(name: String) -> impl IntoView {
    view! {
        <FallbackPanel title="Nothing to show yet">
            <p class="text-gray-600">"The route " <code class="font-mono">{name}</code> " has no page attached."</p>
        </FallbackPanel>
    }
}

#[component]
pub fn InvalidPropsView(name: String, message: String) -> impl IntoView {
    view! {
        <FallbackPanel title="This link looks broken">
            <p class="text-gray-600">"The page " <code class="font-mono">{name}</code> " could not read its input."</p>
            <p class="text-sm text-gray-500 mt-2">{message}</p>
        </FallbackPanel>
    }
}

#[component]
fn FallbackPanel(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-24">
            <div class="max-w-xl mx-auto bg-white rounded-lg shadow p-8 text-center space-y-4">
                <h1 class="text-3xl font-bold text-gray-900">{title}</h1>
                {children()}
                <a href="/" noscroll=true class="inline-block mt-4 text-indigo-600 hover:underline">"← Back home"</a>
            </div>
        </div>
    }
}
