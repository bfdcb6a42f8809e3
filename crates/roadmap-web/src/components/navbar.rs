//! Navigation bar

use leptos::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let (mobile_open, set_mobile_open) = create_signal(false);

    view! {
        <nav class="bg-white shadow-sm sticky top-0 z-50">
            <div class="container mx-auto px-4">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <a href="/" noscroll=true class="text-xl font-bold text-indigo-700">
                            "Career Roadmap"
                        </a>
                    </div>

                    // Desktop Nav
                    <div class="hidden md:flex items-center space-x-8">
                        <NavLinks/>
                    </div>

                    <div class="md:hidden flex items-center">
                        <button
                            class="p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                            on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                        >
                            {move || if mobile_open.get() { "Close" } else { "Menu" }}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || mobile_open.get()>
                <div class="md:hidden border-t border-gray-200 px-4 py-4 flex flex-col space-y-3">
                    <NavLinks/>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavLinks() -> impl IntoView {
    view! {
        <>
        <a href="/" noscroll=true class="text-gray-600 hover:text-gray-900 transition">"Home"</a>
        <a href="/#how-it-works" noscroll=true class="text-gray-600 hover:text-gray-900 transition">"How It Works"</a>
        <a href="/#about" noscroll=true class="text-gray-600 hover:text-gray-900 transition">"About"</a>
        <a href="/roadmap" noscroll=true class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white font-medium rounded-lg transition">
            "My Roadmap"
        </a>
        </>
    }
}
