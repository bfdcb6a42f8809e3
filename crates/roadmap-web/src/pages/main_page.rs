//! Landing page: collects the student's interests and opens their roadmap

use crate::components::Navbar;
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};
use roadmap_core::roadmap::roadmap_href;
use roadmap_core::Props;
use serde_json::Value;

#[component]
pub fn MainPage() -> impl IntoView {
    let (interest, set_interest) = create_signal(String::new());
    let (strand, set_strand) = create_signal("STEM".to_string());
    let (location, set_location) = create_signal("Cebu City".to_string());
    let (goal, set_goal) = create_signal(String::new());
    let navigate = use_navigate();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let mut input = Props::new();
        for (key, value) in [
            ("interest", interest.get()),
            ("strand", strand.get()),
            ("location", location.get()),
            ("goal", goal.get()),
        ] {
            if !value.trim().is_empty() {
                input.insert(key.to_string(), Value::String(value.trim().to_string()));
            }
        }

        navigate(
            &roadmap_href(&input),
            NavigateOptions {
                scroll: false,
                ..Default::default()
            },
        );
    };

    view! {
        <div>
            <Navbar/>

            // Hero Section
            <section class="bg-gradient-to-br from-indigo-900 via-purple-900 to-indigo-800 text-white">
                <div class="container mx-auto px-4 py-20">
                    <div class="max-w-3xl mx-auto text-center">
                        <h1 class="text-5xl font-bold mb-6">"Plan Your Path After Senior High"</h1>
                        <p class="text-xl text-gray-300">
                            "Tell us what you enjoy and get a roadmap of programs, learning resources "
                            "and colleges around Cebu that fit."
                        </p>
                    </div>

                    <form
                        class="max-w-xl mx-auto mt-10 bg-white text-gray-900 rounded-xl shadow-lg p-6 space-y-4"
                        on:submit=on_submit
                    >
                        <div>
                            <label class="block text-sm font-medium text-gray-700">"What are you interested in?"</label>
                            <input
                                type="text"
                                placeholder="Robotics, game development, biology..."
                                class="mt-1 block w-full px-3 py-2 border rounded-md"
                                prop:value=move || interest.get()
                                on:input=move |ev| set_interest.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="grid grid-cols-2 gap-4">
                            <div>
                                <label class="block text-sm font-medium text-gray-700">"SHS strand"</label>
                                <select
                                    class="mt-1 block w-full px-3 py-2 border rounded-md"
                                    on:change=move |ev| set_strand.set(event_target_value(&ev))
                                >
                                    <option value="STEM" selected=true>"STEM"</option>
                                    <option value="ABM">"ABM"</option>
                                    <option value="HUMSS">"HUMSS"</option>
                                    <option value="TVL">"TVL"</option>
                                    <option value="GAS">"GAS"</option>
                                </select>
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700">"Preferred location"</label>
                                <input
                                    type="text"
                                    class="mt-1 block w-full px-3 py-2 border rounded-md"
                                    prop:value=move || location.get()
                                    on:input=move |ev| set_location.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700">"Career goal (optional)"</label>
                            <input
                                type="text"
                                class="mt-1 block w-full px-3 py-2 border rounded-md"
                                prop:value=move || goal.get()
                                on:input=move |ev| set_goal.set(event_target_value(&ev))
                            />
                        </div>
                        <button
                            type="submit"
                            class="w-full px-4 py-3 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-lg transition"
                        >
                            "Build My Roadmap"
                        </button>
                    </form>
                </div>
            </section>

            // How It Works
            <section id="how-it-works" class="py-20 bg-white scroll-mt-16">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold text-center mb-12">"How It Works"</h2>
                    <div class="grid md:grid-cols-3 gap-8">
                        <Step number="1" title="Share your interests" description="A few words about what you enjoy and where you want to study."/>
                        <Step number="2" title="We search the directory" description="Programs, online resources and colleges in Cebu are matched to your answers."/>
                        <Step number="3" title="Follow the map" description="Your roadmap links a program to resources to learn with and schools that offer it."/>
                    </div>
                </div>
            </section>

            // About
            <section id="about" class="py-20 bg-gray-50 scroll-mt-16">
                <div class="container mx-auto px-4 max-w-3xl text-center">
                    <h2 class="text-3xl font-bold mb-4">"About"</h2>
                    <p class="text-lg text-gray-600">
                        "Career Roadmap helps senior high school students in Cebu explore STEM programs, "
                        "find scholarships and compare colleges before they apply."
                    </p>
                </div>
            </section>
        </div>
    }
}

#[component]
fn Step(number: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="w-12 h-12 bg-indigo-600 text-white rounded-full flex items-center justify-center text-xl font-bold mx-auto mb-4">
                {number}
            </div>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}
