//! View registry: route view keys to render functions

use crate::components::Navbar;
use crate::pages::{MainPage, RoadMapPage};
use leptos::*;
use roadmap_core::route::views;
use roadmap_core::Props;
use std::collections::HashMap;

pub type ViewFn = fn(Props) -> View;

#[derive(Default)]
pub struct ViewRegistry {
    views: HashMap<&'static str, ViewFn>,
}

impl ViewRegistry {
    pub fn app_views() -> Self {
        let mut registry = Self::default();
        registry.register(views::MAIN_PAGE, |_| view! { <MainPage/> }.into_view());
        registry.register(views::NAVBAR, |_| view! { <Navbar/> }.into_view());
        registry.register(views::ROADMAP_PAGE, |props| {
            view! { <RoadMapPage user_input=props/> }.into_view()
        });
        registry
    }

    pub fn register(&mut self, key: &'static str, render: ViewFn) {
        self.views.insert(key, render);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.views.contains_key(key)
    }

    pub fn render(&self, key: &str, props: Props) -> Option<View> {
        self.views.get(key).map(|render| render(props))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadmap_core::app_routes;

    #[test]
    fn test_every_bound_route_has_a_view() {
        let registry = ViewRegistry::app_views();
        let table = app_routes().unwrap();
        for entry in table.entries() {
            if let Some(key) = entry.view_key() {
                assert!(registry.contains(key), "no view registered for {}", key);
            }
        }
    }
}
