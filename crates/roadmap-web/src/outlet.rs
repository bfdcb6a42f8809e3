//! Router outlet: resolves every location change through the navigation
//! router and renders the outcome

use crate::components::{InvalidPropsView, NotFound, UnboundRoute};
use crate::context::use_app_context;
use crate::views::ViewRegistry;
use leptos::*;
use leptos_router::use_location;
use roadmap_core::{Location, Navigation, NavigationOutcome};
use tracing::warn;

#[component]
pub fn RouterView() -> impl IntoView {
    let ctx = use_app_context();
    let location = use_location();
    let (navigation, set_navigation) = create_signal(None::<Navigation>);
    let previous = store_value(None::<Location>);

    let href = create_memo(move |_| {
        format!(
            "{}{}{}",
            location.pathname.get(),
            with_prefix('?', location.search.get()),
            with_prefix('#', location.hash.get()),
        )
    });

    let router = ctx.router.clone();
    let driver = ctx.scroll.clone();
    create_effect(move |_| {
        let href = href.get();
        let to = match Location::parse(&href) {
            Ok(to) => to,
            Err(e) => {
                warn!("Ignoring navigation: {}", e);
                return;
            }
        };

        let from = previous.get_value();
        let saved = driver.begin_navigation(from.as_ref(), &to);
        let nav = router.navigate(&to, from.as_ref(), saved);
        previous.set_value(Some(to));

        set_navigation.set(Some(nav.clone()));
        driver.schedule(router.clone(), nav);
    });

    let views = ctx.views.clone();
    move || {
        navigation.with(|nav| match nav {
            Some(nav) => render_outcome(&views, &nav.outcome),
            None => ().into_view(),
        })
    }
}

fn render_outcome(views: &ViewRegistry, outcome: &NavigationOutcome) -> View {
    match outcome {
        NavigationOutcome::Render { name, view, props } => views
            .render(view, props.clone())
            .unwrap_or_else(|| view! { <UnboundRoute name=name.clone()/> }.into_view()),
        NavigationOutcome::NotFound { path } => view! { <NotFound path=path.clone()/> }.into_view(),
        NavigationOutcome::MissingView { name } => {
            view! { <UnboundRoute name=name.clone()/> }.into_view()
        }
        NavigationOutcome::InvalidProps { name, message } => view! {
            <InvalidPropsView name=name.clone() message=message.clone()/>
        }
        .into_view(),
    }
}

/// Ensure a non-empty URL part carries its delimiter.
fn with_prefix(prefix: char, value: String) -> String {
    if value.is_empty() || value.starts_with(prefix) {
        value
    } else {
        format!("{}{}", prefix, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_prefix() {
        assert_eq!(with_prefix('?', String::new()), "");
        assert_eq!(with_prefix('?', "a=1".to_string()), "?a=1");
        assert_eq!(with_prefix('#', "#about".to_string()), "#about");
    }
}
