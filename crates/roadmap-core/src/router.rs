//! Navigation router: route resolution, props and scroll decision per navigation

use crate::config::{MalformedQueryPolicy, RouterConfig};
use crate::coordinator::{NavigationId, ScrollCoordinator};
use crate::location::Location;
use crate::props::{compute_props, Props};
use crate::route::{app_routes, RouteEntry, RouteMatch, RouteTable};
use crate::scroll::{compute_scroll_target, ScrollDecision, ScrollPosition};
use crate::{CoreError, CoreResult};
use tracing::{debug, info, warn};

/// What the outlet should render for a navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationOutcome {
    Render {
        name: String,
        view: String,
        props: Props,
    },
    NotFound {
        path: String,
    },
    /// The route is declared but bound to no view
    MissingView {
        name: String,
    },
    /// Props failed to decode under [`MalformedQueryPolicy::ErrorView`]
    InvalidProps {
        name: String,
        message: String,
    },
}

impl NavigationOutcome {
    pub fn route_name(&self) -> Option<&str> {
        match self {
            NavigationOutcome::Render { name, .. }
            | NavigationOutcome::MissingView { name }
            | NavigationOutcome::InvalidProps { name, .. } => Some(name),
            NavigationOutcome::NotFound { .. } => None,
        }
    }
}

/// A single resolved navigation.
#[derive(Debug, Clone)]
pub struct Navigation {
    pub id: NavigationId,
    pub location: Location,
    pub outcome: NavigationOutcome,
    pub scroll: ScrollDecision,
}

/// Main router interface
pub struct NavigationRouter {
    table: RouteTable,
    config: RouterConfig,
    coordinator: ScrollCoordinator,
}

impl NavigationRouter {
    pub fn new(table: RouteTable, config: RouterConfig) -> Self {
        Self {
            table,
            config,
            coordinator: ScrollCoordinator::new(),
        }
    }

    /// Router over the application's route table
    pub fn with_app_routes(config: RouterConfig) -> CoreResult<Self> {
        Ok(Self::new(app_routes()?, config))
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn coordinator(&self) -> &ScrollCoordinator {
        &self.coordinator
    }

    pub fn resolve(&self, path: &str) -> CoreResult<RouteMatch<'_>> {
        self.table.resolve(path)
    }

    pub fn compute_props(&self, matched: &RouteMatch<'_>, location: &Location) -> CoreResult<Props> {
        compute_props(matched.entry, location, &matched.params)
    }

    pub fn compute_scroll_target(
        &self,
        to: &Location,
        from: Option<&Location>,
        saved: Option<ScrollPosition>,
    ) -> ScrollDecision {
        compute_scroll_target(to, from, saved, &self.config.scroll)
    }

    /// Resolve a navigation to `to`. Never fails: unmatched paths, unbound
    /// routes and malformed props all map to an outcome the outlet renders.
    pub fn navigate(
        &self,
        to: &Location,
        from: Option<&Location>,
        saved: Option<ScrollPosition>,
    ) -> Navigation {
        let id = self.coordinator.begin();
        let outcome = self.outcome_for(to);
        info!(navigation = id.get(), to = %to, route = outcome.route_name().unwrap_or("-"), "Navigating");

        Navigation {
            id,
            location: to.clone(),
            outcome,
            scroll: self.compute_scroll_target(to, from, saved),
        }
    }

    /// Mark a navigation settled once its scroll has been applied.
    pub fn complete(&self, id: NavigationId) -> bool {
        let completed = self.coordinator.complete(id);
        if !completed {
            debug!(navigation = id.get(), "Superseded navigation completed late");
        }
        completed
    }

    fn outcome_for(&self, to: &Location) -> NavigationOutcome {
        let matched = match self.table.resolve(to.path()) {
            Ok(matched) => matched,
            Err(e) => {
                warn!("{}", e);
                return NavigationOutcome::NotFound {
                    path: to.path().to_string(),
                };
            }
        };

        let entry: &RouteEntry = matched.entry;
        let Some(view) = entry.view_key() else {
            warn!("{}", CoreError::MissingView(entry.name().to_string()));
            return NavigationOutcome::MissingView {
                name: entry.name().to_string(),
            };
        };

        let props = match self.compute_props(&matched, to) {
            Ok(props) => props,
            Err(e) => match self.config.malformed_query {
                MalformedQueryPolicy::Fallback => {
                    warn!("{}; rendering '{}' with empty props", e, entry.name());
                    Props::new()
                }
                MalformedQueryPolicy::ErrorView => {
                    warn!("{}", e);
                    return NavigationOutcome::InvalidProps {
                        name: entry.name().to_string(),
                        message: e.to_string(),
                    };
                }
            },
        };

        NavigationOutcome::Render {
            name: entry.name().to_string(),
            view: view.to_string(),
            props,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::NavigationPhase;
    use crate::route::{names, views};
    use crate::scroll::ScrollTarget;
    use serde_json::json;

    fn router() -> NavigationRouter {
        NavigationRouter::with_app_routes(RouterConfig::default()).unwrap()
    }

    fn location(href: &str) -> Location {
        Location::parse(href).unwrap()
    }

    #[test]
    fn test_roadmap_renders_with_decoded_props() {
        let nav = router().navigate(&location("/roadmap?userInput=%7B%22a%22%3A1%7D"), None, None);
        match nav.outcome {
            NavigationOutcome::Render { name, view, props } => {
                assert_eq!(name, names::ROADMAP);
                assert_eq!(view, views::ROADMAP_PAGE);
                assert_eq!(serde_json::Value::Object(props), json!({ "a": 1 }));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_unknown_path_renders_not_found() {
        let nav = router().navigate(&location("/unknown-path"), None, None);
        assert_eq!(
            nav.outcome,
            NavigationOutcome::NotFound {
                path: "/unknown-path".to_string()
            }
        );
    }

    #[test]
    fn test_double_slash_paths_do_not_render_home() {
        let nav = router().navigate(&location("//unknown-path?x=1"), None, None);
        assert_eq!(
            nav.outcome,
            NavigationOutcome::NotFound {
                path: "//unknown-path".to_string()
            }
        );

        let nav = router().navigate(&location("//roadmap"), None, None);
        assert_eq!(nav.outcome.route_name(), Some(names::ROADMAP));
    }

    #[test]
    fn test_unbound_route_renders_missing_view() {
        let nav = router().navigate(&location("/roadmap1"), None, None);
        assert_eq!(
            nav.outcome,
            NavigationOutcome::MissingView {
                name: names::ROADMAP_PLACEHOLDER.to_string()
            }
        );
    }

    #[test]
    fn test_malformed_input_falls_back_to_empty_props() {
        let nav = router().navigate(&location("/roadmap?userInput=not-json"), None, None);
        match nav.outcome {
            NavigationOutcome::Render { props, .. } => assert!(props.is_empty()),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_malformed_input_error_view_policy() {
        let config = RouterConfig {
            malformed_query: MalformedQueryPolicy::ErrorView,
            ..Default::default()
        };
        let router = NavigationRouter::with_app_routes(config).unwrap();
        let nav = router.navigate(&location("/roadmap?userInput=not-json"), None, None);
        assert!(matches!(nav.outcome, NavigationOutcome::InvalidProps { .. }));
    }

    #[test]
    fn test_navigation_lifecycle() {
        let router = router();
        assert_eq!(router.coordinator().phase(), NavigationPhase::Idle);

        let first = router.navigate(&location("/"), None, None);
        let second = router.navigate(&location("/navbar"), Some(&first.location), None);
        assert_eq!(router.coordinator().phase(), NavigationPhase::Navigating(second.id));

        assert!(!router.complete(first.id));
        assert!(router.complete(second.id));
        assert_eq!(router.coordinator().phase(), NavigationPhase::Idle);
    }

    #[test]
    fn test_saved_position_passed_through() {
        let saved = ScrollPosition::new(10.0, 480.0);
        let nav = router().navigate(&location("/#about"), Some(&location("/roadmap")), Some(saved));
        assert_eq!(nav.scroll, ScrollDecision::Immediate(ScrollTarget::Saved(saved)));
    }
}
