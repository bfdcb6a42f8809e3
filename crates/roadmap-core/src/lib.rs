//! Career Roadmap Navigation Core
//!
//! This crate provides the navigation router for the roadmap single-page app:
//! the static route table, query-derived view props and the scroll policy
//! applied once a navigation settles. It also carries the roadmap model
//! shared by the web client and the generation backend.

pub mod config;
pub mod coordinator;
pub mod location;
pub mod props;
pub mod roadmap;
pub mod route;
pub mod router;
pub mod scroll;

use thiserror::Error;

pub use config::{MalformedQueryPolicy, RouterConfig, ScrollConfig};
pub use coordinator::{NavigationId, NavigationPhase, ScrollCoordinator};
pub use location::Location;
pub use props::{compute_props, Props, PropsTransform};
pub use roadmap::{ErrorBody, GenerateRequest, LabelUpdate, NodeLabel, Roadmap, RoadmapEdge, RoadmapNode};
pub use route::{app_routes, PathPattern, RouteEntry, RouteMatch, RouteParams, RouteTable};
pub use router::{Navigation, NavigationOutcome, NavigationRouter};
pub use scroll::{
    compute_scroll_target, ElementProbe, PendingScroll, ScrollBehavior, ScrollDecision,
    ScrollMemory, ScrollPosition, ScrollTarget,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("No route matches path: {0}")]
    NotFound(String),

    #[error("Route '{0}' has no view bound")]
    MissingView(String),

    #[error("Malformed query parameter '{param}': {message}")]
    Parse { param: String, message: String },

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Invalid route pattern: {0}")]
    InvalidPattern(String),

    #[error("Duplicate route name: {0}")]
    DuplicateRouteName(String),

    #[error("Route '{path}' is ambiguous with '{existing}'")]
    AmbiguousRoute { path: String, existing: String },
}

pub type CoreResult<T> = Result<T, CoreError>;
