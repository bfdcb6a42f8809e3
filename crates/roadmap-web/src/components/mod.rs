//! Reusable components

mod fallback;
mod flow_diagram;
mod navbar;

pub use fallback::{InvalidPropsView, NotFound, UnboundRoute};
pub use flow_diagram::FlowDiagram;
pub use navbar::Navbar;
