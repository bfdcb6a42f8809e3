//! Routed pages

mod main_page;
mod roadmap_page;

pub use main_page::MainPage;
pub use roadmap_page::RoadMapPage;
