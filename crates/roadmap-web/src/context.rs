//! Application context built once at startup and injected into views

use crate::api::RoadmapApi;
use crate::scroll::ScrollDriver;
use crate::views::ViewRegistry;
use leptos::*;
use roadmap_core::{CoreResult, NavigationRouter, RouterConfig};
use std::rc::Rc;

#[derive(Clone)]
pub struct AppContext {
    pub router: Rc<NavigationRouter>,
    pub views: Rc<ViewRegistry>,
    pub api: RoadmapApi,
    pub scroll: ScrollDriver,
}

impl AppContext {
    pub fn new() -> CoreResult<Self> {
        let config = RouterConfig::default();
        let scroll = ScrollDriver::new(config.scroll_memory_capacity);
        let router = NavigationRouter::with_app_routes(config)?;

        Ok(Self {
            router: Rc::new(router),
            views: Rc::new(ViewRegistry::app_views()),
            api: RoadmapApi::from_env(),
            scroll,
        })
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
