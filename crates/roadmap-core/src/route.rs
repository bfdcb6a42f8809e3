//! Route table: path patterns, named entries and ordered matching

use crate::props::PropsTransform;
use crate::{CoreError, CoreResult};
use std::collections::{BTreeMap, HashSet};

/// Captured `:name` path segments.
pub type RouteParams = BTreeMap<String, String>;

/// Route names used by the app table
pub mod names {
    pub const HOME: &str = "Home";
    pub const NAVBAR: &str = "NavbarRoute";
    pub const ROADMAP: &str = "Roadmap";
    pub const ROADMAP_PLACEHOLDER: &str = "roadmapw";
}

/// View keys resolved by the frontend's view registry
pub mod views {
    pub const MAIN_PAGE: &str = "MainPage";
    pub const NAVBAR: &str = "Navbar";
    pub const ROADMAP_PAGE: &str = "RoadMapPage";
}

/// Query parameter carrying the roadmap page's structured input
pub const USER_INPUT_PARAM: &str = "userInput";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A route path such as `/roadmap` or `/scans/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(raw: &str) -> CoreResult<Self> {
        if !raw.starts_with('/') {
            return Err(CoreError::InvalidPattern(raw.to_string()));
        }

        let mut segments = Vec::new();
        for part in raw.split('/').filter(|s| !s.is_empty()) {
            match part.strip_prefix(':') {
                Some("") => return Err(CoreError::InvalidPattern(raw.to_string())),
                Some(name) => segments.push(Segment::Param(name.to_string())),
                None => segments.push(Segment::Static(part.to_string())),
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match a request path, returning captured params on success.
    /// Empty segments (and so trailing slashes) are ignored.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(s) if s == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(params)
    }

    /// Static text per segment, `None` where a param sits.
    fn shape(&self) -> Vec<Option<&str>> {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Static(s) => Some(s.as_str()),
                Segment::Param(_) => None,
            })
            .collect()
    }
}

/// Static mapping from a path pattern to a named view.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pattern: PathPattern,
    name: String,
    view: Option<String>,
    props: PropsTransform,
}

impl RouteEntry {
    pub fn new(path: &str, name: &str) -> CoreResult<Self> {
        Ok(Self {
            pattern: PathPattern::parse(path)?,
            name: name.to_string(),
            view: None,
            props: PropsTransform::None,
        })
    }

    pub fn view(mut self, key: &str) -> Self {
        self.view = Some(key.to_string());
        self
    }

    pub fn props(mut self, transform: PropsTransform) -> Self {
        self.props = transform;
        self
    }

    pub fn path(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `None` for a named-but-unbound entry.
    pub fn view_key(&self) -> Option<&str> {
        self.view.as_deref()
    }

    pub fn props_transform(&self) -> &PropsTransform {
        &self.props
    }
}

/// Result of a successful [`RouteTable::resolve`].
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    pub entry: &'a RouteEntry,
    pub params: RouteParams,
}

/// Ordered, validated set of route entries. Immutable once built.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> CoreResult<Self> {
        let mut names = HashSet::new();
        for (i, entry) in entries.iter().enumerate() {
            if !names.insert(entry.name()) {
                return Err(CoreError::DuplicateRouteName(entry.name().to_string()));
            }

            let shape = entry.pattern.shape();
            if let Some(existing) = entries[..i].iter().find(|e| e.pattern.shape() == shape) {
                return Err(CoreError::AmbiguousRoute {
                    path: entry.path().to_string(),
                    existing: existing.path().to_string(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// First entry whose pattern matches `path`. Anything after `?` or `#`
    /// is ignored.
    pub fn resolve(&self, path: &str) -> CoreResult<RouteMatch<'_>> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        self.entries
            .iter()
            .find_map(|entry| {
                entry
                    .pattern
                    .matches(path)
                    .map(|params| RouteMatch { entry, params })
            })
            .ok_or_else(|| CoreError::NotFound(path.to_string()))
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The application's route table.
pub fn app_routes() -> CoreResult<RouteTable> {
    RouteTable::new(vec![
        RouteEntry::new("/", names::HOME)?.view(views::MAIN_PAGE),
        RouteEntry::new("/navbar", names::NAVBAR)?.view(views::NAVBAR),
        RouteEntry::new("/roadmap", names::ROADMAP)?
            .view(views::ROADMAP_PAGE)
            .props(PropsTransform::QueryJson {
                param: USER_INPUT_PARAM.to_string(),
            }),
        // Declared without a view; renders the unbound-route fallback.
        RouteEntry::new("/roadmap1", names::ROADMAP_PLACEHOLDER)?,
    ])
}
