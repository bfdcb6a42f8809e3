//! Navigation requests parsed from hrefs

use crate::{CoreError, CoreResult};
use std::fmt;
use std::str::FromStr;
use url::{form_urlencoded, Url};

const ORIGIN: &str = "http://localhost";

/// A parsed navigation target: path, decoded query pairs and fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
    hash: Option<String>,
}

impl Location {
    /// Location for a bare path with no query or fragment.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') { path } else { format!("/{}", path) };
        Self {
            path,
            query: Vec::new(),
            hash: None,
        }
    }

    /// Parse a root-relative (`/path?query#hash`) or absolute href.
    pub fn parse(href: &str) -> CoreResult<Self> {
        let href = href.trim();
        if href.is_empty() {
            return Err(CoreError::InvalidLocation("empty href".to_string()));
        }

        // Prefixing the origin keeps a leading `//` in the path instead of
        // reading it as a host.
        let absolute = if href.starts_with('/') {
            format!("{}{}", ORIGIN, href)
        } else {
            href.to_string()
        };
        let url = Url::parse(&absolute)
            .map_err(|e| CoreError::InvalidLocation(format!("{}: {}", href, e)))?;

        let query = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let hash = url
            .fragment()
            .filter(|f| !f.is_empty())
            .map(|f| format!("#{}", f));

        Ok(Self {
            path: url.path().to_string(),
            query,
            hash,
        })
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        let hash = hash.into();
        let hash = hash.trim_start_matches('#');
        self.hash = if hash.is_empty() { None } else { Some(format!("#{}", hash)) };
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value for `key`, if present.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Fragment including its leading `#`.
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// Canonical root-relative href.
    pub fn href(&self) -> String {
        let mut href = self.path.clone();
        if !self.query.is_empty() {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.query.iter())
                .finish();
            href.push('?');
            href.push_str(&encoded);
        }
        if let Some(hash) = &self.hash {
            href.push_str(hash);
        }
        href
    }
}

impl FromStr for Location {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.href())
    }
}
