//! Route Table
//!
//! Maps a request path to the home page, one of the resource views, or
//! not-found, with the same path matcher the page router uses.

use leptos_router::Matcher;
use serde::Serialize;
use std::fmt;

use crate::resource::Resource;

/// A front-end route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", content = "resource", rename_all = "snake_case")]
pub enum Route {
    Home,
    Resource(Resource),
    NotFound(String),
}

impl Route {
    /// Resolve a path; empty segments and the query string are ignored
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();

        if Matcher::new("/").test(path).is_some() {
            return Route::Home;
        }

        Matcher::new("/:resource")
            .test(path)
            .and_then(|matched| {
                let segment = matched.params.get("resource")?;
                Resource::ALL.into_iter().find(|r| r.segment() == segment)
            })
            .map(Route::Resource)
            .unwrap_or_else(|| Route::NotFound(path.to_string()))
    }

    pub fn resource(&self) -> Option<Resource> {
        match self {
            Route::Resource(resource) => Some(*resource),
            _ => None,
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Resource(resource) => resource.route(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("home"),
            Route::Resource(resource) => write!(f, "{} view", resource),
            Route::NotFound(path) => write!(f, "not found ({})", path),
        }
    }
}
