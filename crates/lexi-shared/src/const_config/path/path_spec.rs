use std::fmt::Display;

use reqwest::Method;

use crate::id::DbId;

/// An endpoint of the API relative to the base url.
///
/// The path may contain `{id}` placeholders which are filled in order by
/// [`PathSpec::with_ids`]
#[derive(Debug, Clone)]
pub struct PathSpec {
    pub path: &'static str,
    pub method: Method,
}

/// A [`PathSpec`] with all of its placeholders filled in, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub path: String,
}

impl PathSpec {
    const PLACEHOLDER: &'static str = "{id}";

    pub const fn get(path: &'static str) -> Self {
        Self {
            path,
            method: Method::GET,
        }
    }

    pub const fn post(path: &'static str) -> Self {
        Self {
            path,
            method: Method::POST,
        }
    }

    pub const fn put(path: &'static str) -> Self {
        Self {
            path,
            method: Method::PUT,
        }
    }

    pub const fn delete(path: &'static str) -> Self {
        Self {
            path,
            method: Method::DELETE,
        }
    }

    /// For paths without placeholders
    pub fn route(&self) -> Route {
        self.with_ids(&[])
    }

    pub fn with_id(&self, id: DbId) -> Route {
        self.with_ids(&[id])
    }

    pub fn with_ids(&self, ids: &[DbId]) -> Route {
        let mut path = String::with_capacity(self.path.len() + ids.len() * 4);
        let mut remaining = self.path;
        let mut ids = ids.iter();
        while let Some(idx) = remaining.find(Self::PLACEHOLDER) {
            path.push_str(&remaining[..idx]);
            match ids.next() {
                Some(id) => path.push_str(&id.to_string()),
                None => {
                    debug_assert!(false, "not enough ids supplied for {:?}", self.path);
                    path.push_str(Self::PLACEHOLDER);
                }
            }
            remaining = &remaining[idx + Self::PLACEHOLDER.len()..];
        }
        path.push_str(remaining);
        debug_assert!(
            ids.next().is_none(),
            "more ids supplied than {:?} has placeholders",
            self.path
        );
        Route {
            method: self.method.clone(),
            path,
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
