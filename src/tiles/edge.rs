//! Named tile sides with a directional matching relation
//!
//! An edge declared without a match list accepts only itself. An edge with a
//! match list accepts exactly the edges named in it; self-matching is not
//! implied. The relation is not symmetric: `a.matches(b)` says nothing about
//! `b.matches(a)`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// One side of a tile type
#[derive(Debug, Clone)]
pub struct Edge {
    name: Arc<str>,
    accepts: Arc<[Arc<str>]>,
}

impl Edge {
    /// Edge that matches only itself
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            accepts: Arc::from(Vec::new()),
        }
    }

    /// Edge that matches exactly the named edges
    ///
    /// An empty list falls back to matching only itself.
    pub fn with_matches<'a, I>(name: &str, accepts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            name: name.into(),
            accepts: accepts.into_iter().map(Arc::<str>::from).collect(),
        }
    }

    /// Name identifying this edge
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names this edge declares a match with (empty means "itself only")
    pub fn accepted_names(&self) -> impl Iterator<Item = &str> {
        self.accepts.iter().map(|name| &**name)
    }

    /// Whether this edge accepts `other` placed against it
    pub fn matches(&self, other: &Self) -> bool {
        if self.accepts.is_empty() {
            self.name == other.name
        } else {
            self.accepts.iter().any(|name| *name == other.name)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
