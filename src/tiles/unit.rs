//! Opaque cell content tokens

use std::fmt;
use std::sync::Arc;

/// Content of one cell inside a tile definition, compared by name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Unit {
    name: Arc<str>,
}

impl Unit {
    /// Create a unit with the given name
    pub fn new(name: &str) -> Self {
        Self { name: name.into() }
    }

    /// Name identifying this unit
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
