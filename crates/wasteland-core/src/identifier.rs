//! Namespaced content identifiers, e.g. `"wasteland:wasteland_dirt"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::VANILLA_NAMESPACE;

/// A namespaced identifier for blocks, items, biomes, and entity types.
///
/// The namespace tells which content pack declared the thing; the path names
/// it within that pack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier {
    namespace: String,
    path: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("empty namespace in identifier {0:?}")]
    EmptyNamespace(String),

    #[error("empty path in identifier {0:?}")]
    EmptyPath(String),
}

impl Identifier {
    /// Build an identifier from parts. Both parts are taken as-is.
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// Shorthand for a built-in engine identifier.
    pub fn vanilla(path: impl Into<String>) -> Self {
        Self::new(VANILLA_NAMESPACE, path)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    /// Parse `"namespace:path"`. A bare `"path"` defaults to the vanilla
    /// namespace, matching how the engine resolves unprefixed names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((ns, path)) => {
                if ns.is_empty() {
                    return Err(IdentifierError::EmptyNamespace(s.to_string()));
                }
                if path.is_empty() {
                    return Err(IdentifierError::EmptyPath(s.to_string()));
                }
                Ok(Self::new(ns, path))
            }
            None => {
                if s.is_empty() {
                    return Err(IdentifierError::EmptyPath(s.to_string()));
                }
                Ok(Self::vanilla(s))
            }
        }
    }
}

impl TryFrom<String> for Identifier {
    type Error = IdentifierError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> String {
        id.to_string()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}
