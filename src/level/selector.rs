//! Picking levels out of a level set by name or id.

use super::Level;
use crate::{Error, Result};
use std::fmt;

/// Selects exactly one level by an exact match on its name or its id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelSelector {
    Name(String),
    Id(String),
}

impl LevelSelector {
    /// Build a selector from optional command-line values.
    ///
    /// The name wins when both are given; neither given is an error.
    pub fn from_options(name: Option<String>, id: Option<String>) -> Result<Self> {
        match (name, id) {
            (Some(name), _) => Ok(Self::Name(name)),
            (None, Some(id)) => Ok(Self::Id(id)),
            (None, None) => Err(Error::MissingSelector),
        }
    }

    /// Check whether a level matches this selector.
    pub fn matches(&self, level: &Level) -> bool {
        match self {
            Self::Name(name) => level.name == *name,
            Self::Id(id) => level.id == *id,
        }
    }
}

impl fmt::Display for LevelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "name '{}'", name),
            Self::Id(id) => write!(f, "id '{}'", id),
        }
    }
}

/// Narrows a level set for listing and plotting.
///
/// Every criterion that is set must match; an empty filter matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelFilter {
    pub name: Option<String>,
    pub id: Option<String>,
}

impl LevelFilter {
    pub fn new(name: Option<String>, id: Option<String>) -> Self {
        Self { name, id }
    }

    /// A filter that matches every level.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn matches(&self, level: &Level) -> bool {
        self.name.as_ref().map_or(true, |name| level.name == *name)
            && self.id.as_ref().map_or(true, |id| level.id == *id)
    }
}
