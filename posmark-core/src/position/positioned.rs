//! Attachment target for completed positions

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use posmark_config::DEFAULT_PROPERTY;

use super::range::PositionRange;

/// A token or node that can hold named position ranges
pub trait Positioned {
    /// Store `position` under `name`, replacing whatever was there
    fn set_position(&mut self, name: &str, position: PositionRange);

    /// Range stored under `name`
    fn get_position(&self, name: &str) -> Option<&PositionRange>;
}

/// Named position ranges, ready to embed in a host token or node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Positions(BTreeMap<String, PositionRange>);

impl Positions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&PositionRange> {
        self.0.get(name)
    }

    /// Range under the default property name
    pub fn primary(&self) -> Option<&PositionRange> {
        self.get(DEFAULT_PROPERTY)
    }

    pub fn insert(&mut self, name: impl Into<String>, position: PositionRange) -> Option<PositionRange> {
        self.0.insert(name.into(), position)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PositionRange)> {
        self.0.iter().map(|(name, range)| (name.as_str(), range))
    }
}

impl Positioned for Positions {
    fn set_position(&mut self, name: &str, position: PositionRange) {
        self.insert(name, position);
    }

    fn get_position(&self, name: &str) -> Option<&PositionRange> {
        self.get(name)
    }
}
