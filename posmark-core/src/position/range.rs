//! Position range
//!
//! A completed `(start, end)` pair attached to a token or node.

use serde::{Deserialize, Serialize};

use super::location::Location;

/// Span of one token or node, plus the optional source label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionRange {
    pub start: Location,
    pub end: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl PositionRange {
    /// Build a range from two samples of the same cursor
    pub fn new(start: Location, end: Location, source: Option<String>) -> Self {
        debug_assert!(
            start.offset <= end.offset,
            "position range runs backwards: {} > {}",
            start.offset,
            end.offset
        );
        Self { start, end, source }
    }

    /// `[start.offset, end.offset]`
    pub fn range(&self) -> [usize; 2] {
        [self.start.offset, self.end.offset]
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Whether `offset` lies in `[start, end)`
    pub fn contains(&self, offset: usize) -> bool {
        self.start.offset <= offset && offset < self.end.offset
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for PositionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "{}:", source)?;
        }
        write!(f, "{}-{}", self.start, self.end)
    }
}
