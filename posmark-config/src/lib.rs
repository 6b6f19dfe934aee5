//! posmark Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all posmark crates.

use serde::{Deserialize, Serialize};

/// Property name used when a caller does not pick one.
pub const DEFAULT_PROPERTY: &str = "position";

/// Numbering origin for lines and columns.
///
/// Offsets are always 0-based; only `line` and `column` follow the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Baseline {
    Zero,
    #[default]
    One,
}

impl Baseline {
    /// Numeric value of the first line / column
    pub fn as_usize(&self) -> usize {
        match self {
            Baseline::Zero => 0,
            Baseline::One => 1,
        }
    }

    /// Parse `"0"`, `"1"`, `"zero"` or `"one"` (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "0" | "zero" => Some(Baseline::Zero),
            "1" | "one" => Some(Baseline::One),
            _ => None,
        }
    }
}

/// Configuration for a host cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Where line and column numbering starts
    pub baseline: Baseline,
    /// Source label copied into every position range
    pub source: Option<String>,
    /// Whether completed positions are announced to the cursor's emitter
    pub emit_events: bool,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            baseline: Baseline::One,
            source: None,
            emit_events: true,
        }
    }
}

/// Configuration for position marking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionConfig {
    /// Property the completed range is attached under
    pub property: String,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            property: DEFAULT_PROPERTY.to_string(),
        }
    }
}

/// On-disk configuration file (JSON)
///
/// Every field is optional; missing fields fall back to the defaults above.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub baseline: Option<Baseline>,
    pub property: Option<String>,
    pub source: Option<String>,
    pub emit_events: Option<bool>,
    /// "silent", "error", "warn", "info", "debug", "trace"
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Overlay this file onto cursor / position defaults
    pub fn apply(&self, cursor: &mut CursorConfig, position: &mut PositionConfig) {
        if let Some(baseline) = self.baseline {
            cursor.baseline = baseline;
        }
        if let Some(source) = &self.source {
            cursor.source = Some(source.clone());
        }
        if let Some(emit) = self.emit_events {
            cursor.emit_events = emit;
        }
        if let Some(property) = &self.property {
            position.property = property.clone();
        }
    }
}

/// Execution phase enum for phase-specific log targets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Cursor,
    Position,
    Lexer,
    Cli,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Cursor => "cursor",
            Phase::Position => "position",
            Phase::Lexer => "lexer",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("posmark::{}", self.as_str())
    }
}
