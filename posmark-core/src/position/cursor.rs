//! Host cursor capability
//!
//! The tracker never advances a cursor. It only reads the three counters,
//! the remaining input and the optional capabilities declared here.

use super::emitter::Emitter;
use super::location::Location;

/// Marker a host declares so the plugin accepts it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Lexer,
    Tokenizer,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Lexer => "lexer",
            Capability::Tokenizer => "tokenizer",
        }
    }

    /// Parse the string discriminator used by hosts (`"lexer"` / `"tokenizer"`)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lexer" => Some(Capability::Lexer),
            "tokenizer" => Some(Capability::Tokenizer),
            _ => None,
        }
    }
}

/// Read-only view of a host's consumption state
///
/// `offset` counts characters from the start of the input and is 0-based.
/// `line` and `column` start at the host's configured baseline. All three
/// only ever grow.
pub trait Cursor {
    /// Absolute character offset
    fn offset(&self) -> usize;

    /// Current line
    fn line(&self) -> usize;

    /// Current column
    fn column(&self) -> usize;

    /// Unconsumed input
    fn remaining(&self) -> &str;

    /// Capability marker checked by [`super::PositionPlugin::install`]
    fn capability(&self) -> Option<Capability> {
        None
    }

    /// Source label copied into every position range
    fn source(&self) -> Option<&str> {
        None
    }

    /// Observer notified when a position is completed
    ///
    /// `None` means emission is absent or disabled; both are silent.
    fn emitter(&self) -> Option<&dyn Emitter> {
        None
    }

    /// Snapshot of the current location
    fn location(&self) -> Location {
        Location::new(self.offset(), self.line(), self.column())
    }
}
