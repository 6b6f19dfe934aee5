//! Posmark Core - source position tracking (pure logic, no IO)
//!
//! Contains the position tracker and a reference lexer host.
//! Only operates on in-memory data structures, no file IO or terminal output.
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod kit;
pub mod position;

// Re-export common types
pub use kit::lexer::{RuleLexer, TextCursor, Token};
pub use position::{
    create_plugin, mark, mark_with_cursor, resolve, Capability, Cursor, Emitter, Location, Marker,
    PositionError, PositionPlugin, PositionRange, Positioned, Positioning, Positions, Produce,
    Tracked, POSITION_EVENT,
};

// Re-export config types from posmark-config
pub use posmark_config::{Baseline, CursorConfig, PositionConfig, Phase};
