//! Source position tracking
//!
//! Records where each token or node began and ended (character offset,
//! line, column) by sampling a host [`Cursor`] before and after the host
//! consumes the characters, and attaches the resulting [`PositionRange`]
//! to the produced item.
//!
//! - [`Location`]: one `{offset, line, column}` sample
//! - [`PositionRange`]: start/end pair plus optional source label
//! - [`Marker`]: start sample waiting for its end
//! - [`PositionPlugin`] / [`Tracked`]: automatic marking of a lexer's output

pub mod cursor;
pub mod emitter;
pub mod error;
pub mod location;
pub mod marker;
pub mod plugin;
pub mod positioned;
pub mod range;

pub use cursor::{Capability, Cursor};
pub use emitter::{Emitter, POSITION_EVENT};
pub use error::PositionError;
pub use location::Location;
pub use marker::{mark, mark_with_cursor, Marker};
pub use plugin::{create_plugin, decorate, PositionPlugin, Produce, Tracked};
pub use positioned::{Positioned, Positions};
pub use range::PositionRange;

use posmark_config::DEFAULT_PROPERTY;

/// Outcome of [`resolve`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Positioning {
    /// A cursor was supplied: its start location is already captured
    Marker(Marker),
    /// No cursor: a plugin descriptor to install later
    Plugin(PositionPlugin),
}

/// Single entry point covering both uses
///
/// With a cursor, starts a marker under `name` (default `"position"`).
/// Without one, returns a plugin descriptor carrying `name`.
pub fn resolve<C: Cursor + ?Sized>(cursor: Option<&C>, name: Option<&str>) -> Positioning {
    let name = name.unwrap_or(DEFAULT_PROPERTY);
    match cursor {
        Some(cursor) => Positioning::Marker(Marker::start(cursor, name)),
        None => Positioning::Plugin(PositionPlugin::new(name)),
    }
}
