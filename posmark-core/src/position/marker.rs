//! Position-marker factory
//!
//! A [`Marker`] holds the start location sampled when it was created.
//! Completing it samples the end location, attaches the finished
//! [`PositionRange`] to a token or node and notifies the cursor's emitter.
//!
//! The marker does not borrow the cursor, so the host keeps full mutable
//! access while it consumes the token's characters:
//!
//! ```rust,ignore
//! let marker = mark(&lexer);
//! let token = lexer.consume_word();
//! let token = marker.complete(&lexer, token);
//! ```

use tracing::{debug, trace};

use posmark_config::DEFAULT_PROPERTY;

use super::cursor::Cursor;
use super::emitter::POSITION_EVENT;
use super::location::Location;
use super::positioned::Positioned;
use super::range::PositionRange;

/// Start location plus the property name the range will be stored under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    start: Location,
    name: String,
}

impl Marker {
    /// Sample the start location now
    pub fn start<C: Cursor + ?Sized>(cursor: &C, name: impl Into<String>) -> Self {
        let start = cursor.location();
        let name = name.into();
        trace!(target: "posmark::position",
            property = %name,
            offset = start.offset,
            line = start.line,
            column = start.column,
            "Marked start"
        );
        Self { start, name }
    }

    /// Property name the range is attached under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location captured when the marker was created
    pub fn start_location(&self) -> Location {
        self.start
    }

    /// Build the range ending at the cursor's current location
    ///
    /// Nothing is attached or emitted.
    pub fn finish<C: Cursor + ?Sized>(&self, cursor: &C) -> PositionRange {
        let end = cursor.location();
        PositionRange::new(self.start, end, cursor.source().map(str::to_owned))
    }

    /// Attach a fresh range to `item` in place and return a copy of it
    pub fn attach<C, T>(&self, cursor: &C, item: &mut T) -> PositionRange
    where
        C: Cursor + ?Sized,
        T: Positioned,
    {
        let position = self.finish(cursor);
        trace!(target: "posmark::position",
            property = %self.name,
            start = position.start.offset,
            end = position.end.offset,
            "Completed position"
        );
        item.set_position(&self.name, position.clone());

        if let Some(emitter) = cursor.emitter() {
            debug!(target: "posmark::position", property = %self.name, "Emitting position event");
            emitter.emit(POSITION_EVENT, &*item);
        }

        position
    }

    /// Attach a fresh range to `item` and hand the same item back
    pub fn complete<C, T>(&self, cursor: &C, mut item: T) -> T
    where
        C: Cursor + ?Sized,
        T: Positioned,
    {
        self.attach(cursor, &mut item);
        item
    }
}

/// Start a marker that attaches under the default `"position"` property
pub fn mark<C: Cursor + ?Sized>(cursor: &C) -> Marker {
    Marker::start(cursor, DEFAULT_PROPERTY)
}

/// Start a marker that attaches under `name`
pub fn mark_with_cursor<C: Cursor + ?Sized>(cursor: &C, name: &str) -> Marker {
    Marker::start(cursor, name)
}
