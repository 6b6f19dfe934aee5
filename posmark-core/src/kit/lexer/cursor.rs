//! Text cursor
//!
//! Owns the input and tracks consumption in three coordinate systems:
//! - byte position: slicing the input (internal)
//! - offset: characters consumed so far, 0-based
//! - line / column: human readable, starting at the configured baseline

use tracing::trace;

use posmark_config::CursorConfig;

use crate::position::{Capability, Cursor, Emitter};

/// Monotonic cursor over an owned input string
///
/// There is no way to rewind; a new input needs a new cursor.
pub struct TextCursor {
    input: String,
    /// Byte index of the first unconsumed character
    byte_pos: usize,
    offset: usize,
    line: usize,
    column: usize,
    config: CursorConfig,
    capability: Option<Capability>,
    emitter: Option<Box<dyn Emitter>>,
}

impl TextCursor {
    /// Cursor with the default configuration (1-based lines and columns)
    pub fn new(input: impl Into<String>) -> Self {
        Self::with_config(input, CursorConfig::default())
    }

    pub fn with_config(input: impl Into<String>, config: CursorConfig) -> Self {
        let baseline = config.baseline.as_usize();
        Self {
            input: input.into(),
            byte_pos: 0,
            offset: 0,
            line: baseline,
            column: baseline,
            config,
            capability: None,
            emitter: None,
        }
    }

    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    pub fn set_source(&mut self, source: Option<String>) {
        self.config.source = source;
    }

    /// Enable or disable event emission without dropping the emitter
    pub fn set_emit_events(&mut self, enabled: bool) {
        self.config.emit_events = enabled;
    }

    pub fn set_emitter(&mut self, emitter: impl Emitter + 'static) {
        self.emitter = Some(Box::new(emitter));
    }

    pub fn clear_emitter(&mut self) {
        self.emitter = None;
    }

    pub fn set_capability(&mut self, capability: Option<Capability>) {
        self.capability = capability;
    }

    /// Everything consumed so far
    pub fn consumed(&self) -> &str {
        &self.input[..self.byte_pos]
    }

    pub fn is_eof(&self) -> bool {
        self.byte_pos >= self.input.len()
    }

    /// Consume `len` bytes and return them
    ///
    /// `len` is clamped to the remaining input and rounded up to the next
    /// character boundary.
    pub fn consume(&mut self, len: usize) -> &str {
        let start = self.byte_pos;
        let mut end = start.saturating_add(len).min(self.input.len());
        while !self.input.is_char_boundary(end) {
            end += 1;
        }

        let text = &self.input[start..end];
        let chars = text.chars().count();
        match text.rfind('\n') {
            Some(index) => {
                self.line += text.matches('\n').count();
                self.column = text[index + 1..].chars().count() + self.config.baseline.as_usize();
            }
            None => self.column += chars,
        }
        self.offset += chars;
        self.byte_pos = end;

        trace!(target: "posmark::cursor",
            bytes = end - start,
            offset = self.offset,
            line = self.line,
            column = self.column,
            "Consumed input"
        );
        &self.input[start..end]
    }
}

impl Cursor for TextCursor {
    fn offset(&self) -> usize {
        self.offset
    }

    fn line(&self) -> usize {
        self.line
    }

    fn column(&self) -> usize {
        self.column
    }

    fn remaining(&self) -> &str {
        &self.input[self.byte_pos..]
    }

    fn capability(&self) -> Option<Capability> {
        self.capability
    }

    fn source(&self) -> Option<&str> {
        self.config.source.as_deref()
    }

    fn emitter(&self) -> Option<&dyn Emitter> {
        if self.config.emit_events {
            self.emitter.as_deref()
        } else {
            None
        }
    }
}

impl std::fmt::Debug for TextCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextCursor")
            .field("offset", &self.offset)
            .field("line", &self.line)
            .field("column", &self.column)
            .field("remaining", &self.remaining())
            .field("config", &self.config)
            .field("capability", &self.capability)
            .field("has_emitter", &self.emitter.is_some())
            .finish()
    }
}
