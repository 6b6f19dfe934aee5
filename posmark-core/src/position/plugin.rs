//! Plugin adapter
//!
//! [`PositionPlugin::install`] checks a host's capability marker once and
//! wraps the host in [`Tracked`]. From then on every item produced through
//! `Tracked::advance` / `Tracked::lex` carries a position range. There is no
//! way back to an untracked host short of [`Tracked::get_mut`], which is
//! direct access to the host and is not marked.
//!
//! Hosts that expose production as a plain function value can use
//! [`decorate`] instead of implementing [`Produce`].

use tracing::{debug, trace, warn};

use posmark_config::{PositionConfig, DEFAULT_PROPERTY};

use super::cursor::Cursor;
use super::error::PositionError;
use super::emitter::Emitter;
use super::location::Location;
use super::marker::Marker;
use super::positioned::Positioned;

/// Production entry points of a lexer-shaped host
pub trait Produce: Cursor {
    type Item: Positioned;

    /// Produce the next item, or `None` at end of input / no match
    fn advance(&mut self) -> Option<Self::Item>;

    /// Run the single production rule named `rule`
    ///
    /// Hosts with a single entry point keep the default, which produces nothing.
    fn lex(&mut self, _rule: &str) -> Option<Self::Item> {
        None
    }
}

/// Mark, delegate, and complete if something was produced
fn produce_marked<C, T, F>(cursor: &mut C, name: &str, produce: F) -> Option<T>
where
    C: Cursor + ?Sized,
    T: Positioned,
    F: FnOnce(&mut C) -> Option<T>,
{
    let marker = Marker::start(&*cursor, name);
    match produce(cursor) {
        Some(item) => Some(marker.complete(&*cursor, item)),
        None => {
            trace!(target: "posmark::position", offset = cursor.offset(), "Nothing produced");
            None
        }
    }
}

/// Wrap a production function so every item it yields gets a position
///
/// The returned function behaves exactly like `produce` apart from the
/// attached range and the emitted event.
pub fn decorate<C, A, T, F>(name: impl Into<String>, mut produce: F) -> impl FnMut(&mut C, A) -> Option<T>
where
    C: Cursor + ?Sized,
    T: Positioned,
    F: FnMut(&mut C, A) -> Option<T>,
{
    let name = name.into();
    move |cursor: &mut C, args: A| produce_marked(cursor, &name, |host| produce(host, args))
}

/// Plugin descriptor: the property name installed hosts attach under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionPlugin {
    name: String,
}

impl Default for PositionPlugin {
    fn default() -> Self {
        Self::new(DEFAULT_PROPERTY)
    }
}

impl PositionPlugin {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn from_config(config: &PositionConfig) -> Self {
        Self::new(config.property.clone())
    }

    /// Default property name for markers of installed hosts
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Install onto `target`
    ///
    /// Fails with [`PositionError::InvalidTarget`] when the target does not
    /// declare itself a lexer or tokenizer.
    pub fn install<L: Produce>(&self, target: L) -> Result<Tracked<L>, PositionError> {
        let Some(capability) = target.capability() else {
            warn!(target: "posmark::position", "Refusing to install onto a target without capability marker");
            return Err(PositionError::InvalidTarget);
        };

        debug!(target: "posmark::position",
            capability = capability.as_str(),
            property = %self.name,
            "Installed position plugin"
        );
        Ok(Tracked {
            inner: target,
            name: self.name.clone(),
        })
    }
}

/// Build a plugin descriptor; `None` selects the default `"position"` name
pub fn create_plugin(name: Option<&str>) -> PositionPlugin {
    PositionPlugin::new(name.unwrap_or(DEFAULT_PROPERTY))
}

/// A host with the position plugin installed
pub struct Tracked<L> {
    inner: L,
    name: String,
}

impl<L: Produce> Tracked<L> {
    /// Current location of the host
    pub fn location(&self) -> Location {
        Location::capture(&self.inner)
    }

    /// Marker bound to the host, attaching under the plugin's name
    pub fn position(&self) -> Marker {
        Marker::start(&self.inner, self.name.as_str())
    }

    /// Marker bound to the host, attaching under `name`
    pub fn position_named(&self, name: &str) -> Marker {
        Marker::start(&self.inner, name)
    }

    /// Property name configured by the plugin
    pub fn property(&self) -> &str {
        &self.name
    }

    /// Decorated [`Produce::advance`]
    pub fn advance(&mut self) -> Option<L::Item> {
        produce_marked(&mut self.inner, &self.name, L::advance)
    }

    /// Decorated [`Produce::lex`]
    pub fn lex(&mut self, rule: &str) -> Option<L::Item> {
        produce_marked(&mut self.inner, &self.name, |host| host.lex(rule))
    }

    /// Advance until the input is exhausted or nothing matches
    pub fn tokenize(&mut self) -> Vec<L::Item> {
        let mut items = Vec::new();
        while !self.inner.remaining().is_empty() {
            match self.advance() {
                Some(item) => items.push(item),
                None => break,
            }
        }
        items
    }

    /// Direct access to the host; production calls made here are not marked
    pub fn get_mut(&mut self) -> &mut L {
        &mut self.inner
    }
}

impl<L: Produce> Cursor for Tracked<L> {
    fn offset(&self) -> usize {
        self.inner.offset()
    }

    fn line(&self) -> usize {
        self.inner.line()
    }

    fn column(&self) -> usize {
        self.inner.column()
    }

    fn remaining(&self) -> &str {
        self.inner.remaining()
    }

    fn capability(&self) -> Option<super::Capability> {
        self.inner.capability()
    }

    fn source(&self) -> Option<&str> {
        self.inner.source()
    }

    fn emitter(&self) -> Option<&dyn Emitter> {
        self.inner.emitter()
    }
}

impl<L: Produce> Produce for Tracked<L> {
    type Item = L::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        Tracked::advance(self)
    }

    fn lex(&mut self, rule: &str) -> Option<Self::Item> {
        Tracked::lex(self, rule)
    }
}
