//! Tag streams.
//!
//! A tag stream is a forward-only sequence of [`TagEvent`]s describing a
//! structured document. The menu parser consumes any [`TagStream`]; the
//! crate ships an XML-backed one ([`XmlTagStream`](crate::XmlTagStream)) and
//! the in-memory [`EventList`].

use std::collections::VecDeque;

use crate::attributes::Attributes;
use crate::error::StreamResult;

/// A single event of a tag stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEvent {
    /// Start of an element, with its attributes.
    StartTag { name: String, attributes: Attributes },
    /// End of an element.
    EndTag { name: String },
    /// Character data between tags.
    Text(String),
    /// No more events. Repeats forever once reached.
    EndDocument,
}

impl TagEvent {
    /// Start tag without attributes.
    pub fn start(name: impl Into<String>) -> Self {
        Self::StartTag {
            name: name.into(),
            attributes: Attributes::new(),
        }
    }

    /// Start tag with attributes.
    pub fn start_with(name: impl Into<String>, attributes: Attributes) -> Self {
        Self::StartTag {
            name: name.into(),
            attributes,
        }
    }

    /// End tag.
    pub fn end(name: impl Into<String>) -> Self {
        Self::EndTag { name: name.into() }
    }

    /// Character data.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

/// A forward-only source of [`TagEvent`]s.
pub trait TagStream {
    /// Returns the next event, or [`TagEvent::EndDocument`] once exhausted.
    fn next_event(&mut self) -> StreamResult<TagEvent>;
}

impl<S: TagStream + ?Sized> TagStream for Box<S> {
    fn next_event(&mut self) -> StreamResult<TagEvent> {
        (**self).next_event()
    }
}

impl<S: TagStream + ?Sized> TagStream for &mut S {
    fn next_event(&mut self) -> StreamResult<TagEvent> {
        (**self).next_event()
    }
}

/// A [`TagStream`] over a prepared list of events.
///
/// ```
/// use bottom_nav_core::{Attributes, EventList};
///
/// let events = EventList::new()
///     .start("menu")
///     .start_with("item", Attributes::new().with("android:id", "1"))
///     .end("item")
///     .end("menu");
/// assert_eq!(events.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventList {
    events: VecDeque<TagEvent>,
}

impl EventList {
    /// Create an empty event list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: TagEvent) {
        self.events.push_back(event);
    }

    /// Append a start tag without attributes.
    pub fn start(mut self, name: impl Into<String>) -> Self {
        self.push(TagEvent::start(name));
        self
    }

    /// Append a start tag with attributes.
    pub fn start_with(mut self, name: impl Into<String>, attributes: Attributes) -> Self {
        self.push(TagEvent::start_with(name, attributes));
        self
    }

    /// Append an end tag.
    pub fn end(mut self, name: impl Into<String>) -> Self {
        self.push(TagEvent::end(name));
        self
    }

    /// Append character data.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.push(TagEvent::text(text));
        self
    }

    /// Number of events not yet consumed.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if every event has been consumed.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromIterator<TagEvent> for EventList {
    fn from_iter<I: IntoIterator<Item = TagEvent>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl TagStream for EventList {
    fn next_event(&mut self) -> StreamResult<TagEvent> {
        Ok(self.events.pop_front().unwrap_or(TagEvent::EndDocument))
    }
}
