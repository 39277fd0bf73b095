//! XML-backed tag stream.
//!
//! [`XmlTagStream`] adapts `quick_xml`'s pull reader to [`TagStream`]:
//!
//! - self-closing elements (`<item/>`) produce a start and an end event;
//! - declarations, comments, processing instructions and doctypes are skipped;
//! - surrounding whitespace is trimmed and whitespace-only text dropped;
//! - attribute values are unescaped, element and attribute names are kept
//!   qualified (`android:id`).
//!
//! ```
//! use bottom_nav_core::{TagEvent, TagStream, XmlTagStream};
//!
//! let mut stream = XmlTagStream::from_str("<menu><item/></menu>");
//! assert!(matches!(stream.next_event()?, TagEvent::StartTag { name, .. } if name == "menu"));
//! assert!(matches!(stream.next_event()?, TagEvent::StartTag { name, .. } if name == "item"));
//! assert_eq!(stream.next_event()?, TagEvent::end("item"));
//! assert_eq!(stream.next_event()?, TagEvent::end("menu"));
//! assert_eq!(stream.next_event()?, TagEvent::EndDocument);
//! # Ok::<(), bottom_nav_core::StreamError>(())
//! ```

use std::io::BufRead;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::attributes::Attributes;
use crate::error::{StreamError, StreamResult};
use crate::logging::targets;
use crate::stream::{TagEvent, TagStream};

/// A [`TagStream`] reading XML from any `BufRead` source.
pub struct XmlTagStream<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    /// End event owed for a self-closing element.
    pending_end: Option<String>,
    finished: bool,
}

impl<'a> XmlTagStream<&'a [u8]> {
    /// Creates a stream over an XML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<R: BufRead> XmlTagStream<R> {
    /// Creates a stream from a `BufRead` source.
    pub fn new(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        reader.config_mut().trim_text(true);
        XmlTagStream {
            reader,
            buf: Vec::new(),
            pending_end: None,
            finished: false,
        }
    }

    fn syntax_error(&self, error: impl std::fmt::Display) -> StreamError {
        StreamError::Syntax {
            message: error.to_string(),
            position: self.reader.buffer_position(),
        }
    }

    fn attribute_error(&self, error: impl std::fmt::Display) -> StreamError {
        StreamError::Attribute {
            message: error.to_string(),
            position: self.reader.buffer_position(),
        }
    }

    fn read_start(&self, start: &BytesStart<'_>) -> StreamResult<(String, Attributes)> {
        let name = decode_name(start.name().as_ref())?;
        let mut attributes = Attributes::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| self.attribute_error(e))?;
            let key = decode_name(attr.key.as_ref())?;
            let value = attr.unescape_value().map_err(|e| self.attribute_error(e))?;
            attributes.insert(key, value.into_owned());
        }
        Ok((name, attributes))
    }
}

fn decode_name(bytes: &[u8]) -> StreamResult<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| StreamError::Encoding(e.to_string()))
}

impl<R: BufRead> TagStream for XmlTagStream<R> {
    fn next_event(&mut self) -> StreamResult<TagEvent> {
        if let Some(name) = self.pending_end.take() {
            return Ok(TagEvent::EndTag { name });
        }

        loop {
            if self.finished {
                return Ok(TagEvent::EndDocument);
            }

            self.buf.clear();
            let read = self.reader.read_event_into(&mut self.buf).map(Event::into_owned);
            let event = match read {
                Ok(event) => event,
                Err(e) => return Err(self.syntax_error(e)),
            };

            match event {
                Event::Start(start) => {
                    let (name, attributes) = self.read_start(&start)?;
                    return Ok(TagEvent::StartTag { name, attributes });
                }
                Event::Empty(empty) => {
                    let (name, attributes) = self.read_start(&empty)?;
                    self.pending_end = Some(name.clone());
                    return Ok(TagEvent::StartTag { name, attributes });
                }
                Event::End(end) => {
                    let name = decode_name(end.name().as_ref())?;
                    return Ok(TagEvent::EndTag { name });
                }
                Event::Text(text) => {
                    let content = text.unescape().map_err(|e| self.syntax_error(e))?;
                    if !content.trim().is_empty() {
                        return Ok(TagEvent::Text(content.into_owned()));
                    }
                }
                Event::CData(cdata) => {
                    let content = std::str::from_utf8(&cdata)
                        .map_err(|e| StreamError::Encoding(e.to_string()))?;
                    return Ok(TagEvent::Text(content.to_string()));
                }
                Event::Eof => {
                    tracing::trace!(target: targets::STREAM, "reached end of XML document");
                    self.finished = true;
                }
                Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
            }
        }
    }
}
