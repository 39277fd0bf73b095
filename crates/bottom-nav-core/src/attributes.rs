//! Attribute sets and styled attribute lookup.
//!
//! Every start tag carries an [`Attributes`] set of raw strings. The parser
//! never reads those strings directly: it goes through an [`AttributeSource`],
//! which converts values and resolves `@type/name` references. The default
//! implementation is [`StyledAttributes`], backed by a [`ResourceTable`].

use crate::color::Color;
use crate::error::AttributeError;
use crate::resources::ResourceTable;

/// Returns the local part of a possibly prefixed attribute name.
///
/// `android:id` and `id` both have the local name `id`.
pub fn local_name(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

/// The raw attributes of a single start tag, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, replacing an existing one with the same qualified name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Looks up a raw value by name.
    ///
    /// Matching is done on local names, so `get("android:title")`,
    /// `get("title")` and a stored `app:title` all meet.
    pub fn get(&self, name: &str) -> Option<&str> {
        let wanted = local_name(name);
        self.entries
            .iter()
            .find(|(n, _)| local_name(n) == wanted)
            .map(|(_, v)| v.as_str())
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tag carries no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(qualified name, raw value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// Typed access to the attributes of the tag currently being read.
///
/// Getters taking a `default` return it when the attribute is absent. Present
/// but unusable values are errors; the parser turns them into a failed parse.
pub trait AttributeSource {
    /// Returns true if the attribute is present.
    fn has_value(&self, key: &str) -> bool;

    fn get_int(&self, key: &str, default: i32) -> Result<i32, AttributeError>;

    fn get_bool(&self, key: &str, default: bool) -> Result<bool, AttributeError>;

    fn get_color(&self, key: &str, default: Color) -> Result<Color, AttributeError>;

    /// Returns the text value, or `None` when absent.
    fn get_text(&self, key: &str) -> Result<Option<String>, AttributeError>;

    /// Returns the opaque resource key the attribute points at.
    fn get_resource_id(&self, key: &str, default: i32) -> Result<i32, AttributeError>;
}

/// A resource reference of the form `@type/name` (or `@+id/name`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Reference<'a> {
    kind: &'a str,
    name: &'a str,
}

fn parse_reference(raw: &str) -> Option<Reference<'_>> {
    let body = raw.strip_prefix('@')?;
    let body = body.strip_prefix('+').unwrap_or(body);
    // `@android:color/white` style package prefixes are ignored
    let body = body.rsplit_once(':').map_or(body, |(_, rest)| rest);
    let (kind, name) = body.split_once('/')?;
    if kind.is_empty() || name.is_empty() {
        return None;
    }
    Some(Reference { kind, name })
}

fn parse_int_literal(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16).ok().map(|v| v as i32);
    }
    raw.parse().ok()
}

/// [`AttributeSource`] over one tag's [`Attributes`], resolving references
/// against a [`ResourceTable`].
#[derive(Debug, Clone, Copy)]
pub struct StyledAttributes<'a> {
    attrs: &'a Attributes,
    table: &'a ResourceTable,
}

impl<'a> StyledAttributes<'a> {
    /// Wraps `attrs`, resolving references against `table`.
    pub fn new(attrs: &'a Attributes, table: &'a ResourceTable) -> Self {
        Self { attrs, table }
    }

    fn raw(&self, key: &str) -> Result<Option<&'a str>, AttributeError> {
        match self.attrs.get(key) {
            Some(raw) if raw.starts_with('?') => Err(AttributeError::ThemeReference(raw.to_string())),
            other => Ok(other),
        }
    }

    fn unresolved(raw: &str) -> AttributeError {
        AttributeError::UnresolvedReference(raw.to_string())
    }
}

impl AttributeSource for StyledAttributes<'_> {
    fn has_value(&self, key: &str) -> bool {
        self.attrs.get(key).is_some()
    }

    fn get_int(&self, key: &str, default: i32) -> Result<i32, AttributeError> {
        let Some(raw) = self.raw(key)? else {
            return Ok(default);
        };
        if let Some(reference) = parse_reference(raw) {
            return match reference.kind {
                "integer" => self.table.integer(reference.name),
                _ => self.table.id(reference.name),
            }
            .ok_or_else(|| Self::unresolved(raw));
        }
        parse_int_literal(raw).ok_or_else(|| AttributeError::invalid("integer", raw, "not an integer"))
    }

    fn get_bool(&self, key: &str, default: bool) -> Result<bool, AttributeError> {
        let Some(raw) = self.raw(key)? else {
            return Ok(default);
        };
        if let Some(reference) = parse_reference(raw) {
            return self
                .table
                .boolean(reference.name)
                .ok_or_else(|| Self::unresolved(raw));
        }
        match raw.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(AttributeError::invalid("boolean", other, "expected 'true' or 'false'")),
        }
    }

    fn get_color(&self, key: &str, default: Color) -> Result<Color, AttributeError> {
        let Some(raw) = self.raw(key)? else {
            return Ok(default);
        };
        if let Some(reference) = parse_reference(raw) {
            return self
                .table
                .color(reference.name)
                .ok_or_else(|| Self::unresolved(raw));
        }
        raw.parse()
    }

    fn get_text(&self, key: &str) -> Result<Option<String>, AttributeError> {
        let Some(raw) = self.raw(key)? else {
            return Ok(None);
        };
        match parse_reference(raw) {
            Some(reference) if reference.kind == "string" => self
                .table
                .string(reference.name)
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| Self::unresolved(raw)),
            _ => Ok(Some(raw.to_string())),
        }
    }

    fn get_resource_id(&self, key: &str, default: i32) -> Result<i32, AttributeError> {
        let Some(raw) = self.raw(key)? else {
            return Ok(default);
        };
        match parse_reference(raw) {
            Some(reference) => self.table.id(reference.name).ok_or_else(|| Self::unresolved(raw)),
            None => parse_int_literal(raw)
                .ok_or_else(|| AttributeError::invalid("resource id", raw, "not a reference or integer")),
        }
    }
}
