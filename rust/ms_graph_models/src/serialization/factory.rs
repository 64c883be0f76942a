/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Lookup of wire formats by the content type of a response or request.

use serde_json::Value;
use std::collections::HashMap;

use crate::Error;
use crate::serialization::json::{JsonParseNode, JsonSerializationWriter};
use crate::serialization::{ParseNode, SerializationWriter};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A parsed document owning its content.
#[derive(Clone, Debug)]
pub struct ParsedNode {
    document: Value,
}

impl ParsedNode {
    pub fn new(document: Value) -> Self {
        Self { document }
    }

    /// The root node of the document.
    pub fn as_node(&self) -> Box<dyn ParseNode + '_> {
        Box::new(JsonParseNode::new(&self.document))
    }
}

pub trait ParseNodeFactory: Send + Sync {
    fn valid_content_type(&self) -> &'static str;

    fn parse_node(&self, content_type: &str, content: &[u8]) -> Result<ParsedNode, Error>;
}

pub trait SerializationWriterFactory: Send + Sync {
    fn valid_content_type(&self) -> &'static str;

    fn serialization_writer(&self, content_type: &str) -> Result<Box<dyn SerializationWriter>, Error>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct JsonParseNodeFactory;

impl ParseNodeFactory for JsonParseNodeFactory {
    fn valid_content_type(&self) -> &'static str {
        JSON_CONTENT_TYPE
    }

    fn parse_node(&self, content_type: &str, content: &[u8]) -> Result<ParsedNode, Error> {
        if normalize_content_type(content_type) != JSON_CONTENT_TYPE {
            return Err(Error::UnsupportedContentType(content_type.to_string()));
        }
        JsonParseNode::from_slice(content)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct JsonSerializationWriterFactory;

impl SerializationWriterFactory for JsonSerializationWriterFactory {
    fn valid_content_type(&self) -> &'static str {
        JSON_CONTENT_TYPE
    }

    fn serialization_writer(&self, content_type: &str) -> Result<Box<dyn SerializationWriter>, Error> {
        if normalize_content_type(content_type) != JSON_CONTENT_TYPE {
            return Err(Error::UnsupportedContentType(content_type.to_string()));
        }
        Ok(Box::new(JsonSerializationWriter::new()))
    }
}

/// Strip parameters and vendor prefixes, so that
/// `application/vnd.api+json; charset=utf-8` becomes `application/json`.
pub fn normalize_content_type(content_type: &str) -> String {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.split_once('/') {
        Some((kind, subtype)) => {
            let subtype = subtype.rsplit('+').next().unwrap_or(subtype);
            format!("{kind}/{subtype}")
        }
        None => essence,
    }
}

/// Parse node factories keyed by normalized content type.
#[derive(Default)]
pub struct ParseNodeFactoryRegistry {
    factories: HashMap<String, Box<dyn ParseNodeFactory>>,
}

impl ParseNodeFactoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry knowing JSON.
    pub fn default_registry() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(JsonParseNodeFactory));
        registry
    }

    /// Replaces any factory registered for the same content type.
    pub fn register(&mut self, factory: Box<dyn ParseNodeFactory>) {
        self.factories
            .insert(normalize_content_type(factory.valid_content_type()), factory);
    }

    pub fn parse_node(&self, content_type: &str, content: &[u8]) -> Result<ParsedNode, Error> {
        let normalized = normalize_content_type(content_type);
        let factory = self
            .factories
            .get(&normalized)
            .ok_or_else(|| Error::UnsupportedContentType(content_type.to_string()))?;
        factory.parse_node(&normalized, content)
    }
}

/// Serialization writer factories keyed by normalized content type.
#[derive(Default)]
pub struct SerializationWriterFactoryRegistry {
    factories: HashMap<String, Box<dyn SerializationWriterFactory>>,
}

impl SerializationWriterFactoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry knowing JSON.
    pub fn default_registry() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(JsonSerializationWriterFactory));
        registry
    }

    pub fn register(&mut self, factory: Box<dyn SerializationWriterFactory>) {
        self.factories
            .insert(normalize_content_type(factory.valid_content_type()), factory);
    }

    pub fn serialization_writer(&self, content_type: &str) -> Result<Box<dyn SerializationWriter>, Error> {
        let normalized = normalize_content_type(content_type);
        let factory = self
            .factories
            .get(&normalized)
            .ok_or_else(|| Error::UnsupportedContentType(content_type.to_string()))?;
        factory.serialization_writer(&normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types_are_normalized() {
        assert_eq!(normalize_content_type("application/json"), "application/json");
        assert_eq!(
            normalize_content_type("Application/JSON; charset=utf-8"),
            "application/json"
        );
        assert_eq!(
            normalize_content_type("application/vnd.github+json; charset=utf-8"),
            "application/json"
        );
        assert_eq!(normalize_content_type("text/plain"), "text/plain");
    }

    #[test]
    fn registry_dispatches_on_content_type() {
        let registry = ParseNodeFactoryRegistry::default_registry();
        let parsed = registry
            .parse_node(
                "application/vnd.ms-graph+json;odata.metadata=minimal",
                br#"{"subject": "Hi"}"#,
            )
            .unwrap();
        let root = parsed.as_node();
        let subject = root.child_node("subject").unwrap().unwrap();
        assert_eq!(subject.string_value().unwrap().as_deref(), Some("Hi"));

        assert!(matches!(
            registry.parse_node("text/xml", b"<a/>"),
            Err(Error::UnsupportedContentType(ref t)) if t == "text/xml"
        ));
        assert!(matches!(
            registry.parse_node("application/json", b"{"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn writer_registry_produces_json_writers() {
        let registry = SerializationWriterFactoryRegistry::default_registry();
        let mut writer = registry.serialization_writer("application/json").unwrap();
        writer.write_string_value("subject", Some("Hi")).unwrap();
        assert_eq!(writer.serialized_content().unwrap(), br#"{"subject":"Hi"}"#.to_vec());

        assert!(SerializationWriterFactoryRegistry::new()
            .serialization_writer("application/json")
            .is_err());
    }
}
