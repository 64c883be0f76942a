/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Contracts between the generated models and a wire format.
//!
//! A model knows how to read each of its wire fields from a [`ParseNode`]
//! (through its [`FieldDeserializers`]) and how to write itself to a
//! [`SerializationWriter`]. The format specific halves live in [`json`].

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt::Display;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

use base64::prelude::{BASE64_STANDARD, Engine};

use crate::Error;
use crate::store::{ADDITIONAL_DATA_KEY, BackingStore, ODATA_TYPE_KEY};

pub mod factory;
pub mod json;

/// Reads one wire field from `node` into the model's store.
pub type FieldDeserializer = fn(&mut dyn BackingStore, &dyn ParseNode) -> Result<(), Error>;

/// Field deserializers of a model, keyed by wire name.
pub type FieldDeserializers = HashMap<&'static str, FieldDeserializer>;

/// Builds the instance a payload should be decoded into, usually by looking at
/// its `@odata.type`.
pub type ParsableFactory<T> = fn(&dyn ParseNode) -> Result<T, Error>;

/// A model that can be read from a [`ParseNode`] and written to a
/// [`SerializationWriter`].
pub trait Parsable {
    fn field_deserializers(&self) -> FieldDeserializers;

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error>;
}

/// A model whose properties live in a [`BackingStore`].
pub trait BackedModel {
    fn backing_store(&self) -> &dyn BackingStore;

    fn backing_store_mut(&mut self) -> &mut dyn BackingStore;
}

/// Access to the wire fields a model doesn't know about.
pub trait AdditionalDataHolder: BackedModel {
    fn additional_data(&self) -> Result<Option<Map<String, Value>>, Error> {
        self.backing_store().get_value(ADDITIONAL_DATA_KEY)
    }

    fn set_additional_data(&mut self, value: Option<Map<String, Value>>) -> Result<(), Error> {
        self.backing_store_mut().set_value(ADDITIONAL_DATA_KEY, value)
    }
}

impl<T: BackedModel + ?Sized> AdditionalDataHolder for T {}

/// A closed set of wire labels.
pub trait EnumValue: Copy + Display {
    /// `None` for labels outside the set.
    fn parse(label: &str) -> Option<Self>;
}

/// A node of a parsed payload.
///
/// Every accessor returns `Ok(None)` for a `null` node and
/// [`Error::IncompatibleNode`] when the node holds another kind of value.
pub trait ParseNode {
    /// The member `key` of an object node.
    fn child_node(&self, key: &str) -> Result<Option<Box<dyn ParseNode + '_>>, Error>;

    fn string_value(&self) -> Result<Option<String>, Error>;

    fn bool_value(&self) -> Result<Option<bool>, Error>;

    fn i32_value(&self) -> Result<Option<i32>, Error>;

    fn i64_value(&self) -> Result<Option<i64>, Error>;

    fn f32_value(&self) -> Result<Option<f32>, Error>;

    fn f64_value(&self) -> Result<Option<f64>, Error>;

    /// Members of an object node, in payload order.
    fn object_fields(&self) -> Result<Option<Vec<(String, Box<dyn ParseNode + '_>)>>, Error>;

    /// Elements of an array node.
    fn collection_nodes(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, Error>;

    /// The node as untyped JSON, used for additional data.
    fn raw_value(&self) -> Result<Value, Error>;

    fn date_time_value(&self) -> Result<Option<OffsetDateTime>, Error> {
        Ok(match self.string_value()? {
            Some(text) => Some(OffsetDateTime::parse(&text, &Rfc3339)?),
            None => None,
        })
    }

    fn uuid_value(&self) -> Result<Option<Uuid>, Error> {
        Ok(match self.string_value()? {
            Some(text) => Some(Uuid::parse_str(&text)?),
            None => None,
        })
    }

    fn byte_array_value(&self) -> Result<Option<Vec<u8>>, Error> {
        Ok(match self.string_value()? {
            Some(text) => Some(BASE64_STANDARD.decode(text)?),
            None => None,
        })
    }
}

impl<'n> dyn ParseNode + 'n {
    /// Unknown labels decode to `None`.
    pub fn enum_value<T: EnumValue>(&self) -> Result<Option<T>, Error> {
        let Some(label) = self.string_value()? else {
            return Ok(None);
        };
        let parsed = T::parse(&label);
        if parsed.is_none() {
            log::debug!("dropping unknown enum label {label:?}");
        }
        Ok(parsed)
    }

    /// Decode an object node into the instance built by `factory`.
    ///
    /// Fields are assigned in payload order and the first failing field aborts
    /// the whole decode. Fields without a deserializer end up in the model's
    /// additional data. The returned model reports no changed properties.
    pub fn object_value<T: Parsable + BackedModel>(
        &self,
        factory: ParsableFactory<T>,
    ) -> Result<Option<T>, Error> {
        let Some(fields) = self.object_fields()? else {
            return Ok(None);
        };

        let mut model = factory(self)?;
        let deserializers = model.field_deserializers();
        let mut additional_data = Map::new();

        model.backing_store_mut().set_initialization_completed(false);
        for (key, node) in &fields {
            match deserializers.get(key.as_str()) {
                Some(deserialize) => deserialize(model.backing_store_mut(), node.as_ref())?,
                None => {
                    log::trace!("keeping unknown field {key} as additional data");
                    additional_data.insert(key.clone(), node.raw_value()?);
                }
            }
        }
        if !additional_data.is_empty() {
            model.set_additional_data(Some(additional_data))?;
        }
        model.backing_store_mut().set_initialization_completed(true);

        Ok(Some(model))
    }

    /// `null` elements are skipped.
    pub fn collection_of_object_values<T: Parsable + BackedModel>(
        &self,
        factory: ParsableFactory<T>,
    ) -> Result<Option<Vec<T>>, Error> {
        let Some(nodes) = self.collection_nodes()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(nodes.len());
        for node in &nodes {
            if let Some(value) = (**node).object_value(factory)? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }

    pub fn collection_of_string_values(&self) -> Result<Option<Vec<String>>, Error> {
        let Some(nodes) = self.collection_nodes()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(nodes.len());
        for node in &nodes {
            if let Some(value) = node.string_value()? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }

    /// Unknown labels are dropped from the collection.
    pub fn collection_of_enum_values<T: EnumValue>(&self) -> Result<Option<Vec<T>>, Error> {
        let Some(nodes) = self.collection_nodes()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(nodes.len());
        for node in &nodes {
            if let Some(value) = (**node).enum_value()? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }
}

/// The `@odata.type` of an object node, if it carries one.
pub fn discriminator_value(node: &dyn ParseNode) -> Result<Option<String>, Error> {
    match node.child_node(ODATA_TYPE_KEY)? {
        Some(child) => child.string_value(),
        None => Ok(None),
    }
}

/// Output side of a wire format. `None` values write nothing.
pub trait SerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<(), Error>;

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), Error>;

    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), Error>;

    fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> Result<(), Error>;

    fn write_f32_value(&mut self, key: &str, value: Option<f32>) -> Result<(), Error>;

    fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> Result<(), Error>;

    /// An explicit `null`, used to clear a property on the server.
    fn write_null_value(&mut self, key: &str) -> Result<(), Error>;

    fn write_object_value(&mut self, key: &str, value: Option<&dyn Parsable>) -> Result<(), Error>;

    fn write_collection_of_object_values(
        &mut self,
        key: &str,
        values: Option<&[&dyn Parsable]>,
    ) -> Result<(), Error>;

    fn write_collection_of_string_values(
        &mut self,
        key: &str,
        values: Option<&[String]>,
    ) -> Result<(), Error>;

    /// Writes every entry at the current level.
    fn write_additional_data(&mut self, data: Option<&Map<String, Value>>) -> Result<(), Error>;

    /// The content written so far, encoded.
    fn serialized_content(&self) -> Result<Vec<u8>, Error>;

    fn write_date_time_value(
        &mut self,
        key: &str,
        value: Option<OffsetDateTime>,
    ) -> Result<(), Error> {
        let text = value.map(|v| v.format(&Rfc3339)).transpose()?;
        self.write_string_value(key, text.as_deref())
    }

    fn write_uuid_value(&mut self, key: &str, value: Option<Uuid>) -> Result<(), Error> {
        let text = value.map(|v| v.hyphenated().to_string());
        self.write_string_value(key, text.as_deref())
    }

    fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) -> Result<(), Error> {
        let text = value.map(|v| BASE64_STANDARD.encode(v));
        self.write_string_value(key, text.as_deref())
    }
}

impl<'w> dyn SerializationWriter + 'w {
    pub fn write_object<T: Parsable>(&mut self, key: &str, value: Option<&T>) -> Result<(), Error> {
        self.write_object_value(key, value.map(|v| v as &dyn Parsable))
    }

    pub fn write_collection_of_objects<T: Parsable>(
        &mut self,
        key: &str,
        values: Option<&[T]>,
    ) -> Result<(), Error> {
        let Some(values) = values else {
            return Ok(());
        };
        let values = values
            .iter()
            .map(|v| v as &dyn Parsable)
            .collect::<Vec<_>>();
        self.write_collection_of_object_values(key, Some(&values))
    }

    pub fn write_enum_value<T: EnumValue>(&mut self, key: &str, value: Option<T>) -> Result<(), Error> {
        self.write_string_value(key, value.map(|v| v.to_string()).as_deref())
    }

    pub fn write_collection_of_enum_values<T: EnumValue>(
        &mut self,
        key: &str,
        values: Option<&[T]>,
    ) -> Result<(), Error> {
        let labels = values.map(|values| values.iter().map(T::to_string).collect::<Vec<_>>());
        self.write_collection_of_string_values(key, labels.as_deref())
    }
}
