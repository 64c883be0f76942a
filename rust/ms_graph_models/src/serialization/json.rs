/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! JSON wire format, on top of `serde_json`.

use serde_json::{Map, Value};

use crate::Error;
use crate::serialization::factory::ParsedNode;
use crate::serialization::{
    BackedModel, Parsable, ParsableFactory, ParseNode, SerializationWriter,
};
use crate::store::{ADDITIONAL_DATA_KEY, finite_number};

/// A [`ParseNode`] over a borrowed JSON value.
#[derive(Clone, Copy, Debug)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
}

impl<'a> JsonParseNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// Parse `content` into an owned document.
    pub fn from_slice(content: &[u8]) -> Result<ParsedNode, Error> {
        Ok(ParsedNode::new(serde_json::from_slice(content)?))
    }

    fn incompatible(&self, expected: &'static str) -> Error {
        Error::IncompatibleNode {
            expected,
            value: self.value.to_string(),
        }
    }
}

impl ParseNode for JsonParseNode<'_> {
    fn child_node(&self, key: &str) -> Result<Option<Box<dyn ParseNode + '_>>, Error> {
        match self.value {
            Value::Object(members) => Ok(members
                .get(key)
                .map(|child| Box::new(JsonParseNode::new(child)) as Box<dyn ParseNode + '_>)),
            Value::Null => Ok(None),
            _ => Err(self.incompatible("object")),
        }
    }

    fn string_value(&self) -> Result<Option<String>, Error> {
        match self.value {
            Value::String(s) => Ok(Some(s.clone())),
            Value::Null => Ok(None),
            _ => Err(self.incompatible("string")),
        }
    }

    fn bool_value(&self) -> Result<Option<bool>, Error> {
        match self.value {
            Value::Bool(b) => Ok(Some(*b)),
            Value::Null => Ok(None),
            _ => Err(self.incompatible("boolean")),
        }
    }

    fn i32_value(&self) -> Result<Option<i32>, Error> {
        let Some(value) = self.i64_value()? else {
            return Ok(None);
        };
        i32::try_from(value)
            .map(Some)
            .map_err(|_| Error::Overflow {
                expected: "i32",
                value: value.to_string(),
            })
    }

    fn i64_value(&self) -> Result<Option<i64>, Error> {
        match self.value {
            Value::Number(n) => n.as_i64().map(Some).ok_or_else(|| {
                if n.is_u64() {
                    Error::Overflow {
                        expected: "i64",
                        value: n.to_string(),
                    }
                } else {
                    self.incompatible("integer")
                }
            }),
            Value::Null => Ok(None),
            _ => Err(self.incompatible("integer")),
        }
    }

    fn f32_value(&self) -> Result<Option<f32>, Error> {
        Ok(self.f64_value()?.map(|v| v as f32))
    }

    fn f64_value(&self) -> Result<Option<f64>, Error> {
        match self.value {
            Value::Number(n) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| self.incompatible("number")),
            Value::Null => Ok(None),
            _ => Err(self.incompatible("number")),
        }
    }

    fn object_fields(&self) -> Result<Option<Vec<(String, Box<dyn ParseNode + '_>)>>, Error> {
        match self.value {
            Value::Object(members) => Ok(Some(
                members
                    .iter()
                    .map(|(key, value)| {
                        (
                            key.clone(),
                            Box::new(JsonParseNode::new(value)) as Box<dyn ParseNode + '_>,
                        )
                    })
                    .collect(),
            )),
            Value::Null => Ok(None),
            _ => Err(self.incompatible("object")),
        }
    }

    fn collection_nodes(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, Error> {
        match self.value {
            Value::Array(items) => Ok(Some(
                items
                    .iter()
                    .map(|item| Box::new(JsonParseNode::new(item)) as Box<dyn ParseNode + '_>)
                    .collect(),
            )),
            Value::Null => Ok(None),
            _ => Err(self.incompatible("array")),
        }
    }

    fn raw_value(&self) -> Result<Value, Error> {
        Ok(self.value.clone())
    }
}

/// A [`SerializationWriter`] building one JSON object.
#[derive(Clone, Debug, Default)]
pub struct JsonSerializationWriter {
    content: Map<String, Value>,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.content)
    }

    fn write_value(&mut self, key: &str, value: Value) {
        self.content.insert(key.to_string(), value);
    }

    fn object_to_value(value: &dyn Parsable) -> Result<Value, Error> {
        let mut writer = JsonSerializationWriter::new();
        value.serialize(&mut writer)?;
        Ok(writer.into_value())
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<(), Error> {
        if let Some(value) = value {
            self.write_value(key, Value::String(value.to_string()));
        }
        Ok(())
    }

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), Error> {
        if let Some(value) = value {
            self.write_value(key, Value::Bool(value));
        }
        Ok(())
    }

    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), Error> {
        if let Some(value) = value {
            self.write_value(key, Value::from(value));
        }
        Ok(())
    }

    fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> Result<(), Error> {
        if let Some(value) = value {
            self.write_value(key, Value::from(value));
        }
        Ok(())
    }

    fn write_f32_value(&mut self, key: &str, value: Option<f32>) -> Result<(), Error> {
        self.write_f64_value(key, value.map(f64::from))
    }

    fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> Result<(), Error> {
        if let Some(value) = value {
            let number = finite_number(value)?;
            self.write_value(key, number);
        }
        Ok(())
    }

    fn write_null_value(&mut self, key: &str) -> Result<(), Error> {
        self.write_value(key, Value::Null);
        Ok(())
    }

    fn write_object_value(&mut self, key: &str, value: Option<&dyn Parsable>) -> Result<(), Error> {
        if let Some(value) = value {
            let object = Self::object_to_value(value)?;
            self.write_value(key, object);
        }
        Ok(())
    }

    fn write_collection_of_object_values(
        &mut self,
        key: &str,
        values: Option<&[&dyn Parsable]>,
    ) -> Result<(), Error> {
        if let Some(values) = values {
            let items = values
                .iter()
                .map(|value| Self::object_to_value(*value))
                .collect::<Result<Vec<_>, _>>()?;
            self.write_value(key, Value::Array(items));
        }
        Ok(())
    }

    fn write_collection_of_string_values(
        &mut self,
        key: &str,
        values: Option<&[String]>,
    ) -> Result<(), Error> {
        if let Some(values) = values {
            let items = values.iter().cloned().map(Value::String).collect();
            self.write_value(key, Value::Array(items));
        }
        Ok(())
    }

    fn write_additional_data(&mut self, data: Option<&Map<String, Value>>) -> Result<(), Error> {
        for (key, value) in data.into_iter().flatten() {
            self.write_value(key, value.clone());
        }
        Ok(())
    }

    fn serialized_content(&self) -> Result<Vec<u8>, Error> {
        Ok(serde_json::to_vec(&self.content)?)
    }
}

/// Serialize `value` as a JSON document.
pub fn serialize_to_json(value: &dyn Parsable) -> Result<Vec<u8>, Error> {
    let mut writer = JsonSerializationWriter::new();
    value.serialize(&mut writer)?;
    writer.serialized_content()
}

/// Serialize only what changed on `model` since it was parsed, writing an
/// explicit `null` for each property that was cleared. Afterwards the model
/// reports no changes.
pub fn serialize_changes_to_json<T: Parsable + BackedModel>(model: &mut T) -> Result<Vec<u8>, Error> {
    let mut writer = JsonSerializationWriter::new();

    let store = model.backing_store_mut();
    store.set_return_only_changed_values(true);
    // Additional data is a store entry, not a property of the payload.
    let cleared = store
        .keys_changed_to_null()
        .into_iter()
        .filter(|key| *key != ADDITIONAL_DATA_KEY)
        .map(str::to_owned)
        .collect::<Vec<_>>();

    let written = model.serialize(&mut writer);
    let store = model.backing_store_mut();
    store.set_return_only_changed_values(false);
    written?;

    for key in &cleared {
        writer.write_null_value(key)?;
    }
    model.backing_store_mut().set_initialization_completed(true);
    writer.serialized_content()
}

/// Parse a JSON document into the model built by `factory`.
pub fn parse_json<T: Parsable + BackedModel>(
    content: &[u8],
    factory: ParsableFactory<T>,
) -> Result<Option<T>, Error> {
    let document: Value = serde_json::from_slice(content)?;
    let node: &dyn ParseNode = &JsonParseNode::new(&document);
    node.object_value(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn member<'a>(value: &'a Value, key: &str) -> JsonParseNode<'a> {
        JsonParseNode::new(&value[key])
    }

    #[test]
    fn scalar_nodes() {
        let value = json!({
            "subject": "Hi",
            "isRead": true,
            "size": 42,
            "big": 9_000_000_000_i64,
            "ratio": 0.5,
            "missing": null,
        });
        let node = JsonParseNode::new(&value);
        let child = |key| member(&value, key);

        assert_eq!(child("subject").string_value().unwrap().as_deref(), Some("Hi"));
        assert_eq!(child("isRead").bool_value().unwrap(), Some(true));
        assert_eq!(child("size").i32_value().unwrap(), Some(42));
        assert_eq!(child("big").i64_value().unwrap(), Some(9_000_000_000));
        assert_eq!(child("ratio").f64_value().unwrap(), Some(0.5));
        assert_eq!(child("missing").string_value().unwrap(), None);
        assert_eq!(child("missing").i32_value().unwrap(), None);
        assert!(node.child_node("subject").unwrap().is_some());
        assert!(node.child_node("absent").unwrap().is_none());
    }

    #[test]
    fn wrong_kinds_are_incompatible() {
        let value = json!({ "isRead": "true", "size": 1.5, "big": 9_000_000_000_i64 });
        let node = JsonParseNode::new(&value);

        let is_read = node.child_node("isRead").unwrap().unwrap();
        assert!(matches!(
            is_read.bool_value(),
            Err(Error::IncompatibleNode { expected: "boolean", .. })
        ));

        let size = node.child_node("size").unwrap().unwrap();
        assert!(matches!(size.i32_value(), Err(Error::IncompatibleNode { .. })));

        let big = node.child_node("big").unwrap().unwrap();
        assert!(matches!(big.i32_value(), Err(Error::Overflow { expected: "i32", .. })));

        assert!(matches!(
            node.collection_nodes(),
            Err(Error::IncompatibleNode { expected: "array", .. })
        ));
    }

    #[test]
    fn derived_scalars_parse_from_strings() {
        let value = json!({
            "when": "2024-05-06T07:08:09Z",
            "token": "0b6f1c1e-8a63-4f4b-a0e6-5ac0a3a6c4f1",
            "bytes": "AAH+/w==",
            "bad": "not a date",
        });
        let child = |key| member(&value, key);

        assert_eq!(
            child("when").date_time_value().unwrap(),
            Some(time::macros::datetime!(2024-05-06 07:08:09 UTC))
        );
        assert_eq!(
            child("token").uuid_value().unwrap().map(|u| u.to_string()).as_deref(),
            Some("0b6f1c1e-8a63-4f4b-a0e6-5ac0a3a6c4f1")
        );
        assert_eq!(child("bytes").byte_array_value().unwrap(), Some(vec![0, 1, 254, 255]));
        assert!(matches!(child("bad").date_time_value(), Err(Error::DateTime(_))));
    }

    #[test]
    fn object_fields_keep_payload_order() {
        let document = JsonParseNode::from_slice(br#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let node = document.as_node();
        let keys = node
            .object_fields()
            .unwrap()
            .unwrap()
            .into_iter()
            .map(|(key, _)| key)
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn string_collections_skip_nulls() {
        let value = json!(["Red", null, "Blue"]);
        let node: &dyn ParseNode = &JsonParseNode::new(&value);
        assert_eq!(
            node.collection_of_string_values().unwrap(),
            Some(vec!["Red".to_string(), "Blue".to_string()])
        );
    }

    #[test]
    fn writer_skips_none_and_rejects_non_finite() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_string_value("subject", Some("Hi")).unwrap();
        writer.write_string_value("bodyPreview", None).unwrap();
        writer.write_i64_value("size", Some(7)).unwrap();
        writer.write_null_value("flag").unwrap();
        writer
            .write_collection_of_string_values("categories", Some(&["Red".to_string()]))
            .unwrap();
        writer.write_byte_array_value("index", Some(&[0, 1])).unwrap();
        assert!(matches!(
            writer.write_f64_value("ratio", Some(f64::INFINITY)),
            Err(Error::NonFiniteNumber(_))
        ));

        assert_eq!(
            writer.into_value(),
            json!({
                "subject": "Hi",
                "size": 7,
                "flag": null,
                "categories": ["Red"],
                "index": "AAE=",
            })
        );
    }

    #[test]
    fn additional_data_is_written_inline() {
        let mut writer = JsonSerializationWriter::new();
        let extra = Map::from_iter([
            ("@odata.etag".to_string(), json!("W/\"1\"")),
            ("nested".to_string(), json!({ "a": [1, 2] })),
        ]);
        writer.write_additional_data(Some(&extra)).unwrap();
        writer.write_additional_data(None).unwrap();
        assert_eq!(
            writer.serialized_content().unwrap(),
            br#"{"@odata.etag":"W/\"1\"","nested":{"a":[1,2]}}"#.to_vec()
        );
    }
}
