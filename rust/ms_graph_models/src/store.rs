/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Property storage for Graph models.
//!
//! Models don't hold typed fields. Every property lives in a [`BackingStore`]
//! keyed by its wire name, and typed accessors convert to and from the stored
//! [`Value`] through [`StoreValue`]. Keeping the raw representation around is
//! what lets a model report which properties changed since it was parsed.

use base64::prelude::{BASE64_STANDARD, Engine};
use serde_json::{Map, Number, Value};
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, OnceLock};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

use crate::Error;
use crate::serialization::json::JsonParseNode;
use crate::serialization::{BackedModel, ParsableFactory};

/// Store key under which unknown wire fields are kept.
pub const ADDITIONAL_DATA_KEY: &str = "additionalData";

/// Store key (and wire name) of the OData type discriminator.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Callback invoked on every effective [`BackingStore::set`], with the key,
/// the previous value (if any) and the new value.
pub type StoreSubscriber = Arc<dyn Fn(&str, Option<&Value>, &Value) + Send + Sync>;

/// A string-keyed value store holding the properties of one model instance.
pub trait BackingStore: fmt::Debug + Send + Sync {
    /// Get the value stored for `key`. When
    /// [`return_only_changed_values`](Self::return_only_changed_values) is
    /// on, unchanged values read as absent.
    fn get(&self, key: &str) -> Result<Option<&Value>, Error>;

    /// Store `value` under `key`.
    fn set(&mut self, key: &str, value: Value) -> Result<(), Error>;

    /// All stored entries in insertion order, or only the changed ones when
    /// [`return_only_changed_values`](Self::return_only_changed_values) is on.
    fn enumerate(&self) -> Vec<(&str, &Value)>;

    /// Keys whose value changed to `null` since initialization completed.
    fn keys_changed_to_null(&self) -> Vec<&str>;

    fn subscribe(&mut self, id: &str, callback: StoreSubscriber);

    fn unsubscribe(&mut self, id: &str);

    fn clear(&mut self);

    fn initialization_completed(&self) -> bool;

    /// Marks every stored entry as unchanged (`true`) or changed (`false`).
    fn set_initialization_completed(&mut self, completed: bool);

    fn return_only_changed_values(&self) -> bool;

    fn set_return_only_changed_values(&mut self, changed_only: bool);

    /// Replace the whole content without change tracking or notifications.
    fn load(&mut self, values: Map<String, Value>);

    /// The whole content as a JSON object, ignoring the changed-only filter.
    fn to_value(&self) -> Value;

    fn box_clone(&self) -> Box<dyn BackingStore>;
}

impl Clone for Box<dyn BackingStore> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

/// The default [`BackingStore`], keeping everything in memory.
#[derive(Clone)]
pub struct InMemoryBackingStore {
    values: Map<String, Value>,
    changed: HashSet<String>,
    subscribers: Vec<(String, StoreSubscriber)>,
    initialization_completed: bool,
    return_only_changed_values: bool,
}

impl InMemoryBackingStore {
    pub fn new() -> Self {
        Self {
            values: Map::new(),
            changed: HashSet::new(),
            subscribers: Vec::new(),
            initialization_completed: true,
            return_only_changed_values: false,
        }
    }

    fn is_visible(&self, key: &str) -> bool {
        !self.return_only_changed_values || self.changed.contains(key)
    }
}

impl Default for InMemoryBackingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryBackingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryBackingStore")
            .field("values", &self.values)
            .field("changed", &self.changed)
            .field("subscribers", &self.subscribers.len())
            .field("initialization_completed", &self.initialization_completed)
            .field(
                "return_only_changed_values",
                &self.return_only_changed_values,
            )
            .finish()
    }
}

impl BackingStore for InMemoryBackingStore {
    fn get(&self, key: &str) -> Result<Option<&Value>, Error> {
        if !self.is_visible(key) {
            return Ok(None);
        }
        Ok(self.values.get(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), Error> {
        if self.values.get(key) == Some(&value) {
            return Ok(());
        }

        if self.initialization_completed {
            self.changed.insert(key.to_string());
        } else {
            self.changed.remove(key);
        }

        let previous = self.values.insert(key.to_string(), value);
        let current = &self.values[key];
        for (_, subscriber) in &self.subscribers {
            subscriber(key, previous.as_ref(), current);
        }
        Ok(())
    }

    fn enumerate(&self) -> Vec<(&str, &Value)> {
        self.values
            .iter()
            .filter(|(key, _)| self.is_visible(key))
            .map(|(key, value)| (key.as_str(), value))
            .collect()
    }

    fn keys_changed_to_null(&self) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(key, value)| value.is_null() && self.changed.contains(key.as_str()))
            .map(|(key, _)| key.as_str())
            .collect()
    }

    fn subscribe(&mut self, id: &str, callback: StoreSubscriber) {
        self.unsubscribe(id);
        self.subscribers.push((id.to_string(), callback));
    }

    fn unsubscribe(&mut self, id: &str) {
        self.subscribers.retain(|(existing, _)| existing != id);
    }

    fn clear(&mut self) {
        self.values.clear();
        self.changed.clear();
    }

    fn initialization_completed(&self) -> bool {
        self.initialization_completed
    }

    fn set_initialization_completed(&mut self, completed: bool) {
        self.initialization_completed = completed;
        if completed {
            self.changed.clear();
        } else {
            self.changed = self.values.keys().cloned().collect();
        }
    }

    fn return_only_changed_values(&self) -> bool {
        self.return_only_changed_values
    }

    fn set_return_only_changed_values(&mut self, changed_only: bool) {
        self.return_only_changed_values = changed_only;
    }

    fn load(&mut self, values: Map<String, Value>) {
        self.values = values;
        self.changed.clear();
    }

    fn to_value(&self) -> Value {
        Value::Object(self.values.clone())
    }

    fn box_clone(&self) -> Box<dyn BackingStore> {
        Box::new(self.clone())
    }
}

/// Constructor for the backing store of every new model instance.
pub type BackingStoreFactory = fn() -> Box<dyn BackingStore>;

static BACKING_STORE_FACTORY: OnceLock<BackingStoreFactory> = OnceLock::new();

/// Install the process-wide [`BackingStoreFactory`]. Only the first call takes
/// effect; returns whether this call installed `factory`.
pub fn set_backing_store_factory(factory: BackingStoreFactory) -> bool {
    let installed = BACKING_STORE_FACTORY.set(factory).is_ok();
    if !installed {
        log::warn!("a backing store factory is already installed, keeping it");
    }
    installed
}

/// A fresh store from the installed factory, or an [`InMemoryBackingStore`].
pub fn new_backing_store() -> Box<dyn BackingStore> {
    match BACKING_STORE_FACTORY.get() {
        Some(factory) => factory(),
        None => Box::new(InMemoryBackingStore::new()),
    }
}

/// A fresh store with the OData type discriminator already set.
pub(crate) fn odata_typed_store(odata_type: &str) -> Box<dyn BackingStore> {
    let mut store = new_backing_store();
    if let Err(err) = store.set(ODATA_TYPE_KEY, Value::String(odata_type.to_string())) {
        log::warn!("could not set {ODATA_TYPE_KEY} to {odata_type}: {err}");
    }
    store
}

/// Rebuild a model from its stored representation, dispatching on the
/// discriminator the same way deserialization does.
pub(crate) fn model_from_store<T: BackedModel>(
    value: &Value,
    factory: ParsableFactory<T>,
) -> Option<T> {
    let properties = value.as_object()?;
    let mut model = factory(&JsonParseNode::new(value)).ok()?;
    model.backing_store_mut().load(properties.clone());
    Some(model)
}

/// Conversion between a typed property value and its stored representation.
pub trait StoreValue: Sized {
    fn into_store(self) -> Result<Value, Error>;

    /// `None` if `value` doesn't have the shape of `Self`.
    fn from_store(value: &Value) -> Option<Self>;
}

impl StoreValue for String {
    fn into_store(self) -> Result<Value, Error> {
        Ok(Value::String(self))
    }

    fn from_store(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl StoreValue for bool {
    fn into_store(self) -> Result<Value, Error> {
        Ok(Value::Bool(self))
    }

    fn from_store(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl StoreValue for i32 {
    fn into_store(self) -> Result<Value, Error> {
        Ok(Value::from(self))
    }

    fn from_store(value: &Value) -> Option<Self> {
        value.as_i64().and_then(|v| i32::try_from(v).ok())
    }
}

impl StoreValue for i64 {
    fn into_store(self) -> Result<Value, Error> {
        Ok(Value::from(self))
    }

    fn from_store(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl StoreValue for f32 {
    fn into_store(self) -> Result<Value, Error> {
        finite_number(f64::from(self))
    }

    fn from_store(value: &Value) -> Option<Self> {
        value.as_f64().map(|v| v as f32)
    }
}

impl StoreValue for f64 {
    fn into_store(self) -> Result<Value, Error> {
        finite_number(self)
    }

    fn from_store(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl StoreValue for OffsetDateTime {
    fn into_store(self) -> Result<Value, Error> {
        Ok(Value::String(self.format(&Rfc3339)?))
    }

    fn from_store(value: &Value) -> Option<Self> {
        value
            .as_str()
            .and_then(|s| OffsetDateTime::parse(s, &Rfc3339).ok())
    }
}

impl StoreValue for Uuid {
    fn into_store(self) -> Result<Value, Error> {
        Ok(Value::String(self.hyphenated().to_string()))
    }

    fn from_store(value: &Value) -> Option<Self> {
        value.as_str().and_then(|s| Uuid::parse_str(s).ok())
    }
}

impl StoreValue for Vec<u8> {
    fn into_store(self) -> Result<Value, Error> {
        Ok(Value::String(BASE64_STANDARD.encode(self)))
    }

    fn from_store(value: &Value) -> Option<Self> {
        value
            .as_str()
            .and_then(|s| BASE64_STANDARD.decode(s).ok())
    }
}

impl StoreValue for Map<String, Value> {
    fn into_store(self) -> Result<Value, Error> {
        Ok(Value::Object(self))
    }

    fn from_store(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}

pub(crate) fn finite_number(value: f64) -> Result<Value, Error> {
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| Error::NonFiniteNumber(value.to_string()))
}

fn unexpected(key: &str, value: &Value) -> Error {
    Error::UnexpectedValue {
        key: key.to_string(),
        value: format!("{value:?}"),
    }
}

impl<'s> dyn BackingStore + 's {
    /// Typed read of a single property. Absent and `null` both read as `None`.
    pub fn get_value<T: StoreValue>(&self, key: &str) -> Result<Option<T>, Error> {
        match self.get(key)? {
            None | Some(Value::Null) => Ok(None),
            Some(val) => T::from_store(val)
                .map(Some)
                .ok_or_else(|| unexpected(key, val)),
        }
    }

    /// Typed read of a collection property.
    pub fn get_collection<T: StoreValue>(&self, key: &str) -> Result<Option<Vec<T>>, Error> {
        match self.get(key)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| T::from_store(v).ok_or_else(|| unexpected(key, v)))
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(val) => Err(unexpected(key, val)),
        }
    }

    /// Typed write of a single property. `None` stores `null`.
    pub fn set_value<T: StoreValue>(&mut self, key: &str, value: Option<T>) -> Result<(), Error> {
        let value = match value {
            Some(v) => v.into_store()?,
            None => Value::Null,
        };
        self.set(key, value)
    }

    /// Typed write of a collection property. `None` stores `null`.
    pub fn set_collection<T: StoreValue>(
        &mut self,
        key: &str,
        values: Option<Vec<T>>,
    ) -> Result<(), Error> {
        let value = match values {
            Some(values) => Value::Array(
                values
                    .into_iter()
                    .map(StoreValue::into_store)
                    .collect::<Result<_, _>>()?,
            ),
            None => Value::Null,
        };
        self.set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;
    use time::macros::datetime;

    fn store() -> Box<dyn BackingStore> {
        Box::new(InMemoryBackingStore::new())
    }

    #[test]
    fn typed_values_read_back_unchanged() {
        let mut store = store();
        let when = datetime!(2024-03-01 09:30:00.125 +02:00);
        let token = Uuid::parse_str("6f1c7b2e-3a2d-4a8e-9f57-0d3f0c7b1a99").unwrap();

        store.set_value("subject", Some("Quarterly review".to_string())).unwrap();
        store.set_value("isRead", Some(true)).unwrap();
        store.set_value("iso", Some(400_i32)).unwrap();
        store.set_value("used", Some(5_368_709_120_i64)).unwrap();
        store.set_value("fNumber", Some(2.8_f64)).unwrap();
        store.set_value("ratio", Some(0.1_f32)).unwrap();
        store.set_value("sentDateTime", Some(when)).unwrap();
        store.set_value("vppTokenId", Some(token)).unwrap();
        store.set_value("conversationIndex", Some(vec![0_u8, 1, 254, 255])).unwrap();

        assert_eq!(
            store.get_value::<String>("subject").unwrap().as_deref(),
            Some("Quarterly review")
        );
        assert_eq!(store.get_value::<bool>("isRead").unwrap(), Some(true));
        assert_eq!(store.get_value::<i32>("iso").unwrap(), Some(400));
        assert_eq!(store.get_value::<i64>("used").unwrap(), Some(5_368_709_120));
        assert_eq!(store.get_value::<f64>("fNumber").unwrap(), Some(2.8));
        assert_eq!(store.get_value::<f32>("ratio").unwrap(), Some(0.1));
        assert_eq!(store.get_value::<OffsetDateTime>("sentDateTime").unwrap(), Some(when));
        assert_eq!(store.get_value::<Uuid>("vppTokenId").unwrap(), Some(token));
        assert_eq!(
            store.get_value::<Vec<u8>>("conversationIndex").unwrap(),
            Some(vec![0, 1, 254, 255])
        );
    }

    #[test]
    fn absent_and_null_read_as_none() {
        let mut store = store();
        assert_eq!(store.get_value::<String>("subject").unwrap(), None);

        store.set_value("subject", Some("x".to_string())).unwrap();
        store.set_value::<String>("subject", None).unwrap();
        assert_eq!(store.get_value::<String>("subject").unwrap(), None);
        assert_eq!(store.get("subject").unwrap(), Some(&Value::Null));
    }

    #[test]
    fn mismatched_type_is_an_error() {
        let mut store = store();
        store.set("isRead", json!("yes")).unwrap();
        let err = store.get_value::<bool>("isRead").unwrap_err();
        assert!(matches!(err, Error::UnexpectedValue { ref key, .. } if key == "isRead"));

        store.set("categories", json!(["a", 1])).unwrap();
        assert!(store.get_collection::<String>("categories").is_err());
    }

    #[test]
    fn collections_keep_order() {
        let mut store = store();
        store
            .set_collection(
                "categories",
                Some(vec!["Red".to_string(), "Blue".to_string()]),
            )
            .unwrap();
        assert_eq!(
            store.get_collection::<String>("categories").unwrap(),
            Some(vec!["Red".to_string(), "Blue".to_string()])
        );
        assert_eq!(store.get("categories").unwrap(), Some(&json!(["Red", "Blue"])));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let mut store = store();
        let err = store.set_value("fNumber", Some(f64::NAN)).unwrap_err();
        assert!(matches!(err, Error::NonFiniteNumber(_)));
        assert_eq!(store.get("fNumber").unwrap(), None);
    }

    #[test]
    fn change_tracking_follows_initialization() {
        let mut store = InMemoryBackingStore::new();
        store.set_initialization_completed(false);
        store.set("subject", json!("parsed")).unwrap();
        store.set("isRead", json!(false)).unwrap();
        store.set_initialization_completed(true);

        store.set("isRead", json!(true)).unwrap();
        store.set("subject", Value::Null).unwrap();
        store.set("isDraft", json!(false)).unwrap();

        store.set_return_only_changed_values(true);
        let changed = store
            .enumerate()
            .into_iter()
            .map(|(key, _)| key)
            .collect::<Vec<_>>();
        assert_eq!(changed, vec!["subject", "isRead", "isDraft"]);
        assert_eq!(store.keys_changed_to_null(), vec!["subject"]);

        store.set_initialization_completed(true);
        assert!(store.enumerate().is_empty());
        assert_eq!(store.get("isRead").unwrap(), None);

        store.set_return_only_changed_values(false);
        assert_eq!(store.get("isRead").unwrap(), Some(&json!(true)));
    }

    #[test]
    fn setting_an_equal_value_is_not_a_change() {
        let mut store = InMemoryBackingStore::new();
        store.load(Map::from_iter([("name".to_string(), json!("Calendar"))]));
        store.set("name", json!("Calendar")).unwrap();
        store.set_return_only_changed_values(true);
        assert!(store.enumerate().is_empty());
    }

    #[test]
    fn subscribers_see_previous_and_new_values() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = InMemoryBackingStore::new();
        let sink = Arc::clone(&seen);
        store.subscribe(
            "recorder",
            Arc::new(move |key: &str, previous: Option<&Value>, current: &Value| {
                sink.lock()
                    .unwrap()
                    .push((key.to_string(), previous.cloned(), current.clone()));
            }),
        );

        store.set("name", json!("Work")).unwrap();
        store.set("name", json!("Home")).unwrap();
        store.unsubscribe("recorder");
        store.set("name", json!("Ignored")).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                ("name".to_string(), None, json!("Work")),
                ("name".to_string(), Some(json!("Work")), json!("Home")),
            ]
        );
    }

    #[test]
    fn clear_and_clone() {
        let mut store = store();
        store.set("name", json!("Work")).unwrap();
        let copy = store.clone();
        store.clear();
        assert!(store.enumerate().is_empty());
        assert_eq!(copy.get("name").unwrap(), Some(&json!("Work")));
        assert_eq!(copy.to_value(), json!({ "name": "Work" }));
    }
}
