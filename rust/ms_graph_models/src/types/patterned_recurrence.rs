/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to PatternedRecurrence. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode,
    SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, new_backing_store};
use crate::types::recurrence_pattern::*;
use crate::types::recurrence_range::*;
use serde_json::Value;
#[derive(Clone, Debug)]
pub struct PatternedRecurrence {
    pub(crate) backing_store: Box<dyn BackingStore>,
}
impl Default for PatternedRecurrence {
    fn default() -> Self {
        Self::new()
    }
}
impl PatternedRecurrence {
    #[doc = "Instantiates a new `PatternedRecurrence` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(new_backing_store())
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        PatternedRecurrence { backing_store }
    }
    #[doc = "The frequency of an event.\n\n For access reviews: Do not specify this property for a one-time access review. Only interval, dayOfMonth, and type (weekly, absoluteMonthly) properties of recurrencePattern are supported."]
    pub fn pattern(&self) -> Result<Option<RecurrencePattern>, Error> {
        self.backing_store().get_value("pattern")
    }
    pub fn set_pattern(&mut self, value: Option<RecurrencePattern>) -> Result<(), Error> {
        self.backing_store_mut().set_value("pattern", value)
    }
    #[doc = "The duration of an event."]
    pub fn range(&self) -> Result<Option<RecurrenceRange>, Error> {
        self.backing_store().get_value("range")
    }
    pub fn set_range(&mut self, value: Option<RecurrenceRange>) -> Result<(), Error> {
        self.backing_store_mut().set_value("range", value)
    }
    pub fn odata_type(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("@odata.type")
    }
    pub fn set_odata_type(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("@odata.type", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        writer.write_object("pattern", self.pattern()?.as_ref())?;
        writer.write_object("range", self.range()?.as_ref())?;
        writer.write_string_value("@odata.type", self.odata_type()?.as_deref())?;
        Ok(())
    }
}
impl BackedModel for PatternedRecurrence {
    fn backing_store(&self) -> &dyn BackingStore {
        &*self.backing_store
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        &mut *self.backing_store
    }
}
impl Parsable for PatternedRecurrence {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = FieldDeserializers::new();
        res.insert("pattern", |store, n| {
            if let Some(val) = n.object_value(create_recurrence_pattern_from_discriminator_value)? {
                store.set_value("pattern", Some(val))?;
            }
            Ok(())
        });
        res.insert("range", |store, n| {
            if let Some(val) = n.object_value(create_recurrence_range_from_discriminator_value)? {
                store.set_value("range", Some(val))?;
            }
            Ok(())
        });
        res.insert("@odata.type", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("@odata.type", Some(val))?;
            }
            Ok(())
        });
        res
    }
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.serialize_properties(writer)?;
        writer.write_additional_data(self.additional_data()?.as_ref())?;
        Ok(())
    }
}
impl StoreValue for PatternedRecurrence {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_patterned_recurrence_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_patterned_recurrence_from_discriminator_value(
    _parse_node: &dyn ParseNode,
) -> Result<PatternedRecurrence, Error> {
    Ok(PatternedRecurrence::new())
}
