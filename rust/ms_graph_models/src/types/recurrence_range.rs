/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to RecurrenceRange. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode,
    SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, new_backing_store};
use crate::types::recurrence_range_type::*;
use serde_json::Value;
#[derive(Clone, Debug)]
pub struct RecurrenceRange {
    pub(crate) backing_store: Box<dyn BackingStore>,
}
impl Default for RecurrenceRange {
    fn default() -> Self {
        Self::new()
    }
}
impl RecurrenceRange {
    #[doc = "Instantiates a new `RecurrenceRange` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(new_backing_store())
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        RecurrenceRange { backing_store }
    }
    #[doc = "The date to stop applying the recurrence pattern.\n\n Depending on the recurrence pattern of the event, the last occurrence of the meeting may not be this date. Required if type is endDate."]
    pub fn end_date(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("endDate")
    }
    pub fn set_end_date(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("endDate", value)
    }
    #[doc = "The number of times to repeat the event.\n\n Required and must be positive if type is numbered."]
    pub fn number_of_occurrences(&self) -> Result<Option<i32>, Error> {
        self.backing_store().get_value("numberOfOccurrences")
    }
    pub fn set_number_of_occurrences(&mut self, value: Option<i32>) -> Result<(), Error> {
        self.backing_store_mut().set_value("numberOfOccurrences", value)
    }
    #[doc = "Time zone for the startDate and endDate properties.\n\n Optional. If not specified, the time zone of the event is used."]
    pub fn recurrence_time_zone(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("recurrenceTimeZone")
    }
    pub fn set_recurrence_time_zone(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("recurrenceTimeZone", value)
    }
    #[doc = "The date to start applying the recurrence pattern.\n\n The first occurrence of the meeting may be this date or later, depending on the recurrence pattern of the event. Must be the same value as the start property of the recurring event. Required."]
    pub fn start_date(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("startDate")
    }
    pub fn set_start_date(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("startDate", value)
    }
    #[doc = "The recurrence range.\n\n The possible values are: endDate, noEnd, numbered. Required."]
    pub fn type_escaped(&self) -> Result<Option<RecurrenceRangeType>, Error> {
        self.backing_store().get_value("type")
    }
    pub fn set_type_escaped(&mut self, value: Option<RecurrenceRangeType>) -> Result<(), Error> {
        self.backing_store_mut().set_value("type", value)
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
        writer.write_string_value("endDate", self.end_date()?.as_deref())?;
        writer.write_i32_value("numberOfOccurrences", self.number_of_occurrences()?)?;
        writer.write_string_value("recurrenceTimeZone", self.recurrence_time_zone()?.as_deref())?;
        writer.write_string_value("startDate", self.start_date()?.as_deref())?;
        writer.write_enum_value("type", self.type_escaped()?)?;
        writer.write_string_value("@odata.type", self.odata_type()?.as_deref())?;
        Ok(())
    }
}
impl BackedModel for RecurrenceRange {
    fn backing_store(&self) -> &dyn BackingStore {
        &*self.backing_store
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        &mut *self.backing_store
    }
}
impl Parsable for RecurrenceRange {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = FieldDeserializers::new();
        res.insert("endDate", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("endDate", Some(val))?;
            }
            Ok(())
        });
        res.insert("numberOfOccurrences", |store, n| {
            if let Some(val) = n.i32_value()? {
                store.set_value("numberOfOccurrences", Some(val))?;
            }
            Ok(())
        });
        res.insert("recurrenceTimeZone", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("recurrenceTimeZone", Some(val))?;
            }
            Ok(())
        });
        res.insert("startDate", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("startDate", Some(val))?;
            }
            Ok(())
        });
        res.insert("type", |store, n| {
            if let Some(val) = n.enum_value::<RecurrenceRangeType>()? {
                store.set_value("type", Some(val))?;
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
impl StoreValue for RecurrenceRange {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_recurrence_range_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_recurrence_range_from_discriminator_value(
    _parse_node: &dyn ParseNode,
) -> Result<RecurrenceRange, Error> {
    Ok(RecurrenceRange::new())
}
