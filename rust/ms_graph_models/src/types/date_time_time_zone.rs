/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to DateTimeTimeZone. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode,
    SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, new_backing_store};
use serde_json::Value;
#[derive(Clone, Debug)]
pub struct DateTimeTimeZone {
    pub(crate) backing_store: Box<dyn BackingStore>,
}
impl Default for DateTimeTimeZone {
    fn default() -> Self {
        Self::new()
    }
}
impl DateTimeTimeZone {
    #[doc = "Instantiates a new `DateTimeTimeZone` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(new_backing_store())
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        DateTimeTimeZone { backing_store }
    }
    #[doc = "A single point of time in a combined date and time representation ({date}T{time}; for example, 2017-08-29T04:00:00.0000000)."]
    pub fn date_time(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("dateTime")
    }
    pub fn set_date_time(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("dateTime", value)
    }
    pub fn odata_type(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("@odata.type")
    }
    pub fn set_odata_type(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("@odata.type", value)
    }
    #[doc = "Represents a time zone, for example, 'Pacific Standard Time'.\n\n See below for more possible values."]
    pub fn time_zone(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("timeZone")
    }
    pub fn set_time_zone(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("timeZone", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        writer.write_string_value("dateTime", self.date_time()?.as_deref())?;
        writer.write_string_value("@odata.type", self.odata_type()?.as_deref())?;
        writer.write_string_value("timeZone", self.time_zone()?.as_deref())?;
        Ok(())
    }
}
impl BackedModel for DateTimeTimeZone {
    fn backing_store(&self) -> &dyn BackingStore {
        &*self.backing_store
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        &mut *self.backing_store
    }
}
impl Parsable for DateTimeTimeZone {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = FieldDeserializers::new();
        res.insert("dateTime", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("dateTime", Some(val))?;
            }
            Ok(())
        });
        res.insert("@odata.type", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("@odata.type", Some(val))?;
            }
            Ok(())
        });
        res.insert("timeZone", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("timeZone", Some(val))?;
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
impl StoreValue for DateTimeTimeZone {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_date_time_time_zone_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_date_time_time_zone_from_discriminator_value(
    _parse_node: &dyn ParseNode,
) -> Result<DateTimeTimeZone, Error> {
    Ok(DateTimeTimeZone::new())
}
