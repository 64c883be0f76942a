/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to ResponseStatus. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode,
    SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, new_backing_store};
use crate::types::response_type::*;
use serde_json::Value;
use time::OffsetDateTime;
#[derive(Clone, Debug)]
pub struct ResponseStatus {
    pub(crate) backing_store: Box<dyn BackingStore>,
}
impl Default for ResponseStatus {
    fn default() -> Self {
        Self::new()
    }
}
impl ResponseStatus {
    #[doc = "Instantiates a new `ResponseStatus` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(new_backing_store())
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        ResponseStatus { backing_store }
    }
    pub fn odata_type(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("@odata.type")
    }
    pub fn set_odata_type(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("@odata.type", value)
    }
    #[doc = "The response type.\n\n Possible values are: none, organizer, tentativelyAccepted, accepted, declined, notResponded.To differentiate between none and notResponded:  none – from organizer's perspective. This value is used when the status of an attendee/participant is reported to the organizer of a meeting.  notResponded – from attendee's perspective. Indicates the attendee has not responded to the meeting request.  Clients can treat notResponded == none.  As an example, if attendee Alex hasn't responded to a meeting request, getting Alex' response status for that event in Alex' calendar returns notResponded. Getting Alex' response from the calendar of any other attendee or the organizer's returns none. Getting the organizer's response for the event in anybody's calendar also returns none."]
    pub fn response(&self) -> Result<Option<ResponseType>, Error> {
        self.backing_store().get_value("response")
    }
    pub fn set_response(&mut self, value: Option<ResponseType>) -> Result<(), Error> {
        self.backing_store_mut().set_value("response", value)
    }
    #[doc = "The date and time when the response was returned.\n\n It uses ISO 8601 format and is always in UTC time. For example, midnight UTC on Jan 1, 2014 is 2014-01-01T00:00:00Z"]
    pub fn time(&self) -> Result<Option<OffsetDateTime>, Error> {
        self.backing_store().get_value("time")
    }
    pub fn set_time(&mut self, value: Option<OffsetDateTime>) -> Result<(), Error> {
        self.backing_store_mut().set_value("time", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        writer.write_string_value("@odata.type", self.odata_type()?.as_deref())?;
        writer.write_enum_value("response", self.response()?)?;
        writer.write_date_time_value("time", self.time()?)?;
        Ok(())
    }
}
impl BackedModel for ResponseStatus {
    fn backing_store(&self) -> &dyn BackingStore {
        &*self.backing_store
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        &mut *self.backing_store
    }
}
impl Parsable for ResponseStatus {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = FieldDeserializers::new();
        res.insert("@odata.type", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("@odata.type", Some(val))?;
            }
            Ok(())
        });
        res.insert("response", |store, n| {
            if let Some(val) = n.enum_value::<ResponseType>()? {
                store.set_value("response", Some(val))?;
            }
            Ok(())
        });
        res.insert("time", |store, n| {
            if let Some(val) = n.date_time_value()? {
                store.set_value("time", Some(val))?;
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
impl StoreValue for ResponseStatus {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_response_status_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_response_status_from_discriminator_value(
    _parse_node: &dyn ParseNode,
) -> Result<ResponseStatus, Error> {
    Ok(ResponseStatus::new())
}
