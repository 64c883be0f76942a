/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to EventMessageResponse. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, odata_typed_store};
use crate::types::event_message::*;
use crate::types::response_type::*;
use crate::types::time_slot::*;
use serde_json::Value;
#[derive(Clone, Debug)]
pub struct EventMessageResponse {
    pub(crate) event_message: EventMessage,
}
impl Default for EventMessageResponse {
    fn default() -> Self {
        Self::new()
    }
}
impl EventMessageResponse {
    #[doc = "Instantiates a new `EventMessageResponse` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(odata_typed_store("#microsoft.graph.eventMessageResponse"))
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        EventMessageResponse {
            event_message: EventMessage::with_backing_store(backing_store),
        }
    }
    #[doc = "Accessor to inherited properties from `EventMessage`."]
    pub fn event_message(&self) -> &EventMessage {
        &self.event_message
    }
    #[doc = "Mutable accessor to inherited properties from `EventMessage`."]
    pub fn event_message_mut(&mut self) -> &mut EventMessage {
        &mut self.event_message
    }
    #[doc = "An alternate date/time proposed by an invitee for a meeting request to start and end.\n\n Read-only. Not filterable."]
    pub fn proposed_new_time(&self) -> Result<Option<TimeSlot>, Error> {
        self.backing_store().get_value("proposedNewTime")
    }
    pub fn set_proposed_new_time(&mut self, value: Option<TimeSlot>) -> Result<(), Error> {
        self.backing_store_mut().set_value("proposedNewTime", value)
    }
    #[doc = "Specifies the type of response to a meeting request.\n\n The possible values are: tentativelyAccepted, accepted, declined. For the eventMessageResponse type, none, organizer, and notResponded aren't supported. Read-only. Not filterable."]
    pub fn response_type(&self) -> Result<Option<ResponseType>, Error> {
        self.backing_store().get_value("responseType")
    }
    pub fn set_response_type(&mut self, value: Option<ResponseType>) -> Result<(), Error> {
        self.backing_store_mut().set_value("responseType", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.event_message.serialize_properties(writer)?;
        writer.write_object("proposedNewTime", self.proposed_new_time()?.as_ref())?;
        writer.write_enum_value("responseType", self.response_type()?)?;
        Ok(())
    }
}
impl BackedModel for EventMessageResponse {
    fn backing_store(&self) -> &dyn BackingStore {
        self.event_message.backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.event_message.backing_store_mut()
    }
}
impl Parsable for EventMessageResponse {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = self.event_message.field_deserializers();
        res.insert("proposedNewTime", |store, n| {
            if let Some(val) = n.object_value(create_time_slot_from_discriminator_value)? {
                store.set_value("proposedNewTime", Some(val))?;
            }
            Ok(())
        });
        res.insert("responseType", |store, n| {
            if let Some(val) = n.enum_value::<ResponseType>()? {
                store.set_value("responseType", Some(val))?;
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
impl StoreValue for EventMessageResponse {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_event_message_response_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_event_message_response_from_discriminator_value(
    _parse_node: &dyn ParseNode,
) -> Result<EventMessageResponse, Error> {
    Ok(EventMessageResponse::new())
}
