/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to EventMessageRequest. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, odata_typed_store};
use crate::types::date_time_time_zone::*;
use crate::types::event_message::*;
use crate::types::location::*;
use crate::types::meeting_request_type::*;
use serde_json::Value;
#[derive(Clone, Debug)]
pub struct EventMessageRequest {
    pub(crate) event_message: EventMessage,
}
impl Default for EventMessageRequest {
    fn default() -> Self {
        Self::new()
    }
}
impl EventMessageRequest {
    #[doc = "Instantiates a new `EventMessageRequest` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(odata_typed_store("#microsoft.graph.eventMessageRequest"))
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        EventMessageRequest {
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
    #[doc = "True if the meeting organizer allows invitees to propose a new time when responding; otherwise, false.\n\n Optional. The default is true."]
    pub fn allow_new_time_proposals(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("allowNewTimeProposals")
    }
    pub fn set_allow_new_time_proposals(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("allowNewTimeProposals", value)
    }
    pub fn meeting_request_type(&self) -> Result<Option<MeetingRequestType>, Error> {
        self.backing_store().get_value("meetingRequestType")
    }
    pub fn set_meeting_request_type(
        &mut self,
        value: Option<MeetingRequestType>,
    ) -> Result<(), Error> {
        self.backing_store_mut().set_value("meetingRequestType", value)
    }
    #[doc = "If the meeting update changes the meeting end time, this property specifies the previous meeting end time."]
    pub fn previous_end_date_time(&self) -> Result<Option<DateTimeTimeZone>, Error> {
        self.backing_store().get_value("previousEndDateTime")
    }
    pub fn set_previous_end_date_time(
        &mut self,
        value: Option<DateTimeTimeZone>,
    ) -> Result<(), Error> {
        self.backing_store_mut().set_value("previousEndDateTime", value)
    }
    #[doc = "If the meeting update changes the meeting location, this property specifies the previous meeting location."]
    pub fn previous_location(&self) -> Result<Option<Location>, Error> {
        self.backing_store().get_value("previousLocation")
    }
    pub fn set_previous_location(&mut self, value: Option<Location>) -> Result<(), Error> {
        self.backing_store_mut().set_value("previousLocation", value)
    }
    #[doc = "If the meeting update changes the meeting start time, this property specifies the previous meeting start time."]
    pub fn previous_start_date_time(&self) -> Result<Option<DateTimeTimeZone>, Error> {
        self.backing_store().get_value("previousStartDateTime")
    }
    pub fn set_previous_start_date_time(
        &mut self,
        value: Option<DateTimeTimeZone>,
    ) -> Result<(), Error> {
        self.backing_store_mut().set_value("previousStartDateTime", value)
    }
    #[doc = "Set to true if the sender would like the invitee to send a response to the requested meeting."]
    pub fn response_requested(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("responseRequested")
    }
    pub fn set_response_requested(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("responseRequested", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.event_message.serialize_properties(writer)?;
        writer.write_bool_value("allowNewTimeProposals", self.allow_new_time_proposals()?)?;
        writer.write_enum_value("meetingRequestType", self.meeting_request_type()?)?;
        writer.write_object("previousEndDateTime", self.previous_end_date_time()?.as_ref())?;
        writer.write_object("previousLocation", self.previous_location()?.as_ref())?;
        writer.write_object("previousStartDateTime", self.previous_start_date_time()?.as_ref())?;
        writer.write_bool_value("responseRequested", self.response_requested()?)?;
        Ok(())
    }
}
impl BackedModel for EventMessageRequest {
    fn backing_store(&self) -> &dyn BackingStore {
        self.event_message.backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.event_message.backing_store_mut()
    }
}
impl Parsable for EventMessageRequest {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = self.event_message.field_deserializers();
        res.insert("allowNewTimeProposals", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("allowNewTimeProposals", Some(val))?;
            }
            Ok(())
        });
        res.insert("meetingRequestType", |store, n| {
            if let Some(val) = n.enum_value::<MeetingRequestType>()? {
                store.set_value("meetingRequestType", Some(val))?;
            }
            Ok(())
        });
        res.insert("previousEndDateTime", |store, n| {
            if let Some(val) =
                n.object_value(create_date_time_time_zone_from_discriminator_value)?
            {
                store.set_value("previousEndDateTime", Some(val))?;
            }
            Ok(())
        });
        res.insert("previousLocation", |store, n| {
            if let Some(val) = n.object_value(create_location_from_discriminator_value)? {
                store.set_value("previousLocation", Some(val))?;
            }
            Ok(())
        });
        res.insert("previousStartDateTime", |store, n| {
            if let Some(val) =
                n.object_value(create_date_time_time_zone_from_discriminator_value)?
            {
                store.set_value("previousStartDateTime", Some(val))?;
            }
            Ok(())
        });
        res.insert("responseRequested", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("responseRequested", Some(val))?;
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
impl StoreValue for EventMessageRequest {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_event_message_request_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_event_message_request_from_discriminator_value(
    _parse_node: &dyn ParseNode,
) -> Result<EventMessageRequest, Error> {
    Ok(EventMessageRequest::new())
}
