/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to EventMessage. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
    discriminator_value,
};
use crate::store::{BackingStore, StoreValue, model_from_store, odata_typed_store};
use crate::types::date_time_time_zone::*;
use crate::types::event::*;
use crate::types::event_message_request::*;
use crate::types::event_message_response::*;
use crate::types::event_type::*;
use crate::types::location::*;
use crate::types::meeting_message_type::*;
use crate::types::message::*;
use serde_json::Value;
#[derive(Clone, Debug)]
pub struct EventMessage {
    pub(crate) message: Message,
}
impl Default for EventMessage {
    fn default() -> Self {
        Self::new()
    }
}
impl EventMessage {
    #[doc = "Instantiates a new `EventMessage` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(odata_typed_store("#microsoft.graph.eventMessage"))
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        EventMessage {
            message: Message::with_backing_store(backing_store),
        }
    }
    #[doc = "Accessor to inherited properties from `Message`."]
    pub fn message(&self) -> &Message {
        &self.message
    }
    #[doc = "Mutable accessor to inherited properties from `Message`."]
    pub fn message_mut(&mut self) -> &mut Message {
        &mut self.message
    }
    pub fn end_date_time(&self) -> Result<Option<DateTimeTimeZone>, Error> {
        self.backing_store().get_value("endDateTime")
    }
    pub fn set_end_date_time(&mut self, value: Option<DateTimeTimeZone>) -> Result<(), Error> {
        self.backing_store_mut().set_value("endDateTime", value)
    }
    #[doc = "The event associated with the event message.\n\n The assumption for attendees or room resources is that the Calendar Attendant is set to automatically update the calendar with an event when meeting request event messages arrive. Navigation property. Read-only."]
    pub fn event(&self) -> Result<Option<Event>, Error> {
        self.backing_store().get_value("event")
    }
    pub fn set_event(&mut self, value: Option<Event>) -> Result<(), Error> {
        self.backing_store_mut().set_value("event", value)
    }
    pub fn is_all_day(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("isAllDay")
    }
    pub fn set_is_all_day(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("isAllDay", value)
    }
    #[doc = "True if this meeting request is accessible to a delegate, false otherwise.\n\n The default is false."]
    pub fn is_delegated(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("isDelegated")
    }
    pub fn set_is_delegated(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("isDelegated", value)
    }
    pub fn is_out_of_date(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("isOutOfDate")
    }
    pub fn set_is_out_of_date(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("isOutOfDate", value)
    }
    pub fn location(&self) -> Result<Option<Location>, Error> {
        self.backing_store().get_value("location")
    }
    pub fn set_location(&mut self, value: Option<Location>) -> Result<(), Error> {
        self.backing_store_mut().set_value("location", value)
    }
    #[doc = "The type of event message: none, meetingRequest, meetingCancelled, meetingAccepted, meetingTenativelyAccepted, meetingDeclined."]
    pub fn meeting_message_type(&self) -> Result<Option<MeetingMessageType>, Error> {
        self.backing_store().get_value("meetingMessageType")
    }
    pub fn set_meeting_message_type(
        &mut self,
        value: Option<MeetingMessageType>,
    ) -> Result<(), Error> {
        self.backing_store_mut().set_value("meetingMessageType", value)
    }
    pub fn start_date_time(&self) -> Result<Option<DateTimeTimeZone>, Error> {
        self.backing_store().get_value("startDateTime")
    }
    pub fn set_start_date_time(&mut self, value: Option<DateTimeTimeZone>) -> Result<(), Error> {
        self.backing_store_mut().set_value("startDateTime", value)
    }
    pub fn type_escaped(&self) -> Result<Option<EventType>, Error> {
        self.backing_store().get_value("type")
    }
    pub fn set_type_escaped(&mut self, value: Option<EventType>) -> Result<(), Error> {
        self.backing_store_mut().set_value("type", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.message.serialize_properties(writer)?;
        writer.write_object("endDateTime", self.end_date_time()?.as_ref())?;
        writer.write_object("event", self.event()?.as_ref())?;
        writer.write_bool_value("isAllDay", self.is_all_day()?)?;
        writer.write_bool_value("isDelegated", self.is_delegated()?)?;
        writer.write_bool_value("isOutOfDate", self.is_out_of_date()?)?;
        writer.write_object("location", self.location()?.as_ref())?;
        writer.write_enum_value("meetingMessageType", self.meeting_message_type()?)?;
        writer.write_object("startDateTime", self.start_date_time()?.as_ref())?;
        writer.write_enum_value("type", self.type_escaped()?)?;
        Ok(())
    }
}
impl BackedModel for EventMessage {
    fn backing_store(&self) -> &dyn BackingStore {
        self.message.backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.message.backing_store_mut()
    }
}
impl Parsable for EventMessage {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = self.message.field_deserializers();
        res.insert("endDateTime", |store, n| {
            if let Some(val) =
                n.object_value(create_date_time_time_zone_from_discriminator_value)?
            {
                store.set_value("endDateTime", Some(val))?;
            }
            Ok(())
        });
        res.insert("event", |store, n| {
            if let Some(val) = n.object_value(create_event_from_discriminator_value)? {
                store.set_value("event", Some(val))?;
            }
            Ok(())
        });
        res.insert("isAllDay", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("isAllDay", Some(val))?;
            }
            Ok(())
        });
        res.insert("isDelegated", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("isDelegated", Some(val))?;
            }
            Ok(())
        });
        res.insert("isOutOfDate", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("isOutOfDate", Some(val))?;
            }
            Ok(())
        });
        res.insert("location", |store, n| {
            if let Some(val) = n.object_value(create_location_from_discriminator_value)? {
                store.set_value("location", Some(val))?;
            }
            Ok(())
        });
        res.insert("meetingMessageType", |store, n| {
            if let Some(val) = n.enum_value::<MeetingMessageType>()? {
                store.set_value("meetingMessageType", Some(val))?;
            }
            Ok(())
        });
        res.insert("startDateTime", |store, n| {
            if let Some(val) =
                n.object_value(create_date_time_time_zone_from_discriminator_value)?
            {
                store.set_value("startDateTime", Some(val))?;
            }
            Ok(())
        });
        res.insert("type", |store, n| {
            if let Some(val) = n.enum_value::<EventType>()? {
                store.set_value("type", Some(val))?;
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
impl StoreValue for EventMessage {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, |_| Ok(Self::new()))
    }
}
#[doc = "`EventMessage` or one of the types derived from it, as selected by `@odata.type`."]
#[derive(Clone, Debug)]
pub enum EventMessageKind {
    EventMessage(EventMessage),
    EventMessageRequest(EventMessageRequest),
    EventMessageResponse(EventMessageResponse),
}
impl EventMessageKind {
    #[doc = "Accessor to the `EventMessage` properties every variant shares."]
    pub fn event_message(&self) -> &EventMessage {
        match self {
            Self::EventMessage(v) => v,
            Self::EventMessageRequest(v) => v.event_message(),
            Self::EventMessageResponse(v) => v.event_message(),
        }
    }
    #[doc = "Mutable accessor to the `EventMessage` properties every variant shares."]
    pub fn event_message_mut(&mut self) -> &mut EventMessage {
        match self {
            Self::EventMessage(v) => v,
            Self::EventMessageRequest(v) => v.event_message_mut(),
            Self::EventMessageResponse(v) => v.event_message_mut(),
        }
    }
}
impl From<EventMessage> for EventMessageKind {
    fn from(value: EventMessage) -> Self {
        Self::EventMessage(value)
    }
}
impl From<EventMessageRequest> for EventMessageKind {
    fn from(value: EventMessageRequest) -> Self {
        Self::EventMessageRequest(value)
    }
}
impl From<EventMessageResponse> for EventMessageKind {
    fn from(value: EventMessageResponse) -> Self {
        Self::EventMessageResponse(value)
    }
}
impl BackedModel for EventMessageKind {
    fn backing_store(&self) -> &dyn BackingStore {
        self.event_message().backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.event_message_mut().backing_store_mut()
    }
}
impl Parsable for EventMessageKind {
    fn field_deserializers(&self) -> FieldDeserializers {
        match self {
            Self::EventMessage(v) => v.field_deserializers(),
            Self::EventMessageRequest(v) => v.field_deserializers(),
            Self::EventMessageResponse(v) => v.field_deserializers(),
        }
    }
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        match self {
            Self::EventMessage(v) => v.serialize(writer),
            Self::EventMessageRequest(v) => v.serialize(writer),
            Self::EventMessageResponse(v) => v.serialize(writer),
        }
    }
}
impl StoreValue for EventMessageKind {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_event_message_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_event_message_from_discriminator_value(
    parse_node: &dyn ParseNode,
) -> Result<EventMessageKind, Error> {
    Ok(match discriminator_value(parse_node)?.as_deref() {
        Some("#microsoft.graph.eventMessageRequest") => {
            EventMessageKind::EventMessageRequest(EventMessageRequest::new())
        }
        Some("#microsoft.graph.eventMessageResponse") => {
            EventMessageKind::EventMessageResponse(EventMessageResponse::new())
        }
        _ => EventMessageKind::EventMessage(EventMessage::new()),
    })
}
