/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to Attendee. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, odata_typed_store};
use crate::types::attendee_base::*;
use crate::types::response_status::*;
use crate::types::time_slot::*;
use serde_json::Value;
#[derive(Clone, Debug)]
pub struct Attendee {
    pub(crate) attendee_base: AttendeeBase,
}
impl Default for Attendee {
    fn default() -> Self {
        Self::new()
    }
}
impl Attendee {
    #[doc = "Instantiates a new `Attendee` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(odata_typed_store("#microsoft.graph.attendee"))
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        Attendee {
            attendee_base: AttendeeBase::with_backing_store(backing_store),
        }
    }
    #[doc = "Accessor to inherited properties from `AttendeeBase`."]
    pub fn attendee_base(&self) -> &AttendeeBase {
        &self.attendee_base
    }
    #[doc = "Mutable accessor to inherited properties from `AttendeeBase`."]
    pub fn attendee_base_mut(&mut self) -> &mut AttendeeBase {
        &mut self.attendee_base
    }
    #[doc = "An alternate date/time proposed by the attendee for a meeting request to start and end.\n\n If the attendee hasn't proposed another time, then this property isn't included in a response of a GET event."]
    pub fn proposed_new_time(&self) -> Result<Option<TimeSlot>, Error> {
        self.backing_store().get_value("proposedNewTime")
    }
    pub fn set_proposed_new_time(&mut self, value: Option<TimeSlot>) -> Result<(), Error> {
        self.backing_store_mut().set_value("proposedNewTime", value)
    }
    #[doc = "The attendee's response (none, accepted, declined, etc.) for the event and date-time that the response was sent."]
    pub fn status(&self) -> Result<Option<ResponseStatus>, Error> {
        self.backing_store().get_value("status")
    }
    pub fn set_status(&mut self, value: Option<ResponseStatus>) -> Result<(), Error> {
        self.backing_store_mut().set_value("status", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.attendee_base.serialize_properties(writer)?;
        writer.write_object("proposedNewTime", self.proposed_new_time()?.as_ref())?;
        writer.write_object("status", self.status()?.as_ref())?;
        Ok(())
    }
}
impl BackedModel for Attendee {
    fn backing_store(&self) -> &dyn BackingStore {
        self.attendee_base.backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.attendee_base.backing_store_mut()
    }
}
impl Parsable for Attendee {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = self.attendee_base.field_deserializers();
        res.insert("proposedNewTime", |store, n| {
            if let Some(val) = n.object_value(create_time_slot_from_discriminator_value)? {
                store.set_value("proposedNewTime", Some(val))?;
            }
            Ok(())
        });
        res.insert("status", |store, n| {
            if let Some(val) = n.object_value(create_response_status_from_discriminator_value)? {
                store.set_value("status", Some(val))?;
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
impl StoreValue for Attendee {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_attendee_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_attendee_from_discriminator_value(
    _parse_node: &dyn ParseNode,
) -> Result<Attendee, Error> {
    Ok(Attendee::new())
}
