/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to AttendeeBase. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
    discriminator_value,
};
use crate::store::{BackingStore, StoreValue, model_from_store, odata_typed_store};
use crate::types::attendee::*;
use crate::types::attendee_type::*;
use crate::types::recipient::*;
use serde_json::Value;
#[derive(Clone, Debug)]
pub struct AttendeeBase {
    pub(crate) recipient: Recipient,
}
impl Default for AttendeeBase {
    fn default() -> Self {
        Self::new()
    }
}
impl AttendeeBase {
    #[doc = "Instantiates a new `AttendeeBase` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(odata_typed_store("#microsoft.graph.attendeeBase"))
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        AttendeeBase {
            recipient: Recipient::with_backing_store(backing_store),
        }
    }
    #[doc = "Accessor to inherited properties from `Recipient`."]
    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }
    #[doc = "Mutable accessor to inherited properties from `Recipient`."]
    pub fn recipient_mut(&mut self) -> &mut Recipient {
        &mut self.recipient
    }
    #[doc = "The type of attendee.\n\n The possible values are: required, optional, resource. Currently if the attendee is a person, findMeetingTimes always considers the person is of the Required type."]
    pub fn type_escaped(&self) -> Result<Option<AttendeeType>, Error> {
        self.backing_store().get_value("type")
    }
    pub fn set_type_escaped(&mut self, value: Option<AttendeeType>) -> Result<(), Error> {
        self.backing_store_mut().set_value("type", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.recipient.serialize_properties(writer)?;
        writer.write_enum_value("type", self.type_escaped()?)?;
        Ok(())
    }
}
impl BackedModel for AttendeeBase {
    fn backing_store(&self) -> &dyn BackingStore {
        self.recipient.backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.recipient.backing_store_mut()
    }
}
impl Parsable for AttendeeBase {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = self.recipient.field_deserializers();
        res.insert("type", |store, n| {
            if let Some(val) = n.enum_value::<AttendeeType>()? {
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
impl StoreValue for AttendeeBase {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, |_| Ok(Self::new()))
    }
}
#[doc = "`AttendeeBase` or one of the types derived from it, as selected by `@odata.type`."]
#[derive(Clone, Debug)]
pub enum AttendeeBaseKind {
    AttendeeBase(AttendeeBase),
    Attendee(Attendee),
}
impl AttendeeBaseKind {
    #[doc = "Accessor to the `AttendeeBase` properties every variant shares."]
    pub fn attendee_base(&self) -> &AttendeeBase {
        match self {
            Self::AttendeeBase(v) => v,
            Self::Attendee(v) => v.attendee_base(),
        }
    }
    #[doc = "Mutable accessor to the `AttendeeBase` properties every variant shares."]
    pub fn attendee_base_mut(&mut self) -> &mut AttendeeBase {
        match self {
            Self::AttendeeBase(v) => v,
            Self::Attendee(v) => v.attendee_base_mut(),
        }
    }
}
impl From<AttendeeBase> for AttendeeBaseKind {
    fn from(value: AttendeeBase) -> Self {
        Self::AttendeeBase(value)
    }
}
impl From<Attendee> for AttendeeBaseKind {
    fn from(value: Attendee) -> Self {
        Self::Attendee(value)
    }
}
impl BackedModel for AttendeeBaseKind {
    fn backing_store(&self) -> &dyn BackingStore {
        self.attendee_base().backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.attendee_base_mut().backing_store_mut()
    }
}
impl Parsable for AttendeeBaseKind {
    fn field_deserializers(&self) -> FieldDeserializers {
        match self {
            Self::AttendeeBase(v) => v.field_deserializers(),
            Self::Attendee(v) => v.field_deserializers(),
        }
    }
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        match self {
            Self::AttendeeBase(v) => v.serialize(writer),
            Self::Attendee(v) => v.serialize(writer),
        }
    }
}
impl StoreValue for AttendeeBaseKind {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_attendee_base_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_attendee_base_from_discriminator_value(
    parse_node: &dyn ParseNode,
) -> Result<AttendeeBaseKind, Error> {
    Ok(match discriminator_value(parse_node)?.as_deref() {
        Some("#microsoft.graph.attendee") => AttendeeBaseKind::Attendee(Attendee::new()),
        _ => AttendeeBaseKind::AttendeeBase(AttendeeBase::new()),
    })
}
