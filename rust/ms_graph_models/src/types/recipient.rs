/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to Recipient. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode,
    SerializationWriter, discriminator_value,
};
use crate::store::{BackingStore, StoreValue, model_from_store, odata_typed_store};
use crate::types::attendee::*;
use crate::types::attendee_base::*;
use crate::types::email_address::*;
use serde_json::Value;
#[derive(Clone, Debug)]
pub struct Recipient {
    pub(crate) backing_store: Box<dyn BackingStore>,
}
impl Default for Recipient {
    fn default() -> Self {
        Self::new()
    }
}
impl Recipient {
    #[doc = "Instantiates a new `Recipient` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(odata_typed_store("#microsoft.graph.recipient"))
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        Recipient { backing_store }
    }
    #[doc = "The recipient's email address."]
    pub fn email_address(&self) -> Result<Option<EmailAddress>, Error> {
        self.backing_store().get_value("emailAddress")
    }
    pub fn set_email_address(&mut self, value: Option<EmailAddress>) -> Result<(), Error> {
        self.backing_store_mut().set_value("emailAddress", value)
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
        writer.write_object("emailAddress", self.email_address()?.as_ref())?;
        writer.write_string_value("@odata.type", self.odata_type()?.as_deref())?;
        Ok(())
    }
}
impl BackedModel for Recipient {
    fn backing_store(&self) -> &dyn BackingStore {
        &*self.backing_store
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        &mut *self.backing_store
    }
}
impl Parsable for Recipient {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = FieldDeserializers::new();
        res.insert("emailAddress", |store, n| {
            if let Some(val) = n.object_value(create_email_address_from_discriminator_value)? {
                store.set_value("emailAddress", Some(val))?;
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
impl StoreValue for Recipient {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, |_| Ok(Self::new()))
    }
}
#[doc = "`Recipient` or one of the types derived from it, as selected by `@odata.type`."]
#[derive(Clone, Debug)]
pub enum RecipientKind {
    Recipient(Recipient),
    AttendeeBase(AttendeeBase),
    Attendee(Attendee),
}
impl RecipientKind {
    #[doc = "Accessor to the `Recipient` properties every variant shares."]
    pub fn recipient(&self) -> &Recipient {
        match self {
            Self::Recipient(v) => v,
            Self::AttendeeBase(v) => v.recipient(),
            Self::Attendee(v) => v.attendee_base().recipient(),
        }
    }
    #[doc = "Mutable accessor to the `Recipient` properties every variant shares."]
    pub fn recipient_mut(&mut self) -> &mut Recipient {
        match self {
            Self::Recipient(v) => v,
            Self::AttendeeBase(v) => v.recipient_mut(),
            Self::Attendee(v) => v.attendee_base_mut().recipient_mut(),
        }
    }
}
impl From<Recipient> for RecipientKind {
    fn from(value: Recipient) -> Self {
        Self::Recipient(value)
    }
}
impl From<AttendeeBase> for RecipientKind {
    fn from(value: AttendeeBase) -> Self {
        Self::AttendeeBase(value)
    }
}
impl From<Attendee> for RecipientKind {
    fn from(value: Attendee) -> Self {
        Self::Attendee(value)
    }
}
impl BackedModel for RecipientKind {
    fn backing_store(&self) -> &dyn BackingStore {
        self.recipient().backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.recipient_mut().backing_store_mut()
    }
}
impl Parsable for RecipientKind {
    fn field_deserializers(&self) -> FieldDeserializers {
        match self {
            Self::Recipient(v) => v.field_deserializers(),
            Self::AttendeeBase(v) => v.field_deserializers(),
            Self::Attendee(v) => v.field_deserializers(),
        }
    }
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        match self {
            Self::Recipient(v) => v.serialize(writer),
            Self::AttendeeBase(v) => v.serialize(writer),
            Self::Attendee(v) => v.serialize(writer),
        }
    }
}
impl StoreValue for RecipientKind {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_recipient_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_recipient_from_discriminator_value(
    parse_node: &dyn ParseNode,
) -> Result<RecipientKind, Error> {
    Ok(match discriminator_value(parse_node)?.as_deref() {
        Some("#microsoft.graph.attendeeBase") => RecipientKind::AttendeeBase(AttendeeBase::new()),
        Some("#microsoft.graph.attendee") => RecipientKind::Attendee(Attendee::new()),
        _ => RecipientKind::Recipient(Recipient::new()),
    })
}
