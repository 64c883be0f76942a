/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to MobileAppIdentifier. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode,
    SerializationWriter, discriminator_value,
};
use crate::store::{BackingStore, StoreValue, model_from_store, new_backing_store};
use crate::types::android_mobile_app_identifier::*;
use crate::types::ios_mobile_app_identifier::*;
use serde_json::Value;
#[doc = "The identifier for a mobile app."]
#[derive(Clone, Debug)]
pub struct MobileAppIdentifier {
    pub(crate) backing_store: Box<dyn BackingStore>,
}
impl Default for MobileAppIdentifier {
    fn default() -> Self {
        Self::new()
    }
}
impl MobileAppIdentifier {
    #[doc = "Instantiates a new `MobileAppIdentifier` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(new_backing_store())
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        MobileAppIdentifier { backing_store }
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
        writer.write_string_value("@odata.type", self.odata_type()?.as_deref())?;
        Ok(())
    }
}
impl BackedModel for MobileAppIdentifier {
    fn backing_store(&self) -> &dyn BackingStore {
        &*self.backing_store
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        &mut *self.backing_store
    }
}
impl Parsable for MobileAppIdentifier {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = FieldDeserializers::new();
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
impl StoreValue for MobileAppIdentifier {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, |_| Ok(Self::new()))
    }
}
#[doc = "`MobileAppIdentifier` or one of the types derived from it, as selected by `@odata.type`."]
#[derive(Clone, Debug)]
pub enum MobileAppIdentifierKind {
    MobileAppIdentifier(MobileAppIdentifier),
    AndroidMobileAppIdentifier(AndroidMobileAppIdentifier),
    IosMobileAppIdentifier(IosMobileAppIdentifier),
}
impl MobileAppIdentifierKind {
    #[doc = "Accessor to the `MobileAppIdentifier` properties every variant shares."]
    pub fn mobile_app_identifier(&self) -> &MobileAppIdentifier {
        match self {
            Self::MobileAppIdentifier(v) => v,
            Self::AndroidMobileAppIdentifier(v) => v.mobile_app_identifier(),
            Self::IosMobileAppIdentifier(v) => v.mobile_app_identifier(),
        }
    }
    #[doc = "Mutable accessor to the `MobileAppIdentifier` properties every variant shares."]
    pub fn mobile_app_identifier_mut(&mut self) -> &mut MobileAppIdentifier {
        match self {
            Self::MobileAppIdentifier(v) => v,
            Self::AndroidMobileAppIdentifier(v) => v.mobile_app_identifier_mut(),
            Self::IosMobileAppIdentifier(v) => v.mobile_app_identifier_mut(),
        }
    }
}
impl From<MobileAppIdentifier> for MobileAppIdentifierKind {
    fn from(value: MobileAppIdentifier) -> Self {
        Self::MobileAppIdentifier(value)
    }
}
impl From<AndroidMobileAppIdentifier> for MobileAppIdentifierKind {
    fn from(value: AndroidMobileAppIdentifier) -> Self {
        Self::AndroidMobileAppIdentifier(value)
    }
}
impl From<IosMobileAppIdentifier> for MobileAppIdentifierKind {
    fn from(value: IosMobileAppIdentifier) -> Self {
        Self::IosMobileAppIdentifier(value)
    }
}
impl BackedModel for MobileAppIdentifierKind {
    fn backing_store(&self) -> &dyn BackingStore {
        self.mobile_app_identifier().backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.mobile_app_identifier_mut().backing_store_mut()
    }
}
impl Parsable for MobileAppIdentifierKind {
    fn field_deserializers(&self) -> FieldDeserializers {
        match self {
            Self::MobileAppIdentifier(v) => v.field_deserializers(),
            Self::AndroidMobileAppIdentifier(v) => v.field_deserializers(),
            Self::IosMobileAppIdentifier(v) => v.field_deserializers(),
        }
    }
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        match self {
            Self::MobileAppIdentifier(v) => v.serialize(writer),
            Self::AndroidMobileAppIdentifier(v) => v.serialize(writer),
            Self::IosMobileAppIdentifier(v) => v.serialize(writer),
        }
    }
}
impl StoreValue for MobileAppIdentifierKind {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_mobile_app_identifier_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_mobile_app_identifier_from_discriminator_value(
    parse_node: &dyn ParseNode,
) -> Result<MobileAppIdentifierKind, Error> {
    Ok(match discriminator_value(parse_node)?.as_deref() {
        Some("#microsoft.graph.androidMobileAppIdentifier") => {
            MobileAppIdentifierKind::AndroidMobileAppIdentifier(AndroidMobileAppIdentifier::new())
        }
        Some("#microsoft.graph.iosMobileAppIdentifier") => {
            MobileAppIdentifierKind::IosMobileAppIdentifier(IosMobileAppIdentifier::new())
        }
        _ => MobileAppIdentifierKind::MobileAppIdentifier(MobileAppIdentifier::new()),
    })
}
