/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to IosMobileAppIdentifier. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, odata_typed_store};
use crate::types::mobile_app_identifier::*;
use serde_json::Value;
#[doc = "The identifier for an iOS app."]
#[derive(Clone, Debug)]
pub struct IosMobileAppIdentifier {
    pub(crate) mobile_app_identifier: MobileAppIdentifier,
}
impl Default for IosMobileAppIdentifier {
    fn default() -> Self {
        Self::new()
    }
}
impl IosMobileAppIdentifier {
    #[doc = "Instantiates a new `IosMobileAppIdentifier` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(odata_typed_store("#microsoft.graph.iosMobileAppIdentifier"))
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        IosMobileAppIdentifier {
            mobile_app_identifier: MobileAppIdentifier::with_backing_store(backing_store),
        }
    }
    #[doc = "Accessor to inherited properties from `MobileAppIdentifier`."]
    pub fn mobile_app_identifier(&self) -> &MobileAppIdentifier {
        &self.mobile_app_identifier
    }
    #[doc = "Mutable accessor to inherited properties from `MobileAppIdentifier`."]
    pub fn mobile_app_identifier_mut(&mut self) -> &mut MobileAppIdentifier {
        &mut self.mobile_app_identifier
    }
    #[doc = "The identifier for an app, as specified in the app store."]
    pub fn bundle_id(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("bundleId")
    }
    pub fn set_bundle_id(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("bundleId", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.mobile_app_identifier.serialize_properties(writer)?;
        writer.write_string_value("bundleId", self.bundle_id()?.as_deref())?;
        Ok(())
    }
}
impl BackedModel for IosMobileAppIdentifier {
    fn backing_store(&self) -> &dyn BackingStore {
        self.mobile_app_identifier.backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.mobile_app_identifier.backing_store_mut()
    }
}
impl Parsable for IosMobileAppIdentifier {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = self.mobile_app_identifier.field_deserializers();
        res.insert("bundleId", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("bundleId", Some(val))?;
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
impl StoreValue for IosMobileAppIdentifier {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_ios_mobile_app_identifier_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_ios_mobile_app_identifier_from_discriminator_value(
    _parse_node: &dyn ParseNode,
) -> Result<IosMobileAppIdentifier, Error> {
    Ok(IosMobileAppIdentifier::new())
}
