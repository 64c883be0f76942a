/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to AndroidManagedAppRegistration. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, odata_typed_store};
use crate::types::managed_app_registration::*;
use serde_json::Value;
#[doc = "Represents the synchronization details of an android app, with management capabilities, for a specific user."]
#[derive(Clone, Debug)]
pub struct AndroidManagedAppRegistration {
    pub(crate) managed_app_registration: ManagedAppRegistration,
}
impl Default for AndroidManagedAppRegistration {
    fn default() -> Self {
        Self::new()
    }
}
impl AndroidManagedAppRegistration {
    #[doc = "Instantiates a new `AndroidManagedAppRegistration` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(odata_typed_store("#microsoft.graph.androidManagedAppRegistration"))
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        AndroidManagedAppRegistration {
            managed_app_registration: ManagedAppRegistration::with_backing_store(backing_store),
        }
    }
    #[doc = "Accessor to inherited properties from `ManagedAppRegistration`."]
    pub fn managed_app_registration(&self) -> &ManagedAppRegistration {
        &self.managed_app_registration
    }
    #[doc = "Mutable accessor to inherited properties from `ManagedAppRegistration`."]
    pub fn managed_app_registration_mut(&mut self) -> &mut ManagedAppRegistration {
        &mut self.managed_app_registration
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.managed_app_registration.serialize_properties(writer)?;
        Ok(())
    }
}
impl BackedModel for AndroidManagedAppRegistration {
    fn backing_store(&self) -> &dyn BackingStore {
        self.managed_app_registration.backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.managed_app_registration.backing_store_mut()
    }
}
impl Parsable for AndroidManagedAppRegistration {
    fn field_deserializers(&self) -> FieldDeserializers {
        let res = self.managed_app_registration.field_deserializers();
        res
    }
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.serialize_properties(writer)?;
        writer.write_additional_data(self.additional_data()?.as_ref())?;
        Ok(())
    }
}
impl StoreValue for AndroidManagedAppRegistration {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_android_managed_app_registration_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_android_managed_app_registration_from_discriminator_value(
    _parse_node: &dyn ParseNode,
) -> Result<AndroidManagedAppRegistration, Error> {
    Ok(AndroidManagedAppRegistration::new())
}
