/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to ManagedAppRegistration. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
    discriminator_value,
};
use crate::store::{BackingStore, StoreValue, model_from_store, new_backing_store};
use crate::types::android_managed_app_registration::*;
use crate::types::entity::*;
use crate::types::ios_managed_app_registration::*;
use crate::types::managed_app_flagged_reason::*;
use crate::types::mobile_app_identifier::*;
use serde_json::Value;
use time::OffsetDateTime;
#[derive(Clone, Debug)]
pub struct ManagedAppRegistration {
    pub(crate) entity: Entity,
}
impl Default for ManagedAppRegistration {
    fn default() -> Self {
        Self::new()
    }
}
impl ManagedAppRegistration {
    #[doc = "Instantiates a new `ManagedAppRegistration` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(new_backing_store())
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        ManagedAppRegistration {
            entity: Entity::with_backing_store(backing_store),
        }
    }
    #[doc = "Accessor to inherited properties from `Entity`."]
    pub fn entity(&self) -> &Entity {
        &self.entity
    }
    #[doc = "Mutable accessor to inherited properties from `Entity`."]
    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
    #[doc = "The app package Identifier"]
    pub fn app_identifier(&self) -> Result<Option<MobileAppIdentifierKind>, Error> {
        self.backing_store().get_value("appIdentifier")
    }
    pub fn set_app_identifier(
        &mut self,
        value: Option<MobileAppIdentifierKind>,
    ) -> Result<(), Error> {
        self.backing_store_mut().set_value("appIdentifier", value)
    }
    #[doc = "App version"]
    pub fn application_version(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("applicationVersion")
    }
    pub fn set_application_version(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("applicationVersion", value)
    }
    #[doc = "Date and time of creation"]
    pub fn created_date_time(&self) -> Result<Option<OffsetDateTime>, Error> {
        self.backing_store().get_value("createdDateTime")
    }
    pub fn set_created_date_time(&mut self, value: Option<OffsetDateTime>) -> Result<(), Error> {
        self.backing_store_mut().set_value("createdDateTime", value)
    }
    #[doc = "Host device name"]
    pub fn device_name(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("deviceName")
    }
    pub fn set_device_name(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("deviceName", value)
    }
    #[doc = "App management SDK generated tag, which helps relate apps hosted on the same device.\n\n Not guaranteed to relate apps in all conditions."]
    pub fn device_tag(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("deviceTag")
    }
    pub fn set_device_tag(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("deviceTag", value)
    }
    #[doc = "Host device type"]
    pub fn device_type(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("deviceType")
    }
    pub fn set_device_type(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("deviceType", value)
    }
    #[doc = "Zero or more reasons an app registration is flagged.\n\n E.g. app running on rooted device"]
    pub fn flagged_reasons(&self) -> Result<Option<Vec<ManagedAppFlaggedReason>>, Error> {
        self.backing_store().get_collection("flaggedReasons")
    }
    pub fn set_flagged_reasons(
        &mut self,
        value: Option<Vec<ManagedAppFlaggedReason>>,
    ) -> Result<(), Error> {
        self.backing_store_mut().set_collection("flaggedReasons", value)
    }
    #[doc = "Date and time of last the app synced with management service."]
    pub fn last_sync_date_time(&self) -> Result<Option<OffsetDateTime>, Error> {
        self.backing_store().get_value("lastSyncDateTime")
    }
    pub fn set_last_sync_date_time(&mut self, value: Option<OffsetDateTime>) -> Result<(), Error> {
        self.backing_store_mut().set_value("lastSyncDateTime", value)
    }
    #[doc = "App management SDK version"]
    pub fn management_sdk_version(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("managementSdkVersion")
    }
    pub fn set_management_sdk_version(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("managementSdkVersion", value)
    }
    #[doc = "Operating System version"]
    pub fn platform_version(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("platformVersion")
    }
    pub fn set_platform_version(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("platformVersion", value)
    }
    #[doc = "The user Id to who this app registration belongs."]
    pub fn user_id(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("userId")
    }
    pub fn set_user_id(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("userId", value)
    }
    #[doc = "Version of the entity."]
    pub fn version(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("version")
    }
    pub fn set_version(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("version", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.entity.serialize_properties(writer)?;
        writer.write_object("appIdentifier", self.app_identifier()?.as_ref())?;
        writer.write_string_value("applicationVersion", self.application_version()?.as_deref())?;
        writer.write_date_time_value("createdDateTime", self.created_date_time()?)?;
        writer.write_string_value("deviceName", self.device_name()?.as_deref())?;
        writer.write_string_value("deviceTag", self.device_tag()?.as_deref())?;
        writer.write_string_value("deviceType", self.device_type()?.as_deref())?;
        writer.write_collection_of_enum_values(
            "flaggedReasons",
            self.flagged_reasons()?.as_deref(),
        )?;
        writer.write_date_time_value("lastSyncDateTime", self.last_sync_date_time()?)?;
        writer.write_string_value(
            "managementSdkVersion",
            self.management_sdk_version()?.as_deref(),
        )?;
        writer.write_string_value("platformVersion", self.platform_version()?.as_deref())?;
        writer.write_string_value("userId", self.user_id()?.as_deref())?;
        writer.write_string_value("version", self.version()?.as_deref())?;
        Ok(())
    }
}
impl BackedModel for ManagedAppRegistration {
    fn backing_store(&self) -> &dyn BackingStore {
        self.entity.backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.entity.backing_store_mut()
    }
}
impl Parsable for ManagedAppRegistration {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = self.entity.field_deserializers();
        res.insert("appIdentifier", |store, n| {
            if let Some(val) =
                n.object_value(create_mobile_app_identifier_from_discriminator_value)?
            {
                store.set_value("appIdentifier", Some(val))?;
            }
            Ok(())
        });
        res.insert("applicationVersion", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("applicationVersion", Some(val))?;
            }
            Ok(())
        });
        res.insert("createdDateTime", |store, n| {
            if let Some(val) = n.date_time_value()? {
                store.set_value("createdDateTime", Some(val))?;
            }
            Ok(())
        });
        res.insert("deviceName", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("deviceName", Some(val))?;
            }
            Ok(())
        });
        res.insert("deviceTag", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("deviceTag", Some(val))?;
            }
            Ok(())
        });
        res.insert("deviceType", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("deviceType", Some(val))?;
            }
            Ok(())
        });
        res.insert("flaggedReasons", |store, n| {
            if let Some(val) = n.collection_of_enum_values::<ManagedAppFlaggedReason>()? {
                store.set_collection("flaggedReasons", Some(val))?;
            }
            Ok(())
        });
        res.insert("lastSyncDateTime", |store, n| {
            if let Some(val) = n.date_time_value()? {
                store.set_value("lastSyncDateTime", Some(val))?;
            }
            Ok(())
        });
        res.insert("managementSdkVersion", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("managementSdkVersion", Some(val))?;
            }
            Ok(())
        });
        res.insert("platformVersion", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("platformVersion", Some(val))?;
            }
            Ok(())
        });
        res.insert("userId", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("userId", Some(val))?;
            }
            Ok(())
        });
        res.insert("version", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("version", Some(val))?;
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
impl StoreValue for ManagedAppRegistration {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, |_| Ok(Self::new()))
    }
}
#[doc = "`ManagedAppRegistration` or one of the types derived from it, as selected by `@odata.type`."]
#[derive(Clone, Debug)]
pub enum ManagedAppRegistrationKind {
    ManagedAppRegistration(ManagedAppRegistration),
    AndroidManagedAppRegistration(AndroidManagedAppRegistration),
    IosManagedAppRegistration(IosManagedAppRegistration),
}
impl ManagedAppRegistrationKind {
    #[doc = "Accessor to the `ManagedAppRegistration` properties every variant shares."]
    pub fn managed_app_registration(&self) -> &ManagedAppRegistration {
        match self {
            Self::ManagedAppRegistration(v) => v,
            Self::AndroidManagedAppRegistration(v) => v.managed_app_registration(),
            Self::IosManagedAppRegistration(v) => v.managed_app_registration(),
        }
    }
    #[doc = "Mutable accessor to the `ManagedAppRegistration` properties every variant shares."]
    pub fn managed_app_registration_mut(&mut self) -> &mut ManagedAppRegistration {
        match self {
            Self::ManagedAppRegistration(v) => v,
            Self::AndroidManagedAppRegistration(v) => v.managed_app_registration_mut(),
            Self::IosManagedAppRegistration(v) => v.managed_app_registration_mut(),
        }
    }
}
impl From<ManagedAppRegistration> for ManagedAppRegistrationKind {
    fn from(value: ManagedAppRegistration) -> Self {
        Self::ManagedAppRegistration(value)
    }
}
impl From<AndroidManagedAppRegistration> for ManagedAppRegistrationKind {
    fn from(value: AndroidManagedAppRegistration) -> Self {
        Self::AndroidManagedAppRegistration(value)
    }
}
impl From<IosManagedAppRegistration> for ManagedAppRegistrationKind {
    fn from(value: IosManagedAppRegistration) -> Self {
        Self::IosManagedAppRegistration(value)
    }
}
impl BackedModel for ManagedAppRegistrationKind {
    fn backing_store(&self) -> &dyn BackingStore {
        self.managed_app_registration().backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.managed_app_registration_mut().backing_store_mut()
    }
}
impl Parsable for ManagedAppRegistrationKind {
    fn field_deserializers(&self) -> FieldDeserializers {
        match self {
            Self::ManagedAppRegistration(v) => v.field_deserializers(),
            Self::AndroidManagedAppRegistration(v) => v.field_deserializers(),
            Self::IosManagedAppRegistration(v) => v.field_deserializers(),
        }
    }
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        match self {
            Self::ManagedAppRegistration(v) => v.serialize(writer),
            Self::AndroidManagedAppRegistration(v) => v.serialize(writer),
            Self::IosManagedAppRegistration(v) => v.serialize(writer),
        }
    }
}
impl StoreValue for ManagedAppRegistrationKind {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_managed_app_registration_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_managed_app_registration_from_discriminator_value(
    parse_node: &dyn ParseNode,
) -> Result<ManagedAppRegistrationKind, Error> {
    Ok(match discriminator_value(parse_node)?.as_deref() {
        Some("#microsoft.graph.androidManagedAppRegistration") => {
            ManagedAppRegistrationKind::AndroidManagedAppRegistration(AndroidManagedAppRegistration::new())
        }
        Some("#microsoft.graph.iosManagedAppRegistration") => {
            ManagedAppRegistrationKind::IosManagedAppRegistration(IosManagedAppRegistration::new())
        }
        _ => ManagedAppRegistrationKind::ManagedAppRegistration(ManagedAppRegistration::new()),
    })
}
