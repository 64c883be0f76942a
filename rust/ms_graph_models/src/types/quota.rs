/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to Quota. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode,
    SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, new_backing_store};
use crate::types::storage_plan_information::*;
use serde_json::Value;
#[derive(Clone, Debug)]
pub struct Quota {
    pub(crate) backing_store: Box<dyn BackingStore>,
}
impl Default for Quota {
    fn default() -> Self {
        Self::new()
    }
}
impl Quota {
    #[doc = "Instantiates a new `Quota` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(new_backing_store())
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        Quota { backing_store }
    }
    #[doc = "Total space consumed by files in the recycle bin, in bytes.\n\n Read-only."]
    pub fn deleted(&self) -> Result<Option<i64>, Error> {
        self.backing_store().get_value("deleted")
    }
    pub fn set_deleted(&mut self, value: Option<i64>) -> Result<(), Error> {
        self.backing_store_mut().set_value("deleted", value)
    }
    pub fn odata_type(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("@odata.type")
    }
    pub fn set_odata_type(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("@odata.type", value)
    }
    #[doc = "Total space remaining before reaching the capacity limit, in bytes.\n\n Read-only."]
    pub fn remaining(&self) -> Result<Option<i64>, Error> {
        self.backing_store().get_value("remaining")
    }
    pub fn set_remaining(&mut self, value: Option<i64>) -> Result<(), Error> {
        self.backing_store_mut().set_value("remaining", value)
    }
    #[doc = "Enumeration value that indicates the state of the storage space.\n\n Read-only."]
    pub fn state(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("state")
    }
    pub fn set_state(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("state", value)
    }
    #[doc = "Information about the drive's storage quota plans.\n\n Only in Personal OneDrive."]
    pub fn storage_plan_information(&self) -> Result<Option<StoragePlanInformation>, Error> {
        self.backing_store().get_value("storagePlanInformation")
    }
    pub fn set_storage_plan_information(
        &mut self,
        value: Option<StoragePlanInformation>,
    ) -> Result<(), Error> {
        self.backing_store_mut().set_value("storagePlanInformation", value)
    }
    #[doc = "Total allowed storage space, in bytes.\n\n Read-only."]
    pub fn total(&self) -> Result<Option<i64>, Error> {
        self.backing_store().get_value("total")
    }
    pub fn set_total(&mut self, value: Option<i64>) -> Result<(), Error> {
        self.backing_store_mut().set_value("total", value)
    }
    #[doc = "Total space used, in bytes.\n\n Read-only."]
    pub fn used(&self) -> Result<Option<i64>, Error> {
        self.backing_store().get_value("used")
    }
    pub fn set_used(&mut self, value: Option<i64>) -> Result<(), Error> {
        self.backing_store_mut().set_value("used", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        writer.write_i64_value("deleted", self.deleted()?)?;
        writer.write_string_value("@odata.type", self.odata_type()?.as_deref())?;
        writer.write_i64_value("remaining", self.remaining()?)?;
        writer.write_string_value("state", self.state()?.as_deref())?;
        writer.write_object("storagePlanInformation", self.storage_plan_information()?.as_ref())?;
        writer.write_i64_value("total", self.total()?)?;
        writer.write_i64_value("used", self.used()?)?;
        Ok(())
    }
}
impl BackedModel for Quota {
    fn backing_store(&self) -> &dyn BackingStore {
        &*self.backing_store
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        &mut *self.backing_store
    }
}
impl Parsable for Quota {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = FieldDeserializers::new();
        res.insert("deleted", |store, n| {
            if let Some(val) = n.i64_value()? {
                store.set_value("deleted", Some(val))?;
            }
            Ok(())
        });
        res.insert("@odata.type", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("@odata.type", Some(val))?;
            }
            Ok(())
        });
        res.insert("remaining", |store, n| {
            if let Some(val) = n.i64_value()? {
                store.set_value("remaining", Some(val))?;
            }
            Ok(())
        });
        res.insert("state", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("state", Some(val))?;
            }
            Ok(())
        });
        res.insert("storagePlanInformation", |store, n| {
            if let Some(val) =
                n.object_value(create_storage_plan_information_from_discriminator_value)?
            {
                store.set_value("storagePlanInformation", Some(val))?;
            }
            Ok(())
        });
        res.insert("total", |store, n| {
            if let Some(val) = n.i64_value()? {
                store.set_value("total", Some(val))?;
            }
            Ok(())
        });
        res.insert("used", |store, n| {
            if let Some(val) = n.i64_value()? {
                store.set_value("used", Some(val))?;
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
impl StoreValue for Quota {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_quota_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_quota_from_discriminator_value(_parse_node: &dyn ParseNode) -> Result<Quota, Error> {
    Ok(Quota::new())
}
