/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to OutlookItem. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, new_backing_store};
use crate::types::entity::*;
use serde_json::Value;
use time::OffsetDateTime;
#[derive(Clone, Debug)]
pub struct OutlookItem {
    pub(crate) entity: Entity,
}
impl Default for OutlookItem {
    fn default() -> Self {
        Self::new()
    }
}
impl OutlookItem {
    #[doc = "Instantiates a new `OutlookItem` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(new_backing_store())
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        OutlookItem {
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
    #[doc = "The categories associated with the item"]
    pub fn categories(&self) -> Result<Option<Vec<String>>, Error> {
        self.backing_store().get_collection("categories")
    }
    pub fn set_categories(&mut self, value: Option<Vec<String>>) -> Result<(), Error> {
        self.backing_store_mut().set_collection("categories", value)
    }
    #[doc = "Identifies the version of the item.\n\n Every time the item is changed, changeKey changes as well. This allows Exchange to apply changes to the correct version of the object. Read-only."]
    pub fn change_key(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("changeKey")
    }
    pub fn set_change_key(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("changeKey", value)
    }
    #[doc = "The Timestamp type represents date and time information using ISO 8601 format and is always in UTC time.\n\n For example, midnight UTC on Jan 1, 2014 is 2014-01-01T00:00:00Z"]
    pub fn created_date_time(&self) -> Result<Option<OffsetDateTime>, Error> {
        self.backing_store().get_value("createdDateTime")
    }
    pub fn set_created_date_time(&mut self, value: Option<OffsetDateTime>) -> Result<(), Error> {
        self.backing_store_mut().set_value("createdDateTime", value)
    }
    #[doc = "The Timestamp type represents date and time information using ISO 8601 format and is always in UTC time.\n\n For example, midnight UTC on Jan 1, 2014 is 2014-01-01T00:00:00Z"]
    pub fn last_modified_date_time(&self) -> Result<Option<OffsetDateTime>, Error> {
        self.backing_store().get_value("lastModifiedDateTime")
    }
    pub fn set_last_modified_date_time(
        &mut self,
        value: Option<OffsetDateTime>,
    ) -> Result<(), Error> {
        self.backing_store_mut().set_value("lastModifiedDateTime", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.entity.serialize_properties(writer)?;
        writer.write_collection_of_string_values("categories", self.categories()?.as_deref())?;
        writer.write_string_value("changeKey", self.change_key()?.as_deref())?;
        writer.write_date_time_value("createdDateTime", self.created_date_time()?)?;
        writer.write_date_time_value("lastModifiedDateTime", self.last_modified_date_time()?)?;
        Ok(())
    }
}
impl BackedModel for OutlookItem {
    fn backing_store(&self) -> &dyn BackingStore {
        self.entity.backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.entity.backing_store_mut()
    }
}
impl Parsable for OutlookItem {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = self.entity.field_deserializers();
        res.insert("categories", |store, n| {
            if let Some(val) = n.collection_of_string_values()? {
                store.set_collection("categories", Some(val))?;
            }
            Ok(())
        });
        res.insert("changeKey", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("changeKey", Some(val))?;
            }
            Ok(())
        });
        res.insert("createdDateTime", |store, n| {
            if let Some(val) = n.date_time_value()? {
                store.set_value("createdDateTime", Some(val))?;
            }
            Ok(())
        });
        res.insert("lastModifiedDateTime", |store, n| {
            if let Some(val) = n.date_time_value()? {
                store.set_value("lastModifiedDateTime", Some(val))?;
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
impl StoreValue for OutlookItem {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_outlook_item_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_outlook_item_from_discriminator_value(
    _parse_node: &dyn ParseNode,
) -> Result<OutlookItem, Error> {
    Ok(OutlookItem::new())
}
