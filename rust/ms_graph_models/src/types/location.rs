/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to Location. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode,
    SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, new_backing_store};
use crate::types::location_type::*;
use serde_json::Value;
#[derive(Clone, Debug)]
pub struct Location {
    pub(crate) backing_store: Box<dyn BackingStore>,
}
impl Default for Location {
    fn default() -> Self {
        Self::new()
    }
}
impl Location {
    #[doc = "Instantiates a new `Location` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(new_backing_store())
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        Location { backing_store }
    }
    #[doc = "The name associated with the location."]
    pub fn display_name(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("displayName")
    }
    pub fn set_display_name(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("displayName", value)
    }
    #[doc = "Optional email address of the location."]
    pub fn location_email_address(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("locationEmailAddress")
    }
    pub fn set_location_email_address(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("locationEmailAddress", value)
    }
    #[doc = "The type of location.\n\n The possible values are: default, conferenceRoom, homeAddress, businessAddress,geoCoordinates, streetAddress, hotel, restaurant, localBusiness, postalAddress. Read-only."]
    pub fn location_type(&self) -> Result<Option<LocationType>, Error> {
        self.backing_store().get_value("locationType")
    }
    pub fn set_location_type(&mut self, value: Option<LocationType>) -> Result<(), Error> {
        self.backing_store_mut().set_value("locationType", value)
    }
    #[doc = "Optional URI representing the location."]
    pub fn location_uri(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("locationUri")
    }
    pub fn set_location_uri(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("locationUri", value)
    }
    pub fn odata_type(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("@odata.type")
    }
    pub fn set_odata_type(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("@odata.type", value)
    }
    #[doc = "For internal use only."]
    pub fn unique_id(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("uniqueId")
    }
    pub fn set_unique_id(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("uniqueId", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        writer.write_string_value("displayName", self.display_name()?.as_deref())?;
        writer.write_string_value(
            "locationEmailAddress",
            self.location_email_address()?.as_deref(),
        )?;
        writer.write_enum_value("locationType", self.location_type()?)?;
        writer.write_string_value("locationUri", self.location_uri()?.as_deref())?;
        writer.write_string_value("@odata.type", self.odata_type()?.as_deref())?;
        writer.write_string_value("uniqueId", self.unique_id()?.as_deref())?;
        Ok(())
    }
}
impl BackedModel for Location {
    fn backing_store(&self) -> &dyn BackingStore {
        &*self.backing_store
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        &mut *self.backing_store
    }
}
impl Parsable for Location {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = FieldDeserializers::new();
        res.insert("displayName", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("displayName", Some(val))?;
            }
            Ok(())
        });
        res.insert("locationEmailAddress", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("locationEmailAddress", Some(val))?;
            }
            Ok(())
        });
        res.insert("locationType", |store, n| {
            if let Some(val) = n.enum_value::<LocationType>()? {
                store.set_value("locationType", Some(val))?;
            }
            Ok(())
        });
        res.insert("locationUri", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("locationUri", Some(val))?;
            }
            Ok(())
        });
        res.insert("@odata.type", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("@odata.type", Some(val))?;
            }
            Ok(())
        });
        res.insert("uniqueId", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("uniqueId", Some(val))?;
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
impl StoreValue for Location {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_location_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_location_from_discriminator_value(
    _parse_node: &dyn ParseNode,
) -> Result<Location, Error> {
    Ok(Location::new())
}
