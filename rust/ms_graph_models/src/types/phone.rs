/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to Phone. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode,
    SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, new_backing_store};
use crate::types::phone_type::*;
use serde_json::Value;
#[derive(Clone, Debug)]
pub struct Phone {
    pub(crate) backing_store: Box<dyn BackingStore>,
}
impl Default for Phone {
    fn default() -> Self {
        Self::new()
    }
}
impl Phone {
    #[doc = "Instantiates a new `Phone` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(new_backing_store())
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        Phone { backing_store }
    }
    pub fn language(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("language")
    }
    pub fn set_language(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("language", value)
    }
    #[doc = "The phone number."]
    pub fn number(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("number")
    }
    pub fn set_number(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("number", value)
    }
    pub fn odata_type(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("@odata.type")
    }
    pub fn set_odata_type(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("@odata.type", value)
    }
    pub fn region(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("region")
    }
    pub fn set_region(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("region", value)
    }
    #[doc = "The type of phone number.\n\n The possible values are: home, business, mobile, other, assistant, homeFax, businessFax, otherFax, pager, radio."]
    pub fn type_escaped(&self) -> Result<Option<PhoneType>, Error> {
        self.backing_store().get_value("type")
    }
    pub fn set_type_escaped(&mut self, value: Option<PhoneType>) -> Result<(), Error> {
        self.backing_store_mut().set_value("type", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        writer.write_string_value("language", self.language()?.as_deref())?;
        writer.write_string_value("number", self.number()?.as_deref())?;
        writer.write_string_value("@odata.type", self.odata_type()?.as_deref())?;
        writer.write_string_value("region", self.region()?.as_deref())?;
        writer.write_enum_value("type", self.type_escaped()?)?;
        Ok(())
    }
}
impl BackedModel for Phone {
    fn backing_store(&self) -> &dyn BackingStore {
        &*self.backing_store
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        &mut *self.backing_store
    }
}
impl Parsable for Phone {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = FieldDeserializers::new();
        res.insert("language", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("language", Some(val))?;
            }
            Ok(())
        });
        res.insert("number", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("number", Some(val))?;
            }
            Ok(())
        });
        res.insert("@odata.type", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("@odata.type", Some(val))?;
            }
            Ok(())
        });
        res.insert("region", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("region", Some(val))?;
            }
            Ok(())
        });
        res.insert("type", |store, n| {
            if let Some(val) = n.enum_value::<PhoneType>()? {
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
impl StoreValue for Phone {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_phone_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_phone_from_discriminator_value(
    _parse_node: &dyn ParseNode,
) -> Result<Phone, Error> {
    Ok(Phone::new())
}
