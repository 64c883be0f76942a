/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to ItemBody. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode,
    SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, new_backing_store};
use crate::types::body_type::*;
use serde_json::Value;
#[derive(Clone, Debug)]
pub struct ItemBody {
    pub(crate) backing_store: Box<dyn BackingStore>,
}
impl Default for ItemBody {
    fn default() -> Self {
        Self::new()
    }
}
impl ItemBody {
    #[doc = "Instantiates a new `ItemBody` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(new_backing_store())
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        ItemBody { backing_store }
    }
    #[doc = "The content of the item."]
    pub fn content(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("content")
    }
    pub fn set_content(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("content", value)
    }
    #[doc = "The type of the content.\n\n Possible values are text and html."]
    pub fn content_type(&self) -> Result<Option<BodyType>, Error> {
        self.backing_store().get_value("contentType")
    }
    pub fn set_content_type(&mut self, value: Option<BodyType>) -> Result<(), Error> {
        self.backing_store_mut().set_value("contentType", value)
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
        writer.write_string_value("content", self.content()?.as_deref())?;
        writer.write_enum_value("contentType", self.content_type()?)?;
        writer.write_string_value("@odata.type", self.odata_type()?.as_deref())?;
        Ok(())
    }
}
impl BackedModel for ItemBody {
    fn backing_store(&self) -> &dyn BackingStore {
        &*self.backing_store
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        &mut *self.backing_store
    }
}
impl Parsable for ItemBody {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = FieldDeserializers::new();
        res.insert("content", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("content", Some(val))?;
            }
            Ok(())
        });
        res.insert("contentType", |store, n| {
            if let Some(val) = n.enum_value::<BodyType>()? {
                store.set_value("contentType", Some(val))?;
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
impl StoreValue for ItemBody {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_item_body_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_item_body_from_discriminator_value(
    _parse_node: &dyn ParseNode,
) -> Result<ItemBody, Error> {
    Ok(ItemBody::new())
}
