/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to IosVppEBook. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, odata_typed_store};
use crate::types::managed_e_book::*;
use serde_json::Value;
use uuid::Uuid;
#[doc = "A class containing the properties for iOS Vpp eBook."]
#[derive(Clone, Debug)]
pub struct IosVppEBook {
    pub(crate) managed_e_book: ManagedEBook,
}
impl Default for IosVppEBook {
    fn default() -> Self {
        Self::new()
    }
}
impl IosVppEBook {
    #[doc = "Instantiates a new `IosVppEBook` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(odata_typed_store("#microsoft.graph.iosVppEBook"))
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        IosVppEBook {
            managed_e_book: ManagedEBook::with_backing_store(backing_store),
        }
    }
    #[doc = "Accessor to inherited properties from `ManagedEBook`."]
    pub fn managed_e_book(&self) -> &ManagedEBook {
        &self.managed_e_book
    }
    #[doc = "Mutable accessor to inherited properties from `ManagedEBook`."]
    pub fn managed_e_book_mut(&mut self) -> &mut ManagedEBook {
        &mut self.managed_e_book
    }
    #[doc = "The Apple ID associated with Vpp token."]
    pub fn apple_id(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("appleId")
    }
    pub fn set_apple_id(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("appleId", value)
    }
    #[doc = "Genres."]
    pub fn genres(&self) -> Result<Option<Vec<String>>, Error> {
        self.backing_store().get_collection("genres")
    }
    pub fn set_genres(&mut self, value: Option<Vec<String>>) -> Result<(), Error> {
        self.backing_store_mut().set_collection("genres", value)
    }
    #[doc = "Language."]
    pub fn language(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("language")
    }
    pub fn set_language(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("language", value)
    }
    #[doc = "Seller."]
    pub fn seller(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("seller")
    }
    pub fn set_seller(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("seller", value)
    }
    #[doc = "Total license count."]
    pub fn total_license_count(&self) -> Result<Option<i32>, Error> {
        self.backing_store().get_value("totalLicenseCount")
    }
    pub fn set_total_license_count(&mut self, value: Option<i32>) -> Result<(), Error> {
        self.backing_store_mut().set_value("totalLicenseCount", value)
    }
    #[doc = "Used license count."]
    pub fn used_license_count(&self) -> Result<Option<i32>, Error> {
        self.backing_store().get_value("usedLicenseCount")
    }
    pub fn set_used_license_count(&mut self, value: Option<i32>) -> Result<(), Error> {
        self.backing_store_mut().set_value("usedLicenseCount", value)
    }
    #[doc = "The Vpp token's organization name."]
    pub fn vpp_organization_name(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("vppOrganizationName")
    }
    pub fn set_vpp_organization_name(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("vppOrganizationName", value)
    }
    #[doc = "The Vpp token ID."]
    pub fn vpp_token_id(&self) -> Result<Option<Uuid>, Error> {
        self.backing_store().get_value("vppTokenId")
    }
    pub fn set_vpp_token_id(&mut self, value: Option<Uuid>) -> Result<(), Error> {
        self.backing_store_mut().set_value("vppTokenId", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.managed_e_book.serialize_properties(writer)?;
        writer.write_string_value("appleId", self.apple_id()?.as_deref())?;
        writer.write_collection_of_string_values("genres", self.genres()?.as_deref())?;
        writer.write_string_value("language", self.language()?.as_deref())?;
        writer.write_string_value("seller", self.seller()?.as_deref())?;
        writer.write_i32_value("totalLicenseCount", self.total_license_count()?)?;
        writer.write_i32_value("usedLicenseCount", self.used_license_count()?)?;
        writer.write_string_value("vppOrganizationName", self.vpp_organization_name()?.as_deref())?;
        writer.write_uuid_value("vppTokenId", self.vpp_token_id()?)?;
        Ok(())
    }
}
impl BackedModel for IosVppEBook {
    fn backing_store(&self) -> &dyn BackingStore {
        self.managed_e_book.backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.managed_e_book.backing_store_mut()
    }
}
impl Parsable for IosVppEBook {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = self.managed_e_book.field_deserializers();
        res.insert("appleId", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("appleId", Some(val))?;
            }
            Ok(())
        });
        res.insert("genres", |store, n| {
            if let Some(val) = n.collection_of_string_values()? {
                store.set_collection("genres", Some(val))?;
            }
            Ok(())
        });
        res.insert("language", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("language", Some(val))?;
            }
            Ok(())
        });
        res.insert("seller", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("seller", Some(val))?;
            }
            Ok(())
        });
        res.insert("totalLicenseCount", |store, n| {
            if let Some(val) = n.i32_value()? {
                store.set_value("totalLicenseCount", Some(val))?;
            }
            Ok(())
        });
        res.insert("usedLicenseCount", |store, n| {
            if let Some(val) = n.i32_value()? {
                store.set_value("usedLicenseCount", Some(val))?;
            }
            Ok(())
        });
        res.insert("vppOrganizationName", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("vppOrganizationName", Some(val))?;
            }
            Ok(())
        });
        res.insert("vppTokenId", |store, n| {
            if let Some(val) = n.uuid_value()? {
                store.set_value("vppTokenId", Some(val))?;
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
impl StoreValue for IosVppEBook {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_ios_vpp_e_book_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_ios_vpp_e_book_from_discriminator_value(
    _parse_node: &dyn ParseNode,
) -> Result<IosVppEBook, Error> {
    Ok(IosVppEBook::new())
}
