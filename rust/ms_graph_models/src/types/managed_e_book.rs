/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to ManagedEBook. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
    discriminator_value,
};
use crate::store::{BackingStore, StoreValue, model_from_store, new_backing_store};
use crate::types::entity::*;
use crate::types::ios_vpp_e_book::*;
use crate::types::mime_content::*;
use serde_json::Value;
use time::OffsetDateTime;
#[doc = "An abstract class containing the base properties for Managed eBook."]
#[derive(Clone, Debug)]
pub struct ManagedEBook {
    pub(crate) entity: Entity,
}
impl Default for ManagedEBook {
    fn default() -> Self {
        Self::new()
    }
}
impl ManagedEBook {
    #[doc = "Instantiates a new `ManagedEBook` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(new_backing_store())
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        ManagedEBook {
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
    #[doc = "The date and time when the eBook file was created."]
    pub fn created_date_time(&self) -> Result<Option<OffsetDateTime>, Error> {
        self.backing_store().get_value("createdDateTime")
    }
    pub fn set_created_date_time(&mut self, value: Option<OffsetDateTime>) -> Result<(), Error> {
        self.backing_store_mut().set_value("createdDateTime", value)
    }
    #[doc = "Description."]
    pub fn description(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("description")
    }
    pub fn set_description(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("description", value)
    }
    #[doc = "Name of the eBook."]
    pub fn display_name(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("displayName")
    }
    pub fn set_display_name(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("displayName", value)
    }
    #[doc = "The more information Url."]
    pub fn information_url(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("informationUrl")
    }
    pub fn set_information_url(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("informationUrl", value)
    }
    #[doc = "Book cover."]
    pub fn large_cover(&self) -> Result<Option<MimeContent>, Error> {
        self.backing_store().get_value("largeCover")
    }
    pub fn set_large_cover(&mut self, value: Option<MimeContent>) -> Result<(), Error> {
        self.backing_store_mut().set_value("largeCover", value)
    }
    #[doc = "The date and time when the eBook was last modified."]
    pub fn last_modified_date_time(&self) -> Result<Option<OffsetDateTime>, Error> {
        self.backing_store().get_value("lastModifiedDateTime")
    }
    pub fn set_last_modified_date_time(
        &mut self,
        value: Option<OffsetDateTime>,
    ) -> Result<(), Error> {
        self.backing_store_mut().set_value("lastModifiedDateTime", value)
    }
    #[doc = "The privacy statement Url."]
    pub fn privacy_information_url(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("privacyInformationUrl")
    }
    pub fn set_privacy_information_url(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("privacyInformationUrl", value)
    }
    #[doc = "The date and time when the eBook was published."]
    pub fn published_date_time(&self) -> Result<Option<OffsetDateTime>, Error> {
        self.backing_store().get_value("publishedDateTime")
    }
    pub fn set_published_date_time(&mut self, value: Option<OffsetDateTime>) -> Result<(), Error> {
        self.backing_store_mut().set_value("publishedDateTime", value)
    }
    #[doc = "Publisher."]
    pub fn publisher(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("publisher")
    }
    pub fn set_publisher(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("publisher", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.entity.serialize_properties(writer)?;
        writer.write_date_time_value("createdDateTime", self.created_date_time()?)?;
        writer.write_string_value("description", self.description()?.as_deref())?;
        writer.write_string_value("displayName", self.display_name()?.as_deref())?;
        writer.write_string_value("informationUrl", self.information_url()?.as_deref())?;
        writer.write_object("largeCover", self.large_cover()?.as_ref())?;
        writer.write_date_time_value("lastModifiedDateTime", self.last_modified_date_time()?)?;
        writer.write_string_value(
            "privacyInformationUrl",
            self.privacy_information_url()?.as_deref(),
        )?;
        writer.write_date_time_value("publishedDateTime", self.published_date_time()?)?;
        writer.write_string_value("publisher", self.publisher()?.as_deref())?;
        Ok(())
    }
}
impl BackedModel for ManagedEBook {
    fn backing_store(&self) -> &dyn BackingStore {
        self.entity.backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.entity.backing_store_mut()
    }
}
impl Parsable for ManagedEBook {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = self.entity.field_deserializers();
        res.insert("createdDateTime", |store, n| {
            if let Some(val) = n.date_time_value()? {
                store.set_value("createdDateTime", Some(val))?;
            }
            Ok(())
        });
        res.insert("description", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("description", Some(val))?;
            }
            Ok(())
        });
        res.insert("displayName", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("displayName", Some(val))?;
            }
            Ok(())
        });
        res.insert("informationUrl", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("informationUrl", Some(val))?;
            }
            Ok(())
        });
        res.insert("largeCover", |store, n| {
            if let Some(val) = n.object_value(create_mime_content_from_discriminator_value)? {
                store.set_value("largeCover", Some(val))?;
            }
            Ok(())
        });
        res.insert("lastModifiedDateTime", |store, n| {
            if let Some(val) = n.date_time_value()? {
                store.set_value("lastModifiedDateTime", Some(val))?;
            }
            Ok(())
        });
        res.insert("privacyInformationUrl", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("privacyInformationUrl", Some(val))?;
            }
            Ok(())
        });
        res.insert("publishedDateTime", |store, n| {
            if let Some(val) = n.date_time_value()? {
                store.set_value("publishedDateTime", Some(val))?;
            }
            Ok(())
        });
        res.insert("publisher", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("publisher", Some(val))?;
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
impl StoreValue for ManagedEBook {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, |_| Ok(Self::new()))
    }
}
#[doc = "`ManagedEBook` or one of the types derived from it, as selected by `@odata.type`."]
#[derive(Clone, Debug)]
pub enum ManagedEBookKind {
    ManagedEBook(ManagedEBook),
    IosVppEBook(IosVppEBook),
}
impl ManagedEBookKind {
    #[doc = "Accessor to the `ManagedEBook` properties every variant shares."]
    pub fn managed_e_book(&self) -> &ManagedEBook {
        match self {
            Self::ManagedEBook(v) => v,
            Self::IosVppEBook(v) => v.managed_e_book(),
        }
    }
    #[doc = "Mutable accessor to the `ManagedEBook` properties every variant shares."]
    pub fn managed_e_book_mut(&mut self) -> &mut ManagedEBook {
        match self {
            Self::ManagedEBook(v) => v,
            Self::IosVppEBook(v) => v.managed_e_book_mut(),
        }
    }
}
impl From<ManagedEBook> for ManagedEBookKind {
    fn from(value: ManagedEBook) -> Self {
        Self::ManagedEBook(value)
    }
}
impl From<IosVppEBook> for ManagedEBookKind {
    fn from(value: IosVppEBook) -> Self {
        Self::IosVppEBook(value)
    }
}
impl BackedModel for ManagedEBookKind {
    fn backing_store(&self) -> &dyn BackingStore {
        self.managed_e_book().backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.managed_e_book_mut().backing_store_mut()
    }
}
impl Parsable for ManagedEBookKind {
    fn field_deserializers(&self) -> FieldDeserializers {
        match self {
            Self::ManagedEBook(v) => v.field_deserializers(),
            Self::IosVppEBook(v) => v.field_deserializers(),
        }
    }
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        match self {
            Self::ManagedEBook(v) => v.serialize(writer),
            Self::IosVppEBook(v) => v.serialize(writer),
        }
    }
}
impl StoreValue for ManagedEBookKind {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_managed_e_book_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_managed_e_book_from_discriminator_value(
    parse_node: &dyn ParseNode,
) -> Result<ManagedEBookKind, Error> {
    Ok(match discriminator_value(parse_node)?.as_deref() {
        Some("#microsoft.graph.iosVppEBook") => ManagedEBookKind::IosVppEBook(IosVppEBook::new()),
        _ => ManagedEBookKind::ManagedEBook(ManagedEBook::new()),
    })
}
