/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to FollowupFlag. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode,
    SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, new_backing_store};
use crate::types::date_time_time_zone::*;
use crate::types::followup_flag_status::*;
use serde_json::Value;
#[derive(Clone, Debug)]
pub struct FollowupFlag {
    pub(crate) backing_store: Box<dyn BackingStore>,
}
impl Default for FollowupFlag {
    fn default() -> Self {
        Self::new()
    }
}
impl FollowupFlag {
    #[doc = "Instantiates a new `FollowupFlag` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(new_backing_store())
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        FollowupFlag { backing_store }
    }
    #[doc = "The date and time that the follow-up was finished."]
    pub fn completed_date_time(&self) -> Result<Option<DateTimeTimeZone>, Error> {
        self.backing_store().get_value("completedDateTime")
    }
    pub fn set_completed_date_time(
        &mut self,
        value: Option<DateTimeTimeZone>,
    ) -> Result<(), Error> {
        self.backing_store_mut().set_value("completedDateTime", value)
    }
    #[doc = "The date and time that the follow-up is to be finished.\n\n Note: To set the due date, you must also specify the startDateTime; otherwise, you get a 400 Bad Request response."]
    pub fn due_date_time(&self) -> Result<Option<DateTimeTimeZone>, Error> {
        self.backing_store().get_value("dueDateTime")
    }
    pub fn set_due_date_time(&mut self, value: Option<DateTimeTimeZone>) -> Result<(), Error> {
        self.backing_store_mut().set_value("dueDateTime", value)
    }
    #[doc = "The status for follow-up for an item.\n\n Possible values are notFlagged, complete, and flagged."]
    pub fn flag_status(&self) -> Result<Option<FollowupFlagStatus>, Error> {
        self.backing_store().get_value("flagStatus")
    }
    pub fn set_flag_status(&mut self, value: Option<FollowupFlagStatus>) -> Result<(), Error> {
        self.backing_store_mut().set_value("flagStatus", value)
    }
    pub fn odata_type(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("@odata.type")
    }
    pub fn set_odata_type(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("@odata.type", value)
    }
    #[doc = "The date and time that the follow-up is to begin."]
    pub fn start_date_time(&self) -> Result<Option<DateTimeTimeZone>, Error> {
        self.backing_store().get_value("startDateTime")
    }
    pub fn set_start_date_time(&mut self, value: Option<DateTimeTimeZone>) -> Result<(), Error> {
        self.backing_store_mut().set_value("startDateTime", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        writer.write_object("completedDateTime", self.completed_date_time()?.as_ref())?;
        writer.write_object("dueDateTime", self.due_date_time()?.as_ref())?;
        writer.write_enum_value("flagStatus", self.flag_status()?)?;
        writer.write_string_value("@odata.type", self.odata_type()?.as_deref())?;
        writer.write_object("startDateTime", self.start_date_time()?.as_ref())?;
        Ok(())
    }
}
impl BackedModel for FollowupFlag {
    fn backing_store(&self) -> &dyn BackingStore {
        &*self.backing_store
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        &mut *self.backing_store
    }
}
impl Parsable for FollowupFlag {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = FieldDeserializers::new();
        res.insert("completedDateTime", |store, n| {
            if let Some(val) =
                n.object_value(create_date_time_time_zone_from_discriminator_value)?
            {
                store.set_value("completedDateTime", Some(val))?;
            }
            Ok(())
        });
        res.insert("dueDateTime", |store, n| {
            if let Some(val) =
                n.object_value(create_date_time_time_zone_from_discriminator_value)?
            {
                store.set_value("dueDateTime", Some(val))?;
            }
            Ok(())
        });
        res.insert("flagStatus", |store, n| {
            if let Some(val) = n.enum_value::<FollowupFlagStatus>()? {
                store.set_value("flagStatus", Some(val))?;
            }
            Ok(())
        });
        res.insert("@odata.type", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("@odata.type", Some(val))?;
            }
            Ok(())
        });
        res.insert("startDateTime", |store, n| {
            if let Some(val) =
                n.object_value(create_date_time_time_zone_from_discriminator_value)?
            {
                store.set_value("startDateTime", Some(val))?;
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
impl StoreValue for FollowupFlag {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_followup_flag_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_followup_flag_from_discriminator_value(
    _parse_node: &dyn ParseNode,
) -> Result<FollowupFlag, Error> {
    Ok(FollowupFlag::new())
}
