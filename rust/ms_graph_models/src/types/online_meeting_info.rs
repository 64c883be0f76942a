/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to OnlineMeetingInfo. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode,
    SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, new_backing_store};
use crate::types::phone::*;
use serde_json::Value;
#[derive(Clone, Debug)]
pub struct OnlineMeetingInfo {
    pub(crate) backing_store: Box<dyn BackingStore>,
}
impl Default for OnlineMeetingInfo {
    fn default() -> Self {
        Self::new()
    }
}
impl OnlineMeetingInfo {
    #[doc = "Instantiates a new `OnlineMeetingInfo` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(new_backing_store())
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        OnlineMeetingInfo { backing_store }
    }
    #[doc = "The ID of the conference."]
    pub fn conference_id(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("conferenceId")
    }
    pub fn set_conference_id(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("conferenceId", value)
    }
    #[doc = "The external link that launches the online meeting.\n\n This is a URL that clients launch into a browser and will redirect the user to join the meeting."]
    pub fn join_url(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("joinUrl")
    }
    pub fn set_join_url(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("joinUrl", value)
    }
    pub fn odata_type(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("@odata.type")
    }
    pub fn set_odata_type(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("@odata.type", value)
    }
    #[doc = "All of the phone numbers associated with this conference."]
    pub fn phones(&self) -> Result<Option<Vec<Phone>>, Error> {
        self.backing_store().get_collection("phones")
    }
    pub fn set_phones(&mut self, value: Option<Vec<Phone>>) -> Result<(), Error> {
        self.backing_store_mut().set_collection("phones", value)
    }
    #[doc = "The preformatted quick dial for this call."]
    pub fn quick_dial(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("quickDial")
    }
    pub fn set_quick_dial(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("quickDial", value)
    }
    #[doc = "The toll free numbers that can be used to join the conference."]
    pub fn toll_free_numbers(&self) -> Result<Option<Vec<String>>, Error> {
        self.backing_store().get_collection("tollFreeNumbers")
    }
    pub fn set_toll_free_numbers(&mut self, value: Option<Vec<String>>) -> Result<(), Error> {
        self.backing_store_mut().set_collection("tollFreeNumbers", value)
    }
    #[doc = "The toll number that can be used to join the conference."]
    pub fn toll_number(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("tollNumber")
    }
    pub fn set_toll_number(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("tollNumber", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        writer.write_string_value("conferenceId", self.conference_id()?.as_deref())?;
        writer.write_string_value("joinUrl", self.join_url()?.as_deref())?;
        writer.write_string_value("@odata.type", self.odata_type()?.as_deref())?;
        writer.write_collection_of_objects("phones", self.phones()?.as_deref())?;
        writer.write_string_value("quickDial", self.quick_dial()?.as_deref())?;
        writer.write_collection_of_string_values(
            "tollFreeNumbers",
            self.toll_free_numbers()?.as_deref(),
        )?;
        writer.write_string_value("tollNumber", self.toll_number()?.as_deref())?;
        Ok(())
    }
}
impl BackedModel for OnlineMeetingInfo {
    fn backing_store(&self) -> &dyn BackingStore {
        &*self.backing_store
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        &mut *self.backing_store
    }
}
impl Parsable for OnlineMeetingInfo {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = FieldDeserializers::new();
        res.insert("conferenceId", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("conferenceId", Some(val))?;
            }
            Ok(())
        });
        res.insert("joinUrl", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("joinUrl", Some(val))?;
            }
            Ok(())
        });
        res.insert("@odata.type", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("@odata.type", Some(val))?;
            }
            Ok(())
        });
        res.insert("phones", |store, n| {
            if let Some(val) =
                n.collection_of_object_values(create_phone_from_discriminator_value)?
            {
                store.set_collection("phones", Some(val))?;
            }
            Ok(())
        });
        res.insert("quickDial", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("quickDial", Some(val))?;
            }
            Ok(())
        });
        res.insert("tollFreeNumbers", |store, n| {
            if let Some(val) = n.collection_of_string_values()? {
                store.set_collection("tollFreeNumbers", Some(val))?;
            }
            Ok(())
        });
        res.insert("tollNumber", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("tollNumber", Some(val))?;
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
impl StoreValue for OnlineMeetingInfo {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_online_meeting_info_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_online_meeting_info_from_discriminator_value(
    _parse_node: &dyn ParseNode,
) -> Result<OnlineMeetingInfo, Error> {
    Ok(OnlineMeetingInfo::new())
}
