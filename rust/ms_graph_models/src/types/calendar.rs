/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to Calendar. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, odata_typed_store};
use crate::types::calendar_color::*;
use crate::types::email_address::*;
use crate::types::entity::*;
use crate::types::event::*;
use crate::types::online_meeting_provider_type::*;
use serde_json::Value;
#[derive(Clone, Debug)]
pub struct Calendar {
    pub(crate) entity: Entity,
}
impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}
impl Calendar {
    #[doc = "Instantiates a new `Calendar` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(odata_typed_store("#microsoft.graph.calendar"))
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        Calendar {
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
    #[doc = "Represent the online meeting service providers that can be used to create online meetings in this calendar.\n\n Possible values are: unknown, skypeForBusiness, skypeForConsumer, teamsForBusiness."]
    pub fn allowed_online_meeting_providers(&self) -> Result<Option<Vec<OnlineMeetingProviderType>>, Error> {
        self.backing_store().get_collection("allowedOnlineMeetingProviders")
    }
    pub fn set_allowed_online_meeting_providers(
        &mut self,
        value: Option<Vec<OnlineMeetingProviderType>>,
    ) -> Result<(), Error> {
        self.backing_store_mut().set_collection("allowedOnlineMeetingProviders", value)
    }
    #[doc = "true if the user can write to the calendar, false otherwise.\n\n This property is true for the user who created the calendar. This property is also true for a user who shared a calendar and granted write access."]
    pub fn can_edit(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("canEdit")
    }
    pub fn set_can_edit(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("canEdit", value)
    }
    #[doc = "true if the user has permission to share the calendar, false otherwise.\n\n Only the user who created the calendar can share it."]
    pub fn can_share(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("canShare")
    }
    pub fn set_can_share(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("canShare", value)
    }
    #[doc = "If true, the user can read calendar items that have been marked private, false otherwise."]
    pub fn can_view_private_items(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("canViewPrivateItems")
    }
    pub fn set_can_view_private_items(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("canViewPrivateItems", value)
    }
    #[doc = "Identifies the version of the calendar object.\n\n Every time the calendar is changed, changeKey changes as well. This allows Exchange to apply changes to the correct version of the object. Read-only."]
    pub fn change_key(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("changeKey")
    }
    pub fn set_change_key(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("changeKey", value)
    }
    #[doc = "Specifies the color theme to distinguish the calendar from other calendars in a UI.\n\n The property values are: auto, lightBlue, lightGreen, lightOrange, lightGray, lightYellow, lightTeal, lightPink, lightBrown, lightRed, maxColor."]
    pub fn color(&self) -> Result<Option<CalendarColor>, Error> {
        self.backing_store().get_value("color")
    }
    pub fn set_color(&mut self, value: Option<CalendarColor>) -> Result<(), Error> {
        self.backing_store_mut().set_value("color", value)
    }
    #[doc = "The default online meeting provider for meetings sent from this calendar.\n\n Possible values are: unknown, skypeForBusiness, skypeForConsumer, teamsForBusiness."]
    pub fn default_online_meeting_provider(&self) -> Result<Option<OnlineMeetingProviderType>, Error> {
        self.backing_store().get_value("defaultOnlineMeetingProvider")
    }
    pub fn set_default_online_meeting_provider(
        &mut self,
        value: Option<OnlineMeetingProviderType>,
    ) -> Result<(), Error> {
        self.backing_store_mut().set_value("defaultOnlineMeetingProvider", value)
    }
    #[doc = "The events in the calendar.\n\n Navigation property. Read-only."]
    pub fn events(&self) -> Result<Option<Vec<Event>>, Error> {
        self.backing_store().get_collection("events")
    }
    pub fn set_events(&mut self, value: Option<Vec<Event>>) -> Result<(), Error> {
        self.backing_store_mut().set_collection("events", value)
    }
    #[doc = "The calendar color, expressed in a hex color code of three hexadecimal values, each ranging from 00 to FF and representing the red, green, or blue components of the color in the RGB color space.\n\n If the user has never explicitly set a color for the calendar, this property is empty. Read-only."]
    pub fn hex_color(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("hexColor")
    }
    pub fn set_hex_color(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("hexColor", value)
    }
    #[doc = "true if this is the default calendar where new events are created by default, false otherwise."]
    pub fn is_default_calendar(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("isDefaultCalendar")
    }
    pub fn set_is_default_calendar(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("isDefaultCalendar", value)
    }
    #[doc = "Indicates whether this user calendar can be deleted from the user mailbox."]
    pub fn is_removable(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("isRemovable")
    }
    pub fn set_is_removable(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("isRemovable", value)
    }
    #[doc = "Indicates whether this user calendar supports tracking of meeting responses.\n\n Only meeting invites sent from users' primary calendars support tracking of meeting responses."]
    pub fn is_tallying_responses(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("isTallyingResponses")
    }
    pub fn set_is_tallying_responses(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("isTallyingResponses", value)
    }
    #[doc = "The calendar name."]
    pub fn name(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("name")
    }
    pub fn set_name(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("name", value)
    }
    #[doc = "If set, this represents the user who created or added the calendar.\n\n For a calendar that the user created or added, the owner property is set to the user. For a calendar shared with the user, the owner property is set to the person who shared that calendar with the user."]
    pub fn owner(&self) -> Result<Option<EmailAddress>, Error> {
        self.backing_store().get_value("owner")
    }
    pub fn set_owner(&mut self, value: Option<EmailAddress>) -> Result<(), Error> {
        self.backing_store_mut().set_value("owner", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.entity.serialize_properties(writer)?;
        writer.write_collection_of_enum_values(
            "allowedOnlineMeetingProviders",
            self.allowed_online_meeting_providers()?.as_deref(),
        )?;
        writer.write_bool_value("canEdit", self.can_edit()?)?;
        writer.write_bool_value("canShare", self.can_share()?)?;
        writer.write_bool_value("canViewPrivateItems", self.can_view_private_items()?)?;
        writer.write_string_value("changeKey", self.change_key()?.as_deref())?;
        writer.write_enum_value("color", self.color()?)?;
        writer.write_enum_value(
            "defaultOnlineMeetingProvider",
            self.default_online_meeting_provider()?,
        )?;
        writer.write_collection_of_objects("events", self.events()?.as_deref())?;
        writer.write_string_value("hexColor", self.hex_color()?.as_deref())?;
        writer.write_bool_value("isDefaultCalendar", self.is_default_calendar()?)?;
        writer.write_bool_value("isRemovable", self.is_removable()?)?;
        writer.write_bool_value("isTallyingResponses", self.is_tallying_responses()?)?;
        writer.write_string_value("name", self.name()?.as_deref())?;
        writer.write_object("owner", self.owner()?.as_ref())?;
        Ok(())
    }
}
impl BackedModel for Calendar {
    fn backing_store(&self) -> &dyn BackingStore {
        self.entity.backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.entity.backing_store_mut()
    }
}
impl Parsable for Calendar {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = self.entity.field_deserializers();
        res.insert("allowedOnlineMeetingProviders", |store, n| {
            if let Some(val) = n.collection_of_enum_values::<OnlineMeetingProviderType>()? {
                store.set_collection("allowedOnlineMeetingProviders", Some(val))?;
            }
            Ok(())
        });
        res.insert("canEdit", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("canEdit", Some(val))?;
            }
            Ok(())
        });
        res.insert("canShare", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("canShare", Some(val))?;
            }
            Ok(())
        });
        res.insert("canViewPrivateItems", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("canViewPrivateItems", Some(val))?;
            }
            Ok(())
        });
        res.insert("changeKey", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("changeKey", Some(val))?;
            }
            Ok(())
        });
        res.insert("color", |store, n| {
            if let Some(val) = n.enum_value::<CalendarColor>()? {
                store.set_value("color", Some(val))?;
            }
            Ok(())
        });
        res.insert("defaultOnlineMeetingProvider", |store, n| {
            if let Some(val) = n.enum_value::<OnlineMeetingProviderType>()? {
                store.set_value("defaultOnlineMeetingProvider", Some(val))?;
            }
            Ok(())
        });
        res.insert("events", |store, n| {
            if let Some(val) =
                n.collection_of_object_values(create_event_from_discriminator_value)?
            {
                store.set_collection("events", Some(val))?;
            }
            Ok(())
        });
        res.insert("hexColor", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("hexColor", Some(val))?;
            }
            Ok(())
        });
        res.insert("isDefaultCalendar", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("isDefaultCalendar", Some(val))?;
            }
            Ok(())
        });
        res.insert("isRemovable", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("isRemovable", Some(val))?;
            }
            Ok(())
        });
        res.insert("isTallyingResponses", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("isTallyingResponses", Some(val))?;
            }
            Ok(())
        });
        res.insert("name", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("name", Some(val))?;
            }
            Ok(())
        });
        res.insert("owner", |store, n| {
            if let Some(val) = n.object_value(create_email_address_from_discriminator_value)? {
                store.set_value("owner", Some(val))?;
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
impl StoreValue for Calendar {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_calendar_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_calendar_from_discriminator_value(
    _parse_node: &dyn ParseNode,
) -> Result<Calendar, Error> {
    Ok(Calendar::new())
}
