/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to Event. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, odata_typed_store};
use crate::types::attendee::*;
use crate::types::calendar::*;
use crate::types::date_time_time_zone::*;
use crate::types::event_type::*;
use crate::types::free_busy_status::*;
use crate::types::importance::*;
use crate::types::item_body::*;
use crate::types::location::*;
use crate::types::online_meeting_info::*;
use crate::types::online_meeting_provider_type::*;
use crate::types::outlook_item::*;
use crate::types::patterned_recurrence::*;
use crate::types::recipient::*;
use crate::types::response_status::*;
use crate::types::sensitivity::*;
use serde_json::Value;
use time::OffsetDateTime;
#[derive(Clone, Debug)]
pub struct Event {
    pub(crate) outlook_item: OutlookItem,
}
impl Default for Event {
    fn default() -> Self {
        Self::new()
    }
}
impl Event {
    #[doc = "Instantiates a new `Event` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(odata_typed_store("#microsoft.graph.event"))
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        Event {
            outlook_item: OutlookItem::with_backing_store(backing_store),
        }
    }
    #[doc = "Accessor to inherited properties from `OutlookItem`."]
    pub fn outlook_item(&self) -> &OutlookItem {
        &self.outlook_item
    }
    #[doc = "Mutable accessor to inherited properties from `OutlookItem`."]
    pub fn outlook_item_mut(&mut self) -> &mut OutlookItem {
        &mut self.outlook_item
    }
    #[doc = "true if the meeting organizer allows invitees to propose a new time when responding; otherwise, false.\n\n Optional. The default is true."]
    pub fn allow_new_time_proposals(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("allowNewTimeProposals")
    }
    pub fn set_allow_new_time_proposals(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("allowNewTimeProposals", value)
    }
    #[doc = "The collection of attendees for the event."]
    pub fn attendees(&self) -> Result<Option<Vec<Attendee>>, Error> {
        self.backing_store().get_collection("attendees")
    }
    pub fn set_attendees(&mut self, value: Option<Vec<Attendee>>) -> Result<(), Error> {
        self.backing_store_mut().set_collection("attendees", value)
    }
    #[doc = "The body of the message associated with the event.\n\n It can be in HTML or text format."]
    pub fn body(&self) -> Result<Option<ItemBody>, Error> {
        self.backing_store().get_value("body")
    }
    pub fn set_body(&mut self, value: Option<ItemBody>) -> Result<(), Error> {
        self.backing_store_mut().set_value("body", value)
    }
    #[doc = "The preview of the message associated with the event.\n\n It's in text format."]
    pub fn body_preview(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("bodyPreview")
    }
    pub fn set_body_preview(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("bodyPreview", value)
    }
    #[doc = "The calendar that contains the event.\n\n Navigation property. Read-only."]
    pub fn calendar(&self) -> Result<Option<Calendar>, Error> {
        self.backing_store().get_value("calendar")
    }
    pub fn set_calendar(&mut self, value: Option<Calendar>) -> Result<(), Error> {
        self.backing_store_mut().set_value("calendar", value)
    }
    #[doc = "The date, time, and time zone that the event ends.\n\n By default, the end time is in UTC."]
    pub fn end(&self) -> Result<Option<DateTimeTimeZone>, Error> {
        self.backing_store().get_value("end")
    }
    pub fn set_end(&mut self, value: Option<DateTimeTimeZone>) -> Result<(), Error> {
        self.backing_store_mut().set_value("end", value)
    }
    #[doc = "Set to true if the event has attachments."]
    pub fn has_attachments(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("hasAttachments")
    }
    pub fn set_has_attachments(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("hasAttachments", value)
    }
    #[doc = "When set to true, each attendee only sees themselves in the meeting request and meeting Tracking list.\n\n The default is false."]
    pub fn hide_attendees(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("hideAttendees")
    }
    pub fn set_hide_attendees(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("hideAttendees", value)
    }
    #[doc = "A unique identifier for an event across calendars.\n\n This ID is different for each occurrence in a recurring series. Read-only."]
    pub fn i_cal_u_id(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("iCalUId")
    }
    pub fn set_i_cal_u_id(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("iCalUId", value)
    }
    #[doc = "The importance of the event.\n\n The possible values are: low, normal, high."]
    pub fn importance(&self) -> Result<Option<Importance>, Error> {
        self.backing_store().get_value("importance")
    }
    pub fn set_importance(&mut self, value: Option<Importance>) -> Result<(), Error> {
        self.backing_store_mut().set_value("importance", value)
    }
    #[doc = "Set to true if the event lasts all day.\n\n If true, regardless of whether it's a single-day or multi-day event, start, and endtime must be set to midnight and be in the same time zone."]
    pub fn is_all_day(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("isAllDay")
    }
    pub fn set_is_all_day(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("isAllDay", value)
    }
    #[doc = "Set to true if the event has been canceled."]
    pub fn is_cancelled(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("isCancelled")
    }
    pub fn set_is_cancelled(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("isCancelled", value)
    }
    #[doc = "Set to true if the user has updated the meeting in Outlook but hasn't sent the updates to attendees.\n\n Set to false if all changes are sent, or if the event is an appointment without any attendees."]
    pub fn is_draft(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("isDraft")
    }
    pub fn set_is_draft(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("isDraft", value)
    }
    #[doc = "True if this event has online meeting information (that is, onlineMeeting points to an onlineMeetingInfo resource), false otherwise.\n\n Default is false (onlineMeeting is null). Optional."]
    pub fn is_online_meeting(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("isOnlineMeeting")
    }
    pub fn set_is_online_meeting(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("isOnlineMeeting", value)
    }
    #[doc = "Set to true if the calendar owner (specified by the owner property of the calendar) is the organizer of the event (specified by the organizer property of the event).\n\n It also applies if a delegate organized the event on behalf of the owner."]
    pub fn is_organizer(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("isOrganizer")
    }
    pub fn set_is_organizer(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("isOrganizer", value)
    }
    #[doc = "Set to true if an alert is set to remind the user of the event."]
    pub fn is_reminder_on(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("isReminderOn")
    }
    pub fn set_is_reminder_on(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("isReminderOn", value)
    }
    #[doc = "The location of the event."]
    pub fn location(&self) -> Result<Option<Location>, Error> {
        self.backing_store().get_value("location")
    }
    pub fn set_location(&mut self, value: Option<Location>) -> Result<(), Error> {
        self.backing_store_mut().set_value("location", value)
    }
    #[doc = "The locations where the event is held or attended from.\n\n The location and locations properties always correspond with each other."]
    pub fn locations(&self) -> Result<Option<Vec<Location>>, Error> {
        self.backing_store().get_collection("locations")
    }
    pub fn set_locations(&mut self, value: Option<Vec<Location>>) -> Result<(), Error> {
        self.backing_store_mut().set_collection("locations", value)
    }
    #[doc = "Details for an attendee to join the meeting online.\n\n Default is null. Read-only. After you set the isOnlineMeeting and onlineMeetingProvider properties to enable a meeting online, Microsoft Graph initializes onlineMeeting. When set, the meeting remains available online, and you cannot change the isOnlineMeeting, onlineMeetingProvider, and onlneMeeting properties again."]
    pub fn online_meeting(&self) -> Result<Option<OnlineMeetingInfo>, Error> {
        self.backing_store().get_value("onlineMeeting")
    }
    pub fn set_online_meeting(&mut self, value: Option<OnlineMeetingInfo>) -> Result<(), Error> {
        self.backing_store_mut().set_value("onlineMeeting", value)
    }
    #[doc = "Represents the online meeting service provider.\n\n By default, onlineMeetingProvider is unknown. The possible values are unknown, teamsForBusiness, skypeForBusiness, and skypeForConsumer. Optional."]
    pub fn online_meeting_provider(&self) -> Result<Option<OnlineMeetingProviderType>, Error> {
        self.backing_store().get_value("onlineMeetingProvider")
    }
    pub fn set_online_meeting_provider(
        &mut self,
        value: Option<OnlineMeetingProviderType>,
    ) -> Result<(), Error> {
        self.backing_store_mut().set_value("onlineMeetingProvider", value)
    }
    #[doc = "A URL for an online meeting.\n\n The property is set only when an organizer specifies in Outlook that an event is an online meeting such as Skype. Read-only."]
    pub fn online_meeting_url(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("onlineMeetingUrl")
    }
    pub fn set_online_meeting_url(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("onlineMeetingUrl", value)
    }
    #[doc = "The organizer of the event."]
    pub fn organizer(&self) -> Result<Option<RecipientKind>, Error> {
        self.backing_store().get_value("organizer")
    }
    pub fn set_organizer(&mut self, value: Option<RecipientKind>) -> Result<(), Error> {
        self.backing_store_mut().set_value("organizer", value)
    }
    #[doc = "The end time zone that was set when the event was created.\n\n A value of tzone://Microsoft/Custom indicates that a legacy custom time zone was set in desktop Outlook."]
    pub fn original_end_time_zone(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("originalEndTimeZone")
    }
    pub fn set_original_end_time_zone(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("originalEndTimeZone", value)
    }
    #[doc = "Represents the start time of an event when it's initially created as an occurrence or exception in a recurring series.\n\n This property is not returned for events that are single instances."]
    pub fn original_start(&self) -> Result<Option<OffsetDateTime>, Error> {
        self.backing_store().get_value("originalStart")
    }
    pub fn set_original_start(&mut self, value: Option<OffsetDateTime>) -> Result<(), Error> {
        self.backing_store_mut().set_value("originalStart", value)
    }
    #[doc = "The start time zone that was set when the event was created.\n\n A value of tzone://Microsoft/Custom indicates that a legacy custom time zone was set in desktop Outlook."]
    pub fn original_start_time_zone(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("originalStartTimeZone")
    }
    pub fn set_original_start_time_zone(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("originalStartTimeZone", value)
    }
    #[doc = "The recurrence pattern for the event."]
    pub fn recurrence(&self) -> Result<Option<PatternedRecurrence>, Error> {
        self.backing_store().get_value("recurrence")
    }
    pub fn set_recurrence(&mut self, value: Option<PatternedRecurrence>) -> Result<(), Error> {
        self.backing_store_mut().set_value("recurrence", value)
    }
    #[doc = "The number of minutes before the event start time that the reminder alert occurs."]
    pub fn reminder_minutes_before_start(&self) -> Result<Option<i32>, Error> {
        self.backing_store().get_value("reminderMinutesBeforeStart")
    }
    pub fn set_reminder_minutes_before_start(&mut self, value: Option<i32>) -> Result<(), Error> {
        self.backing_store_mut().set_value("reminderMinutesBeforeStart", value)
    }
    #[doc = "Default is true, which represents the organizer would like an invitee to send a response to the event."]
    pub fn response_requested(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("responseRequested")
    }
    pub fn set_response_requested(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("responseRequested", value)
    }
    #[doc = "Indicates the type of response sent in response to an event message."]
    pub fn response_status(&self) -> Result<Option<ResponseStatus>, Error> {
        self.backing_store().get_value("responseStatus")
    }
    pub fn set_response_status(&mut self, value: Option<ResponseStatus>) -> Result<(), Error> {
        self.backing_store_mut().set_value("responseStatus", value)
    }
    #[doc = "Possible values are: normal, personal, private, and confidential."]
    pub fn sensitivity(&self) -> Result<Option<Sensitivity>, Error> {
        self.backing_store().get_value("sensitivity")
    }
    pub fn set_sensitivity(&mut self, value: Option<Sensitivity>) -> Result<(), Error> {
        self.backing_store_mut().set_value("sensitivity", value)
    }
    #[doc = "The ID for the recurring series master item, if this event is part of a recurring series."]
    pub fn series_master_id(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("seriesMasterId")
    }
    pub fn set_series_master_id(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("seriesMasterId", value)
    }
    #[doc = "The status to show.\n\n Possible values are: free, tentative, busy, oof, workingElsewhere, unknown."]
    pub fn show_as(&self) -> Result<Option<FreeBusyStatus>, Error> {
        self.backing_store().get_value("showAs")
    }
    pub fn set_show_as(&mut self, value: Option<FreeBusyStatus>) -> Result<(), Error> {
        self.backing_store_mut().set_value("showAs", value)
    }
    #[doc = "The start date, time, and time zone of the event.\n\n By default, the start time is in UTC."]
    pub fn start(&self) -> Result<Option<DateTimeTimeZone>, Error> {
        self.backing_store().get_value("start")
    }
    pub fn set_start(&mut self, value: Option<DateTimeTimeZone>) -> Result<(), Error> {
        self.backing_store_mut().set_value("start", value)
    }
    #[doc = "The text of the event's subject line."]
    pub fn subject(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("subject")
    }
    pub fn set_subject(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("subject", value)
    }
    #[doc = "A custom identifier specified by a client app for the server to avoid redundant POST operations in case of client retries to create the same event.\n\n It's useful when low network connectivity causes the client to time out before receiving a response from the server for the client's prior create-event request."]
    pub fn transaction_id(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("transactionId")
    }
    pub fn set_transaction_id(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("transactionId", value)
    }
    #[doc = "The event type.\n\n Possible values are: singleInstance, occurrence, exception, seriesMaster. Read-only"]
    pub fn type_escaped(&self) -> Result<Option<EventType>, Error> {
        self.backing_store().get_value("type")
    }
    pub fn set_type_escaped(&mut self, value: Option<EventType>) -> Result<(), Error> {
        self.backing_store_mut().set_value("type", value)
    }
    #[doc = "The URL to open the event in Outlook on the web.\n\n Outlook on the web opens the event in the browser if you are signed in to your mailbox. Otherwise, Outlook on the web prompts you to sign in."]
    pub fn web_link(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("webLink")
    }
    pub fn set_web_link(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("webLink", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.outlook_item.serialize_properties(writer)?;
        writer.write_bool_value("allowNewTimeProposals", self.allow_new_time_proposals()?)?;
        writer.write_collection_of_objects("attendees", self.attendees()?.as_deref())?;
        writer.write_object("body", self.body()?.as_ref())?;
        writer.write_string_value("bodyPreview", self.body_preview()?.as_deref())?;
        writer.write_object("calendar", self.calendar()?.as_ref())?;
        writer.write_object("end", self.end()?.as_ref())?;
        writer.write_bool_value("hasAttachments", self.has_attachments()?)?;
        writer.write_bool_value("hideAttendees", self.hide_attendees()?)?;
        writer.write_string_value("iCalUId", self.i_cal_u_id()?.as_deref())?;
        writer.write_enum_value("importance", self.importance()?)?;
        writer.write_bool_value("isAllDay", self.is_all_day()?)?;
        writer.write_bool_value("isCancelled", self.is_cancelled()?)?;
        writer.write_bool_value("isDraft", self.is_draft()?)?;
        writer.write_bool_value("isOnlineMeeting", self.is_online_meeting()?)?;
        writer.write_bool_value("isOrganizer", self.is_organizer()?)?;
        writer.write_bool_value("isReminderOn", self.is_reminder_on()?)?;
        writer.write_object("location", self.location()?.as_ref())?;
        writer.write_collection_of_objects("locations", self.locations()?.as_deref())?;
        writer.write_object("onlineMeeting", self.online_meeting()?.as_ref())?;
        writer.write_enum_value("onlineMeetingProvider", self.online_meeting_provider()?)?;
        writer.write_string_value("onlineMeetingUrl", self.online_meeting_url()?.as_deref())?;
        writer.write_object("organizer", self.organizer()?.as_ref())?;
        writer.write_string_value(
            "originalEndTimeZone",
            self.original_end_time_zone()?.as_deref(),
        )?;
        writer.write_date_time_value("originalStart", self.original_start()?)?;
        writer.write_string_value(
            "originalStartTimeZone",
            self.original_start_time_zone()?.as_deref(),
        )?;
        writer.write_object("recurrence", self.recurrence()?.as_ref())?;
        writer.write_i32_value(
            "reminderMinutesBeforeStart",
            self.reminder_minutes_before_start()?,
        )?;
        writer.write_bool_value("responseRequested", self.response_requested()?)?;
        writer.write_object("responseStatus", self.response_status()?.as_ref())?;
        writer.write_enum_value("sensitivity", self.sensitivity()?)?;
        writer.write_string_value("seriesMasterId", self.series_master_id()?.as_deref())?;
        writer.write_enum_value("showAs", self.show_as()?)?;
        writer.write_object("start", self.start()?.as_ref())?;
        writer.write_string_value("subject", self.subject()?.as_deref())?;
        writer.write_string_value("transactionId", self.transaction_id()?.as_deref())?;
        writer.write_enum_value("type", self.type_escaped()?)?;
        writer.write_string_value("webLink", self.web_link()?.as_deref())?;
        Ok(())
    }
}
impl BackedModel for Event {
    fn backing_store(&self) -> &dyn BackingStore {
        self.outlook_item.backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.outlook_item.backing_store_mut()
    }
}
impl Parsable for Event {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = self.outlook_item.field_deserializers();
        res.insert("allowNewTimeProposals", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("allowNewTimeProposals", Some(val))?;
            }
            Ok(())
        });
        res.insert("attendees", |store, n| {
            if let Some(val) =
                n.collection_of_object_values(create_attendee_from_discriminator_value)?
            {
                store.set_collection("attendees", Some(val))?;
            }
            Ok(())
        });
        res.insert("body", |store, n| {
            if let Some(val) = n.object_value(create_item_body_from_discriminator_value)? {
                store.set_value("body", Some(val))?;
            }
            Ok(())
        });
        res.insert("bodyPreview", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("bodyPreview", Some(val))?;
            }
            Ok(())
        });
        res.insert("calendar", |store, n| {
            if let Some(val) = n.object_value(create_calendar_from_discriminator_value)? {
                store.set_value("calendar", Some(val))?;
            }
            Ok(())
        });
        res.insert("end", |store, n| {
            if let Some(val) =
                n.object_value(create_date_time_time_zone_from_discriminator_value)?
            {
                store.set_value("end", Some(val))?;
            }
            Ok(())
        });
        res.insert("hasAttachments", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("hasAttachments", Some(val))?;
            }
            Ok(())
        });
        res.insert("hideAttendees", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("hideAttendees", Some(val))?;
            }
            Ok(())
        });
        res.insert("iCalUId", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("iCalUId", Some(val))?;
            }
            Ok(())
        });
        res.insert("importance", |store, n| {
            if let Some(val) = n.enum_value::<Importance>()? {
                store.set_value("importance", Some(val))?;
            }
            Ok(())
        });
        res.insert("isAllDay", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("isAllDay", Some(val))?;
            }
            Ok(())
        });
        res.insert("isCancelled", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("isCancelled", Some(val))?;
            }
            Ok(())
        });
        res.insert("isDraft", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("isDraft", Some(val))?;
            }
            Ok(())
        });
        res.insert("isOnlineMeeting", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("isOnlineMeeting", Some(val))?;
            }
            Ok(())
        });
        res.insert("isOrganizer", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("isOrganizer", Some(val))?;
            }
            Ok(())
        });
        res.insert("isReminderOn", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("isReminderOn", Some(val))?;
            }
            Ok(())
        });
        res.insert("location", |store, n| {
            if let Some(val) = n.object_value(create_location_from_discriminator_value)? {
                store.set_value("location", Some(val))?;
            }
            Ok(())
        });
        res.insert("locations", |store, n| {
            if let Some(val) =
                n.collection_of_object_values(create_location_from_discriminator_value)?
            {
                store.set_collection("locations", Some(val))?;
            }
            Ok(())
        });
        res.insert("onlineMeeting", |store, n| {
            if let Some(val) =
                n.object_value(create_online_meeting_info_from_discriminator_value)?
            {
                store.set_value("onlineMeeting", Some(val))?;
            }
            Ok(())
        });
        res.insert("onlineMeetingProvider", |store, n| {
            if let Some(val) = n.enum_value::<OnlineMeetingProviderType>()? {
                store.set_value("onlineMeetingProvider", Some(val))?;
            }
            Ok(())
        });
        res.insert("onlineMeetingUrl", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("onlineMeetingUrl", Some(val))?;
            }
            Ok(())
        });
        res.insert("organizer", |store, n| {
            if let Some(val) = n.object_value(create_recipient_from_discriminator_value)? {
                store.set_value("organizer", Some(val))?;
            }
            Ok(())
        });
        res.insert("originalEndTimeZone", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("originalEndTimeZone", Some(val))?;
            }
            Ok(())
        });
        res.insert("originalStart", |store, n| {
            if let Some(val) = n.date_time_value()? {
                store.set_value("originalStart", Some(val))?;
            }
            Ok(())
        });
        res.insert("originalStartTimeZone", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("originalStartTimeZone", Some(val))?;
            }
            Ok(())
        });
        res.insert("recurrence", |store, n| {
            if let Some(val) =
                n.object_value(create_patterned_recurrence_from_discriminator_value)?
            {
                store.set_value("recurrence", Some(val))?;
            }
            Ok(())
        });
        res.insert("reminderMinutesBeforeStart", |store, n| {
            if let Some(val) = n.i32_value()? {
                store.set_value("reminderMinutesBeforeStart", Some(val))?;
            }
            Ok(())
        });
        res.insert("responseRequested", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("responseRequested", Some(val))?;
            }
            Ok(())
        });
        res.insert("responseStatus", |store, n| {
            if let Some(val) = n.object_value(create_response_status_from_discriminator_value)? {
                store.set_value("responseStatus", Some(val))?;
            }
            Ok(())
        });
        res.insert("sensitivity", |store, n| {
            if let Some(val) = n.enum_value::<Sensitivity>()? {
                store.set_value("sensitivity", Some(val))?;
            }
            Ok(())
        });
        res.insert("seriesMasterId", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("seriesMasterId", Some(val))?;
            }
            Ok(())
        });
        res.insert("showAs", |store, n| {
            if let Some(val) = n.enum_value::<FreeBusyStatus>()? {
                store.set_value("showAs", Some(val))?;
            }
            Ok(())
        });
        res.insert("start", |store, n| {
            if let Some(val) =
                n.object_value(create_date_time_time_zone_from_discriminator_value)?
            {
                store.set_value("start", Some(val))?;
            }
            Ok(())
        });
        res.insert("subject", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("subject", Some(val))?;
            }
            Ok(())
        });
        res.insert("transactionId", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("transactionId", Some(val))?;
            }
            Ok(())
        });
        res.insert("type", |store, n| {
            if let Some(val) = n.enum_value::<EventType>()? {
                store.set_value("type", Some(val))?;
            }
            Ok(())
        });
        res.insert("webLink", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("webLink", Some(val))?;
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
impl StoreValue for Event {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_event_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_event_from_discriminator_value(_parse_node: &dyn ParseNode) -> Result<Event, Error> {
    Ok(Event::new())
}
