/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Model bindings for the Microsoft Graph API.
//!
//! Every type in [`types`] keeps its properties in a [`store::BackingStore`]
//! and converts them on access. Payloads are read and written through the
//! format independent contracts in [`serialization`]; [`serialization::json`]
//! provides JSON.

use thiserror::Error;

pub mod serialization;
pub mod store;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use serialization::json::{parse_json, serialize_changes_to_json, serialize_to_json};
pub use serialization::{AdditionalDataHolder, BackedModel, EnumValue, Parsable};

#[derive(Debug, Error)]
pub enum Error {
    #[error("property {key} holds an unexpected value: {value}")]
    UnexpectedValue { key: String, value: String },
    #[error("expected a JSON {expected}, found {value}")]
    IncompatibleNode { expected: &'static str, value: String },
    #[error("{value} does not fit in an {expected}")]
    Overflow { expected: &'static str, value: String },
    #[error("cannot represent non-finite number {0} in JSON")]
    NonFiniteNumber(String),
    #[error("invalid date-time: {0}")]
    DateTime(#[from] time::error::Parse),
    #[error("could not format date-time: {0}")]
    DateTimeFormat(#[from] time::error::Format),
    #[error("invalid UUID: {0}")]
    Uuid(#[from] uuid::Error),
    #[error("invalid base64 content: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("backing store failure: {0}")]
    Store(String),
    #[error("no format registered for content type {0}")]
    UnsupportedContentType(String),
}

#[cfg(test)]
mod tests {
    use super::serialization::json::{JsonParseNode, parse_json, serialize_changes_to_json};
    use super::serialization::{AdditionalDataHolder, BackedModel, EnumValue, Parsable, ParseNode};
    use super::test_utils::{assert_serialized_json, parse_fixture};
    use super::types::{
        attendee, calendar, email_address, event, event_message, event_message_request, importance,
        ios_vpp_e_book, item_body, mail_tips_type, managed_app_registration, message, recipient,
    };
    use super::Error;
    use serde_json::json;
    use time::macros::datetime;

    const EVENT_MESSAGE_REQUEST: &str = r##"{
    "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#users('bb8775a4')/messages/$entity",
    "@odata.etag": "W/\"CwAAABYAAAC4ofQHEIqCSbQPot83AFcbAAAW/u3x\"",
    "@odata.type": "#microsoft.graph.eventMessageRequest",
    "id": "AAMkADYAAAImV_jAAA=",
    "createdDateTime": "2024-02-05T21:28:04Z",
    "lastModifiedDateTime": "2024-02-05T21:28:06Z",
    "changeKey": "CwAAABYAAAC4ofQHEIqCSbQPot83AFcbAAAW/u3x",
    "categories": [],
    "receivedDateTime": "2024-02-05T21:28:05Z",
    "sentDateTime": "2024-02-05T21:28:03Z",
    "hasAttachments": false,
    "internetMessageId": "<BY2PR06MB549E@BY2PR06MB549.namprd06.prod.outlook.com>",
    "subject": "Design review",
    "bodyPreview": "Let's go over the drafts.",
    "importance": "high",
    "conversationIndex": "AdRYbw0=",
    "isDeliveryReceiptRequested": null,
    "isReadReceiptRequested": false,
    "isRead": false,
    "isDraft": false,
    "inferenceClassification": "focused",
    "body": {
        "contentType": "html",
        "content": "<html><body>Let's go over the drafts.</body></html>"
    },
    "sender": {
        "emailAddress": {
            "name": "Adele Vance",
            "address": "AdeleV@contoso.com"
        }
    },
    "toRecipients": [
        {
            "emailAddress": {
                "name": "Alex Wilber",
                "address": "AlexW@contoso.com"
            }
        }
    ],
    "meetingMessageType": "meetingRequest",
    "type": "singleInstance",
    "isOutOfDate": false,
    "isAllDay": false,
    "isDelegated": false,
    "responseRequested": true,
    "allowNewTimeProposals": true,
    "meetingRequestType": "newMeetingRequest",
    "startDateTime": {
        "dateTime": "2024-02-07T18:00:00.0000000",
        "timeZone": "UTC"
    },
    "endDateTime": {
        "dateTime": "2024-02-07T18:30:00.0000000",
        "timeZone": "UTC"
    },
    "location": {
        "displayName": "Conf Room 3",
        "locationType": "conferenceRoom",
        "uniqueIdType": "private"
    }
}"##;

    #[test]
    fn discriminator_selects_most_derived_message() {
        let parsed = parse_fixture(EVENT_MESSAGE_REQUEST, message::create_message_from_discriminator_value);
        let message::MessageKind::EventMessageRequest(request) = &parsed else {
            panic!("expected an event message request, got {parsed:?}");
        };

        assert_eq!(request.allow_new_time_proposals().unwrap(), Some(true));
        assert_eq!(request.response_requested().unwrap(), Some(true));

        let event_message = request.event_message();
        assert_eq!(
            event_message.meeting_message_type().unwrap(),
            Some(super::types::meeting_message_type::MeetingMessageType::MeetingRequest)
        );
        let start = event_message.start_date_time().unwrap().unwrap();
        assert_eq!(start.time_zone().unwrap().as_deref(), Some("UTC"));
        assert_eq!(
            event_message
                .location()
                .unwrap()
                .unwrap()
                .display_name()
                .unwrap()
                .as_deref(),
            Some("Conf Room 3")
        );

        let message = parsed.message();
        assert_eq!(message.subject().unwrap().as_deref(), Some("Design review"));
        assert_eq!(message.importance().unwrap(), Some(importance::Importance::High));
        assert_eq!(message.is_delivery_receipt_requested().unwrap(), None);
        assert_eq!(message.conversation_index().unwrap(), Some(vec![0x01, 0xd4, 0x58, 0x6f, 0x0d]));
        assert_eq!(
            message.received_date_time().unwrap(),
            Some(datetime!(2024-02-05 21:28:05 UTC))
        );
        assert_eq!(
            message.outlook_item().categories().unwrap(),
            Some(Vec::<String>::new())
        );
        assert_eq!(
            message.outlook_item().entity().id().unwrap().as_deref(),
            Some("AAMkADYAAAImV_jAAA=")
        );

        let body = message.body().unwrap().unwrap();
        assert_eq!(body.content_type().unwrap(), Some(super::types::body_type::BodyType::Html));

        let to = message.to_recipients().unwrap().unwrap();
        assert_eq!(to.len(), 1);
        let address = to[0].recipient().email_address().unwrap().unwrap();
        assert_eq!(address.address().unwrap().as_deref(), Some("AlexW@contoso.com"));
    }

    #[test]
    fn unknown_fields_become_additional_data() {
        let parsed = parse_fixture(EVENT_MESSAGE_REQUEST, message::create_message_from_discriminator_value);
        let additional = parsed.additional_data().unwrap().unwrap();
        assert_eq!(
            additional.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["@odata.context", "@odata.etag"]
        );

        // Nested objects keep their own unknown fields.
        let location = match &parsed {
            message::MessageKind::EventMessageRequest(request) => {
                request.event_message().location().unwrap().unwrap()
            }
            other => panic!("unexpected variant {other:?}"),
        };
        assert_eq!(
            location.additional_data().unwrap(),
            Some(serde_json::Map::from_iter([(
                "uniqueIdType".to_string(),
                json!("private")
            )]))
        );
    }

    #[test]
    fn unknown_discriminator_falls_back_to_base() {
        let json = br##"{"@odata.type": "#microsoft.graph.calendarSharingMessage", "subject": "Shared"}"##;
        let parsed = parse_json(json, message::create_message_from_discriminator_value)
            .unwrap()
            .unwrap();
        assert!(matches!(parsed, message::MessageKind::Message(_)));
        assert_eq!(parsed.message().subject().unwrap().as_deref(), Some("Shared"));

        let untagged = parse_json(br#"{"subject": "Plain"}"#, message::create_message_from_discriminator_value)
            .unwrap()
            .unwrap();
        assert!(matches!(untagged, message::MessageKind::Message(_)));
    }

    #[test]
    fn nested_discriminators_dispatch() {
        let json = br##"{
            "@odata.type": "#microsoft.graph.event",
            "organizer": {
                "@odata.type": "#microsoft.graph.attendee",
                "type": "required",
                "emailAddress": { "address": "org@contoso.com" }
            },
            "attendees": [
                { "type": "optional", "status": { "response": "tentativelyAccepted" } }
            ]
        }"##;
        let parsed = parse_json(json, event::create_event_from_discriminator_value)
            .unwrap()
            .unwrap();

        let organizer = match parsed.organizer().unwrap().unwrap() {
            recipient::RecipientKind::Attendee(organizer) => organizer,
            other => panic!("organizer should be an attendee, got {other:?}"),
        };
        assert_eq!(
            organizer.attendee_base().type_escaped().unwrap(),
            Some(super::types::attendee_type::AttendeeType::Required)
        );

        let attendees = parsed.attendees().unwrap().unwrap();
        assert_eq!(
            attendees[0]
                .status()
                .unwrap()
                .unwrap()
                .response()
                .unwrap(),
            Some(super::types::response_type::ResponseType::TentativelyAccepted)
        );
    }

    #[test]
    fn setters_and_getters_agree() {
        let mut book = ios_vpp_e_book::IosVppEBook::new();
        let token = uuid::Uuid::parse_str("2d1a7c3f-5e1b-4c6f-9b0f-1c2d3e4f5a6b").unwrap();
        book.set_genres(Some(vec!["Fiction".to_string(), "Mystery".to_string()]))
            .unwrap();
        book.set_total_license_count(Some(25)).unwrap();
        book.set_vpp_token_id(Some(token)).unwrap();
        book.managed_e_book_mut()
            .set_published_date_time(Some(datetime!(2023-11-01 00:00:00 UTC)))
            .unwrap();

        assert_eq!(
            book.genres().unwrap(),
            Some(vec!["Fiction".to_string(), "Mystery".to_string()])
        );
        assert_eq!(book.total_license_count().unwrap(), Some(25));
        assert_eq!(book.used_license_count().unwrap(), None);
        assert_eq!(book.vpp_token_id().unwrap(), Some(token));
        assert_eq!(
            book.managed_e_book().published_date_time().unwrap(),
            Some(datetime!(2023-11-01 00:00:00 UTC))
        );
        assert_eq!(
            book.managed_e_book().entity().odata_type().unwrap().as_deref(),
            Some("#microsoft.graph.iosVppEBook")
        );

        book.set_total_license_count(None).unwrap();
        assert_eq!(book.total_license_count().unwrap(), None);

        let mut body = item_body::ItemBody::new();
        body.set_content(Some("hello".to_string())).unwrap();
        let mut message = message::Message::new();
        message.set_body(Some(body)).unwrap();
        assert_eq!(
            message.body().unwrap().unwrap().content().unwrap().as_deref(),
            Some("hello")
        );
    }

    fn assert_set_get<M, V>(
        mut model: M,
        set: fn(&mut M, Option<V>) -> Result<(), Error>,
        get: fn(&M) -> Result<Option<V>, Error>,
        value: V,
    ) where
        V: Clone + PartialEq + std::fmt::Debug,
    {
        assert_eq!(get(&model).unwrap(), None);
        set(&mut model, Some(value.clone())).unwrap();
        assert_eq!(get(&model).unwrap(), Some(value));
        set(&mut model, None).unwrap();
        assert_eq!(get(&model).unwrap(), None);
    }

    #[test]
    fn every_model_reads_back_what_was_set() {
        use super::types::*;

        let taken = datetime!(2024-06-01 09:30:00 UTC);

        assert_set_get(
            android_mobile_app_identifier::AndroidMobileAppIdentifier::new(),
            android_mobile_app_identifier::AndroidMobileAppIdentifier::set_package_id,
            android_mobile_app_identifier::AndroidMobileAppIdentifier::package_id,
            "com.contoso.mail".to_string(),
        );
        assert_set_get(
            ios_mobile_app_identifier::IosMobileAppIdentifier::new(),
            ios_mobile_app_identifier::IosMobileAppIdentifier::set_bundle_id,
            ios_mobile_app_identifier::IosMobileAppIdentifier::bundle_id,
            "com.contoso.mail".to_string(),
        );
        assert_set_get(
            attendee_base::AttendeeBase::new(),
            attendee_base::AttendeeBase::set_type_escaped,
            attendee_base::AttendeeBase::type_escaped,
            attendee_type::AttendeeType::Optional,
        );
        assert_set_get(
            calendar::Calendar::new(),
            calendar::Calendar::set_color,
            calendar::Calendar::color,
            calendar_color::CalendarColor::LightTeal,
        );
        assert_set_get(
            calendar::Calendar::new(),
            calendar::Calendar::set_allowed_online_meeting_providers,
            calendar::Calendar::allowed_online_meeting_providers,
            vec![
                online_meeting_provider_type::OnlineMeetingProviderType::TeamsForBusiness,
                online_meeting_provider_type::OnlineMeetingProviderType::SkypeForBusiness,
            ],
        );
        assert_set_get(
            date_time_time_zone::DateTimeTimeZone::new(),
            date_time_time_zone::DateTimeTimeZone::set_time_zone,
            date_time_time_zone::DateTimeTimeZone::time_zone,
            "Pacific Standard Time".to_string(),
        );
        assert_set_get(
            email_address::EmailAddress::new(),
            email_address::EmailAddress::set_name,
            email_address::EmailAddress::name,
            "Megan Bowen".to_string(),
        );
        assert_set_get(
            followup_flag::FollowupFlag::new(),
            followup_flag::FollowupFlag::set_flag_status,
            followup_flag::FollowupFlag::flag_status,
            followup_flag_status::FollowupFlagStatus::Flagged,
        );
        assert_set_get(
            internet_message_header::InternetMessageHeader::new(),
            internet_message_header::InternetMessageHeader::set_value,
            internet_message_header::InternetMessageHeader::value,
            "Microsoft Outlook 16.0".to_string(),
        );
        assert_set_get(
            location::Location::new(),
            location::Location::set_location_type,
            location::Location::location_type,
            location_type::LocationType::ConferenceRoom,
        );
        assert_set_get(
            managed_app_registration::ManagedAppRegistration::new(),
            managed_app_registration::ManagedAppRegistration::set_last_sync_date_time,
            managed_app_registration::ManagedAppRegistration::last_sync_date_time,
            taken,
        );
        assert_set_get(
            mime_content::MimeContent::new(),
            mime_content::MimeContent::set_value,
            mime_content::MimeContent::value,
            b"MIME-Version: 1.0".to_vec(),
        );
        assert_set_get(
            online_meeting_info::OnlineMeetingInfo::new(),
            online_meeting_info::OnlineMeetingInfo::set_toll_free_numbers,
            online_meeting_info::OnlineMeetingInfo::toll_free_numbers,
            vec!["+1 800 555 0100".to_string()],
        );
        assert_set_get(
            phone::Phone::new(),
            phone::Phone::set_type_escaped,
            phone::Phone::type_escaped,
            phone_type::PhoneType::BusinessFax,
        );
        assert_set_get(
            photo::Photo::new(),
            photo::Photo::set_f_number,
            photo::Photo::f_number,
            2.8,
        );
        assert_set_get(
            photo::Photo::new(),
            photo::Photo::set_taken_date_time,
            photo::Photo::taken_date_time,
            taken,
        );
        assert_set_get(
            quota::Quota::new(),
            quota::Quota::set_deleted,
            quota::Quota::deleted,
            1_099_511_627_776_i64,
        );
        assert_set_get(
            recurrence_pattern::RecurrencePattern::new(),
            recurrence_pattern::RecurrencePattern::set_days_of_week,
            recurrence_pattern::RecurrencePattern::days_of_week,
            vec![day_of_week::DayOfWeek::Monday, day_of_week::DayOfWeek::Thursday],
        );
        assert_set_get(
            recurrence_pattern::RecurrencePattern::new(),
            recurrence_pattern::RecurrencePattern::set_index,
            recurrence_pattern::RecurrencePattern::index,
            week_index::WeekIndex::Last,
        );
        assert_set_get(
            recurrence_range::RecurrenceRange::new(),
            recurrence_range::RecurrenceRange::set_number_of_occurrences,
            recurrence_range::RecurrenceRange::number_of_occurrences,
            10,
        );
        assert_set_get(
            response_status::ResponseStatus::new(),
            response_status::ResponseStatus::set_response,
            response_status::ResponseStatus::response,
            response_type::ResponseType::TentativelyAccepted,
        );
        assert_set_get(
            storage_plan_information::StoragePlanInformation::new(),
            storage_plan_information::StoragePlanInformation::set_upgrade_available,
            storage_plan_information::StoragePlanInformation::upgrade_available,
            true,
        );

        // Model valued properties have no `PartialEq`; compare a field.
        let mut start = date_time_time_zone::DateTimeTimeZone::new();
        start.set_date_time(Some("2024-06-03T10:00:00".to_string())).unwrap();
        let mut slot = time_slot::TimeSlot::new();
        slot.set_start(Some(start)).unwrap();
        assert_eq!(
            slot.start().unwrap().unwrap().date_time().unwrap().as_deref(),
            Some("2024-06-03T10:00:00")
        );
        let mut plan = storage_plan_information::StoragePlanInformation::new();
        plan.set_upgrade_available(Some(false)).unwrap();
        let mut quota = quota::Quota::new();
        quota.set_storage_plan_information(Some(plan)).unwrap();
        assert_eq!(
            quota
                .storage_plan_information()
                .unwrap()
                .unwrap()
                .upgrade_available()
                .unwrap(),
            Some(false)
        );
    }

    #[test]
    fn event_recurrence_and_online_meeting_are_typed() {
        let json = br##"{
            "@odata.type": "#microsoft.graph.event",
            "subject": "Weekly sync",
            "onlineMeeting": {
                "joinUrl": "https://teams.microsoft.com/l/meetup-join/19%3ameeting",
                "phones": [{"number": "+1 425 555 0100", "type": "business"}],
                "tollFreeNumbers": ["+1 800 555 0100"]
            },
            "recurrence": {
                "pattern": {
                    "type": "weekly",
                    "interval": 1,
                    "daysOfWeek": ["monday", "wednesday"],
                    "firstDayOfWeek": "sunday"
                },
                "range": {
                    "type": "endDate",
                    "startDate": "2024-03-04",
                    "endDate": "2024-06-28",
                    "recurrenceTimeZone": "UTC"
                }
            }
        }"##;
        let event = parse_json(json, event::create_event_from_discriminator_value)
            .unwrap()
            .unwrap();
        assert_eq!(event.additional_data().unwrap(), None);

        let meeting = event.online_meeting().unwrap().unwrap();
        assert_eq!(
            meeting.join_url().unwrap().as_deref(),
            Some("https://teams.microsoft.com/l/meetup-join/19%3ameeting")
        );
        let phones = meeting.phones().unwrap().unwrap();
        assert_eq!(phones.len(), 1);
        assert_eq!(
            phones[0].type_escaped().unwrap(),
            Some(super::types::phone_type::PhoneType::Business)
        );

        let recurrence = event.recurrence().unwrap().unwrap();
        let pattern = recurrence.pattern().unwrap().unwrap();
        assert_eq!(
            pattern.type_escaped().unwrap(),
            Some(super::types::recurrence_pattern_type::RecurrencePatternType::Weekly)
        );
        assert_eq!(
            pattern.days_of_week().unwrap(),
            Some(vec![
                super::types::day_of_week::DayOfWeek::Monday,
                super::types::day_of_week::DayOfWeek::Wednesday
            ])
        );
        let range = recurrence.range().unwrap().unwrap();
        assert_eq!(
            range.type_escaped().unwrap(),
            Some(super::types::recurrence_range_type::RecurrenceRangeType::EndDate)
        );
        assert_eq!(range.start_date().unwrap().as_deref(), Some("2024-03-04"));

        let written: serde_json::Value =
            serde_json::from_slice(&super::serialize_to_json(&event).unwrap()).unwrap();
        assert_eq!(written["recurrence"]["pattern"]["daysOfWeek"], json!(["monday", "wednesday"]));
        assert_eq!(written["onlineMeeting"]["phones"][0]["type"], json!("business"));
    }

    #[test]
    fn serialize_writes_base_fields_first() {
        let mut from = recipient::Recipient::new();
        let mut address = email_address::EmailAddress::new();
        address.set_address(Some("megan@contoso.com".to_string())).unwrap();
        from.set_email_address(Some(address)).unwrap();

        let mut message = message::Message::new();
        message.outlook_item_mut().entity_mut().set_id(Some("AAMk=".to_string())).unwrap();
        message.set_subject(Some("Lunch?".to_string())).unwrap();
        message.set_is_read(Some(false)).unwrap();
        message.set_from(Some(from.into())).unwrap();
        message
            .outlook_item_mut()
            .set_categories(Some(vec!["Blue category".to_string()]))
            .unwrap();

        assert_serialized_json(
            &message,
            json!({
                "id": "AAMk=",
                "@odata.type": "#microsoft.graph.message",
                "categories": ["Blue category"],
                "from": {
                    "emailAddress": { "address": "megan@contoso.com" },
                    "@odata.type": "#microsoft.graph.recipient"
                },
                "isRead": false,
                "subject": "Lunch?"
            }),
        );
    }

    #[test]
    fn additional_data_follows_derived_fields() {
        let mut request = event_message_request::EventMessageRequest::new();
        request.set_allow_new_time_proposals(Some(true)).unwrap();
        request
            .event_message_mut()
            .message_mut()
            .set_subject(Some("Sync".to_string()))
            .unwrap();
        request
            .set_additional_data(Some(serde_json::Map::from_iter([(
                "@odata.etag".to_string(),
                json!("W/\"1\""),
            )])))
            .unwrap();

        assert_serialized_json(
            &request,
            json!({
                "@odata.type": "#microsoft.graph.eventMessageRequest",
                "subject": "Sync",
                "allowNewTimeProposals": true,
                "@odata.etag": "W/\"1\""
            }),
        );
    }

    #[test]
    fn serialize_then_parse_round_trips() {
        let parsed = parse_fixture(EVENT_MESSAGE_REQUEST, message::create_message_from_discriminator_value);
        let content = super::serialize_to_json(&parsed).unwrap();
        let reparsed = parse_json(&content, message::create_message_from_discriminator_value)
            .unwrap()
            .unwrap();

        assert!(matches!(reparsed, message::MessageKind::EventMessageRequest(_)));
        assert_eq!(
            reparsed.backing_store().to_value(),
            parsed.backing_store().to_value()
        );

        let written: serde_json::Value = serde_json::from_slice(&content).unwrap();
        let mut expected: serde_json::Value = serde_json::from_str(EVENT_MESSAGE_REQUEST).unwrap();
        // `null` properties aren't written back, and recipients gain the
        // discriminator their constructor sets.
        expected
            .as_object_mut()
            .unwrap()
            .remove("isDeliveryReceiptRequested");
        expected["sender"]["@odata.type"] = json!("#microsoft.graph.recipient");
        expected["toRecipients"][0]["@odata.type"] = json!("#microsoft.graph.recipient");
        assert_eq!(written, expected);
    }

    #[test]
    fn changes_serialize_as_patch() {
        let json = br##"{"id": "cal-1", "name": "Work", "color": "lightBlue", "hexColor": "#ff0000", "canEdit": true}"##;
        let mut calendar = parse_json(json, calendar::create_calendar_from_discriminator_value)
            .unwrap()
            .unwrap();

        calendar.set_name(Some("Projects".to_string())).unwrap();
        calendar.set_hex_color(None).unwrap();
        calendar.set_can_edit(Some(true)).unwrap();

        let patch = serialize_changes_to_json(&mut calendar).unwrap();
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(&patch).unwrap(),
            json!({ "name": "Projects", "hexColor": null })
        );

        assert!(calendar.backing_store().keys_changed_to_null().is_empty());
        let full = super::serialize_to_json(&calendar).unwrap();
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(&full).unwrap(),
            json!({
                "id": "cal-1",
                "@odata.type": "#microsoft.graph.calendar",
                "canEdit": true,
                "color": "lightBlue",
                "name": "Projects"
            })
        );
    }

    #[test]
    fn clearing_additional_data_leaves_the_patch_empty() {
        let json = br#"{"id": "cal-1", "name": "Work", "foo": 1}"#;
        let mut calendar = parse_json(json, calendar::create_calendar_from_discriminator_value)
            .unwrap()
            .unwrap();
        assert_eq!(
            calendar.additional_data().unwrap(),
            Some(serde_json::Map::from_iter([("foo".to_string(), json!(1))]))
        );

        calendar.set_additional_data(None).unwrap();
        let patch = serialize_changes_to_json(&mut calendar).unwrap();
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(&patch).unwrap(),
            json!({})
        );
    }

    #[test]
    fn parsed_models_start_clean() {
        let mut parsed =
            parse_fixture(EVENT_MESSAGE_REQUEST, message::create_message_from_discriminator_value);
        let store = parsed.backing_store_mut();
        store.set_return_only_changed_values(true);
        assert!(store.enumerate().is_empty());
    }

    #[test]
    fn decode_stops_at_first_bad_field() {
        let json = br#"{"subject": "ok", "isRead": "yes", "importance": "high"}"#;
        let err = parse_json(json, message::create_message_from_discriminator_value).unwrap_err();
        assert!(matches!(err, Error::IncompatibleNode { expected: "boolean", .. }));

        let bad_date = br#"{"receivedDateTime": "yesterday"}"#;
        assert!(matches!(
            parse_json(bad_date, message::create_message_from_discriminator_value),
            Err(Error::DateTime(_))
        ));

        let bad_nested = br#"{"toRecipients": [{"emailAddress": {"address": 7}}]}"#;
        assert!(parse_json(bad_nested, message::create_message_from_discriminator_value).is_err());
    }

    #[test]
    fn unknown_enum_labels_are_dropped() {
        let json = br#"{"importance": "urgent", "subject": "kept"}"#;
        let parsed = parse_json(json, message::create_message_from_discriminator_value)
            .unwrap()
            .unwrap();
        assert_eq!(parsed.message().importance().unwrap(), None);
        assert_eq!(parsed.message().subject().unwrap().as_deref(), Some("kept"));

        let json = br#"{"flaggedReasons": ["rootedDevice", "jailbroken"]}"#;
        let registration = parse_json(
            json,
            managed_app_registration::create_managed_app_registration_from_discriminator_value,
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            registration.managed_app_registration().flagged_reasons().unwrap(),
            Some(vec![
                super::types::managed_app_flagged_reason::ManagedAppFlaggedReason::RootedDevice
            ])
        );
    }

    #[test]
    fn mobile_app_identifiers_dispatch() {
        use super::types::mobile_app_identifier::MobileAppIdentifierKind;

        let json = br##"{
            "@odata.type": "#microsoft.graph.iosManagedAppRegistration",
            "appIdentifier": {
                "@odata.type": "#microsoft.graph.iosMobileAppIdentifier",
                "bundleId": "com.contoso.mail"
            }
        }"##;
        let registration = parse_json(
            json,
            managed_app_registration::create_managed_app_registration_from_discriminator_value,
        )
        .unwrap()
        .unwrap();
        assert!(matches!(
            registration,
            managed_app_registration::ManagedAppRegistrationKind::IosManagedAppRegistration(_)
        ));
        let identifier = match registration
            .managed_app_registration()
            .app_identifier()
            .unwrap()
            .unwrap()
        {
            MobileAppIdentifierKind::IosMobileAppIdentifier(identifier) => identifier,
            other => panic!("expected an iOS identifier, got {other:?}"),
        };
        assert_eq!(identifier.bundle_id().unwrap().as_deref(), Some("com.contoso.mail"));
    }

    #[test]
    fn flag_enum_labels() {
        use mail_tips_type::MailTipsType;

        let parsed = MailTipsType::parse("automaticReplies,maxMessageSize").unwrap();
        assert_eq!(parsed, MailTipsType::AUTOMATIC_REPLIES | MailTipsType::MAX_MESSAGE_SIZE);
        assert_eq!(parsed.to_string(), "automaticReplies,maxMessageSize");

        // Output follows declaration order, not input order.
        let reordered = MailTipsType::parse("recipientScope,customMailTip").unwrap();
        assert_eq!(reordered.to_string(), "customMailTip,recipientScope");

        assert_eq!(MailTipsType::empty().to_string(), "");
        assert_eq!(MailTipsType::parse(""), None);
        assert_eq!(MailTipsType::parse("automaticReplies,bogus"), None);
        assert_eq!(MailTipsType::parse("AutomaticReplies"), None);
    }

    #[test]
    fn enum_labels_round_trip() {
        use super::types::*;
        use strum::IntoEnumIterator;

        fn check<T: EnumValue + PartialEq + std::fmt::Debug + IntoEnumIterator>() {
            for value in T::iter() {
                assert_eq!(T::parse(&value.to_string()), Some(value));
            }
            assert_eq!(T::parse("definitelyNotALabel"), None);
            assert_eq!(T::parse(""), None);
        }

        check::<attendee_type::AttendeeType>();
        check::<body_type::BodyType>();
        check::<calendar_color::CalendarColor>();
        check::<event_type::EventType>();
        check::<followup_flag_status::FollowupFlagStatus>();
        check::<free_busy_status::FreeBusyStatus>();
        check::<importance::Importance>();
        check::<inference_classification_type::InferenceClassificationType>();
        check::<location_type::LocationType>();
        check::<managed_app_flagged_reason::ManagedAppFlaggedReason>();
        check::<meeting_message_type::MeetingMessageType>();
        check::<meeting_request_type::MeetingRequestType>();
        check::<online_meeting_provider_type::OnlineMeetingProviderType>();
        check::<response_type::ResponseType>();
        check::<sensitivity::Sensitivity>();
        check::<day_of_week::DayOfWeek>();
        check::<week_index::WeekIndex>();
        check::<recurrence_pattern_type::RecurrencePatternType>();
        check::<recurrence_range_type::RecurrenceRangeType>();
        check::<phone_type::PhoneType>();

        assert_eq!(
            meeting_message_type::MeetingMessageType::MeetingTenativelyAccepted.to_string(),
            "meetingTenativelyAccepted"
        );
        assert_eq!(
            online_meeting_provider_type::OnlineMeetingProviderType::UnknownFutureValue.to_string(),
            "unknownFutureValue"
        );
    }

    #[test]
    fn model_values_survive_the_store() {
        let mut attendee = attendee::Attendee::new();
        let mut status = super::types::response_status::ResponseStatus::new();
        status
            .set_response(Some(super::types::response_type::ResponseType::Accepted))
            .unwrap();
        attendee.set_status(Some(status)).unwrap();

        let mut event = event::Event::new();
        event.set_attendees(Some(vec![attendee])).unwrap();
        event.set_organizer(Some(recipient::Recipient::new().into())).unwrap();

        let attendees = event.attendees().unwrap().unwrap();
        assert_eq!(
            attendees[0].status().unwrap().unwrap().response().unwrap(),
            Some(super::types::response_type::ResponseType::Accepted)
        );
        assert!(matches!(
            event.organizer().unwrap(),
            Some(recipient::RecipientKind::Recipient(_))
        ));

        let mut wrapper = event_message::EventMessage::new();
        wrapper.set_event(Some(event)).unwrap();
        let event = wrapper.event().unwrap().unwrap();
        assert_eq!(event.attendees().unwrap().map(|a| a.len()), Some(1));
    }

    #[test]
    fn concrete_constructors_preset_odata_type() {
        let request = event_message_request::EventMessageRequest::new();
        assert_eq!(
            request.event_message().message().outlook_item().entity().odata_type().unwrap().as_deref(),
            Some("#microsoft.graph.eventMessageRequest")
        );

        let body = item_body::ItemBody::new();
        assert_eq!(body.odata_type().unwrap(), None);

        let value = json!({ "@odata.type": "#microsoft.graph.eventMessageRequest" });
        let node: &dyn ParseNode = &JsonParseNode::new(&value);
        let created = message::create_message_from_discriminator_value(node).unwrap();
        assert!(matches!(created, message::MessageKind::EventMessageRequest(_)));
        assert!(created.field_deserializers().contains_key("meetingRequestType"));
        assert!(created.field_deserializers().contains_key("subject"));
    }
}
