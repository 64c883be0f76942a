/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

pub mod android_managed_app_registration;
pub mod android_mobile_app_identifier;
pub mod attendee;
pub mod attendee_base;
pub mod attendee_type;
pub mod body_type;
pub mod calendar;
pub mod calendar_color;
pub mod date_time_time_zone;
pub mod day_of_week;
pub mod email_address;
pub mod entity;
pub mod event;
pub mod event_message;
pub mod event_message_request;
pub mod event_message_response;
pub mod event_type;
pub mod followup_flag;
pub mod followup_flag_status;
pub mod free_busy_status;
pub mod importance;
pub mod inference_classification_type;
pub mod internet_message_header;
pub mod ios_managed_app_registration;
pub mod ios_mobile_app_identifier;
pub mod ios_vpp_e_book;
pub mod item_body;
pub mod location;
pub mod location_type;
pub mod mail_tips_type;
pub mod managed_app_flagged_reason;
pub mod managed_app_registration;
pub mod managed_e_book;
pub mod meeting_message_type;
pub mod meeting_request_type;
pub mod message;
pub mod mime_content;
pub mod mobile_app_identifier;
pub mod online_meeting_info;
pub mod online_meeting_provider_type;
pub mod outlook_item;
pub mod patterned_recurrence;
pub mod phone;
pub mod phone_type;
pub mod photo;
pub mod quota;
pub mod recipient;
pub mod recurrence_pattern;
pub mod recurrence_pattern_type;
pub mod recurrence_range;
pub mod recurrence_range_type;
pub mod response_status;
pub mod response_type;
pub mod sensitivity;
pub mod storage_plan_information;
pub mod time_slot;
pub mod week_index;
