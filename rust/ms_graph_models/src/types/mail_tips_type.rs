/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to MailTipsType. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::EnumValue;
use crate::store::StoreValue;
use bitflags::bitflags;
use serde_json::Value;
use std::fmt;
bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct MailTipsType: u32 {
        const AUTOMATIC_REPLIES = 1;
        const MAILBOX_FULL_STATUS = 2;
        const CUSTOM_MAIL_TIP = 4;
        const EXTERNAL_MEMBER_COUNT = 8;
        const TOTAL_MEMBER_COUNT = 16;
        const MAX_MESSAGE_SIZE = 32;
        const DELIVERY_RESTRICTION = 64;
        const MODERATION_STATUS = 128;
        const RECIPIENT_SCOPE = 256;
        const RECIPIENT_SUGGESTIONS = 512;
    }
}
const LABELS: [(MailTipsType, &str); 10] = [
    (MailTipsType::AUTOMATIC_REPLIES, "automaticReplies"),
    (MailTipsType::MAILBOX_FULL_STATUS, "mailboxFullStatus"),
    (MailTipsType::CUSTOM_MAIL_TIP, "customMailTip"),
    (MailTipsType::EXTERNAL_MEMBER_COUNT, "externalMemberCount"),
    (MailTipsType::TOTAL_MEMBER_COUNT, "totalMemberCount"),
    (MailTipsType::MAX_MESSAGE_SIZE, "maxMessageSize"),
    (MailTipsType::DELIVERY_RESTRICTION, "deliveryRestriction"),
    (MailTipsType::MODERATION_STATUS, "moderationStatus"),
    (MailTipsType::RECIPIENT_SCOPE, "recipientScope"),
    (MailTipsType::RECIPIENT_SUGGESTIONS, "recipientSuggestions"),
];
impl fmt::Display for MailTipsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = LABELS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, label)| *label)
            .collect::<Vec<_>>();
        f.write_str(&labels.join(","))
    }
}
impl EnumValue for MailTipsType {
    fn parse(label: &str) -> Option<Self> {
        label.split(',').try_fold(Self::empty(), |flags, part| {
            LABELS
                .iter()
                .find(|(_, known)| *known == part)
                .map(|(flag, _)| flags | *flag)
        })
    }
}
impl StoreValue for MailTipsType {
    fn into_store(self) -> Result<Value, Error> {
        Ok(Value::String(self.to_string()))
    }
    fn from_store(value: &Value) -> Option<Self> {
        value.as_str().and_then(Self::parse)
    }
}
