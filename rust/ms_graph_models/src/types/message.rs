/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to Message. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
    discriminator_value,
};
use crate::store::{BackingStore, StoreValue, model_from_store, odata_typed_store};
use crate::types::event_message::*;
use crate::types::event_message_request::*;
use crate::types::event_message_response::*;
use crate::types::followup_flag::*;
use crate::types::importance::*;
use crate::types::inference_classification_type::*;
use crate::types::internet_message_header::*;
use crate::types::item_body::*;
use crate::types::outlook_item::*;
use crate::types::recipient::*;
use serde_json::Value;
use time::OffsetDateTime;
#[derive(Clone, Debug)]
pub struct Message {
    pub(crate) outlook_item: OutlookItem,
}
impl Default for Message {
    fn default() -> Self {
        Self::new()
    }
}
impl Message {
    #[doc = "Instantiates a new `Message` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(odata_typed_store("#microsoft.graph.message"))
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        Message {
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
    #[doc = "The Bcc: recipients for the message."]
    pub fn bcc_recipients(&self) -> Result<Option<Vec<RecipientKind>>, Error> {
        self.backing_store().get_collection("bccRecipients")
    }
    pub fn set_bcc_recipients(&mut self, value: Option<Vec<RecipientKind>>) -> Result<(), Error> {
        self.backing_store_mut().set_collection("bccRecipients", value)
    }
    #[doc = "The body of the message.\n\n It can be in HTML or text format. Find out about safe HTML in a message body."]
    pub fn body(&self) -> Result<Option<ItemBody>, Error> {
        self.backing_store().get_value("body")
    }
    pub fn set_body(&mut self, value: Option<ItemBody>) -> Result<(), Error> {
        self.backing_store_mut().set_value("body", value)
    }
    #[doc = "The first 255 characters of the message body.\n\n It is in text format."]
    pub fn body_preview(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("bodyPreview")
    }
    pub fn set_body_preview(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("bodyPreview", value)
    }
    #[doc = "The Cc: recipients for the message."]
    pub fn cc_recipients(&self) -> Result<Option<Vec<RecipientKind>>, Error> {
        self.backing_store().get_collection("ccRecipients")
    }
    pub fn set_cc_recipients(&mut self, value: Option<Vec<RecipientKind>>) -> Result<(), Error> {
        self.backing_store_mut().set_collection("ccRecipients", value)
    }
    #[doc = "The ID of the conversation the email belongs to."]
    pub fn conversation_id(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("conversationId")
    }
    pub fn set_conversation_id(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("conversationId", value)
    }
    #[doc = "Indicates the position of the message within the conversation."]
    pub fn conversation_index(&self) -> Result<Option<Vec<u8>>, Error> {
        self.backing_store().get_value("conversationIndex")
    }
    pub fn set_conversation_index(&mut self, value: Option<Vec<u8>>) -> Result<(), Error> {
        self.backing_store_mut().set_value("conversationIndex", value)
    }
    #[doc = "The flag value that indicates the status, start date, due date, or completion date for the message."]
    pub fn flag(&self) -> Result<Option<FollowupFlag>, Error> {
        self.backing_store().get_value("flag")
    }
    pub fn set_flag(&mut self, value: Option<FollowupFlag>) -> Result<(), Error> {
        self.backing_store_mut().set_value("flag", value)
    }
    #[doc = "The owner of the mailbox from which the message is sent.\n\n In most cases, this value is the same as the sender property, except for sharing or delegation scenarios. The value must correspond to the actual mailbox used."]
    pub fn from(&self) -> Result<Option<RecipientKind>, Error> {
        self.backing_store().get_value("from")
    }
    pub fn set_from(&mut self, value: Option<RecipientKind>) -> Result<(), Error> {
        self.backing_store_mut().set_value("from", value)
    }
    #[doc = "Indicates whether the message has attachments.\n\n This property doesn't include inline attachments, so if a message contains only inline attachments, this property is false."]
    pub fn has_attachments(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("hasAttachments")
    }
    pub fn set_has_attachments(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("hasAttachments", value)
    }
    #[doc = "The importance of the message.\n\n The possible values are: low, normal, and high."]
    pub fn importance(&self) -> Result<Option<Importance>, Error> {
        self.backing_store().get_value("importance")
    }
    pub fn set_importance(&mut self, value: Option<Importance>) -> Result<(), Error> {
        self.backing_store_mut().set_value("importance", value)
    }
    #[doc = "The classification of the message for the user, based on inferred relevance or importance, or on an explicit override.\n\n The possible values are: focused or other."]
    pub fn inference_classification(&self) -> Result<Option<InferenceClassificationType>, Error> {
        self.backing_store().get_value("inferenceClassification")
    }
    pub fn set_inference_classification(
        &mut self,
        value: Option<InferenceClassificationType>,
    ) -> Result<(), Error> {
        self.backing_store_mut().set_value("inferenceClassification", value)
    }
    #[doc = "A collection of message headers defined by RFC5322.\n\n The set includes message headers indicating the network path taken by a message from the sender to the recipient. Returned only on applying a `$select` query option. Read-only."]
    pub fn internet_message_headers(&self) -> Result<Option<Vec<InternetMessageHeader>>, Error> {
        self.backing_store().get_collection("internetMessageHeaders")
    }
    pub fn set_internet_message_headers(
        &mut self,
        value: Option<Vec<InternetMessageHeader>>,
    ) -> Result<(), Error> {
        self.backing_store_mut().set_collection("internetMessageHeaders", value)
    }
    #[doc = "The message ID in the format specified by RFC2822."]
    pub fn internet_message_id(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("internetMessageId")
    }
    pub fn set_internet_message_id(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("internetMessageId", value)
    }
    #[doc = "Indicates whether a read receipt is requested for the message."]
    pub fn is_delivery_receipt_requested(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("isDeliveryReceiptRequested")
    }
    pub fn set_is_delivery_receipt_requested(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("isDeliveryReceiptRequested", value)
    }
    #[doc = "Indicates whether the message is a draft.\n\n A message is a draft if it hasn't been sent yet."]
    pub fn is_draft(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("isDraft")
    }
    pub fn set_is_draft(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("isDraft", value)
    }
    #[doc = "Indicates whether the message has been read."]
    pub fn is_read(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("isRead")
    }
    pub fn set_is_read(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("isRead", value)
    }
    #[doc = "Indicates whether a read receipt is requested for the message."]
    pub fn is_read_receipt_requested(&self) -> Result<Option<bool>, Error> {
        self.backing_store().get_value("isReadReceiptRequested")
    }
    pub fn set_is_read_receipt_requested(&mut self, value: Option<bool>) -> Result<(), Error> {
        self.backing_store_mut().set_value("isReadReceiptRequested", value)
    }
    #[doc = "The unique identifier for the message's parent mailFolder."]
    pub fn parent_folder_id(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("parentFolderId")
    }
    pub fn set_parent_folder_id(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("parentFolderId", value)
    }
    #[doc = "The date and time the message was received.\n\n The date and time information uses ISO 8601 format and is always in UTC time."]
    pub fn received_date_time(&self) -> Result<Option<OffsetDateTime>, Error> {
        self.backing_store().get_value("receivedDateTime")
    }
    pub fn set_received_date_time(&mut self, value: Option<OffsetDateTime>) -> Result<(), Error> {
        self.backing_store_mut().set_value("receivedDateTime", value)
    }
    #[doc = "The email addresses to use when replying."]
    pub fn reply_to(&self) -> Result<Option<Vec<RecipientKind>>, Error> {
        self.backing_store().get_collection("replyTo")
    }
    pub fn set_reply_to(&mut self, value: Option<Vec<RecipientKind>>) -> Result<(), Error> {
        self.backing_store_mut().set_collection("replyTo", value)
    }
    #[doc = "The account that is actually used to generate the message.\n\n In most cases, this value is the same as the from property."]
    pub fn sender(&self) -> Result<Option<RecipientKind>, Error> {
        self.backing_store().get_value("sender")
    }
    pub fn set_sender(&mut self, value: Option<RecipientKind>) -> Result<(), Error> {
        self.backing_store_mut().set_value("sender", value)
    }
    #[doc = "The date and time the message was sent.\n\n The date and time information uses ISO 8601 format and is always in UTC time."]
    pub fn sent_date_time(&self) -> Result<Option<OffsetDateTime>, Error> {
        self.backing_store().get_value("sentDateTime")
    }
    pub fn set_sent_date_time(&mut self, value: Option<OffsetDateTime>) -> Result<(), Error> {
        self.backing_store_mut().set_value("sentDateTime", value)
    }
    #[doc = "The subject of the message."]
    pub fn subject(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("subject")
    }
    pub fn set_subject(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("subject", value)
    }
    #[doc = "The To: recipients for the message."]
    pub fn to_recipients(&self) -> Result<Option<Vec<RecipientKind>>, Error> {
        self.backing_store().get_collection("toRecipients")
    }
    pub fn set_to_recipients(&mut self, value: Option<Vec<RecipientKind>>) -> Result<(), Error> {
        self.backing_store_mut().set_collection("toRecipients", value)
    }
    #[doc = "The part of the body of the message that is unique to the current message.\n\n uniqueBody is not returned by default but can be retrieved for a given message by use of the ?`$select`=uniqueBody query. It can be in HTML or text format."]
    pub fn unique_body(&self) -> Result<Option<ItemBody>, Error> {
        self.backing_store().get_value("uniqueBody")
    }
    pub fn set_unique_body(&mut self, value: Option<ItemBody>) -> Result<(), Error> {
        self.backing_store_mut().set_value("uniqueBody", value)
    }
    #[doc = "The URL to open the message in Outlook on the web.\n\n You can append an ispopout argument to the end of the URL to change how the message is displayed."]
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
        writer.write_collection_of_objects("bccRecipients", self.bcc_recipients()?.as_deref())?;
        writer.write_object("body", self.body()?.as_ref())?;
        writer.write_string_value("bodyPreview", self.body_preview()?.as_deref())?;
        writer.write_collection_of_objects("ccRecipients", self.cc_recipients()?.as_deref())?;
        writer.write_string_value("conversationId", self.conversation_id()?.as_deref())?;
        writer.write_byte_array_value("conversationIndex", self.conversation_index()?.as_deref())?;
        writer.write_object("flag", self.flag()?.as_ref())?;
        writer.write_object("from", self.from()?.as_ref())?;
        writer.write_bool_value("hasAttachments", self.has_attachments()?)?;
        writer.write_enum_value("importance", self.importance()?)?;
        writer.write_enum_value("inferenceClassification", self.inference_classification()?)?;
        writer.write_collection_of_objects(
            "internetMessageHeaders",
            self.internet_message_headers()?.as_deref(),
        )?;
        writer.write_string_value("internetMessageId", self.internet_message_id()?.as_deref())?;
        writer.write_bool_value(
            "isDeliveryReceiptRequested",
            self.is_delivery_receipt_requested()?,
        )?;
        writer.write_bool_value("isDraft", self.is_draft()?)?;
        writer.write_bool_value("isRead", self.is_read()?)?;
        writer.write_bool_value("isReadReceiptRequested", self.is_read_receipt_requested()?)?;
        writer.write_string_value("parentFolderId", self.parent_folder_id()?.as_deref())?;
        writer.write_date_time_value("receivedDateTime", self.received_date_time()?)?;
        writer.write_collection_of_objects("replyTo", self.reply_to()?.as_deref())?;
        writer.write_object("sender", self.sender()?.as_ref())?;
        writer.write_date_time_value("sentDateTime", self.sent_date_time()?)?;
        writer.write_string_value("subject", self.subject()?.as_deref())?;
        writer.write_collection_of_objects("toRecipients", self.to_recipients()?.as_deref())?;
        writer.write_object("uniqueBody", self.unique_body()?.as_ref())?;
        writer.write_string_value("webLink", self.web_link()?.as_deref())?;
        Ok(())
    }
}
impl BackedModel for Message {
    fn backing_store(&self) -> &dyn BackingStore {
        self.outlook_item.backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.outlook_item.backing_store_mut()
    }
}
impl Parsable for Message {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = self.outlook_item.field_deserializers();
        res.insert("bccRecipients", |store, n| {
            if let Some(val) =
                n.collection_of_object_values(create_recipient_from_discriminator_value)?
            {
                store.set_collection("bccRecipients", Some(val))?;
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
        res.insert("ccRecipients", |store, n| {
            if let Some(val) =
                n.collection_of_object_values(create_recipient_from_discriminator_value)?
            {
                store.set_collection("ccRecipients", Some(val))?;
            }
            Ok(())
        });
        res.insert("conversationId", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("conversationId", Some(val))?;
            }
            Ok(())
        });
        res.insert("conversationIndex", |store, n| {
            if let Some(val) = n.byte_array_value()? {
                store.set_value("conversationIndex", Some(val))?;
            }
            Ok(())
        });
        res.insert("flag", |store, n| {
            if let Some(val) = n.object_value(create_followup_flag_from_discriminator_value)? {
                store.set_value("flag", Some(val))?;
            }
            Ok(())
        });
        res.insert("from", |store, n| {
            if let Some(val) = n.object_value(create_recipient_from_discriminator_value)? {
                store.set_value("from", Some(val))?;
            }
            Ok(())
        });
        res.insert("hasAttachments", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("hasAttachments", Some(val))?;
            }
            Ok(())
        });
        res.insert("importance", |store, n| {
            if let Some(val) = n.enum_value::<Importance>()? {
                store.set_value("importance", Some(val))?;
            }
            Ok(())
        });
        res.insert("inferenceClassification", |store, n| {
            if let Some(val) = n.enum_value::<InferenceClassificationType>()? {
                store.set_value("inferenceClassification", Some(val))?;
            }
            Ok(())
        });
        res.insert("internetMessageHeaders", |store, n| {
            if let Some(val) =
                n.collection_of_object_values(create_internet_message_header_from_discriminator_value)?
            {
                store.set_collection("internetMessageHeaders", Some(val))?;
            }
            Ok(())
        });
        res.insert("internetMessageId", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("internetMessageId", Some(val))?;
            }
            Ok(())
        });
        res.insert("isDeliveryReceiptRequested", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("isDeliveryReceiptRequested", Some(val))?;
            }
            Ok(())
        });
        res.insert("isDraft", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("isDraft", Some(val))?;
            }
            Ok(())
        });
        res.insert("isRead", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("isRead", Some(val))?;
            }
            Ok(())
        });
        res.insert("isReadReceiptRequested", |store, n| {
            if let Some(val) = n.bool_value()? {
                store.set_value("isReadReceiptRequested", Some(val))?;
            }
            Ok(())
        });
        res.insert("parentFolderId", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("parentFolderId", Some(val))?;
            }
            Ok(())
        });
        res.insert("receivedDateTime", |store, n| {
            if let Some(val) = n.date_time_value()? {
                store.set_value("receivedDateTime", Some(val))?;
            }
            Ok(())
        });
        res.insert("replyTo", |store, n| {
            if let Some(val) =
                n.collection_of_object_values(create_recipient_from_discriminator_value)?
            {
                store.set_collection("replyTo", Some(val))?;
            }
            Ok(())
        });
        res.insert("sender", |store, n| {
            if let Some(val) = n.object_value(create_recipient_from_discriminator_value)? {
                store.set_value("sender", Some(val))?;
            }
            Ok(())
        });
        res.insert("sentDateTime", |store, n| {
            if let Some(val) = n.date_time_value()? {
                store.set_value("sentDateTime", Some(val))?;
            }
            Ok(())
        });
        res.insert("subject", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("subject", Some(val))?;
            }
            Ok(())
        });
        res.insert("toRecipients", |store, n| {
            if let Some(val) =
                n.collection_of_object_values(create_recipient_from_discriminator_value)?
            {
                store.set_collection("toRecipients", Some(val))?;
            }
            Ok(())
        });
        res.insert("uniqueBody", |store, n| {
            if let Some(val) = n.object_value(create_item_body_from_discriminator_value)? {
                store.set_value("uniqueBody", Some(val))?;
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
impl StoreValue for Message {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, |_| Ok(Self::new()))
    }
}
#[doc = "`Message` or one of the types derived from it, as selected by `@odata.type`."]
#[derive(Clone, Debug)]
pub enum MessageKind {
    Message(Message),
    EventMessage(EventMessage),
    EventMessageRequest(EventMessageRequest),
    EventMessageResponse(EventMessageResponse),
}
impl MessageKind {
    #[doc = "Accessor to the `Message` properties every variant shares."]
    pub fn message(&self) -> &Message {
        match self {
            Self::Message(v) => v,
            Self::EventMessage(v) => v.message(),
            Self::EventMessageRequest(v) => v.event_message().message(),
            Self::EventMessageResponse(v) => v.event_message().message(),
        }
    }
    #[doc = "Mutable accessor to the `Message` properties every variant shares."]
    pub fn message_mut(&mut self) -> &mut Message {
        match self {
            Self::Message(v) => v,
            Self::EventMessage(v) => v.message_mut(),
            Self::EventMessageRequest(v) => v.event_message_mut().message_mut(),
            Self::EventMessageResponse(v) => v.event_message_mut().message_mut(),
        }
    }
}
impl From<Message> for MessageKind {
    fn from(value: Message) -> Self {
        Self::Message(value)
    }
}
impl From<EventMessage> for MessageKind {
    fn from(value: EventMessage) -> Self {
        Self::EventMessage(value)
    }
}
impl From<EventMessageRequest> for MessageKind {
    fn from(value: EventMessageRequest) -> Self {
        Self::EventMessageRequest(value)
    }
}
impl From<EventMessageResponse> for MessageKind {
    fn from(value: EventMessageResponse) -> Self {
        Self::EventMessageResponse(value)
    }
}
impl BackedModel for MessageKind {
    fn backing_store(&self) -> &dyn BackingStore {
        self.message().backing_store()
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        self.message_mut().backing_store_mut()
    }
}
impl Parsable for MessageKind {
    fn field_deserializers(&self) -> FieldDeserializers {
        match self {
            Self::Message(v) => v.field_deserializers(),
            Self::EventMessage(v) => v.field_deserializers(),
            Self::EventMessageRequest(v) => v.field_deserializers(),
            Self::EventMessageResponse(v) => v.field_deserializers(),
        }
    }
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        match self {
            Self::Message(v) => v.serialize(writer),
            Self::EventMessage(v) => v.serialize(writer),
            Self::EventMessageRequest(v) => v.serialize(writer),
            Self::EventMessageResponse(v) => v.serialize(writer),
        }
    }
}
impl StoreValue for MessageKind {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_message_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_message_from_discriminator_value(
    parse_node: &dyn ParseNode,
) -> Result<MessageKind, Error> {
    Ok(match discriminator_value(parse_node)?.as_deref() {
        Some("#microsoft.graph.eventMessage") => MessageKind::EventMessage(EventMessage::new()),
        Some("#microsoft.graph.eventMessageRequest") => {
            MessageKind::EventMessageRequest(EventMessageRequest::new())
        }
        Some("#microsoft.graph.eventMessageResponse") => {
            MessageKind::EventMessageResponse(EventMessageResponse::new())
        }
        _ => MessageKind::Message(Message::new()),
    })
}
