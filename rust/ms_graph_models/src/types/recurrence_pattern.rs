/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to RecurrencePattern. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode,
    SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, new_backing_store};
use crate::types::day_of_week::*;
use crate::types::recurrence_pattern_type::*;
use crate::types::week_index::*;
use serde_json::Value;
#[derive(Clone, Debug)]
pub struct RecurrencePattern {
    pub(crate) backing_store: Box<dyn BackingStore>,
}
impl Default for RecurrencePattern {
    fn default() -> Self {
        Self::new()
    }
}
impl RecurrencePattern {
    #[doc = "Instantiates a new `RecurrencePattern` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(new_backing_store())
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        RecurrencePattern { backing_store }
    }
    #[doc = "The day of the month on which the event occurs.\n\n Required if type is absoluteMonthly or absoluteYearly."]
    pub fn day_of_month(&self) -> Result<Option<i32>, Error> {
        self.backing_store().get_value("dayOfMonth")
    }
    pub fn set_day_of_month(&mut self, value: Option<i32>) -> Result<(), Error> {
        self.backing_store_mut().set_value("dayOfMonth", value)
    }
    #[doc = "A collection of the days of the week on which the event occurs.\n\n The possible values are: sunday, monday, tuesday, wednesday, thursday, friday, saturday. If type is relativeMonthly or relativeYearly, and daysOfWeek specifies more than one day, the event falls on the first day that satisfies the pattern. Required if type is weekly, relativeMonthly, or relativeYearly."]
    pub fn days_of_week(&self) -> Result<Option<Vec<DayOfWeek>>, Error> {
        self.backing_store().get_collection("daysOfWeek")
    }
    pub fn set_days_of_week(&mut self, value: Option<Vec<DayOfWeek>>) -> Result<(), Error> {
        self.backing_store_mut().set_collection("daysOfWeek", value)
    }
    #[doc = "The first day of the week.\n\n The possible values are: sunday, monday, tuesday, wednesday, thursday, friday, saturday. Default is sunday. Required if the type is weekly."]
    pub fn first_day_of_week(&self) -> Result<Option<DayOfWeek>, Error> {
        self.backing_store().get_value("firstDayOfWeek")
    }
    pub fn set_first_day_of_week(&mut self, value: Option<DayOfWeek>) -> Result<(), Error> {
        self.backing_store_mut().set_value("firstDayOfWeek", value)
    }
    #[doc = "Specifies on which instance of the allowed days specified in daysOfWeek the event occurs, counted from the first instance in the month.\n\n The possible values are: first, second, third, fourth, last. Default is first. Optional and used if type is relativeMonthly or relativeYearly."]
    pub fn index(&self) -> Result<Option<WeekIndex>, Error> {
        self.backing_store().get_value("index")
    }
    pub fn set_index(&mut self, value: Option<WeekIndex>) -> Result<(), Error> {
        self.backing_store_mut().set_value("index", value)
    }
    #[doc = "The number of units between occurrences, where units can be in days, weeks, months, or years, depending on the type.\n\n Required."]
    pub fn interval(&self) -> Result<Option<i32>, Error> {
        self.backing_store().get_value("interval")
    }
    pub fn set_interval(&mut self, value: Option<i32>) -> Result<(), Error> {
        self.backing_store_mut().set_value("interval", value)
    }
    #[doc = "The month in which the event occurs.\n\n This is a number from 1 to 12."]
    pub fn month(&self) -> Result<Option<i32>, Error> {
        self.backing_store().get_value("month")
    }
    pub fn set_month(&mut self, value: Option<i32>) -> Result<(), Error> {
        self.backing_store_mut().set_value("month", value)
    }
    #[doc = "The recurrence pattern type: daily, weekly, absoluteMonthly, relativeMonthly, absoluteYearly, relativeYearly.\n\n Required."]
    pub fn type_escaped(&self) -> Result<Option<RecurrencePatternType>, Error> {
        self.backing_store().get_value("type")
    }
    pub fn set_type_escaped(&mut self, value: Option<RecurrencePatternType>) -> Result<(), Error> {
        self.backing_store_mut().set_value("type", value)
    }
    pub fn odata_type(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("@odata.type")
    }
    pub fn set_odata_type(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("@odata.type", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        writer.write_i32_value("dayOfMonth", self.day_of_month()?)?;
        writer.write_collection_of_enum_values("daysOfWeek", self.days_of_week()?.as_deref())?;
        writer.write_enum_value("firstDayOfWeek", self.first_day_of_week()?)?;
        writer.write_enum_value("index", self.index()?)?;
        writer.write_i32_value("interval", self.interval()?)?;
        writer.write_i32_value("month", self.month()?)?;
        writer.write_enum_value("type", self.type_escaped()?)?;
        writer.write_string_value("@odata.type", self.odata_type()?.as_deref())?;
        Ok(())
    }
}
impl BackedModel for RecurrencePattern {
    fn backing_store(&self) -> &dyn BackingStore {
        &*self.backing_store
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        &mut *self.backing_store
    }
}
impl Parsable for RecurrencePattern {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = FieldDeserializers::new();
        res.insert("dayOfMonth", |store, n| {
            if let Some(val) = n.i32_value()? {
                store.set_value("dayOfMonth", Some(val))?;
            }
            Ok(())
        });
        res.insert("daysOfWeek", |store, n| {
            if let Some(val) = n.collection_of_enum_values::<DayOfWeek>()? {
                store.set_collection("daysOfWeek", Some(val))?;
            }
            Ok(())
        });
        res.insert("firstDayOfWeek", |store, n| {
            if let Some(val) = n.enum_value::<DayOfWeek>()? {
                store.set_value("firstDayOfWeek", Some(val))?;
            }
            Ok(())
        });
        res.insert("index", |store, n| {
            if let Some(val) = n.enum_value::<WeekIndex>()? {
                store.set_value("index", Some(val))?;
            }
            Ok(())
        });
        res.insert("interval", |store, n| {
            if let Some(val) = n.i32_value()? {
                store.set_value("interval", Some(val))?;
            }
            Ok(())
        });
        res.insert("month", |store, n| {
            if let Some(val) = n.i32_value()? {
                store.set_value("month", Some(val))?;
            }
            Ok(())
        });
        res.insert("type", |store, n| {
            if let Some(val) = n.enum_value::<RecurrencePatternType>()? {
                store.set_value("type", Some(val))?;
            }
            Ok(())
        });
        res.insert("@odata.type", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("@odata.type", Some(val))?;
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
impl StoreValue for RecurrencePattern {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_recurrence_pattern_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_recurrence_pattern_from_discriminator_value(
    _parse_node: &dyn ParseNode,
) -> Result<RecurrencePattern, Error> {
    Ok(RecurrencePattern::new())
}
