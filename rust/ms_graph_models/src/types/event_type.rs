/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to EventType. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::EnumValue;
use crate::store::StoreValue;
use serde_json::Value;
use strum::{Display, EnumIter, EnumString};
#[derive(Copy, Clone, Debug, Display, EnumIter, EnumString, PartialEq, Eq, Hash)]
#[strum(serialize_all = "camelCase")]
pub enum EventType {
    SingleInstance,
    Occurrence,
    Exception,
    SeriesMaster,
}
impl EnumValue for EventType {
    fn parse(label: &str) -> Option<Self> {
        label.parse().ok()
    }
}
impl StoreValue for EventType {
    fn into_store(self) -> Result<Value, Error> {
        Ok(Value::String(self.to_string()))
    }
    fn from_store(value: &Value) -> Option<Self> {
        value.as_str().and_then(Self::parse)
    }
}
