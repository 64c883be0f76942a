/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to Photo. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`."]
use crate::Error;
use crate::serialization::{
    AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode,
    SerializationWriter,
};
use crate::store::{BackingStore, StoreValue, model_from_store, new_backing_store};
use serde_json::Value;
use time::OffsetDateTime;
#[derive(Clone, Debug)]
pub struct Photo {
    pub(crate) backing_store: Box<dyn BackingStore>,
}
impl Default for Photo {
    fn default() -> Self {
        Self::new()
    }
}
impl Photo {
    #[doc = "Instantiates a new `Photo` and sets the default values."]
    pub fn new() -> Self {
        Self::with_backing_store(new_backing_store())
    }
    pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
        Photo { backing_store }
    }
    #[doc = "Camera manufacturer.\n\n Read-only."]
    pub fn camera_make(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("cameraMake")
    }
    pub fn set_camera_make(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("cameraMake", value)
    }
    #[doc = "Camera model.\n\n Read-only."]
    pub fn camera_model(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("cameraModel")
    }
    pub fn set_camera_model(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("cameraModel", value)
    }
    #[doc = "The denominator for the exposure time fraction from the camera.\n\n Read-only."]
    pub fn exposure_denominator(&self) -> Result<Option<f64>, Error> {
        self.backing_store().get_value("exposureDenominator")
    }
    pub fn set_exposure_denominator(&mut self, value: Option<f64>) -> Result<(), Error> {
        self.backing_store_mut().set_value("exposureDenominator", value)
    }
    #[doc = "The numerator for the exposure time fraction from the camera.\n\n Read-only."]
    pub fn exposure_numerator(&self) -> Result<Option<f64>, Error> {
        self.backing_store().get_value("exposureNumerator")
    }
    pub fn set_exposure_numerator(&mut self, value: Option<f64>) -> Result<(), Error> {
        self.backing_store_mut().set_value("exposureNumerator", value)
    }
    #[doc = "The F-stop value from the camera.\n\n Read-only."]
    pub fn f_number(&self) -> Result<Option<f64>, Error> {
        self.backing_store().get_value("fNumber")
    }
    pub fn set_f_number(&mut self, value: Option<f64>) -> Result<(), Error> {
        self.backing_store_mut().set_value("fNumber", value)
    }
    #[doc = "The focal length from the camera.\n\n Read-only."]
    pub fn focal_length(&self) -> Result<Option<f64>, Error> {
        self.backing_store().get_value("focalLength")
    }
    pub fn set_focal_length(&mut self, value: Option<f64>) -> Result<(), Error> {
        self.backing_store_mut().set_value("focalLength", value)
    }
    #[doc = "The ISO value from the camera.\n\n Read-only."]
    pub fn iso(&self) -> Result<Option<i32>, Error> {
        self.backing_store().get_value("iso")
    }
    pub fn set_iso(&mut self, value: Option<i32>) -> Result<(), Error> {
        self.backing_store_mut().set_value("iso", value)
    }
    pub fn odata_type(&self) -> Result<Option<String>, Error> {
        self.backing_store().get_value("@odata.type")
    }
    pub fn set_odata_type(&mut self, value: Option<String>) -> Result<(), Error> {
        self.backing_store_mut().set_value("@odata.type", value)
    }
    #[doc = "The orientation value from the camera.\n\n Writable on OneDrive Personal."]
    pub fn orientation(&self) -> Result<Option<i32>, Error> {
        self.backing_store().get_value("orientation")
    }
    pub fn set_orientation(&mut self, value: Option<i32>) -> Result<(), Error> {
        self.backing_store_mut().set_value("orientation", value)
    }
    #[doc = "Represents the date and time the photo was taken.\n\n Read-only."]
    pub fn taken_date_time(&self) -> Result<Option<OffsetDateTime>, Error> {
        self.backing_store().get_value("takenDateTime")
    }
    pub fn set_taken_date_time(&mut self, value: Option<OffsetDateTime>) -> Result<(), Error> {
        self.backing_store_mut().set_value("takenDateTime", value)
    }
    #[doc = "Writes the properties of this type and its bases, without additional data."]
    pub(crate) fn serialize_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        writer.write_string_value("cameraMake", self.camera_make()?.as_deref())?;
        writer.write_string_value("cameraModel", self.camera_model()?.as_deref())?;
        writer.write_f64_value("exposureDenominator", self.exposure_denominator()?)?;
        writer.write_f64_value("exposureNumerator", self.exposure_numerator()?)?;
        writer.write_f64_value("fNumber", self.f_number()?)?;
        writer.write_f64_value("focalLength", self.focal_length()?)?;
        writer.write_i32_value("iso", self.iso()?)?;
        writer.write_string_value("@odata.type", self.odata_type()?.as_deref())?;
        writer.write_i32_value("orientation", self.orientation()?)?;
        writer.write_date_time_value("takenDateTime", self.taken_date_time()?)?;
        Ok(())
    }
}
impl BackedModel for Photo {
    fn backing_store(&self) -> &dyn BackingStore {
        &*self.backing_store
    }
    fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
        &mut *self.backing_store
    }
}
impl Parsable for Photo {
    fn field_deserializers(&self) -> FieldDeserializers {
        let mut res = FieldDeserializers::new();
        res.insert("cameraMake", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("cameraMake", Some(val))?;
            }
            Ok(())
        });
        res.insert("cameraModel", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("cameraModel", Some(val))?;
            }
            Ok(())
        });
        res.insert("exposureDenominator", |store, n| {
            if let Some(val) = n.f64_value()? {
                store.set_value("exposureDenominator", Some(val))?;
            }
            Ok(())
        });
        res.insert("exposureNumerator", |store, n| {
            if let Some(val) = n.f64_value()? {
                store.set_value("exposureNumerator", Some(val))?;
            }
            Ok(())
        });
        res.insert("fNumber", |store, n| {
            if let Some(val) = n.f64_value()? {
                store.set_value("fNumber", Some(val))?;
            }
            Ok(())
        });
        res.insert("focalLength", |store, n| {
            if let Some(val) = n.f64_value()? {
                store.set_value("focalLength", Some(val))?;
            }
            Ok(())
        });
        res.insert("iso", |store, n| {
            if let Some(val) = n.i32_value()? {
                store.set_value("iso", Some(val))?;
            }
            Ok(())
        });
        res.insert("@odata.type", |store, n| {
            if let Some(val) = n.string_value()? {
                store.set_value("@odata.type", Some(val))?;
            }
            Ok(())
        });
        res.insert("orientation", |store, n| {
            if let Some(val) = n.i32_value()? {
                store.set_value("orientation", Some(val))?;
            }
            Ok(())
        });
        res.insert("takenDateTime", |store, n| {
            if let Some(val) = n.date_time_value()? {
                store.set_value("takenDateTime", Some(val))?;
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
impl StoreValue for Photo {
    fn into_store(self) -> Result<Value, Error> {
        Ok(self.backing_store().to_value())
    }
    fn from_store(value: &Value) -> Option<Self> {
        model_from_store(value, create_photo_from_discriminator_value)
    }
}
#[doc = "Creates a new instance of the appropriate class based on discriminator value."]
pub fn create_photo_from_discriminator_value(_parse_node: &dyn ParseNode) -> Result<Photo, Error> {
    Ok(Photo::new())
}
