use crate::bundle::{OscBundle, OscPacket};
use crate::message::OscMessage;
use crate::tags;
use crate::types::{Blob, OscArg, Timetag};
use data_encoding::BASE64;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

impl Serialize for Timetag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Timetag", 2)?;
        state.serialize_field("seconds", &self.seconds)?;
        state.serialize_field("fraction", &self.fraction)?;
        state.end()
    }
}

impl Serialize for Blob {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&BASE64.encode(self.as_bytes()))
    }
}

impl Serialize for OscArg {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let tag = tags::infer(self);

        // predict number of fields in the struct
        let num_fields = match self {
            OscArg::True | OscArg::False | OscArg::Nil | OscArg::Infinitum => 1,
            _ => 2,
        };

        let mut state = serializer.serialize_struct("OscArg", num_fields)?;
        state.serialize_field("type", &tag)?;
        match self {
            OscArg::Int32(value) => state.serialize_field("value", value)?,
            OscArg::Float32(value) => state.serialize_field("value", value)?,
            OscArg::Float64(value) => state.serialize_field("value", value)?,
            OscArg::Str(value) => state.serialize_field("value", value)?,
            OscArg::Timetag(value) => state.serialize_field("value", value)?,
            OscArg::Blob(value) => state.serialize_field("value", value)?,
            OscArg::Array(elements) => state.serialize_field("value", elements)?,
            OscArg::True | OscArg::False | OscArg::Nil | OscArg::Infinitum => {}
        }
        state.end()
    }
}

impl Serialize for OscMessage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("OscMessage", 3)?;
        state.serialize_field("address", self.address())?;
        state.serialize_field("type_tags", self.type_tags())?;
        state.serialize_field("args", self.args())?;
        state.end()
    }
}

impl Serialize for OscBundle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("OscBundle", 2)?;
        state.serialize_field("timetag", &self.timetag())?;
        state.serialize_field("children", self.packets())?;
        state.end()
    }
}

impl Serialize for OscPacket {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OscPacket::Message(message) => message.serialize(serializer),
            OscPacket::Bundle(bundle) => bundle.serialize(serializer),
        }
    }
}
