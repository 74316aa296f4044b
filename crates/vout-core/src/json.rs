//! JSON encoding of outputs.
//!
//! ```text
//! { "type": 0, "address": { "type": 1, "address": "<hex>" }, "amount": 1000 }
//! ```
//!
//! The `address` member is whatever [`Address::to_json`] produces. It is
//! carried as an opaque [`Value`] and handed to [`Address::from_json`]
//! untouched; this module never looks inside it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::address::Address;
use crate::error::CodecError;
use crate::output::{Output, OutputType, SigLockedSingleOutput};

/// JSON shape of a sig locked single output.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonSigLockedSingleOutput {
    #[serde(rename = "type")]
    kind: u8,
    #[serde(default)]
    address: Value,
    amount: u64,
}

/// Only the type member, for output selection.
#[derive(Debug, Deserialize)]
struct JsonOutputType {
    #[serde(rename = "type")]
    kind: u8,
}

impl SigLockedSingleOutput {
    /// Encode to the output JSON document.
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "type": OutputType::SigLockedSingle.to_u8(),
            "address": self.address.to_json(),
            "amount": self.amount,
        })
    }

    /// Decode from the output JSON document.
    pub fn from_json(value: &Value) -> Result<Self, CodecError> {
        let doc = JsonSigLockedSingleOutput::deserialize(value)?;
        Self::from_json_doc(doc)
    }

    fn from_json_doc(doc: JsonSigLockedSingleOutput) -> Result<Self, CodecError> {
        let expected = OutputType::SigLockedSingle.to_u8();
        if doc.kind != expected {
            return Err(CodecError::TypeMismatch {
                expected,
                actual: doc.kind,
            });
        }

        let address =
            Address::from_json(&doc.address).map_err(|e| CodecError::MalformedAddress(Box::new(e)))?;

        Ok(Self {
            address,
            amount: doc.amount,
        })
    }
}

impl Serialize for SigLockedSingleOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        JsonSigLockedSingleOutput {
            kind: OutputType::SigLockedSingle.to_u8(),
            address: self.address.to_json(),
            amount: self.amount,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SigLockedSingleOutput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let doc = JsonSigLockedSingleOutput::deserialize(deserializer)?;
        Self::from_json_doc(doc).map_err(serde::de::Error::custom)
    }
}

impl Output {
    /// Encode to the JSON document of the concrete output type.
    pub fn to_json(&self) -> Value {
        match self {
            Output::SigLockedSingle(o) => o.to_json(),
        }
    }

    /// Decode any registered output type, selected by its `type` member.
    pub fn from_json(value: &Value) -> Result<Self, CodecError> {
        let JsonOutputType { kind } = JsonOutputType::deserialize(value)?;
        match OutputType::from_u8(kind).ok_or(CodecError::UnknownOutputType(kind))? {
            OutputType::SigLockedSingle => SigLockedSingleOutput::from_json(value).map(Output::from),
        }
    }
}

impl Serialize for Output {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Output::SigLockedSingle(o) => o.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Output {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Output::from_json(&value).map_err(serde::de::Error::custom)
    }
}
