//! The output codec: single outputs and framed output sequences.
//!
//! A framed sequence is the form outputs take inside a transaction:
//!
//! ```text
//! u16 LE count || output_0 || ... || output_{count-1}
//! ```
//!
//! In strict mode every decoded or encoded sequence is run through a fresh
//! [`ValidatorChain::standard`].

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use vout_core::codec::read_u16_le;
use vout_core::constants::{MAX_OUTPUTS_COUNT, MIN_OUTPUTS_COUNT, UINT16_SIZE};
use vout_core::{CodecMode, Output, ValidatorChain};

use crate::error::{Result, VoutError};

/// Configuration for the output codec.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Whether to enforce invariants while encoding and decoding.
    pub mode: CodecMode,
    /// Fewest outputs a sequence may hold.
    pub min_outputs: usize,
    /// Most outputs a sequence may hold.
    pub max_outputs: usize,
    /// Whether bytes after the last output of a sequence are an error.
    pub reject_trailing_data: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            mode: CodecMode::Strict,
            min_outputs: MIN_OUTPUTS_COUNT,
            max_outputs: MAX_OUTPUTS_COUNT,
            reject_trailing_data: true,
        }
    }
}

impl CodecConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the bounds are consistent and fit the wire count.
    pub fn validate(&self) -> Result<()> {
        if self.min_outputs > self.max_outputs {
            return Err(VoutError::InvalidConfig(format!(
                "min_outputs {} exceeds max_outputs {}",
                self.min_outputs, self.max_outputs
            )));
        }
        if self.max_outputs > u16::MAX as usize {
            return Err(VoutError::InvalidConfig(format!(
                "max_outputs {} does not fit a u16 count",
                self.max_outputs
            )));
        }
        Ok(())
    }
}

/// Encodes and decodes outputs according to a [`CodecConfig`].
///
/// Holds no state besides its configuration, so one codec can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct OutputCodec {
    config: CodecConfig,
}

impl OutputCodec {
    /// Create a codec, rejecting inconsistent configuration.
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The codec's configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Single outputs
    // ─────────────────────────────────────────────────────────────────────────

    /// Encode one output.
    pub fn encode_output(&self, output: &Output) -> Result<Vec<u8>> {
        Ok(output.encode(self.config.mode)?)
    }

    /// Decode one output from the front of `data`, returning it and the
    /// number of bytes consumed.
    pub fn decode_output(&self, data: &[u8]) -> Result<(Output, usize)> {
        Ok(Output::decode(data, self.config.mode)?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Framed sequences
    // ─────────────────────────────────────────────────────────────────────────

    /// Encode a sequence of outputs with its count prefix.
    pub fn encode_outputs(&self, outputs: &[Output]) -> Result<Vec<u8>> {
        let result = self.encode_outputs_inner(outputs);
        match &result {
            Ok(bytes) => debug!(count = outputs.len(), len = bytes.len(), "outputs encoded"),
            Err(e) => warn!(count = outputs.len(), error = %e, "refused to encode outputs"),
        }
        result
    }

    fn encode_outputs_inner(&self, outputs: &[Output]) -> Result<Vec<u8>> {
        let count = self.check_count(outputs.len())?;
        if self.config.mode.validates() {
            ValidatorChain::standard().validate(outputs)?;
        }

        let mut buf = Vec::with_capacity(UINT16_SIZE + outputs.len() * 64);
        buf.extend_from_slice(&count.to_le_bytes());
        for output in outputs {
            buf.extend_from_slice(&output.encode(self.config.mode)?);
        }
        Ok(buf)
    }

    /// Decode a count-prefixed sequence of outputs.
    ///
    /// Returns the outputs and the number of bytes consumed.
    pub fn decode_outputs(&self, data: &[u8]) -> Result<(Vec<Output>, usize)> {
        let result = self.decode_outputs_inner(data);
        match &result {
            Ok((outputs, consumed)) => {
                debug!(count = outputs.len(), consumed = *consumed, "outputs decoded")
            }
            Err(e) => warn!(len = data.len(), error = %e, "rejected output sequence"),
        }
        result
    }

    fn decode_outputs_inner(&self, data: &[u8]) -> Result<(Vec<Output>, usize)> {
        let mut buf = data;
        let count = read_u16_le(&mut buf, "outputs count")? as usize;
        self.check_count(count)?;

        let mut outputs = Vec::with_capacity(count);
        let mut consumed = UINT16_SIZE;
        for _ in 0..count {
            let (output, read) = Output::decode(&data[consumed..], self.config.mode)?;
            consumed += read;
            outputs.push(output);
        }

        if self.config.mode.validates() {
            ValidatorChain::standard().validate(&outputs)?;
        }

        if self.config.reject_trailing_data && consumed != data.len() {
            return Err(VoutError::TrailingData(data.len() - consumed));
        }

        Ok((outputs, consumed))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // JSON
    // ─────────────────────────────────────────────────────────────────────────

    /// Encode a sequence of outputs as a JSON array.
    pub fn encode_outputs_json(&self, outputs: &[Output]) -> Result<String> {
        self.check_count(outputs.len())?;
        if self.config.mode.validates() {
            ValidatorChain::standard().validate(outputs)?;
        }
        let array = Value::Array(outputs.iter().map(Output::to_json).collect());
        Ok(serde_json::to_string(&array)?)
    }

    /// Decode a JSON array of outputs.
    pub fn decode_outputs_json(&self, text: &str) -> Result<Vec<Output>> {
        let result = self.decode_outputs_json_inner(text);
        if let Err(e) = &result {
            warn!(error = %e, "rejected JSON outputs");
        }
        result
    }

    fn decode_outputs_json_inner(&self, text: &str) -> Result<Vec<Output>> {
        let documents: Vec<Value> = serde_json::from_str(text)?;
        self.check_count(documents.len())?;

        let outputs = documents
            .iter()
            .map(Output::from_json)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        if self.config.mode.validates() {
            ValidatorChain::standard().validate(&outputs)?;
        }
        debug!(count = outputs.len(), "JSON outputs decoded");
        Ok(outputs)
    }

    /// Check a count against the configured bounds.
    fn check_count(&self, count: usize) -> Result<u16> {
        let invalid = || VoutError::InvalidCount {
            count,
            min: self.config.min_outputs,
            max: self.config.max_outputs,
        };
        if count < self.config.min_outputs || count > self.config.max_outputs {
            return Err(invalid());
        }
        u16::try_from(count).map_err(|_| invalid())
    }
}
