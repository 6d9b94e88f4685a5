//! Base-agnostic entry points.
//!
//! [`BaseCodec`] picks the codec from the provider's radix and collapses
//! every failure into one error per direction. The `try_*` variants drop the
//! error entirely; the `*_detailed` variants keep the [`CodecError`] kind.

use crate::core::provider::{FormatProvider, Radix};
use crate::encoders::{CodecError, DecodeError, EncodeError, Limits, chunked, radix};

/// Dispatching codec carrying the output-size limits it enforces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseCodec {
    limits: Limits,
}

impl BaseCodec {
    pub const fn new(limits: Limits) -> Self {
        BaseCodec { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Encodes `data`, reporting the precise failure kind.
    pub fn encode_detailed(
        &self,
        data: &[u8],
        provider: &FormatProvider,
    ) -> Result<String, CodecError> {
        match provider.radix() {
            Radix::Base58 => radix::encode(data, provider, &self.limits),
            Radix::Base16 | Radix::Base32 | Radix::Base64 => {
                chunked::encode_chunked(data, provider, &self.limits)
            }
        }
    }

    /// Decodes `text`, reporting the precise failure kind.
    pub fn decode_detailed(
        &self,
        text: &str,
        provider: &FormatProvider,
    ) -> Result<Vec<u8>, CodecError> {
        match provider.radix() {
            Radix::Base58 => radix::decode(text, provider, &self.limits),
            Radix::Base16 | Radix::Base32 | Radix::Base64 => {
                chunked::decode_chunked(text, provider, &self.limits)
            }
        }
    }

    pub fn get_string(
        &self,
        data: &[u8],
        provider: &FormatProvider,
    ) -> Result<String, EncodeError> {
        self.encode_detailed(data, provider).map_err(|kind| {
            tracing::debug!(
                %provider,
                kind = kind.kind_name(),
                error = %kind,
                input_len = data.len(),
                "encode failed"
            );
            EncodeError::from(kind)
        })
    }

    pub fn get_bytes(
        &self,
        text: &str,
        provider: &FormatProvider,
    ) -> Result<Vec<u8>, DecodeError> {
        self.decode_detailed(text, provider).map_err(|kind| {
            tracing::debug!(
                %provider,
                kind = kind.kind_name(),
                error = %kind,
                input_len = text.len(),
                "decode failed"
            );
            DecodeError::from(kind)
        })
    }

    pub fn try_get_string(&self, data: &[u8], provider: &FormatProvider) -> Option<String> {
        self.get_string(data, provider).ok()
    }

    pub fn try_get_bytes(&self, text: &str, provider: &FormatProvider) -> Option<Vec<u8>> {
        self.get_bytes(text, provider).ok()
    }
}
