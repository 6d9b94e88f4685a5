//! Base16, Base32, Base58 and Base64 codecs driven by pluggable format
//! providers.
//!
//! A [`FormatProvider`] bundles an alphabet with a padding policy. The
//! power-of-two bases are packed bit group by bit group; Base58 goes through
//! arbitrary-precision arithmetic so leading zero bytes survive.
//!
//! ```
//! use basecodec::{decode, encode, providers::base32};
//!
//! let text = encode(b"0123456789", &base32::RFC4648).unwrap();
//! assert_eq!(text, "GAYTEMZUGU3DOOBZ");
//! assert_eq!(decode(&text, &base32::RFC4648).unwrap(), b"0123456789");
//! ```

mod core;
mod encoders;
mod facade;
pub mod prelude;
mod repr;

pub use crate::core::config::{
    CodecConfig, ConfigError, DefaultProviders, LimitsConfig, ProviderConfig,
    find_closest_provider,
};
pub use crate::core::provider::{FormatProvider, PAD, Radix};
pub use crate::core::symbols::SymbolTable;
pub use crate::encoders::{
    CodecError, DECODE_FAILED_MESSAGE, DecodeError, ENCODE_FAILED_MESSAGE, EncodeError, Limits,
};
pub use crate::facade::BaseCodec;
pub use crate::repr::{
    B16, B32, B58, B64, Base16, Base32, Base58, Base64, Encoding, Representation, TextFormat,
};

/// Built-in providers, grouped per base.
pub mod providers {
    pub use crate::core::provider::{base16, base32, base58, base64};
}

/// Lower-level codec functions taking explicit [`Limits`].
pub mod codecs {
    pub use crate::encoders::chunked::{decode_chunked, decoded_len, encode_chunked, encoded_len};
    pub use crate::encoders::radix::{
        decode as decode_radix, decoded_len_bound, encode as encode_radix, encoded_len_bound,
    };
}

/// Encodes `data` with `provider`, dispatching on the provider's radix.
pub fn encode(data: &[u8], provider: &FormatProvider) -> Result<String, EncodeError> {
    BaseCodec::default().get_string(data, provider)
}

/// Decodes `text` with `provider`, dispatching on the provider's radix.
pub fn decode(text: &str, provider: &FormatProvider) -> Result<Vec<u8>, DecodeError> {
    BaseCodec::default().get_bytes(text, provider)
}

#[cfg(test)]
mod tests;
