//! Convenient re-exports for common usage.
//!
//! This module provides a single import for the most commonly used types
//! and functions in basecodec.
//!
//! # Example
//!
//! ```
//! use basecodec::prelude::*;
//!
//! let value = Base64::from_text("0123456789");
//! assert_eq!(value.to_string(), "MDEyMzQ1Njc4OQ==");
//! assert_eq!(encode(b"\0", &base58::BITCOIN).unwrap(), "1");
//! ```

pub use crate::{
    // Representations
    Base16,
    Base32,
    Base58,
    Base64,
    // Facade
    BaseCodec,
    // Config
    CodecConfig,
    // Errors
    CodecError,
    DecodeError,
    EncodeError,
    // Providers
    FormatProvider,
    Limits,
    Radix,
    TextFormat,
    // Core encoding/decoding
    decode,
    encode,
    providers::{base16, base32, base58, base64},
};
