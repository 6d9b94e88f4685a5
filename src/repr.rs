//! Immutable byte holders that know which base they render to.
//!
//! [`Base16`], [`Base32`], [`Base58`] and [`Base64`] all wrap the same kind
//! of owned byte buffer; only their default text form differs. Converting
//! between them moves no information, so any chain of conversions ends with
//! the bytes it started with.
//!
//! ```
//! use basecodec::{Base16, Base58};
//!
//! let hex = Base16::from_text("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
//! let b58: Base58 = hex.to_base58();
//! assert_eq!(b58.to_string(), "2zuFXTJSTRK6ESktqhM2QDBkCnH1U46CnxaD");
//! assert_eq!(b58.to_base32().to_base64().to_plain_text_string(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use crate::core::provider::{FormatProvider, Radix};
use crate::encoders::{CodecError, DecodeError, EncodeError};
use crate::facade::BaseCodec;

mod sealed {
    pub trait Sealed {}
}

/// Marker for the base a [`Representation`] renders to.
pub trait Encoding: sealed::Sealed {
    const RADIX: Radix;
    const NAME: &'static str;
}

macro_rules! encoding_kind {
    ($(#[$doc:meta])* $kind:ident, $radix:expr, $name:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $kind {}

        impl sealed::Sealed for $kind {}

        impl Encoding for $kind {
            const RADIX: Radix = $radix;
            const NAME: &'static str = $name;
        }
    };
}

encoding_kind!(
    /// Base16 marker.
    B16, Radix::Base16, "Base16"
);
encoding_kind!(
    /// Base32 marker.
    B32, Radix::Base32, "Base32"
);
encoding_kind!(
    /// Base58 marker.
    B58, Radix::Base58, "Base58"
);
encoding_kind!(
    /// Base64 marker.
    B64, Radix::Base64, "Base64"
);

pub type Base16 = Representation<B16>;
pub type Base32 = Representation<B32>;
pub type Base58 = Representation<B58>;
pub type Base64 = Representation<B64>;

/// How padding is rendered by [`Representation::to_string_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    /// Whatever the provider does.
    #[default]
    Default,
    Padded,
    Unpadded,
}

impl TextFormat {
    /// Provider adjusted to this format.
    pub fn apply<'a>(self, provider: &'a FormatProvider) -> Cow<'a, FormatProvider> {
        match self {
            TextFormat::Default => Cow::Borrowed(provider),
            TextFormat::Padded if provider.is_padded() => Cow::Borrowed(provider),
            TextFormat::Unpadded if !provider.is_padded() => Cow::Borrowed(provider),
            TextFormat::Padded => Cow::Owned(provider.padded()),
            TextFormat::Unpadded => Cow::Owned(provider.unpadded()),
        }
    }
}

impl FromStr for TextFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" | "d" | "default" => Ok(TextFormat::Default),
            "p" | "padded" => Ok(TextFormat::Padded),
            "u" | "unpadded" => Ok(TextFormat::Unpadded),
            _ => Err(format!("unknown text format: {}", s)),
        }
    }
}

/// Owned bytes rendered in the base chosen by `K`.
///
/// Equality and hashing only look at the bytes. The default value is the
/// empty buffer.
pub struct Representation<K: Encoding> {
    bytes: Vec<u8>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: Encoding> Representation<K> {
    /// Takes ownership of `bytes`.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Representation {
            bytes,
            _kind: PhantomData,
        }
    }

    /// Copies `bytes`; later changes to the caller's buffer are not seen.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes.to_vec())
    }

    /// Wraps the UTF-8 bytes of plain `text` (nothing is decoded).
    pub fn from_text(text: &str) -> Self {
        Self::from_slice(text.as_bytes())
    }

    /// Decodes `text` with the default provider of this base.
    pub fn parse(text: &str) -> Result<Self, DecodeError> {
        Self::parse_with(text, K::RADIX.default_provider())
    }

    /// Decodes `text` with `provider`, which must describe this base.
    pub fn parse_with(text: &str, provider: &FormatProvider) -> Result<Self, DecodeError> {
        let provider = provider
            .get_format(K::RADIX)
            .ok_or_else(|| DecodeError::from(mismatched_provider::<K>(provider)))?;
        BaseCodec::default()
            .get_bytes(text, provider)
            .map(Self::from_bytes)
    }

    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    pub fn try_parse_with(text: &str, provider: &FormatProvider) -> Option<Self> {
        Self::parse_with(text, provider).ok()
    }

    /// Renders the bytes with `provider`, adjusted by `format`.
    pub fn to_string_with(
        &self,
        format: TextFormat,
        provider: &FormatProvider,
    ) -> Result<String, EncodeError> {
        let provider = provider
            .get_format(K::RADIX)
            .ok_or_else(|| EncodeError::from(mismatched_provider::<K>(provider)))?;
        BaseCodec::default().get_string(&self.bytes, &format.apply(provider))
    }

    pub fn try_to_string_with(
        &self,
        format: TextFormat,
        provider: &FormatProvider,
    ) -> Option<String> {
        self.to_string_with(format, provider).ok()
    }

    /// Fresh copy of the wrapped bytes.
    pub fn to_byte_array(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Same bytes, rendered in another base.
    pub fn convert<T: Encoding>(&self) -> Representation<T> {
        Representation::from_slice(&self.bytes)
    }

    pub fn to_base16(&self) -> Base16 {
        self.convert()
    }

    pub fn to_base32(&self) -> Base32 {
        self.convert()
    }

    pub fn to_base58(&self) -> Base58 {
        self.convert()
    }

    pub fn to_base64(&self) -> Base64 {
        self.convert()
    }

    /// The bytes read as UTF-8, with invalid sequences replaced.
    pub fn to_plain_text_string(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

fn mismatched_provider<K: Encoding>(provider: &FormatProvider) -> CodecError {
    CodecError::invalid_provider(format!(
        "{} cannot format {} values",
        provider,
        K::NAME
    ))
}

impl<K: Encoding> Clone for Representation<K> {
    fn clone(&self) -> Self {
        Self::from_slice(&self.bytes)
    }
}

impl<K: Encoding> Default for Representation<K> {
    fn default() -> Self {
        Self::from_bytes(Vec::new())
    }
}

impl<K: Encoding> PartialEq for Representation<K> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<K: Encoding> Eq for Representation<K> {}

impl<K: Encoding> Hash for Representation<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl<K: Encoding> fmt::Debug for Representation<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(K::NAME).field(&self.bytes).finish()
    }
}

impl<K: Encoding> fmt::Display for Representation<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .to_string_with(TextFormat::Default, K::RADIX.default_provider())
            .map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

/// Parses encoded text; see [`Representation::parse`].
impl<K: Encoding> FromStr for Representation<K> {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<K: Encoding> From<Vec<u8>> for Representation<K> {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<K: Encoding> From<&[u8]> for Representation<K> {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

/// Wraps plain text; use [`str::parse`] for already-encoded text.
impl<K: Encoding> From<&str> for Representation<K> {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl<K: Encoding> AsRef<[u8]> for Representation<K> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
