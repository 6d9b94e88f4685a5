//! Format providers: the named alphabet and padding descriptors every codec
//! consumes.
//!
//! Built-in providers are process-wide statics grouped per radix in
//! [`base16`], [`base32`], [`base58`] and [`base64`]. Custom providers can be
//! assembled with [`FormatProvider::custom`]; their alphabet is checked the
//! first time a codec uses them.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::core::symbols::SymbolTable;
use crate::encoders::CodecError;

/// Character appended by padded providers.
pub const PAD: char = '=';

/// Numeric base of an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    Base16,
    Base32,
    Base58,
    Base64,
}

impl Radix {
    pub const ALL: [Radix; 4] = [Radix::Base16, Radix::Base32, Radix::Base58, Radix::Base64];

    /// Number of symbols an alphabet of this radix must contain.
    pub fn value(self) -> usize {
        match self {
            Radix::Base16 => 16,
            Radix::Base32 => 32,
            Radix::Base58 => 58,
            Radix::Base64 => 64,
        }
    }

    /// Bits carried by one symbol, or `None` for radixes that are not a
    /// power of two.
    pub fn bits_per_symbol(self) -> Option<usize> {
        match self {
            Radix::Base16 => Some(4),
            Radix::Base32 => Some(5),
            Radix::Base64 => Some(6),
            Radix::Base58 => None,
        }
    }

    /// Provider used when the caller does not name one.
    pub fn default_provider(self) -> &'static FormatProvider {
        match self {
            Radix::Base16 => &base16::UPPERCASE,
            Radix::Base32 => &base32::RFC4648,
            Radix::Base58 => &base58::BITCOIN,
            Radix::Base64 => &base64::RFC4648,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Radix::Base16 => "base16",
            Radix::Base32 => "base32",
            Radix::Base58 => "base58",
            Radix::Base64 => "base64",
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Radix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "base16" | "16" | "hex" => Ok(Radix::Base16),
            "base32" | "32" => Ok(Radix::Base32),
            "base58" | "58" => Ok(Radix::Base58),
            "base64" | "64" => Ok(Radix::Base64),
            _ => Err(format!(
                "unknown base: {} (expected one of base16, base32, base58, base64)",
                s
            )),
        }
    }
}

/// Immutable descriptor bundling an alphabet with its padding policy.
///
/// The symbol at index `i` of the alphabet stands for the digit value `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatProvider {
    name: Cow<'static, str>,
    value: u32,
    radix: Radix,
    alphabet: Cow<'static, str>,
    padded: bool,
    case_insensitive: bool,
}

impl FormatProvider {
    const fn builtin(
        name: &'static str,
        value: u32,
        radix: Radix,
        alphabet: &'static str,
        padded: bool,
        case_insensitive: bool,
    ) -> Self {
        FormatProvider {
            name: Cow::Borrowed(name),
            value,
            radix,
            alphabet: Cow::Borrowed(alphabet),
            padded,
            case_insensitive,
        }
    }

    /// Creates a provider outside the built-in set.
    ///
    /// No validation happens here; codecs reject a malformed alphabet with
    /// [`CodecError::InvalidProvider`] when the provider is used. Call
    /// [`FormatProvider::validate`] to check eagerly.
    pub fn custom(
        name: impl Into<String>,
        radix: Radix,
        alphabet: impl Into<String>,
        padded: bool,
    ) -> Self {
        FormatProvider {
            name: Cow::Owned(name.into()),
            value: u32::MAX,
            radix,
            alphabet: Cow::Owned(alphabet.into()),
            padded,
            case_insensitive: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordinal of the provider within its radix family.
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }

    pub fn is_padded(&self) -> bool {
        self.padded
    }

    /// Whether decoding accepts either ASCII case.
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Padding character, if this provider pads its output.
    pub fn padding(&self) -> Option<char> {
        if self.padded { Some(PAD) } else { None }
    }

    /// Returns this provider when it describes `kind`, otherwise `None`.
    pub fn get_format(&self, kind: Radix) -> Option<&FormatProvider> {
        if self.radix == kind { Some(self) } else { None }
    }

    /// Same alphabet with padding switched on.
    ///
    /// Radix 58 has no padding, so Base58 providers are returned unchanged.
    pub fn padded(&self) -> FormatProvider {
        let mut provider = self.clone();
        provider.padded = self.radix != Radix::Base58;
        provider
    }

    /// Same alphabet with padding switched off.
    pub fn unpadded(&self) -> FormatProvider {
        let mut provider = self.clone();
        provider.padded = false;
        provider
    }

    /// Checks the alphabet length against the radix and that every symbol
    /// is distinct.
    pub fn validate(&self) -> Result<(), CodecError> {
        SymbolTable::new(self).map(|_| ())
    }

    /// Built-in providers for `radix`, in ordinal order.
    pub fn builtins(radix: Radix) -> &'static [&'static FormatProvider] {
        match radix {
            Radix::Base16 => &base16::ALL,
            Radix::Base32 => &base32::ALL,
            Radix::Base58 => &base58::ALL,
            Radix::Base64 => &base64::ALL,
        }
    }

    /// Finds a built-in provider by name.
    ///
    /// Matching ignores ASCII case, `-` and `_`, so `padded-rfc4648`,
    /// `padded_rfc4648` and `PaddedRfc4648` all resolve to the same provider.
    pub fn lookup(radix: Radix, name: &str) -> Option<&'static FormatProvider> {
        let wanted = normalize_name(name);
        Self::builtins(radix)
            .iter()
            .copied()
            .find(|provider| normalize_name(provider.name()) == wanted)
    }
}

impl fmt::Display for FormatProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.radix, self.name)
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Base16 providers.
pub mod base16 {
    use super::{FormatProvider, Radix};

    const UPPER: &str = "0123456789ABCDEF";
    const LOWER: &str = "0123456789abcdef";

    /// Encodes uppercase, decodes either case.
    pub static INVARIANT: FormatProvider =
        FormatProvider::builtin("Invariant", 0, Radix::Base16, UPPER, false, true);
    pub static UPPERCASE: FormatProvider =
        FormatProvider::builtin("Uppercase", 1, Radix::Base16, UPPER, false, false);
    pub static LOWERCASE: FormatProvider =
        FormatProvider::builtin("Lowercase", 2, Radix::Base16, LOWER, false, false);

    pub(super) static ALL: [&FormatProvider; 3] = [&INVARIANT, &UPPERCASE, &LOWERCASE];
}

/// Base32 providers.
pub mod base32 {
    use super::{FormatProvider, Radix};

    const RFC_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
    const ZBASE_CHARS: &str = "ybndrfg8ejkmcpqxot1uwisza345h769";
    const GEOHASH_CHARS: &str = "0123456789bcdefghjkmnpqrstuvwxyz";
    const CROCKFORD_CHARS: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";
    const HEX_CHARS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUV";

    pub static RFC4648: FormatProvider =
        FormatProvider::builtin("Rfc4648", 0, Radix::Base32, RFC_CHARS, false, false);
    pub static ZBASE32: FormatProvider =
        FormatProvider::builtin("ZBase32", 1, Radix::Base32, ZBASE_CHARS, false, false);
    pub static GEOHASH: FormatProvider =
        FormatProvider::builtin("GeoHash", 2, Radix::Base32, GEOHASH_CHARS, false, false);
    pub static CROCKFORD: FormatProvider =
        FormatProvider::builtin("Crockford", 3, Radix::Base32, CROCKFORD_CHARS, false, false);
    pub static BASE32HEX: FormatProvider =
        FormatProvider::builtin("Base32Hex", 4, Radix::Base32, HEX_CHARS, false, false);

    pub static PADDED_RFC4648: FormatProvider =
        FormatProvider::builtin("PaddedRfc4648", 5, Radix::Base32, RFC_CHARS, true, false);
    pub static PADDED_ZBASE32: FormatProvider =
        FormatProvider::builtin("PaddedZBase32", 6, Radix::Base32, ZBASE_CHARS, true, false);
    pub static PADDED_GEOHASH: FormatProvider =
        FormatProvider::builtin("PaddedGeoHash", 7, Radix::Base32, GEOHASH_CHARS, true, false);
    pub static PADDED_CROCKFORD: FormatProvider =
        FormatProvider::builtin("PaddedCrockford", 8, Radix::Base32, CROCKFORD_CHARS, true, false);
    pub static PADDED_BASE32HEX: FormatProvider =
        FormatProvider::builtin("PaddedBase32Hex", 9, Radix::Base32, HEX_CHARS, true, false);

    pub(super) static ALL: [&FormatProvider; 10] = [
        &RFC4648,
        &ZBASE32,
        &GEOHASH,
        &CROCKFORD,
        &BASE32HEX,
        &PADDED_RFC4648,
        &PADDED_ZBASE32,
        &PADDED_GEOHASH,
        &PADDED_CROCKFORD,
        &PADDED_BASE32HEX,
    ];
}

/// Base58 providers.
pub mod base58 {
    use super::{FormatProvider, Radix};

    pub static BITCOIN: FormatProvider = FormatProvider::builtin(
        "Bitcoin",
        0,
        Radix::Base58,
        "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz",
        false,
        false,
    );
    pub static FLICKR: FormatProvider = FormatProvider::builtin(
        "Flickr",
        1,
        Radix::Base58,
        "123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ",
        false,
        false,
    );
    pub static RIPPLE: FormatProvider = FormatProvider::builtin(
        "Ripple",
        2,
        Radix::Base58,
        "rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz",
        false,
        false,
    );

    pub(super) static ALL: [&FormatProvider; 3] = [&BITCOIN, &FLICKR, &RIPPLE];
}

/// Base64 providers.
pub mod base64 {
    use super::{FormatProvider, Radix};

    const STANDARD: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    const URL_SAFE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

    pub static RFC4648: FormatProvider =
        FormatProvider::builtin("Rfc4648", 0, Radix::Base64, STANDARD, true, false);
    /// RFC 4648 section 5 alphabet, unpadded.
    pub static URL: FormatProvider =
        FormatProvider::builtin("Url", 1, Radix::Base64, URL_SAFE, false, false);
    pub static PADDED_URL: FormatProvider =
        FormatProvider::builtin("PaddedUrl", 2, Radix::Base64, URL_SAFE, true, false);

    pub(super) static ALL: [&FormatProvider; 3] = [&RFC4648, &URL, &PADDED_URL];
}
