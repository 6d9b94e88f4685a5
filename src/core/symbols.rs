use std::collections::HashMap;

use crate::core::provider::{FormatProvider, PAD};
use crate::encoders::CodecError;

/// Digit/character lookup built from a [`FormatProvider`].
///
/// Building the table is where a provider's alphabet is validated: the
/// symbol count must equal the radix, symbols must be pairwise distinct, and
/// a padded provider cannot use the pad character as a digit.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    chars: Vec<char>,
    char_to_index: HashMap<char, usize>,
    padding: Option<char>,
}

impl SymbolTable {
    pub fn new(provider: &FormatProvider) -> Result<Self, CodecError> {
        let chars: Vec<char> = provider.alphabet().chars().collect();
        let radix = provider.radix();

        if chars.len() != radix.value() {
            return Err(CodecError::invalid_provider(format!(
                "{} alphabet has {} symbols, expected {}",
                provider.name(),
                chars.len(),
                radix.value()
            )));
        }

        if provider.is_padded() && radix.bits_per_symbol().is_none() {
            return Err(CodecError::invalid_provider(format!(
                "{} cannot pad a {} alphabet",
                provider.name(),
                radix
            )));
        }

        let mut char_to_index = HashMap::with_capacity(chars.len() * 2);
        for (i, &c) in chars.iter().enumerate() {
            if provider.is_padded() && c == PAD {
                return Err(CodecError::invalid_provider(format!(
                    "{} uses the pad character '{}' as a symbol",
                    provider.name(),
                    PAD
                )));
            }
            if char_to_index.insert(c, i).is_some() {
                return Err(CodecError::invalid_provider(format!(
                    "duplicate symbol '{}' in {} alphabet",
                    c,
                    provider.name()
                )));
            }
        }

        if provider.is_case_insensitive() {
            for (i, &c) in chars.iter().enumerate() {
                for folded in [c.to_ascii_lowercase(), c.to_ascii_uppercase()] {
                    match char_to_index.get(&folded) {
                        Some(&existing) if existing != i => {
                            return Err(CodecError::invalid_provider(format!(
                                "symbols '{}' and '{}' collide when case is ignored",
                                chars[existing], c
                            )));
                        }
                        Some(_) => {}
                        None => {
                            char_to_index.insert(folded, i);
                        }
                    }
                }
            }
        }

        Ok(SymbolTable {
            chars,
            char_to_index,
            padding: provider.padding(),
        })
    }

    pub fn base(&self) -> usize {
        self.chars.len()
    }

    pub fn padding(&self) -> Option<char> {
        self.padding
    }

    /// The digit-zero symbol.
    pub fn zero(&self) -> char {
        self.chars[0]
    }

    /// Symbol for a digit already known to be below the base.
    pub(crate) fn symbol(&self, digit: usize) -> char {
        self.chars[digit]
    }

    /// Encodes a digit (0 to base-1) as a character.
    ///
    /// Returns `None` if the digit is out of range.
    pub fn encode_digit(&self, digit: usize) -> Option<char> {
        self.chars.get(digit).copied()
    }

    /// Decodes a character back to its digit value.
    ///
    /// Returns `None` if the character is not in the alphabet.
    pub fn decode_char(&self, c: char) -> Option<usize> {
        self.char_to_index.get(&c).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::provider::{Radix, base16, base32, base58};

    #[test]
    fn test_digits_round_trip() {
        let table = SymbolTable::new(&base58::BITCOIN).unwrap();
        assert_eq!(table.base(), 58);
        assert_eq!(table.zero(), '1');
        for digit in 0..58 {
            let c = table.encode_digit(digit).unwrap();
            assert_eq!(table.decode_char(c), Some(digit));
        }
        assert_eq!(table.encode_digit(58), None);
        assert_eq!(table.decode_char('0'), None);
        assert_eq!(table.decode_char('l'), None);
    }

    #[test]
    fn test_case_insensitive_table() {
        let table = SymbolTable::new(&base16::INVARIANT).unwrap();
        assert_eq!(table.decode_char('a'), Some(10));
        assert_eq!(table.decode_char('A'), Some(10));
        assert_eq!(table.encode_digit(15), Some('F'));
    }

    #[test]
    fn test_case_sensitive_table() {
        let table = SymbolTable::new(&base16::LOWERCASE).unwrap();
        assert_eq!(table.decode_char('a'), Some(10));
        assert_eq!(table.decode_char('A'), None);
    }

    #[test]
    fn test_padding_from_provider() {
        assert_eq!(
            SymbolTable::new(&base32::PADDED_GEOHASH).unwrap().padding(),
            Some('=')
        );
        assert_eq!(SymbolTable::new(&base32::GEOHASH).unwrap().padding(), None);
    }

    #[test]
    fn test_rejects_pad_symbol_in_padded_alphabet() {
        let provider = FormatProvider::custom(
            "eq",
            Radix::Base32,
            "ABCDEFGHIJKLMNOPQRSTUVWXYZ23456=",
            true,
        );
        assert!(matches!(
            SymbolTable::new(&provider),
            Err(CodecError::InvalidProvider { .. })
        ));
        // Unpadded, '=' is an ordinary symbol.
        assert!(SymbolTable::new(&provider.unpadded()).is_ok());
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let provider =
            FormatProvider::custom("long", Radix::Base58, base16::UPPERCASE.alphabet(), false);
        let err = SymbolTable::new(&provider).unwrap_err();
        assert!(err.to_string().contains("expected 58"));
    }
}
