//! Bit-group codec for the power-of-two radixes (16, 32 and 64).
//!
//! Input bytes form a bitstream read most-significant bit first. Each symbol
//! carries `bits_per_symbol` bits; a trailing partial group is filled with
//! zero bits, and padded providers append `=` up to a whole group of
//! `lcm(8, bits) / bits` symbols.

use num_integer::lcm;

use crate::core::provider::{FormatProvider, PAD};
use crate::core::symbols::SymbolTable;
use crate::encoders::{CodecError, Limits};

/// Where the decoder is within the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    ReadingData,
    ReadingPadding,
}

fn bits_per_symbol(provider: &FormatProvider) -> Result<usize, CodecError> {
    provider.radix().bits_per_symbol().ok_or_else(|| {
        CodecError::invalid_provider(format!(
            "{} is not a power-of-two radix",
            provider.radix()
        ))
    })
}

/// Symbols per padding group: 2 for Base16, 8 for Base32, 4 for Base64.
fn group_size(bits_per_char: usize) -> usize {
    lcm(bits_per_char, 8) / bits_per_char
}

/// Exact number of symbols `encode_chunked` emits for `input_len` bytes,
/// or `None` when the count does not fit in a `usize`.
pub fn encoded_len(input_len: usize, bits_per_char: usize, padded: bool) -> Option<usize> {
    let symbols = input_len.checked_mul(8)?.div_ceil(bits_per_char);
    if padded {
        let group = group_size(bits_per_char);
        symbols.div_ceil(group).checked_mul(group)
    } else {
        Some(symbols)
    }
}

/// Number of bytes carried by `data_symbols` symbols, or `None` on overflow.
pub fn decoded_len(data_symbols: usize, bits_per_char: usize) -> Option<usize> {
    data_symbols.checked_mul(bits_per_char).map(|bits| bits / 8)
}

pub fn encode_chunked(
    data: &[u8],
    provider: &FormatProvider,
    limits: &Limits,
) -> Result<String, CodecError> {
    let table = SymbolTable::new(provider)?;
    let bits_per_char = bits_per_symbol(provider)?;
    let capacity =
        limits.check_encoded(encoded_len(data.len(), bits_per_char, provider.is_padded()))?;

    if data.is_empty() {
        return Ok(String::new());
    }

    let mut result = String::with_capacity(capacity);
    let mask = (1u32 << bits_per_char) - 1;
    let mut emitted = 0usize;

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for &byte in data {
        bit_buffer = (bit_buffer << 8) | (byte as u32);
        bits_in_buffer += 8;

        while bits_in_buffer >= bits_per_char {
            bits_in_buffer -= bits_per_char;
            let index = ((bit_buffer >> bits_in_buffer) & mask) as usize;
            result.push(table.symbol(index));
            emitted += 1;
        }
    }

    // Handle remaining bits
    if bits_in_buffer > 0 {
        let index = ((bit_buffer << (bits_per_char - bits_in_buffer)) & mask) as usize;
        result.push(table.symbol(index));
        emitted += 1;
    }

    if let Some(pad_char) = table.padding() {
        let group = group_size(bits_per_char);
        let padded_chars = emitted.div_ceil(group) * group;
        for _ in emitted..padded_chars {
            result.push(pad_char);
        }
    }

    Ok(result)
}

pub fn decode_chunked(
    encoded: &str,
    provider: &FormatProvider,
    limits: &Limits,
) -> Result<Vec<u8>, CodecError> {
    let table = SymbolTable::new(provider)?;
    let bits_per_char = bits_per_symbol(provider)?;

    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    // Trailing padding carries no bits.
    let trailing_pad = if table.decode_char(PAD).is_none() {
        encoded.chars().rev().take_while(|&c| c == PAD).count()
    } else {
        0
    };
    let data_len = encoded.chars().count() - trailing_pad;
    let output_len = limits.check_decoded(decoded_len(data_len, bits_per_char))?;
    let mut result = Vec::with_capacity(output_len);

    let mut state = DecodeState::ReadingData;
    let mut data_symbols = 0usize;
    let mut pad_symbols = 0usize;

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for (position, c) in encoded.chars().enumerate() {
        match state {
            DecodeState::ReadingData => {
                if let Some(digit) = table.decode_char(c) {
                    bit_buffer = (bit_buffer << bits_per_char) | (digit as u32);
                    bits_in_buffer += bits_per_char;
                    data_symbols += 1;

                    if bits_in_buffer >= 8 {
                        bits_in_buffer -= 8;
                        result.push(((bit_buffer >> bits_in_buffer) & 0xFF) as u8);
                    }
                } else if c == PAD {
                    state = DecodeState::ReadingPadding;
                    pad_symbols = 1;
                } else {
                    return Err(CodecError::InvalidCharacter { char: c, position });
                }
            }
            DecodeState::ReadingPadding => {
                if c != PAD {
                    return Err(CodecError::InvalidPadding);
                }
                pad_symbols += 1;
            }
        }
    }

    if data_symbols == 0 {
        // Only padding
        return Err(CodecError::InvalidPadding);
    }

    // The leftover bits must be fewer than one symbol's worth, otherwise the
    // last symbol carries no byte an encoder could have produced.
    if bits_in_buffer >= bits_per_char {
        return Err(CodecError::InvalidPadding);
    }

    let group = group_size(bits_per_char);
    let expected_pad = match data_symbols % group {
        0 => 0,
        partial => group - partial,
    };
    let padding_ok = if provider.is_padded() {
        pad_symbols == expected_pad
    } else {
        pad_symbols == 0 || pad_symbols == expected_pad
    };
    if !padding_ok {
        return Err(CodecError::InvalidPadding);
    }

    Ok(result)
}
