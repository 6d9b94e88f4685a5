use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::core::provider::{FormatProvider, Radix};
use crate::core::symbols::SymbolTable;
use crate::encoders::{CodecError, Limits};

/// Upper bound on the symbols produced for `input_len` bytes.
///
/// `log(256) / log(58)` is just under 1.38.
pub fn encoded_len_bound(input_len: usize) -> Option<usize> {
    input_len.checked_mul(138).map(|scaled| scaled / 100 + 1)
}

/// Upper bound on the bytes produced for `input_len` symbols of which the
/// first `leading_zeros` are the zero symbol.
///
/// Each leading zero symbol is one whole byte; the rest carry
/// `log(58) / log(256)`, just under 0.733, bytes each.
pub fn decoded_len_bound(input_len: usize, leading_zeros: usize) -> Option<usize> {
    let rest = input_len.checked_sub(leading_zeros)?;
    if rest == 0 {
        return Some(leading_zeros);
    }
    rest.checked_mul(733)
        .map(|scaled| scaled / 1000 + 1)
        .and_then(|bytes| bytes.checked_add(leading_zeros))
}

fn checked_table(provider: &FormatProvider) -> Result<SymbolTable, CodecError> {
    if provider.radix() != Radix::Base58 {
        return Err(CodecError::invalid_provider(format!(
            "{} is not handled by the radix-58 codec",
            provider.radix()
        )));
    }
    SymbolTable::new(provider)
}

pub fn encode(
    data: &[u8],
    provider: &FormatProvider,
    limits: &Limits,
) -> Result<String, CodecError> {
    let table = checked_table(provider)?;
    let capacity = limits.check_encoded(encoded_len_bound(data.len()))?;

    if data.is_empty() {
        return Ok(String::new());
    }

    // Leading zero bytes vanish in the integer, so they become zero symbols
    let leading_zeros = data.iter().take_while(|&&b| b == 0).count();

    if leading_zeros == data.len() {
        return Ok(table.zero().to_string().repeat(data.len()));
    }

    let mut num = BigUint::from_bytes_be(&data[leading_zeros..]);
    let mut result = Vec::with_capacity(capacity);

    let base_big = BigUint::from(table.base());

    while !num.is_zero() {
        let (quotient, remainder) = num.div_rem(&base_big);
        let digit_val = remainder.to_usize().unwrap_or_default();
        result.push(table.symbol(digit_val));
        num = quotient;
    }

    result.extend(std::iter::repeat_n(table.zero(), leading_zeros));

    result.reverse();
    Ok(result.into_iter().collect())
}

pub fn decode(
    encoded: &str,
    provider: &FormatProvider,
    limits: &Limits,
) -> Result<Vec<u8>, CodecError> {
    let table = checked_table(provider)?;

    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let zero_symbols = encoded
        .chars()
        .take_while(|&c| table.decode_char(c) == Some(0))
        .count();
    limits.check_decoded(decoded_len_bound(encoded.chars().count(), zero_symbols))?;

    let mut num = BigUint::zero();
    let base_big = BigUint::from(table.base());
    let mut leading_zeros = 0;

    for (position, c) in encoded.chars().enumerate() {
        let digit = table
            .decode_char(c)
            .ok_or(CodecError::InvalidCharacter { char: c, position })?;

        if num.is_zero() && digit == 0 {
            leading_zeros += 1;
        } else {
            num *= &base_big;
            num += BigUint::from(digit);
        }
    }

    if num.is_zero() {
        return Ok(vec![0u8; leading_zeros]);
    }

    let bytes = num.to_bytes_be();

    let mut result = Vec::with_capacity(leading_zeros + bytes.len());
    result.resize(leading_zeros, 0u8);
    result.extend_from_slice(&bytes);

    Ok(result)
}
