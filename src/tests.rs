use crate::providers::{base16, base32, base58, base64};
use crate::{
    Base16, Base32, Base58, Base64, BaseCodec, CodecError, FormatProvider, Radix, TextFormat,
    decode, encode,
};

fn all_providers() -> Vec<&'static FormatProvider> {
    Radix::ALL
        .iter()
        .flat_map(|radix| FormatProvider::builtins(*radix).iter().copied())
        .collect()
}

#[test]
fn test_encode_decode_empty() {
    for provider in all_providers() {
        assert_eq!(encode(b"", provider).unwrap(), "", "{}", provider);
        assert_eq!(decode("", provider).unwrap(), b"", "{}", provider);
    }
}

#[test]
fn test_encode_decode_zero() {
    for provider in all_providers() {
        let encoded = encode(&[0u8], provider).unwrap();
        assert!(!encoded.is_empty(), "{}", provider);
        assert_eq!(decode(&encoded, provider).unwrap(), [0u8], "{}", provider);
    }
}

#[test]
fn test_encode_decode_binary() {
    let data = &[0u8, 1, 2, 3, 255, 254, 253];
    for provider in all_providers() {
        let encoded = encode(data, provider).unwrap();
        let decoded = decode(&encoded, provider).unwrap();
        assert_eq!(decoded, data, "{}", provider);
    }
}

#[test]
fn test_encode_decode_hello_world() {
    let data = b"Hello, World!";
    for provider in all_providers() {
        let encoded = encode(data, provider).unwrap();
        assert_eq!(decode(&encoded, provider).unwrap(), data, "{}", provider);
    }
    assert_eq!(encode(data, &base64::RFC4648).unwrap(), "SGVsbG8sIFdvcmxkIQ==");
}

#[test]
fn test_literal_examples() {
    assert_eq!(
        encode(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ", &base16::LOWERCASE).unwrap(),
        "4142434445464748494a4b4c4d4e4f505152535455565758595a"
    );
    assert_eq!(encode(b"0123456789", &base32::RFC4648).unwrap(), "GAYTEMZUGU3DOOBZ");
    assert_eq!(
        encode(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ", &base58::BITCOIN).unwrap(),
        "2zuFXTJSTRK6ESktqhM2QDBkCnH1U46CnxaD"
    );
    assert_eq!(encode(b"0123456789", &base64::RFC4648).unwrap(), "MDEyMzQ1Njc4OQ==");
}

#[test]
fn test_base16_matches_hex_crate() {
    let data: Vec<u8> = (0..=255).collect();
    assert_eq!(encode(&data, &base16::LOWERCASE).unwrap(), hex::encode(&data));
    assert_eq!(encode(&data, &base16::UPPERCASE).unwrap(), hex::encode_upper(&data));
}

#[test]
fn test_base32_alphabets_differ() {
    let data = b"geohash";
    let outputs: Vec<String> = [
        &base32::RFC4648,
        &base32::ZBASE32,
        &base32::GEOHASH,
        &base32::CROCKFORD,
        &base32::BASE32HEX,
    ]
    .iter()
    .map(|provider| encode(data, provider).unwrap())
    .collect();

    for (i, a) in outputs.iter().enumerate() {
        for b in &outputs[i + 1..] {
            assert_ne!(a, b);
        }
    }
    // Same bit groups, different symbols: lengths agree.
    assert!(outputs.iter().all(|o| o.len() == outputs[0].len()));
}

#[test]
fn test_zbase32_known_value() {
    // z-base-32 of the bytes 0xF0 0xBF 0xC7
    assert_eq!(encode(&[0xf0, 0xbf, 0xc7], &base32::ZBASE32).unwrap(), "6n9hq");
}

#[test]
fn test_base58_leading_zeros() {
    let data = &[0u8, 0, 0, 1, 2, 3];
    let encoded = encode(data, &base58::BITCOIN).unwrap();
    assert!(encoded.starts_with("111"));
    assert!(!encoded[3..].starts_with('1'));
    assert_eq!(decode(&encoded, &base58::BITCOIN).unwrap(), data);
}

#[test]
fn test_only_padding_fails() {
    for provider in [
        &base32::PADDED_RFC4648,
        &base32::PADDED_CROCKFORD,
        &base64::RFC4648,
        &base64::PADDED_URL,
    ] {
        let err = decode("========", provider).unwrap_err();
        assert_eq!(err.kind(), &CodecError::InvalidPadding, "{}", provider);
    }
}

#[test]
fn test_case_sensitivity() {
    let upper = "4142434445464748494A4B4C4D4E4F505152535455565758595A";
    assert!(decode(upper, &base16::LOWERCASE).is_err());
    assert!(decode(&upper.to_lowercase(), &base16::UPPERCASE).is_err());
    assert_eq!(
        decode(upper, &base16::INVARIANT).unwrap(),
        decode(&upper.to_lowercase(), &base16::INVARIANT).unwrap()
    );
    assert!(decode("gayTEMZU", &base32::RFC4648).is_err());
}

#[test]
fn test_cross_base_round_trip() {
    for text in ["", "a", "Hello, World!", "\u{1F980} crab", "line\nbreak\0nul"] {
        let round = Base16::from_text(text)
            .to_base32()
            .to_base58()
            .to_base64()
            .to_plain_text_string();
        assert_eq!(round, text);
    }
}

#[test]
fn test_representation_text_round_trip() {
    let value = Base58::from_text("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    let text = value.to_string();
    let parsed: Base58 = text.parse().unwrap();
    assert_eq!(parsed, value);

    let b32 = Base32::from_text("fooba");
    let padded = b32
        .to_string_with(TextFormat::Padded, &base32::RFC4648)
        .unwrap();
    assert_eq!(padded, "MZXW6YTB");
    assert_eq!(Base32::parse(&padded).unwrap(), b32);

    let b64 = Base64::from_text("f");
    let unpadded = b64
        .to_string_with(TextFormat::Unpadded, &base64::RFC4648)
        .unwrap();
    assert_eq!(
        Base64::parse_with(&unpadded, &base64::RFC4648.unpadded()).unwrap(),
        b64
    );
    assert!(Base64::parse(&unpadded).is_err());
}

#[test]
fn test_codec_is_shareable_across_threads() {
    let codec = BaseCodec::default();
    let handles: Vec<_> = (0..4u8)
        .map(|seed| {
            std::thread::spawn(move || {
                let data: Vec<u8> = (0..64).map(|i| i ^ seed).collect();
                let text = codec.get_string(&data, &base58::RIPPLE).unwrap();
                codec.get_bytes(&text, &base58::RIPPLE).unwrap() == data
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
