//! CLI integration tests for basecodec
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn basecodec() -> Command {
    Command::cargo_bin("basecodec").unwrap()
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    basecodec()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Base16, Base32, Base58 and Base64"))
        .stdout(predicate::str::contains("convert"));
}

#[test]
fn test_version() {
    basecodec()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("basecodec"));
}

#[test]
fn test_missing_subcommand() {
    basecodec().assert().failure();
}

// ============================================================================
// Encode / Decode
// ============================================================================

#[test]
fn test_encode_base64() {
    basecodec()
        .args(["encode", "base64"])
        .write_stdin("0123456789")
        .assert()
        .success()
        .stdout("MDEyMzQ1Njc4OQ==\n");
}

#[test]
fn test_encode_base32_unpadded_by_default() {
    basecodec()
        .args(["encode", "base32"])
        .write_stdin("f")
        .assert()
        .success()
        .stdout("MY\n");
}

#[test]
fn test_encode_padded_format() {
    basecodec()
        .args(["encode", "base32", "--format", "padded"])
        .write_stdin("f")
        .assert()
        .success()
        .stdout("MY======\n");
}

#[test]
fn test_encode_base58() {
    basecodec()
        .args(["encode", "58"])
        .write_stdin("Hello World!")
        .assert()
        .success()
        .stdout("2NEpo7TZRRrLZSi2U\n");
}

#[test]
fn test_encode_named_provider() {
    basecodec()
        .args(["encode", "hex", "-p", "lowercase"])
        .write_stdin("Hello")
        .assert()
        .success()
        .stdout("48656c6c6f\n");
}

#[test]
fn test_decode_base64() {
    basecodec()
        .args(["decode", "base64"])
        .write_stdin("SGVsbG8=\n")
        .assert()
        .success()
        .stdout("Hello");
}

#[test]
fn test_decode_invalid_input() {
    basecodec()
        .args(["decode", "base64"])
        .write_stdin("@@@@")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Decoding operation failed due to an invalid value or format provider.",
        ));
}

#[test]
fn test_decode_only_padding_fails() {
    basecodec()
        .args(["decode", "base64"])
        .write_stdin("====")
        .assert()
        .failure();
}

#[test]
fn test_unknown_provider_suggestion() {
    basecodec()
        .args(["encode", "base32", "-p", "Crokford"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean 'Crockford'"));
}

#[test]
fn test_unknown_base() {
    basecodec()
        .args(["encode", "base99"])
        .write_stdin("x")
        .assert()
        .failure();
}

// ============================================================================
// Convert
// ============================================================================

#[test]
fn test_convert_base16_to_base64() {
    basecodec()
        .args(["convert", "base16", "base64"])
        .write_stdin("48656C6C6F")
        .assert()
        .success()
        .stdout("SGVsbG8=\n");
}

#[test]
fn test_convert_with_providers() {
    basecodec()
        .args([
            "convert",
            "base58",
            "base58",
            "--from-provider",
            "bitcoin",
            "--to-provider",
            "flickr",
        ])
        .write_stdin("11233QC4")
        .assert()
        .success()
        .stdout("11233pc4\n");
}

// ============================================================================
// Providers
// ============================================================================

#[test]
fn test_list_providers() {
    basecodec()
        .arg("providers")
        .assert()
        .success()
        .stdout(predicate::str::contains("base32:"))
        .stdout(predicate::str::contains("ZBase32"))
        .stdout(predicate::str::contains("Bitcoin"));
}

#[test]
fn test_list_providers_json() {
    let output = basecodec()
        .args(["providers", "base58", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["name"], "Bitcoin");
    assert_eq!(rows[0]["base"], "base58");
    assert_eq!(rows[0]["default"], true);
    assert_eq!(rows[1]["default"], false);
}

// ============================================================================
// Configuration and input handling
// ============================================================================

#[test]
fn test_custom_provider_from_config() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        config,
        "[providers.reversed-hex]\nradix = \"base16\"\nalphabet = \"FEDCBA9876543210\"\n"
    )
    .unwrap();

    basecodec()
        .args(["--config"])
        .arg(config.path())
        .args(["encode", "base16", "-p", "reversed-hex"])
        .write_stdin(vec![0x00u8, 0xff])
        .assert()
        .success()
        .stdout("FF00\n");
}

#[test]
fn test_config_default_override() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[defaults]\nbase16 = \"Lowercase\"\n").unwrap();

    basecodec()
        .arg("--config")
        .arg(config.path())
        .args(["encode", "base16"])
        .write_stdin("Z")
        .assert()
        .success()
        .stdout("5a\n");
}

#[test]
fn test_config_limit_rejects_large_output() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[limits]\nmax_encoded_len = 4\n").unwrap();

    basecodec()
        .arg("--config")
        .arg(config.path())
        .args(["encode", "base64"])
        .write_stdin("0123456789")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Encoding operation failed"));
}

#[test]
fn test_invalid_config_provider() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        config,
        "[providers.short]\nradix = \"base32\"\nalphabet = \"ABC\"\n"
    )
    .unwrap();

    basecodec()
        .arg("--config")
        .arg(config.path())
        .args(["encode", "base32"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("provider 'short' is unusable"));
}

#[test]
fn test_config_provider_shadowing_builtin_rejected() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        config,
        "[providers.Bitcoin]\nradix = \"base58\"\nalphabet = \"{}\"\n",
        "123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ"
    )
    .unwrap();

    basecodec()
        .arg("--config")
        .arg(config.path())
        .args(["providers", "base58"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("clashes with the built-in base58 provider"));
}

#[test]
fn test_file_input_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.bin");
    let encoded = dir.path().join("encoded.txt");
    let decoded = dir.path().join("decoded.bin");
    std::fs::write(&input, [0u8, 0, 1, 2, 3]).unwrap();

    basecodec()
        .args(["encode", "base58"])
        .arg(&input)
        .arg("-o")
        .arg(&encoded)
        .assert()
        .success()
        .stdout("");

    basecodec()
        .args(["decode", "base58"])
        .arg(&encoded)
        .arg("-o")
        .arg(&decoded)
        .assert()
        .success();

    assert_eq!(std::fs::read(&decoded).unwrap(), [0u8, 0, 1, 2, 3]);
}

#[test]
fn test_max_size_limit() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.bin");
    std::fs::write(&input, b"0123456789").unwrap();

    basecodec()
        .args(["--max-size", "4", "encode", "base64"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds limit"));

    basecodec()
        .args(["--max-size", "4", "--force", "encode", "base64"])
        .arg(&input)
        .assert()
        .success()
        .stdout("MDEyMzQ1Njc4OQ==\n");
}

#[test]
fn test_verbose_logs_to_stderr() {
    basecodec()
        .args(["-vv", "encode", "base64"])
        .write_stdin("x")
        .assert()
        .success()
        .stdout("eA==\n")
        .stderr(predicate::str::contains("resolved provider"));
}

#[test]
fn test_verbose_logs_failure_kind() {
    basecodec()
        .args(["-vv", "decode", "base64"])
        .write_stdin("Zm9v!mFy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid_character"))
        .stderr(predicate::str::contains(
            "Decoding operation failed due to an invalid value or format provider.",
        ));
}
