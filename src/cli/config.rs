use basecodec::{CodecConfig, FormatProvider, Radix, TextFormat};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::cli::global::GlobalArgs;

/// Loads the configuration the CLI runs with.
///
/// An explicit `--config` file is merged over the built-in settings and
/// must load; otherwise the usual override locations are searched.
pub fn load_config(global: &GlobalArgs) -> Result<CodecConfig, Box<dyn std::error::Error>> {
    let config = match &global.config {
        Some(path) => {
            let expanded = PathBuf::from(shellexpand::tilde(path).as_ref());
            let mut config = CodecConfig::load_default()?;
            config.merge(CodecConfig::load_from_file(&expanded)?);
            tracing::info!(path = %expanded.display(), "using configuration file");
            config
        }
        None => CodecConfig::load_with_overrides()?,
    };
    config.validate()?;
    Ok(config)
}

/// Resolves a provider name (or the configured default) and applies the
/// requested padding style.
pub fn resolve_provider(
    config: &CodecConfig,
    base: Radix,
    name: Option<&str>,
    format: TextFormat,
) -> Result<FormatProvider, Box<dyn std::error::Error>> {
    let provider = config.resolve(base, name)?;
    tracing::debug!(%provider, ?format, "resolved provider");
    Ok(format.apply(&provider).into_owned())
}

/// Reads the input file or stdin, enforcing `--max-size`.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        // Check file size if max_size is set
        if global.max_size > 0 {
            let file_size = fs::metadata(file_path)?.len() as usize;
            if file_size > global.max_size {
                if global.force {
                    tracing::warn!(
                        file_size,
                        limit = global.max_size,
                        "processing input larger than --max-size"
                    );
                } else {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). \
                         Use --force to process anyway.",
                        file_size, global.max_size
                    )
                    .into());
                }
            }
        }
        return Ok(fs::read(file_path)?);
    }

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;

    if global.max_size > 0 && buffer.len() > global.max_size && !global.force {
        return Err(format!(
            "Input size ({} bytes) exceeds maximum ({} bytes). Use --force to process anyway.",
            buffer.len(),
            global.max_size
        )
        .into());
    }

    Ok(buffer)
}

/// Reads encoded text, dropping surrounding whitespace.
pub fn read_text_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<String, Box<dyn std::error::Error>> {
    let data = read_input(file, global)?;
    let text = String::from_utf8(data).map_err(|_| "Input must be valid UTF-8 for decoding")?;
    Ok(text.trim().to_string())
}

/// Writes `data` to the output file, or stdout.
pub fn write_output(output: Option<&Path>, data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, data)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Writes encoded text followed by a newline when going to stdout.
pub fn write_text_output(
    output: Option<&Path>,
    text: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => write_output(Some(path), text.as_bytes()),
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}
