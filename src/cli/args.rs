use basecodec::{Radix, TextFormat};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Padding style for encoded output (CLI enum)
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum FormatArg {
    /// Whatever the provider does
    #[default]
    Default,
    /// Always pad to a whole group
    Padded,
    /// Never pad
    Unpadded,
}

impl From<FormatArg> for TextFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Default => TextFormat::Default,
            FormatArg::Padded => TextFormat::Padded,
            FormatArg::Unpadded => TextFormat::Unpadded,
        }
    }
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Target base (base16, base32, base58, base64)
    pub base: Radix,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Format provider name (defaults to the configured one)
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Padding style
    #[arg(short = 'f', long, value_enum, default_value_t = FormatArg::Default)]
    pub format: FormatArg,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Base of the input text
    pub base: Radix,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Format provider name (defaults to the configured one)
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for re-encoding text from one base to another
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Base of the input text
    pub from: Radix,

    /// Base of the output text
    pub to: Radix,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Provider for the input text
    #[arg(long)]
    pub from_provider: Option<String>,

    /// Provider for the output text
    #[arg(long)]
    pub to_provider: Option<String>,

    /// Padding style of the output
    #[arg(short = 'f', long, value_enum, default_value_t = FormatArg::Default)]
    pub format: FormatArg,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for listing providers
#[derive(Args, Debug)]
pub struct ProvidersArgs {
    /// Only list providers for this base
    pub base: Option<Radix>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
