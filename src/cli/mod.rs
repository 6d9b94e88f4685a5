mod args;
mod config;
mod global;
mod handlers;

use clap::{Parser, Subcommand};
use tracing::Level;

use args::{ConvertArgs, DecodeArgs, EncodeArgs, ProvidersArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "basecodec")]
#[command(version)]
#[command(about = "Encode, decode and convert Base16, Base32, Base58 and Base64 text")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode bytes as text
    Encode(EncodeArgs),
    /// Decode text back to bytes
    Decode(DecodeArgs),
    /// Re-encode text from one base to another
    Convert(ConvertArgs),
    /// List available format providers
    Providers(ProvidersArgs),
}

fn init_logging(global: &GlobalArgs) {
    let level = if global.quiet {
        Level::ERROR
    } else {
        match global.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.global);

    let config = config::load_config(&cli.global)?;

    match cli.command {
        Command::Encode(args) => handlers::encode::handle(args, &cli.global, &config),
        Command::Decode(args) => handlers::decode::handle(args, &cli.global, &config),
        Command::Convert(args) => handlers::convert::handle(args, &cli.global, &config),
        Command::Providers(args) => handlers::providers::handle(args, &config),
    }
}
