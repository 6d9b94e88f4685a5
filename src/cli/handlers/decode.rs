use crate::cli::{
    args::DecodeArgs,
    config::{read_text_input, resolve_provider, write_output},
    global::GlobalArgs,
};
use basecodec::{CodecConfig, TextFormat};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &CodecConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = resolve_provider(
        config,
        args.base,
        args.provider.as_deref(),
        TextFormat::Default,
    )?;
    let text = read_text_input(args.file.as_ref(), global)?;

    let decoded = config.codec().get_bytes(&text, &provider)?;
    tracing::info!(%provider, output_bytes = decoded.len(), "decoded");

    write_output(args.output.as_deref(), &decoded)
}
