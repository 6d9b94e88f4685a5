use crate::cli::{
    args::ConvertArgs,
    config::{read_text_input, resolve_provider, write_text_output},
    global::GlobalArgs,
};
use basecodec::{CodecConfig, TextFormat};

pub fn handle(
    args: ConvertArgs,
    global: &GlobalArgs,
    config: &CodecConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let from = resolve_provider(
        config,
        args.from,
        args.from_provider.as_deref(),
        TextFormat::Default,
    )?;
    let to = resolve_provider(
        config,
        args.to,
        args.to_provider.as_deref(),
        args.format.into(),
    )?;
    let text = read_text_input(args.file.as_ref(), global)?;

    let codec = config.codec();
    let bytes = codec.get_bytes(&text, &from)?;
    let converted = codec.get_string(&bytes, &to)?;
    tracing::info!(%from, %to, bytes = bytes.len(), "converted");

    write_text_output(args.output.as_deref(), &converted)
}
