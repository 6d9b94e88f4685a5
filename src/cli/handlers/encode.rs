use crate::cli::{
    args::EncodeArgs,
    config::{read_input, resolve_provider, write_text_output},
    global::GlobalArgs,
};
use basecodec::CodecConfig;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &CodecConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = resolve_provider(
        config,
        args.base,
        args.provider.as_deref(),
        args.format.into(),
    )?;
    let data = read_input(args.file.as_ref(), global)?;

    let encoded = config.codec().get_string(&data, &provider)?;
    tracing::info!(
        %provider,
        input_bytes = data.len(),
        output_symbols = encoded.chars().count(),
        "encoded"
    );

    write_text_output(args.output.as_deref(), &encoded)
}
