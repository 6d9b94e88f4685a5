use crate::cli::args::ProvidersArgs;
use basecodec::{CodecConfig, Radix};
use serde::Serialize;

/// One row of `providers` output.
#[derive(Debug, Serialize)]
struct ProviderRow {
    base: Radix,
    name: String,
    alphabet: String,
    padded: bool,
    case_insensitive: bool,
    custom: bool,
    default: bool,
}

fn rows(
    config: &CodecConfig,
    bases: &[Radix],
) -> Result<Vec<ProviderRow>, Box<dyn std::error::Error>> {
    let mut rows = Vec::new();
    for &base in bases {
        let default = config.default_provider(base)?;
        for name in config.provider_names(base) {
            let provider = config.provider(base, &name)?;
            rows.push(ProviderRow {
                base,
                custom: config.providers.get(&name).is_some_and(|p| p.radix == base),
                default: provider == default,
                name,
                alphabet: provider.alphabet().to_string(),
                padded: provider.is_padded(),
                case_insensitive: provider.is_case_insensitive(),
            });
        }
    }
    Ok(rows)
}

pub fn handle(args: ProvidersArgs, config: &CodecConfig) -> Result<(), Box<dyn std::error::Error>> {
    let bases = match args.base {
        Some(base) => vec![base],
        None => Radix::ALL.to_vec(),
    };
    let rows = rows(config, &bases)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mut current = None;
    for row in rows {
        if current != Some(row.base) {
            if current.is_some() {
                println!();
            }
            println!("{}:", row.base);
            current = Some(row.base);
        }
        let mut flags = Vec::new();
        if row.default {
            flags.push("default");
        }
        if row.padded {
            flags.push("padded");
        }
        if row.case_insensitive {
            flags.push("any-case");
        }
        if row.custom {
            flags.push("custom");
        }
        println!("  {:<18} {}  {}", row.name, row.alphabet, flags.join(","));
    }
    Ok(())
}
