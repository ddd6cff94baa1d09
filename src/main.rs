use anyhow::{bail, Context, Result};
use jumperkit::designer::{detect_version, DesignDocument, ShapeChangePreview};
use jumperkit::{init_logging, load_catalog, load_settings, open_session, PortStrategy};
use jumperkit::{BUILD_DATE, VERSION};
use std::path::Path;
use tracing::debug;

const USAGE: &str = "\
Usage: jumperkit <command> [args]

Commands:
  shapes                                     List garment configurations and sizes
  preview <design.json> <config> <size>      Show porting statistics for every strategy
  migrate <in.json> <out.json>               Rewrite a design in the current format
  port <in.json> <out.json> <config> <size> [strategy]
                                             Move a design onto another garment
  version                                    Print version information";

fn main() -> Result<()> {
    init_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        println!("{}", USAGE);
        return Ok(());
    };
    debug!("Running '{}' with {} arguments", command, rest.len());

    match (command.as_str(), rest) {
        ("shapes", []) => list_shapes(),
        ("preview", [design, config, size]) => preview(design, config, size),
        ("migrate", [input, output]) => migrate(input, output),
        ("port", [input, output, config, size]) => port(input, output, config, size, None),
        ("port", [input, output, config, size, strategy]) => {
            port(input, output, config, size, Some(strategy))
        }
        ("version", []) => {
            println!("jumperkit {} (built {})", VERSION, BUILD_DATE);
            Ok(())
        }
        ("help" | "--help" | "-h", _) => {
            println!("{}", USAGE);
            Ok(())
        }
        _ => bail!("Invalid arguments for '{}'\n\n{}", command, USAGE),
    }
}

fn list_shapes() -> Result<()> {
    let settings = load_settings()?;
    let catalog = load_catalog(&settings)?;
    let (default_config, default_size) = catalog.default_pair();

    for (config_id, entry) in catalog.iter() {
        println!("{} ({})", config_id, entry.name);
        for geometry in entry.geometries() {
            let marker = if geometry.is(default_config, default_size) {
                " *"
            } else {
                ""
            };
            println!(
                "  {:<4} {:>3} rows x {:>3} columns, {} active cells{}",
                geometry.size(),
                geometry.total_rows(),
                geometry.max_columns(),
                geometry.active_cell_count(),
                marker
            );
        }
    }
    Ok(())
}

fn preview(design: &str, config: &str, size: &str) -> Result<()> {
    let settings = load_settings()?;
    let mut session = open_session(&settings)?;
    session.load_from_file(design)?;

    let preview = session
        .preview_shape_change(config, size)
        .with_context(|| format!("Cannot preview {}/{}", config, size))?;
    print_preview(&preview);
    Ok(())
}

fn print_preview(preview: &ShapeChangePreview) {
    println!(
        "{:<22} {:>14} {:>14}",
        "strategy", "front kept", "back kept"
    );
    for ((strategy, front), (_, back)) in preview.front.iter().zip(&preview.back) {
        println!(
            "{:<22} {:>8}/{:<5} {:>8}/{:<5}",
            strategy.as_str(),
            front.output,
            front.input,
            back.output,
            back.input
        );
    }
}

fn migrate(input: &str, output: &str) -> Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read design file {}", input))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse design file {}", input))?;
    let version = detect_version(&value)?;

    let document = DesignDocument::from_value(value)?;
    document.save_to_file(Path::new(output))?;
    println!(
        "Wrote {} (version {} -> {}, {} front / {} back cells)",
        output,
        version,
        document.version,
        document.front.len(),
        document.back.len()
    );
    Ok(())
}

fn port(input: &str, output: &str, config: &str, size: &str, strategy: Option<&String>) -> Result<()> {
    let settings = load_settings()?;
    let strategy = match strategy {
        Some(name) => name
            .parse::<PortStrategy>()
            .map_err(|e| anyhow::anyhow!(e))?,
        None => settings.garment.port_strategy,
    };

    let mut session = open_session(&settings)?;
    session.load_from_file(input)?;
    let report = session
        .change_shape(config, size, strategy)
        .with_context(|| format!("Cannot port onto {}/{}", config, size))?;
    session.save_to_file(output)?;

    println!(
        "Ported to {}/{} with {}: front {} kept, {} lost; back {} kept, {} lost",
        report.config_id,
        report.size,
        report.strategy,
        report.front.output,
        report.front.lost,
        report.back.output,
        report.back.lost
    );
    Ok(())
}
