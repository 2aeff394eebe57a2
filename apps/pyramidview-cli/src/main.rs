//! `pyramidview`: compare magnitudes as side-by-side 3D pyramids.

mod args;

use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use pyramidview_core::{ComparisonConfig, Item};
use pyramidview_io::{encode_scene, parse_item_entry, parse_item_list, ComparisonDocument, OutputFormat};
use pyramidview_renderer::{compare, plan_comparison};

use crate::args::{parse_args, CliArgs, Format, USAGE};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let (items, config) = load_inputs(&args)?;
    log::debug!("rendering {} items with {:?}", items.len(), config);

    let output = match output_format(&args) {
        Format::Svg => encode_scene(&compare(&items, &config)?, OutputFormat::Svg)?,
        Format::SceneJson => encode_scene(&compare(&items, &config)?, OutputFormat::SceneJson)?,
        Format::Placements => {
            let plan = plan_comparison(&items, &config)?;
            serde_json::to_string_pretty(&serde_json::json!({
                "placements": plan.placements,
                "frame": plan.frame,
                "axis_limits": plan.frame.axis_limits(),
            }))?
        }
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, output)
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => io::stdout().write_all(output.as_bytes())?,
    }
    Ok(())
}

/// `--format` if given, otherwise inferred from the output file's extension.
fn output_format(args: &CliArgs) -> Format {
    args.format.unwrap_or_else(|| match &args.output {
        Some(path) if OutputFormat::from_path(path) == OutputFormat::SceneJson => Format::SceneJson,
        _ => Format::Svg,
    })
}

/// Items and settings from INPUT and `--item`, with command-line overrides applied.
fn load_inputs(args: &CliArgs) -> Result<(Vec<Item>, ComparisonConfig)> {
    let (mut items, mut config) = match &args.input {
        Some(path) => read_input(path)?,
        None => (Vec::new(), ComparisonConfig::default()),
    };
    for entry in &args.items {
        items.push(parse_item_entry(entry).with_context(|| format!("--item '{entry}'"))?);
    }

    if let Some(spacing) = args.spacing {
        config.spacing = spacing;
    }
    if let Some(depth_limit) = args.depth_limit {
        config.depth_limit = depth_limit;
    }
    if let Some(palette) = &args.palette {
        config.palette = palette.clone();
    }
    if let Some(title) = &args.title {
        config.title = title.clone();
    }
    Ok((items, config))
}

fn read_input(path: &Path) -> Result<(Vec<Item>, ComparisonConfig)> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return parse_input(&text, path);
    }
    if path.extension().is_some_and(|e| e.eq_ignore_ascii_case("json")) {
        let doc = ComparisonDocument::load(path)
            .with_context(|| format!("loading {}", path.display()))?;
        return Ok((doc.items, doc.settings));
    }
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_input(&text, path)
}

/// A JSON document when the text opens with `{`, otherwise an item list.
fn parse_input(text: &str, source: &Path) -> Result<(Vec<Item>, ComparisonConfig)> {
    if text.trim_start().starts_with('{') {
        let doc = ComparisonDocument::from_json(text)
            .with_context(|| format!("parsing {}", source.display()))?;
        Ok((doc.items, doc.settings))
    } else {
        let items =
            parse_item_list(text).with_context(|| format!("parsing {}", source.display()))?;
        Ok((items, ComparisonConfig::default()))
    }
}
