use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

use pyramidview_core::{DepthLimit, Palette};

pub const USAGE: &str = "\
usage: pyramidview [INPUT] [options]

INPUT is a JSON comparison document or a text list of `label,magnitude`
lines; `-` reads from stdin.

options:
  --item LABEL=MAGNITUDE   add an item (repeatable)
  -o, --output FILE        write to FILE instead of stdout
  --format FORMAT          svg | json | placements (default: from FILE, else svg)
  --spacing N              gap between pyramids
  --depth-limit LIMIT      last | max
  --palette PALETTE        default | dojo | comma-separated colors
  --title TITLE            figure title (empty to hide)
  -h, --help               show this help";

/// What the binary should emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Svg,
    SceneJson,
    Placements,
}

impl Format {
    fn parse(value: &str) -> Result<Self> {
        match value {
            "svg" => Ok(Format::Svg),
            "json" | "scene" => Ok(Format::SceneJson),
            "placements" => Ok(Format::Placements),
            other => bail!("unknown format '{other}', expected svg, json or placements"),
        }
    }
}

#[derive(Debug, Default)]
pub struct CliArgs {
    pub input: Option<PathBuf>,
    pub items: Vec<String>,
    pub output: Option<PathBuf>,
    pub format: Option<Format>,
    pub spacing: Option<f64>,
    pub depth_limit: Option<DepthLimit>,
    pub palette: Option<Palette>,
    pub title: Option<String>,
    pub help: bool,
}

pub fn parse_args<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| anyhow!("{name} needs a value"))
        };
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--item" => parsed.items.push(value("--item")?),
            "-o" | "--output" => parsed.output = Some(PathBuf::from(value("--output")?)),
            "--format" => parsed.format = Some(Format::parse(&value("--format")?)?),
            "--spacing" => {
                let raw = value("--spacing")?;
                let spacing = raw
                    .parse()
                    .with_context(|| format!("--spacing: '{raw}' is not a number"))?;
                parsed.spacing = Some(spacing);
            }
            "--depth-limit" => {
                parsed.depth_limit = Some(match value("--depth-limit")?.as_str() {
                    "last" => DepthLimit::LastSide,
                    "max" => DepthLimit::MaxSide,
                    other => bail!("unknown depth limit '{other}', expected last or max"),
                })
            }
            "--palette" => {
                let raw = value("--palette")?;
                parsed.palette = Some(match raw.as_str() {
                    "default" => Palette::default(),
                    "dojo" => Palette::dojo(),
                    list => {
                        let specs: Vec<&str> = list.split(',').collect();
                        Palette::parse(&specs).with_context(|| format!("--palette '{list}'"))?
                    }
                });
            }
            "--title" => parsed.title = Some(value("--title")?),
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
            path => {
                if parsed.input.is_some() {
                    bail!("only one INPUT may be given");
                }
                parsed.input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_full_command_line() {
        let args = parse(&[
            "models.json",
            "--item",
            "extra=5",
            "-o",
            "out.svg",
            "--spacing",
            "2.5",
            "--depth-limit",
            "max",
            "--palette",
            "gold,#102030",
            "--title",
            "",
        ])
        .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("models.json")));
        assert_eq!(args.items, vec!["extra=5".to_string()]);
        assert_eq!(args.output, Some(PathBuf::from("out.svg")));
        assert_eq!(args.spacing, Some(2.5));
        assert_eq!(args.depth_limit, Some(DepthLimit::MaxSide));
        assert_eq!(args.palette.unwrap().len(), 2);
        assert_eq!(args.title.as_deref(), Some(""));
        assert!(args.format.is_none());
    }

    #[test]
    fn test_formats() {
        assert_eq!(parse(&["--format", "placements"]).unwrap().format, Some(Format::Placements));
        assert_eq!(parse(&["--format", "json"]).unwrap().format, Some(Format::SceneJson));
        assert!(parse(&["--format", "png"]).is_err());
    }

    #[test]
    fn test_errors() {
        assert!(parse(&["--spacing"]).is_err());
        assert!(parse(&["--spacing", "wide"]).is_err());
        assert!(parse(&["a.json", "b.json"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["--palette", "notacolor"]).is_err());
    }

    #[test]
    fn test_stdin_and_help() {
        let args = parse(&["-", "-h"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("-")));
        assert!(args.help);
    }
}
