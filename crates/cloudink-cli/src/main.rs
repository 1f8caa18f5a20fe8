//! `cloudink`: generate hand-drawn cloud outlines from the command line.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use cloudink_core::export::svg_document;
use cloudink_core::{CloudParams, DashStyle, ShapeStyle, SizeStyle};
use env_logger::Env;
use peniko::Color;

#[derive(Parser)]
#[command(name = "cloudink")]
#[command(about = "Seeded hand-drawn cloud outlines", long_about = None)]
#[command(version)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the single-stroke SVG path data
    Path {
        #[command(flatten)]
        cloud: CloudArgs,
    },

    /// Print the double-stroke "inky" SVG path data
    Inky {
        #[command(flatten)]
        cloud: CloudArgs,
    },

    /// Print the outline polygon
    Outline {
        #[command(flatten)]
        cloud: CloudArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the bump arcs as JSON
    Arcs {
        #[command(flatten)]
        cloud: CloudArgs,
    },

    /// Write a standalone SVG document
    Svg {
        #[command(flatten)]
        cloud: CloudArgs,

        /// Stroke style
        #[arg(long, default_value = "draw")]
        dash: DashArg,

        /// Fill color as #rrggbb (no fill when omitted)
        #[arg(long)]
        fill: Option<String>,

        /// Space around the outline
        #[arg(long, default_value_t = 8.0)]
        padding: f64,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct CloudArgs {
    /// JSON parameter file; other flags override its fields
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    params: Option<PathBuf>,

    /// Width of the cloud's box
    #[arg(long)]
    width: Option<f64>,

    /// Height of the cloud's box
    #[arg(long)]
    height: Option<f64>,

    /// Seed string for the jitter
    #[arg(long)]
    seed: Option<String>,

    /// Size class: s, m, l or xl
    #[arg(long)]
    size: Option<SizeStyle>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum DashArg {
    Draw,
    Solid,
    Dashed,
    Dotted,
}

impl From<DashArg> for DashStyle {
    fn from(dash: DashArg) -> Self {
        match dash {
            DashArg::Draw => DashStyle::Draw,
            DashArg::Solid => DashStyle::Solid,
            DashArg::Dashed => DashStyle::Dashed,
            DashArg::Dotted => DashStyle::Dotted,
        }
    }
}

impl CloudArgs {
    /// Merge the parameter file (if any) with command-line overrides.
    fn resolve(&self) -> Result<CloudParams> {
        let mut params = match &self.params {
            Some(path) => CloudParams::load(path)?,
            None => {
                let (Some(width), Some(height)) = (self.width, self.height) else {
                    bail!("--width and --height are required unless --params is given");
                };
                CloudParams::new(width, height, "", SizeStyle::default())
            }
        };

        if let Some(width) = self.width {
            params.width = width;
        }
        if let Some(height) = self.height {
            params.height = height;
        }
        if let Some(seed) = &self.seed {
            params.seed = seed.clone();
        }
        if let Some(size) = self.size {
            params.size = size;
        }

        params.validate()?;
        log::debug!("Resolved parameters: {:?}", params);
        Ok(params)
    }
}

fn parse_hex_color(hex: &str) -> Result<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        bail!("Invalid color {hex:?}, expected #rrggbb");
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).with_context(|| format!("Invalid color {hex:?}"))
    };
    Ok(Color::from_rgba8(channel(0)?, channel(2)?, channel(4)?, 255))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Path { cloud } => {
            let mut params = cloud.resolve()?;
            params.inky = false;
            writeln!(stdout, "{}", params.svg_path())?;
        }
        Commands::Inky { cloud } => {
            let mut params = cloud.resolve()?;
            params.inky = true;
            writeln!(stdout, "{}", params.svg_path())?;
        }
        Commands::Outline { cloud, format } => {
            let outline = cloud.resolve()?.outline();
            match format {
                OutputFormat::Text => {
                    for point in &outline {
                        writeln!(stdout, "{},{}", point.x, point.y)?;
                    }
                }
                OutputFormat::Json => {
                    writeln!(stdout, "{}", serde_json::to_string_pretty(&outline)?)?;
                }
            }
        }
        Commands::Arcs { cloud } => {
            let arcs = cloud.resolve()?.arcs();
            writeln!(stdout, "{}", serde_json::to_string_pretty(&arcs)?)?;
        }
        Commands::Svg {
            cloud,
            dash,
            fill,
            padding,
            output,
        } => {
            let mut params = cloud.resolve()?;
            let dash = DashStyle::from(dash);
            params.inky = dash.is_inky();
            let mut style = ShapeStyle {
                size: params.size,
                dash,
                ..ShapeStyle::default()
            };
            style.set_fill(fill.as_deref().map(parse_hex_color).transpose()?);
            let svg = svg_document(&params, &style, padding);
            match output {
                Some(path) => {
                    fs::write(&path, svg)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    log::info!("Wrote {}", path.display());
                }
                None => stdout.write_all(svg.as_bytes())?,
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_resolve() {
        let cli = Cli::try_parse_from([
            "cloudink", "path", "--width", "200", "--height", "100", "--seed", "abc", "--size", "xl",
        ])
        .unwrap();
        let Commands::Path { cloud } = cli.command else {
            panic!("expected path command");
        };
        let params = cloud.resolve().unwrap();
        assert_eq!(params, CloudParams::new(200.0, 100.0, "abc", SizeStyle::Xl));
    }

    #[test]
    fn test_missing_dimensions() {
        let cli = Cli::try_parse_from(["cloudink", "arcs", "--width", "10"]).unwrap();
        let Commands::Arcs { cloud } = cli.command else {
            panic!("expected arcs command");
        };
        assert!(cloud.resolve().is_err());
    }

    #[test]
    fn test_invalid_dimension_rejected() {
        let cli = Cli::try_parse_from(["cloudink", "path", "--width", "0", "--height", "10"]).unwrap();
        let Commands::Path { cloud } = cli.command else {
            panic!("expected path command");
        };
        assert!(cloud.resolve().is_err());
    }

    #[test]
    fn test_unknown_size_rejected_by_parser() {
        assert!(
            Cli::try_parse_from(["cloudink", "path", "--width", "1", "--height", "1", "--size", "huge"])
                .is_err()
        );
    }

    #[test]
    fn test_parse_hex_color() {
        let rgba = parse_hex_color("#10ff00").unwrap().to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (16, 255, 0, 255));
        let rgba = parse_hex_color("abcdef").unwrap().to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b), (171, 205, 239));
        assert!(parse_hex_color("#abc").is_err());
        assert!(parse_hex_color("#gg0000").is_err());
    }
}
