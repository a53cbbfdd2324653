use crate::callout::{Callout, CalloutContent};
use crate::config::{Config, load_config, parse_platform};
use crate::error::Error;
use crate::geometry::{Point, Viewport, parse_pair};
use crate::geometry_dump::write_geometry_dump;
use crate::position::LeaderPosition;
use crate::render::{render_svg, write_output_png, write_output_svg};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "calloutr", version, about = "Place a callout around an anchor point and render its outline")]
pub struct Args {
    /// Anchor point the leader points at, as X,Y
    #[arg(short = 'a', long = "anchor", allow_hyphen_values = true)]
    pub anchor: String,

    /// Screen-space offset added to the anchor, as DX,DY
    #[arg(long = "offset", allow_hyphen_values = true)]
    pub offset: Option<String>,

    /// Viewport size, as WxH. Defaults to the config's width/height.
    #[arg(short = 'v', long = "viewport")]
    pub viewport: Option<String>,

    /// Natural content size reported by the text layout, as WxH
    #[arg(long = "content")]
    pub content: Option<String>,

    /// Title line
    #[arg(short = 't', long = "title", default_value = "")]
    pub title: String,

    /// Detail line
    #[arg(short = 'd', long = "detail", default_value = "")]
    pub detail: String,

    /// Leader position (automatic, top, upperLeft, ...)
    #[arg(short = 'p', long = "position")]
    pub position: Option<String>,

    /// Platform whose padding rules apply (desktop, android, ios)
    #[arg(long = "platform")]
    pub platform: Option<String>,

    /// Config JSON file (style, paint, leaderPosition)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Output file. Defaults to stdout for SVG and JSON.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Log placement decisions to stderr
    #[arg(long = "verbose")]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
    Json,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = load_config(args.config.as_deref())?;
    apply_args(&mut config, &args)?;

    let viewport = Viewport::new(config.render.width, config.render.height);
    let anchor = parse_point(&args.anchor, "--anchor")?;
    let content = match args.content.as_deref() {
        Some(raw) => {
            let (width, height) = parse_size(raw, "--content")?;
            CalloutContent::new(&args.title, &args.detail).with_natural_size(width, height)
        }
        None => CalloutContent::new(&args.title, &args.detail),
    };

    let mut callout = Callout::new(config.style.clone());
    callout.set_viewport(viewport);
    callout.set_content(content.clone());
    callout.set_leader_position(config.leader_position);
    if let Some(raw) = args.offset.as_deref() {
        let offset = parse_point(raw, "--offset")?;
        callout.set_screen_offset(offset.x, offset.y);
    }
    callout.set_anchor(anchor);
    let geometry = callout.show();

    match args.output_format {
        OutputFormat::Svg => {
            let svg = render_svg(geometry, &content, &config.style, &config.paint, viewport);
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            let output = args
                .output
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("Output path required for png output"))?;
            let svg = render_svg(geometry, &content, &config.style, &config.paint, viewport);
            write_output_png(&svg, output, &config.paint, viewport)?;
        }
        OutputFormat::Json => {
            write_geometry_dump(args.output.as_deref(), geometry, viewport)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn apply_args(config: &mut Config, args: &Args) -> Result<()> {
    if let Some(raw) = args.viewport.as_deref() {
        let (width, height) = parse_size(raw, "--viewport")?;
        config.render.width = width;
        config.render.height = height;
    }
    if let Some(raw) = args.position.as_deref() {
        config.leader_position = raw.parse::<LeaderPosition>()?;
    }
    if let Some(raw) = args.platform.as_deref() {
        config.style.platform = parse_platform(raw)?;
    }
    Ok(())
}

fn parse_point(input: &str, what: &'static str) -> Result<Point, Error> {
    parse_pair(input, &[',', ' '])
        .map(|(x, y)| Point::new(x, y))
        .ok_or_else(|| Error::InvalidPair {
            what,
            input: input.to_string(),
        })
}

fn parse_size(input: &str, what: &'static str) -> Result<(f32, f32), Error> {
    parse_pair(input, &['x', 'X', ',', ' ']).ok_or_else(|| Error::InvalidPair {
        what,
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["calloutr", "--anchor", "390,150"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn parses_points_and_sizes() {
        assert_eq!(parse_point("10,-20", "--anchor").unwrap(), Point::new(10.0, -20.0));
        assert_eq!(parse_size("400x300", "--viewport").unwrap(), (400.0, 300.0));
        assert!(matches!(
            parse_point("10", "--anchor"),
            Err(Error::InvalidPair { what: "--anchor", .. })
        ));
    }

    #[test]
    fn flags_override_config() {
        let args = args(&["--viewport", "400x300", "--position", "upper-right", "--platform", "ios"]);
        let mut config = Config::default();
        apply_args(&mut config, &args).unwrap();
        assert_eq!(config.render.width, 400.0);
        assert_eq!(config.render.height, 300.0);
        assert_eq!(config.leader_position, LeaderPosition::UpperRight);
        assert_eq!(config.style.platform, crate::style::Platform::Ios);
    }

    #[test]
    fn bad_position_flag_is_an_error() {
        let args = args(&["--position", "diagonal"]);
        let mut config = Config::default();
        assert!(apply_args(&mut config, &args).is_err());
    }

    #[test]
    fn negative_offset_parses() {
        let args = args(&["--offset", "-5,10", "-e", "json"]);
        assert_eq!(args.offset.as_deref(), Some("-5,10"));
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
