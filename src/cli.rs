use crate::config::load_config;
use crate::flow::parse_flow_spec;
use crate::layout::compute_layout;
use crate::layout_dump::write_layout_dump;
use crate::render::{render_svg, write_output_svg};
#[cfg(feature = "png")]
use crate::render::write_output_png;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "sankey-arrow",
    version,
    about = "Render a flows document as a Sankey-style merge arrow"
)]
pub struct Args {
    /// Flows file (.json/.json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme name, themeVariables, layout constants)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Canvas width override (content is not rescaled)
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Canvas height override (content is not rescaled)
    #[arg(short = 'H', long = "height")]
    pub height: Option<f32>,

    /// Write the computed layout as JSON to this path
    #[arg(long = "dump-layout")]
    pub dump_layout: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    #[cfg(feature = "png")]
    Png,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let input = read_input(args.input.as_deref())?;
    let mut spec = parse_flow_spec(&input)?;
    // CLI overrides beat the values carried in the flows file.
    if let Some(width) = args.width {
        spec.width = Some(width);
    }
    if let Some(height) = args.height {
        spec.height = Some(height);
    }

    let Some(layout) = compute_layout(&spec, &config.layout) else {
        // Nothing to draw still succeeds, with empty output.
        write_output_svg("", args.output.as_deref())?;
        return Ok(());
    };

    if let Some(path) = args.dump_layout.as_deref() {
        write_layout_dump(path, &layout, &spec)?;
    }

    let svg = render_svg(&layout, &config.theme);
    match args.output_format {
        OutputFormat::Svg => {
            write_output_svg(&svg, args.output.as_deref())?;
        }
        #[cfg(feature = "png")]
        OutputFormat::Png => {
            let output = ensure_output(&args.output, "png")?;
            write_output_png(&svg, &output, &config.render)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(feature = "png")]
fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}
