use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use wavecore::render::OutputFormat;
use wavecore::TableKind;
use workflow::config::WavegenConfig;
use workflow::runner::Runner;

mod workflow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputArg {
    Sine,
    Periods,
}

impl From<OutputArg> for TableKind {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Sine => TableKind::Sine,
            OutputArg::Periods => TableKind::Periods,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    C,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::C => OutputFormat::C,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate lookup tables for the AVR wavetable synth")]
struct Args {
    /// Table to print to stdout
    #[arg(long, value_enum)]
    output: OutputArg,
    /// Rendering of the table
    #[arg(long, value_enum, default_value_t = FormatArg::C)]
    format: FormatArg,
    /// Override table constants from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log min/max/mean (and spectrum for sine) to stderr
    #[arg(long, default_value_t = false)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => WavegenConfig::load(path)?,
        None => WavegenConfig::default(),
    };

    let runner = Runner::new(config).with_summary(args.summary);
    let text = runner.execute(args.output.into(), args.format.into())?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(text.as_bytes())
        .context("writing table to stdout")?;
    handle.flush().context("flushing stdout")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_required() {
        assert!(Args::try_parse_from(["wavegen"]).is_err());
    }

    #[test]
    fn unknown_output_is_rejected() {
        let err = Args::try_parse_from(["wavegen", "--output", "foo"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn defaults_to_c_without_summary() {
        let args = Args::try_parse_from(["wavegen", "--output", "periods"]).unwrap();
        assert_eq!(args.output, OutputArg::Periods);
        assert_eq!(args.format, FormatArg::C);
        assert!(args.config.is_none());
        assert!(!args.summary);
    }

    #[test]
    fn accepts_every_flag() {
        let args = Args::try_parse_from([
            "wavegen",
            "--output",
            "sine",
            "--format",
            "json",
            "--config",
            "tables.yaml",
            "--summary",
        ])
        .unwrap();
        assert_eq!(TableKind::from(args.output), TableKind::Sine);
        assert_eq!(OutputFormat::from(args.format), OutputFormat::Json);
        assert_eq!(args.config, Some(PathBuf::from("tables.yaml")));
        assert!(args.summary);
    }
}
