//! rawpix CLI: raw packed-pixel dump in, PNG out.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use log::info;

use rawpix::{PngEncoder, RawFormat, convert, load_raw};

#[derive(Parser, Debug)]
#[command(name = "rawpix", version, about = "Convert raw packed-pixel dumps to PNG")]
struct Cli {
    /// Raw input pixel dump (headerless)
    input: PathBuf,

    /// Output PNG path
    output: PathBuf,

    /// Source pixel layout
    #[arg(long, default_value_t = RawFormat::Bgra4444)]
    format: RawFormat,

    /// Image width in pixels; without it, square dimensions are inferred
    /// from the file size
    #[arg(long, requires = "height")]
    width: Option<usize>,

    /// Image height in pixels
    #[arg(long, requires = "width")]
    height: Option<usize>,
}

/// Exit code for a parse outcome that never reaches `run`: 0 for the
/// `--help`/`--version` display paths, 1 for usage mistakes (instead of
/// clap's default 2, matching every other failure).
fn parse_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        process::exit(parse_exit_code(&err));
    });

    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let dims = cli.width.zip(cli.height);

    let raw = load_raw(&cli.input, cli.format, dims)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    info!(
        "{} pixels, {}x{}, format {}",
        raw.pixels(),
        raw.width,
        raw.height,
        raw.format
    );

    let rgba = convert(&raw)?;
    drop(raw);

    PngEncoder
        .write_rgba8(rgba.as_ref(), &cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    println!("PNG image written to {}", cli.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    #[test]
    fn help_and_version_exit_zero() {
        let err = parse(&["rawpix", "--help"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), 0);
        let err = parse(&["rawpix", "--version"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), 0);
    }

    #[test]
    fn usage_mistakes_exit_one() {
        // Missing arguments.
        let err = parse(&["rawpix"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), 1);
        // Unknown format value.
        let err = parse(&["rawpix", "--format", "rgb565", "in.raw", "out.png"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), 1);
        // --width without --height.
        let err = parse(&["rawpix", "--width", "4", "in.raw", "out.png"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), 1);
    }

    #[test]
    fn explicit_dimensions_parse_together() {
        let cli = parse(&[
            "rawpix", "--format", "argb8888", "--width", "4", "--height", "3", "in.raw", "out.png",
        ])
        .unwrap();
        assert_eq!(cli.format, RawFormat::Argb8888);
        assert_eq!(cli.width.zip(cli.height), Some((4, 3)));
    }
}
