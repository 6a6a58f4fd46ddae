use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use coordforge_core::CoordinateNormalizer;

mod config;
mod error;

use error::CliError;

#[derive(Parser)]
#[command(name = "coordforge")]
#[command(about = "Normalize Gerber/NC-drill coordinate tokens to 1000x the file unit")]
struct Args {
    /// Coordinate tokens such as 012500 or -1.25 (read from stdin when omitted)
    #[arg(allow_hyphen_values = true)]
    tokens: Vec<String>,

    /// Zero suppression of undelimited tokens: T (trailing) or L (leading)
    #[arg(long)]
    zero: Option<String>,

    /// Digit counts of undelimited tokens, as LEADING,TRAILING
    #[arg(long, value_delimiter = ',')]
    places: Option<Vec<f64>>,

    /// JSON format description, e.g. {"zero": "L", "places": [2, 4]}
    #[arg(long)]
    format_file: Option<PathBuf>,

    /// Print NaN for bad tokens instead of stopping
    #[arg(long)]
    lossy: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env().init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("coordforge: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let spec = config::resolve_format_spec(args.format_file.as_deref(), args.zero, args.places)?;
    let normalizer = CoordinateNormalizer::from_spec(&spec)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.tokens.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            write_normalized(&normalizer, &tokens, args.lossy, &mut out)?;
        }
        Ok(())
    } else {
        write_normalized(&normalizer, &args.tokens, args.lossy, &mut out)
    }
}

/// Write one normalized value per line
fn write_normalized<T: AsRef<str>>(
    normalizer: &CoordinateNormalizer,
    tokens: &[T],
    lossy: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    for token in tokens {
        let token = token.as_ref();
        let value = if lossy {
            normalizer.normalize_or_nan(token)
        } else {
            normalizer.normalize(token)?
        };
        writeln!(out, "{}", value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coordforge_core::{CoordinateFormat, NormalizeError};

    fn render(format: CoordinateFormat, tokens: &[&str], lossy: bool) -> (String, Result<(), CliError>) {
        let normalizer = CoordinateNormalizer::new(format);
        let mut out = Vec::new();
        let result = write_normalized(&normalizer, tokens, lossy, &mut out);
        (String::from_utf8(out).unwrap(), result)
    }

    #[test]
    fn test_writes_one_value_per_line() {
        let (out, result) = render(CoordinateFormat::leading(2, 4), &["15000", "-2500", "1.5"], false);
        assert!(result.is_ok());
        assert_eq!(out, "1500\n-250\n1500\n");
    }

    #[test]
    fn test_strict_stops_at_bad_token() {
        let (out, result) = render(CoordinateFormat::Unset, &["1.5", "1.2.3", "2"], false);
        assert_eq!(out, "1500\n");
        assert!(matches!(
            result,
            Err(CliError::Normalize(NormalizeError::MalformedToken { .. }))
        ));
    }

    #[test]
    fn test_lossy_prints_nan() {
        let (out, result) = render(CoordinateFormat::Unset, &["1.5", "1.2.3", "2"], true);
        assert!(result.is_ok());
        assert_eq!(out, "1500\nNaN\n2000\n");
    }

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from([
            "coordforge", "--zero", "T", "--places", "2,4", "012500", "-01",
        ])
        .unwrap();
        assert_eq!(args.zero.as_deref(), Some("T"));
        assert_eq!(args.places, Some(vec![2.0, 4.0]));
        assert_eq!(args.tokens, vec!["012500", "-01"]);
        assert!(!args.lossy);
    }
}
