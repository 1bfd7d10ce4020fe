use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::debug;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DelimArg {
    Comma,
    Tab,
    Semicolon,
    Pipe,
}

#[derive(Parser, Debug)]
#[command(name = "csvjson", about = "Convert a CSV file to a JSON array of objects", version)]
struct Args {
    /// Cell delimiter
    #[arg(long, value_enum, default_value_t = DelimArg::Comma)]
    delimiter: DelimArg,

    /// Arbitrary delimiter string (overrides --delimiter)
    #[arg(long, value_name = "STR")]
    separator: Option<String>,

    /// Treat blank lines as data instead of skipping them
    #[arg(long)]
    keep_empty_lines: bool,

    /// Keep whitespace around cells
    #[arg(long)]
    no_trim: bool,

    /// Text encoding label of the input file
    #[arg(long, default_value = "utf-8")]
    encoding: String,

    /// Emit single-line JSON instead of indented output
    #[arg(long)]
    compact: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Input CSV file
    input: PathBuf,
}

impl Args {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    fn options(&self) -> Result<csvjson::Options> {
        let delimiter = match &self.separator {
            Some(sep) => csvjson::Delimiter::from(sep.as_str()),
            None => match self.delimiter {
                DelimArg::Comma => csvjson::Delimiter::Comma,
                DelimArg::Tab => csvjson::Delimiter::Tab,
                DelimArg::Semicolon => csvjson::Delimiter::Semicolon,
                DelimArg::Pipe => csvjson::Delimiter::Pipe,
            },
        };
        let options = csvjson::Options::default()
            .with_delimiter(delimiter)
            .with_skip_empty_lines(!self.keep_empty_lines)
            .with_trim_cells(!self.no_trim)
            .with_encoding_label(&self.encoding)?;
        Ok(options)
    }
}

fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let level = args.log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csvjson={level},csvjson_cli={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args);

    let parser = csvjson::CsvParser::new(args.options()?);
    let rows = parser
        .parse(&args.input)
        .into_result()
        .with_context(|| format!("failed to convert {}", args.input.display()))?;
    debug!(rows = rows.len(), "parsed input");

    let json = if args.compact {
        serde_json::to_string(&rows)?
    } else {
        csvjson::to_json_string(&rows)?
    };

    match &args.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            writeln!(out, "{}", json)?;
            out.flush()?;
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}
