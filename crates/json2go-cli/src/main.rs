//! `json2go` CLI — turn an example JSON document into a Go type declaration.
//!
//! ## Usage
//!
//! ```sh
//! # stdin → stdout
//! echo '{"id":1,"name":"Bob"}' | json2go
//!
//! # Named root type, file to file
//! json2go -n User -i user.json -o user.go
//!
//! # Emit the raw {"go": ..., "error": ...} result object
//! json2go --json -i payload.json
//!
//! # Refuse inputs over 1 MiB
//! json2go --max-bytes 1048576 -i big.json
//! ```
//!
//! Set `RUST_LOG=debug` to see inference diagnostics on stderr.

use anyhow::{Context, Result};
use clap::Parser;
use json2go_core::ConvertOptions;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "json2go",
    version,
    about = "Generate a Go struct declaration from example JSON"
)]
struct Cli {
    /// Input JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Name of the top-level Go type
    #[arg(short = 'n', long = "name")]
    type_name: Option<String>,

    /// Reject inputs larger than this many bytes
    #[arg(long)]
    max_bytes: Option<usize>,

    /// Print the result as a JSON object with `go` and `error` fields
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn options(&self) -> ConvertOptions {
        ConvertOptions {
            type_name: self.type_name.clone(),
            max_input_bytes: self.max_bytes,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.options();
    let json = read_input(cli.input.as_deref())?;
    tracing::debug!(bytes = json.len(), input = ?cli.input, "read input");

    let rendered = if cli.json {
        // Conversion errors are part of the payload here, not a failure.
        let conversion = json2go_core::convert_with(&json, &options);
        if let Some(err) = &conversion.error {
            tracing::warn!(error = %err, "conversion failed");
        }
        serde_json::to_string_pretty(&conversion)?
    } else {
        json2go_core::try_convert(&json, &options).context("Failed to convert JSON to Go")?
    };

    write_output(cli.output.as_deref(), &rendered)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{}\n", content))
                .with_context(|| format!("Failed to write file: {}", path))?;
            tracing::debug!(path, "wrote declaration");
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
