use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use haruue_codec::{Algorithm, UrlCodec};

#[derive(Parser)]
#[command(name = "haruue-codec", version, about = "Digest, Base64, URL and Unicode escape helpers")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the hex digest of the input bytes
    Digest {
        /// MD5, SHA-1 or SHA-256
        #[arg(short, long, default_value = "SHA-1")]
        algorithm: String,
        input: Option<String>,
    },

    /// Base64-encode the input bytes
    Base64Encode { input: Option<String> },

    /// Base64-decode the input and write the raw bytes to stdout
    Base64Decode {
        /// Reject malformed input instead of truncating it
        #[arg(long)]
        strict: bool,
        input: Option<String>,
    },

    /// URL-encode the input
    UrlEncode {
        #[arg(short, long, default_value = "UTF-8")]
        charset: String,
        input: Option<String>,
    },

    /// URL-decode the input
    UrlDecode {
        #[arg(short, long, default_value = "UTF-8")]
        charset: String,
        input: Option<String>,
    },

    /// Escape the input as \uXXXX sequences
    Escape { input: Option<String> },

    /// Replace \uXXXX sequences in the input with the characters they name
    Unescape { input: Option<String> },

    /// Exit with status 0 if the input looks like an e-mail address
    CheckEmail { input: Option<String> },
}

/// Result of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    /// The input failed a check; the process exits with status 1.
    Mismatch,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let outcome = run(cli, &mut io::stdin().lock(), &mut io::stdout().lock())?;
    Ok(match outcome {
        Outcome::Success => ExitCode::SUCCESS,
        Outcome::Mismatch => ExitCode::FAILURE,
    })
}

fn run(cli: Cli, input: &mut dyn Read, out: &mut dyn Write) -> anyhow::Result<Outcome> {
    match cli.command {
        Command::Digest { algorithm, input: arg } => {
            let algorithm: Algorithm = algorithm.parse()?;
            let data = read_bytes(arg, input)?;
            tracing::debug!(%algorithm, bytes = data.len(), "hashing input");
            writeln!(out, "{}", haruue_codec::digest_hex(algorithm, &data))?;
        }
        Command::Base64Encode { input: arg } => {
            let data = read_bytes(arg, input)?;
            writeln!(out, "{}", haruue_codec::base64_encode(&data))?;
        }
        Command::Base64Decode { strict, input: arg } => {
            let text = read_text(arg, input)?;
            let bytes = if strict {
                haruue_codec::base64_decode_strict(text.trim())?
            } else {
                haruue_codec::base64_decode(&text)
            };
            out.write_all(&bytes)
                .context("failed to write decoded bytes")?;
        }
        Command::UrlEncode { charset, input: arg } => {
            let codec = UrlCodec::from_label(&charset)?;
            writeln!(out, "{}", codec.encode(&read_text(arg, input)?))?;
        }
        Command::UrlDecode { charset, input: arg } => {
            let codec = UrlCodec::from_label(&charset)?;
            let text = read_text(arg, input)?;
            let decoded = codec
                .decode(&text)
                .with_context(|| format!("failed to URL-decode {:?}", text))?;
            writeln!(out, "{}", decoded)?;
        }
        Command::Escape { input: arg } => {
            writeln!(out, "{}", haruue_codec::native_to_ascii(&read_text(arg, input)?))?;
        }
        Command::Unescape { input: arg } => {
            writeln!(out, "{}", haruue_codec::ascii_to_native(&read_text(arg, input)?))?;
        }
        Command::CheckEmail { input: arg } => {
            let text = read_text(arg, input)?;
            if !haruue_codec::is_email(&text) {
                tracing::info!(input = %text, "not an e-mail address");
                return Ok(Outcome::Mismatch);
            }
        }
    }

    Ok(Outcome::Success)
}

/// Use the positional argument's bytes, or all of stdin untouched.
fn read_bytes(arg: Option<String>, input: &mut dyn Read) -> anyhow::Result<Vec<u8>> {
    if let Some(text) = arg {
        return Ok(text.into_bytes());
    }

    let mut data = Vec::new();
    input
        .read_to_end(&mut data)
        .context("failed to read stdin")?;
    Ok(data)
}

/// Use the positional argument, or read stdin as UTF-8 and drop one trailing newline.
fn read_text(arg: Option<String>, input: &mut dyn Read) -> anyhow::Result<String> {
    if let Some(text) = arg {
        return Ok(text);
    }

    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
