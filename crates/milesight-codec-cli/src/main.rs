mod logging;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use clap::{Parser, Subcommand};
use milesight_codec_core::{CodecRegistry, DecodeError, DecodeOptions, EncodeError, Telemetry};
use serde_json::Value;
use tracing::debug;

use crate::logging::{LogFormat, LogLevel, init_logging};

#[derive(Parser, Debug)]
#[command(name = "milesight-codec")]
#[command(version)]
#[command(
    about = "Decode Milesight LoRaWAN uplinks and encode downlink commands.",
    long_about = None,
    after_help = "Examples:\n  milesight-codec decode --model wt101 017564036710ff\n  milesight-codec encode --model wt101 '{\"report_interval\": 60}'\n  milesight-codec models"
)]
struct Cli {
    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr); overrides RUST_LOG, defaults to info.
    #[arg(long, value_name = "LEVEL", global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode an uplink payload into telemetry JSON.
    Decode {
        /// Device model, e.g. wt101
        #[arg(short = 'm', long)]
        model: String,

        /// Payload bytes as hex (spaces, ':' and '-' separators allowed)
        payload: String,

        /// Read the payload as base64 instead of hex
        #[arg(long)]
        base64: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Fail on unknown channels and truncated values instead of stopping early
        #[arg(long)]
        strict: bool,
    },
    /// Encode a JSON command object into downlink bytes.
    Encode {
        /// Device model, e.g. wt101
        #[arg(short = 'm', long)]
        model: String,

        /// Command object as inline JSON
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        command: Option<String>,

        /// Read the command object from a JSON file
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,

        /// Print base64 instead of lower-case hex
        #[arg(long)]
        base64: bool,
    },
    /// List supported device models.
    Models,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let result = match cli.command {
        Commands::Decode {
            model,
            payload,
            base64,
            pretty,
            strict,
        } => cmd_decode(&model, &payload, base64, pretty, strict),
        Commands::Encode {
            model,
            command,
            file,
            base64,
        } => cmd_encode(&model, command, file, base64),
        Commands::Models => cmd_models(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

impl From<DecodeError> for CliError {
    fn from(err: DecodeError) -> Self {
        let hint = match &err {
            DecodeError::UnsupportedModel { .. } => Some(models_hint()),
            DecodeError::UnknownChannel { .. } | DecodeError::Truncated { .. } => {
                Some("drop --strict to keep the fields decoded before this point".to_string())
            }
            _ => None,
        };
        CliError::new(err.to_string(), hint)
    }
}

impl From<EncodeError> for CliError {
    fn from(err: EncodeError) -> Self {
        let hint = match &err {
            EncodeError::UnsupportedModel { .. } => Some(models_hint()),
            EncodeError::EmptyPayload => Some("pass a non-empty JSON object".to_string()),
            EncodeError::FieldValidation { field, .. } => {
                Some(format!("fix `{field}` and retry; no bytes were produced"))
            }
            _ => None,
        };
        CliError::new(err.to_string(), hint)
    }
}

fn models_hint() -> String {
    "run `milesight-codec models` to list supported models".to_string()
}

fn cmd_decode(
    model: &str,
    payload: &str,
    base64: bool,
    pretty: bool,
    strict: bool,
) -> Result<(), CliError> {
    let bytes = if base64 {
        parse_base64(payload)?
    } else {
        parse_hex(payload)?
    };
    debug!(model, len = bytes.len(), "decoding payload");

    let options = if strict {
        DecodeOptions::strict()
    } else {
        DecodeOptions::default()
    };
    let telemetry = milesight_codec_core::decode_with(model, &bytes, &options)?;
    println!("{}", serialize_telemetry(&telemetry, pretty)?);
    Ok(())
}

fn cmd_encode(
    model: &str,
    command: Option<String>,
    file: Option<PathBuf>,
    base64: bool,
) -> Result<(), CliError> {
    let text = match (command, file) {
        (Some(inline), _) => inline,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read command file: {}", path.display()))?,
        (None, None) => {
            return Err(CliError::new(
                "missing command",
                Some("pass the command JSON inline or use -f/--file".to_string()),
            ));
        }
    };
    let command: Value = serde_json::from_str(&text).map_err(|err| {
        CliError::new(
            format!("invalid command JSON: {err}"),
            Some("the command must be a JSON object, e.g. '{\"reboot\": 1}'".to_string()),
        )
    })?;

    let bytes = milesight_codec_core::encode(model, &command)?;
    debug!(model, len = bytes.len(), "encoded command");
    if base64 {
        println!("{}", STANDARD.encode(&bytes));
    } else {
        println!("{}", hex::encode(&bytes));
    }
    Ok(())
}

fn cmd_models() -> Result<(), CliError> {
    for model in CodecRegistry::global().models() {
        println!("{model}");
    }
    Ok(())
}

fn serialize_telemetry(telemetry: &Telemetry, pretty: bool) -> Result<String, CliError> {
    if pretty {
        serde_json::to_string_pretty(telemetry)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(telemetry)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

/// Each separated group may carry its own `0x` prefix.
fn parse_hex(input: &str) -> Result<Vec<u8>, CliError> {
    let digits: String = input
        .split(|c: char| c.is_whitespace() || c == ':' || c == '-')
        .map(|group| {
            group
                .strip_prefix("0x")
                .or_else(|| group.strip_prefix("0X"))
                .unwrap_or(group)
        })
        .collect();
    hex::decode(&digits).map_err(|err| {
        CliError::new(
            format!("invalid hex payload: {err}"),
            Some("use pairs of hex digits, or pass --base64 for base64 input".to_string()),
        )
    })
}

fn parse_base64(input: &str) -> Result<Vec<u8>, CliError> {
    STANDARD.decode(input.trim()).map_err(|err| {
        CliError::new(
            format!("invalid base64 payload: {err}"),
            Some("drop --base64 to pass hex input".to_string()),
        )
    })
}
