//! # rsa-verify
//!
//! Host harness around the verification entrypoint.
//!
//! Reads one instruction (raw bytes or hex) from a file or stdin, verifies
//! it, prints the outcome and exits with the entrypoint's result code.
//!
//! ```bash
//! rsa-verify instruction.bin
//! rsa-verify --hex instruction.hex
//! rsa-verify --batch instructions.txt     # one hex instruction per line
//! cat instruction.hex | rsa-verify --hex --production
//! ```
//!
//! ## Configuration
//!
//! Defaults, then an optional JSON file (`--config`), then environment
//! variables (`RSA_VERIFY_*`), then `--production`.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use rsa_signature_verification::{
    result_code, DeploymentProfile, HostError, InstructionHandler, RsaVerifier, VerifierConfig,
};

/// rsa-verify: RSA signature instruction verifier
#[derive(Parser, Debug)]
#[command(name = "rsa-verify")]
#[command(about = "Verify RSA PKCS#1 v1.5 signature instructions")]
struct Args {
    /// Instruction file (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Input is hex text rather than raw bytes
    #[arg(long)]
    hex: bool,

    /// Input holds one hex instruction per line
    #[arg(long, conflicts_with = "hex")]
    batch: bool,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use the production profile (NAIVE hashing disabled)
    #[arg(long)]
    production: bool,
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Load configuration from file and environment.
fn load_config(args: &Args) -> Result<VerifierConfig> {
    let config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            parse_config(&text)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => VerifierConfig::default(),
    };

    let mut config = config
        .with_env_overrides()
        .context("invalid RSA_VERIFY_* environment override")?;

    if args.production {
        config.profile = DeploymentProfile::Production;
        config.allow_naive_hash = false;
    }

    config.validate_for_production()?;
    Ok(config)
}

fn parse_config(text: &str) -> Result<VerifierConfig> {
    Ok(serde_json::from_str(text)?)
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Decode hex text, ignoring whitespace and an optional `0x` prefix.
fn decode_hex(text: &str) -> Result<Vec<u8>> {
    let compact: String = text.split_whitespace().collect();
    let digits = compact.strip_prefix("0x").unwrap_or(&compact);
    hex::decode(digits).context("input is not valid hex")
}

fn describe(result: &Result<(), HostError>) -> String {
    match result {
        Ok(()) => "ACCEPTED".to_string(),
        Err(HostError::SignatureRejected) => "REJECTED".to_string(),
        Err(e) => format!("ERROR {}: {e}", e.code()),
    }
}

fn exit_code(result: &Result<(), HostError>) -> ExitCode {
    ExitCode::from(u8::try_from(result_code(result)).unwrap_or(u8::MAX))
}

/// Verify one hex instruction per line, skipping blank lines.
///
/// A line that is not valid hex goes through as an empty instruction, so it
/// is reported as malformed in its own slot instead of failing the batch.
fn verify_batch(
    handler: &InstructionHandler<RsaVerifier>,
    text: &str,
) -> Result<Vec<Result<(), HostError>>, HostError> {
    let instructions: Vec<Vec<u8>> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, line)| {
            decode_hex(line).unwrap_or_else(|e| {
                warn!(index, error = %e, "Batch line is not valid hex");
                Vec::new()
            })
        })
        .collect();
    let refs: Vec<&[u8]> = instructions.iter().map(Vec::as_slice).collect();

    handler.process_batch(&refs)
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    info!(
        profile = ?config.profile,
        allow_naive_hash = config.allow_naive_hash,
        max_instruction_len = config.max_instruction_len,
        "Configuration loaded"
    );

    let handler = InstructionHandler::new(RsaVerifier::new(config.clone()), &config);
    let input = read_input(args.input.as_deref())?;

    if args.batch {
        let text = String::from_utf8(input).context("batch input is not UTF-8")?;
        let results = verify_batch(&handler, &text)?;
        for (index, result) in results.iter().enumerate() {
            println!("{index}: {}", describe(result));
        }

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(total = results.len(), failed, "Batch complete");
        return Ok(if failed == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let data = if args.hex {
        decode_hex(std::str::from_utf8(&input).context("hex input is not UTF-8")?)?
    } else {
        input
    };

    let result = handler.process(&data);
    println!("{}", describe(&result));
    Ok(exit_code(&result))
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    init_tracing()?;

    run(args)
}
