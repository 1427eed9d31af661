//! # attest CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Attestation registry CLI.
///
/// Keeps a registry snapshot in a JSON file and applies authority-only
/// writes and public reads to it.
#[derive(Parser, Debug)]
#[command(name = "attest", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Create a snapshot file with a fresh or given authority.
    Init(attest_cli::mutate::InitArgs),
    /// Publish a new attestation record.
    Add(attest_cli::mutate::ProofArgs),
    /// Replace the proof hash of an active record.
    Update(attest_cli::mutate::ProofArgs),
    /// Revoke an active record (soft delete, permanent).
    Revoke(attest_cli::mutate::RevokeArgs),
    /// Hand registry authority to a successor.
    Transfer(attest_cli::mutate::TransferArgs),
    /// Check a claimed proof against the stored one.
    Verify(attest_cli::query::VerifyArgs),
    /// Show the record for a (subject, category) pair.
    Get(attest_cli::query::GetArgs),
    /// Derive the record key for a (subject, category) pair.
    DeriveKey(attest_cli::query::DeriveKeyArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => attest_cli::mutate::init(&args)?,
        Commands::Add(args) => attest_cli::mutate::add(&args)?,
        Commands::Update(args) => attest_cli::mutate::update(&args)?,
        Commands::Revoke(args) => attest_cli::mutate::revoke(&args)?,
        Commands::Transfer(args) => attest_cli::mutate::transfer(&args)?,
        Commands::Verify(args) => {
            if !attest_cli::query::verify(&args)? {
                std::process::exit(1);
            }
        }
        Commands::Get(args) => attest_cli::query::get(&args)?,
        Commands::DeriveKey(args) => attest_cli::query::derive_key(&args)?,
    }

    Ok(())
}
