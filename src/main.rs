//! shop: command-line client for the Shop marketplace API
//!
//! Entry point for the shop application.

use shop_sdk::config::{Cli, Command, ValidatedConfig, init_path, write_default_config};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    // Handle init subcommand
    if let Command::Init { output } = &cli.command {
        return handle_init(output.as_deref());
    }

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to create Tokio runtime: {e}");
            return exit_code::runtime_error();
        }
    };

    if let Command::VerifySignature {
        secret,
        signature,
        payload_file,
    } = &cli.command
    {
        return runtime.block_on(handle_verify(payload_file.as_deref(), signature, secret));
    }

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };
    tracing::debug!("{config}");

    runtime.block_on(run_command(&config, &cli.command))
}

/// Handles the `init` subcommand.
fn handle_init(output: Option<&std::path::Path>) -> ExitCode {
    let result = init_path(output).and_then(|path| write_default_config(&path).map(|()| path));

    match result {
        Ok(path) => {
            println!("Configuration template written to: {}", path.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Handles the `verify-signature` subcommand.
async fn handle_verify(
    payload_file: Option<&std::path::Path>,
    signature: &str,
    secret: &str,
) -> ExitCode {
    match run::check_signature(payload_file, signature, secret).await {
        Ok(true) => {
            println!("Signature valid");
            exit_code::SUCCESS
        }
        Ok(false) => {
            eprintln!("Signature mismatch");
            exit_code::signature_mismatch()
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::runtime_error()
        }
    }
}

/// Runs an API subcommand and prints its result as pretty JSON.
///
/// Excluded from coverage - requires network access.
#[cfg(not(tarpaulin_include))]
async fn run_command(config: &ValidatedConfig, command: &Command) -> ExitCode {
    let client = config.client();

    let output = run::execute(&client, command)
        .await
        .and_then(|value| serde_json::to_string_pretty(&value).map_err(run::RunError::Render));

    match output {
        Ok(json) => {
            println!("{json}");
            exit_code::SUCCESS
        }
        Err(e) => {
            tracing::error!("Command failed: {e}");
            exit_code::runtime_error()
        }
    }
}
