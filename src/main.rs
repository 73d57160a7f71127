use std::process;

use tracing_subscriber::EnvFilter;

use repolens::{
    cli::{self, Cli},
    error::{ErrorSeverity, LensError},
};

fn main() {
    init_tracing();

    let cli = Cli::parse_args();
    let exit_code = run_command(cli);

    process::exit(exit_code);
}

/// Initialize structured logging; `RUST_LOG` controls verbosity
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("repolens=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the command with proper error handling
fn run_command(cli: Cli) -> i32 {
    match cli::execute(cli) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("\nError: {}", err.user_message());

            match &err {
                LensError::Retrieval { .. } => {
                    eprintln!("Suggestion: Verify the repository URL and your network connection");
                }
                LensError::ConfigNotFound { .. } => {
                    eprintln!("Suggestion: Run 'repolens init' to create a default configuration file");
                }
                LensError::Storage { .. } => {
                    eprintln!("Suggestion: Check the history file path or pass --history-file");
                }
                _ => {}
            }

            match err.severity() {
                ErrorSeverity::Warning => 0,
                ErrorSeverity::Error => 1,
                ErrorSeverity::Critical => 2,
            }
        }
    }
}
