// bidmatrix/src/main.rs

mod cli;
mod commands;
mod display;

use clap::Parser;
use miette::GraphicalReportHandler;
use std::process::ExitCode;
use tracing::Level;

use bidmatrix_core::BidMatrixError;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    // AWS credentials and BIDMATRIX_* overrides may live in a local .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so stdout stays readable (and pipeable)
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let project_dir = cli.project_dir;

    match cli.command {
        // --- USE CASE: REQUIREMENT EXTRACTION ---
        Commands::Analyze { rfp, preview } => {
            commands::analyze::execute(&project_dir, &rfp, preview).await
        }

        // --- USE CASE: VENDOR SCORING ---
        Commands::Score { proposal, vendor } => {
            commands::score::execute(&project_dir, &proposal, &vendor).await
        }

        // --- USE CASE: READ MATRIX ---
        Commands::Show => commands::show::execute(&project_dir),

        Commands::Export { output } => commands::export::execute(&project_dir, &output),
    }
}

/// Prints the error chain, plus the diagnostic code and help when the
/// failure came from the library.
fn report(err: &anyhow::Error) {
    eprintln!("\n❌ {err:#}");

    if let Some(diagnostic) = err.downcast_ref::<BidMatrixError>() {
        let mut rendered = String::new();
        if GraphicalReportHandler::new()
            .render_report(&mut rendered, diagnostic)
            .is_ok()
        {
            eprintln!("{rendered}");
        }
    }
}
