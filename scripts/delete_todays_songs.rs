//! Deletes every listening-history entry recorded since local midnight.
//!
//! Run with: cargo run --bin delete_todays_songs -- [--dry-run] [--force]

use clap::Parser;
use listening_cleanup::config::{database, logging, settings::Settings};
use listening_cleanup::modules::cleanup::controller::CleanupRunner;
use listening_cleanup::modules::cleanup::prompt;
use listening_cleanup::modules::cleanup::schema::CleanupOptions;
use listening_cleanup::modules::history::crud::HistoryCrud;
use listening_cleanup::services::boundary;
use listening_cleanup::CleanupError;
use std::io;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about = "Delete today's listening history entries")]
struct Args {
    /// List what would be deleted without deleting anything
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Delete without confirmation when stdin cannot be read
    #[arg(long, default_value_t = false)]
    force: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    logging::init();

    let args = Args::parse();

    run(args).await
}

fn fail(e: CleanupError) -> ExitCode {
    println!("❌ Error: {}", e);
    ExitCode::FAILURE
}

async fn run(args: Args) -> ExitCode {
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => return fail(e),
    };
    let options = CleanupOptions {
        dry_run: args.dry_run,
        force: args.force,
    };

    println!("🔄 Connecting to MongoDB...");
    let conn = match database::connect(&settings).await {
        Ok(conn) => conn,
        Err(e) => return fail(e),
    };

    let mut runner = CleanupRunner::new(
        HistoryCrud::new(conn.history()),
        prompt::stdin_confirm(),
        io::stdout(),
        options,
    );
    let result = runner.run(boundary::today_boundary()).await;
    drop(runner);

    // Errors print before the disconnect line.
    let code = match result {
        Ok(outcome) => {
            info!(%outcome, "cleanup finished");
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    };

    conn.close().await;
    code
}
