//! Lexsync - Lexware Office → Autotask company sync
//!
//! Lexware Office の会社コンタクトを Autotask に一方向同期する

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::{Context, Result};
use clap::Parser;

use lexsync::adapter::config::Config;
use lexsync::driver::{server, Args, Command, SyncWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env for local development; real deployments set the
    // environment directly.
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // Load configuration once; failures here are fatal.
    let config = Config::from_env().context("failed to load configuration")?;

    match args.command {
        Command::Serve { host, port } => server::serve(config, &host, port).await,
        Command::Sync {
            contact_id,
            dry_run,
        } => {
            let workflow = SyncWorkflow::new(config)?;
            let exit_code = workflow.run_sync(contact_id.as_deref(), dry_run).await?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}
