//! # CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

/// Lexware Office の会社コンタクトを Autotask に同期するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "lexsync")]
#[command(about = "Synchronize Lexware Office companies into Autotask", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run one synchronous sync against Autotask
    Sync {
        /// Sync only the contact with this ID instead of all companies
        #[arg(long)]
        contact_id: Option<String>,

        /// Map and print without writing to Autotask
        #[arg(long)]
        dry_run: bool,
    },
    /// Start the webhook HTTP server
    Serve {
        /// The hostname to listen on
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// The port of the webserver
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_sync_defaults() {
        let args = Args::parse_from(["lexsync", "sync"]);
        match args.command {
            Command::Sync {
                contact_id,
                dry_run,
            } => {
                assert!(contact_id.is_none());
                assert!(!dry_run);
            }
            _ => panic!("expected sync command"),
        }
    }

    #[test]
    fn test_args_sync_contact_id() {
        let args = Args::parse_from(["lexsync", "sync", "--contact-id", "c-1"]);
        match args.command {
            Command::Sync { contact_id, .. } => assert_eq!(contact_id.as_deref(), Some("c-1")),
            _ => panic!("expected sync command"),
        }
    }

    #[test]
    fn test_args_sync_dry_run() {
        let args = Args::parse_from(["lexsync", "sync", "--dry-run"]);
        match args.command {
            Command::Sync { dry_run, .. } => assert!(dry_run),
            _ => panic!("expected sync command"),
        }
    }

    #[test]
    fn test_args_serve_defaults() {
        let args = Args::parse_from(["lexsync", "serve"]);
        match args.command {
            Command::Serve { host, port } => {
                assert_eq!(host, "0.0.0.0");
                assert_eq!(port, 8000);
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_args_serve_custom_listen() {
        let args = Args::parse_from(["lexsync", "serve", "--host", "127.0.0.1", "--port", "9000"]);
        match args.command {
            Command::Serve { host, port } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 9000);
            }
            _ => panic!("expected serve command"),
        }
    }
}
