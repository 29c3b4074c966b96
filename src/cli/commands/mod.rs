//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod config_cmd;
mod languages;
mod serve;
mod walk;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings_with_options, LoadOptions};

#[derive(Parser)]
#[command(name = "wikiwalk")]
#[command(about = "Random walks across Wikipedia")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Bind address: port, host, or host:port
        bind: Option<String>,
    },

    /// Run a single walk and print the result as JSON
    Walk {
        /// Language code (defaults to the configured default language)
        language: Option<String>,
        /// Maximum number of hops
        #[arg(short = 'd', long)]
        max_depth: Option<u32>,
        /// Seed for a reproducible walk
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List supported language codes
    Languages,

    /// Show the effective configuration
    Config,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
    };
    let (mut settings, _config) = load_settings_with_options(options).await?;

    match cli.command {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                settings.bind = bind;
            }
            serve::cmd_serve(&settings).await
        }
        Commands::Walk {
            language,
            max_depth,
            seed,
        } => {
            if let Some(depth) = max_depth {
                settings.max_depth = depth;
            }
            walk::cmd_walk(&settings, language.as_deref(), seed).await
        }
        Commands::Languages => languages::cmd_languages(&settings).await,
        Commands::Config => config_cmd::cmd_config_show(&settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_walk() {
        let cli = Cli::try_parse_from(["wikiwalk", "walk", "de", "-d", "3", "--seed", "9"]).unwrap();
        match cli.command {
            Commands::Walk {
                language,
                max_depth,
                seed,
            } => {
                assert_eq!(language.as_deref(), Some("de"));
                assert_eq!(max_depth, Some(3));
                assert_eq!(seed, Some(9));
            }
            _ => panic!("expected walk command"),
        }
    }

    #[test]
    fn test_parse_serve_with_global_flags() {
        let cli = Cli::try_parse_from(["wikiwalk", "serve", "0.0.0.0:9000", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Serve { bind: Some(ref b) } if b == "0.0.0.0:9000"));
    }
}
