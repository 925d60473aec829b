//! # tagsync-ctl
//!
//! Command-line front end for the update-tags generator.
//!
//! ## Commands
//!
//! - `tagsync-ctl generate` - Write the update-tags file for every service
//! - `tagsync-ctl services [NAME]` - List services or show one service's metadata
//! - `tagsync-ctl render NAME` - Print the generated function for one service
//! - `tagsync-ctl plan NAME --old JSON --new JSON` - Show the calls an update would make
//!
//! Defaults for `--output` and `--template` are read from `.tagsync.toml`
//! (or `~/.config/tagsync.toml`).

mod cli_config;
mod commands;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cli_config::CliConfig;
use crate::error::CliResult;

#[derive(Debug, Parser)]
#[command(name = "tagsync-ctl")]
#[command(about = "Generate per-service AWS update-tags functions", long_about = None)]
#[command(version, styles = output::clap_styles())]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate the update-tags file for all registered services
    Generate {
        /// Output file path (overrides config)
        #[arg(short, long, env = "TAGSYNC_OUTPUT")]
        output: Option<PathBuf>,

        /// Replacement template file (overrides config)
        #[arg(short, long)]
        template: Option<PathBuf>,
    },

    /// List registered services, or show the resolved metadata for one
    Services {
        /// Service identifier (unregistered names show the defaults)
        name: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the formatted update-tags function for one service
    Render {
        /// Service identifier
        name: String,

        /// Replacement template file (overrides config)
        #[arg(short, long)]
        template: Option<PathBuf>,
    },

    /// Show the API calls an update from OLD to NEW tags would make
    Plan {
        /// Service identifier
        name: String,

        /// Current tags as JSON
        #[arg(long, default_value = "{}")]
        old: String,

        /// Desired tags as JSON
        #[arg(long, default_value = "{}")]
        new: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also arrive here
            let code = u8::from(err.use_stderr());
            err.print().ok();
            return ExitCode::from(code);
        }
    };

    init_tracing(cli.verbose);

    let cli_config = cli_config::load_cli_config();
    match run(cli.command, &cli_config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "Command failed");
            output::error(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(command: Commands, cli_config: &CliConfig) -> CliResult<()> {
    match command {
        Commands::Generate { output, template } => {
            commands::handle_generate_command(cli_config, output, template)
        }
        Commands::Services { name, json } => {
            commands::handle_services_command(name.as_deref(), json)
        }
        Commands::Render { name, template } => {
            commands::handle_render_command(cli_config, &name, template)
        }
        Commands::Plan {
            name,
            old,
            new,
            json,
        } => commands::handle_plan_command(&name, &old, &new, json),
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Log directive used when `RUST_LOG` is unset.
fn default_directive(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    format!("warn,tagsync_ctl={level},tagsync_codegen={level},tagsync_tags={level}")
}
