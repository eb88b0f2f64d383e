use chain_gen::cmds;
use chain_gen::codegen::{
    DEFAULT_REGEN_COMMAND, DEFAULT_SOURCE_LABEL, DEFAULT_TS_OUTPUT, DEFAULT_ZIG_OUTPUT,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "chainlist-gen")]
#[command(about = "Generate Zig and TypeScript chain catalogs from a chain registry", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the Zig and TypeScript catalogs
    Codegen {
        /// Directory holding `chainid-*.js` registry entries
        #[arg(short = 'r', long = "registry-dir", value_name = "DIR", env = "CHAINLIST_REGISTRY_DIR")]
        registry_dir: PathBuf,

        /// Optional extra rpc source (probed, never applied)
        #[arg(long = "extra-rpcs", value_name = "FILE", env = "CHAINLIST_EXTRA_RPCS")]
        extra_rpcs: Option<PathBuf>,

        /// Output path for the Zig catalog
        #[arg(long = "zig-out", value_name = "FILE", env = "CHAINLIST_ZIG_OUT", default_value = DEFAULT_ZIG_OUTPUT)]
        zig_output: PathBuf,

        /// Output path for the TypeScript catalog
        #[arg(long = "ts-out", value_name = "FILE", env = "CHAINLIST_TS_OUT", default_value = DEFAULT_TS_OUTPUT)]
        ts_output: PathBuf,

        /// Data source named in the generated header
        #[arg(long = "source-label", value_name = "TEXT", default_value = DEFAULT_SOURCE_LABEL)]
        source_label: String,

        /// Regeneration command named in the generated header
        #[arg(long = "regen-command", value_name = "TEXT", default_value = DEFAULT_REGEN_COMMAND)]
        regen_command: String,

        /// Enable verbose output
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },

    /// Show the identifiers and constants each registry entry maps to
    Analyze {
        /// Directory holding `chainid-*.js` registry entries
        #[arg(short = 'r', long = "registry-dir", value_name = "DIR", env = "CHAINLIST_REGISTRY_DIR")]
        registry_dir: PathBuf,

        /// Optional extra rpc source (probed, never applied)
        #[arg(long = "extra-rpcs", value_name = "FILE", env = "CHAINLIST_EXTRA_RPCS")]
        extra_rpcs: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Codegen {
            registry_dir,
            extra_rpcs,
            zig_output,
            ts_output,
            source_label,
            regen_command,
            verbose,
        } => {
            init_tracing(verbose);
            let config = cmds::codegen::CodegenConfig {
                registry_dir,
                extra_rpcs,
                zig_output,
                ts_output,
                source_label,
                regen_command,
                verbose,
            };
            cmds::codegen::run(&config)?;
        }

        Commands::Analyze {
            registry_dir,
            extra_rpcs,
        } => {
            init_tracing(false);
            cmds::analyze::run(registry_dir, extra_rpcs)?;
        }
    }

    Ok(())
}
