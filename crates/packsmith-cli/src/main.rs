mod commands;
mod sink;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use commands::{EXIT_CONFIG_ERROR, EXIT_FAILURE, EXIT_MATERIAL_ERROR};
use packsmith_core::MATERIALS_DIR;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "packsmith",
    version,
    about = "Resource pack build helpers: manifests, materials, and build logs"
)]
struct Cli {
    /// Output results as structured JSON.
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose).
    #[arg(long, default_value_t = false, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the resource pack manifest generated from a pack config.
    Manifest {
        /// Path to the pack config (TOML, or JSON with a .json extension).
        #[arg(default_value = "pack.toml")]
        config: PathBuf,
    },
    /// Resolve material names to their directories.
    Materials {
        /// Material names; resolves every material when omitted.
        names: Vec<String>,
        /// Materials root directory.
        #[arg(long, default_value = MATERIALS_DIR)]
        dir: PathBuf,
    },
    /// Print a build-tool error log with severity styling.
    StyleLog {
        /// Log file to read; reads stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Generate shell completions for bash, zsh, fish, elvish, or powershell.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe") || msg.contains("failed printing to stdout") {
            std::process::exit(0);
        }
        default_hook(info);
    }));

    let cli = Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("PACKSMITH_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let result = match cli.command {
        Commands::Manifest { config } => commands::manifest::run(&config),
        Commands::Materials { names, dir } => commands::materials::run(&dir, &names, cli.json),
        Commands::StyleLog { file } => commands::style_log::run(file.as_deref()),
        Commands::Completions { shell } => commands::completions::run::<Cli>(shell),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(msg) => {
            eprintln!("error: {msg}");
            let code = if msg.starts_with("config error:") {
                EXIT_CONFIG_ERROR
            } else if msg.starts_with("material error:") {
                EXIT_MATERIAL_ERROR
            } else {
                EXIT_FAILURE
            };
            ExitCode::from(code)
        }
    }
}
