use clap::{Parser, Subcommand, ValueEnum};
use log::error;
use rededge_files::commands::run;
use rededge_files::config::{
    Command, Config, DEFAULT_HOST, DEFAULT_TIMEOUT, DownloadOptions, ProgressMode,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// Access the file API of a MicaSense RedEdge camera.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Camera hostname or IP address
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Timeout for each HTTP request, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Get info
    Get {
        /// Asset to get info for
        #[arg(value_enum)]
        asset: Asset,

        /// Set of images
        #[arg(long, default_value_t = 0)]
        set: u32,

        /// Dir of images
        #[arg(long, default_value_t = 0)]
        dir: u32,
    },
    /// Download images
    Download {
        /// Path to a folder where to save images
        #[arg(long)]
        output_path: PathBuf,

        /// Set of images
        #[arg(long, default_value_t = 0)]
        set: u32,

        /// Dir of images
        #[arg(long, default_value_t = 0)]
        dir: u32,

        /// Number of files downloaded at the same time
        #[arg(long, default_value_t = 1)]
        jobs: usize,

        /// When to show a progress bar
        #[arg(long, value_enum, default_value_t = ProgressMode::Auto)]
        progress: ProgressMode,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Asset {
    Sets,
    Setdirs,
    Setfiles,
}

impl From<Cli> for Config {
    fn from(value: Cli) -> Self {
        let command = match value.command {
            CliCommand::Get {
                asset: Asset::Sets,
                ..
            } => Command::ListSets,
            CliCommand::Get {
                asset: Asset::Setdirs,
                set,
                ..
            } => Command::ListSetDirs { set },
            CliCommand::Get {
                asset: Asset::Setfiles,
                set,
                dir,
            } => Command::ListSetFiles { set, dir },
            CliCommand::Download {
                output_path,
                set,
                dir,
                jobs,
                progress,
            } => Command::Download {
                set,
                dir,
                output_path,
                options: DownloadOptions {
                    jobs,
                    progress,
                },
            },
        };

        Config {
            host: value.host,
            timeout: Duration::from_secs(value.timeout),
            command,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config: Config = Cli::parse().into();

    match run(&config, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                error!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
