use clap::ValueEnum;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "192.168.10.254";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "lower")]
pub enum ProgressMode {
    /// Show a progress bar if stderr is a terminal.
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DownloadOptions {
    /// Maximum number of files downloaded at the same time. `1` downloads in listing order.
    pub jobs: usize,
    pub progress: ProgressMode,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            jobs: 1,
            progress: ProgressMode::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    ListSets,
    ListSetDirs {
        set: u32,
    },
    ListSetFiles {
        set: u32,
        dir: u32,
    },
    Download {
        set: u32,
        dir: u32,
        output_path: PathBuf,
        options: DownloadOptions,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Config {
    /// Hostname or IP address of the camera, optionally with a port.
    pub host: String,
    pub timeout: Duration,
    pub command: Command,
}

impl Config {
    pub fn new(host: impl Into<String>, command: Command) -> Self {
        Self {
            host: host.into(),
            timeout: DEFAULT_TIMEOUT,
            command,
        }
    }
}
