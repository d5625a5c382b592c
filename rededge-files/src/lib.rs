//! Client for the HTTP file API of MicaSense RedEdge cameras.
//!
//! The camera serves its captures below `http://{host}/files`, grouped into numbered sets
//! (`0000SET`, `0001SET`, ...) which in turn contain numbered dirs (`000`, `001`, ...).

pub mod camera_control;
pub mod commands;
pub mod config;
pub mod download;
pub mod error;
pub mod listing;
pub mod progress;
pub mod util;

pub use camera_control::{CameraClient, build_url};
pub use config::{Command, Config, DownloadOptions, ProgressMode};
pub use download::{DownloadSummary, download_all};
pub use error::{Error, Result};
