//! Access to the file API of the camera.

#![deny(missing_docs)]

use crate::config::Config;
use crate::error::{Error::*, Result};
use crate::listing::{DirectoryListing, FileListing};
use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use std::ffi::OsStr;
use std::fs::File;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Build the URL of the listing for the given level of the hierarchy.
///
/// Without `set` this is the list of sets, with only `set` the list of dirs in that set and
/// with both the list of files in that dir. A `dir` without a `set` is rejected.
pub fn build_url(host: &str, set: Option<u32>, dir: Option<u32>) -> Result<Url> {
    if host.is_empty() {
        return Err(InvalidArgument("the camera host must not be empty".to_string()));
    }
    if let (None, Some(dir)) = (set, dir) {
        return Err(InvalidArgument(format!("dir {dir} requires a set")));
    }

    let mut url = Url::parse(format!("http://{host}/files").as_str())?;
    if url.path() != "/files" || url.query().is_some() || url.fragment().is_some() {
        return Err(InvalidArgument(format!(
            "{host:?} is not a plain hostname or address"
        )));
    }

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| InvalidArgument(format!("{host:?} cannot be used as a base URL")))?;
        if let Some(set) = set {
            segments.push(format!("{set:04}SET").as_str());
        }
        if let Some(dir) = dir {
            segments.push(format!("{dir:03}").as_str());
        }
    }

    Ok(url)
}

/// Only accept names which stay inside the output directory.
fn check_file_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(c)), None) if c == OsStr::new(name) => Ok(()),
        _ => Err(InvalidFileName(name.to_string())),
    }
}

/// Client for the HTTP file API of a single camera.
#[derive(Debug, Clone)]
pub struct CameraClient {
    host: String,
    http: Client,
}

impl CameraClient {
    /// Create a client for the camera at `host` (hostname or IP address, optionally with a port).
    pub fn new(host: impl Into<String>, timeout: Duration) -> Result<Self> {
        let host = host.into();
        // fail early on hosts which can never produce a valid URL
        build_url(&host, None, None)?;
        // the camera is reached directly on its own network
        let http = Client::builder().timeout(timeout).no_proxy().build()?;
        Ok(Self { host, http })
    }

    /// Create a client for the camera and timeout configured in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.host.clone(), config.timeout)
    }

    /// The host this client talks to.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// See [`build_url`].
    pub fn build_url(&self, set: Option<u32>, dir: Option<u32>) -> Result<Url> {
        build_url(&self.host, set, dir)
    }

    fn get(&self, url: Url) -> Result<Response> {
        debug!("GET {}", url);
        let response = self.http.get(url.clone()).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(RemoteError(status, url));
        }
        Ok(response)
    }

    fn get_json<T>(&self, url: Url) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.get(url)?.bytes()?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Names of all sets on the camera, in the order reported by the camera.
    pub fn list_sets(&self) -> Result<Vec<String>> {
        let listing: DirectoryListing = self.get_json(self.build_url(None, None)?)?;
        debug!("camera reported {} sets", listing.directories.len());
        Ok(listing.directories)
    }

    /// Names of all dirs in `set`.
    pub fn list_set_dirs(&self, set: u32) -> Result<Vec<String>> {
        let listing: DirectoryListing = self.get_json(self.build_url(Some(set), None)?)?;
        debug!("set {} has {} dirs", set, listing.directories.len());
        Ok(listing.directories)
    }

    /// Names of all files in `dir` of `set`.
    pub fn list_files(&self, set: u32, dir: u32) -> Result<Vec<String>> {
        let listing: FileListing = self.get_json(self.build_url(Some(set), Some(dir))?)?;
        debug!(
            "dir {} of set {} has {} files",
            dir,
            set,
            listing.files.len()
        );
        Ok(listing.names())
    }

    /// Download a single file into `output_dir`, replacing any file of the same name.
    ///
    /// Returns the path of the written file and the number of bytes written.
    pub fn download_file(
        &self,
        set: u32,
        dir: u32,
        filename: &str,
        output_dir: &Path,
    ) -> Result<(PathBuf, u64)> {
        check_file_name(filename)?;

        let mut url = self.build_url(Some(set), Some(dir))?;
        url.path_segments_mut()
            .map_err(|_| InvalidArgument(format!("{filename:?} cannot be appended to the URL")))?
            .push(filename);

        let mut response = self.get(url)?;

        let path = output_dir.join(filename);
        let mut file = File::create(&path).map_err(|e| IoError(path.clone(), e))?;
        let bytes = std::io::copy(&mut response, &mut file).map_err(|e| IoError(path.clone(), e))?;
        debug!("wrote {} bytes to {}", bytes, path.display());

        Ok((path, bytes))
    }
}
