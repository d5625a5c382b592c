use Error::*;
use reqwest::StatusCode;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use url::Url;

#[derive(Debug)]
pub enum Error {
    UrlParseError(url::ParseError),
    InvalidArgument(String),
    InvalidFileName(String),
    HttpError(reqwest::Error),
    /// The camera answered with something other than `200 OK`.
    RemoteError(StatusCode, Url),
    DecodeError(serde_json::Error),
    IoError(PathBuf, std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlParseError(_) => write!(f, "Url parse error"),
            InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            InvalidFileName(name) => write!(
                f,
                "Refusing to write file {name:?}: not a plain file name"
            ),
            HttpError(_) => write!(f, "HTTP request failed"),
            RemoteError(status, url) => {
                write!(f, "Returned {} status code for URL {}", status.as_u16(), url)
            }
            DecodeError(_) => write!(f, "Failed to decode the listing sent by the camera"),
            IoError(path, _) => write!(f, "Failed to write {}", path.display()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlParseError(e) => Some(e),
            HttpError(e) => Some(e),
            DecodeError(e) => Some(e),
            IoError(_, e) => Some(e),
            _ => None,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        UrlParseError(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        HttpError(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        DecodeError(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
