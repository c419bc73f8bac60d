use crate::parse;
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    Parse(parse::Error),
    Request(reqwest::Error),
    Status(reqwest::StatusCode, String),
    Slack(String),
    Json(serde_json::Error),
    Io(std::io::Error),
    UnknownRestaurant(String),
    MissingToken,
}

impl Error {
    /// Whether the failure happened talking to a web server, and is worth another try.
    pub const fn is_http(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status(..))
    }
}

impl From<parse::Error> for Error {
    fn from(e: parse::Error) -> Self {
        Error::Parse(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "Parse error: {}", e),
            Error::Request(e) => write!(f, "Request error: {}", e),
            Error::Status(status, url) => write!(f, "HTTP {status} from {url}"),
            Error::Slack(e) => write!(f, "Slack error: {}", e),
            Error::Json(e) => write!(f, "Json error: {}", e),
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::UnknownRestaurant(id) => write!(
                f,
                "Unknown restaurant `{id}`, expected `all` or one of: {}",
                crate::restaurants::ids().join(", ")
            ),
            Error::MissingToken => {
                write!(f, "No Slack token, set LUNCHBOT_TOKEN or pass --dry-run")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
