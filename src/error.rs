use anyhow;
use config_file::ConfigFileError;
use reqwest;

use std::fmt;

#[derive(Debug)]
pub enum Error {
    ConfigFileError(ConfigFileError),
    HttpRequestError(reqwest::Error),
    IoError(std::io::Error),
    AnyhowError(anyhow::Error),
    RocketError(rocket::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ConfigFileError(x) => write!(f, "Failed to read configuration: {}", x),
            Error::HttpRequestError(x) => write!(f, "HTTP request failed: {}", x),
            Error::IoError(x) => write!(f, "I/O error: {}", x),
            Error::AnyhowError(x) => write!(f, "{}", x),
            Error::RocketError(x) => write!(f, "Web server error: {}", x),
        }
    }
}

impl From<ConfigFileError> for Error {
    fn from(error: ConfigFileError) -> Self {
        Error::ConfigFileError(error)
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::HttpRequestError(error)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::IoError(error)
    }
}

impl From<anyhow::Error> for Error {
    fn from(error: anyhow::Error) -> Self {
        Error::AnyhowError(error)
    }
}

impl From<rocket::Error> for Error {
    fn from(error: rocket::Error) -> Self {
        Error::RocketError(error)
    }
}
