use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum Error {
    InvalidConf(String),
    Toml(toml::de::Error),
    Reqwest(reqwest::Error),
    SerdeJson(serde_json::Error),
    Drago(String),
    TimezoneResolution(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidConf(err) => write!(f, "{}", err),
            Error::Toml(err) => err.fmt(f),
            Error::Reqwest(err) => err.fmt(f),
            Error::SerdeJson(err) => err.fmt(f),
            Error::Drago(err) => write!(f, "{}", err),
            Error::TimezoneResolution(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::Toml(error)
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Reqwest(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::SerdeJson(error)
    }
}
