use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum CatalogError {
    Config(String),
    Network(String),
    HttpStatus(u16),
    Io(String),
    JsonParse(String),
    UnexpectedShape(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CatalogError::Network(msg) => write!(f, "Network error: {msg}"),
            CatalogError::HttpStatus(status) => write!(f, "HTTP error! status: {status}"),
            CatalogError::Io(msg) => write!(f, "I/O error: {msg}"),
            CatalogError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            CatalogError::UnexpectedShape(msg) => write!(f, "Unexpected data shape: {msg}"),
        }
    }
}

impl Error for CatalogError {}
