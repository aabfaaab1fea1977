use std::{error, fmt, sync::Arc};

#[derive(Debug, Clone)]
pub enum CliError {
    MissingArgument(&'static str),
    TooManyArguments(usize),
    InvalidNumber { name: &'static str, value: String },
    InvalidPrecision(String),
    UnknownOption(String),
    JsonError(Arc<serde_json::Error>),
}

impl error::Error for CliError {}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::MissingArgument(name) => {
                write!(f, "missing argument <{}>", name)
            }
            CliError::TooManyArguments(count) => {
                write!(f, "expected 3 positional arguments, got {}", count)
            }
            CliError::InvalidNumber { name, value } => {
                write!(f, "invalid <{}>: '{}' is not a number", name, value)
            }
            CliError::InvalidPrecision(value) => {
                write!(f, "invalid precision: '{}' is not an integer", value)
            }
            CliError::UnknownOption(option) => {
                write!(f, "unknown option '{}'", option)
            }
            CliError::JsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::JsonError(Arc::new(e))
    }
}
