use std::{fmt, io};

/// Crate-wide `Result` type using [`SeculogError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, SeculogError>;

/// Top-level error type for seculog operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum SeculogError {
    /// Input line parsing errors.
    Parse(ParseError),

    /// Command dispatch errors.
    Dispatch(DispatchError),

    /// Record store errors.
    Store(StoreError),

    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors.
    Io(io::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Input-line parsing errors.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A single or double quote was opened and never closed.
    UnterminatedQuote,
}

/// Command dispatch errors.
///
/// Produced when a tokenized line cannot be resolved into a runnable
/// command. All variants are rendered to the user and the loop continues.
#[derive(Debug, PartialEq, Eq)]
pub enum DispatchError {
    /// The command name is not in the command table.
    UnknownCommand(String),

    /// A subcommand or field literal was missing or not recognized.
    InvalidSubcommand {
        /// What the user typed, if anything.
        given: Option<String>,
        /// The accepted literals.
        expected: &'static [&'static str],
    },

    /// Wrong number of arguments for the command.
    BadArguments {
        /// Usage line shown to the user.
        usage: &'static str,
    },

    /// An argument did not parse as the expected type.
    InvalidValue {
        /// What was expected, e.g. "integer id".
        expected: &'static str,
        /// What the user typed.
        given: String,
    },
}

/// Record-store errors.
#[derive(Debug)]
pub enum StoreError {
    /// Failed to open the database file.
    Open(String),

    /// A query or statement failed.
    Query(String),

    /// Referenced target id does not exist.
    TargetNotFound(i64),

    /// Referenced vulnerability id does not exist.
    VulnNotFound(i64),

    /// A target with the same URL already exists.
    DuplicateUrl(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for SeculogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeculogError::Parse(e) => write!(f, "{e}"),
            SeculogError::Dispatch(e) => write!(f, "{e}"),
            SeculogError::Store(e) => write!(f, "Store error: {e}"),
            SeculogError::Config(e) => write!(f, "Configuration error: {e}"),
            SeculogError::Io(e) => write!(f, "I/O error: {e}"),
            SeculogError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnterminatedQuote => {
                write!(f, "Syntax error: unterminated quote in input")
            }
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::UnknownCommand(cmd) => write!(f, "Unknown command: {cmd}"),
            DispatchError::InvalidSubcommand { given, expected } => {
                match given {
                    Some(sub) => write!(f, "Invalid subcommand '{sub}'.")?,
                    None => write!(f, "Missing subcommand.")?,
                }
                write!(f, " Expected one of: {}", expected.join(", "))
            }
            DispatchError::BadArguments { usage } => write!(f, "Usage: {usage}"),
            DispatchError::InvalidValue { expected, given } => {
                write!(f, "Invalid value '{given}': expected {expected}")
            }
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Open(msg) => write!(f, "failed to open database: {msg}"),
            StoreError::Query(msg) => write!(f, "{msg}"),
            StoreError::TargetNotFound(id) => write!(f, "target id {id} not found"),
            StoreError::VulnNotFound(id) => write!(f, "vulnerability id {id} not found"),
            StoreError::DuplicateUrl(url) => {
                write!(f, "a target with URL '{url}' already exists")
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
        }
    }
}

impl std::error::Error for SeculogError {}
impl std::error::Error for ParseError {}
impl std::error::Error for DispatchError {}
impl std::error::Error for StoreError {}
impl std::error::Error for ConfigError {}

/* ========================= Conversions to SeculogError ========================= */

impl From<io::Error> for SeculogError {
    fn from(err: io::Error) -> Self {
        SeculogError::Io(err)
    }
}

impl From<ParseError> for SeculogError {
    fn from(err: ParseError) -> Self {
        SeculogError::Parse(err)
    }
}

impl From<DispatchError> for SeculogError {
    fn from(err: DispatchError) -> Self {
        SeculogError::Dispatch(err)
    }
}

impl From<StoreError> for SeculogError {
    fn from(err: StoreError) -> Self {
        SeculogError::Store(err)
    }
}

impl From<ConfigError> for SeculogError {
    fn from(err: ConfigError) -> Self {
        SeculogError::Config(err)
    }
}

impl From<rusqlite::Error> for SeculogError {
    fn from(err: rusqlite::Error) -> Self {
        SeculogError::Store(StoreError::Query(err.to_string()))
    }
}

impl From<String> for SeculogError {
    fn from(msg: String) -> Self {
        SeculogError::Generic(msg)
    }
}

impl From<&str> for SeculogError {
    fn from(msg: &str) -> Self {
        SeculogError::Generic(msg.to_owned())
    }
}
