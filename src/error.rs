//! Application error model. Structural failures only: everything inside
//! generation is total, so errors here cover configuration and catalog
//! access, both of which abort the run before any output is produced.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone)]
pub enum AppError {
    /// Bad invocation: malformed flag value, missing required parameter.
    Config { message: String },
    /// The catalog connection or query failed.
    Catalog { message: String },
    /// Writing the fragment to the sink failed.
    Io { message: String },
}

impl AppError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AppError::Config { message: msg.into() }
    }
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        AppError::Catalog { message: msg.into() }
    }
    pub fn io<S: Into<String>>(msg: S) -> Self {
        AppError::Io { message: msg.into() }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Config { message }
            | AppError::Catalog { message }
            | AppError::Io { message } => message.as_str(),
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config { message } => write!(f, "config error: {message}"),
            AppError::Catalog { message } => write!(f, "catalog error: {message}"),
            AppError::Io { message } => write!(f, "io error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}
