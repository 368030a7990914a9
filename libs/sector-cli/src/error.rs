//! Top-level error type. Every variant ends the process with exit status 1.

use clap::error::ContextKind;
use sector_geometry::ParamError;
use sector_kml::KmlError;
use thiserror::Error;

use crate::cli::USAGE;

#[derive(Error, Debug)]
pub enum CliError {
    /// Wrong number of arguments or an unknown option.
    #[error("{reason}; usage: {}", USAGE)]
    Usage { reason: String },

    #[error(transparent)]
    Params(#[from] ParamError),

    #[error(transparent)]
    Kml(#[from] KmlError),
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        let kind = err.kind().as_str().unwrap_or("invalid arguments");
        let culprit = err
            .get(ContextKind::InvalidArg)
            .or_else(|| err.get(ContextKind::InvalidValue));
        let reason = match culprit {
            Some(value) => format!("{kind} '{value}'"),
            None => kind.to_string(),
        };
        CliError::Usage { reason }
    }
}

pub type CliResult<T> = Result<T, CliError>;
