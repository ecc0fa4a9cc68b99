use thiserror::Error;

use crate::config::ConfigError;
use crate::parse::ParseError;
use crate::{CatalogError, CompileError, SessionError};

/// Unified error type covering loading, validation, and session operations.
///
/// Returned by convenience methods like
/// [`TemplateRegistry::from_dsl()`](crate::TemplateRegistry::from_dsl),
/// [`Catalog::from_json_file()`](crate::Catalog::from_json_file) and
/// [`GameConfig::from_file()`](crate::GameConfig::from_file).
#[derive(Debug, Error)]
pub enum GuessworkError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
