//! Error type of the load pipeline.

use std::io;

use thiserror::Error;

use crate::file_system::AbsoluteFsPath;

pub type Result<T> = std::result::Result<T, TsExportsError>;

#[derive(Debug, Error)]
pub enum TsExportsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: AbsoluteFsPath,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}:\n{}", .messages.join("\n"))]
    Parse {
        path: AbsoluteFsPath,
        messages: Vec<String>,
    },

    #[error("failed to transform {path}:\n{}", .messages.join("\n"))]
    Transform {
        path: AbsoluteFsPath,
        messages: Vec<String>,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl TsExportsError {
    pub fn io(path: &AbsoluteFsPath, source: io::Error) -> Self {
        TsExportsError::Io {
            path: path.clone(),
            source,
        }
    }

    /// Path of the module the error belongs to, if any.
    pub fn path(&self) -> Option<&AbsoluteFsPath> {
        match self {
            TsExportsError::Io { path, .. }
            | TsExportsError::Parse { path, .. }
            | TsExportsError::Transform { path, .. } => Some(path),
            TsExportsError::Config(_) => None,
        }
    }
}
