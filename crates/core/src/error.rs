use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Terminal error: {}", .0)]
    Terminal(#[from] std::io::Error),

    #[error("Error parsing path template: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering path template: {}", .0)]
    Render(#[from] RenderError),

    #[error("Unknown rule: \"{}\" (expected one of: jsdoc, manual, all)", .0)]
    UnknownRule(String),

    #[error("Unknown scope: \"{}\" (expected one of: project, global)", .0)]
    UnknownScope(String),

    #[error("Unknown editor(s): {}", .0)]
    UnknownEditors(String),

    #[error("A selector needs at least one option to choose from.")]
    EmptySelector,

    #[error("Found a non-unique selector option key: `{}`", .0)]
    DuplicateOptionKey(String),

    #[error("Misc error: {}", .0)]
    Misc(String),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
