use anyhow::Result as _Result;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolutionistError {
    #[error("Config Error: {message}")]
    Config { message: String },

    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template download failed with HTTP status {status}")]
    Fetch { status: u16 },

    #[error("Command `{command}` failed: {reason}")]
    Command { command: String, reason: String },

    #[error("Repository creation failed with HTTP status {status}: {body}")]
    RepoCreation { status: u16, body: String },

    #[error("Custom Error: {0}")]
    Custom(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP Error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Inquire Error: {0}")]
    Inquire(#[from] inquire::InquireError),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings Parse Error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl SolutionistError {
    pub fn display_localized(&self) -> String {
        match self {
            SolutionistError::Config { message } => {
                t!("errors.config_error", message = message).to_string()
            }
            SolutionistError::Read { path, source } => t!(
                "errors.read_failed",
                path = path.display(),
                error = source
            )
            .to_string(),
            SolutionistError::Write { path, source } => t!(
                "errors.write_failed",
                path = path.display(),
                error = source
            )
            .to_string(),
            SolutionistError::Fetch { status } => {
                t!("errors.fetch_failed", status = status).to_string()
            }
            SolutionistError::Command { command, reason } => {
                t!("errors.command_failed", command = command, reason = reason).to_string()
            }
            SolutionistError::RepoCreation { status, body } => {
                t!("errors.repo_creation_failed", status = status, body = body).to_string()
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = _Result<T, SolutionistError>;
