use crate::error::{Result, SolutionistError};
use crate::fetch::DEFAULT_TEMPLATE_URL;
use crate::path_utils::validate_path_str;
use crate::repo::{DEFAULT_CONTACT_DOMAIN, DEFAULT_SCM_URL};
use directories::ProjectDirs;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG_DIR: &str = "SOLUTIONIST_CONFIG_DIR";
pub const APP_NAME: &str = "solutionist";
pub const SETTINGS_FILE: &str = "settings.toml";

pub fn resolve_config_dir(cli_override: Option<&Path>) -> Result<PathBuf> {
    let env_override = env::var(ENV_CONFIG_DIR).ok();
    resolve_config_dir_with(cli_override, env_override.as_deref())
}

pub fn resolve_config_dir_with(
    cli_override: Option<&Path>,
    env_override: Option<&str>,
) -> Result<PathBuf> {
    if let Some(path) = cli_override {
        validate_path_str(&path.to_string_lossy()).map_err(|e| SolutionistError::Config {
            message: t!("errors.invalid_config_dir", error = e).to_string(),
        })?;
        return Ok(path.to_path_buf());
    }

    if let Some(env_config_dir) = env_override {
        validate_path_str(env_config_dir).map_err(|e| SolutionistError::Config {
            message: t!("errors.invalid_config_dir_env", error = e).to_string(),
        })?;
        return Ok(PathBuf::from(env_config_dir));
    }

    let project_dirs =
        ProjectDirs::from("", "", APP_NAME).ok_or_else(|| SolutionistError::Config {
            message: t!("errors.not_find_config_dir").to_string(),
        })?;
    Ok(project_dirs.config_dir().to_path_buf())
}

/// Site defaults read from `settings.toml`; every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub template_url: String,
    pub scm_url: String,
    pub contact_domain: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            template_url: DEFAULT_TEMPLATE_URL.to_string(),
            scm_url: DEFAULT_SCM_URL.to_string(),
            contact_domain: DEFAULT_CONTACT_DOMAIN.to_string(),
        }
    }
}

impl Settings {
    /// Loads `settings.toml` from `config_dir`, falling back to defaults when absent.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let path = config_dir.join(SETTINGS_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|source| SolutionistError::Read {
            path: path.clone(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }
}

/// Makes sure the project directory exists.
pub fn prepare_target_dir(dir: &Path) -> Result<PathBuf> {
    validate_path_str(&dir.to_string_lossy()).map_err(|e| SolutionistError::Config {
        message: t!("errors.invalid_target_dir", error = e).to_string(),
    })?;
    fs::create_dir_all(dir).map_err(|e| SolutionistError::Config {
        message: t!(
            "errors.target_dir_not_created",
            path = dir.display(),
            error = e
        )
        .to_string(),
    })?;
    Ok(dir.to_path_buf())
}
