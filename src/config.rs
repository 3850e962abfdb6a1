//! Configuration handling
use std::{
    fs::{create_dir_all, read_to_string, File},
    io::Write,
    path::{Path, PathBuf},
};

use home::home_dir;
use serde::{Deserialize, Serialize};

use crate::errors::GhForksError;

/// Environment variable consulted for the token.
const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Configuration for the gh-forks tool.
#[derive(Default, Clone, Debug)]
pub struct Config {
    /// path to the configuration file
    pub config_path: PathBuf,

    /// actual configuration data
    pub config_data: ConfigData,
}

/// Configuration file data
#[derive(Deserialize, Serialize, Default, Clone, Debug)]
pub struct ConfigData {
    /// Github configuration
    pub github: Option<GithubConfig>,
}

/// Github section of the configuration file.
#[derive(Deserialize, Serialize, Default, Clone, Debug)]
pub struct GithubConfig {
    /// Github token
    pub token: Option<String>,
}

impl Config {
    /// Create a new Config object from the default path
    ///
    /// # Errors
    /// Error if the config file can't be opened or parsed
    pub fn try_new() -> Result<Self, GhForksError> {
        let config_path = Self::get_config_path()?;
        Self::new_from_path(&config_path)
    }

    /// Create a new Config object from a custom path
    ///
    /// A missing file is treated as an empty configuration.
    ///
    /// # Errors
    /// Error if the config file can't be read or parsed
    pub fn new_from_path(config_path: &Path) -> Result<Self, GhForksError> {
        let config_data = if config_path.exists() {
            let contents = read_to_string(config_path)
                .map_err(|e| GhForksError::new_with_source("Unable to open config file", e))?;
            toml::from_str(&contents)?
        } else {
            ConfigData::default()
        };
        Ok(Config {
            config_path: config_path.to_path_buf(),
            config_data,
        })
    }

    /// Save the config data to the config file
    ///
    /// # Errors
    /// Error if the config file can't be created or written to
    pub fn save(&self) -> Result<(), GhForksError> {
        let config_str = toml::to_string(&self.config_data)
            .map_err(|e| GhForksError::new_with_source("Unable to serialize config", e))?;
        let mut file = File::create(&self.config_path)
            .map_err(|e| GhForksError::new_with_source("Unable to create config file", e))?;
        file.write_all(config_str.as_bytes())
            .map_err(|e| GhForksError::new_with_source("Unable to write to config file", e))
    }

    /// Get the path to the config file
    ///
    /// # Errors
    /// Error if the home directory can't be found
    pub fn get_config_path() -> Result<PathBuf, GhForksError> {
        let home_dir = match home_dir() {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => return Err("Unable to get your home dir! home::home_dir() isn't working".into()),
        };
        let config_directory = home_dir.join(".config").join("gh-forks");
        let config_path = config_directory.join("config.toml");
        create_dir_all(config_directory)
            .map_err(|e| GhForksError::new_with_source("Unable to create config dir", e))?;
        Ok(config_path)
    }

    /// Update the config data and save it to the config file
    ///
    /// # Errors
    /// Error if fail to save config
    pub fn update(
        &mut self,
        updater_fn: impl FnOnce(&mut ConfigData),
    ) -> Result<(), GhForksError> {
        updater_fn(&mut self.config_data);
        self.save()?;
        Ok(())
    }

    /// Resolve the github token.
    ///
    /// Precedence: explicit `cli_token`, then the `GITHUB_TOKEN`
    /// environment variable, then the config file, then an interactive
    /// prompt. A prompted token is saved back to the config file.
    ///
    /// # Errors
    /// Error if the prompt fails or the config file can't be saved
    pub fn resolve_token(&mut self, cli_token: Option<String>) -> Result<String, GhForksError> {
        if let Some(token) = cli_token {
            return Ok(token);
        }
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            if !token.is_empty() {
                return Ok(token);
            }
        }
        if let Some(GithubConfig { token: Some(token) }) = &self.config_data.github {
            return Ok(token.clone());
        }
        println!(
            "Please enter your github token (https://github.com/settings/personal-access-tokens):"
        );
        let token = get_password()?;
        let saved_token = token.clone();
        self.update(|config_data| {
            config_data.github = Some(GithubConfig {
                token: Some(saved_token),
            });
        })?;
        Ok(token)
    }
}

/// Get password from the user
fn get_password() -> Result<String, GhForksError> {
    rpassword::read_password()
        .map_err(|e| GhForksError::new_with_source("Error reading password", e))
}
