use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::export::DEFAULT_CODE_HEADER;

pub const CONFIG_FILE_NAME: &str = ".labelsyncrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Locales used when `--locale` is not given.
    #[serde(default)]
    pub locales: Vec<String>,
    /// Label of the first column of the exported file.
    #[serde(default = "default_code_header")]
    pub code_header: String,
    #[serde(default)]
    pub silent: bool,
}

fn default_code_header() -> String {
    DEFAULT_CODE_HEADER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales: Vec::new(),
            code_header: default_code_header(),
            silent: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The code header ends up unquoted in the export header line, so it must
    /// not contain CSV special characters.
    pub fn validate(&self) -> Result<()> {
        if self.code_header.is_empty() {
            bail!("'codeHeader' must not be empty");
        }
        if self.code_header.contains([',', '"', '\n', '\r']) {
            bail!(
                "Invalid 'codeHeader': \"{}\" must not contain commas, quotes or line breaks",
                self.code_header
            );
        }

        for locale in &self.locales {
            if locale.trim().is_empty() {
                bail!("Invalid entry in 'locales': locale names must not be empty");
            }
            if locale.contains(',') {
                bail!("Invalid entry in 'locales': \"{}\" contains a comma", locale);
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
