use std::{env, path::Path};

use anyhow::{Context as _, Result};

use super::super::{args::CommonArgs, warnings::WarningSink};
use crate::{
    config::{CONFIG_FILE_NAME, Config, load_config},
    issues::Warning,
    locales::{LocaleSet, resolve_locales},
};

/// Settings shared by export and import once CLI flags and config are merged.
pub struct RunContext {
    pub config: Config,
    pub warnings: WarningSink,
    locale_override: Vec<String>,
}

impl RunContext {
    /// Load the config file (if any) from the working directory and apply the
    /// CLI flags on top of it.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read the working directory")?;
        let config_result = load_config(&cwd)?;

        if args.verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let config = config_result.config;
        let silent = args.silent || config.silent;
        let locale_override = if args.locale.is_empty() {
            config.locales.clone()
        } else {
            args.locale.clone()
        };

        Ok(Self {
            config,
            warnings: WarningSink::new(silent),
            locale_override,
        })
    }

    /// Locales for this run: `--locale`, then config `locales`, then the
    /// sub-directories of `base_dir`.
    pub fn resolve_locales(&mut self, base_dir: &Path) -> Result<LocaleSet> {
        let locales = resolve_locales(Some(self.locale_override.as_slice()), base_dir)?;
        if locales.is_empty() {
            self.warnings.push(Warning::NoLocales);
        }
        Ok(locales)
    }
}
