use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta::internals::SettingsBindDropGuard;
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod export;

const BIN_NAME: &str = "labelsync";

pub struct CliTest {
    _temp_dir: TempDir,
    _settings: SettingsBindDropGuard,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stops the config file lookup at the project root.
        fs::create_dir(project_dir.join(".git"))?;

        // Redact the temp directory from snapshots.
        let mut settings = insta::Settings::clone_current();
        settings.add_filter(&escape_regex(&project_dir.display().to_string()), "[TEMP]");

        Ok(Self {
            _temp_dir: temp_dir,
            _settings: settings.bind_to_scope(),
            project_dir,
        })
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn create_dir(&self, path: &str) -> Result<()> {
        let dir_path = self.project_dir.join(path);
        fs::create_dir_all(&dir_path)
            .with_context(|| format!("Failed to create directory:{}", dir_path.display()))
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn export_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("export");
        cmd
    }

    pub fn import_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("import");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.project_dir.join(path).exists()
    }
}

fn escape_regex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if "\\.+*?()|[]{}^$#&-~".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
