use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::CliArgs;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Config {
    pub version: u32,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub repos: ReposConfig,
}

/// Default locations. Values may start with `~`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct PathsConfig {
    pub repo_root: PathBuf,
    pub perforce_root: PathBuf,
    pub transcript_dir: PathBuf,
    pub ssh_public_key: PathBuf,
}

/// External programs each command shells out to
#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct ToolsConfig {
    /// Used when neither `--editor` nor `$EDITOR` is set
    pub editor: String,
    pub clipboard_editor: String,
    pub fuzzy_selector: String,
    pub search: String,
    pub perforce: String,
    pub remote_shell: String,
    pub elevated_shell: String,
    pub transcript_recorder: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct ReposConfig {
    pub truncate_paths: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            paths: PathsConfig::default(),
            tools: ToolsConfig::default(),
            repos: ReposConfig::default(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let transcript_dir = ProjectDirs::from("", "", "shellkit")
            .map(|dirs| dirs.data_dir().join("transcripts"))
            .unwrap_or_else(|| home.join(".shellkit").join("transcripts"));

        Self {
            repo_root: home.join("src"),
            perforce_root: home.join("p4"),
            transcript_dir,
            ssh_public_key: home.join(".ssh").join("id_rsa.pub"),
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            editor: "gvim".to_string(),
            clipboard_editor: "gvim".to_string(),
            fuzzy_selector: "fzf".to_string(),
            search: "rg".to_string(),
            perforce: "p4".to_string(),
            remote_shell: if cfg!(windows) { "plink" } else { "ssh" }.to_string(),
            elevated_shell: "pwsh".to_string(),
            transcript_recorder: None,
        }
    }
}

impl Default for ReposConfig {
    fn default() -> Self {
        Self {
            truncate_paths: true,
        }
    }
}

pub fn get_default_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "shellkit")
        .context("Failed to determine project directories")?;

    let config_dir = proj_dirs.config_dir();
    Ok(config_dir.join("shellkit.toml"))
}

/// Expand a leading `~` and environment variables in a configured path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(shellexpand::tilde(&raw).as_ref()),
    }
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p,
            None => get_default_config_path()?,
        };

        if !path.exists() {
            let default_config = Config::default();
            // Create directory if it doesn't exist
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
            default_config.save(&path)?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    pub fn from_cli_and_file(cli_args: &CliArgs) -> Result<Self> {
        let mut config = Self::load(cli_args.config.clone())?;

        // CLI args override config file
        if let Some(selector) = &cli_args.selector {
            config.tools.fuzzy_selector = selector.clone();
        }

        config.paths.repo_root = expand_path(&config.paths.repo_root);
        config.paths.perforce_root = expand_path(&config.paths.perforce_root);
        config.paths.transcript_dir = expand_path(&config.paths.transcript_dir);
        config.paths.ssh_public_key = expand_path(&config.paths.ssh_public_key);

        Ok(config)
    }
}
