use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::utils;

pub const CONFIG_FILE_NAME: &str = ".ccpg.toml";

#[derive(Deserialize, Debug, PartialEq, Default, Clone)]
pub struct AppConfig {
    pub ide: Option<IdeConfig>,
}

/// The IDE to offer once the project exists, and where to look for it.
#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct IdeConfig {
    #[serde(default = "default_ide_name")]
    pub name: String,
    /// Checked in order, the first existing path wins.
    #[serde(default = "default_candidates")]
    pub candidates: Vec<PathBuf>,
}

impl Default for IdeConfig {
    fn default() -> Self {
        Self {
            name: default_ide_name(),
            candidates: default_candidates(),
        }
    }
}

#[cfg(windows)]
fn default_ide_name() -> String {
    "Visual Studio".to_string()
}

#[cfg(not(windows))]
fn default_ide_name() -> String {
    "Visual Studio Code".to_string()
}

#[cfg(windows)]
fn default_candidates() -> Vec<PathBuf> {
    [
        r"C:\Program Files\Microsoft Visual Studio\2022\Community\Common7\IDE\devenv.exe",
        r"C:\Program Files\Microsoft Visual Studio\2022\Professional\Common7\IDE\devenv.exe",
        r"C:\Program Files (x86)\Microsoft Visual Studio\2019\Community\Common7\IDE\devenv.exe",
        r"C:\Program Files (x86)\Microsoft Visual Studio\2019\Professional\Common7\IDE\devenv.exe",
        r"D:\VisualStudio\Common7\IDE\devenv.exe",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

#[cfg(not(windows))]
fn default_candidates() -> Vec<PathBuf> {
    [
        "/usr/bin/code",
        "/usr/local/bin/code",
        "/snap/bin/code",
        "/Applications/Visual Studio Code.app/Contents/Resources/app/bin/code",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

impl TryFrom<String> for AppConfig {
    type Error = toml::de::Error;

    fn try_from(contents: String) -> Result<Self, Self::Error> {
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl AppConfig {
    /// A missing file gives the default configuration.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = match fs::read_to_string(path) {
            Ok(contents) => Self::try_from(contents)
                .with_context(|| format!("invalid configuration file {}", path.display()))?,
            Err(e) => match e.kind() {
                ErrorKind::NotFound => {
                    debug!("no configuration at {}", path.display());
                    Self::default()
                }
                _ => anyhow::bail!(e),
            },
        };
        Ok(config)
    }

    /// Load `explicit` when given, otherwise `~/.ccpg.toml`.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_path(utils::expand_home(path)?),
            None => match utils::home() {
                Ok(home) => Self::from_path(home.join(CONFIG_FILE_NAME)),
                Err(_) => Ok(Self::default()),
            },
        }
    }

    pub fn ide(&self) -> IdeConfig {
        self.ide.clone().unwrap_or_default()
    }
}
