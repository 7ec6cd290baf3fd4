use anyhow::Result;
use console::style;
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::app_config::IdeConfig;
use crate::interactive::{self, Prompt};
use crate::utils;

/// How the offer to open the project ended.
#[derive(Debug, PartialEq)]
pub enum LaunchOutcome {
    Declined,
    Launched(PathBuf),
    InvalidPath(String),
    SpawnFailed(PathBuf),
}

/// Offers to open a generated project in the configured IDE.
pub struct IdeLauncher {
    name: String,
    candidates: Vec<PathBuf>,
}

impl From<IdeConfig> for IdeLauncher {
    fn from(config: IdeConfig) -> Self {
        Self {
            name: config.name,
            candidates: config.candidates,
        }
    }
}

impl IdeLauncher {
    /// First candidate that exists on disk.
    pub fn find(&self) -> Option<PathBuf> {
        self.candidates
            .iter()
            .filter_map(|candidate| match utils::expand_home(candidate) {
                Ok(path) => Some(path),
                Err(e) => {
                    debug!("skipping {}: {e}", candidate.display());
                    None
                }
            })
            .find(|path| path.exists())
    }

    /// Ask, search, fall back to a typed path, then launch. Never retries.
    pub fn offer(&self, prompt: &mut dyn Prompt, project: &Path) -> Result<LaunchOutcome> {
        let question = format!("Do you want to open the project in {}?", self.name);
        if !interactive::confirm(prompt, &question, "Invalid input.")? {
            return Ok(LaunchOutcome::Declined);
        }

        let executable = match self.find() {
            Some(executable) => {
                info!(
                    "{}",
                    style(format!("Opening {} in {}...", project.display(), self.name)).bold()
                );
                executable
            }
            None => {
                info!("{} not found automatically.", self.name);
                let typed = prompt.ask(&format!(
                    "Please enter the path to the {} executable manually",
                    self.name
                ))?;
                let typed = utils::strip_quotes(&typed);
                match utils::expand_home(typed) {
                    Ok(path) if !typed.is_empty() && path.exists() => path,
                    _ => {
                        error!("{}", style("The provided path is invalid.").bold().red());
                        return Ok(LaunchOutcome::InvalidPath(typed.to_string()));
                    }
                }
            }
        };

        Ok(match launch(&executable, project) {
            Ok(()) => LaunchOutcome::Launched(executable),
            Err(e) => {
                error!(
                    "{} {}: {e}",
                    style("Cannot start").bold().red(),
                    style(executable.display()).bold()
                );
                LaunchOutcome::SpawnFailed(executable)
            }
        })
    }
}

/// Start `executable` with `project` as its only argument and do not wait for it.
pub fn launch(executable: &Path, project: &Path) -> std::io::Result<()> {
    let child = Command::new(executable)
        .arg(project)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    debug!("started {} (pid {})", executable.display(), child.id());
    Ok(())
}
