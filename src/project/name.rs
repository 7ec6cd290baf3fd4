use std::fmt::Display;
use std::path::Path;

use thiserror::Error;

/// Reasons a candidate project name is refused.
#[derive(Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Project name cannot be empty.")]
    Empty,
    #[error("Error: Project '{0}' already exists!")]
    AlreadyExists(String),
}

/// A project name that was free on disk when it was validated.
/// It is used verbatim, both as directory name and inside generated files.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate `input` against the directory the project will be created in.
    ///
    /// Path separators are allowed: `group/app` creates `app` inside a new
    /// `group` directory, provided `group/app` does not exist yet.
    pub fn validate(input: &str, base: &Path) -> Result<Self, NameError> {
        let name = input.trim();
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        // symlink_metadata also catches dangling links
        if base.join(name).symlink_metadata().is_ok() {
            return Err(NameError::AlreadyExists(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
