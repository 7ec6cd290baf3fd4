use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use super::ProjectName;

/// Absolute location of the project being generated.
#[derive(Debug, PartialEq)]
pub struct ProjectDir(PathBuf);

impl AsRef<Path> for ProjectDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl Display for ProjectDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}

impl ProjectDir {
    /// `base` is expected to be absolute already.
    pub fn new(base: &Path, name: &ProjectName) -> Self {
        Self(base.join(name.as_ref()))
    }

    pub fn join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.0.join(path)
    }
}
