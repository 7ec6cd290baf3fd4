use anyhow::{Context, Result};
use console::style;
use liquid::Parser;
use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::project::{ProjectDir, ProjectName};
use crate::template::{self, create_liquid_engine};

/// Sub directories of every generated project.
pub const SUB_DIRS: [&str; 5] = ["src", "include", "vendor", "docs", "res"];

pub const MAIN_CPP_PATH: &str = "src/main.cpp";
pub const CMAKE_LISTS_PATH: &str = "CMakeLists.txt";
pub const GITIGNORE_PATH: &str = ".gitignore";
pub const README_PATH: &str = "README.md";

/// Writes the skeleton of a C++/CMake project into a [`ProjectDir`].
///
/// Nothing is rolled back on failure: directories and files written before
/// an error stay on disk.
pub struct Scaffold<'a> {
    name: &'a ProjectName,
    dir: &'a ProjectDir,
    parser: Parser,
}

impl<'a> Scaffold<'a> {
    pub fn new(name: &'a ProjectName, dir: &'a ProjectDir) -> Self {
        Self {
            name,
            dir,
            parser: create_liquid_engine(),
        }
    }

    /// Create the project root and its sub directories.
    /// Directories that already exist are left alone.
    pub fn create_dirs(&self) -> Result<()> {
        fs::create_dir_all(self.dir).with_context(|| format!("cannot create {}", self.dir))?;
        for sub_dir in SUB_DIRS {
            let path = self.dir.join(sub_dir);
            fs::create_dir_all(&path)
                .with_context(|| format!("cannot create {}", path.display()))?;
        }
        Ok(())
    }

    /// `src/main.cpp`, `CMakeLists.txt` and `.gitignore`.
    pub fn write_sources(&self) -> Result<()> {
        let main_cpp = template::render(&self.parser, template::MAIN_CPP, self.name)?;
        self.write(MAIN_CPP_PATH, &main_cpp)?;
        let cmake_lists = template::render(&self.parser, template::CMAKE_LISTS, self.name)?;
        self.write(CMAKE_LISTS_PATH, &cmake_lists)?;
        self.write(GITIGNORE_PATH, template::GITIGNORE)?;
        Ok(())
    }

    pub fn write_readme(&self) -> Result<()> {
        let readme = template::render(&self.parser, template::README, self.name)?;
        self.write(README_PATH, &readme)?;
        info!("{}", style("README.md created.").green());
        Ok(())
    }

    fn write(&self, relative: impl AsRef<Path>, contents: &str) -> Result<()> {
        let path = self.dir.join(relative);
        fs::write(&path, contents).with_context(|| {
            format!(
                "{} {}",
                style("Error writing file").bold().red(),
                style(path.display()).bold()
            )
        })?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}
