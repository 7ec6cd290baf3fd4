use std::fs;
use std::io::Write;
use std::path::Path;

use super::project::Project;
use tempfile::TempDir;

pub const CONFIG_FILE: &str = "ccpg.toml";

pub struct ProjectBuilder {
    files: Vec<(String, String)>,
    dirs: Vec<String>,
    root: TempDir,
}

pub fn tempdir() -> ProjectBuilder {
    ProjectBuilder {
        files: Vec::new(),
        dirs: Vec::new(),
        root: tempfile::Builder::new().prefix("ccpg").tempdir().unwrap(),
    }
}

impl ProjectBuilder {
    /// writes `ccpg.toml` naming a fake IDE found at the given `candidates`
    pub fn with_ide_config(self, candidates: &[&Path]) -> Self {
        let candidates = candidates
            .iter()
            .map(|c| format!("'{}'", c.display()))
            .collect::<Vec<_>>()
            .join(", ");
        self.file(
            CONFIG_FILE,
            format!("[ide]\nname = \"Fake IDE\"\ncandidates = [{candidates}]\n"),
        )
    }

    /// an IDE configuration where no candidate can ever be found
    pub fn without_ide(self) -> Self {
        self.file(
            CONFIG_FILE,
            "[ide]\nname = \"Fake IDE\"\ncandidates = ['/nonexistent/ccpg/fake-ide']\n",
        )
    }

    pub fn file(mut self, name: &str, contents: impl AsRef<str>) -> Self {
        self.files.retain(|(f, _)| f != name);
        self.files
            .push((name.to_string(), contents.as_ref().to_string()));
        self
    }

    pub fn dir(mut self, name: &str) -> Self {
        self.dirs.push(name.to_string());
        self
    }

    pub fn build(self) -> Project {
        let path = self.root.path();

        for dir in self.dirs.iter() {
            fs::create_dir_all(path.join(dir))
                .unwrap_or_else(|_| panic!("couldn't create {dir:?} directory"));
        }

        for (file, contents) in self.files.iter() {
            let path = path.join(file);
            let parent = path
                .parent()
                .unwrap_or_else(|| panic!("couldn't find parent dir of {path:?}"));

            fs::create_dir_all(parent)
                .unwrap_or_else(|_| panic!("couldn't create {parent:?} directory"));

            fs::File::create(&path)
                .unwrap_or_else(|_| panic!("couldn't create file {path:?}"))
                .write_all(contents.as_bytes())
                .unwrap_or_else(|_| panic!("couldn't write to file {path:?}: {contents:?}"));
        }

        Project { root: self.root }
    }
}
