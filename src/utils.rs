use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// home path wrapper
pub fn home() -> Result<PathBuf> {
    home::home_dir().context("$HOME was not set")
}

/// deals with `~/` and `$HOME/` prefixes
pub fn expand_home(p: impl AsRef<Path>) -> Result<PathBuf> {
    let p = p.as_ref();
    let p = if p.starts_with("~/") {
        home()?.join(p.strip_prefix("~/")?)
    } else if p.starts_with("$HOME/") {
        home()?.join(p.strip_prefix("$HOME/")?)
    } else {
        p.to_path_buf()
    };
    Ok(p)
}

/// Drop surrounding whitespace and quote characters, as left behind by
/// "copy as path" in most file managers.
pub fn strip_quotes(input: &str) -> &str {
    input.trim().trim_matches(|c| c == '"' || c == '\'').trim()
}
