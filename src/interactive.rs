use anyhow::{bail, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use log::{error, warn};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use crate::project::{NameError, ProjectName};

/// Typed at the name prompt to leave without generating anything.
pub const QUIT: &str = "q";

/// Asks one question and returns the raw line typed by the user.
pub trait Prompt {
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Prompt used when a human sits in front of a terminal.
#[derive(Default)]
pub struct TermPrompt {
    theme: ColorfulTheme,
}

impl Prompt for TermPrompt {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(Into::<anyhow::Error>::into)
    }
}

/// Line based prompt over any reader, for piped input.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            bail!("input ended while waiting for: {prompt}");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[cfg(test)]
impl<R> LinePrompt<R, Vec<u8>> {
    /// Everything written to the user so far.
    pub(crate) fn shown(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

/// Pick the prompt implementation matching how stdin/stdout are connected.
pub fn prompter() -> Box<dyn Prompt> {
    if io::stdin().is_terminal() && console::user_attended() {
        Box::<TermPrompt>::default()
    } else {
        Box::new(LinePrompt::new(io::stdin().lock(), io::stdout()))
    }
}

/// Ask for a project name until a valid one is given.
/// Returns `None` when the user quits.
pub fn name(prompt: &mut dyn Prompt, base: &Path) -> Result<Option<ProjectName>> {
    loop {
        let answer = prompt.ask("Enter project name or press 'q' to exit")?;
        if answer.trim() == QUIT {
            return Ok(None);
        }
        match ProjectName::validate(&answer, base) {
            Ok(name) => return Ok(Some(name)),
            Err(e @ NameError::Empty) => warn!("{}", style(e).bold().yellow()),
            Err(e @ NameError::AlreadyExists(_)) => error!("{}", style(e).bold().red()),
        }
    }
}

/// Interpret a yes/no answer. Empty means yes.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Ask a yes/no question until the answer can be understood.
pub fn confirm(prompt: &mut dyn Prompt, question: &str, invalid: &str) -> Result<bool> {
    let question = format!("{question} (y/n)");
    loop {
        let answer = prompt.ask(&question)?;
        if let Some(yes) = parse_yes_no(&answer) {
            return Ok(yes);
        }
        warn!("{}", style(invalid).bold().yellow());
    }
}
