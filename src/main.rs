/// Main file
mod app_config;
mod app_log;
mod args;
mod ide;
mod interactive;
mod project;
mod scaffold;
mod template;
mod utils;

use app_config::AppConfig;
use app_log::log_env_init;
use args::*;
use ide::IdeLauncher;
use interactive::Prompt;
use project::{ProjectDir, ProjectName};
use scaffold::Scaffold;

use anyhow::{bail, Result};
use console::style;
use log::{debug, info};
use std::{
    env,
    path::{Path, PathBuf},
};

fn main() -> Result<()> {
    let args = resolve_args();
    log_env_init(args.verbose);
    print_banner();
    let mut prompt = interactive::prompter();
    generate(&args, prompt.as_mut())?;
    Ok(())
}

fn print_banner() {
    let width = 33;
    info!("{}", style(format!("╔{}╗", "═".repeat(width))).blue());
    info!(
        "{}{}{}",
        style("║").blue(),
        style(format!("{:^width$}", "CPP-CMAKE Project Generator")).yellow(),
        style("║").blue()
    );
    info!(
        "{}{}{}",
        style("║").blue(),
        style(format!("{:^width$}", "(ccpg)")).yellow(),
        style("║").blue()
    );
    info!("{}", style(format!("╚{}╝", "═".repeat(width))).blue());
}

/// Generate a C++/CMake project, returns its directory or `None` when the
/// user quit at the name prompt.
fn generate(args: &AppArgs, prompt: &mut dyn Prompt) -> Result<Option<PathBuf>> {
    // read the configuration first, a broken one must not leave a half made project
    let config = AppConfig::load(args.config.as_deref())?;
    let base = destination(args.destination.as_deref())?;

    let name = match &args.name {
        Some(name) => match ProjectName::validate(name, &base) {
            Ok(name) => name,
            Err(e) => bail!("{}", style(e).bold().red()),
        },
        None => match interactive::name(prompt, &base)? {
            Some(name) => name,
            None => {
                info!("Goodbye!");
                return Ok(None);
            }
        },
    };

    let project_dir = ProjectDir::new(&base, &name);
    info!(
        "🔧 {}",
        style(format!("Destination: {project_dir} ...")).bold().yellow()
    );

    let scaffold = Scaffold::new(&name, &project_dir);
    scaffold.create_dirs()?;
    scaffold.write_sources()?;
    if interactive::confirm(
        prompt,
        "Do you want to create a README.md?",
        "Invalid input. Please enter 'y' for yes or 'n' for no.",
    )? {
        scaffold.write_readme()?;
    }

    info!(
        "✨ {} {}",
        style("Done!").bold().green(),
        style(format!("Project '{name}' created successfully!")).bold()
    );

    let outcome = IdeLauncher::from(config.ide()).offer(prompt, project_dir.as_ref())?;
    debug!("IDE launch: {outcome:?}");

    Ok(Some(project_dir.as_ref().to_owned()))
}

/// Absolute directory the project is created in.
fn destination(destination: Option<&Path>) -> Result<PathBuf> {
    let cwd = env::current_dir()?;
    Ok(match destination {
        Some(path) => cwd.join(utils::expand_home(path)?),
        None => cwd,
    })
}
