//! Shell completion scripts for `huddle`.

use anyhow::{Context, Result, anyhow};
use clap::CommandFactory;
use clap_complete::{Generator, Shell as CompletionShell, generate};
use std::{fs, io::Write, path::PathBuf};
use tracing::info;

use crate::cli::{AppContext, Cli, CompletionsArgs, Shell};

const BIN_NAME: &str = "huddle";

impl From<Shell> for CompletionShell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => CompletionShell::Bash,
            Shell::Zsh => CompletionShell::Zsh,
            Shell::Fish => CompletionShell::Fish,
            Shell::PowerShell => CompletionShell::PowerShell,
            Shell::Elvish => CompletionShell::Elvish,
        }
    }
}

/// Completion script for `shell`, covering every subcommand and criteria flag
pub fn completion_script(shell: Shell) -> Result<String> {
    let mut buf = Vec::new();
    generate(CompletionShell::from(shell), &mut Cli::command(), BIN_NAME, &mut buf);
    String::from_utf8(buf).context("completion script is not UTF-8")
}

/// Where `run` writes the script, e.g. `<dir>/huddle.bash` or `<dir>/_huddle`
pub fn script_path(shell: Shell, dir: &std::path::Path) -> PathBuf {
    dir.join(CompletionShell::from(shell).file_name(BIN_NAME))
}

pub fn run(args: CompletionsArgs, ctx: &AppContext) -> Result<()> {
    let script = completion_script(args.shell.clone())?;

    if args.stdout {
        std::io::stdout()
            .write_all(script.as_bytes())
            .context("write completion to stdout")?;
        return Ok(());
    }

    let dir = args
        .out_dir
        .ok_or_else(|| anyhow!("--out-dir is required unless --stdout is set"))?;
    fs::create_dir_all(&dir).context("create --out-dir")?;

    let path = script_path(args.shell, &dir);
    fs::write(&path, script).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "completion written");

    if !ctx.quiet {
        eprintln!("Wrote completion to {}", path.display());
    }
    Ok(())
}
