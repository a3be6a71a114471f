//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary
const BIN_NAME: &str = "mesa";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    ///
    /// The script goes to stdout; installation hints go to stderr unless
    /// `--quiet` is set.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            for line in install_hint(self.shell) {
                eprintln!("# {line}");
            }
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

fn install_hint(shell: Shell) -> &'static [&'static str] {
    match shell {
        Shell::Bash => &[
            "mesa completions bash > ~/.local/share/bash-completion/completions/mesa",
            "or in ~/.bashrc: eval \"$(mesa completions bash)\"",
        ],
        Shell::Zsh => &[
            "mesa completions zsh > ~/.zsh/completions/_mesa",
            "with ~/.zsh/completions in $fpath",
        ],
        Shell::Fish => &["mesa completions fish > ~/.config/fish/completions/mesa.fish"],
        Shell::PowerShell => &["mesa completions powershell | Out-String | Invoke-Expression"],
        _ => &[],
    }
}
