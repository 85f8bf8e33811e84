//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, PowerShell, and
//! elvish.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::PomoError;

/// Execute the completions command.
///
/// # Errors
///
/// Returns an error if the shell name is unknown or the script is not UTF-8.
pub fn completions(shell: &str, install: bool) -> Result<String, PomoError> {
    let shell_type = shell_from_str(shell).ok_or_else(|| {
        PomoError::Parse(format!(
            "Unknown shell: {shell}. Supported: bash, zsh, fish, powershell, elvish"
        ))
    })?;

    if install {
        Ok(completion_install_instructions(shell_type))
    } else {
        generate_completions(shell_type)
    }
}

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, PomoError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "pomo", &mut buf);
    String::from_utf8(buf).map_err(|e| PomoError::Parse(format!("UTF-8 error: {e}")))
}

/// Get shell from string name.
#[must_use]
pub fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}

/// Get installation instructions for shell completions.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r"# Add to ~/.bashrc or ~/.bash_profile:
source <(pomo completions bash)

# Or save to a file:
pomo completions bash > /usr/local/etc/bash_completion.d/pomo
"
        .to_string(),

        Shell::Zsh => r"# Add to ~/.zshrc (before compinit):
source <(pomo completions zsh)

# Or save to your fpath:
pomo completions zsh > ~/.zsh/completions/_pomo
"
        .to_string(),

        Shell::Fish => r"# Save to fish completions directory:
pomo completions fish > ~/.config/fish/completions/pomo.fish
"
        .to_string(),

        Shell::PowerShell => r"# Add to your PowerShell profile:
pomo completions powershell | Out-String | Invoke-Expression
"
        .to_string(),

        Shell::Elvish => r"# Add to ~/.elvish/rc.elv:
eval (pomo completions elvish | slurp)
"
        .to_string(),

        _ => "# See your shell's documentation for loading completion scripts\n".to_string(),
    }
}
