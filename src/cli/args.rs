use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A Pomodoro timer for the terminal")]
#[command(long_about = "pomo - A Pomodoro timer for the terminal

Alternates work sessions with short breaks, and takes a long break after
every fourth work session. Rings the terminal bell and shows a desktop
notification when an interval ends.

QUICK START:
  pomo                      Open the interactive timer
  pomo run                  Run one session in line mode
  pomo run -n 4 --work 50   Run four 50-minute work/break sessions
  pomo config show          Show the effective configuration

Durations that are not positive whole minutes fall back to the defaults
(work 25, short break 5, long break 15).")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Log debug detail to ~/.pomo/pomo.log
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run (defaults to the interactive timer)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer
    ///
    /// Shows a progress ring, the current session and cycle position, and a
    /// settings panel for the three durations.
    ///
    /// # Keys
    ///
    ///   s / p      Start / pause
    ///   space      Start or pause
    ///   r          Reset the current session
    ///   m          Switch between work and rest mode (while paused)
    ///   e          Edit durations (Tab to move, Enter to save, Esc to cancel)
    ///   q          Quit
    Tui(TimerArgs),

    /// Run sessions in line mode
    ///
    /// Counts down on a single status line, starting each following
    /// interval automatically until the requested number of sessions has
    /// completed.
    ///
    /// # Examples
    ///
    ///   pomo run                  One work session
    ///   pomo run -n 2             A work session and its break
    ///   pomo run --short 10 -n 2  ...with a 10-minute break
    Run(RunArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Outputs completion script for the specified shell.
    /// Redirect to a file or source directly.
    ///
    /// Example: pomo completions bash > ~/.bash_completion.d/pomo
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}

/// Duration overrides shared by the timer commands.
///
/// Values are minutes. Anything that is not a positive whole number falls
/// back to the default for that kind.
#[derive(Args, Debug, Clone, Default)]
pub struct TimerArgs {
    /// Work session minutes
    #[arg(long, short = 'w', env = "POMO_WORK_MINUTES")]
    pub work: Option<String>,

    /// Short break minutes
    #[arg(long, short = 's', env = "POMO_SHORT_BREAK_MINUTES")]
    pub short: Option<String>,

    /// Long break minutes
    #[arg(long, short = 'l', env = "POMO_LONG_BREAK_MINUTES")]
    pub long: Option<String>,
}

/// Arguments for line-mode runs.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub timer: TimerArgs,

    /// Number of sessions (work or break) to run
    #[arg(
        long,
        short = 'n',
        default_value = "1",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub sessions: u32,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_no_subcommand() {
        let cli = Cli::try_parse_from(["pomo"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.output, OutputFormat::Pretty);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_tui_with_durations() {
        let cli = Cli::try_parse_from(["pomo", "tui", "--work", "50", "-s", "10"]).unwrap();
        if let Some(Commands::Tui(args)) = cli.command {
            assert_eq!(args.work.as_deref(), Some("50"));
            assert_eq!(args.short.as_deref(), Some("10"));
            assert!(args.long.is_none());
        } else {
            panic!("Expected Tui command");
        }
    }

    #[test]
    fn test_cli_run_defaults() {
        let cli = Cli::try_parse_from(["pomo", "run"]).unwrap();
        if let Some(Commands::Run(args)) = cli.command {
            assert_eq!(args.sessions, 1);
            assert!(args.timer.work.is_none());
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_run_rejects_zero_sessions() {
        assert!(Cli::try_parse_from(["pomo", "run", "-n", "0"]).is_err());
    }

    #[test]
    fn test_cli_run_accepts_invalid_minutes() {
        // Sanitized later, not rejected by the parser
        let cli = Cli::try_parse_from(["pomo", "run", "--long", "abc"]).unwrap();
        if let Some(Commands::Run(args)) = cli.command {
            assert_eq!(args.timer.long.as_deref(), Some("abc"));
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_config_init_force() {
        let cli = Cli::try_parse_from(["pomo", "config", "init", "--force"]).unwrap();
        if let Some(Commands::Config(args)) = cli.command {
            assert!(matches!(args.command, ConfigCommands::Init { force: true }));
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_cli_global_output_flag() {
        let cli = Cli::try_parse_from(["pomo", "config", "show", "-o", "json"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["pomo", "completions", "zsh", "-i"]).unwrap();
        if let Some(Commands::Completions { shell, install }) = cli.command {
            assert_eq!(shell, "zsh");
            assert!(install);
        } else {
            panic!("Expected Completions command");
        }
    }

    #[test]
    fn test_output_format_default() {
        assert!(matches!(OutputFormat::default(), OutputFormat::Pretty));
    }
}
