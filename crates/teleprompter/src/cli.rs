use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::presentation::Mode;
use crate::theme::Theme;

#[derive(Parser)]
#[command(name = "teleprompter")]
#[command(author, version, about)]
#[command(long_about = "A full-screen teleprompter.\n\n\
    Type or paste a script, then present it as a smooth scroll or a\n\
    character-by-character typewriter reveal.\n\n\
    Examples:\n  \
    teleprompter                      Launch fullscreen on the editor\n  \
    teleprompter --windowed           Launch in a window\n  \
    teleprompter --mode typewriter    Start presentations in typewriter mode\n  \
    teleprompter config set defaults.speed 45")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Presentation speed (1-100)
    #[arg(long, global = false)]
    pub speed: Option<u32>,

    /// Presentation font size in pixels (24-128)
    #[arg(long, global = false)]
    pub font_size: Option<u32>,

    /// Presentation mode
    #[arg(long, value_enum, global = false)]
    pub mode: Option<Mode>,

    /// Start presentations mirrored
    #[arg(long, global = false)]
    pub mirror: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.mode, defaults.speed, defaults.font_size)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::commands::print_version();
                Ok(())
            }
            None => {
                let config = Config::load_or_default();
                let theme = Theme::from_name(config.theme_name());
                let mut settings = config.presentation_settings();
                if let Some(mode) = self.mode {
                    settings.mode = mode;
                }
                if let Some(speed) = self.speed {
                    settings.speed = speed;
                }
                if let Some(size) = self.font_size {
                    settings.font_size = size;
                }
                if self.mirror {
                    settings.mirrored = true;
                }
                crate::app::run(self.windowed, theme, settings.clamped())
            }
        }
    }
}
