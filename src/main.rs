//! tui-shell - CLI entry point
//!
//! With no arguments, takes over the terminal and shows the configured text
//! until Ctrl+C. The `config` subcommand manages the configuration file.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tui_shell::config::{default, loader::ConfigLoader, xdg};
use tui_shell::{logging, CrosstermConsole, Shell, TextView};

/// Minimal terminal application shell
#[derive(Parser)]
#[command(name = "tui-shell")]
#[command(version, about = "Show a line of text in the terminal until Ctrl+C")]
struct Cli {
    /// Configuration file (defaults to the XDG config path)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands for the tui-shell CLI
#[derive(Subcommand)]
enum Commands {
    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration file actions
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file and print the effective settings
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        None => run_shell(cli.config.as_deref()),
        Some(Commands::Config { action }) => run_config_command(action, cli.config.as_deref()),
    }
}

/// Loads config, sets up logging, and runs the shell until quit.
fn run_shell(config_path: Option<&Path>) -> ExitCode {
    let config = match ConfigLoader::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(&config.log) {
        eprintln!("Error: failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    let options = match config.shell.options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut shell = Shell::new(CrosstermConsole::new(), options);
    shell.set_root(
        TextView::new(config.display.buffer()),
        config.shell.fullscreen,
    );

    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("shell failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Handles `tui-shell config <action>`.
fn run_config_command(action: ConfigAction, config_path: Option<&Path>) -> ExitCode {
    let result = match action {
        ConfigAction::Init { force } => {
            let created = match config_path {
                Some(path) => {
                    default::create_default_config_at(path, force).map(|()| path.to_path_buf())
                }
                None => default::create_default_config(force),
            };
            created.map(|path| println!("Created configuration at {}", path.display()))
        }
        ConfigAction::Path => {
            let path = config_path
                .map(Path::to_path_buf)
                .unwrap_or_else(xdg::config_path);
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Validate => ConfigLoader::load(config_path).map(|config| {
            println!("Configuration is valid");
            println!("{config:#?}");
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // Verify the CLI configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_runs_shell() {
        let cli = Cli::try_parse_from(["tui-shell"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_custom_config_path() {
        let cli = Cli::try_parse_from(["tui-shell", "--config", "/custom/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_config_flag_after_subcommand() {
        let cli =
            Cli::try_parse_from(["tui-shell", "config", "path", "--config", "/x.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/x.toml")));
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Path
            })
        ));
    }

    #[test]
    fn test_config_init_force_flag() {
        let cli = Cli::try_parse_from(["tui-shell", "config", "init", "--force"]).unwrap();
        match cli.command {
            Some(Commands::Config {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_config_without_action_fails() {
        assert!(Cli::try_parse_from(["tui-shell", "config"]).is_err());
    }

    #[test]
    fn test_unknown_argument_fails() {
        assert!(Cli::try_parse_from(["tui-shell", "--bogus"]).is_err());
    }
}
