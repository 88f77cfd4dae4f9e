// CLI module - command-line argument parsing and handlers
//
// Top-level flags override the starting controls for one run. Subcommands
// manage the configuration file:
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults
// - config --update: Rewrite config with the current layout, keeping values

use crate::config::{Config, VERSION};
use crate::widget::{InputMode, InputType};
use clap::{Parser, Subcommand};
use std::io::Write;

/// inputspy - watch the events a text input fires
#[derive(Parser)]
#[command(name = "inputspy")]
#[command(version = VERSION)]
#[command(
    about = "Emulates a browser text input and logs every event it fires",
    long_about = None
)]
pub struct Cli {
    /// Input type to start with (text, password, email, number, tel, url, search)
    #[arg(long = "type", value_name = "TYPE")]
    pub input_type: Option<InputType>,

    /// inputmode hint to start with; an empty string leaves it unset
    #[arg(long, value_name = "MODE", value_parser = parse_input_mode)]
    pub inputmode: Option<InputModeArg>,

    /// Theme name (Spy Dark, Spy Light, Terminal)
    #[arg(long)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Parsed `--inputmode` value (`None` inside = attribute removed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputModeArg(pub Option<InputMode>);

fn parse_input_mode(s: &str) -> Result<InputModeArg, String> {
    InputMode::parse_option(s).map(InputModeArg)
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Update config with new defaults (preserves user values)
        #[arg(long)]
        update: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    /// Apply command-line overrides on top of env/file/default config
    pub fn apply(&self, config: &mut Config) {
        if let Some(input_type) = self.input_type {
            config.initial_type = input_type;
        }
        if let Some(InputModeArg(mode)) = self.inputmode {
            config.initial_input_mode = mode;
        }
        if let Some(ref theme) = self.theme {
            config.theme = theme.clone();
        }
    }
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub fn handle_command(cli: &Cli) -> bool {
    match cli.command {
        Some(Commands::Config {
            show,
            reset,
            update,
            path,
        }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset();
            } else if update {
                handle_config_update();
            } else {
                // No flag provided, show help
                println!("Usage: inputspy config [--show|--reset|--update|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --update  Update config with new defaults (preserves user values)");
                println!("  --path    Show config file path");
            }
            true
        }
        None => false, // No subcommand, run the TUI
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

/// Ask a yes/no question on stderr; anything but "y" is no
fn confirm(prompt: &str) -> bool {
    eprint!("{} [y/N] ", prompt);
    if std::io::stderr().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    match std::io::stdin().read_line(&mut input) {
        Ok(_) => input.trim().eq_ignore_ascii_case("y"),
        Err(_) => false,
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists()
        && !confirm(&format!(
            "Config file exists at {}. Overwrite?",
            path.display()
        ))
    {
        println!("Aborted.");
        return;
    }

    if let Err(e) = Config::default().save() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

fn handle_config_update() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        // No existing config, just create default
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
        return;
    }

    // Backup existing
    let backup_path = path.with_extension("toml.bak");
    if let Err(e) = std::fs::copy(&path, &backup_path) {
        eprintln!("Warning: Could not create backup: {}", e);
    } else {
        println!("Backup created: {}", backup_path.display());
    }

    // Re-render the effective config with the current template
    if let Err(e) = Config::from_env().save() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    println!("Config updated with latest structure: {}", path.display());
    println!("Your values have been preserved.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from(["inputspy", "--type", "number", "--inputmode", "decimal"]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.initial_type, InputType::Number);
        assert_eq!(config.initial_input_mode, Some(InputMode::Decimal));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_empty_inputmode_clears_hint() {
        let cli = Cli::parse_from(["inputspy", "--inputmode", ""]);
        let mut config = Config::default();
        config.initial_input_mode = Some(InputMode::Tel);
        cli.apply(&mut config);

        assert_eq!(config.initial_input_mode, None);
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(Cli::try_parse_from(["inputspy", "--type", "checkbox"]).is_err());
    }

    #[test]
    fn test_config_subcommand_parses() {
        let cli = Cli::parse_from(["inputspy", "config", "--path"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config { path: true, .. })
        ));
    }
}
