//! Command-line interface for seculog
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and validation
//! - Banner printing
//! - Subcommand handling (version, completion, config, exec, menu)
//!
//! The `exec` subcommand is the argument-parsed front end: it dispatches
//! one already-split command line and exits. The `menu` subcommand runs
//! the numbered-menu front end. With no subcommand the binary starts the
//! interactive REPL.

pub mod menu;

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use nu_ansi_term::Color;

use crate::config::Config;
use crate::error::Result;
use crate::executor::{CommandRouter, ExecutionContext};
use crate::formatter::Formatter;
use crate::parser::Command;
use crate::repl::SharedState;
use crate::store::RecordStore;

/// Local security-findings console
#[derive(Parser, Debug)]
#[command(
    name = "seculog",
    version,
    about = "Local security-findings console",
    long_about = "A local record-keeping console for security findings (targets and
vulnerabilities) with an interactive shell featuring contextual completion."
)]
pub struct CliArgs {
    /// Path to the findings database
    #[arg(long, value_name = "FILE")]
    pub database: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Output format (table, json, json-pretty)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Quiet mode (no banner)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (debug logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for seculog
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version,

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish, powershell, elvish)
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },

    /// Execute one command line and exit
    Exec {
        /// Command name followed by its arguments
        #[arg(value_name = "TOKEN", num_args = 1.., trailing_var_arg = true)]
        tokens: Vec<String>,
    },

    /// Run the numbered-menu front end
    Menu,
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        let args = CliArgs::parse();
        let config = Self::load_config(&args)?;

        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    fn load_config(args: &CliArgs) -> Result<Config> {
        let config_path = args.config_file.as_deref();
        let mut config = Config::load_from_file(config_path)?;

        if let Err(e) = config.validate() {
            eprintln!("Warning: Configuration validation failed: {}", e);
            eprintln!("Using default configuration instead.");
            config = Config::default();
        }

        Self::apply_args_to_config(&mut config, args);

        Ok(config)
    }

    /// Apply CLI arguments to configuration
    ///
    /// Overrides configuration values with CLI arguments where provided
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        if let Some(path) = &args.database {
            config.store.database_path = path.clone();
        }

        if let Some(format_name) = &args.format {
            match Config::parse_output_format(format_name) {
                Some(format) => config.display.format = format,
                None => eprintln!(
                    "Warning: Unknown format '{}', keeping '{}'",
                    format_name,
                    match config.display.format {
                        crate::config::OutputFormat::Table => "table",
                        crate::config::OutputFormat::Json => "json",
                        crate::config::OutputFormat::JsonPretty => "json-pretty",
                    }
                ),
            }
        }

        if args.no_color {
            config.display.color_output = false;
            config.display.syntax_highlighting = false;
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Handle subcommands, returning true when one was handled
    ///
    /// # Returns
    /// * `Result<bool>` - True if a subcommand ran and the process should exit
    pub fn handle_subcommand(&self) -> Result<bool> {
        match &self.args.command {
            Some(Commands::Version) => {
                self.show_version();
                Ok(true)
            }
            Some(Commands::Completion { shell }) => {
                self.generate_completion(*shell);
                Ok(true)
            }
            Some(Commands::Config { show, validate }) => {
                self.handle_config_command(*show, *validate)?;
                Ok(true)
            }
            Some(Commands::Exec { tokens }) => {
                self.run_exec(tokens)?;
                Ok(true)
            }
            Some(Commands::Menu) => {
                let context = self.build_context()?;
                menu::run(&context, self.config.display.color_output)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Show version information
    fn show_version(&self) {
        println!("seculog version {}", env!("CARGO_PKG_VERSION"));
        println!("Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    }

    /// Generate shell completion script on stdout
    fn generate_completion(&self, shell: Shell) {
        let mut command = CliArgs::command();
        clap_complete::generate(shell, &mut command, "seculog", &mut io::stdout());
    }

    /// Handle config subcommand
    ///
    /// # Arguments
    /// * `show` - Whether to show configuration
    /// * `validate` - Whether to validate configuration file
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.config.validate()?;
            println!("Configuration is valid.");
        }
        if show || !validate {
            let rendered = toml::to_string_pretty(&self.config)
                .map_err(|e| crate::error::SeculogError::Generic(e.to_string()))?;
            println!("{rendered}");
        }
        Ok(())
    }

    /// Dispatch one already-split command line
    fn run_exec(&self, tokens: &[String]) -> Result<()> {
        if tokens.is_empty() {
            return Ok(());
        }

        let context = self.build_context()?;
        let router = CommandRouter::new(context);
        let command = Command::resolve(tokens)?;
        let result = router.execute(command)?;

        let formatter = Formatter::from_config(&self.config.display);
        let output = formatter.format(&result)?;
        if !output.is_empty() {
            println!("{output}");
        }
        Ok(())
    }

    /// Build the session context for a front end
    pub fn build_context(&self) -> Result<ExecutionContext> {
        let store = RecordStore::new(self.config.store.clone());
        store.ensure_schema()?;
        let shared_state = SharedState::with_config(&self.config.display);
        Ok(ExecutionContext::new(store, shared_state))
    }

    /// Print the startup banner
    pub fn print_banner(&self) {
        if self.args.quiet {
            return;
        }

        let rule = "===================================================";
        let title = format!(
            "   SECULOG LOCAL - Security Findings Console v{}",
            env!("CARGO_PKG_VERSION")
        );
        let hint = "Type 'help' for commands, 'exit' to quit.";

        if self.config.display.color_output {
            println!("{}", Color::Cyan.paint(rule));
            println!("{}", Color::Red.bold().paint(title));
            println!("{}", Color::Cyan.paint(rule));
            println!("{}", Color::DarkGray.paint(hint));
        } else {
            println!("{rule}");
            println!("{title}");
            println!("{rule}");
            println!("{hint}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(vec!["seculog"]).unwrap();
        assert!(args.database.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn test_cli_args_with_flags() {
        let args = CliArgs::try_parse_from(vec!["seculog", "--no-color", "--quiet"]).unwrap();
        assert!(args.no_color);
        assert!(args.quiet);
    }

    #[test]
    fn test_exec_subcommand_collects_tokens() {
        let args = CliArgs::try_parse_from(vec![
            "seculog",
            "exec",
            "add_target",
            "My Site",
            "example.com",
            "Web",
        ])
        .unwrap();
        let Some(Commands::Exec { tokens }) = args.command else {
            panic!("expected exec subcommand");
        };
        assert_eq!(tokens, vec!["add_target", "My Site", "example.com", "Web"]);
    }

    #[test]
    fn test_args_override_config() {
        let args = CliArgs::try_parse_from(vec![
            "seculog",
            "--no-color",
            "--format",
            "json",
            "--database",
            "/tmp/custom.db",
        ])
        .unwrap();
        let mut config = Config::default();
        CliInterface::apply_args_to_config(&mut config, &args);

        assert!(!config.display.color_output);
        assert_eq!(config.display.format, crate::config::OutputFormat::Json);
        assert_eq!(
            config.store.database_path,
            PathBuf::from("/tmp/custom.db")
        );
    }
}
