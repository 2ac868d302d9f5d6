//! Seculog - Local Security Findings Console
//!
//! A local record-keeping tool for security findings backed by SQLite,
//! exposed through an interactive REPL with contextual completion, a
//! numbered menu, and a one-shot `exec` front end.
//!
//! # Usage
//!
//! ```bash
//! # Interactive shell
//! seculog
//!
//! # One-shot command
//! seculog exec show targets
//!
//! # Guided menu
//! seculog menu
//! ```

use tracing::Level;

use seculog::cli::CliInterface;
use seculog::completion::StoreOptionProvider;
use seculog::error::Result;
use seculog::executor::CommandRouter;
use seculog::formatter::Formatter;
use seculog::parser::{Command, tokenize};
use seculog::repl::{ReplEngine, ReplSignal, SharedState};

/// Application entry point
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Handle subcommands (version, completion, config, exec, menu)
/// 4. Otherwise start the interactive shell
fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    if cli.handle_subcommand()? {
        return Ok(());
    }

    cli.print_banner();

    run_interactive_mode(&cli)
}

/// Run the application in interactive REPL mode
fn run_interactive_mode(cli: &CliInterface) -> Result<()> {
    let context = cli.build_context()?;
    let provider = StoreOptionProvider::new(context.store().clone());
    let mut repl = ReplEngine::new(&cli.config().history, &cli.config().display, provider)?;
    let router = CommandRouter::new(context);

    run_repl_loop(cli, &mut repl, &router)?;

    println!("Goodbye!");
    Ok(())
}

/// Main REPL loop
///
/// Each iteration: refresh dynamic completion options (inside
/// `read_line`), prompt, tokenize, resolve, dispatch, render. Every
/// failure is rendered and the loop continues; only `exit` and
/// end-of-input leave it.
fn run_repl_loop(cli: &CliInterface, repl: &mut ReplEngine, router: &CommandRouter) -> Result<()> {
    loop {
        let line = match repl.read_line()? {
            ReplSignal::Line(line) => line,
            ReplSignal::Interrupt => continue,
            ReplSignal::EndOfInput => break,
        };

        let tokens = match tokenize(&line) {
            Ok(tokens) => tokens,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        // Blank line: re-prompt without dispatching
        if tokens.is_empty() {
            continue;
        }

        let command = match Command::resolve(&tokens) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match command {
            Command::Exit => break,
            Command::Clear => {
                if let Err(e) = clear_screen() {
                    eprintln!("{}", e);
                }
            }
            other => execute_and_display(cli, router, other),
        }
    }

    Ok(())
}

/// Execute a command and display its result
fn execute_and_display(cli: &CliInterface, router: &CommandRouter, command: Command) {
    match router.execute(command) {
        Ok(result) => display_result(cli, router.context().shared_state(), &result),
        Err(e) => eprintln!("{}", e),
    }
}

/// Display an execution result with the session's current format settings
fn display_result(cli: &CliInterface, shared_state: &SharedState, result: &seculog::ExecutionResult) {
    let mut display_config = cli.config().display.clone();
    display_config.format = shared_state.get_format();
    display_config.color_output = shared_state.get_color_enabled();

    let formatter = Formatter::from_config(&display_config);

    match formatter.format(result) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => eprintln!("Format error: {}", e),
    }
}

/// Clear the terminal
fn clear_screen() -> Result<()> {
    use crossterm::{
        cursor::MoveTo,
        execute,
        terminal::{Clear, ClearType},
    };

    execute!(std::io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

/// Initialize the logging system based on verbosity level
///
/// # Arguments
/// * `cli` - CLI interface with verbosity settings
fn initialize_logging(cli: &CliInterface) {
    let level = if cli.args().very_verbose {
        Level::TRACE
    } else if cli.args().verbose {
        Level::DEBUG
    } else {
        cli.config().logging.level.to_tracing_level()
    };

    // Build subscriber with level filter
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    // Configure timestamps
    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
