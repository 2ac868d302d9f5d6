//! Numbered-menu front end
//!
//! A guided alternative to the shell: pick an action from a list, answer
//! prompts for each field. Backed by the same execution context and
//! handlers as the REPL.

use dialoguer::{Input, Select, theme::ColorfulTheme, theme::SimpleTheme};

use crate::error::Result;
use crate::executor::{ExecutionContext, records, reports};
use crate::formatter::Formatter;
use crate::parser::ShowKind;

const MENU_ITEMS: &[&str] = &[
    "Add target",
    "List targets",
    "Add vulnerability",
    "List vulnerabilities",
    "Exit",
];

/// Run the menu loop until the user chooses to exit
///
/// # Arguments
/// * `context` - Session context
/// * `use_colors` - Enable colored prompts and tables
pub fn run(context: &ExecutionContext, use_colors: bool) -> Result<()> {
    let formatter = Formatter::new(crate::config::OutputFormat::Table, use_colors);

    loop {
        let choice = select("Select an option", MENU_ITEMS, use_colors)?;

        let outcome = match choice {
            0 => add_target(context),
            1 => reports::show(context, ShowKind::Targets),
            2 => add_vuln(context, &formatter),
            3 => reports::show(context, ShowKind::Vulns),
            _ => break,
        };

        // A failed action is rendered and the menu continues
        match outcome {
            Ok(result) => {
                let output = formatter.format(&result)?;
                if !output.is_empty() {
                    println!("{output}");
                }
            }
            Err(e) => eprintln!("{e}"),
        }
        println!();
    }

    Ok(())
}

fn add_target(context: &ExecutionContext) -> Result<crate::executor::ExecutionResult> {
    let name: String = prompt("Target name")?;
    if name.trim().is_empty() {
        return Err("Target name cannot be empty".into());
    }
    let url: String = prompt("Target URL/IP")?;
    let kind: String = prompt("Target type (Web, Mobile, Network, IoT)")?;

    records::add_target(context, name.trim(), url.trim(), kind.trim())
}

fn add_vuln(
    context: &ExecutionContext,
    formatter: &Formatter,
) -> Result<crate::executor::ExecutionResult> {
    // Show the targets first so the user can pick an id, as the original
    // menu flow did
    let listing = reports::show(context, ShowKind::Targets)?;
    println!("{}", formatter.format(&listing)?);

    let target_id: i64 = prompt_parsed("Target id")?;
    let title: String = prompt("Vulnerability title")?;
    let severity: String = prompt("Severity (Critical, High, Medium, Low)")?;
    let cvss: f64 = prompt_parsed("CVSS score (0.0 - 10.0)")?;

    records::add_vuln(context, target_id, title.trim(), severity.trim(), cvss)
}

fn select(prompt: &str, items: &[&str], use_colors: bool) -> Result<usize> {
    let selection = if use_colors {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
    } else {
        Select::with_theme(&SimpleTheme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
    };
    selection.map_err(|e| crate::error::SeculogError::Generic(format!("Menu error: {e}")))
}

fn prompt(label: &str) -> Result<String> {
    Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| crate::error::SeculogError::Generic(format!("Input error: {e}")))
}

fn prompt_parsed<T>(label: &str) -> Result<T>
where
    T: std::str::FromStr + Clone + std::fmt::Display,
    T::Err: std::fmt::Display + std::fmt::Debug,
{
    Input::new()
        .with_prompt(label)
        .interact_text()
        .map_err(|e| crate::error::SeculogError::Generic(format!("Input error: {e}")))
}
