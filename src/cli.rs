//! Command-line interface: argument definitions and command handlers.
//!
//! Handlers write to any `io::Write` so the binary can hand them stdout
//! and tests can hand them a buffer.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::{
    klog_debug, Error, LanguageModelClassification, LanguageModelPrompt, Result, Task, TaskContext,
};

/// Kanso - check and render planning records for an autonomous agent
#[derive(Parser, Debug)]
#[command(name = "kanso")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    KANSO_DEBUG=1     Enable debug logging (alternative to --debug)\n    KANSO_LOG=<level> Set the log level explicitly")]
pub struct Cli {
    /// Enable debug logging (writes to ~/.kanso/kanso.log)
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate a task document and print a summary
    Task {
        /// Path to a task JSON file
        path: PathBuf,
    },

    /// Validate a task context document and print a summary
    Context {
        /// Path to a task context JSON file
        path: PathBuf,
    },

    /// Validate a prompt document and print it as sent to the model
    Prompt {
        /// Path to a prompt JSON file
        path: PathBuf,

        /// Model tier; prints the configured model name before the prompt
        #[arg(long, short = 'c', value_parser = parse_classification)]
        classification: Option<LanguageModelClassification>,
    },

    /// Print the effective configuration
    Config,
}

fn parse_classification(s: &str) -> std::result::Result<LanguageModelClassification, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

/// Run one command against `config`, writing its report to `out`.
///
/// Validation failures come back as errors; nothing is written for them.
pub fn run(command: &Command, config: &Config, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Task { path } => run_task(path, out),
        Command::Context { path } => run_context(path, out),
        Command::Prompt {
            path,
            classification,
        } => run_prompt(path, *classification, config, out),
        Command::Config => run_config(config, out),
    }
}

fn run_task(path: &Path, out: &mut impl Write) -> Result<()> {
    klog_debug!("Validating task document {}", path.display());
    let task = Task::from_json(&fs::read_to_string(path)?)?;

    let kind = task
        .task_type()
        .map(|t| t.to_string())
        .unwrap_or_else(|| "unclassified".to_string());
    writeln!(
        out,
        "{}  {:<11}  {:<12}  p={}  {}",
        task.id.short(),
        task.status(),
        kind,
        task.priority,
        task.objective
    )?;
    write_criteria(out, "ready", &task.ready_criteria)?;
    write_criteria(out, "accept", &task.acceptance_criteria)?;
    write_context(out, &task.context)
}

fn run_context(path: &Path, out: &mut impl Write) -> Result<()> {
    klog_debug!("Validating context document {}", path.display());
    let context = TaskContext::from_json(&fs::read_to_string(path)?)?;
    write_context(out, &context)
}

fn run_prompt(
    path: &Path,
    classification: Option<LanguageModelClassification>,
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    klog_debug!("Rendering prompt document {}", path.display());
    let prompt = LanguageModelPrompt::from_json(&fs::read_to_string(path)?)?;

    if let Some(classification) = classification {
        writeln!(out, "# model: {}", config.model_for(classification))?;
    }
    if !prompt.functions.is_empty() {
        let names: Vec<&str> = prompt
            .functions
            .iter()
            .map(|f| f.name().unwrap_or("<unnamed>"))
            .collect();
        writeln!(out, "# functions: {}", names.join(", "))?;
    }
    writeln!(out, "{}", prompt)?;
    Ok(())
}

fn run_config(config: &Config, out: &mut impl Write) -> Result<()> {
    write!(out, "{}", config.to_toml()?)?;
    Ok(())
}

fn write_criteria(out: &mut impl Write, label: &str, items: &[String]) -> Result<()> {
    for item in items {
        writeln!(out, "  [{}] {}", label, item)?;
    }
    Ok(())
}

fn write_context(out: &mut impl Write, context: &TaskContext) -> Result<()> {
    writeln!(
        out,
        "  status={} cycles={} enough_info={}",
        context.status, context.cycle_count, context.enough_info
    )?;
    if let Some(parent) = context.parent {
        writeln!(out, "  parent={}", parent)?;
    }
    for action in &context.prior_actions {
        let mark = if action.success { "ok" } else { "failed" };
        writeln!(out, "  [{}] {}", mark, action.summary())?;
    }
    for memory in &context.memories {
        writeln!(out, "  [memory] {}", memory.summary())?;
    }
    for input in &context.user_input {
        writeln!(out, "  [user] {}", input)?;
    }
    for info in &context.supplementary_info {
        writeln!(out, "  [info] {}", info)?;
    }
    Ok(())
}
