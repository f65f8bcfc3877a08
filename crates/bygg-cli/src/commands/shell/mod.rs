//! Interactive `byggkoll shell`.
//!
//! Lines are tokenized and parsed with the clap grammar in
//! [`crate::cli::shell_commands`]. Analysis runs in a background task; its
//! outcome is reported before the next prompt once it has finished.

mod tokenize;

use std::slice;

use anyhow::Context;
use bygg_analysis::AnalysisError;
use bygg_core::entities::NewTimeEntry;
use bygg_core::enums::AnalysisState;
use clap::Parser;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use crate::cli::shell_commands::{AddArgs, ShellCommand, ShellLine};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::{analyze, entries, projects, stats};
use crate::context::Session;
use crate::output;

pub use tokenize::tokenize;

enum Flow {
    Continue,
    Quit,
}

/// Handle `byggkoll shell`.
pub async fn handle(session: &mut Session, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut editor =
        Editor::<(), DefaultHistory>::new().context("failed to initialize line editor")?;

    if !flags.quiet {
        println!("ByggKoll shell. Type 'help' for commands, 'quit' to exit.");
    }

    loop {
        if let Some(state) = session.poll_analysis().await {
            report_analysis(state, session, flags)?;
        }

        let prompt = if session.analysis_status().busy {
            "byggkoll (analyzing)> "
        } else {
            "byggkoll> "
        };
        // The analysis task keeps running on the other workers while this blocks.
        let line = tokio::task::block_in_place(|| editor.readline(prompt));

        match line {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if let Err(error) = editor.add_history_entry(line) {
                    tracing::debug!(%error, "failed to record shell history");
                }

                match run_line(line, session, flags) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Quit) => break,
                    Err(error) => eprintln!("error: {error:#}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => break,
            Err(error) => return Err(error).context("failed to read shell input"),
        }
    }

    if session.analysis_status().busy {
        tracing::info!("leaving shell with an analysis still running; its result is discarded");
    }
    Ok(())
}

fn run_line(line: &str, session: &mut Session, flags: &GlobalFlags) -> anyhow::Result<Flow> {
    let words = tokenize(line)?;
    match ShellLine::try_parse_from(&words) {
        Ok(parsed) => execute(parsed.command, session, flags),
        Err(error) => {
            // Covers `help` as well as usage errors.
            error.print().context("failed to print shell help")?;
            Ok(Flow::Continue)
        }
    }
}

fn execute(
    command: ShellCommand,
    session: &mut Session,
    flags: &GlobalFlags,
) -> anyhow::Result<Flow> {
    match command {
        ShellCommand::Add(args) => {
            let entry = new_entry(args, session.default_worker());
            let stored = session.add_entry(entry);
            entries::print_entries(slice::from_ref(&stored), session, flags)?;
        }
        ShellCommand::Remove { id } => match session.remove_entry(&id) {
            Some(removed) => println!("removed {}", removed.id),
            None => println!("no entry with id '{id}'"),
        },
        ShellCommand::List => entries::print_entries(session.store().list(), session, flags)?,
        ShellCommand::Search { term } => {
            let found = session.store().search(&term.join(" "), session.catalog());
            entries::print_entries(&found, session, flags)?;
        }
        ShellCommand::Stats => stats::handle(session, flags)?,
        ShellCommand::Projects => projects::handle(session, flags)?,
        ShellCommand::Analyze => match session.start_analysis() {
            Ok(()) => println!("analysis started; 'status' shows progress"),
            Err(AnalysisError::Busy) => println!("an analysis is already running"),
            Err(error) => return Err(error.into()),
        },
        ShellCommand::Status => print_status(session, flags)?,
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn new_entry(args: AddArgs, default_worker: &str) -> NewTimeEntry {
    NewTimeEntry {
        date: args
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
        project_id: args.project,
        hours: args.hours,
        work_type: args.work_type,
        description: args.description.join(" "),
        worker_name: args.worker.unwrap_or_else(|| default_worker.to_string()),
    }
}

fn report_analysis(
    state: AnalysisState,
    session: &Session,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match (state, session.latest_analysis()) {
        (AnalysisState::Succeeded, Some(analysis)) => {
            println!("analysis ready");
            analyze::print_analysis(analysis, flags.format)
        }
        (_, Some(_)) => {
            println!("analysis unavailable; 'status' still shows the previous result");
            Ok(())
        }
        _ => {
            println!("analysis unavailable");
            Ok(())
        }
    }
}

fn print_status(session: &Session, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = session.analysis_status();
    if flags.format != OutputFormat::Table {
        return output::output(&status, flags.format);
    }

    println!(
        "{}",
        output::render_rows(&["analysis"], &[vec![status.state.as_str().to_string()]])
    );
    if let Some(analysis) = &status.latest {
        println!();
        analyze::print_analysis(analysis, flags.format)?;
    }
    Ok(())
}
