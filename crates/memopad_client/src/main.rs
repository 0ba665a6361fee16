//! Memopad CLI client.
//!
//! # Responsibility
//! - Drive the client-layer flows (list, show, add, edit, rm, health) against
//!   a running memo API server.

use clap::{Parser, Subcommand};
use memopad_client::render::render_memo_list;
use memopad_client::{MemoApp, MessageKind, SubmitOutcome};
use memopad_core::{Memo, MemoId};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// Memopad REST client.
#[derive(Debug, Parser)]
#[command(name = "memopad", version, about = "Client for the Memopad note-taking server")]
struct Cli {
    /// Base URL of the memo API server.
    #[arg(long, env = "MEMOPAD_SERVER", default_value = "http://localhost:8080")]
    server: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all memos, newest first.
    List {
        /// Emit the rendered HTML fragment instead of plain text.
        #[arg(long)]
        html: bool,
    },
    /// Show one memo.
    Show { id: MemoId },
    /// Create a memo.
    Add {
        title: String,
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Update an existing memo.
    Edit {
        id: MemoId,
        #[arg(short, long)]
        title: String,
        /// New content; keeps the current content when omitted.
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Delete a memo.
    Rm {
        id: MemoId,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Check server liveness.
    Health,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut app = MemoApp::new(cli.server);

    let outcome = match cli.command {
        Command::List { html } => run_list(&mut app, html),
        Command::Show { id } => run_show(&mut app, id),
        Command::Add { title, content } => run_add(&mut app, &title, content.as_deref()),
        Command::Edit { id, title, content } => run_edit(&mut app, id, &title, content.as_deref()),
        Command::Rm { id, yes } => run_rm(&mut app, id, yes),
        Command::Health => run_health(&app),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => {
            if let Some(message) = app.take_message() {
                if message.kind == MessageKind::Error {
                    eprintln!("{}", message.text);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run_list(app: &mut MemoApp, html: bool) -> Result<(), ()> {
    let memos = app.load_memos().map_err(|_| ())?;
    if html {
        print!("{}", render_memo_list(&memos));
    } else if memos.is_empty() {
        println!("No memos yet.");
    } else {
        for memo in &memos {
            print_memo_line(memo);
        }
    }
    Ok(())
}

fn run_show(app: &mut MemoApp, id: MemoId) -> Result<(), ()> {
    let memo = app.client().get_memo(id).map_err(|err| {
        eprintln!("{err}");
    })?;
    print_memo_full(&memo);
    Ok(())
}

fn run_add(app: &mut MemoApp, title: &str, content: Option<&str>) -> Result<(), ()> {
    match app
        .submit(title, content.unwrap_or_default())
        .map_err(|_| ())?
    {
        SubmitOutcome::Created(id) => {
            println!("Created memo {id}");
            Ok(())
        }
        SubmitOutcome::RejectedEmptyTitle => Err(()),
        SubmitOutcome::Updated(_) => unreachable!("add never runs in edit mode"),
    }
}

fn run_edit(app: &mut MemoApp, id: MemoId, title: &str, content: Option<&str>) -> Result<(), ()> {
    // Fetch-and-prefill, exactly like the form flow: omitted fields keep the
    // current values.
    let current = app.begin_edit(id).map_err(|_| ())?;
    let content = content.unwrap_or(current.content.as_str());

    match app.submit(title, content).map_err(|_| ())? {
        SubmitOutcome::Updated(id) => {
            println!("Updated memo {id}");
            Ok(())
        }
        SubmitOutcome::RejectedEmptyTitle => Err(()),
        SubmitOutcome::Created(_) => unreachable!("edit always runs in edit mode"),
    }
}

fn run_rm(app: &mut MemoApp, id: MemoId, yes: bool) -> Result<(), ()> {
    if !yes && !confirm(&format!("Delete memo {id}? [y/N] ")) {
        println!("Aborted.");
        return Ok(());
    }

    app.delete_memo(id).map_err(|_| ())?;
    println!("Deleted memo {id}");
    Ok(())
}

fn run_health(app: &MemoApp) -> Result<(), ()> {
    match app.client().health() {
        Ok(health) => {
            println!("{}: {}", health.status, health.message);
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            Err(())
        }
    }
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn print_memo_line(memo: &Memo) {
    println!("[{}] {} ({})", memo.id, memo.title, memo.created_at);
}

fn print_memo_full(memo: &Memo) {
    println!("[{}] {}", memo.id, memo.title);
    if !memo.content.is_empty() {
        println!("{}", memo.content);
    }
    if memo.created_at == memo.updated_at {
        println!("Created: {}", memo.created_at);
    } else {
        println!("Created: {} | Updated: {}", memo.created_at, memo.updated_at);
    }
}
