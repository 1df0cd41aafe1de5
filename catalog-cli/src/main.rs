use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use clap::Parser;

use catalog_store::demo_records;

use crate::app::App;
use crate::commands::Commands;
use crate::error::AppError;
use crate::notice::{notice, Severity};

mod app;
mod commands;
mod debounce;
mod error;
mod notice;
mod render;

#[derive(Parser, Debug)]
#[clap(name = "catalog-cli")]
#[clap(about = "Browse and manage an in-memory file catalog", long_about = None)]
struct Cli {
    #[clap(
        long,
        action,
        help = "Start with an empty catalog instead of the demo records"
    )]
    no_demo: bool,
}

/// Parser for one line of shell input. `multicall` makes the first
/// token the command name, so lines read like `list --json`.
#[derive(Parser, Debug)]
#[command(multicall = true)]
struct Shell {
    #[command(subcommand)]
    command: Commands,
}

/// One turn of the event loop: a typed line, the search quiet-period
/// elapsing, or stdin closing.
enum Event {
    Line(String),
    SearchQuiet,
    Eof,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        notice(Severity::Error, &e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let (tx, rx) = mpsc::channel();

    let quiet_tx = tx.clone();
    let mut app = App::new(move || {
        let _ = quiet_tx.send(Event::SearchQuiet);
    });

    if !cli.no_demo {
        app.catalog.seed(demo_records());
    }
    render::listing(&app);

    spawn_input_thread(tx);

    prompt()?;
    while let Ok(event) = rx.recv() {
        match event {
            Event::Line(line) => {
                if handle_line(&mut app, &line) {
                    break;
                }
                prompt()?;
            }
            Event::SearchQuiet => {
                if app.apply_staged_search() {
                    render::listing(&app);
                    prompt()?;
                }
            }
            Event::Eof => break,
        }
    }

    Ok(())
}

/// Dispatch one input line. Returns true when the shell should exit.
fn handle_line(app: &mut App, line: &str) -> bool {
    let line = line.trim();

    // An armed confirmation consumes the next line as its answer.
    if let Some(id) = app.pending_delete.take() {
        if line.eq_ignore_ascii_case("y") || line.eq_ignore_ascii_case("yes") {
            if let Err(e) = app.delete(&id) {
                notice(Severity::Error, &e.to_string());
            }
        } else {
            notice(Severity::Info, "Deletion cancelled");
        }
        return false;
    }

    if line.is_empty() {
        return false;
    }

    match Shell::try_parse_from(line.split_whitespace()) {
        Ok(shell) => match shell.command {
            Commands::Quit => return true,
            command => {
                if let Err(e) = command.run(app) {
                    notice(Severity::Error, &e.to_string());
                }
            }
        },
        Err(e) => {
            // clap renders usage and help output itself
            let _ = e.print();
        }
    }

    false
}

fn spawn_input_thread(tx: mpsc::Sender<Event>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(Event::Line(line)).is_err() {
                        return;
                    }
                }
                Err(_) => break,
            }
        }
        let _ = tx.send(Event::Eof);
    });
}

fn prompt() -> Result<(), AppError> {
    print!("catalog> ");
    io::stdout().flush()?;
    Ok(())
}
