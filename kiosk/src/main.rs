use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{sleep, Instant};
use tracing::{info, warn};

use chat_core::{ConversationSession, KioskConfig, UserEvent};
use earth_corpus::FactCorpus;

mod render;

use render::{active_buttons, TranscriptPrinter};

#[derive(Parser)]
#[command(name = "terra-kiosk")]
#[command(about = "Terra - chat-style encyclopedia of planet Earth", long_about = None)]
struct Cli {
    /// TOML file with reply delays and search limits
    #[arg(long)]
    config: Option<PathBuf>,

    /// TOML file replacing the bundled corpus
    #[arg(long)]
    corpus: Option<PathBuf>,
}

/// Wake-up interval while no reply is queued.
const IDLE_WAIT: Duration = Duration::from_secs(1);

/// A line typed at the prompt.
enum Command {
    Quit,
    Reset,
    Json,
    Choose(usize),
    Text(String),
}

/// `#N` always picks a button. A bare number picks one only outside search
/// mode, where it would otherwise be a search query.
fn parse_command(line: &str, search_mode: bool) -> Option<Command> {
    let line = line.trim();
    match line {
        "" => None,
        ":quit" | ":q" => Some(Command::Quit),
        ":reset" => Some(Command::Reset),
        ":json" => Some(Command::Json),
        _ => {
            let choice = match line.strip_prefix('#') {
                Some(rest) => rest.trim(),
                None if !search_mode => line,
                None => "",
            };
            match choice.parse::<usize>() {
                Ok(n) if n > 0 => Some(Command::Choose(n)),
                _ => Some(Command::Text(line.to_string())),
            }
        }
    }
}

/// Move the session clock to the wall clock.
fn advance(session: &mut ConversationSession, last_tick: &mut Instant) -> usize {
    let now = Instant::now();
    let elapsed = now.saturating_duration_since(*last_tick);
    *last_tick = now;
    session.tick(elapsed)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => KioskConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => KioskConfig::default(),
    };
    let corpus = match &cli.corpus {
        Some(path) => FactCorpus::load(path)
            .with_context(|| format!("loading corpus from {}", path.display()))?,
        None => FactCorpus::builtin(),
    };

    let mut session = ConversationSession::new(Arc::new(corpus), config);
    info!(
        session = %session.id(),
        sections = session.corpus().section_count(),
        sub_facts = session.corpus().sub_fact_count(),
        max_results = session.config().max_results,
        "kiosk started"
    );

    let mut printer = TranscriptPrinter::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last_tick = Instant::now();

    loop {
        let wait = session.next_due_in().unwrap_or(IDLE_WAIT);
        tokio::select! {
            _ = sleep(wait) => {
                if advance(&mut session, &mut last_tick) > 0 {
                    printer.render(&session);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                advance(&mut session, &mut last_tick);
                let Some(command) = parse_command(&line, session.search_mode()) else {
                    continue;
                };

                match command {
                    Command::Quit => break,
                    Command::Reset => {
                        session.reset();
                        printer.clear();
                    }
                    Command::Json => {
                        println!("{}", session.snapshot().to_json()?);
                    }
                    Command::Choose(n) => {
                        let buttons = active_buttons(&session);
                        match buttons.get(n - 1) {
                            Some(button) => {
                                session.handle(UserEvent::button(&button.action, &button.label));
                            }
                            None => warn!(choice = n, available = buttons.len(), "no such button"),
                        }
                    }
                    Command::Text(text) => {
                        if session.handle(UserEvent::query(text)).is_none() && !session.search_mode() {
                            println!("{}", chat_core::BUTTONS_HINT.dimmed());
                        }
                    }
                }
                printer.render(&session);
            }
        }
    }

    info!(session = %session.id(), messages = session.messages().len(), "kiosk stopped");
    Ok(())
}
