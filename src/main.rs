// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use retort::{
    Chatbot, Config, ConfigError, ContextTracker, Lexicon, MemoryStorage, Normalizer,
    RankingEngine, Result, Session, Transcript,
};

mod cli;
use cli::display;
use cli::{Cli, Commands};

/// Messages that end a chat session.
const QUIT_COMMANDS: &[&str] = &["/exit", "/geronimo"];

/// Writes the transcript and starts the conversation over.
const SAVE_COMMAND: &str = "/save";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// `RETORT_LOG` wins; otherwise `warn`, or `debug` for this crate with `--verbose`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "warn,retort=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("RETORT_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Correct { text } => {
            let normalizer = Normalizer::new(Lexicon::from_files(&config.lexicon_paths())?);
            println!("{}", normalizer.correct_input(&text));
        }
        Commands::Topics { text } => {
            let topics = config.stop_words().extract_topics(&text);
            println!("{}", topics.join(" "));
        }
        Commands::Ask {
            question,
            tops,
            json,
        } => {
            let mut config = config;
            if let Some(tops) = tops {
                config.tops = tops;
                config.validate()?;
            }
            let bot = build_chatbot(&config, cli.corpus.as_deref(), cli.verbose)?;
            let reply = bot.respond(&question);
            if json {
                println!("{}", serde_json::to_string_pretty(&reply)?);
            } else {
                display::print_reply(&reply);
            }
        }
        Commands::Chat { no_context, memory } => {
            let bot = build_chatbot(&config, cli.corpus.as_deref(), cli.verbose)?;
            let keywords = config.keywords();
            let context = (!no_context).then(|| {
                ContextTracker::new(keywords.clone(), memory.unwrap_or(config.context_memory))
            });
            let session = Session::new(context, Transcript::new(keywords));
            run_chat(&bot, session, &config.transcript_dir)?;
        }
    }
    Ok(())
}

fn build_chatbot(
    config: &Config,
    corpus_override: Option<&Path>,
    verbose: bool,
) -> Result<Chatbot<MemoryStorage>> {
    let corpus = corpus_override
        .or(config.corpus.as_deref())
        .ok_or_else(|| ConfigError::Invalid {
            reason: "no corpus configured; set `corpus` or pass --corpus".to_string(),
        })?;

    let lexicon = Lexicon::from_files(&config.lexicon_paths())?;
    let stop_words = config.stop_words();
    let store = MemoryStorage::from_path(corpus, stop_words.clone(), config.search_limit)?;
    let engine = RankingEngine::with_similarity(
        store,
        retort::EditSimilarity,
        stop_words,
        config.engine_options(verbose),
    );

    Ok(Chatbot::with_greetings(
        Normalizer::new(lexicon),
        engine,
        config.greetings(),
    ))
}

fn run_chat(bot: &Chatbot<MemoryStorage>, mut session: Session, transcript_dir: &Path) -> Result<()> {
    info!(context = session.context().is_some(), "chat session started");
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", display::prompt());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if QUIT_COMMANDS.contains(&message) {
            break;
        }
        if message == SAVE_COMMAND {
            match session.save(transcript_dir) {
                Ok(Some(path)) => {
                    display::print_notice(&format!("Conversation saved to {}", path.display()));
                }
                Ok(None) => display::print_notice("No conversation to save."),
                Err(e) => eprintln!("❌ {}", e),
            }
            continue;
        }

        let reply = session.ask(bot, message);
        display::print_reply(&reply);
    }
    Ok(())
}
