// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the retort command-line interface.
//!
//! Four subcommands: `ask` for a one-shot answer, `chat` for an interactive
//! session with keyword context, and `correct` / `topics` to inspect what the
//! pipeline does to a piece of text before ranking.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "retort",
    about = "Answer questions from previously seen conversations",
    version
)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true, default_value = "retort.yml")]
    pub config: PathBuf,

    /// Corpus file or directory (overrides `corpus` in the config)
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,

    /// Log candidate scoring (same as RETORT_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer a single question
    Ask {
        /// The question
        question: String,

        /// Maximum number of answers (overrides `tops` in the config)
        #[arg(short, long)]
        tops: Option<usize>,

        /// Print the reply as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session; `/save` writes a transcript, `/exit` or `/geronimo` quits
    Chat {
        /// Do not carry keywords from earlier questions
        #[arg(long)]
        no_context: bool,

        /// Turns a keyword stays in context (2-4, overrides the config)
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=4))]
        memory: Option<u8>,
    },

    /// Print the input after custom-term and spelling correction
    Correct {
        /// Text to correct
        text: String,
    },

    /// Print the topic tokens extracted from the input
    Topics {
        /// Text to analyze
        text: String,
    },
}
