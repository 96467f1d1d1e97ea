// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Three subcommands: `search` to ask a question, `corpus` to see what there
//! is to find, and `explain` to see why a passage scored what it did. Every
//! command takes a JSON file holding either a profile or a prebuilt passage
//! array.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio::DEFAULT_LIMIT;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Deterministic lexical search over resume and profile facts",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a profile or corpus file and display ranked passages
    Search {
        /// Path to profile.json or a passage array
        file: PathBuf,

        /// Free-text question
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Print results as JSON instead of boxes
        #[arg(long)]
        json: bool,

        /// Show each result's score
        #[arg(long)]
        explain: bool,
    },

    /// List the passages a profile builds into
    Corpus {
        /// Path to profile.json or a passage array
        file: PathBuf,

        /// Print passages as JSON
        #[arg(long)]
        json: bool,
    },

    /// Break down how one passage scores against a query
    Explain {
        /// Path to profile.json or a passage array
        file: PathBuf,

        /// Free-text question
        query: String,

        /// Passage id (see `folio corpus`)
        id: String,
    },
}
