use clap::Parser;
use std::path::Path;

use serde::Serialize;

use folio::{explain, load_corpus, rank, tokenize, Passage, BIGRAM_BONUS};

mod cli;
use cli::display::{
    blank_row, field_row, result_rows, row, score_value, section_bot, section_mid, section_top,
    styled, themed, truncate, BOLD, GRAY,
};
use cli::{Cli, Commands};

/// Search hit as printed by `--json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchHit<'a> {
    id: &'a str,
    title: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<&'a str>,
    score: f64,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            json,
            explain,
        } => run_search(&file, &query, limit, json, explain),
        Commands::Corpus { file, json } => run_corpus(&file, json),
        Commands::Explain { file, query, id } => run_explain(&file, &query, &id),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn load(file: &Path) -> Result<Vec<Passage>, String> {
    load_corpus(file).map_err(|e| e.to_string())
}

fn run_search(
    file: &Path,
    query: &str,
    limit: usize,
    json: bool,
    show_scores: bool,
) -> Result<(), String> {
    let corpus = load(file)?;
    let ranked = rank(query, &corpus, limit);

    if json {
        let hits: Vec<SearchHit<'_>> = ranked
            .iter()
            .map(|scored| SearchHit {
                id: &scored.passage.id,
                title: &scored.passage.title,
                text: &scored.passage.text,
                href: scored.passage.href.as_deref(),
                score: scored.score,
            })
            .collect();
        let serialized = serde_json::to_string_pretty(&hits)
            .map_err(|e| format!("Failed to serialize results: {}", e))?;
        println!("{}", serialized);
        return Ok(());
    }

    if query.trim().is_empty() {
        eprintln!("⚠️  Empty query; nothing to search for");
        return Ok(());
    }

    if ranked.is_empty() {
        eprintln!(
            "⚠️  No passages matched \"{}\" ({} searched)",
            query,
            corpus.len()
        );
        return Ok(());
    }

    section_top(&format!("RESULTS \"{}\"", truncate(query, 50)));
    for (i, scored) in ranked.iter().enumerate() {
        if i > 0 {
            blank_row();
        }
        result_rows(
            i + 1,
            &scored.passage.title,
            &scored.passage.text,
            scored.passage.href.as_deref(),
            show_scores.then_some(scored.score),
        );
    }
    section_bot();

    Ok(())
}

fn run_corpus(file: &Path, json: bool) -> Result<(), String> {
    let corpus = load(file)?;

    if json {
        let serialized = serde_json::to_string_pretty(&corpus)
            .map_err(|e| format!("Failed to serialize corpus: {}", e))?;
        println!("{}", serialized);
        return Ok(());
    }

    let placeholders = corpus.iter().filter(|p| p.is_placeholder()).count();

    section_top(&format!("CORPUS {} passages", corpus.len()));
    for passage in &corpus {
        let id = styled(&[BOLD], &format!("{:<18}", truncate(&passage.id, 18)));
        let title = if passage.is_placeholder() {
            themed(GRAY, &[], &format!("{} (empty)", truncate(&passage.title, 40)))
        } else {
            truncate(&passage.title, 50)
        };
        row(&format!("  {} {}", id, title));
    }
    section_bot();

    if placeholders > 0 {
        eprintln!(
            "⚠️  {} placeholder passage(s) have no text and will never match",
            placeholders
        );
    }

    Ok(())
}

fn run_explain(file: &Path, query: &str, id: &str) -> Result<(), String> {
    let corpus = load(file)?;
    let passage = corpus
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| format!("No passage with id '{}' in {}", id, file.display()))?;

    let breakdown = explain(query, &passage.text);
    let text_tokens = tokenize(&passage.text).len();
    let position = rank(query, &corpus, corpus.len())
        .iter()
        .position(|scored| scored.passage.id == passage.id);

    section_top(&format!("EXPLAIN {}", truncate(&passage.title, 60)));
    field_row("query tokens", &tokenize(query).join(" "));
    field_row("text tokens", &text_tokens.to_string());
    section_mid("SCORE");
    field_row("overlap", &breakdown.overlap.to_string());
    field_row(
        "bigrams",
        &format!(
            "{} × {} = {}",
            breakdown.bigram_matches, BIGRAM_BONUS, breakdown.bigram_bonus
        ),
    );
    field_row(
        "norm",
        &format!("ln(1 + {}) = {:.3}", text_tokens, breakdown.norm),
    );
    field_row("score", &score_value(breakdown.score));
    field_row(
        "rank",
        &match position {
            Some(p) => format!("{} of {}", p + 1, corpus.len()),
            None => "not ranked (score 0)".to_string(),
        },
    );
    section_bot();

    Ok(())
}
