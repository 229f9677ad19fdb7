// src/bin/main.rs
//
// Demo runner: searches a character matrix for a stream of words and prints
// the ranked results with the elapsed wall-clock time. With no argument it
// uses the built-in sample matrix; otherwise the argument is a path to a
// JSON file of the form {"matrix": [...], "wordstream": [...]}.
use crossterm::style::Stylize;
use finder_core::WordFinder;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

#[derive(Deserialize)]
struct SearchInput {
    matrix: Vec<String>,
    wordstream: Vec<String>,
}

fn sample_input() -> SearchInput {
    SearchInput {
        matrix: ["abcdc", "fgwio", "chill", "pqnsd", "uvdxy"]
            .map(String::from)
            .to_vec(),
        wordstream: ["cold", "wind", "snow", "chill"].map(String::from).to_vec(),
    }
}

fn load_input(path: &str) -> Result<SearchInput, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let input = match std::env::args().nth(1) {
        Some(path) => match load_input(&path) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("{} could not read '{}': {}", "error:".red(), path, e);
                std::process::exit(1);
            }
        },
        None => sample_input(),
    };

    let started = Instant::now();

    let finder = match WordFinder::from_rows(&input.matrix) {
        Ok(finder) => finder,
        Err(e) => {
            eprintln!("{} invalid matrix: {}", "error:".red(), e);
            std::process::exit(1);
        }
    };

    let found = finder.find_counts(&input.wordstream);
    let elapsed = started.elapsed();

    if found.is_empty() {
        println!("{}", "No words found.".dark_grey());
    } else {
        for entry in &found {
            println!("{} ({})", entry.word.as_str().green().bold(), entry.total);
        }
    }

    println!();
    println!("Time elapsed: {:?}", elapsed);
}
