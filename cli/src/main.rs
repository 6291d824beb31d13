//! Degrees CLI — interactive degrees-of-separation lookup
//!
//! Loads a filmography dataset, prompts for two names, and prints the
//! shortest chain of co-starring links between them. All the interactive
//! pieces live here: the `degrees` library only ever returns candidate
//! sets and search results.

use anyhow::{bail, Context, Result};
use clap::Parser;
use degrees::{load_directory, shortest_path, NameIndex, PathResult, PersonId, RecordStore};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "degrees", version, about = "Degrees-of-separation search over a filmography dataset")]
struct Cli {
    /// Dataset directory containing people.csv, movies.csv and stars.csv
    #[arg(default_value = "large")]
    directory: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    println!("Loading data...");
    let store = load_directory(&cli.directory)
        .with_context(|| format!("loading dataset from {}", cli.directory.display()))?;
    let index = NameIndex::build(&store);
    println!("Data loaded.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let source = resolve_person(&store, &index, &mut lines)?;
    let target = resolve_person(&store, &index, &mut lines)?;

    match shortest_path(&store, &source, &target) {
        PathResult::NotConnected => println!("Not connected."),
        PathResult::Found(hops) => {
            println!("{} degrees of separation.", hops.len());
            let mut previous = source;
            for (i, hop) in hops.iter().enumerate() {
                let person1 = person_name(&store, &previous)?;
                let person2 = person_name(&store, &hop.person)?;
                let movie = store
                    .movie(&hop.movie)
                    .with_context(|| format!("movie {} missing from store", hop.movie))?;
                println!("{}: {} and {} starred in {}", i + 1, person1, person2, movie.title);
                previous = hop.person.clone();
            }
        }
    }
    Ok(())
}

/// Prompt for a name and resolve it to a single person id
///
/// Unknown names abort; ambiguous names list every candidate and ask for
/// the intended id, which must be one of the candidates.
fn resolve_person(
    store: &RecordStore,
    index: &NameIndex,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<PersonId> {
    let name = prompt("Name: ", lines)?;
    let candidates = index.resolve(&name);

    match candidates {
        [] => bail!("Person not found."),
        [only] => Ok(only.clone()),
        _ => {
            println!("Which '{}'?", name);
            for id in candidates {
                let person = store
                    .person(id)
                    .with_context(|| format!("person {id} missing from store"))?;
                let birth = person
                    .birth
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                println!("ID: {}, Name: {}, Birth: {}", id, person.name, birth);
            }
            let chosen = PersonId::new(prompt("Intended Person ID: ", lines)?);
            if candidates.contains(&chosen) {
                Ok(chosen)
            } else {
                bail!("Person not found.")
            }
        }
    }
}

fn prompt(label: &str, lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let line = lines
        .next()
        .context("unexpected end of input")?
        .context("failed to read input")?;
    Ok(line.trim().to_string())
}

fn person_name(store: &RecordStore, id: &PersonId) -> Result<String> {
    store
        .person(id)
        .map(|p| p.name.clone())
        .with_context(|| format!("person {id} missing from store"))
}
