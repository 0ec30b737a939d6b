//! CLI command implementations.

use colored::Colorize;
use std::path::Path;
use tracing::info;
use wordbridge_core::{Corpus, CorpusOptions};
use wordbridge_graph::{GraphBuilder, WordGraph, WordPath};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Loads corpus options from `config`, or the defaults when absent.
pub fn load_options(config: Option<&Path>) -> Result<CorpusOptions> {
    match config {
        Some(path) => Ok(CorpusOptions::from_json_file(path)?),
        None => Ok(CorpusOptions::default()),
    }
}

/// Parses a text file and builds its word graph.
pub fn load_graph(file: &Path, options: &CorpusOptions) -> Result<WordGraph> {
    let corpus = Corpus::from_file(file, options)?;
    let graph = GraphBuilder::from_corpus(&corpus)?;

    info!(
        file = %file.display(),
        words = corpus.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded word graph"
    );
    Ok(graph)
}

/// Print the bridge words from `word1` to `word2`.
pub fn bridge(
    file: &Path,
    options: &CorpusOptions,
    word1: &str,
    word2: &str,
    json: bool,
) -> Result<()> {
    let graph = load_graph(file, options)?;
    let word1 = normalize(word1, options);
    let word2 = normalize(word2, options);
    let bridges = graph.bridges(&word1, &word2)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&bridges)?);
        return Ok(());
    }

    if bridges.is_empty() {
        println!(
            "No bridge words from {} to {}",
            word1.cyan(),
            word2.cyan()
        );
    } else {
        let list: Vec<&str> = bridges.iter().map(String::as_str).collect();
        println!(
            "Bridge words from {} to {}: {}",
            word1.cyan(),
            word2.cyan(),
            list.join(", ").green()
        );
    }

    Ok(())
}

/// Print shortest paths from `from` to `to`, or to every word when
/// `to` is omitted.
pub fn path(
    file: &Path,
    options: &CorpusOptions,
    from: &str,
    to: Option<&str>,
    all: bool,
    json: bool,
) -> Result<()> {
    let graph = load_graph(file, options)?;
    let from = normalize(from, options);

    let paths = match to {
        Some(to) => {
            let to = normalize(to, options);
            if all {
                let paths = graph.all_shortest_paths(&from, &to)?;
                if paths.is_empty() {
                    return Err(wordbridge_graph::GraphError::NoPath { from, to }.into());
                }
                paths
            } else {
                vec![graph.one_path(&from, &to)?]
            }
        }
        None => graph.shortest_paths_from(&from)?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
        return Ok(());
    }

    if paths.is_empty() {
        println!("{} No words reachable from {}", "⚠".yellow(), from.cyan());
        return Ok(());
    }

    for path in &paths {
        print_path(path);
    }
    if all && paths.len() > 1 {
        println!("{} shortest paths", paths.len().to_string().cyan());
    }

    Ok(())
}

/// Print graph statistics, or the weighted edge list as JSON.
pub fn stats(file: &Path, options: &CorpusOptions, json: bool) -> Result<()> {
    let graph = load_graph(file, options)?;

    if json {
        let export = serde_json::json!({
            "stats": graph.stats(),
            "edges": graph.edges(),
        });
        println!("{}", serde_json::to_string_pretty(&export)?);
        return Ok(());
    }

    let stats = graph.stats();
    println!("{}", "Word Graph".cyan().bold());
    println!("  Words:        {}", stats.node_count.to_string().green());
    println!("  Edges:        {}", stats.edge_count.to_string().green());
    println!("  Total weight: {}", stats.total_weight.to_string().green());

    Ok(())
}

fn print_path(path: &WordPath) {
    let words: Vec<String> = path.words.iter().map(|w| w.cyan().to_string()).collect();
    println!("{}  (weight {})", words.join(" -> "), path.weight);
}

/// Applies the same case folding to query words as to the corpus.
fn normalize(word: &str, options: &CorpusOptions) -> String {
    if options.lowercase {
        word.to_ascii_lowercase()
    } else {
        word.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn corpus_file(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", text).unwrap();
        file
    }

    #[test]
    fn test_load_graph() {
        let file = corpus_file("The cat sat on the mat.");
        let graph = load_graph(file.path(), &CorpusOptions::default()).unwrap();

        assert_eq!(graph.node_count(), 5);
        assert!(graph.index_of("the").is_some());
    }

    #[test]
    fn test_load_options_default() {
        assert_eq!(load_options(None).unwrap(), CorpusOptions::default());
    }

    #[test]
    fn test_normalize_follows_options() {
        let keep_case = CorpusOptions {
            lowercase: false,
            ..Default::default()
        };
        assert_eq!(normalize("The", &CorpusOptions::default()), "the");
        assert_eq!(normalize("The", &keep_case), "The");
    }

    #[test]
    fn test_commands_succeed() {
        let file = corpus_file("the cat sat on the mat");
        let options = CorpusOptions::default();

        bridge(file.path(), &options, "Cat", "on", false).unwrap();
        path(file.path(), &options, "cat", Some("mat"), true, true).unwrap();
        path(file.path(), &options, "cat", None, false, false).unwrap();
        stats(file.path(), &options, true).unwrap();
    }

    #[test]
    fn test_unknown_word_is_an_error() {
        let file = corpus_file("the cat sat");
        let err = bridge(file.path(), &CorpusOptions::default(), "dog", "cat", false)
            .unwrap_err();
        assert!(err.to_string().contains("dog"));
    }

    #[test]
    fn test_all_paths_unreachable_is_an_error() {
        let file = corpus_file("the cat sat");
        let err = path(
            file.path(),
            &CorpusOptions::default(),
            "sat",
            Some("the"),
            true,
            false,
        )
        .unwrap_err();
        assert!(err.to_string().contains("no path"));
    }
}
