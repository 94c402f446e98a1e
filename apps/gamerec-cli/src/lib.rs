//! Argument parsing, config loading and text rendering for the `gamerec`
//! command line.

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::fmt::Write;
use std::path::{Path, PathBuf};

use gamerec_core::config::Config;
use gamerec_core::types::Recommendation;
use gamerec_features::{Segment, Vocabularies};

pub const NO_PREFERENCE_MESSAGE: &str = "Please select at least one preference.";
pub const NO_MATCHES_MESSAGE: &str = "No games match your criteria.";

/// Recommend games from a CSV catalog by mode, language and genre.
#[derive(Parser, Debug)]
#[command(name = "gamerec", version)]
pub struct Cli {
    /// Directory holding config.toml / config.<env>.toml
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Catalog CSV, overrides `catalog.path`
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// List the labels each preference can take
    Options,
    /// Rank the catalog against the given preferences
    Recommend {
        #[arg(long = "mode")]
        modes: Vec<String>,
        #[arg(long = "language")]
        languages: Vec<String>,
        #[arg(long = "genre")]
        genres: Vec<String>,
        /// Minimum rating, 0.0 to 5.0 (default from config)
        #[arg(long)]
        min_rating: Option<f32>,
        /// Number of results, at least 1 (default from config)
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        top_k: Option<usize>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Load config from `config_dir`, or from the working directory when absent.
pub fn load_config(config_dir: Option<&Path>) -> gamerec_core::Result<Config> {
    match config_dir {
        Some(dir) => Config::load_in(dir),
        None => Config::load(),
    }
}

/// The option lists a user can pick from, one block per category.
pub fn render_options(vocab: &Vocabularies) -> String {
    let mut out = String::new();
    let blocks = [
        ("Game modes", Segment::Modes),
        ("Languages", Segment::Languages),
        ("Genres", Segment::Genres),
    ];
    for (title, segment) in blocks {
        let _ = writeln!(out, "{title}:");
        for label in vocab.get(segment).labels() {
            let _ = writeln!(out, "  - {label}");
        }
    }
    out
}

/// Numbered result list, or the empty-state message.
pub fn render_results(results: &[Recommendation]) -> String {
    if results.is_empty() {
        return format!("{NO_MATCHES_MESSAGE}\n");
    }
    let mut out = String::from("Recommended Games\n");
    for (i, r) in results.iter().enumerate() {
        let game = &r.game;
        let _ = writeln!(out, "{}. {}", i + 1, game.name);
        let _ = writeln!(out, "   - Modes: {}", game.modes.join(", "));
        let _ = writeln!(out, "   - Languages: {}", game.languages.join(", "));
        let _ = writeln!(out, "   - Genre: {}", game.genre);
        let _ = writeln!(out, "   - Rating: {}", game.rating);
        let _ = writeln!(out, "---");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamerec_core::types::Game;
    use gamerec_features::Vocabulary;

    #[test]
    fn empty_results_render_the_no_match_message() {
        assert_eq!(render_results(&[]), "No games match your criteria.\n");
    }

    #[test]
    fn results_are_numbered_in_rank_order() {
        let chess = Game {
            name: "Chess".into(),
            modes: vec!["Single".into(), "Multiplayer".into()],
            languages: vec!["English".into()],
            genre: "Strategy".into(),
            rating: 4.5,
        };
        let out = render_results(&[Recommendation { position: 0, game: chess, score: 0.7 }]);
        assert!(out.starts_with("Recommended Games\n1. Chess\n"));
        assert!(out.contains("   - Modes: Single, Multiplayer\n"));
        assert!(out.contains("   - Rating: 4.5\n"));
    }

    #[test]
    fn options_list_every_vocabulary() {
        let vocab = Vocabularies {
            modes: Vocabulary::from_labels(["Single"]),
            languages: Vocabulary::from_labels(["English", "French"]),
            genres: Vocabulary::from_labels(["RPG"]),
        };
        let out = render_options(&vocab);
        assert_eq!(
            out,
            "Game modes:\n  - Single\nLanguages:\n  - English\n  - French\nGenres:\n  - RPG\n"
        );
    }
}
