use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

use gamerec_cli::{
    load_config, render_options, render_results, Cli, Command, NO_PREFERENCE_MESSAGE,
};
use gamerec_core::catalog::Catalog;
use gamerec_core::error::Error;
use gamerec_core::logging::init_tracing;
use gamerec_core::types::Preferences;
use gamerec_engine::{RecommendationEngine, SharedCatalog};
use gamerec_rank::Ranker;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config_dir.as_deref()).context("Error loading config")?;
    let settings = config.settings()?;
    init_tracing(&settings.logging.filter);

    let catalog_path = match &cli.catalog {
        Some(path) => path.clone(),
        None => config.catalog_path()?,
    };
    tracing::debug!(path = %catalog_path.display(), "using catalog");
    let catalog = Catalog::from_path(&catalog_path)
        .with_context(|| format!("loading catalog {}", catalog_path.display()))?;
    let shared = Arc::new(SharedCatalog::from_catalog(catalog).context("building feature space")?);

    match cli.command {
        Command::Options => {
            print!("{}", render_options(shared.current().space().vocabularies()));
        }
        Command::Recommend {
            modes,
            languages,
            genres,
            min_rating,
            top_k,
            json,
        } => {
            let min_rating = min_rating.unwrap_or(settings.recommend.default_min_rating);
            let prefs = Preferences::new(min_rating)
                .with_modes(modes)
                .with_languages(languages)
                .with_genres(genres);
            let ranker = Ranker::new(top_k.unwrap_or(settings.recommend.top_k));
            let engine = RecommendationEngine::new(shared, ranker);
            let results = match engine.recommend(&prefs) {
                Ok(results) => results,
                Err(Error::NoPreferenceSelected) => {
                    eprintln!("{NO_PREFERENCE_MESSAGE}");
                    std::process::exit(2);
                }
                Err(e) => return Err(e.into()),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print!("{}", render_results(&results));
            }
        }
    }
    Ok(())
}
