//! CSV catalog loader.
//!
//! Expects a header row with `game_name`, `game_mode`, `language`, `genre`
//! and `rating`. Multi-value columns are comma separated (`"Single, Co-op"`).
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::{Game, MAX_RATING, MIN_RATING};

#[derive(Debug, Deserialize)]
struct CatalogRow {
    game_name: String,
    game_mode: String,
    language: String,
    genre: String,
    rating: f32,
}

/// The loaded game table. Order is the source row order and is what feature
/// matrix rows line up with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    games: Vec<Game>,
}

impl Catalog {
    pub fn new(games: Vec<Game>) -> Self {
        Self { games }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(file, path)?;
        tracing::info!(path = %path.display(), games = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::parse(reader, Path::new("<reader>"))
    }

    fn parse<R: Read>(reader: R, origin: &Path) -> Result<Self> {
        let csv_error = |source: csv::Error| Error::Csv {
            path: PathBuf::from(origin),
            source,
        };
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = rdr.headers().map_err(csv_error)?.clone();
        let mut games = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(csv_error)?;
            // quoted fields may span lines, so take the reader's position
            let line = record.position().map_or(0, csv::Position::line);
            let row: CatalogRow = record.deserialize(Some(&headers)).map_err(csv_error)?;
            games.push(row_to_game(row, line)?);
        }
        Ok(Self { games })
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn get(&self, position: usize) -> Option<&Game> {
        self.games.get(position)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Game> {
        self.games.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Game;
    type IntoIter = std::slice::Iter<'a, Game>;

    fn into_iter(self) -> Self::IntoIter {
        self.games.iter()
    }
}

fn row_to_game(row: CatalogRow, line: u64) -> Result<Game> {
    let invalid = |reason: &str| Error::InvalidRow {
        line,
        reason: reason.to_string(),
    };
    let modes = split_labels(&row.game_mode);
    if modes.is_empty() {
        return Err(invalid("game_mode is empty"));
    }
    let languages = split_labels(&row.language);
    if languages.is_empty() {
        return Err(invalid("language is empty"));
    }
    if row.genre.is_empty() {
        return Err(invalid("genre is empty"));
    }
    if !row.rating.is_finite() {
        return Err(invalid("rating is not a finite number"));
    }
    if !(MIN_RATING..=MAX_RATING).contains(&row.rating) {
        tracing::warn!(
            line,
            game = %row.game_name,
            rating = row.rating,
            "rating outside expected range"
        );
    }
    Ok(Game {
        name: row.game_name,
        modes,
        languages,
        genre: row.genre,
        rating: row.rating,
    })
}

/// Split a multi-value cell into distinct, trimmed labels, keeping first-seen order.
pub fn split_labels(cell: &str) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for part in cell.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if !labels.iter().any(|l| l == part) {
            labels.push(part.to_string());
        }
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "game_name,game_mode,language,genre,rating\n";

    #[test]
    fn split_labels_trims_and_dedups() {
        assert_eq!(
            split_labels("Single, Co-op,Single ,, "),
            vec!["Single", "Co-op"]
        );
        assert!(split_labels("  ").is_empty());
    }

    #[test]
    fn line_numbers_count_the_header() {
        let csv = format!("{HEADER}A,Single,English,Action,4.0\nB,,English,Action,3.0\n");
        let err = Catalog::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidRow { line: 3, .. }), "got {err:?}");
    }
}
