use gamerec_core::types::Game;

use crate::vocabulary::{Segment, Vocabularies};

/// One dense row per catalog entry, in catalog order. Row norms are cached
/// because every request divides by them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureMatrix {
    dim: usize,
    rows: Vec<Vec<f32>>,
    norms: Vec<f32>,
}

impl FeatureMatrix {
    pub(crate) fn build(vocab: &Vocabularies, games: &[Game]) -> Self {
        let dim = vocab.dim();
        let mut rows = Vec::with_capacity(games.len());
        let mut norms = Vec::with_capacity(games.len());
        for game in games {
            let row = encode_game(vocab, game);
            norms.push(l2_norm(&row));
            rows.push(row);
        }
        Self { dim, rows, norms }
    }

    /// Assemble from precomputed rows. Every row must be `dim` wide.
    pub fn from_rows(dim: usize, rows: Vec<Vec<f32>>) -> Option<Self> {
        if rows.iter().any(|r| r.len() != dim) {
            return None;
        }
        let norms = rows.iter().map(|r| l2_norm(r)).collect();
        Some(Self { dim, rows, norms })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, i: usize) -> Option<&[f32]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    pub fn norm(&self, i: usize) -> Option<f32> {
        self.norms.get(i).copied()
    }

    /// `(row, norm)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&[f32], f32)> + '_ {
        self.rows.iter().map(Vec::as_slice).zip(self.norms.iter().copied())
    }
}

/// Multi-hot modes and languages, one-hot genre.
fn encode_game(vocab: &Vocabularies, game: &Game) -> Vec<f32> {
    let mut row = vec![0.0; vocab.dim()];
    vocab.mark(Segment::Modes, game.modes.iter().map(String::as_str), &mut row);
    vocab.mark(Segment::Languages, game.languages.iter().map(String::as_str), &mut row);
    vocab.mark(Segment::Genres, std::iter::once(game.genre.as_str()), &mut row);
    row
}

pub(crate) fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}
