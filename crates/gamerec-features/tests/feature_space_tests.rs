use gamerec_core::catalog::Catalog;
use gamerec_core::error::Error;
use gamerec_core::traits::QueryEncoder;
use gamerec_core::types::{Game, Preferences};
use gamerec_features::{FeatureSpace, Segment};

const NONE: [&str; 0] = [];

fn game(name: &str, modes: &[&str], languages: &[&str], genre: &str, rating: f32) -> Game {
    Game {
        name: name.to_string(),
        modes: modes.iter().map(|s| s.to_string()).collect(),
        languages: languages.iter().map(|s| s.to_string()).collect(),
        genre: genre.to_string(),
        rating,
    }
}

fn sample() -> Catalog {
    Catalog::new(vec![
        game("Chess", &["Single"], &["English"], "Strategy", 4.5),
        game("Doom", &["Single", "Multiplayer"], &["English", "German"], "Action", 4.7),
        game("Catan", &["Multiplayer", "Co-op"], &["German"], "Strategy", 4.1),
    ])
}

#[test]
fn empty_catalog_cannot_build() {
    let err = FeatureSpace::build(&Catalog::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyCatalog));
}

#[test]
fn vocabularies_hold_every_label_once() {
    let space = FeatureSpace::build(&sample()).unwrap();
    let vocab = space.vocabularies();
    assert_eq!(vocab.modes.labels(), &["Co-op", "Multiplayer", "Single"]);
    assert_eq!(vocab.languages.labels(), &["English", "German"]);
    assert_eq!(vocab.genres.labels(), &["Action", "Strategy"]);
    assert_eq!(space.dim(), 7);
}

#[test]
fn every_row_has_the_shared_width_and_one_genre() {
    let catalog = sample();
    let space = FeatureSpace::build(&catalog).unwrap();
    let matrix = space.matrix();
    let genres = space.vocabularies().range(Segment::Genres);

    assert_eq!(matrix.len(), catalog.len());
    for (row, norm) in matrix.iter() {
        assert_eq!(row.len(), space.dim());
        assert_eq!(row[genres.clone()].iter().filter(|&&x| x == 1.0).count(), 1);
        assert!(norm > 0.0);
    }
}

#[test]
fn rows_follow_catalog_order_with_multi_hot_segments() {
    let space = FeatureSpace::build(&sample()).unwrap();
    // columns: Co-op, Multiplayer, Single | English, German | Action, Strategy
    assert_eq!(space.matrix().row(1).unwrap(), &[0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0]);
    assert_eq!(space.matrix().row(2).unwrap(), &[1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 1.0]);
    assert!((space.matrix().norm(1).unwrap() - 5f32.sqrt()).abs() < 1e-6);
}

#[test]
fn query_genre_block_is_multi_hot() {
    let space = FeatureSpace::build(&sample()).unwrap();
    let q = space.encode_query(["Single"], NONE, ["Action", "Strategy", "Action"]);
    assert_eq!(q.as_slice(), &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0]);
    assert_eq!(q.len(), space.dim());
}

#[test]
fn unknown_labels_encode_like_omitted_ones() {
    let space = FeatureSpace::build(&sample()).unwrap();
    let with_unknown = space.encode_query(["Single", "VR"], ["Klingon"], ["Puzzle"]);
    let without = space.encode_query(["Single"], NONE, NONE);
    assert_eq!(with_unknown, without);
}

#[test]
fn empty_query_is_all_zero() {
    let space = FeatureSpace::build(&sample()).unwrap();
    let q = space.encode_query(NONE, NONE, NONE);
    assert_eq!(q.len(), space.dim());
    assert!(q.is_zero());
    assert!(q.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn trait_encoder_matches_inherent_encoding() {
    let space = FeatureSpace::build(&sample()).unwrap();
    let prefs = Preferences::new(4.0).with_languages(["German"]).with_genres(["Strategy"]);
    assert_eq!(QueryEncoder::dim(&space), 7);
    assert_eq!(space.encode(&prefs), space.encode_preferences(&prefs).into_inner());
}
