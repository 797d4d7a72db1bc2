//! Tests for the request façade.

use super::data::{Dataset, ItemCatalog, RatingRecord};
use super::engine::RecommendParams;
use super::error::Error;
use super::facade::*;
use super::matrix::SimilarityMatrix;

fn rating(user_id: u64, user_name: &str, item_id: u64, rating: f32) -> RatingRecord {
    RatingRecord {
        user_id,
        user_name: user_name.to_string(),
        item_id,
        rating,
        timestamp: None,
    }
}

fn dataset() -> Dataset {
    let mut catalog = ItemCatalog::new();
    catalog.insert(1, "Toy Story (1995)");
    catalog.insert(2, "GoldenEye (1995)");
    catalog.insert(3, "Four Rooms (1995)");
    catalog.insert(4, "Get Shorty (1995)");

    let ratings = vec![
        rating(1, "Alice", 1, 5.0),
        rating(1, "Alice", 3, 3.0),
        rating(2, "Bob", 1, 4.0),
        rating(2, "Bob", 4, 2.0),
        rating(3, "Carol", 2, 5.0),
        rating(3, "Carol", 3, 4.0),
    ];
    Dataset::build(ratings, catalog).unwrap()
}

fn similarity() -> SimilarityMatrix {
    SimilarityMatrix::from_rows(&[
        vec![0.5, 0.1, 0.9],
        vec![0.1, 1.0, 0.2],
        vec![0.9, 0.2, 1.0],
    ])
    .unwrap()
}

#[test]
fn test_recommend_for_name_attaches_titles() {
    let dataset = dataset();
    let similarity = similarity();
    let recommender = Recommender::new(&dataset, &similarity);

    let recs = recommender
        .recommend_for_name("Alice", &RecommendParams::new(1, 2))
        .unwrap();
    assert_eq!(
        recs,
        vec![
            TitledRecommendation {
                item_id: 2,
                title: "GoldenEye (1995)".to_string(),
            },
            TitledRecommendation {
                item_id: 4,
                title: "Get Shorty (1995)".to_string(),
            },
        ]
    );
}

#[test]
fn test_recommend_for_name_unknown() {
    let dataset = dataset();
    let similarity = similarity();
    let recommender = Recommender::new(&dataset, &similarity);

    let result = recommender.recommend_for_name("Mallory", &RecommendParams::new(1, 2));
    assert!(matches!(result, Err(Error::UserNotFound(_))));
}

#[test]
fn test_recommend_for_user_unknown_id() {
    let dataset = dataset();
    let similarity = similarity();
    let recommender = Recommender::new(&dataset, &similarity);

    let result = recommender.recommend_for_user(42, &RecommendParams::new(1, 2));
    assert!(matches!(result, Err(Error::UnknownUser(42))));
}

#[test]
fn test_user_names_sorted() {
    let dataset = dataset();
    let similarity = similarity();
    let recommender = Recommender::new(&dataset, &similarity);
    assert_eq!(recommender.user_names(), vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn test_recommendation_serializes_to_json() {
    let rec = TitledRecommendation {
        item_id: 2,
        title: "GoldenEye (1995)".to_string(),
    };
    let json = serde_json::to_value(&rec).unwrap();
    assert_eq!(json["item_id"], 2);
    assert_eq!(json["title"], "GoldenEye (1995)");
}
