//! Tests for CSV loading, pivot and dataset construction.

use std::io::Write;

use super::*;
use crate::engine::{recommend, RecommendParams};
use crate::error::Error;
use crate::similarity::cosine_similarity_matrix;

const RATINGS_CSV: &str = "\
1,Alice,10,5,881250949
1,Alice,30,3,881250950
2,Bob,10,4,881250951
2,Bob,40,2,881250952
3,Carol,20,5,881250953
3,Carol,30,4,881250954
";

const TITLES_CSV: &str = "\
item_id,title
10,Toy Story (1995)
20,GoldenEye (1995)
30,Four Rooms (1995)
40,Get Shorty (1995)
";

fn rating(user_id: u64, user_name: &str, item_id: u64, rating: f32) -> RatingRecord {
    RatingRecord {
        user_id,
        user_name: user_name.to_string(),
        item_id,
        rating,
        timestamp: None,
    }
}

#[test]
fn test_read_ratings_positional_columns() {
    let records = read_ratings(RATINGS_CSV.as_bytes()).unwrap();
    assert_eq!(records.len(), 6);
    assert_eq!(records[0].user_id, 1);
    assert_eq!(records[0].user_name, "Alice");
    assert_eq!(records[0].item_id, 10);
    assert_eq!(records[0].rating, 5.0);
    assert_eq!(records[0].timestamp, Some(881_250_949));
}

#[test]
fn test_read_ratings_without_timestamp() {
    let records = read_ratings("7,Dan,10,4\n7,Dan,20,3,\n".as_bytes()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].timestamp, None);
    assert_eq!(records[1].timestamp, None);
}

#[test]
fn test_read_ratings_malformed_row() {
    let result = read_ratings("1,Alice,ten,5,0\n".as_bytes());
    assert!(matches!(result, Err(Error::Csv(_))));
}

#[test]
fn test_read_titles() {
    let records = read_titles(TITLES_CSV.as_bytes()).unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[1].item_id, 20);
    assert_eq!(records[1].title, "GoldenEye (1995)");
}

#[test]
fn test_catalog_first_title_wins() {
    let catalog = ItemCatalog::from_records(vec![
        TitleRecord {
            item_id: 1,
            title: "First".to_string(),
        },
        TitleRecord {
            item_id: 1,
            title: "Second".to_string(),
        },
    ]);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.title(1), Some("First"));
    assert_eq!(catalog.title(2), None);
}

#[test]
fn test_pivot_sorted_axes_and_sentinel() {
    let records = vec![
        rating(3, "Carol", 20, 5.0),
        rating(1, "Alice", 30, 3.0),
        rating(1, "Alice", 10, 5.0),
    ];
    let matrix = pivot(&records).unwrap();
    assert_eq!(matrix.user_ids().collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(matrix.item_ids().collect::<Vec<_>>(), vec![10, 20, 30]);
    assert_eq!(matrix.row(0), &[5.0, 0.0, 3.0]);
    assert_eq!(matrix.row(1), &[0.0, 5.0, 0.0]);
}

#[test]
fn test_pivot_averages_duplicates() {
    let records = vec![rating(1, "Alice", 10, 4.0), rating(1, "Alice", 10, 5.0)];
    let matrix = pivot(&records).unwrap();
    assert_eq!(matrix.rating(1, 10), 4.5);
}

#[test]
fn test_pivot_empty() {
    assert!(matches!(pivot(&[]), Err(Error::EmptyDataset)));
}

#[test]
fn test_pivot_skips_non_finite_ratings() {
    let records = read_ratings(
        "1,A,10,5\n1,A,20,NaN\n2,B,10,4\n2,B,30,2\n3,C,20,5\n3,C,30,4\n".as_bytes(),
    )
    .unwrap();
    assert!(records[1].rating.is_nan());

    let matrix = pivot(&records).unwrap();
    assert_eq!(matrix.item_ids().collect::<Vec<_>>(), vec![10, 20, 30]);
    assert_eq!(matrix.row(0), &[5.0, 0.0, 0.0]);
    assert!(matrix.rows().flatten().all(|cell| cell.is_finite()));

    let similarity = cosine_similarity_matrix(&matrix).unwrap();
    for i in 0..3 {
        assert!(similarity.row(i).iter().all(|s| s.is_finite()));
    }

    // Mean over everyone: [3, 5/3, 2]; item 20 counts as unseen for user 1
    let items = recommend(&matrix, &similarity, 1, &RecommendParams::new(3, 3)).unwrap();
    assert_eq!(items, vec![30, 20]);

    // User 2 keeps itself as nearest neighbour
    let items = recommend(&matrix, &similarity, 2, &RecommendParams::new(1, 3)).unwrap();
    assert_eq!(items, vec![20]);
}

#[test]
fn test_pivot_only_non_finite_is_empty() {
    let records = vec![
        rating(1, "Alice", 10, f32::NAN),
        rating(2, "Bob", 20, f32::INFINITY),
    ];
    assert!(matches!(pivot(&records), Err(Error::EmptyDataset)));
}

#[test]
fn test_pivot_non_finite_duplicate_does_not_poison_mean() {
    let records = vec![
        rating(1, "Alice", 10, 4.0),
        rating(1, "Alice", 10, f32::NAN),
        rating(1, "Alice", 10, 2.0),
    ];
    let matrix = pivot(&records).unwrap();
    assert_eq!(matrix.rating(1, 10), 3.0);
}

#[test]
fn test_name_index_first_occurrence_wins() {
    let records = vec![
        rating(5, "Sam", 10, 1.0),
        rating(2, "Sam", 10, 1.0),
        rating(3, "Kim", 10, 1.0),
    ];
    let names = NameIndex::from_records(&records);
    assert_eq!(names.resolve("Sam").unwrap(), 5);
    assert_eq!(names.names(), vec!["Kim", "Sam"]);
    assert!(matches!(
        names.resolve("Nobody"),
        Err(Error::UserNotFound(name)) if name == "Nobody"
    ));
}

#[test]
fn test_dataset_inner_join_drops_uncatalogued_items() {
    let mut catalog = ItemCatalog::new();
    catalog.insert(10, "Toy Story (1995)");

    let records = vec![
        rating(1, "Alice", 10, 5.0),
        rating(1, "Alice", 99, 3.0),
        rating(2, "Bob", 99, 4.0),
    ];
    let dataset = Dataset::build(records, catalog).unwrap();

    assert_eq!(dataset.matrix.item_ids().collect::<Vec<_>>(), vec![10]);
    // Bob only rated an uncatalogued item and disappears with it
    assert_eq!(dataset.matrix.user_count(), 1);
    assert!(dataset.names.resolve("Bob").is_err());
}

#[test]
fn test_dataset_drops_user_with_only_non_finite_ratings() {
    let mut catalog = ItemCatalog::new();
    catalog.insert(10, "Toy Story (1995)");

    let records = vec![rating(1, "Alice", 10, 5.0), rating(2, "Bob", 10, f32::NAN)];
    let dataset = Dataset::build(records, catalog).unwrap();

    assert_eq!(dataset.matrix.user_ids().collect::<Vec<_>>(), vec![1]);
    assert!(matches!(
        dataset.names.resolve("Bob"),
        Err(Error::UserNotFound(_))
    ));
}

#[test]
fn test_dataset_everything_dropped_is_empty() {
    let records = vec![rating(1, "Alice", 99, 3.0)];
    let result = Dataset::build(records, ItemCatalog::new());
    assert!(matches!(result, Err(Error::EmptyDataset)));
}

#[test]
fn test_dataset_from_paths() {
    let dir = tempfile::tempdir().unwrap();
    let ratings_path = dir.path().join("Movie_data.csv");
    let titles_path = dir.path().join("Movie_Id_Titles.csv");
    std::fs::File::create(&ratings_path)
        .unwrap()
        .write_all(RATINGS_CSV.as_bytes())
        .unwrap();
    std::fs::File::create(&titles_path)
        .unwrap()
        .write_all(TITLES_CSV.as_bytes())
        .unwrap();

    let dataset = Dataset::from_paths(&ratings_path, &titles_path).unwrap();
    assert_eq!(dataset.matrix.user_count(), 3);
    assert_eq!(dataset.matrix.item_count(), 4);
    assert_eq!(dataset.catalog.len(), 4);
    assert_eq!(dataset.names.resolve("Carol").unwrap(), 3);
}

#[test]
fn test_dataset_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Dataset::from_paths(dir.path().join("nope.csv"), dir.path().join("nope2.csv"));
    assert!(matches!(result, Err(Error::Io(_))));
}
