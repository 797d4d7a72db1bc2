//! Tests for the cosine similarity provider.

use super::matrix::UserItemMatrix;
use super::similarity::*;

#[test]
fn test_cosine_identical_rows() {
    let a = [1.0, 2.0, 3.0];
    assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-6);
}

#[test]
fn test_cosine_orthogonal_rows() {
    assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 4.0]), 0.0);
}

#[test]
fn test_cosine_zero_row() {
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.0, 0.0]), 0.0);
}

#[test]
#[should_panic(expected = "Row dimensions must match")]
fn test_cosine_length_mismatch_panics() {
    let _ = cosine_similarity(&[1.0], &[1.0, 2.0]);
}

#[test]
fn test_similarity_matrix_is_aligned_and_symmetric() {
    let m = UserItemMatrix::from_rows(
        vec![7, 3, 5],
        vec![1, 2, 3, 4],
        &[
            vec![5.0, 0.0, 3.0, 0.0],
            vec![4.0, 0.0, 0.0, 2.0],
            vec![0.0, 5.0, 4.0, 0.0],
        ],
    )
    .unwrap();

    let sim = cosine_similarity_matrix(&m).unwrap();
    assert_eq!(sim.dimension(), 3);

    for i in 0..3 {
        assert!((sim.get(i, i).unwrap() - 1.0).abs() < 1e-6);
        for j in 0..3 {
            assert_eq!(sim.get(i, j), sim.get(j, i));
            let expected = cosine_similarity(m.row(i), m.row(j));
            assert!((sim.get(i, j).unwrap() - expected).abs() < 1e-6);
        }
    }

    // Rows 0 and 2 share only item 3: 12 / (sqrt(34) * sqrt(41))
    let expected = 12.0 / (34.0_f32.sqrt() * 41.0_f32.sqrt());
    assert!((sim.get(0, 2).unwrap() - expected).abs() < 1e-5);
}

#[test]
fn test_similarity_matrix_empty() {
    let m = UserItemMatrix::new(Vec::new(), Vec::new(), Vec::new()).unwrap();
    let sim = cosine_similarity_matrix(&m).unwrap();
    assert_eq!(sim.dimension(), 0);
}
