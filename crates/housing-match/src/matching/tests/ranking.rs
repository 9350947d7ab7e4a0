use super::common::*;
use crate::matching::rank;

#[test]
fn rank_orders_by_score_descending() {
    let catalog = vec![
        agency("High rent", 900, "1-2", "No", &[]),
        agency("Good fit", 400, "1-2", "No", &[]),
    ];

    let results = rank(&engine(), &catalog, &respondent(), 3);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].agency.organization(), "Good fit");
    assert!(results[0].score > results[1].score);
}

#[test]
fn ties_preserve_catalog_order() {
    let catalog = vec![
        agency("First", 400, "1-2", "No", &[]),
        agency("Second", 400, "1-2", "No", &[]),
        agency("Third", 400, "1-2", "No", &[]),
    ];

    let results = rank(&engine(), &catalog, &respondent(), 3);

    let names: Vec<&str> = results
        .iter()
        .map(|result| result.agency.organization())
        .collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[test]
fn rank_truncates_to_top_n() {
    let catalog = vec![
        agency("A", 400, "1-2", "No", &[]),
        agency("B", 450, "1-2", "No", &[]),
        agency("C", 500, "1-2", "No", &[]),
        agency("D", 550, "1-2", "No", &[]),
    ];

    let results = rank(&engine(), &catalog, &respondent(), 2);
    assert_eq!(results.len(), 2);
}

#[test]
fn rank_never_exceeds_catalog_length() {
    let catalog = vec![agency("Only", 400, "1-2", "No", &[])];
    let results = rank(&engine(), &catalog, &respondent(), 10);
    assert_eq!(results.len(), 1);
}

#[test]
fn negative_scores_remain_eligible() {
    let mut answers = respondent();
    answers.pets = 2;

    // Expensive, wrong-sized, pet-hostile listing scores negative but is
    // still returned when the catalog has room under top_n.
    let catalog = vec![agency("Rough fit", 2000, "4-6", "No", &[])];
    let results = rank(&engine(), &catalog, &answers, 3);

    assert_eq!(results.len(), 1);
    assert!(results[0].score < 0);
}

#[test]
fn rank_is_deterministic() {
    let catalog = vec![
        agency("A", 400, "1-2", "No", &["voucher-friendly"]),
        agency("B", 450, "2-3", "Yes", &[]),
        agency("C", 900, "1-1", "No", &[]),
    ];
    let answers = unhoused_respondent();

    let first = rank(&engine(), &catalog, &answers, 3);
    let second = rank(&engine(), &catalog, &answers, 3);

    assert_eq!(first, second);
}
