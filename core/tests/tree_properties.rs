use diagtree_core::{
    build_tree, optimal_tree, parse_records, Diagnoser, Diagnosis, DiagnoserError,
    MinimizeOptions, Record,
};
use rstest::{fixture, rstest};
use std::collections::HashSet;

const SYMPTOMS: [&str; 4] = ["fever", "cough", "rash", "sneezing"];

#[fixture]
fn clinic_records() -> Vec<Record> {
    let text = "\
influenza fever cough
influenza fever cough sneezing
cold cough sneezing
cold sneezing
measles fever rash
measles fever rash cough
allergy rash sneezing
healthy
healthy sneezing
";
    parse_records(text.as_bytes()).unwrap()
}

/// Every subset of `universe`, as owned symptom sets
fn all_subjects(universe: &[&str]) -> Vec<HashSet<String>> {
    (0..1u32 << universe.len())
        .map(|mask| {
            universe
                .iter()
                .enumerate()
                .filter(|&(i, _)| mask & (1 << i) != 0)
                .map(|(_, s)| s.to_string())
                .collect()
        })
        .collect()
}

fn diagnoses(diagnoser: &Diagnoser, subjects: &[HashSet<String>]) -> Vec<Diagnosis> {
    subjects
        .iter()
        .map(|subject| diagnoser.diagnose(subject).clone())
        .collect()
}

#[rstest]
fn test_build_is_deterministic(clinic_records: Vec<Record>) {
    let first = build_tree(&clinic_records, &SYMPTOMS);
    let second = build_tree(&clinic_records, &SYMPTOMS);
    assert_eq!(first, second);
}

#[rstest]
#[case(&["fever"])]
#[case(&["cough", "fever"])]
#[case(&["sneezing", "rash", "cough"])]
#[case(&SYMPTOMS)]
fn test_minimize_preserves_every_diagnosis(clinic_records: Vec<Record>, #[case] symptoms: &[&str]) {
    // include an unseen symptom to cover unknown subjects
    let mut universe = SYMPTOMS.to_vec();
    universe.push("headache");
    let subjects = all_subjects(&universe);

    let mut diagnoser = build_tree(&clinic_records, symptoms);
    let before = diagnoses(&diagnoser, &subjects);
    let size_before = diagnoser.node_count();

    diagnoser.minimize();

    assert_eq!(diagnoses(&diagnoser, &subjects), before);
    assert!(diagnoser.node_count() <= size_before);
}

#[rstest]
fn test_minimize_is_idempotent(clinic_records: Vec<Record>) {
    let mut diagnoser = build_tree(&clinic_records, &SYMPTOMS);
    diagnoser.minimize();
    let once = diagnoser.clone();
    diagnoser.minimize();
    assert_eq!(diagnoser, once);
}

#[rstest]
fn test_remove_empty_only_changes_no_finding(clinic_records: Vec<Record>) {
    let subjects = all_subjects(&SYMPTOMS);

    let mut plain = build_tree(&clinic_records, &SYMPTOMS);
    let before = diagnoses(&plain, &subjects);
    plain.minimize_with_options(MinimizeOptions::default().remove_empty(true));
    let after = diagnoses(&plain, &subjects);

    for (old, new) in before.iter().zip(&after) {
        if !old.is_no_finding() {
            assert_eq!(old, new);
        }
    }
    assert!(after.iter().all(|d| !d.is_no_finding()));
}

#[rstest]
fn test_success_rate_in_unit_interval(clinic_records: Vec<Record>) {
    for depth in 0..=SYMPTOMS.len() {
        let diagnoser = build_tree(&clinic_records, &SYMPTOMS[..depth]);
        let rate = diagnoser.calculate_success_rate(&clinic_records).unwrap();
        assert!((0.0..=1.0).contains(&rate));
    }
}

#[rstest]
fn test_minimize_keeps_success_rate(clinic_records: Vec<Record>) {
    let mut diagnoser = build_tree(&clinic_records, &SYMPTOMS);
    let before = diagnoser.calculate_success_rate(&clinic_records).unwrap();
    diagnoser.minimize();
    assert_eq!(diagnoser.calculate_success_rate(&clinic_records).unwrap(), before);
}

#[rstest]
fn test_optimal_tree_monotone_in_depth(clinic_records: Vec<Record>) {
    let mut previous = 0.0;
    for depth in 0..=SYMPTOMS.len() {
        let best = optimal_tree(&clinic_records, &SYMPTOMS, depth)
            .unwrap()
            .expect("non-empty records always produce a tree");
        assert_eq!(best.depth(), depth);

        let rate = best.calculate_success_rate(&clinic_records).unwrap();
        assert!(rate >= previous);
        previous = rate;
    }
}

#[rstest]
fn test_optimal_tree_beats_every_subset(clinic_records: Vec<Record>) {
    let best = optimal_tree(&clinic_records, &SYMPTOMS, 2).unwrap().unwrap();
    let best_rate = best.calculate_success_rate(&clinic_records).unwrap();

    for (i, first) in SYMPTOMS.iter().enumerate() {
        for second in &SYMPTOMS[i + 1..] {
            let candidate = build_tree(&clinic_records, &[*first, *second]);
            let rate = candidate.calculate_success_rate(&clinic_records).unwrap();
            assert!(rate <= best_rate);
        }
    }
}

#[rstest]
fn test_unknown_subject_never_fails(clinic_records: Vec<Record>) {
    let diagnoser = build_tree(&clinic_records, &["fever", "cough"]);
    // no fever, no cough: healthy outnumbers cold and allergy
    assert_eq!(diagnoser.diagnose(&["headache"]), "healthy");
}

#[rstest]
fn test_search_validation(clinic_records: Vec<Record>) {
    assert!(matches!(
        optimal_tree(&clinic_records, &SYMPTOMS, SYMPTOMS.len() + 1),
        Err(DiagnoserError::InvalidDepth { .. })
    ));
    assert!(matches!(
        optimal_tree(&clinic_records, &["fever", "cough", "fever"], 1),
        Err(DiagnoserError::DuplicateSymptom(ref s)) if s == "fever"
    ));
}
