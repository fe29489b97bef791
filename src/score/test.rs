//! Test scoring against known structures.

use approx::assert_relative_eq;

use super::{Score, evaluate, score};
use crate::{
    error::Error,
    table::Table,
    types::{Label, PADDING, pad_labels, pad_residues},
};

fn labels(s: &[u8]) -> Vec<Label> {
    pad_labels(s).unwrap()
}

#[test]
fn test_score_offset() {
    let predicted = [Label::Helix, Label::Helix, Label::Coil, Label::Sheet];
    let truth = labels(b"hh_e");

    assert_eq!(score(&predicted, &truth, PADDING), Score::new(4, 4));
    assert_eq!(score(&predicted, &labels(b"h_ee"), PADDING), Score::new(2, 4));
}

/// Only the overlap is compared.
#[test]
fn test_score_lengths() {
    let predicted = [Label::Coil; 5];

    let short = &labels(b"___")[..PADDING + 3];
    assert_eq!(score(&predicted, short, PADDING), Score::new(3, 3));

    // the trailing padding is compared when predictions run past the truth
    let long = labels(b"__");
    assert_eq!(score(&predicted, &long, PADDING), Score::new(2, 5));

    assert_eq!(score(&predicted, &[Label::Pad; 4], PADDING), Score::new(0, 0));
    assert_eq!(score(&[], &labels(b"hhh"), PADDING), Score::new(0, 0));
}

#[test]
fn test_rate() {
    assert_relative_eq!(Score::new(13, 20).rate().unwrap(), 0.65);
    assert_eq!(Score::new(0, 0).rate(), None);
    assert_eq!(Score::new(0, 4).rate(), Some(0.0));
}

#[test]
fn test_percent() {
    assert_eq!(Score::new(13, 20).percent(), Some(65.0));
    assert_eq!(Score::new(1, 3).percent(), Some(33.33));
    assert_eq!(Score::new(2, 3).percent(), Some(66.67));
    assert_eq!(Score::default().percent(), None);
}

#[test]
fn test_sum() {
    let total: Score = [Score::new(8, 10), Score::new(5, 10)].into_iter().sum();

    assert_eq!(total, Score::new(13, 20));
    assert_eq!(total.to_string(), "13/20");
}

/// Poly-valine is predicted all sheet, so hits are the `e`s in the truth.
#[test]
fn test_evaluate() {
    let table = Table::default();
    let sequences = [pad_residues(&[b'V'; 10]), pad_residues(&[b'V'; 10])];
    let truths = [labels(b"eeeeeeee__"), labels(b"__hhheeeee")];

    assert_eq!(
        evaluate(&table, &sequences, &truths).unwrap(),
        Score::new(13, 20)
    );
}

#[test]
fn test_evaluate_empty() {
    let table = Table::default();
    let none: [Vec<u8>; 0] = [];
    let truths: [Vec<Label>; 0] = [];

    let total = evaluate(&table, &none, &truths).unwrap();
    assert_eq!(total, Score::default());
    assert_eq!(total.rate(), None);
}

#[test]
fn test_evaluate_mismatch() {
    let table = Table::default();
    let sequences = [pad_residues(b"MKV")];

    assert!(matches!(
        evaluate::<_, Vec<Label>>(&table, &sequences, &[]),
        Err(Error::LengthMismatch {
            sequences: 1,
            truths: 0
        })
    ));
}
