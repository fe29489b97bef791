//! Count agreement between predicted and known structures.

use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign},
};

use crate::{
    error::{Error, Result},
    predict::try_predict,
    table::Table,
    types::{Label, PADDING},
    util::round2,
};

#[cfg(test)]
mod test;

/// Residues predicted correctly out of residues compared.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub hits: usize,
    pub total: usize,
}

impl Score {
    pub const fn new(hits: usize, total: usize) -> Self {
        Self { hits, total }
    }

    /// Fraction of hits, or `None` when nothing was compared.
    pub fn rate(&self) -> Option<f64> {
        (self.total != 0).then(|| self.hits as f64 / self.total as f64)
    }

    /// [`Score::rate`] as a percentage, rounded to two decimals.
    pub fn percent(&self) -> Option<f64> {
        self.rate().map(|r| round2(r * 100.0))
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, rhs: Self) -> Self::Output {
        Score::new(self.hits + rhs.hits, self.total + rhs.total)
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Score::default(), Add::add)
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.hits, self.total)
    }
}

/// Compare `predicted[i]` against `truth[i + padding]`.
///
/// `predicted` is unpadded and `truth` keeps its padding. Only exact
/// matches count.
pub fn score(predicted: &[Label], truth: &[Label], padding: usize) -> Score {
    let total = predicted.len().min(truth.len().saturating_sub(padding));
    let hits = predicted[..total]
        .iter()
        .zip(&truth[padding.min(truth.len())..])
        .filter(|(p, t)| p == t)
        .count();

    Score::new(hits, total)
}

/// Predict every sequence with `table` and score it against its truth.
///
/// # Errors
///
/// Fails if the two lists differ in length or a sequence is shorter than
/// its padding.
pub fn evaluate<S, T>(table: &Table, sequences: &[S], truths: &[T]) -> Result<Score>
where
    S: AsRef<[u8]>,
    T: AsRef<[Label]>,
{
    if sequences.len() != truths.len() {
        return Err(Error::LengthMismatch {
            sequences: sequences.len(),
            truths: truths.len(),
        });
    }

    sequences
        .iter()
        .zip(truths)
        .map(|(seq, truth)| {
            let predicted = try_predict(seq.as_ref(), table)?;
            Ok(score(&predicted, truth.as_ref(), PADDING))
        })
        .sum()
}
