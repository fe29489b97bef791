//! Tune the propensity weights against labeled structures.
//!
//! Coordinate-wise hill climbing: each weight in turn is pushed up, then
//! down, by a fixed step for as long as the total number of hits strictly
//! improves. The step shrinks tenfold after every pass over the weights.
//! Every trial rebuilds the table and re-predicts the whole training set.

use tracing::{debug, info, trace};

use crate::{
    error::Result,
    predict::predict,
    score::{Score, evaluate, score},
    table::Table,
    types::{Label, PADDING, WEIGHT_COUNT, Weights},
};


/// Number of step resolutions tried by default: 0.1, 0.01 and 0.001.
pub const DEFAULT_STEPS: u32 = 3;

/// The result of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct Optimized {
    /// Best hits and the number of residues scored.
    pub score: Score,
    pub weights: Weights,
}

/// A local search over the weights of one training set.
#[derive(Debug)]
pub struct Search<'a, S, T> {
    sequences: &'a [S],
    truths: &'a [T],
    weights: Weights,
    best: Score,
}

impl<'a, S, T> Search<'a, S, T>
where
    S: AsRef<[u8]>,
    T: AsRef<[Label]>,
{
    /// Start from unit weights.
    pub fn new(sequences: &'a [S], truths: &'a [T]) -> Result<Self> {
        Self::with_weights(sequences, truths, Weights::default())
    }

    /// Start from `weights`.
    ///
    /// # Errors
    ///
    /// Fails if the training set cannot be scored at all: the lists differ in
    /// length or a sequence is shorter than its padding.
    pub fn with_weights(sequences: &'a [S], truths: &'a [T], weights: Weights) -> Result<Self> {
        let best = evaluate(&Table::build(&weights), sequences, truths)?;
        debug!(hits = best.hits, total = best.total, "initial score");

        Ok(Self {
            sequences,
            truths,
            weights,
            best,
        })
    }

    pub fn best(&self) -> Score {
        self.best
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    // the training set was validated on construction
    fn score_with(&self, weights: &Weights) -> Score {
        let table = Table::build(weights);
        self.sequences
            .iter()
            .zip(self.truths)
            .map(|(seq, truth)| score(&predict(seq.as_ref(), &table), truth.as_ref(), PADDING))
            .sum()
    }

    /// Climb along one weight, first up then down, by `step`.
    ///
    /// Returns the best score afterwards, never lower than before.
    pub fn refine(&mut self, coordinate: usize, step: f64) -> Score {
        self.best = self.score_with(&self.weights);

        for delta in [step, -step] {
            loop {
                let mut trial = self.weights;
                trial[coordinate] += delta;

                let score = self.score_with(&trial);
                if score.hits > self.best.hits {
                    debug!(
                        coordinate,
                        weight = trial[coordinate],
                        hits = score.hits,
                        "accepted"
                    );
                    self.weights = trial;
                    self.best = score;
                } else {
                    trace!(coordinate, weight = trial[coordinate], hits = score.hits, "rejected");
                    break;
                }
            }
        }

        self.best
    }

    /// Refine every weight once, in index order, at step `10^-exponent`.
    pub fn pass(&mut self, exponent: u32) -> Score {
        let step = 10f64.powi(-(exponent as i32));
        info!(step, hits = self.best.hits, total = self.best.total, "refining weights");

        for coordinate in 0..WEIGHT_COUNT {
            self.refine(coordinate, step);
        }

        self.best
    }

    /// Run passes at steps `10^-1` through `10^-step_count`.
    pub fn run(mut self, step_count: u32) -> Optimized {
        for exponent in 1..=step_count {
            self.pass(exponent);
        }

        info!(hits = self.best.hits, total = self.best.total, "optimized");
        Optimized {
            score: self.best,
            weights: self.weights,
        }
    }
}

/// Find weights that maximize the hits over a training set.
///
/// # Args
///
/// - sequences: Padded residues of each record
/// - truths: Padded known labels of each record
/// - step_count: Number of step resolutions, 10^-1 through 10^-step_count
///
/// # Returns
///
/// - [`Optimized`]: The best hits, residues scored, and the weights
///   reaching them. Unit weights if nothing improves.
pub fn optimize<S, T>(sequences: &[S], truths: &[T], step_count: u32) -> Result<Optimized>
where
    S: AsRef<[u8]>,
    T: AsRef<[Label]>,
{
    Ok(Search::new(sequences, truths)?.run(step_count))
}
