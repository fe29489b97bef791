//! Walk the window rules along a padded sequence.

use crate::{
    error::{Error, Result},
    table::Table,
    types::{Label, PADDING},
    window::{
        HELIX_WINDOW, should_continue_helix, should_continue_sheet, should_initiate_helix,
        should_initiate_sheet,
    },
};


/// Label the center of a [`HELIX_WINDOW`]-wide window given the label
/// assigned to the residue before it.
///
/// 1. Test helix initiation over the whole window and sheet initiation over
///    the window without its outermost residues.
/// 2. If both fire, the lower former score is dropped. Ties keep the helix.
/// 3. Helix if initiated or continuing one, else sheet if initiated or
///    continuing one, else coil.
pub fn decide(table: &Table, window: &[u8], prev: Label) -> Label {
    debug_assert_eq!(window.len(), HELIX_WINDOW);

    let mut helix = should_initiate_helix(table, window);
    let mut sheet = should_initiate_sheet(table, &window[1..HELIX_WINDOW - 1]);

    if helix.fires && sheet.fires {
        if helix.score >= sheet.score {
            sheet.fires = false;
        } else {
            helix.fires = false;
        }
    }

    let center = HELIX_WINDOW / 2;
    let (before, cur, after) = (window[center - 1], window[center], window[center + 1]);

    if helix.fires || (prev == Label::Helix && should_continue_helix(table, before, cur, after)) {
        Label::Helix
    } else if sheet.fires
        || (prev == Label::Sheet && should_continue_sheet(table, before, cur, after))
    {
        Label::Sheet
    } else {
        Label::Coil
    }
}

/// A single pass over one padded sequence, yielding one label per residue
/// between the padding.
#[derive(Debug)]
pub struct Predictor<'a> {
    table: &'a Table,
    seq: &'a [u8],
    pos: usize,
    prev: Label,
}

impl<'a> Predictor<'a> {
    /// Fails if `seq` cannot hold padding on both ends.
    pub fn new(seq: &'a [u8], table: &'a Table) -> Result<Self> {
        if seq.len() < 2 * PADDING {
            return Err(Error::SequenceTooShort {
                len: seq.len(),
                min: 2 * PADDING,
            });
        }

        Ok(Self {
            table,
            seq,
            pos: PADDING,
            prev: Label::Coil,
        })
    }
}

impl Iterator for Predictor<'_> {
    type Item = Label;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.seq.len() - PADDING {
            return None;
        }

        let half = HELIX_WINDOW / 2;
        let window = &self.seq[self.pos - half..=self.pos + half];
        let label = decide(self.table, window, self.prev);

        self.prev = label;
        self.pos += 1;
        Some(label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.seq.len() - PADDING).saturating_sub(self.pos);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Predictor<'_> {}

/// Predict the structure of a padded sequence.
///
/// # Args
///
/// - seq: Residues with [`PADDING`] sentinels on each end
/// - table: Propensities to predict with
///
/// # Returns
///
/// - [`Vec<Label>`]: One label per residue, `seq.len() - 2 * PADDING` long
pub fn predict(seq: &[u8], table: &Table) -> Vec<Label> {
    try_predict(seq, table).expect("Sequence shorter than its padding")
}

/// A non-panicing version of [`predict`]
pub fn try_predict(seq: &[u8], table: &Table) -> Result<Vec<Label>> {
    Ok(Predictor::new(seq, table)?.collect())
}
