//! Residue and label alphabets shared by the predictor, scorer and readers.

use std::{
    fmt::Display,
    ops::{Index, IndexMut},
};

#[cfg(test)]
mod test;

/// Sentinels appended to each end of a record so every real residue has a
/// full window. Half the width of the widest (helix) window.
pub const PADDING: usize = 6;

/// Padding residue. Belongs to no propensity group.
pub const PAD_RESIDUE: u8 = b'Z';

/// Number of tunable propensity coefficients.
pub const WEIGHT_COUNT: usize = 31;

/// Secondary structure class of a single residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Helix,
    Sheet,
    Coil,
    /// Fills the boundary region of a record, never predicted.
    Pad,
}

impl Label {
    pub const fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'h' => Some(Label::Helix),
            b'e' => Some(Label::Sheet),
            b'_' => Some(Label::Coil),
            b'z' => Some(Label::Pad),
            _ => None,
        }
    }

    pub const fn as_byte(self) -> u8 {
        match self {
            Label::Helix => b'h',
            Label::Sheet => b'e',
            Label::Coil => b'_',
            Label::Pad => b'z',
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_byte() as char)
    }
}

/// Multipliers for the 31 base propensity constants, in table order:
/// 9 helix formers, 2 helix high-indifferent, 4 helix breakers,
/// 10 sheet formers, 6 sheet breakers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights(pub [f64; WEIGHT_COUNT]);

impl Default for Weights {
    /// All ones: the unweighted Chou-Fasman table.
    fn default() -> Self {
        Self([1.0; WEIGHT_COUNT])
    }
}

impl Weights {
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub const fn len(&self) -> usize {
        WEIGHT_COUNT
    }

    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl From<[f64; WEIGHT_COUNT]> for Weights {
    fn from(value: [f64; WEIGHT_COUNT]) -> Self {
        Self(value)
    }
}

impl Index<usize> for Weights {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for Weights {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl Display for Weights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, w) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{w}")?;
        }
        write!(f, "]")
    }
}

/// Pad a bare residue string on both ends with [`PAD_RESIDUE`].
pub fn pad_residues(residues: &[u8]) -> Vec<u8> {
    let mut padded = Vec::with_capacity(residues.len() + 2 * PADDING);
    padded.extend_from_slice(&[PAD_RESIDUE; PADDING]);
    padded.extend_from_slice(residues);
    padded.extend_from_slice(&[PAD_RESIDUE; PADDING]);
    padded
}

/// Parse a bare label string (`h`, `e`, `_`) and pad it with [`Label::Pad`].
///
/// Returns `None` if any byte is not a label.
pub fn pad_labels(labels: &[u8]) -> Option<Vec<Label>> {
    let mut padded = Vec::with_capacity(labels.len() + 2 * PADDING);
    padded.extend([Label::Pad; PADDING]);
    for &b in labels {
        padded.push(Label::from_byte(b)?);
    }
    padded.extend([Label::Pad; PADDING]);
    Some(padded)
}
