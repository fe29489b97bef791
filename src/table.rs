//! Chou-Fasman propensity constants and the weighted lookup table built from them.
//!
//! Helix and sheet propensities after:
//! Chou and Fasman, 1974
//! <https://doi.org/10.1021/bi00699a002>

use rustc_hash::FxHashMap as HashMap;

use crate::types::{WEIGHT_COUNT, Weights};

#[cfg(test)]
mod test;

/// A class of residues with respect to forming or breaking a motif.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    HelixFormer,
    HelixHighIndifferent,
    HelixBreaker,
    HelixIndifferent,
    SheetFormer,
    SheetBreaker,
    SheetIndifferent,
}

impl Group {
    pub const ALL: [Group; 7] = [
        Group::HelixFormer,
        Group::HelixHighIndifferent,
        Group::HelixBreaker,
        Group::HelixIndifferent,
        Group::SheetFormer,
        Group::SheetBreaker,
        Group::SheetIndifferent,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

/// Base propensities, one per weight coefficient and in the same order.
pub static BASE: [(Group, u8, f64); WEIGHT_COUNT] = [
    (Group::HelixFormer, b'E', 1.37),
    (Group::HelixFormer, b'A', 1.29),
    (Group::HelixFormer, b'L', 1.20),
    (Group::HelixFormer, b'H', 1.11),
    (Group::HelixFormer, b'M', 1.07),
    (Group::HelixFormer, b'Q', 1.04),
    (Group::HelixFormer, b'W', 1.02),
    (Group::HelixFormer, b'V', 1.02),
    (Group::HelixFormer, b'F', 1.00),
    (Group::HelixHighIndifferent, b'K', 0.54),
    (Group::HelixHighIndifferent, b'I', 0.50),
    (Group::HelixBreaker, b'N', 1.00),
    (Group::HelixBreaker, b'Y', 1.20),
    (Group::HelixBreaker, b'P', 1.24),
    (Group::HelixBreaker, b'G', 1.38),
    (Group::SheetFormer, b'M', 1.40),
    (Group::SheetFormer, b'V', 1.39),
    (Group::SheetFormer, b'I', 1.34),
    (Group::SheetFormer, b'C', 1.09),
    (Group::SheetFormer, b'Y', 1.08),
    (Group::SheetFormer, b'F', 1.07),
    (Group::SheetFormer, b'Q', 1.03),
    (Group::SheetFormer, b'L', 1.02),
    (Group::SheetFormer, b'T', 1.01),
    (Group::SheetFormer, b'W', 1.00),
    (Group::SheetBreaker, b'K', 1.00),
    (Group::SheetBreaker, b'S', 1.03),
    (Group::SheetBreaker, b'H', 1.04),
    (Group::SheetBreaker, b'N', 1.14),
    (Group::SheetBreaker, b'P', 1.19),
    (Group::SheetBreaker, b'E', 2.00),
];

/// Members of the helix-indifferent group. Fixed, carries no propensity.
pub static HELIX_INDIFFERENT: &[u8] = b"KIDTSRC";

/// Members of the sheet-indifferent group. Fixed, carries no propensity.
pub static SHEET_INDIFFERENT: &[u8] = b"ARGD";

/// Weighted propensities of the members of one group.
#[derive(Debug, Default, Clone)]
pub struct Propensities {
    values: HashMap<u8, f64>,
}

impl Propensities {
    pub fn get(&self, symbol: u8) -> Option<f64> {
        self.values.get(&symbol).copied()
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.values.contains_key(&symbol)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(u8, f64)> for Propensities {
    fn from_iter<T: IntoIterator<Item = (u8, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// The seven propensity groups for one weight vector.
///
/// Never mutated: a new table is built whenever the weights change.
#[derive(Debug, Clone)]
pub struct Table {
    groups: [Propensities; 7],
}

impl Table {
    /// Scale every base constant by its weight.
    pub fn build(weights: &Weights) -> Self {
        let mut groups: [Propensities; 7] = Default::default();

        for (&(group, symbol, base), weight) in BASE.iter().zip(weights.iter()) {
            groups[group.index()].values.insert(symbol, base * weight);
        }

        groups[Group::HelixIndifferent.index()] =
            HELIX_INDIFFERENT.iter().map(|&s| (s, 0.0)).collect();
        groups[Group::SheetIndifferent.index()] =
            SHEET_INDIFFERENT.iter().map(|&s| (s, 0.0)).collect();

        Self { groups }
    }

    /// The weighted propensity of `symbol` in `group`, or 0 if it is not a member.
    ///
    /// Indifferent groups always yield 0.
    pub fn value_of(&self, symbol: u8, group: Group) -> f64 {
        self.groups[group.index()].get(symbol).unwrap_or(0.0)
    }

    pub fn contains(&self, symbol: u8, group: Group) -> bool {
        self.groups[group.index()].contains(symbol)
    }

    pub fn group(&self, group: Group) -> &Propensities {
        &self.groups[group.index()]
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::build(&Weights::default())
    }
}

/// Build the table for `weights`. Same as [`Table::build`].
pub fn build_table(weights: &Weights) -> Table {
    Table::build(weights)
}
