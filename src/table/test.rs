//! Test the propensity table.

use approx::assert_relative_eq;

use super::{BASE, Group, HELIX_INDIFFERENT, SHEET_INDIFFERENT, Table, build_table};
use crate::types::{PAD_RESIDUE, WEIGHT_COUNT, Weights};

/// Unit weights reproduce the literal base constants.
#[test]
fn test_unit_weights() {
    let table = build_table(&Weights::default());

    for (group, symbol, base) in BASE {
        assert_eq!(table.value_of(symbol, group), base);
    }
}

#[test]
fn test_group_sizes() {
    let table = Table::default();
    let sizes: Vec<_> = Group::ALL.iter().map(|&g| table.group(g).len()).collect();

    assert_eq!(sizes, [9, 2, 4, 7, 10, 6, 4]);
    assert_eq!(sizes[..3].iter().sum::<usize>() + sizes[4] + sizes[5], WEIGHT_COUNT);
}

#[test]
fn test_weights_scale() {
    let mut weights = Weights::default();
    weights[0] = 2.0; // E, helix former
    weights[30] = 0.5; // E, sheet breaker
    let table = Table::build(&weights);

    assert_relative_eq!(table.value_of(b'E', Group::HelixFormer), 2.74);
    assert_relative_eq!(table.value_of(b'E', Group::SheetBreaker), 1.0);
    assert_relative_eq!(table.value_of(b'A', Group::HelixFormer), 1.29);
}

/// Non-members, padding and out-of-alphabet bytes are worth zero.
#[test]
fn test_value_of_missing() {
    let table = Table::default();

    assert_eq!(table.value_of(b'G', Group::HelixFormer), 0.0);
    assert_eq!(table.value_of(PAD_RESIDUE, Group::SheetFormer), 0.0);
    assert_eq!(table.value_of(b'#', Group::HelixBreaker), 0.0);
    assert!(!table.contains(PAD_RESIDUE, Group::HelixIndifferent));
}

#[test]
fn test_indifferent_membership() {
    let mut weights = Weights::default();
    weights.0.iter_mut().for_each(|w| *w = 3.0);
    let table = Table::build(&weights);

    for &s in HELIX_INDIFFERENT {
        assert!(table.contains(s, Group::HelixIndifferent));
        assert_eq!(table.value_of(s, Group::HelixIndifferent), 0.0);
    }
    for &s in SHEET_INDIFFERENT {
        assert!(table.contains(s, Group::SheetIndifferent));
    }
    assert!(!table.contains(b'E', Group::SheetIndifferent));
}

/// Membership does not depend on the weight value.
#[test]
fn test_zero_weight_keeps_member() {
    let mut weights = Weights::default();
    weights[13] = 0.0; // P, helix breaker
    let table = Table::build(&weights);

    assert!(table.contains(b'P', Group::HelixBreaker));
    assert_eq!(table.value_of(b'P', Group::HelixBreaker), 0.0);
}
