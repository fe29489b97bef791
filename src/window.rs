//! Rules that start, extend and end a helix or sheet around one residue.
//!
//! The narrow rules look at the residue and its two neighbours; the
//! initiation rules sum propensities over a wider window centered on the
//! candidate residue, leaving the center out.

use crate::table::{Group, Table};


/// Width of the helix initiation window.
pub const HELIX_WINDOW: usize = 13;
/// Width of the sheet initiation window.
pub const SHEET_WINDOW: usize = 11;

pub const HELIX_FORM_MIN: f64 = 8.0;
pub const HELIX_BREAK_MAX: f64 = 4.0;
pub const SHEET_FORM_MIN: f64 = 6.0;
pub const SHEET_BREAK_MAX: f64 = 4.0;

/// Proline ends any helix or sheet it sits in.
const PROLINE: u8 = b'P';

/// Uppercase sheet marker. A residue equal to it never extends a sheet.
/// It coincides with glutamate, the strongest sheet breaker.
const SHEET_MARKER: u8 = b'E';

/// Outcome of an initiation rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Initiation {
    pub fires: bool,
    /// Summed former propensity, used to settle helix/sheet conflicts.
    pub score: f64,
}

fn breaks(table: &Table, r: u8, breaker: Group, indifferent: Group) -> bool {
    table.contains(r, breaker) || table.contains(r, indifferent)
}

fn terminates(
    table: &Table,
    [prev, cur, next]: [u8; 3],
    breaker: Group,
    indifferent: Group,
) -> bool {
    table.contains(cur, breaker)
        && (breaks(table, prev, breaker, indifferent) || breaks(table, next, breaker, indifferent))
}

pub fn should_terminate_helix(table: &Table, prev: u8, cur: u8, next: u8) -> bool {
    terminates(
        table,
        [prev, cur, next],
        Group::HelixBreaker,
        Group::HelixIndifferent,
    )
}

pub fn should_terminate_sheet(table: &Table, prev: u8, cur: u8, next: u8) -> bool {
    terminates(
        table,
        [prev, cur, next],
        Group::SheetBreaker,
        Group::SheetIndifferent,
    )
}

pub fn should_continue_helix(table: &Table, prev: u8, cur: u8, next: u8) -> bool {
    cur != PROLINE && !should_terminate_helix(table, prev, cur, next)
}

pub fn should_continue_sheet(table: &Table, prev: u8, cur: u8, next: u8) -> bool {
    cur != PROLINE && cur != SHEET_MARKER && !should_terminate_sheet(table, prev, cur, next)
}

fn initiation(
    table: &Table,
    window: &[u8],
    formers: &[Group],
    breaker: Group,
    form_min: f64,
    break_max: f64,
) -> Initiation {
    let center = window.len() / 2;
    let mut sum_form = 0.0;
    let mut sum_break = 0.0;

    for (i, &r) in window.iter().enumerate() {
        if i == center {
            continue;
        }
        for &g in formers {
            sum_form += table.value_of(r, g);
        }
        sum_break += table.value_of(r, breaker);
    }

    Initiation {
        fires: sum_form >= form_min && sum_break < break_max,
        score: sum_form,
    }
}

/// Start a helix at the center of a [`HELIX_WINDOW`]-wide window.
///
/// Formers and high-indifferent residues count toward the former sum.
pub fn should_initiate_helix(table: &Table, window: &[u8]) -> Initiation {
    debug_assert_eq!(window.len(), HELIX_WINDOW);
    initiation(
        table,
        window,
        &[Group::HelixFormer, Group::HelixHighIndifferent],
        Group::HelixBreaker,
        HELIX_FORM_MIN,
        HELIX_BREAK_MAX,
    )
}

/// Start a sheet at the center of a [`SHEET_WINDOW`]-wide window.
pub fn should_initiate_sheet(table: &Table, window: &[u8]) -> Initiation {
    debug_assert_eq!(window.len(), SHEET_WINDOW);
    initiation(
        table,
        window,
        &[Group::SheetFormer],
        Group::SheetBreaker,
        SHEET_FORM_MIN,
        SHEET_BREAK_MAX,
    )
}
