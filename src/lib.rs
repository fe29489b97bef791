#![doc = include_str!("../README.md")]
// #![deny(
//     clippy::all,
//     clippy::pedantic,
//     clippy::nursery,
//     future_incompatible
// )]

mod util;

pub mod error;
pub mod io;
pub mod optimize;
pub mod predict;
pub mod score;
pub mod table;
pub mod types;
pub mod window;

pub use error::{Error, Result};
pub use io::{Record, read_records, read_weights, write_predictions, write_weights};
pub use optimize::{DEFAULT_STEPS, Optimized, Search, optimize};
pub use predict::{Predictor, predict, try_predict};
pub use score::{Score, evaluate, score};
pub use table::{Group, Table, build_table};
pub use types::{Label, PAD_RESIDUE, PADDING, WEIGHT_COUNT, Weights};
