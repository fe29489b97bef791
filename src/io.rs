//! Read and write records, weights and predictions as flat text.
//!
//! A record opens with a `<>` line and closes with an `<end>` (or `end`)
//! line. Every line in between carries a residue in its first column and,
//! for labeled data, a structure label in its third:
//!
//! ```text
//! <>
//! M _
//! E h
//! <end>
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    types::{Label, PAD_RESIDUE, PADDING, WEIGHT_COUNT, Weights},
};


/// Weights this close to one are written as `1`.
pub const ONE_EPSILON: f64 = 1e-9;

/// One padded sequence and, when every line had one, its padded labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub residues: Vec<u8>,
    pub labels: Option<Vec<Label>>,
}

impl Record {
    /// The residues without padding.
    pub fn unpadded(&self) -> &[u8] {
        self.residues
            .get(PADDING..self.residues.len().saturating_sub(PADDING))
            .unwrap_or_default()
    }
}

#[derive(Debug)]
struct Builder {
    residues: Vec<u8>,
    labels: Vec<Label>,
    labeled: bool,
}

impl Builder {
    fn new() -> Self {
        Self {
            residues: vec![PAD_RESIDUE; PADDING],
            labels: vec![Label::Pad; PADDING],
            labeled: true,
        }
    }

    fn push(&mut self, line: &[u8], line_no: usize) -> Result<()> {
        self.residues.push(line[0]);
        match line.get(2) {
            Some(&b) => {
                let label = Label::from_byte(b).ok_or(Error::UnknownLabel {
                    line: line_no,
                    found: b as char,
                })?;
                self.labels.push(label);
            }
            None => self.labeled = false,
        }
        Ok(())
    }

    fn finish(mut self) -> Record {
        self.residues.extend_from_slice(&[PAD_RESIDUE; PADDING]);
        self.labels.extend([Label::Pad; PADDING]);
        Record {
            residues: self.residues,
            labels: self.labeled.then_some(self.labels),
        }
    }
}

/// Read every record in `reader`, padded on both ends.
///
/// Lines outside a record are ignored, as are blank lines inside one. A
/// record left open at the end of input is dropped.
///
/// # Errors
///
/// I/O failures, and label columns holding anything but `h`, `e`, `_`, `z`.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut current: Option<Builder> = None;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end().as_bytes();

        if line.starts_with(b"<>") {
            current.get_or_insert_with(Builder::new);
        } else if line.starts_with(b"<end>") || line.starts_with(b"end") {
            if let Some(builder) = current.take() {
                records.push(builder.finish());
            }
        } else if let Some(builder) = current.as_mut() {
            if !line.is_empty() {
                builder.push(line, i + 1)?;
            }
        }
    }

    debug!(records = records.len(), "read records");
    Ok(records)
}

/// Split labeled records into sequences and truths, skipping the rest.
pub fn labeled(records: Vec<Record>) -> (Vec<Vec<u8>>, Vec<Vec<Label>>) {
    let count = records.len();
    let (sequences, truths): (Vec<_>, Vec<_>) = records
        .into_iter()
        .filter_map(|r| Some((r.residues, r.labels?)))
        .unzip();

    if sequences.len() != count {
        warn!(skipped = count - sequences.len(), "records without labels");
    }
    (sequences, truths)
}

/// Write one weight per line.
pub fn write_weights<W: Write>(mut writer: W, weights: &Weights) -> Result<()> {
    for w in weights.iter() {
        if (w - 1.0).abs() < ONE_EPSILON {
            writeln!(writer, "1")?;
        } else {
            writeln!(writer, "{w}")?;
        }
    }
    Ok(())
}

/// Read one weight per non-blank line.
///
/// # Errors
///
/// A line that is not a finite number, or a count other than [`WEIGHT_COUNT`].
pub fn read_weights<R: BufRead>(reader: R) -> Result<Weights> {
    let mut values = Vec::with_capacity(WEIGHT_COUNT);

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let value = line.trim();
        if value.is_empty() {
            continue;
        }

        let w = value
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite())
            .ok_or_else(|| Error::InvalidWeight {
                line: i + 1,
                value: value.to_owned(),
            })?;
        values.push(w);
    }

    let values: [f64; WEIGHT_COUNT] =
        values
            .try_into()
            .map_err(|values: Vec<f64>| Error::WeightCount {
                found: values.len(),
                expected: WEIGHT_COUNT,
            })?;
    Ok(Weights(values))
}

/// Write a record with its predicted labels, one `residue label` line each.
pub fn write_prediction<W: Write>(mut writer: W, record: &Record, labels: &[Label]) -> Result<()> {
    writeln!(writer, "<>")?;
    for (&r, l) in record.unpadded().iter().zip(labels) {
        writeln!(writer, "{} {l}", r as char)?;
    }
    writeln!(writer, "<end>")?;
    Ok(())
}

/// Write every record with its predicted labels.
pub fn write_predictions<W: Write>(
    mut writer: W,
    records: &[Record],
    predictions: &[Vec<Label>],
) -> Result<()> {
    for (record, labels) in records.iter().zip(predictions) {
        write_prediction(&mut writer, record, labels)?;
    }
    writer.flush()?;
    Ok(())
}
