use super::{Label, PAD_RESIDUE, PADDING, Weights, pad_labels, pad_residues};

#[test]
fn test_label_bytes() {
    for label in [Label::Helix, Label::Sheet, Label::Coil, Label::Pad] {
        assert_eq!(Label::from_byte(label.as_byte()), Some(label));
    }
    assert_eq!(Label::from_byte(b'H'), None);
    assert_eq!(Label::Coil.to_string(), "_");
}

#[test]
fn test_padding() {
    let padded = pad_residues(b"MKV");
    assert_eq!(padded.len(), 3 + 2 * PADDING);
    assert_eq!(padded[..PADDING], [PAD_RESIDUE; PADDING]);
    assert_eq!(&padded[PADDING..PADDING + 3], b"MKV");

    let labels = pad_labels(b"h_e").unwrap();
    assert_eq!(labels[PADDING], Label::Helix);
    assert_eq!(labels[labels.len() - 1], Label::Pad);
    assert_eq!(pad_labels(b"hx"), None);
}

#[test]
fn test_weights_display() {
    let mut weights = Weights::default();
    weights[2] = 1.1;

    let shown = weights.to_string();
    assert!(shown.starts_with("[1, 1, 1.1, 1, "));
    assert!(shown.ends_with(", 1]"));
}
