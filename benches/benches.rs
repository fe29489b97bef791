use chou_fasman_rs::{Label, PADDING, Table, evaluate, predict, types::pad_residues};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SEQ: &[u8] = b"GSHMTTPSHLSDRYELGEILGFGGMSEVHLARDLRLHRDVAVKVLRADLARDPSFYLRFRREAQNAAALNHPAIVAVYDTGEAETPAGPLPYIVMEYVDGVTLRDIVHTEGPMTPKRAIEVIADACQALNFSHQNGIIHRDVKPANIMISATNAVKVMDFGIARAIADSGNSVTQTAAVIGTAQYLSPEQARGDSVDARSDVYSLGCVLYEVLTGEPPFTGDSPVSVAYQHVREDPIPPSARHEGLSADLDAVVLKALAKNPENRYQTAAEMRADLVRVHNGEPPEAPKVLTDAERTSLLSSAAGNLSGPR";

fn criterion_benchmark(c: &mut Criterion) {
    let table = Table::default();
    let seq = pad_residues(SEQ);

    c.bench_function("predict", |b| {
        b.iter(|| predict(black_box(&seq), black_box(&table)))
    });

    let sequences = vec![seq.clone(); 16];
    let truths: Vec<Vec<Label>> = sequences
        .iter()
        .map(|s| {
            let mut truth = vec![Label::Pad; PADDING];
            truth.extend(predict(s, &table));
            truth.extend([Label::Pad; PADDING]);
            truth
        })
        .collect();
    c.bench_function("evaluate", |b| {
        b.iter(|| evaluate(black_box(&table), black_box(&sequences), black_box(&truths)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
