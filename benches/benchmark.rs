use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use helm_similarity::{
    fingerprint::notation_fingerprint,
    loader::parse_helm,
    monomers::MonomerStore,
    notation::Notation,
    search::{similarity_search, FingerprintMode},
};

const HELMS: [&str; 4] = [
    "RNA1{R(A)P.R(G)P.R(C)P.R(U)P}$$$$",
    "RNA1{[dR](A)[sP].[dR](G)[sP].[dR](C)[sP]}$$$$",
    "PEPTIDE1{A.G.C.[meA].F.W.K.L}$$$$",
    "RNA1{R(A)P.R(G)P}|CHEM1{[Test_m]}$CHEM1,RNA1,1:R1-1:R1$$$",
];

pub fn fingerprints(c: &mut Criterion) {
    let mut group = c.benchmark_group("fingerprints");
    let store = MonomerStore::with_defaults();

    let notations: Vec<Notation> = HELMS.iter().map(|h| parse_helm(h).unwrap()).collect();
    for (helm, notation) in HELMS.iter().zip(&notations) {
        group.bench_with_input(BenchmarkId::from_parameter(helm), notation, |b, n| {
            b.iter(|| notation_fingerprint(n, &store).unwrap());
        });
    }

    group.finish();
}

pub fn batch_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_search");
    let store = MonomerStore::with_defaults();

    // A synthetic database of single-stranded RNA variants.
    let bases = ["A", "G", "C", "U"];
    let mut database = Vec::new();
    for i in 0..256 {
        let units: Vec<String> = (0..8)
            .map(|j| format!("R({})P", bases[(i >> (j % 4)) % 4]))
            .collect();
        let helm = format!("RNA1{{{}}}$$$$", units.join("."));
        database.push((format!("mol{i}"), parse_helm(&helm).unwrap()));
    }
    let query = parse_helm(HELMS[0]).unwrap();

    for mode in [FingerprintMode::Original, FingerprintMode::Natural] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{mode:?}")),
            &mode,
            |b, &mode| {
                b.iter(|| similarity_search(&query, &database, mode, 0.0, &store).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, fingerprints, batch_search);
criterion_main!(benches);
