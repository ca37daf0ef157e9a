// benches/lookup.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use wage_finder::{
    lookup,
    model::{Dataset, Occupation, WageRecord},
};

/// Roughly one fiscal year: ~1k occupations over ~600 areas.
fn synthetic() -> Dataset {
    let areas: Vec<String> = (0..600).map(|i| format!("Area {i:03}")).collect();
    let mut occupations = Vec::new();
    let mut wages = Vec::new();
    for o in 0..1_000u32 {
        let code = format!("{:02}-{:04}", 11 + o % 40, o);
        occupations.push(Occupation::base(&code, &format!("Occupation {o:04}")));
        for a in 0..areas.len() {
            let base = 40_000 + (o * 37 + a as u32 * 113) % 60_000;
            wages.push(WageRecord {
                soc_code: code.clone(),
                area_index: a,
                l1: base,
                l2: base + 15_000,
                l3: base + 30_000,
                l4: base + 45_000,
            });
        }
    }
    Dataset { year: "2025-26".into(), occupations, areas, wages }
}

fn bench_lookup(c: &mut Criterion) {
    let ds = synthetic();
    let occ = ds.occupations[500].clone();

    c.bench_function("search_title", |b| {
        b.iter(|| black_box(lookup::search(black_box(&ds), "occupation 05")).len())
    });

    c.bench_function("bucket_one_occupation", |b| {
        b.iter(|| {
            let r = lookup::bucket(black_box(&ds), &occ, black_box(95_000.0));
            black_box(r.total)
        })
    });
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
