use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sv_version::{Version, parse};

fn parse_with_sanitizing(c: &mut Criterion) {
    for s in ["1.82.3", "1.82.3-rc.004+build.2024-10-01", "1.82.3-r_c.!.0x+b/u.i.l.d"] {
        c.bench_function(&format!("Parse {s}"), |b| {
            b.iter(|| black_box(parse(black_box(s))))
        });
    }
}

fn construct_from_identifiers(c: &mut Criterion) {
    let ids = ["alpha", "0001", "_", "+", "linux", "x86_64"];
    c.bench_function("Construct 1.2.3 from six raw identifiers", |b| {
        b.iter(|| black_box(Version::new(1, 2, 3, black_box(ids))))
    });
}

fn rank(c: &mut Criterion) {
    // Pairs that reach the pre-release walk, each stopping at a different rule.
    let pairs = [
        ("metadata only", "1.82.0+build.1", "1.82.0+build.2"),
        ("numeric identifiers", "1.82.0-rc.9", "1.82.0-rc.10"),
        ("numeric against text", "1.82.0-alpha.1", "1.82.0-alpha.beta"),
        ("longer list ranks lower", "1.82.0-a.b.c.d.e.f", "1.82.0-a.b.c.d.e"),
    ];

    for (name, sa, sb) in pairs {
        let va = parse(sa).unwrap();
        let vb = parse(sb).unwrap();
        c.bench_function(&format!("Rank {name}: {sa} and {sb}"), |b| {
            b.iter(|| black_box(va.less_than(black_box(&vb))))
        });
    }
}

criterion_group!(benches, parse_with_sanitizing, construct_from_identifiers, rank);
criterion_main!(benches);
