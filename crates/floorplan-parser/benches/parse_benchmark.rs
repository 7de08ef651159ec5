//! Parser and layout benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use floorplan_layout::{compute_layout, LayoutOptions};
use floorplan_parser::{parse_str, parse_tree, ParseOptions};

const SIMPLE_PLAN: &str = "1(2,3)\n2(4,1)\nV\n3(6,2)\nH\n";

/// Postorder text of a balanced tree with `blocks` leaves.
fn balanced_plan(blocks: usize) -> String {
    let mut out = String::new();
    let mut pending = 0usize;
    for i in 0..blocks {
        out.push_str(&format!("{}({},{})\n", i, i % 7 + 1, i % 5 + 1));
        pending += 1;
        let mut level = i + 1;
        while level % 2 == 0 && pending >= 2 {
            out.push_str(if pending % 2 == 0 { "V\n" } else { "H\n" });
            pending -= 1;
            level /= 2;
        }
    }
    while pending > 1 {
        out.push_str("V\n");
        pending -= 1;
    }
    out
}

fn parse_simple(c: &mut Criterion) {
    c.bench_function("parse_simple", |b| b.iter(|| parse_str(black_box(SIMPLE_PLAN))));
}

fn parse_and_layout_large(c: &mut Criterion) {
    let source = balanced_plan(4096);
    let options = ParseOptions {
        max_line_len: 64,
        max_nodes: 10_000,
    };
    c.bench_function("parse_and_layout_4096", |b| {
        b.iter(|| {
            let mut tree = parse_tree(black_box(source.as_bytes()), &options).ok()?;
            compute_layout(&mut tree, &LayoutOptions::default()).ok()
        })
    });
}

criterion_group!(benches, parse_simple, parse_and_layout_large);
criterion_main!(benches);
