//! This bench test extracts and validates the headings of a large document
//! against a template outline with many interleaved extra sections.

#![allow(missing_docs)]

use std::fmt::Write;

use criterion::{Criterion, criterion_group, criterion_main};
use markdown_inspector::{Analyzer, Heading, Level, Outline, extract_headings};

const SECTIONS: usize = 50;

fn template() -> Outline {
    let top = Level::try_from(1_i64).unwrap();
    let section = Level::try_from(2_i64).unwrap();
    let headings = std::iter::once(Heading::new("Document", top))
        .chain((1..=SECTIONS).map(|i| Heading::new(format!("Section {i}"), section)));
    Outline::new(headings).unwrap()
}

/// Generates a document with every required section, each followed by
/// subsections and body text the outline does not mention.
fn document() -> String {
    let mut doc = String::from("# Document\n\nPreamble.\n\n");
    for i in 1..=SECTIONS {
        write!(doc, "## Section {i}\n\nBody text for section {i}.\n\n").unwrap();
        for j in 1..=10 {
            write!(doc, "### Detail {i}.{j} ###\n\nMore prose.\n\n").unwrap();
        }
    }
    doc
}

fn extract(c: &mut Criterion) {
    let doc = document();
    c.bench_function("extract headings", |b| {
        b.iter(|| extract_headings(&doc));
    });
}

fn analyze(c: &mut Criterion) {
    let doc = document();
    let analyzer = Analyzer::new(template());
    c.bench_function("analyze document", |b| {
        b.iter(|| {
            let report = analyzer.analyze_str(&doc);
            assert!(report.success());
        });
    });
}

criterion_group!(benches, extract, analyze);
criterion_main!(benches);
