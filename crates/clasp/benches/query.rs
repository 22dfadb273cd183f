use clasp::{ClaspConfig, Page, parse_html};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Build a page with a repeated row structure for benchmarking.
fn build_item_page() -> String {
    let mut html = String::from("<html><body><div id=\"root\">");
    for index in 0..200 {
        html.push_str(&format!(
            "<div class=\"row\"><span class=\"item\" data-index=\"{index}\">entry</span></div>"
        ));
    }
    html.push_str("</div></body></html>");
    html
}

fn bench_class_fast_path(c: &mut Criterion) {
    let mut page = Page::from_html(&build_item_page());
    c.bench_function("query_class_fast_path", |b| {
        b.iter(|| {
            let matched = page.query_selector_all(black_box(".item")).unwrap();
            black_box(matched.len());
        })
    });
}

fn bench_descendant_memoized(c: &mut Criterion) {
    let mut page = Page::from_html(&build_item_page());
    c.bench_function("query_descendant_memoized", |b| {
        b.iter(|| {
            let matched = page.query_selector_all(black_box("div > span.item")).unwrap();
            black_box(matched.len());
        })
    });
}

fn bench_descendant_cold(c: &mut Criterion) {
    let html = build_item_page();
    let config = ClaspConfig {
        query_cache_enabled: false,
        query_fast_paths: false,
    };
    let mut page = Page::with_config(parse_html(&html), config);
    c.bench_function("query_descendant_cold", |b| {
        b.iter(|| {
            let matched = page.query_selector_all(black_box("div > span.item")).unwrap();
            black_box(matched.len());
        })
    });
}

fn bench_add_classes_reapply(c: &mut Criterion) {
    let mut page = Page::from_html(&build_item_page());
    page.add_classes(".item", &["selected"]).unwrap();
    c.bench_function("add_classes_reapply", |b| {
        b.iter(|| {
            page.add_classes(black_box(".item"), &["selected"]).unwrap();
        })
    });
}

criterion_group!(
    query_benches,
    bench_class_fast_path,
    bench_descendant_memoized,
    bench_descendant_cold,
    bench_add_classes_reapply
);
criterion_main!(query_benches);
