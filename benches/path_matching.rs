use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use navrouter::cache::NavigationCache;
use navrouter::deep_link::{DeepLinkParser, PathBasedParser, PathPattern};
use navrouter::route::Route;
use std::hint::black_box;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum BenchRoute {
    Screen(usize),
    Item(String),
}

impl Route for BenchRoute {
    fn key(&self) -> String {
        match self {
            BenchRoute::Screen(i) => format!("screen_{i}"),
            BenchRoute::Item(id) => format!("item_{id}"),
        }
    }
}

fn parser_with(n: usize) -> PathBasedParser<BenchRoute> {
    let mut parser = PathBasedParser::new().with_scheme("bench");
    for i in 0..n {
        parser.register(&format!("/section{i}/:id/detail"), move |_| {
            Some(vec![BenchRoute::Screen(i)])
        });
    }
    parser.register("/items/:category/:id", |params| {
        Some(vec![BenchRoute::Item(params.get("id")?.clone())])
    });
    parser
}

fn bench_pattern_match(c: &mut Criterion) {
    let pattern = PathPattern::compile("/org/:org/repo/:repo/issues/:number");
    c.bench_function("pattern_match_hit", |b| {
        b.iter(|| black_box(pattern.match_path(black_box("/org/rust/repo/cargo/issues/42"))))
    });
    c.bench_function("pattern_match_miss_length", |b| {
        b.iter(|| black_box(pattern.match_path(black_box("/org/rust/repo/cargo"))))
    });
    c.bench_function("pattern_compile", |b| {
        b.iter(|| black_box(PathPattern::compile(black_box("/org/:org/repo/:repo"))))
    });
}

fn bench_parser_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_based_parser_last_pattern");
    let url = Url::parse("bench://app/items/books/978?sort=asc").unwrap();
    for n in [10, 100, 500] {
        let parser = parser_with(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &parser, |b, parser| {
            b.iter(|| black_box(parser.parse(black_box(&url))))
        });
    }
    group.finish();
}

fn bench_cache(c: &mut Criterion) {
    let cache = NavigationCache::new(64);
    for i in 0..64 {
        cache.set(&BenchRoute::Screen(i), i);
    }
    let hit = BenchRoute::Screen(7);
    c.bench_function("navigation_cache_hit", |b| {
        b.iter(|| black_box(cache.get(black_box(&hit))))
    });
    let mut next = 64;
    c.bench_function("navigation_cache_insert_evict", |b| {
        b.iter(|| {
            next += 1;
            cache.set(&BenchRoute::Screen(next), next);
        })
    });
}

criterion_group!(benches, bench_pattern_match, bench_parser_scaling, bench_cache);
criterion_main!(benches);
