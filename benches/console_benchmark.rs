//! Performance benchmarks for console dispatch and blog filtering
//!
//! Run with: cargo bench

use std::path::Path;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use folio::commands::{blog, home};
use folio::console::{ConsoleSession, PromptSet};
use folio::content::{Catalog, PostFilter};
use folio::theme::{MemoryThemeStore, ThemeContext};
use folio::ui::layout_home;
use folio::ui::palette::DARK;

fn home_session(catalog: &Catalog) -> ConsoleSession {
    ConsoleSession::new(
        home::registry(&catalog.profile, Path::new("/tmp")).unwrap(),
        PromptSet::new("anjola", home::HOST),
        Duration::ZERO,
    )
}

/// Benchmark dispatching common command lines
fn bench_dispatch(c: &mut Criterion) {
    let catalog = Catalog::load_embedded().unwrap();
    let mut theme = ThemeContext::hydrate(Box::new(MemoryThemeStore::new()), None);
    let mut group = c.benchmark_group("console_dispatch");

    for line in ["help", "echo hello there", "project penguin", "nonsense"] {
        group.bench_with_input(BenchmarkId::from_parameter(line), &line, |b, line| {
            let mut session = home_session(&catalog);
            b.iter(|| {
                let outcome = session.dispatch(black_box(line), &mut theme, &catalog.projects);
                session.reset();
                outcome
            })
        });
    }

    group.finish();
}

/// Benchmark blog filtering over a padded post list
fn bench_filter(c: &mut Criterion) {
    let catalog = Catalog::load_embedded().unwrap();
    let mut group = c.benchmark_group("post_filter");

    for copies in [1, 20, 200] {
        let posts: Vec<_> = (0..copies)
            .flat_map(|_| catalog.posts.iter().cloned())
            .collect();
        let filters = [
            PostFilter::search("port"),
            PostFilter::tag("python"),
            PostFilter::All,
        ];

        group.bench_with_input(BenchmarkId::from_parameter(posts.len()), &posts, |b, posts| {
            b.iter(|| {
                filters
                    .iter()
                    .map(|filter| filter.apply(black_box(posts)).len())
                    .sum::<usize>()
            })
        });
    }

    group.finish();
}

/// Benchmark laying out the home page at several widths
fn bench_home_layout(c: &mut Criterion) {
    let catalog = Catalog::load_embedded().unwrap();
    let mut group = c.benchmark_group("home_layout");

    for width in [40usize, 80, 160] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| layout_home(black_box(&catalog), width, &DARK).lines.len())
        });
    }

    group.finish();
}

fn bench_blog_registry(c: &mut Criterion) {
    c.bench_function("blog_registry_build", |b| {
        b.iter(|| blog::registry().unwrap().len())
    });
}

criterion_group!(
    benches,
    bench_dispatch,
    bench_filter,
    bench_home_layout,
    bench_blog_registry
);
criterion_main!(benches);
