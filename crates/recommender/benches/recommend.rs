//! Benchmarks for the recommendation engine
//!
//! Run with: cargo bench --package recommender

use catalog::{AnxietySymptom, Category, Technique, TimePreference};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use recommender::{ScoreBoard, recommend_with_budget};

fn build_catalog(copies: u32) -> Vec<Technique> {
    let base = [
        ("box_breathing", Category::Breathing, 2),
        ("deep_breathing", Category::Breathing, 3),
        ("focus_word", Category::Focus, 1),
        ("visualization", Category::Visualization, 3),
        ("affirmations", Category::Affirmations, 2),
        ("body_scan", Category::Grounding, 5),
    ];

    // Padding techniques no symptom points at, to size the slug lookup
    (0..copies)
        .flat_map(|copy| {
            base.iter().enumerate().map(move |(i, (slug, category, minutes))| Technique {
                id: copy * 100 + i as u32,
                slug: if copy == 0 {
                    slug.to_string()
                } else {
                    format!("{}_{}", slug, copy)
                },
                name: slug.to_string(),
                category: *category,
                instruction: String::new(),
                duration_minutes: *minutes,
            })
        })
        .collect()
}

fn bench_recommend_small_catalog(c: &mut Criterion) {
    let catalog = build_catalog(1);

    c.bench_function("recommend_all_symptoms_small_catalog", |b| {
        b.iter(|| {
            let picks = recommend_with_budget(
                black_box(&AnxietySymptom::ALL),
                black_box(TimePreference::TenMinutes),
                black_box(&catalog),
            );
            black_box(picks)
        })
    });
}

fn bench_recommend_large_catalog(c: &mut Criterion) {
    let catalog = build_catalog(500);

    c.bench_function("recommend_all_symptoms_large_catalog", |b| {
        b.iter(|| {
            let picks = recommend_with_budget(
                black_box(&AnxietySymptom::ALL),
                black_box(TimePreference::FiveMinutes),
                black_box(&catalog),
            );
            black_box(picks)
        })
    });
}

fn bench_scoreboard(c: &mut Criterion) {
    c.bench_function("scoreboard_rank", |b| {
        b.iter(|| black_box(ScoreBoard::from_symptoms(black_box(&AnxietySymptom::ALL)).into_ranked()))
    });
}

criterion_group!(
    benches,
    bench_recommend_small_catalog,
    bench_recommend_large_catalog,
    bench_scoreboard
);
criterion_main!(benches);
