// Criterion benchmarks for the MatchMate engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matchmate::core::{match_score, SessionState, StateSnapshot};
use matchmate::models::{MatchStatus, Profile, ReferencePoint};

fn create_profile(id: usize) -> Profile {
    let status = match id % 3 {
        0 => MatchStatus::Pending,
        1 => MatchStatus::Accepted,
        _ => MatchStatus::Declined,
    };

    Profile {
        id: id.to_string(),
        name: format!("User {}", id),
        age: 20 + (id % 30) as u8,
        city: if id % 2 == 0 { "Mumbai" } else { "Pune" }.to_string(),
        image_url: format!("https://example.com/{}.jpg", id),
        email: format!("user{}@example.com", id),
        education: "Bachelor's Degree".to_string(),
        profession: "Software Engineer".to_string(),
        match_score: 50,
        status,
    }
}

fn bench_match_score(c: &mut Criterion) {
    let reference = ReferencePoint::default();

    c.bench_function("match_score", |b| {
        b.iter(|| match_score(black_box(31), black_box("mumbai"), black_box(&reference)));
    });
}

fn bench_batch_scoring(c: &mut Criterion) {
    let reference = ReferencePoint::default();
    let profiles: Vec<Profile> = (0..100).map(create_profile).collect();

    c.bench_function("score_batch_100", |b| {
        b.iter(|| {
            let scores: Vec<u8> = profiles
                .iter()
                .map(|p| match_score(p.age, &p.city, &reference))
                .collect();
            black_box(scores)
        });
    });
}

fn bench_view_partitioning(c: &mut Criterion) {
    let mut group = c.benchmark_group("partitioning");

    for profile_count in [10, 100, 1000].iter() {
        let snapshot = StateSnapshot {
            session: SessionState::default(),
            profiles: (0..*profile_count).map(create_profile).collect(),
        };

        group.bench_with_input(
            BenchmarkId::new("derive_views", profile_count),
            profile_count,
            |b, _| {
                b.iter(|| {
                    let views = (
                        snapshot.pending(),
                        snapshot.accepted(),
                        snapshot.declined(),
                    );
                    black_box(views)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_match_score, bench_batch_scoring, bench_view_partitioning);

criterion_main!(benches);
